use std::panic;

use super::TextExtractor;

/// PDF backend built on `pdf-extract`. Pages are emitted in document order.
///
/// `pdf-extract` panics on some well-formed but inconsistent documents (for
/// example a content stream naming a font the page resources lack). Those
/// panics are caught here and reported like any other unreadable file.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, String> {
        match panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes)) {
            Ok(result) => result.map_err(|e| e.to_string()),
            Err(payload) => {
                let reason = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown failure".to_string());
                tracing::warn!("PDF backend panicked: {reason}");
                Err(format!("unreadable PDF: {reason}"))
            }
        }
    }
}
