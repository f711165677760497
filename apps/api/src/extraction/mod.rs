//! Text Extractor — turns uploaded document bytes into plain text.
//!
//! `AppState` holds an `Arc<dyn TextExtractor>` so the HTTP layer does not
//! care which document format backs it. Production uses `PdfTextExtractor`.

pub mod pdf;

use thiserror::Error;
use tracing::{debug, warn};

pub use pdf::PdfTextExtractor;

/// A document in a batch could not be turned into text.
/// `index` is the zero-based position of the document within the batch.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Error processing PDF #{}: {message}", .index + 1)]
pub struct ExtractionError {
    pub index: usize,
    pub message: String,
}

/// Converts one document's raw bytes into a single plain-text string.
pub trait TextExtractor: Send + Sync {
    /// Returns the underlying cause on failure; the caller attaches the batch position.
    fn extract(&self, bytes: &[u8]) -> Result<String, String>;
}

/// Extracts every document in upload order.
///
/// Fail-fast: the first unparseable document aborts the batch and no texts
/// are returned, even for documents that were already processed.
pub fn extract_batch<D>(
    extractor: &dyn TextExtractor,
    documents: &[D],
) -> Result<Vec<String>, ExtractionError>
where
    D: AsRef<[u8]>,
{
    let mut texts = Vec::with_capacity(documents.len());

    for (index, document) in documents.iter().enumerate() {
        match extractor.extract(document.as_ref()) {
            Ok(text) => {
                debug!(index, chars = text.len(), "Extracted document text");
                texts.push(text);
            }
            Err(message) => {
                warn!(index, %message, "Aborting batch on extraction failure");
                return Err(ExtractionError { index, message });
            }
        }
    }

    Ok(texts)
}
