use std::sync::Arc;

use crate::config::Config;
use crate::extraction::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data: every request builds its own candidates and tables.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable document backend. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}
