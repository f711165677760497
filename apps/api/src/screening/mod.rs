// Résumé screening: field parsing, skill matching and ranking against a job description.
// Everything here is synchronous; handlers move the work onto a blocking thread.

pub mod fields;
pub mod handlers;
pub mod ranker;
pub mod skills;

use tracing::info;

use crate::errors::AppError;
use crate::extraction::{extract_batch, TextExtractor};
use crate::models::candidate::Candidate;

/// Full pipeline for one request: validate, extract every document, rank.
///
/// Input problems are reported before any document is touched, and a single
/// unreadable document fails the whole batch.
pub fn shortlist<D>(
    extractor: &dyn TextExtractor,
    job_description: &str,
    documents: &[D],
    shortlist_size: usize,
) -> Result<Vec<Candidate>, AppError>
where
    D: AsRef<[u8]>,
{
    if job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "Please provide a job description before submitting.".to_string(),
        ));
    }
    if shortlist_size == 0 {
        return Err(AppError::Validation(
            "Number of candidates must be at least 1".to_string(),
        ));
    }
    if documents.is_empty() {
        return Err(AppError::Validation(
            "Please upload at least one resume".to_string(),
        ));
    }

    info!(documents = documents.len(), shortlist_size, "Screening batch");
    let texts = extract_batch(extractor, documents)?;
    ranker::rank_candidates(job_description, &texts, shortlist_size)
}
