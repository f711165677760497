//! Axum route handlers for the Screening API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::candidate::Candidate;
use crate::screening::shortlist;
use crate::state::AppState;
use crate::upload::UploadForm;

/// Shortlist size used when the form leaves `num_candidates` out.
const DEFAULT_SHORTLIST_SIZE: usize = 1;

#[derive(Debug, Serialize)]
pub struct ShortlistResponse {
    /// Non-empty résumés accepted for screening.
    pub uploaded: usize,
    pub candidates: Vec<Candidate>,
}

/// POST /api/v1/shortlist
///
/// Multipart fields: `job_description`, optional `num_candidates`, and one or
/// more `resumes` files. Empty file parts are ignored.
pub async fn handle_shortlist(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ShortlistResponse>, AppError> {
    let form = UploadForm::collect(multipart).await?;

    let job_description = form.text("job_description").unwrap_or_default().to_string();
    let shortlist_size = parse_shortlist_size(form.text("num_candidates"))?;
    let documents: Vec<Bytes> = form
        .files("resumes")
        .filter(|data| !data.is_empty())
        .cloned()
        .collect();
    let uploaded = documents.len();
    info!(uploaded, "{uploaded} PDF(s) uploaded");

    let extractor = state.extractor.clone();
    let candidates = tokio::task::spawn_blocking(move || {
        shortlist(
            extractor.as_ref(),
            &job_description,
            &documents,
            shortlist_size,
        )
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("screening task failed: {e}")))??;

    Ok(Json(ShortlistResponse {
        uploaded,
        candidates,
    }))
}

fn parse_shortlist_size(raw: Option<&str>) -> Result<usize, AppError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_SHORTLIST_SIZE),
        Some(value) => value.parse::<usize>().map_err(|_| {
            AppError::Validation(format!(
                "num_candidates must be a positive whole number, got '{value}'"
            ))
        }),
    }
}
