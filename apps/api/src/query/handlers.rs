//! Axum route handlers for the candidate table API.

use axum::{extract::Multipart, Json};
use tracing::info;

use crate::errors::AppError;
use crate::query::filter::{run_query, QueryOutcome};
use crate::query::table::CandidateTable;
use crate::upload::UploadForm;

/// POST /api/v1/candidates/table
///
/// Parses the uploaded `csv` file and echoes it back as a table.
pub async fn handle_table_preview(multipart: Multipart) -> Result<Json<CandidateTable>, AppError> {
    let form = UploadForm::collect(multipart).await?;
    let table = CandidateTable::from_csv(form.require_file("csv")?)?;
    info!(rows = table.rows.len(), "Loaded candidate table");
    Ok(Json(table))
}

/// POST /api/v1/candidates/query
///
/// Multipart fields: `csv` file and `query` text. An unrecognised or
/// unparseable query is still a 200 carrying the diagnostic message.
pub async fn handle_query(multipart: Multipart) -> Result<Json<QueryOutcome>, AppError> {
    let form = UploadForm::collect(multipart).await?;
    let table = CandidateTable::from_csv(form.require_file("csv")?)?;
    let query = form.text("query").unwrap_or_default();

    let outcome = run_query(&table, query)?;
    info!(query, rows = table.rows.len(), "Answered candidate query");
    Ok(Json(outcome))
}
