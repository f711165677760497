//! Query Filter — answers a single kind of free-text question about an
//! uploaded candidate table: "at least N years of experience".

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;
use crate::query::table::CandidateTable;

pub const UNPARSED_QUERY: &str =
    "Could not parse the number of years. Please enter a valid query.";
pub const UNRECOGNIZED_QUERY: &str =
    "Query not recognized. Try asking for 'years of experience'.";

// ASCII digits only; `\d` would also take digits from other scripts.
static INTEGER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+").expect("valid integer pattern"));

/// What a free-text query asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryIntent {
    MinimumExperience(u64),
    /// Mentions years but carries no usable number.
    MissingYears,
    Unrecognized,
}

/// Result shown to the user. Diagnostics are ordinary values, not errors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QueryOutcome {
    Filtered {
        years: u64,
        message: String,
        table: CandidateTable,
    },
    Unparsed {
        message: String,
    },
    Unrecognized {
        message: String,
    },
}

/// "years" anywhere (case-insensitive) selects the experience filter; the
/// first run of digits is the threshold.
pub fn interpret_query(query: &str) -> QueryIntent {
    if !query.to_lowercase().contains("years") {
        return QueryIntent::Unrecognized;
    }

    INTEGER_RE
        .find(query)
        .and_then(|m| m.as_str().parse::<u64>().ok())
        .map(QueryIntent::MinimumExperience)
        .unwrap_or(QueryIntent::MissingYears)
}

/// Runs `query` against `table`.
///
/// Only a recognised experience query touches the table, so a CSV without an
/// `Experience` column still yields the textual diagnostics.
pub fn run_query(table: &CandidateTable, query: &str) -> Result<QueryOutcome, AppError> {
    let years = match interpret_query(query) {
        QueryIntent::MinimumExperience(years) => years,
        QueryIntent::MissingYears => {
            return Ok(QueryOutcome::Unparsed {
                message: UNPARSED_QUERY.to_string(),
            })
        }
        QueryIntent::Unrecognized => {
            return Ok(QueryOutcome::Unrecognized {
                message: UNRECOGNIZED_QUERY.to_string(),
            })
        }
    };

    let threshold = years as f64;
    let keep: Vec<bool> = table
        .experience()?
        .into_iter()
        .map(|exp| exp.is_some_and(|e| e >= threshold))
        .collect();
    let filtered = table.retain_rows(&keep);
    debug!(years, matched = filtered.rows.len(), "Filtered candidate table");

    Ok(QueryOutcome::Filtered {
        years,
        message: format!("Candidates with {years}+ years of experience:"),
        table: filtered,
    })
}
