use serde::Serialize;

use crate::errors::AppError;

/// Column the experience filter reads.
pub const EXPERIENCE_COLUMN: &str = "Experience";

/// An uploaded CSV held as strings, header row separated from data rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CandidateTable {
    /// Parses CSV bytes. The first record is the header row and every data
    /// row must have the same number of fields.
    pub fn from_csv(bytes: &[u8]) -> Result<Self, AppError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(bytes);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| AppError::Table(e.to_string()))?
            .iter()
            .map(String::from)
            .collect();
        if headers.is_empty() {
            return Err(AppError::Table("No columns to parse from file".to_string()));
        }

        let rows = reader
            .records()
            .map(|record| {
                record
                    .map(|r| r.iter().map(String::from).collect::<Vec<_>>())
                    .map_err(|e| AppError::Table(e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { headers, rows })
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Experience per row, in row order. Blank cells are `None`.
    pub fn experience(&self) -> Result<Vec<Option<f64>>, AppError> {
        let idx = self.column_index(EXPERIENCE_COLUMN).ok_or_else(|| {
            AppError::Table(format!("missing '{EXPERIENCE_COLUMN}' column"))
        })?;

        self.rows
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                let cell = cells[idx].trim();
                if cell.is_empty() {
                    return Ok(None);
                }
                cell.parse::<f64>().map(Some).map_err(|_| {
                    AppError::Table(format!(
                        "'{EXPERIENCE_COLUMN}' must be numeric, row {} has '{cell}'",
                        row + 1
                    ))
                })
            })
            .collect()
    }

    /// A table with the same headers and only the rows `keep` selects.
    pub fn retain_rows(&self, keep: &[bool]) -> Self {
        Self {
            headers: self.headers.clone(),
            rows: self
                .rows
                .iter()
                .zip(keep)
                .filter(|(_, &k)| k)
                .map(|(row, _)| row.clone())
                .collect(),
        }
    }
}
