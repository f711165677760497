//! Multipart form collection shared by the upload handlers.

use std::collections::HashMap;

use axum::extract::Multipart;
use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

/// A fully-read multipart form: text fields by name, file parts in arrival order.
///
/// A repeated text field keeps its last value. File parts are identified by
/// the presence of a filename, matching what browsers send for `<input type=file>`.
#[derive(Debug, Default)]
pub struct UploadForm {
    fields: HashMap<String, String>,
    files: Vec<(String, Bytes)>,
}

impl UploadForm {
    pub async fn collect(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = UploadForm::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            if field.file_name().is_some() {
                let data = field.bytes().await?;
                debug!(field = %name, bytes = data.len(), "Received file part");
                form.files.push((name, data));
            } else {
                let text = field.text().await?;
                form.fields.insert(name, text);
            }
        }

        Ok(form)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// All file parts uploaded under `name`, in upload order.
    pub fn files<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Bytes> + 'a {
        self.files
            .iter()
            .filter(move |(field, _)| field == name)
            .map(|(_, data)| data)
    }

    pub fn require_file<'a>(&'a self, name: &'a str) -> Result<&'a Bytes, AppError> {
        self.files(name)
            .next()
            .ok_or_else(|| AppError::Validation(format!("Missing file field '{name}'")))
    }
}
