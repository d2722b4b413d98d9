//! Document Text Extractor: turns an uploaded resume into plain text.
//!
//! Supported formats: PDF, DOCX and plain text. Extraction is all-or-nothing:
//! the caller gets the whole text or one `ExtractionError` whose message is
//! safe to show to the user as-is. Parsing failures never escape as anything else.

use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use tracing::info;

mod docx;
pub mod handlers;
mod pdf;
mod text;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Error: Unsupported file type")]
    UnsupportedFormat,

    #[error("Error processing file: {0}")]
    Failure(String),
}

/// Declared format of a source document, resolved from its file suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Text,
}

impl DocumentFormat {
    /// Resolves `.pdf`, `.docx` or `.txt` (case-insensitive, dot optional).
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        let suffix = suffix.trim().trim_start_matches('.');
        match suffix.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "txt" => Some(Self::Text),
            _ => None,
        }
    }
}

/// Returns the suffix of `file_name` including the dot, or an empty string.
pub fn suffix_of(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default()
}

/// Extracts the text of the file at `path`, parsed according to `declared_suffix`.
///
/// An unsupported suffix is rejected before the file is touched.
pub fn extract(path: &Path, declared_suffix: &str) -> Result<String, ExtractionError> {
    let format =
        DocumentFormat::from_suffix(declared_suffix).ok_or(ExtractionError::UnsupportedFormat)?;

    let result = match format {
        DocumentFormat::Pdf => pdf::extract_pdf(path),
        DocumentFormat::Docx => docx::extract_docx(path),
        DocumentFormat::Text => text::extract_text(path),
    };

    let text = result.map_err(|e| ExtractionError::Failure(format!("{e:#}")))?;
    info!(
        "Extracted {} chars from {:?} document",
        text.chars().count(),
        format
    );
    Ok(text)
}

/// Runs `extract` on the blocking pool. A panic inside a parser surfaces as
/// `ExtractionError::Failure` instead of tearing down the request.
pub async fn extract_file(
    path: impl AsRef<Path>,
    declared_suffix: &str,
) -> Result<String, ExtractionError> {
    let path = path.as_ref().to_path_buf();
    let suffix = declared_suffix.to_string();

    tokio::task::spawn_blocking(move || extract(&path, &suffix))
        .await
        .map_err(|e| ExtractionError::Failure(format!("parser aborted: {e}")))?
}
