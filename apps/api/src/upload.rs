//! Multipart form parsing shared by the extraction and evaluation endpoints.

use std::io::Write;

use anyhow::Context;
use axum::extract::Multipart;
use bytes::Bytes;
use tempfile::NamedTempFile;

use crate::errors::AppError;
use crate::extraction::suffix_of;

pub const JOB_DESCRIPTION_FIELD: &str = "job_description";
pub const RESUME_FIELD: &str = "resume";

/// A file received through the form, still in memory.
#[derive(Debug)]
pub struct Upload {
    pub file_name: String,
    pub bytes: Bytes,
}

impl Upload {
    /// Suffix of the uploaded file name, dot included (e.g. `.pdf`).
    pub fn suffix(&self) -> String {
        suffix_of(&self.file_name)
    }

    /// Writes the upload to a temp file that keeps the original suffix.
    /// The file is removed when the returned handle is dropped.
    pub fn persist(&self) -> Result<NamedTempFile, AppError> {
        let mut file = tempfile::Builder::new()
            .prefix("screener-")
            .suffix(&self.suffix())
            .tempfile()
            .context("Failed to create temp file for upload")?;
        file.write_all(&self.bytes)
            .context("Failed to write upload to temp file")?;
        file.flush().context("Failed to flush upload temp file")?;
        Ok(file)
    }
}

/// Fields of the evaluation form. Unknown fields are ignored.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub job_description: Option<String>,
    pub resume: Option<Upload>,
}

impl UploadForm {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = UploadForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
        {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                JOB_DESCRIPTION_FIELD => {
                    let text = field
                        .text()
                        .await
                        .map_err(|e| AppError::Validation(format!("Invalid job description: {e}")))?;
                    form.job_description = Some(text);
                }
                RESUME_FIELD => {
                    let file_name = field.file_name().unwrap_or_default().to_string();
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| AppError::Validation(format!("Invalid resume upload: {e}")))?;
                    // An empty file input still sends a part with no name and no bytes.
                    if !file_name.is_empty() || !bytes.is_empty() {
                        form.resume = Some(Upload { file_name, bytes });
                    }
                }
                _ => {}
            }
        }

        Ok(form)
    }

    /// The resume upload, or the form's "no file" validation error.
    pub fn require_resume(&self) -> Result<&Upload, AppError> {
        self.resume
            .as_ref()
            .ok_or_else(|| AppError::Validation("Please upload a resume file.".to_string()))
    }

    /// The job description, rejected when blank.
    pub fn require_job_description(&self) -> Result<&str, AppError> {
        self.job_description
            .as_deref()
            .filter(|jd| !jd.trim().is_empty())
            .ok_or_else(|| AppError::Validation("Please enter a job description.".to_string()))
    }
}
