//! Axum route handlers for the Extraction API.

use axum::{extract::Multipart, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::extraction::{extract_file, DocumentFormat};
use crate::upload::UploadForm;

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub file_name: String,
    pub format: Option<DocumentFormat>,
    pub text: String,
}

/// POST /api/v1/resumes/extract
///
/// Extracts the uploaded `resume` field and returns its plain text.
/// Lets the caller preview what the evaluators will see.
pub async fn handle_extract(multipart: Multipart) -> Result<Json<ExtractResponse>, AppError> {
    let form = UploadForm::from_multipart(multipart).await?;
    let upload = form.require_resume()?;

    let suffix = upload.suffix();
    let temp = upload.persist()?;
    let text = extract_file(temp.path(), &suffix).await?;

    Ok(Json(ExtractResponse {
        file_name: upload.file_name.clone(),
        format: DocumentFormat::from_suffix(&suffix),
        text,
    }))
}
