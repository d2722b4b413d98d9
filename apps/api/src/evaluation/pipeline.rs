//! Evaluation pipeline: builds the request payload and hands it to the hiring team.
//!
//! Flow: EvaluationRequest (resume truncated) → hiring_team() → TeamRunner → EvaluationReport.
//! The report text is the model's answer verbatim; no verdict field is parsed here.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::evaluation::agents::hiring_team;
use crate::evaluation::team::TeamRunner;

/// Resume text beyond this many characters is dropped before sending.
pub const MAX_RESUME_CHARS: usize = 10_000;

/// Job description plus resume text, truncated once at construction.
#[derive(Debug, Clone)]
pub struct EvaluationRequest {
    job_description: String,
    resume_text: String,
}

impl EvaluationRequest {
    pub fn new(job_description: &str, resume_text: &str) -> Self {
        Self {
            job_description: job_description.to_string(),
            resume_text: truncate_chars(resume_text, MAX_RESUME_CHARS).to_string(),
        }
    }

    pub fn resume_text(&self) -> &str {
        &self.resume_text
    }

    /// The single text payload the team works from.
    pub fn payload(&self) -> String {
        format!(
            "JOB DESCRIPTION:\n{}\n\nCANDIDATE RESUME:\n{}",
            self.job_description, self.resume_text
        )
    }
}

/// One finished evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub id: Uuid,
    pub content: String,
    pub model: String,
    pub generated_at: DateTime<Utc>,
}

/// Runs the hiring team over one job description / resume pair.
///
/// Model failures are not recovered here; they surface as `AppError::Llm`.
pub async fn evaluate(
    runner: &dyn TeamRunner,
    job_description: &str,
    resume_text: &str,
) -> Result<EvaluationReport, AppError> {
    let request = EvaluationRequest::new(job_description, resume_text);
    let team = hiring_team();
    let id = Uuid::new_v4();

    info!(
        "Evaluation {id}: {} evaluators, resume {} chars",
        team.members.len(),
        request.resume_text().chars().count()
    );

    let content = runner.run_sequential(&team, &request.payload()).await?;

    info!("Evaluation {id} complete ({} chars)", content.len());

    Ok(EvaluationReport {
        id,
        content,
        model: runner.model().to_string(),
        generated_at: Utc::now(),
    })
}

/// Keeps the first `max` characters of `text`, cutting on a char boundary.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
