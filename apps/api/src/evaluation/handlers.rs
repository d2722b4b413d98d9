//! Axum route handlers for the Evaluation API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::evaluation::agents::{hiring_team, AgentSpec};
use crate::evaluation::pipeline::evaluate;
use crate::evaluation::report::save_report;
use crate::extraction::extract_file;
use crate::state::AppState;
use crate::upload::UploadForm;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct EvaluationResponse {
    pub id: Uuid,
    pub report: String,
    pub model: String,
    pub generated_at: DateTime<Utc>,
    pub saved_to: String,
}

#[derive(Debug, Serialize)]
pub struct EvaluatorsResponse {
    pub evaluators: &'static [AgentSpec],
    pub team_instructions: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/evaluations
///
/// Multipart form: `job_description` (text) and `resume` (.pdf / .docx / .txt).
/// Extracts the resume, runs the hiring panel, saves the report, returns it.
/// Extraction errors stop processing before any model call is made.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<EvaluationResponse>, AppError> {
    let form = UploadForm::from_multipart(multipart).await?;
    let job_description = form.require_job_description()?;
    let upload = form.require_resume()?;

    info!("Processing resume '{}'", upload.file_name);
    let suffix = upload.suffix();
    let temp = upload.persist()?;
    let resume_text = extract_file(temp.path(), &suffix).await?;
    drop(temp);
    info!("Resume extracted successfully, starting evaluation");

    let report = evaluate(state.team_runner.as_ref(), job_description, &resume_text).await?;

    let output = &state.config.evaluation_output;
    save_report(output, &report.content).await?;

    Ok(Json(EvaluationResponse {
        id: report.id,
        report: report.content,
        model: report.model,
        generated_at: report.generated_at,
        saved_to: output.clone(),
    }))
}

/// GET /api/v1/evaluators
///
/// Lists the panel members in the order they run.
pub async fn handle_list_evaluators() -> Json<EvaluatorsResponse> {
    let team = hiring_team();
    Json(EvaluatorsResponse {
        evaluators: team.members,
        team_instructions: team.instructions,
    })
}
