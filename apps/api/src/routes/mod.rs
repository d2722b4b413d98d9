pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::evaluation::handlers as evaluation;
use crate::extraction::handlers as extraction;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/evaluators",
            get(evaluation::handle_list_evaluators),
        )
        .route(
            "/api/v1/resumes/extract",
            post(extraction::handle_extract),
        )
        .route("/api/v1/evaluations", post(evaluation::handle_evaluate))
        .layer(upload_limit)
        .with_state(state)
}
