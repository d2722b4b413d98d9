use std::sync::Arc;

use crate::config::Config;
use crate::evaluation::team::TeamRunner;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable team runner. Default: LlmTeamRunner over the configured model.
    pub team_runner: Arc<dyn TeamRunner>,
}
