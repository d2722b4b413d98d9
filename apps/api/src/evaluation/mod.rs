// Sequential Evaluation Pipeline
// Implements: hiring panel specs, sequential team execution, report persistence.
// All LLM calls go through llm_client; the team runner is the only caller here.

pub mod agents;
pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod report;
pub mod team;
