//! Sequential team execution: runs a `TeamSpec` against the model.
//!
//! `AppState` holds an `Arc<dyn TeamRunner>` so handlers and the pipeline
//! never depend on how the members are actually invoked.

use async_trait::async_trait;
use tracing::info;

use crate::evaluation::agents::{AgentSpec, TeamSpec};
use crate::evaluation::prompts::{
    LEADER_PROMPT_TEMPLATE, LEADER_SYSTEM_TEMPLATE, MEMBER_PROMPT_TEMPLATE,
    MEMBER_SYSTEM_TEMPLATE, NO_PREVIOUS_REPORTS,
};
use crate::llm_client::prompts::{EVIDENCE_INSTRUCTION, MARKDOWN_OUTPUT_INSTRUCTION};
use crate::llm_client::{LlmClient, LlmError};

/// Runs every member of a team in order and returns one synthesized answer.
#[async_trait]
pub trait TeamRunner: Send + Sync {
    async fn run_sequential(&self, team: &TeamSpec, input: &str) -> Result<String, LlmError>;

    /// Model identifier reported alongside results.
    fn model(&self) -> &str;
}

/// Production runner: one chat call per member, then one synthesis call.
///
/// Member k sees the input plus the reports of members 0..k. The first
/// failing call aborts the run; nothing partial is returned.
pub struct LlmTeamRunner {
    llm: LlmClient,
}

impl LlmTeamRunner {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl TeamRunner for LlmTeamRunner {
    async fn run_sequential(&self, team: &TeamSpec, input: &str) -> Result<String, LlmError> {
        let mut reports: Vec<(&AgentSpec, String)> = Vec::with_capacity(team.members.len());

        for (step, agent) in team.members.iter().enumerate() {
            info!(
                "Team step {}/{}: {}",
                step + 1,
                team.members.len(),
                agent.name
            );
            let system = member_system_prompt(agent);
            let prompt = member_prompt(input, &reports);
            let report = self.llm.call_text(&prompt, &system).await?;
            reports.push((agent, report));
        }

        info!("Team lead synthesizing {} reports", reports.len());
        let system = LEADER_SYSTEM_TEMPLATE
            .replace("{team_instructions}", team.instructions)
            .replace("{markdown_instruction}", MARKDOWN_OUTPUT_INSTRUCTION);
        let prompt = LEADER_PROMPT_TEMPLATE
            .replace("{member_reports}", &format_reports(&reports))
            .replacen("{input}", input, 1);

        self.llm.call_text(&prompt, &system).await
    }

    fn model(&self) -> &str {
        self.llm.model()
    }
}

fn member_system_prompt(agent: &AgentSpec) -> String {
    MEMBER_SYSTEM_TEMPLATE
        .replace("{name}", agent.name)
        .replace("{role}", agent.role)
        .replace("{instructions}", agent.instructions)
        .replace("{evidence_instruction}", EVIDENCE_INSTRUCTION)
        .replace("{markdown_instruction}", MARKDOWN_OUTPUT_INSTRUCTION)
}

fn member_prompt(input: &str, previous: &[(&AgentSpec, String)]) -> String {
    let previous_reports = if previous.is_empty() {
        NO_PREVIOUS_REPORTS.to_string()
    } else {
        format_reports(previous)
    };
    // Substitute the reports first so text inside `input` is never re-scanned.
    MEMBER_PROMPT_TEMPLATE
        .replace("{previous_reports}", &previous_reports)
        .replacen("{input}", input, 1)
}

fn format_reports(reports: &[(&AgentSpec, String)]) -> String {
    reports
        .iter()
        .map(|(agent, report)| format!("### {}\n{}", agent.name, report.trim()))
        .collect::<Vec<_>>()
        .join("\n\n")
}
