// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Appended to every system prompt so replies render cleanly as markdown.
pub const MARKDOWN_OUTPUT_INSTRUCTION: &str = "\
    Respond in GitHub-flavored markdown. \
    Keep every labeled field from the requested response format on its own line, \
    in the order given. Do NOT wrap the whole answer in a code fence.";

/// Keeps the model from inventing facts about the candidate.
pub const EVIDENCE_INSTRUCTION: &str = "\
    Base every judgement strictly on the job description and resume provided. \
    If the resume does not mention something, say it is not evidenced; \
    do NOT assume or invent qualifications.";
