// All LLM prompt constants for the Evaluation module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Skills Evaluator instructions.
pub const SKILLS_INSTRUCTIONS: &str = "\
Analyze the candidate's technical skills against job requirements.
Response format:
SKILLS VERDICT: EXCELLENT/GOOD/PARTIAL/POOR MATCH
MATCHING SKILLS: [list]
MISSING SKILLS: [list]
SKILL GAP ANALYSIS: [detailed assessment]";

/// Experience Analyst instructions.
pub const EXPERIENCE_INSTRUCTIONS: &str = "\
Assess relevance and depth of work experience.
Response format:
EXPERIENCE VERDICT: STRONG/MODERATE/WEAK MATCH
RELEVANT EXPERIENCE: [years, roles]
EXPERIENCE GAPS: [missing experience]
IMPACT ANALYSIS: [achievements assessment]";

/// Culture Fit Assessor instructions.
pub const CULTURE_INSTRUCTIONS: &str = "\
Analyze soft skills and cultural fit indicators.
Response format:
CULTURE VERDICT: STRONG/MODERATE/WEAK FIT
POSITIVE INDICATORS: [evidence]
POTENTIAL CONCERNS: [risks]
RECOMMENDATIONS: [onboarding suggestions]";

/// Education Verifier instructions.
pub const EDUCATION_INSTRUCTIONS: &str = "\
Evaluate formal education and certifications.
Response format:
EDUCATION VERDICT: EXCEEDS/MEETS/BELOW REQUIREMENTS
DEGREES/CERTIFICATIONS: [list]
RELEVANT TRAINING: [notable courses]
KNOWLEDGE GAPS: [missing education]";

/// Overarching instructions for the hiring team lead.
pub const TEAM_INSTRUCTIONS: &str = "\
Conduct comprehensive candidate evaluation in this order:
1. Technical skills assessment
2. Professional experience analysis
3. Cultural fit evaluation
4. Educational qualifications verification
5. Decide: selected for interview or not.
Provide final hiring recommendation with confidence score in percentage.";

/// System prompt for one team member. Replace: {name}, {role}, {instructions},
/// {evidence_instruction}, {markdown_instruction}
pub const MEMBER_SYSTEM_TEMPLATE: &str = "\
You are the {name} on a hiring panel. Your role: {role}.

{instructions}

{evidence_instruction}

{markdown_instruction}";

/// User prompt for one team member. Replace: {input}, {previous_reports}
pub const MEMBER_PROMPT_TEMPLATE: &str = "\
{input}

ASSESSMENTS ALREADY COMPLETED BY THE PANEL:
{previous_reports}

Give ONLY your own assessment, using exactly the response format you were given.";

/// Placeholder used for the first member, before anyone has reported.
pub const NO_PREVIOUS_REPORTS: &str = "(none yet, you are the first assessor)";

/// System prompt for the closing synthesis call. Replace: {team_instructions},
/// {markdown_instruction}
pub const LEADER_SYSTEM_TEMPLATE: &str = "\
You lead a hiring panel and write the final evaluation report.

{team_instructions}

Reproduce each panel member's assessment under its own heading, in the order \
the assessments were performed, then finish with a section headed \
\"Final Recommendation\" that states the interview decision and the confidence \
percentage.

{markdown_instruction}";

/// User prompt for the synthesis call. Replace: {input}, {member_reports}
pub const LEADER_PROMPT_TEMPLATE: &str = "\
{input}

PANEL ASSESSMENTS (in order):
{member_reports}";
