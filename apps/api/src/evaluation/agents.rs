//! The hiring panel: four statically defined evaluators run in a fixed order.

use serde::Serialize;

use crate::evaluation::prompts::{
    CULTURE_INSTRUCTIONS, EDUCATION_INSTRUCTIONS, EXPERIENCE_INSTRUCTIONS, SKILLS_INSTRUCTIONS,
    TEAM_INSTRUCTIONS,
};

/// A named prompt template that assesses one candidate dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgentSpec {
    pub name: &'static str,
    pub role: &'static str,
    pub instructions: &'static str,
}

/// Ordered members plus the lead's overarching instructions.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TeamSpec {
    pub members: &'static [AgentSpec],
    pub instructions: &'static str,
}

pub const SKILLS_EVALUATOR: AgentSpec = AgentSpec {
    name: "Skills Evaluator",
    role: "Assess technical skills match",
    instructions: SKILLS_INSTRUCTIONS,
};

pub const EXPERIENCE_ANALYST: AgentSpec = AgentSpec {
    name: "Experience Analyst",
    role: "Evaluate professional experience",
    instructions: EXPERIENCE_INSTRUCTIONS,
};

pub const CULTURE_FIT_ASSESSOR: AgentSpec = AgentSpec {
    name: "Culture Fit Assessor",
    role: "Evaluate cultural compatibility",
    instructions: CULTURE_INSTRUCTIONS,
};

pub const EDUCATION_VERIFIER: AgentSpec = AgentSpec {
    name: "Education Verifier",
    role: "Assess educational qualifications",
    instructions: EDUCATION_INSTRUCTIONS,
};

/// Later members frame their verdicts on earlier ones, so this order is fixed.
static PANEL: [AgentSpec; 4] = [
    SKILLS_EVALUATOR,
    EXPERIENCE_ANALYST,
    CULTURE_FIT_ASSESSOR,
    EDUCATION_VERIFIER,
];

/// The hiring team used for every evaluation.
pub fn hiring_team() -> TeamSpec {
    TeamSpec {
        members: &PANEL,
        instructions: TEAM_INSTRUCTIONS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_order_is_fixed() {
        let names: Vec<&str> = hiring_team().members.iter().map(|a| a.name).collect();
        assert_eq!(
            names,
            vec![
                "Skills Evaluator",
                "Experience Analyst",
                "Culture Fit Assessor",
                "Education Verifier"
            ]
        );
    }

    #[test]
    fn test_each_member_asks_for_four_labeled_fields() {
        for agent in hiring_team().members {
            let format = agent
                .instructions
                .split("Response format:")
                .nth(1)
                .expect("every evaluator declares a response format");
            let fields = format.lines().filter(|l| l.contains(':')).count();
            assert_eq!(fields, 4, "{} has {fields} fields", agent.name);
        }
    }

    #[test]
    fn test_team_instructions_demand_confidence() {
        let team = hiring_team();
        assert!(team.instructions.contains("confidence score in percentage"));
        assert!(team.instructions.contains("selected for interview"));
    }
}
