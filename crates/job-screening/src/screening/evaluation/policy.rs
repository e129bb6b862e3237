use serde::{Deserialize, Serialize};

use super::super::domain::ApplicationResult;
use super::config::EvaluationConfig;

/// Rule that settled an application, kept for audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum DecisionReason {
    Underage { age: u32, minimum_age: u32 },
    ForeignCountry { country: String },
    InvalidIdentity,
    LowTechStackSimilarity { rate: u8 },
    SeniorProfile { rate: u8, years: u32 },
    DefaultAcceptance { rate: u8 },
}

impl DecisionReason {
    pub fn summary(&self) -> String {
        match self {
            DecisionReason::Underage { age, minimum_age } => {
                format!("applicant aged {age} is below the minimum age of {minimum_age}")
            }
            DecisionReason::ForeignCountry { country } => {
                format!("identity backend reports country '{country}'")
            }
            DecisionReason::InvalidIdentity => "identity number failed validation".to_string(),
            DecisionReason::LowTechStackSimilarity { rate } => {
                format!("tech stack similarity {rate}% is too low")
            }
            DecisionReason::SeniorProfile { rate, years } => {
                format!("tech stack similarity {rate}% with {years} years of experience")
            }
            DecisionReason::DefaultAcceptance { rate } => {
                format!("tech stack similarity {rate}%")
            }
        }
    }
}

pub(crate) fn decide_by_similarity(
    rate: u8,
    years_of_experience: u32,
    config: &EvaluationConfig,
) -> (ApplicationResult, DecisionReason) {
    if rate < config.minimum_similarity_rate {
        return (
            ApplicationResult::AutoRejected,
            DecisionReason::LowTechStackSimilarity { rate },
        );
    }

    // Accepted through its own rule; no lead transfer is wired for senior profiles yet.
    if rate > config.senior_similarity_rate
        && years_of_experience >= config.senior_years_of_experience
    {
        return (
            ApplicationResult::AutoAccepted,
            DecisionReason::SeniorProfile {
                rate,
                years: years_of_experience,
            },
        );
    }

    (
        ApplicationResult::AutoAccepted,
        DecisionReason::DefaultAcceptance { rate },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_below_minimum_rejects() {
        let (result, reason) = decide_by_similarity(0, 30, &EvaluationConfig::default());
        assert_eq!(result, ApplicationResult::AutoRejected);
        assert_eq!(reason, DecisionReason::LowTechStackSimilarity { rate: 0 });
    }

    #[test]
    fn minimum_rate_is_inclusive() {
        let (result, reason) = decide_by_similarity(25, 0, &EvaluationConfig::default());
        assert_eq!(result, ApplicationResult::AutoAccepted);
        assert_eq!(reason, DecisionReason::DefaultAcceptance { rate: 25 });
    }

    #[test]
    fn senior_profile_needs_rate_strictly_above_threshold() {
        let config = EvaluationConfig::default();

        let (_, reason) = decide_by_similarity(75, 20, &config);
        assert_eq!(reason, DecisionReason::DefaultAcceptance { rate: 75 });

        let (result, reason) = decide_by_similarity(100, 15, &config);
        assert_eq!(result, ApplicationResult::AutoAccepted);
        assert_eq!(
            reason,
            DecisionReason::SeniorProfile {
                rate: 100,
                years: 15
            }
        );
    }

    #[test]
    fn high_rate_without_experience_falls_back_to_default_acceptance() {
        let (result, reason) = decide_by_similarity(100, 14, &EvaluationConfig::default());
        assert_eq!(result, ApplicationResult::AutoAccepted);
        assert_eq!(reason, DecisionReason::DefaultAcceptance { rate: 100 });
    }

    #[test]
    fn reason_serializes_with_rule_tag() {
        let json = serde_json::to_value(DecisionReason::LowTechStackSimilarity { rate: 0 })
            .expect("serialize");
        assert_eq!(json["rule"], "low_tech_stack_similarity");
        assert_eq!(json["rate"], 0);
    }
}
