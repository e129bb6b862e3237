use serde::{Deserialize, Serialize};

pub const DEFAULT_MINIMUM_AGE: u32 = 18;
pub const DEFAULT_DETAILED_VALIDATION_AGE: u32 = 50;
pub const DEFAULT_HOME_COUNTRY: &str = "Azerbaijan";
pub const DEFAULT_REFERENCE_TECH_STACK: [&str; 4] =
    ["C#", "RabbitMQ", "Microservice", "Visual Studio"];
pub const DEFAULT_MINIMUM_SIMILARITY_RATE: u8 = 25;
pub const DEFAULT_SENIOR_SIMILARITY_RATE: u8 = 75;
pub const DEFAULT_SENIOR_YEARS_OF_EXPERIENCE: u32 = 15;

/// Rule set applied by the evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    pub minimum_age: u32,
    /// Applicants strictly older than this are validated in detailed mode.
    pub detailed_validation_age: u32,
    pub home_country: String,
    pub reference_tech_stack: Vec<String>,
    pub minimum_similarity_rate: u8,
    pub senior_similarity_rate: u8,
    pub senior_years_of_experience: u32,
}

impl EvaluationConfig {
    pub fn validate(&self) -> Result<(), InvalidRuleSet> {
        if self.reference_tech_stack.is_empty() {
            return Err(InvalidRuleSet::EmptyTechStack);
        }
        if self.home_country.trim().is_empty() {
            return Err(InvalidRuleSet::BlankHomeCountry);
        }
        for (name, value) in [
            ("minimum_similarity_rate", self.minimum_similarity_rate),
            ("senior_similarity_rate", self.senior_similarity_rate),
        ] {
            if value > 100 {
                return Err(InvalidRuleSet::RateOutOfRange { name, value });
            }
        }
        Ok(())
    }
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            minimum_age: DEFAULT_MINIMUM_AGE,
            detailed_validation_age: DEFAULT_DETAILED_VALIDATION_AGE,
            home_country: DEFAULT_HOME_COUNTRY.to_string(),
            reference_tech_stack: DEFAULT_REFERENCE_TECH_STACK
                .iter()
                .map(|entry| entry.to_string())
                .collect(),
            minimum_similarity_rate: DEFAULT_MINIMUM_SIMILARITY_RATE,
            senior_similarity_rate: DEFAULT_SENIOR_SIMILARITY_RATE,
            senior_years_of_experience: DEFAULT_SENIOR_YEARS_OF_EXPERIENCE,
        }
    }
}

/// Rule set that cannot be evaluated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidRuleSet {
    #[error("reference tech stack must contain at least one entry")]
    EmptyTechStack,
    #[error("home country must not be blank")]
    BlankHomeCountry,
    #[error("{name} must be a percentage between 0 and 100 (found {value})")]
    RateOutOfRange { name: &'static str, value: u8 },
}
