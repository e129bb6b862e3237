//! Job application screening: domain records, the identity validator seam, the rule-based
//! evaluator, and intake loaders.

pub mod domain;
pub mod evaluation;
pub mod identity;
pub mod intake;

#[cfg(test)]
mod tests;

pub use domain::{Applicant, ApplicationResult, JobApplication, ValidationMode};
pub use evaluation::{
    similarity_rate, ApplicationEvaluator, DecisionReason, EvaluationConfig, EvaluationError,
    EvaluationOutcome, InvalidRuleSet,
};
pub use identity::{
    AllowListValidator, CountryData, CountryDataProvider, FixedCountry, IdentityValidator,
};
pub use intake::{ApplicationIntake, IntakeError, IntakeRecord};
