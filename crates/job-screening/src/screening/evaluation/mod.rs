mod config;
mod policy;
mod rules;

pub use config::{
    EvaluationConfig, InvalidRuleSet, DEFAULT_DETAILED_VALIDATION_AGE, DEFAULT_HOME_COUNTRY,
    DEFAULT_MINIMUM_AGE, DEFAULT_MINIMUM_SIMILARITY_RATE, DEFAULT_REFERENCE_TECH_STACK,
    DEFAULT_SENIOR_SIMILARITY_RATE, DEFAULT_SENIOR_YEARS_OF_EXPERIENCE,
};
pub use policy::DecisionReason;
pub use rules::similarity_rate;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::domain::{ApplicationResult, JobApplication, ValidationMode};
use super::identity::IdentityValidator;
use policy::decide_by_similarity;

/// Evaluator applying the rule set to one application at a time.
///
/// The evaluator owns its identity validator and writes the validation mode onto it during
/// evaluation, so it takes `&mut self`. Share a validator across evaluators by lending it
/// (`&mut V` implements [`IdentityValidator`]).
pub struct ApplicationEvaluator<V> {
    validator: V,
    config: EvaluationConfig,
}

impl<V: IdentityValidator> ApplicationEvaluator<V> {
    pub fn new(validator: V) -> Self {
        Self {
            validator,
            config: EvaluationConfig::default(),
        }
    }

    pub fn with_config(validator: V, config: EvaluationConfig) -> Result<Self, InvalidRuleSet> {
        config.validate()?;
        Ok(Self { validator, config })
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    pub fn validator(&self) -> &V {
        &self.validator
    }

    pub fn validator_mut(&mut self) -> &mut V {
        &mut self.validator
    }

    pub fn into_validator(self) -> V {
        self.validator
    }

    /// Decide the application.
    pub fn evaluate(
        &mut self,
        application: &JobApplication,
    ) -> Result<ApplicationResult, EvaluationError> {
        self.assess(application).map(|outcome| outcome.result)
    }

    /// Decide the application and report which rule settled it.
    pub fn assess(
        &mut self,
        application: &JobApplication,
    ) -> Result<EvaluationOutcome, EvaluationError> {
        let Some(applicant) = application.applicant.as_ref() else {
            warn!("application submitted without an applicant");
            return Err(EvaluationError::MissingApplicant);
        };

        if applicant.age < self.config.minimum_age {
            debug!(age = applicant.age, "auto rejecting underage applicant");
            return Ok(EvaluationOutcome {
                result: ApplicationResult::AutoRejected,
                reason: DecisionReason::Underage {
                    age: applicant.age,
                    minimum_age: self.config.minimum_age,
                },
                validation_mode: None,
                similarity_rate: None,
            });
        }

        let mode = if applicant.age > self.config.detailed_validation_age {
            ValidationMode::Detailed
        } else {
            ValidationMode::Quick
        };
        self.validator.set_validation_mode(mode);

        let country = self
            .validator
            .country_data_provider()
            .country_data()
            .country();
        if country != self.config.home_country {
            debug!(%country, "transferring foreign applicant to cto");
            return Ok(EvaluationOutcome {
                result: ApplicationResult::TransferredToCto,
                reason: DecisionReason::ForeignCountry {
                    country: country.to_string(),
                },
                validation_mode: Some(mode),
                similarity_rate: None,
            });
        }

        if !self.validator.is_valid(&applicant.identity_number) {
            debug!(?mode, "identity rejected, transferring to hr");
            return Ok(EvaluationOutcome {
                result: ApplicationResult::TransferredToHr,
                reason: DecisionReason::InvalidIdentity,
                validation_mode: Some(mode),
                similarity_rate: None,
            });
        }

        let rate = similarity_rate(&application.tech_stack, &self.config);
        let (result, reason) =
            decide_by_similarity(rate, application.years_of_experience, &self.config);
        debug!(rate, years = application.years_of_experience, %result, "tech stack evaluated");

        Ok(EvaluationOutcome {
            result,
            reason,
            validation_mode: Some(mode),
            similarity_rate: Some(rate),
        })
    }
}

/// Evaluation output with the rule trail behind the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    pub result: ApplicationResult,
    pub reason: DecisionReason,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_mode: Option<ValidationMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity_rate: Option<u8>,
}

/// Error raised when an application cannot be evaluated at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluationError {
    #[error("application has no applicant")]
    MissingApplicant,
}
