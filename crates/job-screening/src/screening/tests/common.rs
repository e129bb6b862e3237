use std::sync::{Arc, Mutex};

use crate::screening::domain::{Applicant, JobApplication, ValidationMode};
use crate::screening::identity::{CountryDataProvider, FixedCountry, IdentityValidator};

pub(super) const HOME_COUNTRY: &str = "Azerbaijan";

#[derive(Debug, Default)]
pub(super) struct RecordedCalls {
    pub(super) identity_checks: Vec<String>,
    pub(super) mode_writes: Vec<ValidationMode>,
    pub(super) country_reads: usize,
}

/// Validator double that records every interaction in shared state.
///
/// Clones share the same recording, so a test keeps one handle while the evaluator owns
/// another.
#[derive(Debug, Clone)]
pub(super) struct RecordingValidator {
    country: FixedCountry,
    identity_valid: bool,
    mode: ValidationMode,
    calls: Arc<Mutex<RecordedCalls>>,
}

impl RecordingValidator {
    pub(super) fn new(country: &str, identity_valid: bool) -> Self {
        Self {
            country: FixedCountry(country.to_string()),
            identity_valid,
            mode: ValidationMode::default(),
            calls: Arc::new(Mutex::new(RecordedCalls::default())),
        }
    }

    pub(super) fn home(identity_valid: bool) -> Self {
        Self::new(HOME_COUNTRY, identity_valid)
    }

    pub(super) fn identity_checks(&self) -> Vec<String> {
        self.calls
            .lock()
            .expect("validator mutex poisoned")
            .identity_checks
            .clone()
    }

    pub(super) fn mode_writes(&self) -> Vec<ValidationMode> {
        self.calls
            .lock()
            .expect("validator mutex poisoned")
            .mode_writes
            .clone()
    }

    pub(super) fn country_reads(&self) -> usize {
        self.calls
            .lock()
            .expect("validator mutex poisoned")
            .country_reads
    }

    pub(super) fn untouched(&self) -> bool {
        self.identity_checks().is_empty()
            && self.mode_writes().is_empty()
            && self.country_reads() == 0
    }
}

impl IdentityValidator for RecordingValidator {
    fn is_valid(&self, identity_number: &str) -> bool {
        self.calls
            .lock()
            .expect("validator mutex poisoned")
            .identity_checks
            .push(identity_number.to_string());
        self.identity_valid
    }

    fn country_data_provider(&self) -> &dyn CountryDataProvider {
        self.calls
            .lock()
            .expect("validator mutex poisoned")
            .country_reads += 1;
        &self.country
    }

    fn validation_mode(&self) -> ValidationMode {
        self.mode
    }

    fn set_validation_mode(&mut self, mode: ValidationMode) {
        self.calls
            .lock()
            .expect("validator mutex poisoned")
            .mode_writes
            .push(mode);
        self.mode = mode;
    }
}

pub(super) fn reference_stack() -> Vec<&'static str> {
    vec!["C#", "RabbitMQ", "Microservice", "Visual Studio"]
}

pub(super) fn application(age: u32) -> JobApplication {
    JobApplication::new(Applicant::new(age, "AZE1234567"))
}

pub(super) fn application_with_stack(age: u32, tech_stack: &[&str]) -> JobApplication {
    application(age).with_tech_stack(tech_stack.iter().copied())
}
