use std::collections::BTreeSet;

use super::domain::ValidationMode;

/// Country record exposed by a [`CountryDataProvider`].
pub trait CountryData {
    fn country(&self) -> &str;
}

/// Lookup of the country the identity backend is operating for.
pub trait CountryDataProvider {
    fn country_data(&self) -> &dyn CountryData;
}

/// Identity backend consulted by the evaluator.
///
/// The validation mode is mutable state on the validator: the evaluator writes it before
/// reading the country or checking an identity, and implementations decide how (or whether)
/// the mode changes their checks.
pub trait IdentityValidator {
    fn is_valid(&self, identity_number: &str) -> bool;
    fn country_data_provider(&self) -> &dyn CountryDataProvider;
    fn validation_mode(&self) -> ValidationMode;
    fn set_validation_mode(&mut self, mode: ValidationMode);
}

impl<V: IdentityValidator + ?Sized> IdentityValidator for &mut V {
    fn is_valid(&self, identity_number: &str) -> bool {
        (**self).is_valid(identity_number)
    }

    fn country_data_provider(&self) -> &dyn CountryDataProvider {
        (**self).country_data_provider()
    }

    fn validation_mode(&self) -> ValidationMode {
        (**self).validation_mode()
    }

    fn set_validation_mode(&mut self, mode: ValidationMode) {
        (**self).set_validation_mode(mode)
    }
}

impl<V: IdentityValidator + ?Sized> IdentityValidator for Box<V> {
    fn is_valid(&self, identity_number: &str) -> bool {
        (**self).is_valid(identity_number)
    }

    fn country_data_provider(&self) -> &dyn CountryDataProvider {
        (**self).country_data_provider()
    }

    fn validation_mode(&self) -> ValidationMode {
        (**self).validation_mode()
    }

    fn set_validation_mode(&mut self, mode: ValidationMode) {
        (**self).set_validation_mode(mode)
    }
}

/// Country data that never changes for the lifetime of the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedCountry(pub String);

impl CountryData for FixedCountry {
    fn country(&self) -> &str {
        &self.0
    }
}

impl CountryDataProvider for FixedCountry {
    fn country_data(&self) -> &dyn CountryData {
        self
    }
}

/// Local validator backed by a list of trusted identity numbers.
///
/// `Quick` mode only checks membership. `Detailed` mode also requires the number to be
/// non-empty ASCII alphanumeric.
#[derive(Debug, Clone)]
pub struct AllowListValidator {
    country: FixedCountry,
    trusted: BTreeSet<String>,
    mode: ValidationMode,
}

impl AllowListValidator {
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: FixedCountry(country.into()),
            trusted: BTreeSet::new(),
            mode: ValidationMode::default(),
        }
    }

    pub fn with_trusted<I, S>(mut self, identities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for identity in identities {
            self.trust(identity.as_ref());
        }
        self
    }

    pub fn trust(&mut self, identity_number: &str) {
        let trimmed = identity_number.trim();
        if !trimmed.is_empty() {
            self.trusted.insert(trimmed.to_string());
        }
    }

    pub fn trusted_count(&self) -> usize {
        self.trusted.len()
    }
}

impl IdentityValidator for AllowListValidator {
    fn is_valid(&self, identity_number: &str) -> bool {
        let identity_number = identity_number.trim();
        if !self.trusted.contains(identity_number) {
            return false;
        }

        match self.mode {
            ValidationMode::Quick => true,
            ValidationMode::Detailed => identity_number
                .chars()
                .all(|c| c.is_ascii_alphanumeric()),
        }
    }

    fn country_data_provider(&self) -> &dyn CountryDataProvider {
        &self.country
    }

    fn validation_mode(&self) -> ValidationMode {
        self.mode
    }

    fn set_validation_mode(&mut self, mode: ValidationMode) {
        self.mode = mode;
    }
}
