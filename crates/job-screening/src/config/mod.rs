use std::env;
use std::fmt;

use crate::screening::{EvaluationConfig, InvalidRuleSet};

/// Distinguishes runtime behavior for different stages of deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the screening tool.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub screening: EvaluationConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );
        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            screening: load_screening()?,
        })
    }
}

fn load_screening() -> Result<EvaluationConfig, ConfigError> {
    let mut config = EvaluationConfig::default();

    if let Ok(country) = env::var("SCREENING_HOME_COUNTRY") {
        config.home_country = country.trim().to_string();
    }
    if let Ok(stack) = env::var("SCREENING_TECH_STACK") {
        config.reference_tech_stack = stack
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect();
    }
    if let Some(age) = parse_var("SCREENING_MINIMUM_AGE")? {
        config.minimum_age = age;
    }
    if let Some(age) = parse_var("SCREENING_DETAILED_VALIDATION_AGE")? {
        config.detailed_validation_age = age;
    }
    if let Some(rate) = parse_var("SCREENING_MINIMUM_SIMILARITY")? {
        config.minimum_similarity_rate = rate;
    }
    if let Some(rate) = parse_var("SCREENING_SENIOR_SIMILARITY")? {
        config.senior_similarity_rate = rate;
    }
    if let Some(years) = parse_var("SCREENING_SENIOR_YEARS")? {
        config.senior_years_of_experience = years;
    }

    config.validate()?;
    Ok(config)
}

fn parse_var<T: std::str::FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { name, value: raw }),
        Err(_) => Ok(None),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber { name: &'static str, value: String },
    RuleSet(InvalidRuleSet),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { name, value } => {
                write!(f, "{name} must be a non-negative integer (found '{value}')")
            }
            ConfigError::RuleSet(err) => write!(f, "invalid screening rules: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidNumber { .. } => None,
            ConfigError::RuleSet(err) => Some(err),
        }
    }
}

impl From<InvalidRuleSet> for ConfigError {
    fn from(value: InvalidRuleSet) -> Self {
        Self::RuleSet(value)
    }
}
