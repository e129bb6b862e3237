use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::domain::{Applicant, JobApplication};

/// Application read from an intake source, tagged with a caller-visible reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeRecord {
    pub reference: String,
    pub application: JobApplication,
}

/// Error raised while reading application documents.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("failed to read applications: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid application JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid application CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row '{reference}': {field} must be a non-negative integer (found '{value}')")]
    InvalidNumber {
        reference: String,
        field: &'static str,
        value: String,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonDocument {
    Many(Vec<JobApplication>),
    One(JobApplication),
}

/// Loaders turning JSON documents and CSV exports into applications.
pub struct ApplicationIntake;

impl ApplicationIntake {
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Vec<IntakeRecord>, IntakeError> {
        let file = File::open(path)?;
        Self::from_json_reader(file)
    }

    /// Accepts either a single application object or an array of them.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Vec<IntakeRecord>, IntakeError> {
        let applications = match serde_json::from_reader::<_, JsonDocument>(reader)? {
            JsonDocument::Many(applications) => applications,
            JsonDocument::One(application) => vec![application],
        };

        Ok(applications
            .into_iter()
            .enumerate()
            .map(|(index, application)| IntakeRecord {
                reference: format!("application-{}", index + 1),
                application,
            })
            .collect())
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Vec<IntakeRecord>, IntakeError> {
        let file = File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Expects the header `reference,age,identity_number,tech_stack,years_of_experience`.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Vec<IntakeRecord>, IntakeError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for row in csv_reader.deserialize::<CsvRow>() {
            records.push(row?.into_record()?);
        }

        Ok(records)
    }
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    reference: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    age: Option<String>,
    #[serde(default)]
    identity_number: String,
    #[serde(default)]
    tech_stack: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    years_of_experience: Option<String>,
}

impl CsvRow {
    fn into_record(self) -> Result<IntakeRecord, IntakeError> {
        let applicant = match self.age.as_deref() {
            Some(age) => Some(Applicant {
                age: parse_number(&self.reference, "age", age)?,
                identity_number: self.identity_number,
            }),
            None => None,
        };

        let years_of_experience = match self.years_of_experience.as_deref() {
            Some(years) => parse_number(&self.reference, "years_of_experience", years)?,
            None => 0,
        };

        let tech_stack = self
            .tech_stack
            .split(';')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect();

        Ok(IntakeRecord {
            reference: self.reference,
            application: JobApplication {
                applicant,
                tech_stack,
                years_of_experience,
            },
        })
    }
}

fn parse_number(reference: &str, field: &'static str, value: &str) -> Result<u32, IntakeError> {
    value.parse().map_err(|_| IntakeError::InvalidNumber {
        reference: reference.to_string(),
        field,
        value: value.to_string(),
    })
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }))
}
