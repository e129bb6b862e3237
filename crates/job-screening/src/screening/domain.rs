use std::fmt;

use serde::{Deserialize, Serialize};

/// Person applying for the position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    pub age: u32,
    #[serde(default)]
    pub identity_number: String,
}

impl Applicant {
    pub fn new(age: u32, identity_number: impl Into<String>) -> Self {
        Self {
            age,
            identity_number: identity_number.into(),
        }
    }
}

/// Application form as submitted by the candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobApplication {
    #[serde(default)]
    pub applicant: Option<Applicant>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub years_of_experience: u32,
}

impl JobApplication {
    pub fn new(applicant: Applicant) -> Self {
        Self {
            applicant: Some(applicant),
            ..Self::default()
        }
    }

    pub fn with_tech_stack<I, S>(mut self, tech_stack: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tech_stack = tech_stack.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_years_of_experience(mut self, years: u32) -> Self {
        self.years_of_experience = years;
        self
    }
}

/// Categorical decision for an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationResult {
    AutoRejected,
    TransferredToHr,
    /// Not produced by the current rule set.
    TransferredToLead,
    TransferredToCto,
    AutoAccepted,
}

impl ApplicationResult {
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationResult::AutoRejected => "auto_rejected",
            ApplicationResult::TransferredToHr => "transferred_to_hr",
            ApplicationResult::TransferredToLead => "transferred_to_lead",
            ApplicationResult::TransferredToCto => "transferred_to_cto",
            ApplicationResult::AutoAccepted => "auto_accepted",
        }
    }

    /// Whether a person has to look at the application before it is closed.
    pub fn requires_human_review(&self) -> bool {
        matches!(
            self,
            ApplicationResult::TransferredToHr
                | ApplicationResult::TransferredToLead
                | ApplicationResult::TransferredToCto
        )
    }
}

impl fmt::Display for ApplicationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Depth of the identity check requested from the validator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    #[default]
    Quick,
    Detailed,
}
