//! Screening of job applications against a fixed set of hiring rules.
//!
//! The [`screening::ApplicationEvaluator`] is the entry point; everything else in the crate
//! is configuration, logging, and intake plumbing around it.

pub mod config;
pub mod error;
pub mod screening;
pub mod telemetry;
