use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use job_screening::config::AppConfig;
use job_screening::error::AppError;
use job_screening::screening::{
    AllowListValidator, ApplicationEvaluator, ApplicationIntake, ApplicationResult,
    EvaluationConfig, EvaluationOutcome, IntakeRecord,
};
use job_screening::telemetry;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "Job Screening",
    about = "Screen job applications against the hiring rule set",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate applications from a JSON or CSV file, one JSON line per application
    Evaluate(EvaluateArgs),
    /// Print the effective screening rules as JSON
    Rules,
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    /// Application file (a JSON object, a JSON array, or a CSV export)
    #[arg(long)]
    input: PathBuf,
    /// Input format; inferred from the file extension when omitted
    #[arg(long, value_enum)]
    format: Option<InputFormat>,
    /// Country reported by the identity backend (defaults to the configured home country)
    #[arg(long)]
    country: Option<String>,
    /// Identity number the backend accepts; repeat for several
    #[arg(long = "trusted-id")]
    trusted_ids: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputFormat {
    Json,
    Csv,
}

impl InputFormat {
    fn infer(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Json,
        }
    }
}

#[derive(Debug, Serialize)]
struct ScreeningLine<'a> {
    reference: &'a str,
    evaluated_at: DateTime<Utc>,
    #[serde(flatten)]
    outcome: Option<&'a EvaluationOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Evaluate(args) => run_evaluate(args, config.screening),
        Command::Rules => print_rules(&config.screening),
    }
}

fn run_evaluate(args: EvaluateArgs, rules: EvaluationConfig) -> Result<(), AppError> {
    let EvaluateArgs {
        input,
        format,
        country,
        trusted_ids,
    } = args;

    let records = match format.unwrap_or_else(|| InputFormat::infer(&input)) {
        InputFormat::Json => ApplicationIntake::from_json_path(&input)?,
        InputFormat::Csv => ApplicationIntake::from_csv_path(&input)?,
    };

    let country = country.unwrap_or_else(|| rules.home_country.clone());
    let validator = AllowListValidator::new(country).with_trusted(&trusted_ids);
    info!(
        applications = records.len(),
        trusted = validator.trusted_count(),
        input = %input.display(),
        "screening applications"
    );

    let mut evaluator = ApplicationEvaluator::with_config(validator, rules)
        .map_err(|err| AppError::Config(err.into()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut tally: BTreeMap<ApplicationResult, usize> = BTreeMap::new();
    let mut failures = 0usize;

    for record in &records {
        match evaluator.assess(&record.application) {
            Ok(outcome) => {
                *tally.entry(outcome.result).or_default() += 1;
                write_line(&mut out, record, Some(&outcome), None)?;
            }
            Err(err) => {
                warn!(reference = %record.reference, %err, "application skipped");
                failures += 1;
                write_line(&mut out, record, None, Some(err.to_string()))?;
            }
        }
    }
    out.flush()?;

    for (result, count) in &tally {
        info!(%result, count, "screening summary");
    }
    if failures > 0 {
        info!(failures, "applications could not be evaluated");
    }

    Ok(())
}

fn write_line<W: Write>(
    out: &mut W,
    record: &IntakeRecord,
    outcome: Option<&EvaluationOutcome>,
    error: Option<String>,
) -> Result<(), AppError> {
    let line = ScreeningLine {
        reference: &record.reference,
        evaluated_at: Utc::now(),
        outcome,
        summary: outcome.map(|outcome| outcome.reason.summary()),
        error,
    };

    serde_json::to_writer(&mut *out, &line).map_err(io::Error::from)?;
    writeln!(out)?;
    Ok(())
}

fn print_rules(rules: &EvaluationConfig) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(rules).map_err(io::Error::from)?;
    println!("{rendered}");
    Ok(())
}
