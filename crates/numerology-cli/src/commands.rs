//! Subcommand implementations.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use chrono::{Local, NaiveDate};
use numerology_engine::{compute, NumerologyResult, Profile};
use numerology_interpret::{InterpretationRequest, InterpretedValue, Interpreter};
use numerology_report::{file_name, render_manuscript};
use tracing::info;

use crate::config::CliConfig;

/// Validate raw input and compute against `today`, or the local date when
/// none is given. The date is read once per invocation.
pub fn evaluate(
    name: &str,
    birth_date: &str,
    today: Option<NaiveDate>,
) -> anyhow::Result<(Profile, NumerologyResult)> {
    let profile = Profile::parse(name, birth_date).context("invalid profile input")?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let result = compute(&profile, today)
        .ok_or_else(|| anyhow!("no profile could be computed for {:?}", profile.full_name))?;
    Ok((profile, result))
}

pub fn run_compute(
    name: &str,
    birth_date: &str,
    today: Option<NaiveDate>,
    compact: bool,
) -> anyhow::Result<String> {
    let (_, result) = evaluate(name, birth_date, today)?;
    let json = if compact {
        serde_json::to_string(&result)?
    } else {
        serde_json::to_string_pretty(&result)?
    };
    Ok(json)
}

/// Where a manuscript goes: an explicit path (a directory gets the default
/// file name), the configured directory, or stdout (`None`).
pub fn report_destination(
    output: Option<&Path>,
    config: &CliConfig,
    profile: &Profile,
) -> Option<PathBuf> {
    match output {
        Some(path) if path.is_dir() => Some(path.join(file_name(profile))),
        Some(path) => Some(path.to_path_buf()),
        None => config
            .report
            .output_dir
            .as_ref()
            .map(|dir| dir.join(file_name(profile))),
    }
}

/// Render the manuscript; returns the Markdown when it is not written to a file.
pub fn run_report(
    name: &str,
    birth_date: &str,
    today: Option<NaiveDate>,
    output: Option<&Path>,
    config: &CliConfig,
) -> anyhow::Result<Option<String>> {
    let (profile, result) = evaluate(name, birth_date, today)?;
    let manuscript = render_manuscript(&result, &profile);
    match report_destination(output, config, &profile) {
        Some(path) => {
            manuscript.write_to(&path)?;
            info!(path = %path.display(), "manuscript saved");
            eprintln!("Manuscript written to {}", path.display());
            Ok(None)
        }
        None => Ok(Some(manuscript.to_markdown())),
    }
}

/// Numbers are sent as numbers, anything else as text.
pub fn parse_value(raw: &str) -> InterpretedValue {
    match raw.trim().parse::<u32>() {
        Ok(n) => InterpretedValue::Number(n),
        Err(_) => InterpretedValue::Text(raw.trim().to_string()),
    }
}

pub async fn run_interpret(
    label: &str,
    value: &str,
    context: Option<String>,
    config: &CliConfig,
) -> anyhow::Result<String> {
    let interpreter = Interpreter::from_config(&config.interpretation);
    let mut request = InterpretationRequest::new(label, parse_value(value));
    if let Some(context) = context {
        request = request.with_context(context);
    }
    let interpretation = interpreter.interpret(&request).await;
    Ok(serde_json::to_string_pretty(&interpretation)?)
}
