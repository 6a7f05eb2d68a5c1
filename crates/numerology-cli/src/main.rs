//! Numerology CLI
//!
//! - `compute`: full profile as JSON
//! - `report`: paginated manuscript as Markdown
//! - `interpret`: model elaboration of a single value

use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use numerology_engine::types::BIRTH_DATE_FORMAT;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use config::CliConfig;

/// Numerology CLI
#[derive(Parser)]
#[command(name = "numerology")]
#[command(about = "Pythagorean numerology profiles, manuscripts and interpretations", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "NUMEROLOGY_CONFIG", global = true)]
    config: Option<String>,

    /// Log level (overrides the configuration file)
    #[arg(long, env = "NUMEROLOGY_LOG_LEVEL", global = true)]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long, env = "NUMEROLOGY_LOG_JSON", global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct ProfileArgs {
    /// Full name as it appears on the birth certificate
    #[arg(short, long)]
    name: String,

    /// Birth date, YYYY-MM-DD
    #[arg(short, long)]
    birth_date: String,

    /// Evaluation date, YYYY-MM-DD (defaults to today's local date)
    #[arg(long, env = "NUMEROLOGY_TODAY", value_parser = parse_date)]
    today: Option<NaiveDate>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a profile and print it as JSON
    Compute {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Render the profile manuscript as Markdown
    Report {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Output file or directory (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Ask the interpretation backend about one value
    Interpret {
        /// Label such as "Life Path" or "Second Pinnacle"
        #[arg(short, long)]
        label: String,

        /// Number or text being interpreted
        #[arg(short, long)]
        value: String,

        /// Extra context for the prompt
        #[arg(long)]
        context: Option<String>,
    },
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), BIRTH_DATE_FORMAT)
        .map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

fn init_tracing(level: &str, json: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| level.to_string().into());

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load(cli.config.as_deref()).context("failed to load configuration")?;

    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    init_tracing(&level, cli.log_json || config.logging.json);

    let output = match cli.command {
        Command::Compute { profile, compact } => Some(commands::run_compute(
            &profile.name,
            &profile.birth_date,
            profile.today,
            compact,
        )?),
        Command::Report { profile, output } => commands::run_report(
            &profile.name,
            &profile.birth_date,
            profile.today,
            output.as_deref(),
            &config,
        )?,
        Command::Interpret {
            label,
            value,
            context,
        } => Some(commands::run_interpret(&label, &value, context, &config).await?),
    };

    if let Some(output) = output {
        println!("{}", output);
    }
    Ok(())
}
