//! Claims Break-Up Reports - CLI Binary
//!
//! Reads a claims CSV export and prints the seven break-up reports.
//!
//! # Usage
//!
//! ```bash
//! # Print text tables
//! cargo run --bin claims-report -- claims.csv
//!
//! # Print JSON, numeric dates read month-first
//! REPORT_OUTPUT_FORMAT=json REPORT_DATE_ORDER=month_first cargo run --bin claims-report -- claims.csv
//! ```
//!
//! # Environment Variables
//!
//! * `REPORT_INPUT_PATH` - Claims CSV, used when no path argument is given
//! * `REPORT_OUTPUT_FORMAT` - `text` or `json` (default: text)
//! * `REPORT_TOP_N` - Buckets kept by the city and hospital reports (default: 10)
//! * `REPORT_DATE_ORDER` - `day_first` or `month_first` (default: day_first)
//! * `REPORT_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//!
//! Settings may also be placed in `claims_report.toml`; environment variables win.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use interface_cli::{config::ReportConfig, error::CliError, generate};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<ExitCode> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = ReportConfig::load().context("Failed to load report configuration")?;
    init_tracing(&config.log_level);

    let path = input_path(&config)?;
    tracing::info!(path = %path.display(), "Generating claims reports");

    let run = generate(&config, &path)
        .with_context(|| format!("Failed to generate reports from {}", path.display()))?;
    print!("{}", run.output);

    let failures = run.failures();
    if failures > 0 {
        tracing::warn!(failures, "Some reports could not be produced");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// First positional argument, else the configured path
fn input_path(config: &ReportConfig) -> Result<PathBuf, CliError> {
    std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| config.input_path.clone())
        .ok_or(CliError::MissingInput)
}

/// Initializes the tracing subscriber; `RUST_LOG` overrides the configured level
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
