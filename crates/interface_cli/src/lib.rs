//! Claims Report Command Line
//!
//! Loads a claims export, runs every break-up report in dashboard order and
//! prints them as text tables or JSON.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_cli::{config::ReportConfig, generate};
//!
//! let config = ReportConfig::load()?;
//! let run = generate(&config, "claims.csv")?;
//! print!("{}", run.output);
//! ```

pub mod config;
pub mod error;
pub mod render;

use std::path::Path;

use tracing::{info, instrument};

use domain_analytics::ReportOutcome;
use domain_claims::ClaimsDataset;
use crate::config::{OutputFormat, ReportConfig};
use crate::error::CliError;

/// Rendered output of a full run
#[derive(Debug)]
pub struct ReportRun {
    pub output: String,
    pub outcomes: Vec<ReportOutcome>,
}

impl ReportRun {
    /// Number of reports that failed
    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_ok()).count()
    }
}

/// Loads the dataset at `path` and renders every report
#[instrument(skip(config, path), fields(path = %path.as_ref().display()))]
pub fn generate(config: &ReportConfig, path: impl AsRef<Path>) -> Result<ReportRun, CliError> {
    let dataset = ClaimsDataset::from_path(path.as_ref(), config.ingest_options())?;
    info!(records = dataset.len(), "Claims loaded");
    render_dataset(config, &dataset)
}

/// Renders every report for an already-loaded dataset
pub fn render_dataset(config: &ReportConfig, dataset: &ClaimsDataset) -> Result<ReportRun, CliError> {
    let outcomes = config.pipeline().run_all(dataset);
    let output = match config.output_format {
        OutputFormat::Text => render::render_text(&outcomes),
        OutputFormat::Json => render::render_json(&outcomes)?,
    };
    Ok(ReportRun { output, outcomes })
}
