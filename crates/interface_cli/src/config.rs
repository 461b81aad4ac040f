//! Report configuration

use std::path::PathBuf;

use serde::Deserialize;

use core_kernel::{CoreError, DateOrder};
use domain_analytics::{ReportPipeline, DEFAULT_TOP_N};
use domain_claims::IngestOptions;
use crate::error::CliError;

/// Name of the optional configuration file, read from the working directory
pub const CONFIG_FILE: &str = "claims_report";

/// How reports are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Report configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Path of the claims CSV
    pub input_path: Option<PathBuf>,
    /// Output format
    pub output_format: OutputFormat,
    /// Buckets kept by the city and hospital reports
    pub top_n: usize,
    /// How numeric dates are read
    pub date_order: DateOrder,
    /// Log level
    pub log_level: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_path: None,
            output_format: OutputFormat::Text,
            top_n: DEFAULT_TOP_N,
            date_order: DateOrder::DayFirst,
            log_level: "info".to_string(),
        }
    }
}

impl ReportConfig {
    /// Loads configuration from `claims_report.toml` (if present), then `REPORT_*` variables
    pub fn load() -> Result<Self, CliError> {
        let config: Self = config::Config::builder()
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .add_source(config::Environment::with_prefix("REPORT"))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings no report can run with
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.top_n == 0 {
            return Err(CoreError::configuration("top_n must be at least 1"));
        }
        Ok(())
    }

    pub fn ingest_options(&self) -> IngestOptions {
        IngestOptions {
            date_order: self.date_order,
        }
    }

    pub fn pipeline(&self) -> ReportPipeline {
        ReportPipeline::new().with_top_n(self.top_n)
    }
}
