//! CLI error handling

use thiserror::Error;

use core_kernel::CoreError;
use domain_claims::ClaimError;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] CoreError),

    #[error("No input file: pass a path or set REPORT_INPUT_PATH")]
    MissingInput,

    #[error("Could not load claims: {0}")]
    Ingest(#[from] ClaimError),

    #[error("Could not serialize reports: {0}")]
    Json(#[from] serde_json::Error),
}
