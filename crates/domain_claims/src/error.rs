//! Claims domain errors

use thiserror::Error;

use crate::column::Column;

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Missing required column: {0}")]
    MissingColumn(Column),

    #[error("Malformed value in column {column} at row {row}: {value:?} ({reason})")]
    MalformedValue {
        column: Column,
        row: usize,
        value: String,
        reason: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
