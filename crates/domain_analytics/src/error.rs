//! Reporting domain errors

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use domain_claims::{ClaimError, Column};

/// Errors that abort a single report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Malformed input: {0}")]
    MalformedInput(#[from] ClaimError),

    #[error("Unmapped category {value:?} in column {column} at row {row}")]
    UnmappedCategory {
        column: Column,
        row: usize,
        value: String,
    },

    #[error("Negative stay of {days} days at row {row}: discharge {discharge} precedes admission {admission}")]
    NegativeDerivedDuration {
        row: usize,
        admission: NaiveDate,
        discharge: NaiveDate,
        days: i64,
    },

    #[error("Value {value} in column {column} at row {row} falls outside every bin")]
    OutOfRange {
        column: Column,
        row: usize,
        value: Decimal,
    },

    #[error("Sum of {column} overflows at row {row}")]
    AmountOverflow {
        column: Column,
        row: usize,
    },

    #[error("Invalid bin definition: {0}")]
    InvalidBins(String),
}
