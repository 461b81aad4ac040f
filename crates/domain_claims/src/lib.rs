//! Claims Dataset Domain
//!
//! This crate models the claims export the reports are built from: one row
//! per claim, read from CSV into immutable [`ClaimRecord`]s.
//!
//! # Field-level failures
//!
//! A cell that cannot be parsed (or a column that is absent) does not abort
//! ingestion. The failure is kept on the record and returned by the field
//! accessor, so only the reports that read that field are affected.
//!
//! ```text
//! CSV -> ClaimsDataset { ClaimRecord { claim_no, age: Ok(34), discharge_date: Err(..), .. } }
//! ```

pub mod column;
pub mod claim;
pub mod dataset;
pub mod error;

pub use column::Column;
pub use claim::{ClaimRecord, ClaimRecordBuilder, FieldError, FieldErrorKind};
pub use dataset::{ClaimsDataset, IngestOptions};
pub use error::ClaimError;
