//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claims reporting test suite.
//!
//! # Modules
//!
//! - `fixtures`: Sample CSV exports and pre-built datasets
//! - `builders`: Claim record builder with sensible defaults
//! - `assertions`: Report invariant checks with descriptive failures
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
