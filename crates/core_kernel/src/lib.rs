//! Core Kernel - Foundational types and utilities for claims reporting
//!
//! This crate provides the building blocks shared by the ingestion and
//! reporting crates:
//! - Decimal amount parsing, zero-guarded averages and half-even rounding
//! - Percentage-of-total values
//! - Calendar date parsing and stay-length arithmetic
//! - The claim number identifier

pub mod money;
pub mod percentage;
pub mod temporal;
pub mod identifiers;
pub mod error;

pub use money::MoneyError;
pub use percentage::Percentage;
pub use temporal::{DateOrder, TemporalError};
pub use identifiers::ClaimNo;
pub use error::CoreError;
