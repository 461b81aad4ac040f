//! Record field selectors
//!
//! Recipes name the record fields they read through these selectors, which
//! keeps each pipeline stage free of column-name strings.

use rust_decimal::Decimal;
use serde::Serialize;

use domain_claims::{ClaimError, ClaimRecord, Column};

/// A monetary field summed by the aggregator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountField {
    ClaimedAmount,
    IncurredAmount,
}

impl AmountField {
    pub fn read(&self, record: &ClaimRecord) -> Result<Decimal, ClaimError> {
        match self {
            AmountField::ClaimedAmount => record.claimed_amount(),
            AmountField::IncurredAmount => record.incurred_amount(),
        }
    }

    pub fn column(&self) -> Column {
        match self {
            AmountField::ClaimedAmount => Column::ClaimedAmount,
            AmountField::IncurredAmount => Column::IncurredAmount,
        }
    }
}

/// A numeric field that can be binned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericField {
    Age,
    ClaimedAmount,
    IncurredAmount,
}

impl NumericField {
    pub fn read(&self, record: &ClaimRecord) -> Result<Decimal, ClaimError> {
        match self {
            NumericField::Age => record.age().map(Decimal::from),
            NumericField::ClaimedAmount => record.claimed_amount(),
            NumericField::IncurredAmount => record.incurred_amount(),
        }
    }

    pub fn column(&self) -> Column {
        match self {
            NumericField::Age => Column::Age,
            NumericField::ClaimedAmount => Column::ClaimedAmount,
            NumericField::IncurredAmount => Column::IncurredAmount,
        }
    }
}

/// A free-text category field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryField {
    ClaimType,
    Relation,
    CityName,
    HospitalName,
}

impl CategoryField {
    pub fn read<'a>(&self, record: &'a ClaimRecord) -> Result<&'a str, ClaimError> {
        match self {
            CategoryField::ClaimType => record.claim_type(),
            CategoryField::Relation => record.relation(),
            CategoryField::CityName => record.city_name(),
            CategoryField::HospitalName => record.hospital_name(),
        }
    }

    pub fn column(&self) -> Column {
        match self {
            CategoryField::ClaimType => Column::ClaimType,
            CategoryField::Relation => Column::Relation,
            CategoryField::CityName => Column::CityName,
            CategoryField::HospitalName => Column::HospitalName,
        }
    }
}
