//! Test Data Builders
//!
//! Provides a claim builder with sensible defaults so that tests only spell
//! out the fields they care about.

use chrono::{Duration, NaiveDate};
use core_kernel::ClaimNo;
use domain_claims::{ClaimRecord, ClaimsDataset};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Builder for constructing fully-populated test claims
///
/// Defaults: a cashless claim for the employee, aged 35, 10,000 claimed and
/// incurred, admitted 2024-01-10 for 2 days in Pune at City Hospital.
#[derive(Debug, Clone)]
pub struct TestClaimBuilder {
    row: usize,
    claim_no: Option<String>,
    claim_type: String,
    relation: String,
    age: u32,
    claimed_amount: Decimal,
    incurred_amount: Decimal,
    admission_date: NaiveDate,
    stay_days: i64,
    city_name: String,
    hospital_name: String,
}

impl Default for TestClaimBuilder {
    fn default() -> Self {
        Self::new(1)
    }
}

impl TestClaimBuilder {
    /// Creates a new builder for the given row with default values
    pub fn new(row: usize) -> Self {
        Self {
            row,
            claim_no: Some(format!("CLM-{row:05}")),
            claim_type: "Cashless".to_string(),
            relation: "Self".to_string(),
            age: 35,
            claimed_amount: dec!(10000),
            incurred_amount: dec!(10000),
            admission_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            stay_days: 2,
            city_name: "Pune".to_string(),
            hospital_name: "City Hospital".to_string(),
        }
    }

    /// Leaves the claim number blank
    pub fn without_claim_no(mut self) -> Self {
        self.claim_no = None;
        self
    }

    pub fn with_claim_type(mut self, claim_type: impl Into<String>) -> Self {
        self.claim_type = claim_type.into();
        self
    }

    pub fn with_relation(mut self, relation: impl Into<String>) -> Self {
        self.relation = relation.into();
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    pub fn with_claimed_amount(mut self, amount: Decimal) -> Self {
        self.claimed_amount = amount;
        self
    }

    pub fn with_incurred_amount(mut self, amount: Decimal) -> Self {
        self.incurred_amount = amount;
        self
    }

    /// Sets claimed and incurred amounts together
    pub fn with_amount(self, amount: Decimal) -> Self {
        self.with_claimed_amount(amount).with_incurred_amount(amount)
    }

    /// Sets the length of stay; negative values put discharge before admission
    pub fn with_stay_days(mut self, days: i64) -> Self {
        self.stay_days = days;
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city_name = city.into();
        self
    }

    pub fn with_hospital(mut self, hospital: impl Into<String>) -> Self {
        self.hospital_name = hospital.into();
        self
    }

    /// Builds the record
    pub fn build(self) -> ClaimRecord {
        ClaimRecord::builder(self.row)
            .claim_no(self.claim_no.as_deref().and_then(ClaimNo::parse))
            .claim_type(self.claim_type)
            .relation(self.relation)
            .age(self.age)
            .claimed_amount(self.claimed_amount)
            .incurred_amount(self.incurred_amount)
            .admission_date(self.admission_date)
            .discharge_date(self.admission_date + Duration::days(self.stay_days))
            .city_name(self.city_name)
            .hospital_name(self.hospital_name)
            .build()
    }
}

/// Builds a dataset from claim builders, numbering rows in order
pub fn dataset_of(claims: impl IntoIterator<Item = TestClaimBuilder>) -> ClaimsDataset {
    ClaimsDataset::new(
        claims
            .into_iter()
            .enumerate()
            .map(|(idx, claim)| TestClaimBuilder { row: idx + 1, ..claim }.build())
            .collect(),
    )
}
