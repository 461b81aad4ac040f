//! Property-Based Test Generators
//!
//! Provides proptest strategies for claims that load cleanly, so that report
//! invariants can be checked over arbitrary datasets.

use domain_claims::ClaimsDataset;
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::builders::{dataset_of, TestClaimBuilder};

/// Strategy for claim modes
pub fn claim_type_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("Cashless"), Just("Reimbursement")]
}

/// Strategy for relation values the relationship report can group
pub fn relation_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("Self"),
        Just("Spouse"),
        Just("Son"),
        Just("Daughter"),
        Just("Mother"),
        Just("Father"),
    ]
}

/// Strategy for patient ages
pub fn age_strategy() -> impl Strategy<Value = u32> {
    0u32..110u32
}

/// Strategy for non-negative amounts with up to two decimal places
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        Just(Decimal::ZERO),
        (1i64..50_000_000i64, 0u32..=2u32).prop_map(|(m, s)| Decimal::new(m, s)),
    ]
}

/// Strategy for non-negative stays in days
pub fn stay_days_strategy() -> impl Strategy<Value = i64> {
    0i64..60i64
}

/// Strategy for city names drawn from a pool larger than the Top-N default
pub fn city_strategy() -> impl Strategy<Value = String> {
    (0u32..15u32).prop_map(|i| format!("City{i:02}"))
}

/// Strategy for hospital names
pub fn hospital_strategy() -> impl Strategy<Value = String> {
    (0u32..15u32).prop_map(|i| format!("Hospital{i:02}"))
}

/// Strategy for a single well-formed claim
pub fn claim_strategy() -> impl Strategy<Value = TestClaimBuilder> {
    (
        claim_type_strategy(),
        relation_strategy(),
        age_strategy(),
        amount_strategy(),
        amount_strategy(),
        stay_days_strategy(),
        city_strategy(),
        hospital_strategy(),
        any::<bool>(),
    )
        .prop_map(
            |(claim_type, relation, age, claimed, incurred, stay, city, hospital, blank_no)| {
                let claim = TestClaimBuilder::default()
                    .with_claim_type(claim_type)
                    .with_relation(relation)
                    .with_age(age)
                    .with_claimed_amount(claimed)
                    .with_incurred_amount(incurred)
                    .with_stay_days(stay)
                    .with_city(city)
                    .with_hospital(hospital);
                if blank_no {
                    claim.without_claim_no()
                } else {
                    claim
                }
            },
        )
}

/// Strategy for datasets of well-formed claims
pub fn dataset_strategy(max_claims: usize) -> impl Strategy<Value = ClaimsDataset> {
    proptest::collection::vec(claim_strategy(), 0..=max_claims).prop_map(dataset_of)
}
