//! Pre-built Test Fixtures
//!
//! Provides ready-to-use claims exports. The figures are small and
//! predictable so that expected report values can be worked out by hand.

use core_kernel::DateOrder;
use domain_claims::{ClaimsDataset, IngestOptions};
use rust_decimal_macros::dec;

use crate::builders::{dataset_of, TestClaimBuilder};

/// Header row of the claims export
pub const CLAIMS_HEADER: &str = "Claim_No,Claim_Type,Relation,Age,Claimed_Amount,Incurred_Amount,\
Date_of_Admission,Date_of_Discharge,City_Name,Hospital_Name";

/// Fixture for raw CSV text
pub struct CsvFixtures;

impl CsvFixtures {
    /// Six claims covering every recipe, with mixed date and number encodings
    pub fn sample_export() -> String {
        [
            CLAIMS_HEADER,
            "C001,Cashless,Self,34,\"1,200\",1000,2024-01-01,2024-01-04,Pune,City Care",
            "C002,Cashless,Spouse,29.0,55000,52000,05/02/2024,06/02/2024,Pune,City Care",
            "C003,Reimbursement,Son,8,24000,24000,10-Mar-2024,10-Mar-2024,Mumbai,Sunrise",
            "C004,Cashless,Mother,67,150000,140000,2024-04-01,2024-04-09,Delhi,Apex Heart",
            "C005,Reimbursement,Father,72,0,0,2024-05-01,2024-05-03,Mumbai,Sunrise",
            ",Cashless,Daughter,12,3000,2500,2024-06-01,2024-06-02,Pune,City Care",
        ]
        .join("\n")
    }

    /// The sample export with an extra column and without `Hospital_Name`
    pub fn export_without_hospital() -> String {
        [
            "Claim_No,Claim_Type,Relation,Age,Claimed_Amount,Incurred_Amount,\
Date_of_Admission,Date_of_Discharge,City_Name,Policy_No",
            "C001,Cashless,Self,34,1200,1000,2024-01-01,2024-01-04,Pune,P-1",
            "C002,Reimbursement,Spouse,29,800,700,2024-01-05,2024-01-06,Delhi,P-2",
        ]
        .join("\n")
    }

    /// Header only
    pub fn empty_export() -> String {
        CLAIMS_HEADER.to_string()
    }
}

/// Fixture for loaded datasets
pub struct DatasetFixtures;

impl DatasetFixtures {
    /// The sample export parsed day-first
    pub fn sample() -> ClaimsDataset {
        ClaimsDataset::from_reader(
            CsvFixtures::sample_export().as_bytes(),
            IngestOptions { date_order: DateOrder::DayFirst },
        )
        .expect("sample export should load")
    }

    /// Cashless 1000 and 2000, Reimbursement 500
    pub fn claim_mode_example() -> ClaimsDataset {
        dataset_of([
            TestClaimBuilder::default().with_claim_type("Cashless").with_amount(dec!(1000)),
            TestClaimBuilder::default().with_claim_type("Cashless").with_amount(dec!(2000)),
            TestClaimBuilder::default().with_claim_type("Reimbursement").with_amount(dec!(500)),
        ])
    }

    /// Stays of 0, 1, 2, 5 and 9 days
    pub fn stay_example() -> ClaimsDataset {
        dataset_of(
            [0, 1, 2, 5, 9]
                .into_iter()
                .map(|days| TestClaimBuilder::default().with_stay_days(days)),
        )
    }

    /// `n` cities, the i-th (1-based) with an incurred amount of `i * 1000`
    pub fn cities(n: usize) -> ClaimsDataset {
        dataset_of((1..=n).map(|i| {
            TestClaimBuilder::new(i)
                .with_city(format!("City{i:02}"))
                .with_incurred_amount(rust_decimal::Decimal::from(i as u64 * 1000))
        }))
    }
}
