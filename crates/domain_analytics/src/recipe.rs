//! The seven claims break-up reports
//!
//! A recipe fixes everything about a report: how records are bucketed, which
//! amount is summed, how claims are counted, whether the long tail is capped,
//! what the total row is called and how the report is charted.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use domain_claims::Column;
use crate::aggregate::CountBasis;
use crate::bucket::{BinEdge, Bucketizer, CategoryRemap, FixedBins, RawCategory, StayLengthBands};
use crate::chart::{ChartKind, ChartSpec};
use crate::error::ReportError;
use crate::field::{AmountField, CategoryField, NumericField};
use crate::report::ColumnHeadings;

/// Age band edges in years
pub const AGE_EDGES: [i64; 10] = [0, 19, 26, 36, 46, 56, 66, 71, 76, 81];

pub const AGE_LABELS: [&str; 10] = [
    "0-18", "19-25", "26-35", "36-45", "46-55", "56-65", "66-70", "71-75", "76-80", "Above 80",
];

/// Incurred amount band edges
pub const AMOUNT_EDGES: [i64; 9] = [0, 1, 25001, 50001, 75001, 100001, 150001, 200001, 300001];

pub const AMOUNT_LABELS: [&str; 9] = [
    "0",
    "1-25000",
    "25001-50000",
    "50001-75000",
    "75001-100000",
    "100001-150000",
    "150001-200000",
    "200001-300000",
    ">300000",
];

/// Raw relation values and the group each belongs to
pub const RELATION_GROUPS: [(&str, &str); 6] = [
    ("Self", "Employee"),
    ("Spouse", "Spouse"),
    ("Son", "Child"),
    ("Daughter", "Child"),
    ("Mother", "Parents"),
    ("Father", "Parents"),
];

const TOTAL_CLAIMS: &str = "Total Claims";
const TOTAL: &str = "Total";
const GRAND_TOTAL: &str = "Grand Total";

/// A fixed report definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recipe {
    ClaimMode,
    Relationship,
    AgeBand,
    AmountBand,
    StayLength,
    City,
    Hospital,
}

/// Where a recipe's bucket labels come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketSource {
    Raw(CategoryField),
    Remap(CategoryField),
    AgeBins,
    AmountBins,
    StayBands,
}

/// Everything that distinguishes one report from another
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDefinition {
    pub title: &'static str,
    pub headings: ColumnHeadings,
    pub source: BucketSource,
    pub amount_field: AmountField,
    pub count_basis: CountBasis,
    pub top_n: bool,
    pub total_label: &'static str,
    pub chart: ChartSpec,
}

impl Recipe {
    /// Every recipe in dashboard order
    pub const ALL: [Recipe; 7] = [
        Recipe::ClaimMode,
        Recipe::Relationship,
        Recipe::AgeBand,
        Recipe::AmountBand,
        Recipe::StayLength,
        Recipe::Hospital,
        Recipe::City,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Recipe::ClaimMode => "claim_mode",
            Recipe::Relationship => "relationship",
            Recipe::AgeBand => "age_band",
            Recipe::AmountBand => "amount_band",
            Recipe::StayLength => "stay_length",
            Recipe::City => "city",
            Recipe::Hospital => "hospital",
        }
    }

    pub fn definition(&self) -> RecipeDefinition {
        match self {
            Recipe::ClaimMode => RecipeDefinition {
                title: "Cashless vs Reimbursement Analysis",
                headings: ColumnHeadings {
                    bucket: "Claim Mode",
                    amount: "Claimed_Amount",
                    pct_amount: "As a % total Amt.",
                    count: "No. of Claims (Settled & Underprocess)",
                    pct_count: "As a % of total No.",
                    average: "Avg Claim Size",
                },
                source: BucketSource::Raw(CategoryField::ClaimType),
                amount_field: AmountField::ClaimedAmount,
                count_basis: CountBasis::EveryRecord,
                top_n: false,
                total_label: TOTAL_CLAIMS,
                chart: ChartSpec::new(
                    ChartKind::VerticalBar,
                    "Cashless Vs Reimbursement (In Value)",
                    "Cashless Vs Reimbursement (In Nos)",
                    "Claim Mode",
                ),
            },
            Recipe::Relationship => RecipeDefinition {
                title: "Relationship Wise Settled & Underprocess Claims Break Up",
                headings: ColumnHeadings {
                    bucket: "Relation",
                    amount: "Claim Amt",
                    pct_amount: "As a % total Amt.",
                    count: "No of Claims",
                    pct_count: "As a % of total No.s",
                    average: "Avg Claim Size",
                },
                source: BucketSource::Remap(CategoryField::Relation),
                amount_field: AmountField::IncurredAmount,
                count_basis: CountBasis::EveryRecord,
                top_n: false,
                total_label: TOTAL,
                chart: ChartSpec::new(
                    ChartKind::Pie,
                    "Relationship Wise (In Value)",
                    "Relationship Wise (In Nos)",
                    "Relation",
                )
                .highlighting("Parents"),
            },
            Recipe::AgeBand => banded(
                "Age-wise Claims Break Up",
                "Age Group",
                BucketSource::AgeBins,
                "As a % total Amt.",
                ChartSpec::new(
                    ChartKind::HorizontalBar,
                    "Age-wise Claims (In Value)",
                    "Age-wise Claims (In Nos)",
                    "Age Group",
                ),
            ),
            Recipe::AmountBand => banded(
                "Amount Bandwise Claims Breakup",
                "Amount Band",
                BucketSource::AmountBins,
                "As a % total Amt.",
                ChartSpec::new(
                    ChartKind::VerticalBar,
                    "Amount Band (In Value)",
                    "Amount Band (In Nos)",
                    "Amount Band",
                ),
            ),
            Recipe::StayLength => banded(
                "Stay wise claims breakup",
                "Day Stay Group",
                BucketSource::StayBands,
                "As a % total Amt.",
                ChartSpec::new(
                    ChartKind::VerticalBar,
                    "No of Days (In Value)",
                    "No of Days (In Nos)",
                    "No of Days",
                )
                .with_average_overlay(),
            ),
            Recipe::City => RecipeDefinition {
                top_n: true,
                ..banded(
                    "City Wise Claims Data",
                    "City_Name",
                    BucketSource::Raw(CategoryField::CityName),
                    "As a % total Amt.",
                    ChartSpec::new(
                        ChartKind::VerticalBar,
                        "City Wise (In Value)",
                        "City Wise (In Nos)",
                        "City Name",
                    )
                    .excluding_others()
                    .limited_to(5),
                )
            },
            Recipe::Hospital => RecipeDefinition {
                top_n: true,
                ..banded(
                    "Hospital Wise Claims Analysis",
                    "Hospital_Name",
                    BucketSource::Raw(CategoryField::HospitalName),
                    "Expressed As a % total Amt.",
                    ChartSpec::new(
                        ChartKind::VerticalBar,
                        "Hospital Wise (In Value)",
                        "Hospital Wise (In Nos)",
                        "Hospital Name",
                    )
                    .with_average_overlay()
                    .excluding_others(),
                )
            },
        }
    }

    /// Builds the bucketizer the recipe groups records with
    pub fn bucketizer(&self) -> Result<Box<dyn Bucketizer>, ReportError> {
        Ok(match self.definition().source {
            BucketSource::Raw(field) => Box::new(RawCategory::new(field)),
            BucketSource::Remap(field) => Box::new(CategoryRemap::new(field, RELATION_GROUPS)),
            BucketSource::AgeBins => Box::new(bins(NumericField::Age, &AGE_EDGES, &AGE_LABELS)?),
            BucketSource::AmountBins => Box::new(bins(
                NumericField::IncurredAmount,
                &AMOUNT_EDGES,
                &AMOUNT_LABELS,
            )?),
            BucketSource::StayBands => Box::new(StayLengthBands),
        })
    }

    /// Columns a run of this recipe reads
    pub fn columns(&self) -> Result<Vec<Column>, ReportError> {
        let definition = self.definition();
        let mut columns = self.bucketizer()?.columns();
        columns.push(definition.amount_field.column());
        if definition.count_basis == CountBasis::ClaimNumber {
            columns.push(Column::ClaimNo);
        }
        Ok(columns)
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Definition shared by the reports that sum incurred amounts per claim number
fn banded(
    title: &'static str,
    bucket_heading: &'static str,
    source: BucketSource,
    pct_amount_heading: &'static str,
    chart: ChartSpec,
) -> RecipeDefinition {
    RecipeDefinition {
        title,
        headings: ColumnHeadings {
            bucket: bucket_heading,
            amount: "Claim_Amt",
            pct_amount: pct_amount_heading,
            count: "No_of_Claims",
            pct_count: "As a % of total Nos.",
            average: "Avg Claim Size",
        },
        source,
        amount_field: AmountField::IncurredAmount,
        count_basis: CountBasis::ClaimNumber,
        top_n: false,
        total_label: GRAND_TOTAL,
        chart,
    }
}

/// Closed-below, open-above bins over `edges`
fn bins(field: NumericField, edges: &[i64], labels: &[&str]) -> Result<FixedBins, ReportError> {
    let edges = edges
        .iter()
        .map(|e| BinEdge::At(Decimal::from(*e)))
        .chain(std::iter::once(BinEdge::PosInfinity))
        .collect();
    FixedBins::new(field, edges, labels.to_vec())
}
