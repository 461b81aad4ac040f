//! Per-bucket aggregation
//!
//! One pass over the bucketed records accumulates the amount and claim
//! count of every bucket. Percentages are taken against the grand totals of
//! that pass and kept at full precision; averages are zero-guarded.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use core_kernel::money::average;
use core_kernel::Percentage;
use domain_claims::ClaimRecord;
use crate::error::ReportError;
use crate::field::AmountField;

/// Which records contribute to a bucket's claim count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CountBasis {
    /// Every record counts as one claim
    EveryRecord,
    /// Only records carrying a claim number count
    ClaimNumber,
}

impl CountBasis {
    fn counts(&self, record: &ClaimRecord) -> bool {
        match self {
            CountBasis::EveryRecord => true,
            CountBasis::ClaimNumber => record.claim_no().is_some(),
        }
    }
}

/// Grand totals the percentages of an aggregation are taken against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GrandTotals {
    pub amount: Decimal,
    pub count: u64,
}

/// One bucket of a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregatedRow {
    pub bucket_label: String,
    pub total_amount: Decimal,
    pub claim_count: u64,
    pub pct_of_total_amount: Percentage,
    pub pct_of_total_count: Percentage,
    pub avg_claim_size: Decimal,
    /// Set on the row that folds the buckets ranked beyond Top-N
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub rollup: bool,
}

impl AggregatedRow {
    /// Builds a row and its derived fields against the given grand totals
    pub fn derive(label: impl Into<String>, amount: Decimal, count: u64, grand: GrandTotals) -> Self {
        Self {
            bucket_label: label.into(),
            total_amount: amount,
            claim_count: count,
            pct_of_total_amount: Percentage::of(amount, grand.amount),
            pct_of_total_count: Percentage::of_count(count, grand.count),
            avg_claim_size: average(amount, count),
            rollup: false,
        }
    }

    /// Marks this row as the Top-N rollup
    pub fn into_rollup(mut self) -> Self {
        self.rollup = true;
        self
    }
}

/// Aggregated buckets plus the totals their percentages refer to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    pub rows: Vec<AggregatedRow>,
    pub grand: GrandTotals,
}

impl Aggregation {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Reorders rows to follow `order`; labels not listed keep ascending order after it
    pub fn ordered_by(mut self, order: &[&str]) -> Self {
        let rank = |label: &str| order.iter().position(|o| *o == label).unwrap_or(order.len());
        self.rows.sort_by(|a, b| {
            rank(&a.bucket_label)
                .cmp(&rank(&b.bucket_label))
                .then_with(|| a.bucket_label.cmp(&b.bucket_label))
        });
        self
    }
}

#[derive(Default)]
struct Accumulator {
    amount: Decimal,
    count: u64,
}

/// Aggregates bucketed records
///
/// Rows come out in ascending label order, one per label present. When no
/// record counts as a claim the aggregation is empty. A sum beyond
/// `Decimal`'s range fails with [`ReportError::AmountOverflow`].
pub fn aggregate(
    bucketed: &[(&ClaimRecord, String)],
    amount_field: AmountField,
    basis: CountBasis,
) -> Result<Aggregation, ReportError> {
    let mut buckets: BTreeMap<&str, Accumulator> = BTreeMap::new();
    let mut grand = GrandTotals::default();
    for (record, label) in bucketed {
        let amount = amount_field.read(record)?;
        let overflow = || ReportError::AmountOverflow {
            column: amount_field.column(),
            row: record.row(),
        };
        grand.amount = grand.amount.checked_add(amount).ok_or_else(overflow)?;

        let acc = buckets.entry(label.as_str()).or_default();
        acc.amount = acc.amount.checked_add(amount).ok_or_else(overflow)?;
        if basis.counts(record) {
            acc.count += 1;
            grand.count += 1;
        }
    }

    if grand.count == 0 {
        debug!(records = bucketed.len(), "No claims to aggregate");
        return Ok(Aggregation::default());
    }

    let rows = buckets
        .into_iter()
        .map(|(label, acc)| AggregatedRow::derive(label, acc.amount, acc.count, grand))
        .collect();

    Ok(Aggregation { rows, grand })
}
