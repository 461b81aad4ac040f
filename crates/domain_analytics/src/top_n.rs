//! Top-N capping
//!
//! Keeps the N largest buckets by amount and folds the remainder into a
//! single "Others" row.

use rust_decimal::Decimal;
use tracing::debug;

use crate::aggregate::{AggregatedRow, Aggregation};

/// Label of the row that absorbs buckets ranked beyond N
pub const OTHERS_LABEL: &str = "Others";

/// Caps an aggregation at `n` buckets
///
/// Rows are ranked by amount descending with ties broken by label ascending.
/// When there are more than `n` buckets the tail is summed into an "Others"
/// row whose percentages use the same grand totals as the kept rows. That row
/// is flagged as the rollup, so a real bucket named "Others" stays distinct.
pub fn cap(aggregation: Aggregation, n: usize) -> Aggregation {
    let Aggregation { mut rows, grand } = aggregation;
    rows.sort_by(|a, b| {
        b.total_amount
            .cmp(&a.total_amount)
            .then_with(|| a.bucket_label.cmp(&b.bucket_label))
    });

    if rows.len() <= n {
        return Aggregation { rows, grand };
    }

    let tail = rows.split_off(n);
    let amount: Decimal = tail.iter().map(|r| r.total_amount).sum();
    let count: u64 = tail.iter().map(|r| r.claim_count).sum();
    debug!(kept = n, folded = tail.len(), "Folding buckets into Others");

    rows.push(AggregatedRow::derive(OTHERS_LABEL, amount, count, grand).into_rollup());
    Aggregation { rows, grand }
}
