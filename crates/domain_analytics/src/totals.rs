//! Grand total row

use core_kernel::money::average;
use core_kernel::Percentage;
use crate::aggregate::{AggregatedRow, Aggregation};

/// Builds the total row for an aggregation
///
/// Amount and count are the sums of every row, Others included. Both
/// percentages are exactly 100 and the average is zero-guarded.
pub fn total_row(aggregation: &Aggregation, label: &str) -> AggregatedRow {
    let amount = aggregation.rows.iter().map(|r| r.total_amount).sum();
    let count = aggregation.rows.iter().map(|r| r.claim_count).sum();
    AggregatedRow {
        bucket_label: label.to_string(),
        total_amount: amount,
        claim_count: count,
        pct_of_total_amount: Percentage::HUNDRED,
        pct_of_total_count: Percentage::HUNDRED,
        avg_claim_size: average(amount, count),
        rollup: false,
    }
}

/// Splits an aggregation into its rows and a trailing total row
pub fn append_total(aggregation: Aggregation, label: &str) -> (Vec<AggregatedRow>, AggregatedRow) {
    let total = total_row(&aggregation, label);
    (aggregation.rows, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::GrandTotals;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_total_row_sums_and_fixes_percentages() {
        let grand = GrandTotals { amount: dec!(3500), count: 3 };
        let aggregation = Aggregation {
            rows: vec![
                AggregatedRow::derive("Cashless", dec!(3000), 2, grand),
                AggregatedRow::derive("Reimbursement", dec!(500), 1, grand),
            ],
            grand,
        };

        let (rows, total) = append_total(aggregation, "Total Claims");

        assert_eq!(rows.len(), 2);
        assert_eq!(total.bucket_label, "Total Claims");
        assert_eq!(total.total_amount, dec!(3500));
        assert_eq!(total.claim_count, 3);
        assert_eq!(total.pct_of_total_amount, Percentage::HUNDRED);
        assert_eq!(total.pct_of_total_count, Percentage::HUNDRED);
        assert_eq!(total.avg_claim_size.round_dp(2), dec!(1166.67));
    }

    #[test]
    fn test_total_of_empty_aggregation() {
        let (rows, total) = append_total(Aggregation::default(), "Grand Total");

        assert!(rows.is_empty());
        assert_eq!(total.claim_count, 0);
        assert_eq!(total.avg_claim_size, Decimal::ZERO);
        assert_eq!(total.pct_of_total_amount, Percentage::HUNDRED);
    }
}
