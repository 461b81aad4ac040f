//! Custom Test Assertions
//!
//! Provides report invariant checks that give more meaningful failure
//! messages than bare `assert!`s.

use core_kernel::Percentage;
use domain_analytics::ReportTable;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Tolerance for sums of unrounded percentages
pub const PERCENT_TOLERANCE: Decimal = dec!(0.000001);

/// Asserts that the bucket rows' amount and count percentages each sum to 100
///
/// Shares of a zero grand total are all 0, so a zero amount total is
/// accepted with a 0 sum.
///
/// # Panics
///
/// Panics if either sum is off by more than [`PERCENT_TOLERANCE`]
pub fn assert_percentages_sum_to_100(table: &ReportTable) {
    if table.rows().is_empty() {
        return;
    }

    let amount_pct: Percentage = table.rows().iter().map(|r| r.pct_of_total_amount).sum();
    let expected_amount = if table.total().total_amount.is_zero() {
        Decimal::ZERO
    } else {
        dec!(100)
    };
    assert!(
        (amount_pct.value() - expected_amount).abs() <= PERCENT_TOLERANCE,
        "{}: amount percentages sum to {}, expected {}",
        table.recipe,
        amount_pct.value(),
        expected_amount
    );

    let count_pct: Percentage = table.rows().iter().map(|r| r.pct_of_total_count).sum();
    assert!(
        (count_pct.value() - dec!(100)).abs() <= PERCENT_TOLERANCE,
        "{}: count percentages sum to {}, expected 100",
        table.recipe,
        count_pct.value()
    );
}

/// Asserts the total row sums the bucket rows and carries 100% on both shares
///
/// # Panics
///
/// Panics if the total row's label, sums or percentages are wrong
pub fn assert_total_row(table: &ReportTable, label: &str) {
    let total = table.total();
    assert_eq!(total.bucket_label, label, "{}: wrong total label", table.recipe);

    let amount: Decimal = table.rows().iter().map(|r| r.total_amount).sum();
    let count: u64 = table.rows().iter().map(|r| r.claim_count).sum();
    assert_eq!(total.total_amount, amount, "{}: total amount mismatch", table.recipe);
    assert_eq!(total.claim_count, count, "{}: total count mismatch", table.recipe);
    assert_eq!(total.pct_of_total_amount, Percentage::HUNDRED);
    assert_eq!(total.pct_of_total_count, Percentage::HUNDRED);

    let last = table.all_rows().last().map(|r| r.bucket_label.as_str());
    assert_eq!(last, Some(label), "{}: total row must be last", table.recipe);
}

/// Asserts `avg_claim_size == total_amount / claim_count` on every row with claims
/// and `0` on rows without
///
/// # Panics
///
/// Panics on the first row that does not reconcile
pub fn assert_averages_reconcile(table: &ReportTable) {
    for row in table.all_rows() {
        let expected = if row.claim_count == 0 {
            Decimal::ZERO
        } else {
            row.total_amount / Decimal::from(row.claim_count)
        };
        assert_eq!(
            row.avg_claim_size, expected,
            "{}: average of {:?} does not reconcile: {} / {}",
            table.recipe, row.bucket_label, row.total_amount, row.claim_count
        );
    }
}
