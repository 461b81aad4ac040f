//! Percentage-of-total values
//!
//! A `Percentage` keeps the full-precision share (e.g. `85.714285...`) so that
//! summing several of them is not corrupted by early rounding. Rounding to a
//! whole percent happens only when the value is displayed.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use crate::money::round_bankers;

/// A share of a whole, expressed on a 0-100 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(Decimal);

impl Percentage {
    /// The whole: 100%
    pub const HUNDRED: Percentage = Percentage(Decimal::ONE_HUNDRED);

    /// Creates a percentage from a value already on the 0-100 scale
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// 0%
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// `part` as a share of `whole`; 0% when `whole` is zero
    ///
    /// The ratio is taken before scaling to 100, so any `part` no larger
    /// than `whole` stays in range. A ratio beyond `Decimal`'s range
    /// saturates at `Decimal::MAX`.
    pub fn of(part: Decimal, whole: Decimal) -> Self {
        if whole.is_zero() {
            return Self::zero();
        }
        part.checked_div(whole)
            .and_then(|ratio| ratio.checked_mul(dec!(100)))
            .map_or(Self(Decimal::MAX), Self)
    }

    /// Count-based variant of [`Percentage::of`]
    pub fn of_count(part: u64, whole: u64) -> Self {
        Self::of(Decimal::from(part), Decimal::from(whole))
    }

    /// Returns the unrounded value
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns the value rounded to a whole percent (half to even)
    pub fn rounded(&self) -> Decimal {
        round_bankers(self.0, 0)
    }
}

impl Add for Percentage {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sum for Percentage {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, p| acc + p)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.rounded();
        if rounded.is_zero() {
            return write!(f, "0%");
        }
        write!(f, "{}%", rounded.trunc())
    }
}
