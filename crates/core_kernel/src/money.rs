//! Monetary amounts
//!
//! Claim amounts are carried as `Decimal` values in the dataset's single
//! currency. This module parses them from text, divides them without
//! faulting on empty denominators, and renders them the way the reports
//! display money: whole units with thousands separators.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur while reading amounts
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    #[error("Negative amount not allowed: {0}")]
    NegativeAmount(String),

    #[error("Not a whole number: {0}")]
    NotWholeNumber(String),
}

/// Parses a text-encoded amount
///
/// Accepts plain decimals (`"1200.50"`), grouped digits (`"1,200"`) and
/// scientific notation (`"1.2e3"`), which is how spreadsheet exports
/// commonly encode large values.
pub fn parse_amount(raw: &str) -> Result<Decimal, MoneyError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(MoneyError::InvalidAmount(raw.to_string()));
    }

    let cleaned: String = trimmed.chars().filter(|c| *c != ',').collect();
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .map_err(|_| MoneyError::InvalidAmount(raw.to_string()))
}

/// Parses an amount that must not be negative
pub fn parse_non_negative_amount(raw: &str) -> Result<Decimal, MoneyError> {
    let amount = parse_amount(raw)?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(MoneyError::NegativeAmount(raw.trim().to_string()));
    }
    Ok(amount)
}

/// Parses a non-negative whole number such as an age
///
/// Integral decimals like `"34.0"` are accepted since numeric columns
/// exported from dataframes often carry a trailing fraction.
pub fn parse_whole_number(raw: &str) -> Result<u32, MoneyError> {
    let value = parse_non_negative_amount(raw)?;
    if value.fract() != Decimal::ZERO {
        return Err(MoneyError::NotWholeNumber(raw.trim().to_string()));
    }
    value
        .to_u32()
        .ok_or_else(|| MoneyError::InvalidAmount(raw.trim().to_string()))
}

/// Average of `amount` over `count`, or zero when there is nothing to divide by
pub fn average(amount: Decimal, count: u64) -> Decimal {
    if count == 0 {
        return Decimal::ZERO;
    }
    amount / Decimal::from(count)
}

/// Rounds using banker's rounding (round half to even)
pub fn round_bankers(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven)
}

/// Formats an amount as whole units with thousands separators, e.g. `1,166,667`
pub fn format_grouped(value: Decimal) -> String {
    let rounded = round_bankers(value, 0);
    if rounded.is_zero() {
        return "0".to_string();
    }

    let digits = rounded.abs().trunc().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded.is_sign_negative() {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
