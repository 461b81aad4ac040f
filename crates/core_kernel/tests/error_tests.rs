//! Tests for core_kernel error types

use core_kernel::error::CoreError;
use core_kernel::money::{parse_amount, MoneyError};
use core_kernel::temporal::{parse_calendar_date, DateOrder, TemporalError};

#[test]
fn test_core_error_validation() {
    let error = CoreError::validation("Invalid input");

    match error {
        CoreError::Validation(msg) => assert_eq!(msg, "Invalid input"),
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_core_error_configuration() {
    let error = CoreError::configuration("top_n must be positive");
    assert!(error.to_string().contains("top_n must be positive"));
}

#[test]
fn test_core_error_from_money_error() {
    let money_error = parse_amount("twelve").unwrap_err();
    let core_error: CoreError = money_error.into();

    match core_error {
        CoreError::Money(MoneyError::InvalidAmount(raw)) => assert_eq!(raw, "twelve"),
        _ => panic!("Expected Money error"),
    }
}

#[test]
fn test_core_error_from_temporal_error() {
    let temporal_error = parse_calendar_date("not a date", DateOrder::DayFirst).unwrap_err();
    let core_error: CoreError = temporal_error.into();

    assert!(matches!(core_error, CoreError::Temporal(TemporalError::UnrecognisedDate(_))));
    assert!(core_error.to_string().starts_with("Temporal error"));
}
