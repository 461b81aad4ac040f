//! Calendar dates
//!
//! Admission and discharge dates arrive as free text. Unambiguous shapes
//! (ISO dates, named months) are always accepted; purely numeric
//! `12/05/2024`-style dates are read according to a [`DateOrder`].

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Unrecognised calendar date: {0:?}")]
    UnrecognisedDate(String),
}

/// How to read numeric dates whose first two fields could be day or month
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateOrder {
    /// `DD/MM/YYYY`
    #[default]
    DayFirst,
    /// `MM/DD/YYYY`
    MonthFirst,
}

impl DateOrder {
    fn numeric_formats(&self) -> &'static [&'static str] {
        match self {
            DateOrder::DayFirst => &["%d-%m-%Y", "%d/%m/%Y", "%d.%m.%Y"],
            DateOrder::MonthFirst => &["%m-%d-%Y", "%m/%d/%Y", "%m.%d.%Y"],
        }
    }
}

const UNAMBIGUOUS_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d-%b-%Y",
    "%d %b %Y",
    "%b %d, %Y",
    "%d-%B-%Y",
    "%d %B %Y",
    "%B %d, %Y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

/// Parses a calendar date from text
///
/// Timestamps are accepted and truncated to their date.
pub fn parse_calendar_date(raw: &str, order: DateOrder) -> Result<NaiveDate, TemporalError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(TemporalError::UnrecognisedDate(raw.to_string()));
    }

    UNAMBIGUOUS_DATE_FORMATS
        .iter()
        .chain(order.numeric_formats())
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
        .ok_or_else(|| TemporalError::UnrecognisedDate(raw.to_string()))
}

/// Whole days from `start` to `end`; negative when `end` precedes `start`
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}
