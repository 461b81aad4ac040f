//! Bucketizers
//!
//! A bucketizer assigns every record exactly one categorical label. Four
//! strategies are provided:
//!
//! - [`RawCategory`]: the record's own category value
//! - [`FixedBins`]: left-inclusive, right-exclusive numeric bins
//! - [`CategoryRemap`]: a static table from raw values to coarser labels
//! - [`StayLengthBands`]: an ordered rule cascade over the length of stay
//!
//! None of them drop records: a value a strategy cannot place is an error.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use core_kernel::temporal::days_between;
use domain_claims::{ClaimRecord, Column};
use crate::error::ReportError;
use crate::field::{CategoryField, NumericField};

/// Assigns a bucket label to a record
pub trait Bucketizer {
    /// Returns the label for `record`
    fn bucket(&self, record: &ClaimRecord) -> Result<String, ReportError>;

    /// Columns this strategy reads
    fn columns(&self) -> Vec<Column>;

    /// Presentation order of the labels, when the strategy defines one
    fn label_order(&self) -> Option<Vec<&str>> {
        None
    }
}

/// Pairs every record with its bucket label, failing on the first record
/// that cannot be placed
pub fn bucketize<'a, B>(
    records: &'a [ClaimRecord],
    bucketizer: &B,
) -> Result<Vec<(&'a ClaimRecord, String)>, ReportError>
where
    B: Bucketizer + ?Sized,
{
    records
        .iter()
        .map(|record| bucketizer.bucket(record).map(|label| (record, label)))
        .collect()
}

/// Uses the raw category value as the label
#[derive(Debug, Clone, Copy)]
pub struct RawCategory {
    field: CategoryField,
}

impl RawCategory {
    pub fn new(field: CategoryField) -> Self {
        Self { field }
    }
}

impl Bucketizer for RawCategory {
    fn bucket(&self, record: &ClaimRecord) -> Result<String, ReportError> {
        Ok(self.field.read(record)?.to_string())
    }

    fn columns(&self) -> Vec<Column> {
        vec![self.field.column()]
    }
}

/// A bin boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum BinEdge {
    NegInfinity,
    At(Decimal),
    PosInfinity,
}

/// Numeric bins: `edges[i] <= v < edges[i + 1]` maps to `labels[i]`
#[derive(Debug, Clone)]
pub struct FixedBins {
    field: NumericField,
    edges: Vec<BinEdge>,
    labels: Vec<String>,
}

impl FixedBins {
    /// Creates a bin table
    ///
    /// Edges must be strictly ascending and there must be exactly one more
    /// edge than labels. Infinite edges may only appear at the ends.
    pub fn new(
        field: NumericField,
        edges: Vec<BinEdge>,
        labels: Vec<impl Into<String>>,
    ) -> Result<Self, ReportError> {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();

        if labels.is_empty() {
            return Err(ReportError::InvalidBins("at least one label is required".to_string()));
        }
        if edges.len() != labels.len() + 1 {
            return Err(ReportError::InvalidBins(format!(
                "{} edges cannot bound {} labels",
                edges.len(),
                labels.len()
            )));
        }
        if edges.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ReportError::InvalidBins("edges must be strictly ascending".to_string()));
        }
        let last = edges.len() - 1;
        let misplaced_infinity = edges.iter().enumerate().any(|(i, e)| {
            (matches!(e, BinEdge::NegInfinity) && i != 0)
                || (matches!(e, BinEdge::PosInfinity) && i != last)
        });
        if misplaced_infinity {
            return Err(ReportError::InvalidBins("infinite edges must be outermost".to_string()));
        }

        Ok(Self { field, edges, labels })
    }

    /// Finds the label for a value, `None` when it is outside every bin
    pub fn label_for(&self, value: Decimal) -> Option<&str> {
        let idx = self.edges.partition_point(|e| *e <= BinEdge::At(value));
        if idx == 0 || idx == self.edges.len() {
            return None;
        }
        Some(self.labels[idx - 1].as_str())
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

impl Bucketizer for FixedBins {
    fn bucket(&self, record: &ClaimRecord) -> Result<String, ReportError> {
        let value = self.field.read(record)?;
        self.label_for(value)
            .map(str::to_string)
            .ok_or(ReportError::OutOfRange {
                column: self.field.column(),
                row: record.row(),
                value,
            })
    }

    fn columns(&self) -> Vec<Column> {
        vec![self.field.column()]
    }

    fn label_order(&self) -> Option<Vec<&str>> {
        Some(self.labels.iter().map(String::as_str).collect())
    }
}

/// Maps raw category values onto coarser labels
///
/// Values absent from the table are an error, never silently dropped. The
/// mapped labels are presented in the order they first appear in the table.
#[derive(Debug, Clone)]
pub struct CategoryRemap {
    field: CategoryField,
    table: BTreeMap<String, String>,
    labels: Vec<String>,
}

impl CategoryRemap {
    pub fn new<I, K, V>(field: CategoryField, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut table = BTreeMap::new();
        let mut labels: Vec<String> = Vec::new();
        for (raw, label) in entries {
            let label: String = label.into();
            if !labels.contains(&label) {
                labels.push(label.clone());
            }
            table.insert(raw.into(), label);
        }
        Self { field, table, labels }
    }

    /// Returns the mapped label for a raw value
    pub fn lookup(&self, raw: &str) -> Option<&str> {
        self.table.get(raw).map(String::as_str)
    }
}

impl Bucketizer for CategoryRemap {
    fn bucket(&self, record: &ClaimRecord) -> Result<String, ReportError> {
        let raw = self.field.read(record)?;
        self.lookup(raw)
            .map(str::to_string)
            .ok_or_else(|| ReportError::UnmappedCategory {
                column: self.field.column(),
                row: record.row(),
                value: raw.to_string(),
            })
    }

    fn columns(&self) -> Vec<Column> {
        vec![self.field.column()]
    }

    fn label_order(&self) -> Option<Vec<&str>> {
        Some(self.labels.iter().map(String::as_str).collect())
    }
}

/// Length-of-stay bands
///
/// The boundaries are irregular (single days near zero, a 4-7 range and an
/// open top band), so this is a rule cascade rather than a bin table.
#[derive(Debug, Clone, Copy, Default)]
pub struct StayLengthBands;

impl StayLengthBands {
    pub const LABELS: [&'static str; 6] = ["<1", "1", "2", "3", "4-7", "Above 7"];

    /// Band for a non-negative number of days
    pub fn band(days: i64) -> &'static str {
        match days {
            d if d < 1 => "<1",
            1 => "1",
            2 => "2",
            3 => "3",
            4..=7 => "4-7",
            _ => "Above 7",
        }
    }
}

impl Bucketizer for StayLengthBands {
    fn bucket(&self, record: &ClaimRecord) -> Result<String, ReportError> {
        let admission = record.admission_date()?;
        let discharge = record.discharge_date()?;
        let days = days_between(admission, discharge);
        if days < 0 {
            return Err(ReportError::NegativeDerivedDuration {
                row: record.row(),
                admission,
                discharge,
                days,
            });
        }
        Ok(Self::band(days).to_string())
    }

    fn columns(&self) -> Vec<Column> {
        vec![Column::DateOfAdmission, Column::DateOfDischarge]
    }

    fn label_order(&self) -> Option<Vec<&str>> {
        Some(Self::LABELS.to_vec())
    }
}
