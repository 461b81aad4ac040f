//! Chart-ready views of a report
//!
//! Every report drives a value chart and a count chart. A [`ChartSpec`]
//! describes both; [`ChartData`] holds the series drawn from the report rows.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::aggregate::AggregatedRow;

/// How the series are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    VerticalBar,
    HorizontalBar,
    Pie,
}

/// Chart presentation for one report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub value_title: &'static str,
    pub count_title: &'static str,
    pub axis_label: &'static str,
    /// Draw the average claim size as a line over the value chart
    pub average_overlay: bool,
    /// Leave the "Others" row out of the chart
    pub exclude_others: bool,
    /// Draw at most this many buckets
    pub max_buckets: Option<usize>,
    /// Bucket drawn emphasised, e.g. an exploded pie slice
    pub highlight: Option<&'static str>,
}

impl ChartSpec {
    pub fn new(kind: ChartKind, value_title: &'static str, count_title: &'static str, axis_label: &'static str) -> Self {
        Self {
            kind,
            value_title,
            count_title,
            axis_label,
            average_overlay: false,
            exclude_others: false,
            max_buckets: None,
            highlight: None,
        }
    }

    pub fn with_average_overlay(mut self) -> Self {
        self.average_overlay = true;
        self
    }

    pub fn excluding_others(mut self) -> Self {
        self.exclude_others = true;
        self
    }

    pub fn limited_to(mut self, buckets: usize) -> Self {
        self.max_buckets = Some(buckets);
        self
    }

    pub fn highlighting(mut self, label: &'static str) -> Self {
        self.highlight = Some(label);
        self
    }

    /// Selects the series to draw from report rows (total row excluded)
    pub fn select(&self, rows: &[AggregatedRow]) -> ChartData {
        let limit = self.max_buckets.unwrap_or(usize::MAX);
        let drawn: Vec<&AggregatedRow> = rows
            .iter()
            .filter(|r| !(self.exclude_others && r.rollup))
            .take(limit)
            .collect();

        ChartData {
            labels: drawn.iter().map(|r| r.bucket_label.clone()).collect(),
            amounts: drawn.iter().map(|r| r.total_amount).collect(),
            counts: drawn.iter().map(|r| r.claim_count).collect(),
            averages: self
                .average_overlay
                .then(|| drawn.iter().map(|r| r.avg_claim_size).collect()),
            highlight: self
                .highlight
                .filter(|h| drawn.iter().any(|r| r.bucket_label == *h))
                .map(str::to_string),
        }
    }
}

/// Series for the value and count charts of one report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub amounts: Vec<Decimal>,
    pub counts: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub averages: Option<Vec<Decimal>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
}
