//! Report tables

use serde::Serialize;

use crate::aggregate::AggregatedRow;
use crate::chart::{ChartData, ChartSpec};
use crate::recipe::Recipe;

/// Display headings of a report's six columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnHeadings {
    pub bucket: &'static str,
    pub amount: &'static str,
    pub pct_amount: &'static str,
    pub count: &'static str,
    pub pct_count: &'static str,
    pub average: &'static str,
}

impl ColumnHeadings {
    pub fn as_array(&self) -> [&'static str; 6] {
        [
            self.bucket,
            self.amount,
            self.pct_amount,
            self.count,
            self.pct_count,
            self.average,
        ]
    }
}

/// The output of one recipe
///
/// Bucket rows are followed by exactly one total row. The table is a plain
/// value: running the same recipe on the same dataset yields an equal table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportTable {
    pub recipe: Recipe,
    pub title: &'static str,
    pub headings: ColumnHeadings,
    rows: Vec<AggregatedRow>,
    total: AggregatedRow,
    pub chart: ChartSpec,
}

impl ReportTable {
    pub(crate) fn new(
        recipe: Recipe,
        title: &'static str,
        headings: ColumnHeadings,
        rows: Vec<AggregatedRow>,
        total: AggregatedRow,
        chart: ChartSpec,
    ) -> Self {
        Self {
            recipe,
            title,
            headings,
            rows,
            total,
            chart,
        }
    }

    /// Bucket rows, "Others" included, total excluded
    pub fn rows(&self) -> &[AggregatedRow] {
        &self.rows
    }

    pub fn total(&self) -> &AggregatedRow {
        &self.total
    }

    /// Bucket rows followed by the total row
    pub fn all_rows(&self) -> impl Iterator<Item = &AggregatedRow> {
        self.rows.iter().chain(std::iter::once(&self.total))
    }

    /// The "Others" row, present only on capped reports with a long tail
    pub fn others(&self) -> Option<&AggregatedRow> {
        self.rows.iter().find(|r| r.rollup)
    }

    /// Finds a bucket row by label
    pub fn row(&self, label: &str) -> Option<&AggregatedRow> {
        self.rows.iter().find(|r| r.bucket_label == label)
    }

    /// Series for the report's charts
    pub fn chart_data(&self) -> ChartData {
        self.chart.select(&self.rows)
    }
}
