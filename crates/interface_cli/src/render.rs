//! Report rendering
//!
//! Text output is a pipe-separated table per report: amounts and averages as
//! whole numbers with thousands separators, percentages as whole numbers
//! with `%`. Rounding is half to even and happens only here.

use serde::Serialize;

use core_kernel::money::format_grouped;
use domain_analytics::{AggregatedRow, ChartData, Recipe, ReportError, ReportOutcome, ReportTable};
use crate::error::CliError;

/// Display cells of one row, in heading order
pub fn row_cells(row: &AggregatedRow) -> [String; 6] {
    [
        row.bucket_label.clone(),
        format_grouped(row.total_amount),
        row.pct_of_total_amount.to_string(),
        row.claim_count.to_string(),
        row.pct_of_total_count.to_string(),
        format_grouped(row.avg_claim_size),
    ]
}

/// Renders a report as a titled text table
pub fn render_table(table: &ReportTable) -> String {
    let headings = table.headings.as_array();
    let rows: Vec<[String; 6]> = table.all_rows().map(row_cells).collect();

    let mut widths = headings.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(table.title);
    out.push('\n');
    push_line(&mut out, headings.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, rule.iter().map(String::as_str), &widths);
    for row in &rows {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

/// Label first, numbers right-aligned
fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize; 6]) {
    let line: Vec<String> = cells
        .zip(widths.iter().copied())
        .enumerate()
        .map(|(i, (cell, width))| {
            if i == 0 {
                format!("{cell:<width$}")
            } else {
                format!("{cell:>width$}")
            }
        })
        .collect();
    out.push_str(line.join(" | ").trim_end());
    out.push('\n');
}

/// Renders the line printed in place of a failed report
pub fn render_failure(recipe: Recipe, error: &ReportError) -> String {
    format!("{} ({}) failed: {}\n", recipe.definition().title, recipe, error)
}

/// Renders every outcome as text, reports separated by a blank line
pub fn render_text(outcomes: &[ReportOutcome]) -> String {
    outcomes
        .iter()
        .map(|outcome| match &outcome.result {
            Ok(table) => render_table(table),
            Err(e) => render_failure(outcome.recipe, e),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// JSON document for one report
#[derive(Debug, Serialize)]
pub struct ReportDocument<'a> {
    pub recipe: Recipe,
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<&'a ReportTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart_data: Option<ChartData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<'a> From<&'a ReportOutcome> for ReportDocument<'a> {
    fn from(outcome: &'a ReportOutcome) -> Self {
        let table = outcome.result.as_ref().ok();
        Self {
            recipe: outcome.recipe,
            title: outcome.recipe.definition().title,
            table,
            chart_data: table.map(ReportTable::chart_data),
            error: outcome.result.as_ref().err().map(ToString::to_string),
        }
    }
}

/// Renders every outcome as a pretty-printed JSON array
pub fn render_json(outcomes: &[ReportOutcome]) -> Result<String, CliError> {
    let documents: Vec<ReportDocument<'_>> = outcomes.iter().map(ReportDocument::from).collect();
    Ok(serde_json::to_string_pretty(&documents)?)
}
