//! Report pipeline
//!
//! Runs a recipe end to end: bucketize, aggregate, order, optionally cap,
//! then append the total row. The dataset is only ever read.

use tracing::{debug, instrument, warn};

use domain_claims::ClaimsDataset;
use crate::aggregate::aggregate;
use crate::bucket::bucketize;
use crate::error::ReportError;
use crate::recipe::Recipe;
use crate::report::ReportTable;
use crate::top_n::cap;
use crate::totals::append_total;

/// Default number of buckets kept by capped reports
pub const DEFAULT_TOP_N: usize = 10;

/// Outcome of one recipe in a full run
#[derive(Debug)]
pub struct ReportOutcome {
    pub recipe: Recipe,
    pub result: Result<ReportTable, ReportError>,
}

impl ReportOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Runs report recipes over a claims dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportPipeline {
    top_n: usize,
}

impl Default for ReportPipeline {
    fn default() -> Self {
        Self { top_n: DEFAULT_TOP_N }
    }
}

impl ReportPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many buckets capped reports keep before folding into "Others"
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Produces one report
    #[instrument(skip(self, dataset, recipe), fields(recipe = %recipe, records = dataset.len()))]
    pub fn run(&self, dataset: &ClaimsDataset, recipe: Recipe) -> Result<ReportTable, ReportError> {
        let definition = recipe.definition();
        dataset.require_columns(&recipe.columns()?)?;

        let bucketizer = recipe.bucketizer()?;
        let bucketed = bucketize(dataset.records(), bucketizer.as_ref())?;

        let mut aggregation = aggregate(&bucketed, definition.amount_field, definition.count_basis)?;
        if let Some(order) = bucketizer.label_order() {
            aggregation = aggregation.ordered_by(&order);
        }
        if definition.top_n {
            aggregation = cap(aggregation, self.top_n);
        }

        let (rows, total) = append_total(aggregation, definition.total_label);
        debug!(buckets = rows.len(), claims = total.claim_count, "Report built");

        Ok(ReportTable::new(
            recipe,
            definition.title,
            definition.headings,
            rows,
            total,
            definition.chart,
        ))
    }

    /// Produces every report in dashboard order
    ///
    /// A failing recipe is reported in its outcome and does not stop the
    /// others.
    #[instrument(skip(self, dataset), fields(records = dataset.len()))]
    pub fn run_all(&self, dataset: &ClaimsDataset) -> Vec<ReportOutcome> {
        Recipe::ALL
            .into_iter()
            .map(|recipe| {
                let result = self.run(dataset, recipe);
                if let Err(e) = &result {
                    warn!(%recipe, error = %e, "Report failed");
                }
                ReportOutcome { recipe, result }
            })
            .collect()
    }
}
