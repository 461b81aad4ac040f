//! Claims Break-Up Reporting Domain
//!
//! This crate turns a [`domain_claims::ClaimsDataset`] into the seven
//! break-up reports of a claims dashboard. Every report runs the same
//! pipeline; only its [`Recipe`] differs.
//!
//! # Pipeline
//!
//! ```text
//! records -> Bucketizer -> aggregate -> order -> [Top-N cap] -> total row -> ReportTable
//! ```
//!
//! - **Bucketizers**: raw category, fixed numeric bins, category remap, stay-length bands
//! - **Aggregation**: per-bucket amount and claim count, percentages of the grand totals,
//!   zero-guarded average claim size
//! - **Top-N**: the N largest buckets by amount, the rest folded into "Others"
//! - **Totals**: one trailing row with both percentages at exactly 100
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_analytics::{Recipe, ReportPipeline};
//!
//! let pipeline = ReportPipeline::new().with_top_n(10);
//! let table = pipeline.run(&dataset, Recipe::ClaimMode)?;
//!
//! for row in table.all_rows() {
//!     println!("{} {}", row.bucket_label, row.total_amount);
//! }
//! ```

pub mod aggregate;
pub mod bucket;
pub mod chart;
pub mod error;
pub mod field;
pub mod pipeline;
pub mod recipe;
pub mod report;
pub mod top_n;
pub mod totals;

pub use aggregate::{aggregate, AggregatedRow, Aggregation, CountBasis, GrandTotals};
pub use bucket::{bucketize, BinEdge, Bucketizer, CategoryRemap, FixedBins, RawCategory, StayLengthBands};
pub use chart::{ChartData, ChartKind, ChartSpec};
pub use error::ReportError;
pub use field::{AmountField, CategoryField, NumericField};
pub use pipeline::{ReportOutcome, ReportPipeline, DEFAULT_TOP_N};
pub use recipe::{Recipe, RecipeDefinition};
pub use report::{ColumnHeadings, ReportTable};
pub use top_n::{cap, OTHERS_LABEL};
pub use totals::append_total;
