//! `tabular-report` is a small library of schema-first in-memory tables ([`types::DataSet`])
//! with the read-only operations a tabular report needs, plus the fixed employee/department
//! report built from them.
//!
//! ## What you can do with a table
//!
//! - project columns: [`processing::select`]
//! - filter rows by closure or column predicate: [`processing::filter`], [`processing::filter_by`]
//! - take a bounded prefix: [`processing::head`]
//! - count distinct values: [`processing::value_counts`]
//! - inner join on column equality: [`processing::inner_join`]
//!
//! Every operation borrows its inputs and returns a new table, so source tables never change.
//! Rows carry labels ([`types::DataSet::index`]) that survive projection, filtering and
//! prefix selection, the way a pandas index does.
//!
//! ## Engines
//!
//! The same operations run on two backends behind [`engine::TableEngine`]:
//! [`engine::NativeEngine`] (row-major, this crate) and [`engine::PolarsEngine`] (Polars lazy
//! frames). They produce identical results, which the integration tests check.
//!
//! ## The report
//!
//! ```rust
//! use tabular_report::report::{run, ReportOptions, ReportStep};
//!
//! # fn main() -> Result<(), tabular_report::ReportError> {
//! let mut out = Vec::new();
//! let report = run(&mut out, &ReportOptions::default())?;
//!
//! let joined = report.table(ReportStep::Join).unwrap();
//! assert_eq!(joined.row_count(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`types`]: schema + in-memory dataset types
//! - [`processing`]: native table operations
//! - [`engine`]: native and Polars engines
//! - [`format`]: pandas-style text, CSV and JSON rendering
//! - [`report`]: the six-step report, its options and observer hooks
//! - [`error`]: error types

pub mod engine;
pub mod error;
pub mod format;
pub mod processing;
pub mod report;
pub mod types;

pub use error::{ReportError, ReportResult};
