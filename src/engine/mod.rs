//! Engines that execute table operations.
//!
//! The report pipeline is written against [`TableEngine`], so the same six steps can run on
//! either backend:
//!
//! - [`NativeEngine`]: the row-major operations in [`crate::processing`]
//! - [`PolarsEngine`]: converts to a Polars `DataFrame` and uses the lazy API
//!
//! Both engines validate column names up front and report them as
//! [`crate::error::ReportError::UnknownColumn`], and both produce identical row labels.

mod frame;

use std::fmt;

use crate::error::ReportResult;
use crate::processing::{self, JoinOptions, Predicate, ValueCounts, ValueCountsOptions};
use crate::types::DataSet;

pub use frame::{from_frame, to_frame, PolarsEngine};

/// The operations the report needs from a table backend.
pub trait TableEngine: Send + Sync {
    /// Short backend name used in logs.
    fn name(&self) -> &'static str;

    /// Keep only `columns`, in the requested order.
    fn select(&self, dataset: &DataSet, columns: &[String]) -> ReportResult<DataSet>;

    /// Keep only rows matching `predicate`.
    fn filter_by(&self, dataset: &DataSet, predicate: &Predicate) -> ReportResult<DataSet>;

    /// First `n` rows (all rows if fewer exist).
    fn head(&self, dataset: &DataSet, n: usize) -> ReportResult<DataSet>;

    /// Distinct values of `column` with their counts.
    fn value_counts(
        &self,
        dataset: &DataSet,
        column: &str,
        options: &ValueCountsOptions,
    ) -> ReportResult<ValueCounts>;

    /// Equality inner join.
    fn inner_join(
        &self,
        left: &DataSet,
        right: &DataSet,
        left_on: &str,
        right_on: &str,
        options: &JoinOptions,
    ) -> ReportResult<DataSet>;
}

/// Engine backed by [`crate::processing`].
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeEngine;

impl TableEngine for NativeEngine {
    fn name(&self) -> &'static str {
        "native"
    }

    fn select(&self, dataset: &DataSet, columns: &[String]) -> ReportResult<DataSet> {
        processing::select(dataset, columns)
    }

    fn filter_by(&self, dataset: &DataSet, predicate: &Predicate) -> ReportResult<DataSet> {
        processing::filter_by(dataset, predicate)
    }

    fn head(&self, dataset: &DataSet, n: usize) -> ReportResult<DataSet> {
        Ok(processing::head(dataset, n))
    }

    fn value_counts(
        &self,
        dataset: &DataSet,
        column: &str,
        options: &ValueCountsOptions,
    ) -> ReportResult<ValueCounts> {
        processing::value_counts(dataset, column, options)
    }

    fn inner_join(
        &self,
        left: &DataSet,
        right: &DataSet,
        left_on: &str,
        right_on: &str,
        options: &JoinOptions,
    ) -> ReportResult<DataSet> {
        processing::inner_join(left, right, left_on, right_on, options)
    }
}

/// Which [`TableEngine`] a report runs on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    /// Row-major operations in this crate.
    #[default]
    Native,
    /// Polars lazy frames.
    Polars,
}

impl Engine {
    /// The engine implementation.
    pub fn backend(self) -> &'static dyn TableEngine {
        match self {
            Self::Native => &NativeEngine,
            Self::Polars => &PolarsEngine,
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.backend().name())
    }
}
