//! Output formats for report steps.
//!
//! - [`TableFormat::Pretty`]: the text layout pandas prints (see [`pretty`])
//! - [`TableFormat::Csv`]: header + rows (see [`csv`])
//! - [`TableFormat::Json`]: one JSON document per step (see [`json`])

pub mod csv;
pub mod json;
pub mod pretty;

use crate::error::ReportResult;
use crate::processing::ValueCounts;
use crate::types::DataSet;

/// How report steps are written.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// pandas-style aligned text.
    #[default]
    Pretty,
    /// Comma-separated values.
    Csv,
    /// JSON lines, one document per step.
    Json,
}

impl TableFormat {
    /// Render a table produced by the step named `step`.
    pub fn render_table(self, step: &str, dataset: &DataSet) -> ReportResult<String> {
        match self {
            Self::Pretty => Ok(pretty::render_table(dataset)),
            Self::Csv => csv::render_table(dataset),
            Self::Json => json::render_table(step, dataset),
        }
    }

    /// Render value counts produced by the step named `step`.
    pub fn render_counts(self, step: &str, counts: &ValueCounts) -> ReportResult<String> {
        match self {
            Self::Pretty => Ok(pretty::render_counts(counts)),
            Self::Csv => csv::render_counts(counts),
            Self::Json => json::render_counts(step, counts),
        }
    }

    /// Whether free-text separator lines belong in this format.
    ///
    /// JSON output stays one document per line, so it omits them.
    pub fn allows_separators(self) -> bool {
        !matches!(self, Self::Json)
    }
}
