use thiserror::Error;

/// Convenience result type for table operations and report rendering.
pub type ReportResult<T> = Result<T, ReportError>;

/// Error type returned by table operations, engines and renderers.
///
/// This is a single error enum shared across the native engine, the Polars engine and the
/// output formats.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A referenced column does not exist in the input schema.
    #[error("unknown column '{column}'. columns={available:?}")]
    UnknownColumn {
        column: String,
        available: Vec<String>,
    },

    /// A row does not have one value per schema field.
    #[error("row {row} has {found} values but the schema has {expected} fields")]
    RowArity {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Row labels do not line up with the rows they label.
    #[error("{found} row labels for {expected} rows")]
    IndexLength { expected: usize, found: usize },

    /// The requested operation cannot be expressed by the selected engine.
    #[error("unsupported operation: {message}")]
    Unsupported { message: String },

    /// Writing rendered output failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV rendering error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON rendering error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error raised inside the Polars engine.
    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

impl ReportError {
    pub(crate) fn unknown_column<'a>(
        column: &str,
        available: impl Iterator<Item = &'a str>,
    ) -> Self {
        Self::UnknownColumn {
            column: column.to_owned(),
            available: available.map(str::to_owned).collect(),
        }
    }
}
