//! CSV rendering.

use crate::error::{ReportError, ReportResult};
use crate::processing::ValueCounts;
use crate::types::{DataSet, Value};

/// Render a table as CSV with a header row. Row labels are not written; nulls are empty.
pub fn render_table(dataset: &DataSet) -> ReportResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(dataset.schema.field_names())?;
    for row in &dataset.rows {
        wtr.write_record(row.iter().map(field))?;
    }
    finish(wtr)
}

/// Render counts as a two-column CSV (`<column>,count`).
pub fn render_counts(counts: &ValueCounts) -> ReportResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record([counts.column.as_str(), "count"])?;
    for c in &counts.counts {
        wtr.write_record([field(&c.value), c.count.to_string()])?;
    }
    finish(wtr)
}

fn field(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Int64(v) => v.to_string(),
        Value::Float64(v) => v.to_string(),
        Value::Bool(v) => v.to_string(),
        Value::Utf8(s) => s.clone(),
    }
}

fn finish(wtr: csv::Writer<Vec<u8>>) -> ReportResult<String> {
    let bytes = wtr
        .into_inner()
        .map_err(|e| ReportError::Io(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).trim_end_matches('\n').to_owned())
}
