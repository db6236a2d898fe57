//! JSON rendering: one document per report step.
//!
//! Tables become `{"step": ..., "records": [{column: value, ...}, ...]}` with keys in schema
//! order; counts become `{"step": ..., "column": ..., "counts": [{"value": ..., "count": ...}]}`.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::error::ReportResult;
use crate::processing::{ValueCount, ValueCounts};
use crate::types::{DataSet, Field, Value};

struct Records<'a>(&'a DataSet);

struct Record<'a> {
    names: &'a [Field],
    values: &'a [Value],
}

impl Serialize for Records<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.row_count()))?;
        for row in &self.0.rows {
            seq.serialize_element(&Record {
                names: &self.0.schema.fields,
                values: row,
            })?;
        }
        seq.end()
    }
}

impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.names.len()))?;
        for (field, value) in self.names.iter().zip(self.values) {
            map.serialize_entry(&field.name, value)?;
        }
        map.end()
    }
}

#[derive(Serialize)]
struct TableDoc<'a> {
    step: &'a str,
    records: Records<'a>,
}

#[derive(Serialize)]
struct CountsDoc<'a> {
    step: &'a str,
    column: &'a str,
    counts: &'a [ValueCount],
}

/// Render a table as a single-line JSON document.
pub fn render_table(step: &str, dataset: &DataSet) -> ReportResult<String> {
    Ok(serde_json::to_string(&TableDoc {
        step,
        records: Records(dataset),
    })?)
}

/// Render counts as a single-line JSON document.
pub fn render_counts(step: &str, counts: &ValueCounts) -> ReportResult<String> {
    Ok(serde_json::to_string(&CountsDoc {
        step,
        column: &counts.column,
        counts: &counts.counts,
    })?)
}

#[cfg(test)]
mod tests {
    use super::{render_counts, render_table};
    use crate::processing::{ValueCount, ValueCounts};
    use crate::types::{DataSet, DataType, Field, Schema, Value};

    #[test]
    fn records_keep_schema_order() {
        let schema = Schema::new(vec![
            Field::new("zeta", DataType::Utf8),
            Field::new("alpha", DataType::Float64),
        ]);
        let ds = DataSet::new(
            schema,
            vec![vec![Value::utf8("z"), Value::Null]],
        );
        assert_eq!(
            render_table("dump", &ds).unwrap(),
            r#"{"step":"dump","records":[{"zeta":"z","alpha":null}]}"#
        );
    }

    #[test]
    fn counts_document() {
        let counts = ValueCounts {
            column: "n".to_owned(),
            data_type: DataType::Int64,
            counts: vec![ValueCount {
                value: Value::Int64(7),
                count: 1,
            }],
        };
        assert_eq!(
            render_counts("counts", &counts).unwrap(),
            r#"{"step":"counts","column":"n","counts":[{"value":7,"count":1}]}"#
        );
    }
}
