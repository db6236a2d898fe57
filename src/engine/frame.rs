//! Polars-backed engine and `DataSet` <-> `DataFrame` conversion.

use polars::prelude::*;

use crate::error::{ReportError, ReportResult};
use crate::processing::join::JoinLayout;
use crate::processing::{
    CompareOp, JoinOptions, Predicate, ValueCount, ValueCounts, ValueCountsOptions,
};
use crate::types::{DataSet, DataType, Field, Schema, Value};

use super::TableEngine;

/// Hidden column carrying row labels through a Polars query.
const LABEL_COLUMN: &str = "__row_label";
/// Temporary name for a right join key that is not emitted.
const RIGHT_KEY_COLUMN: &str = "__right_key";

/// Convert a [`DataSet`] into a Polars `DataFrame`.
///
/// Cells whose type does not match their field become nulls. Row labels are not carried.
pub fn to_frame(dataset: &DataSet) -> ReportResult<DataFrame> {
    let columns: Vec<Column> = dataset
        .schema
        .fields
        .iter()
        .enumerate()
        .map(|(idx, field)| series_for(dataset, idx, field).into())
        .collect();
    Ok(DataFrame::new(dataset.row_count(), columns)?)
}

fn series_for(dataset: &DataSet, idx: usize, field: &Field) -> Series {
    let name = PlSmallStr::from(field.name.as_str());
    let cells = dataset.rows.iter().map(|row| &row[idx]);
    match field.data_type {
        DataType::Int64 => {
            let values: Vec<Option<i64>> = cells
                .map(|v| match v {
                    Value::Int64(x) => Some(*x),
                    _ => None,
                })
                .collect();
            Series::new(name, values)
        }
        DataType::Float64 => {
            let values: Vec<Option<f64>> = cells
                .map(|v| match v {
                    Value::Float64(x) => Some(*x),
                    Value::Int64(x) => Some(*x as f64),
                    _ => None,
                })
                .collect();
            Series::new(name, values)
        }
        DataType::Bool => {
            let values: Vec<Option<bool>> = cells
                .map(|v| match v {
                    Value::Bool(x) => Some(*x),
                    _ => None,
                })
                .collect();
            Series::new(name, values)
        }
        DataType::Utf8 => {
            let values: Vec<Option<&str>> = cells
                .map(|v| match v {
                    Value::Utf8(s) => Some(s.as_str()),
                    _ => None,
                })
                .collect();
            Series::new(name, values)
        }
    }
}

/// Convert a Polars `DataFrame` back into a [`DataSet`] labelled `0..n`.
///
/// Integer columns of any width become [`DataType::Int64`], float columns become
/// [`DataType::Float64`]. Other Polars types are rejected.
pub fn from_frame(frame: &DataFrame) -> ReportResult<DataSet> {
    let mut fields = Vec::with_capacity(frame.width());
    let mut columns: Vec<Vec<Value>> = Vec::with_capacity(frame.width());

    for column in frame.columns() {
        let series = column.as_materialized_series();
        let dtype = series.dtype().clone();
        let (data_type, values): (DataType, Vec<Value>) = if dtype.is_bool() {
            let values = series
                .bool()?
                .into_iter()
                .map(|v| v.map_or(Value::Null, Value::Bool))
                .collect();
            (DataType::Bool, values)
        } else if dtype.is_string() {
            let values = series
                .str()?
                .into_iter()
                .map(|v| v.map_or(Value::Null, Value::utf8))
                .collect();
            (DataType::Utf8, values)
        } else if dtype.is_float() {
            let cast = series.cast(&polars::prelude::DataType::Float64)?;
            let values = cast
                .f64()?
                .into_iter()
                .map(|v| v.map_or(Value::Null, Value::Float64))
                .collect();
            (DataType::Float64, values)
        } else if dtype.is_integer() {
            let cast = series.cast(&polars::prelude::DataType::Int64)?;
            let values = cast
                .i64()?
                .into_iter()
                .map(|v| v.map_or(Value::Null, Value::Int64))
                .collect();
            (DataType::Int64, values)
        } else {
            return Err(ReportError::Unsupported {
                message: format!("column '{}' has polars type {dtype}", series.name()),
            });
        };
        fields.push(Field::new(series.name().as_str(), data_type));
        columns.push(values);
    }

    let rows = (0..frame.height())
        .map(|r| columns.iter().map(|c| c[r].clone()).collect())
        .collect();
    Ok(DataSet::new(Schema::new(fields), rows))
}

/// `dataset` as a frame with an extra label column appended.
fn labelled_frame(dataset: &DataSet) -> ReportResult<DataFrame> {
    let mut frame = to_frame(dataset)?;
    let labels: Vec<i64> = dataset.index.iter().map(|&l| l as i64).collect();
    frame.with_column(Column::new(LABEL_COLUMN.into(), labels))?;
    Ok(frame)
}

/// Inverse of [`labelled_frame`]: strip the label column back into [`DataSet::index`].
fn unlabel(frame: &DataFrame) -> ReportResult<DataSet> {
    let out = from_frame(frame)?;
    let label_idx = out.schema.require(LABEL_COLUMN)?;

    let mut fields = out.schema.fields;
    fields.remove(label_idx);
    let mut index = Vec::with_capacity(out.rows.len());
    let mut rows = out.rows;
    for row in &mut rows {
        match row.remove(label_idx) {
            Value::Int64(l) => index.push(l as usize),
            other => {
                return Err(ReportError::Unsupported {
                    message: format!("row label {other:?} is not an integer"),
                });
            }
        }
    }

    DataSet::new(Schema::new(fields), rows).with_index(index)
}

fn literal(value: &Value) -> ReportResult<Expr> {
    match value {
        Value::Int64(v) => Ok(lit(*v)),
        Value::Float64(v) => Ok(lit(*v)),
        Value::Bool(v) => Ok(lit(*v)),
        Value::Utf8(s) => Ok(lit(s.clone())),
        Value::Null => Err(ReportError::Unsupported {
            message: "comparison against a null literal".to_owned(),
        }),
    }
}

fn predicate_expr(predicate: &Predicate) -> ReportResult<Expr> {
    let lhs = col(predicate.column.as_str());
    let rhs = literal(&predicate.value)?;
    Ok(match predicate.op {
        CompareOp::Eq => lhs.eq(rhs),
        CompareOp::NotEq => lhs.neq(rhs),
        CompareOp::Gt => lhs.gt(rhs),
        CompareOp::GtEq => lhs.gt_eq(rhs),
        CompareOp::Lt => lhs.lt(rhs),
        CompareOp::LtEq => lhs.lt_eq(rhs),
    })
}

/// Turn `[value, count]` rows from a grouped count query into [`ValueCount`]s.
fn group_counts(rows: Vec<Vec<Value>>) -> ReportResult<Vec<ValueCount>> {
    rows.into_iter()
        .enumerate()
        .map(|(r, row)| match <[Value; 2]>::try_from(row) {
            Ok([value, Value::Int64(count)]) if count >= 0 => Ok(ValueCount {
                value,
                count: count as usize,
            }),
            Ok([_, other]) => Err(ReportError::Unsupported {
                message: format!("group count {other:?} is not a non-negative integer"),
            }),
            Err(row) => Err(ReportError::RowArity {
                row: r,
                expected: 2,
                found: row.len(),
            }),
        })
        .collect()
}

/// Dataset with the same rows and labels under a different schema.
fn renamed(dataset: &DataSet, fields: Vec<Field>) -> ReportResult<DataSet> {
    DataSet::new(Schema::new(fields), dataset.rows.clone()).with_index(dataset.index.clone())
}

/// Engine that runs each operation as a Polars lazy query.
#[derive(Debug, Default, Clone, Copy)]
pub struct PolarsEngine;

impl TableEngine for PolarsEngine {
    fn name(&self) -> &'static str {
        "polars"
    }

    fn select(&self, dataset: &DataSet, columns: &[String]) -> ReportResult<DataSet> {
        for name in columns {
            dataset.schema.require(name)?;
        }
        // The label column keeps the row count when no data column is selected.
        let exprs: Vec<Expr> = columns
            .iter()
            .map(|c| col(c.as_str()))
            .chain([col(LABEL_COLUMN)])
            .collect();
        let out = labelled_frame(dataset)?.lazy().select(exprs).collect()?;
        unlabel(&out)
    }

    fn filter_by(&self, dataset: &DataSet, predicate: &Predicate) -> ReportResult<DataSet> {
        dataset.schema.require(&predicate.column)?;
        let out = labelled_frame(dataset)?
            .lazy()
            .filter(predicate_expr(predicate)?)
            .collect()?;
        unlabel(&out)
    }

    fn head(&self, dataset: &DataSet, n: usize) -> ReportResult<DataSet> {
        let out = labelled_frame(dataset)?.head(Some(n));
        unlabel(&out)
    }

    fn value_counts(
        &self,
        dataset: &DataSet,
        column: &str,
        options: &ValueCountsOptions,
    ) -> ReportResult<ValueCounts> {
        let idx = dataset.schema.require(column)?;

        let mut query = to_frame(dataset)?.lazy().select([col(column)]);
        if options.dropna {
            query = query.filter(col(column).is_not_null());
        }
        let out = query
            .group_by_stable([col(column)])
            .agg([len().alias("count")])
            .sort(
                ["count"],
                SortMultipleOptions::default()
                    .with_order_descending(!options.ascending)
                    .with_maintain_order(true),
            )
            .collect()?;

        let counts = group_counts(from_frame(&out)?.rows)?;

        Ok(ValueCounts {
            column: column.to_owned(),
            data_type: dataset.schema.fields[idx].data_type,
            counts,
        })
    }

    fn inner_join(
        &self,
        left: &DataSet,
        right: &DataSet,
        left_on: &str,
        right_on: &str,
        options: &JoinOptions,
    ) -> ReportResult<DataSet> {
        let layout = JoinLayout::new(&left.schema, &right.schema, left_on, right_on, options)?;

        // Rename both sides to their output names up front so Polars sees no clashes.
        let right_fields: Vec<Field> = layout
            .right
            .iter()
            .zip(&right.schema.fields)
            .map(|(out, input)| match out {
                Some(f) => f.clone(),
                None => Field::new(RIGHT_KEY_COLUMN, input.data_type),
            })
            .collect();
        let left_key = layout.left[layout.left_key].name.clone();
        let right_key = right_fields[layout.right_key].name.clone();
        let output: Vec<Expr> = layout
            .schema()
            .field_names()
            .map(col)
            .collect();

        let left_frame = to_frame(&renamed(left, layout.left.clone())?)?;
        let right_frame = to_frame(&renamed(right, right_fields)?)?;

        let mut args = JoinArgs::new(JoinType::Inner).with_coalesce(JoinCoalesce::KeepColumns);
        args.maintain_order = MaintainOrderJoin::LeftRight;
        let out = left_frame
            .lazy()
            .join(
                right_frame.lazy(),
                [col(left_key.as_str())],
                [col(right_key.as_str())],
                args,
            )
            .select(output)
            .collect()?;

        from_frame(&out)
    }
}

#[cfg(test)]
mod tests {
    use super::group_counts;
    use crate::error::ReportError;
    use crate::types::Value;

    #[test]
    fn group_counts_reads_value_count_pairs() {
        let counts = group_counts(vec![
            vec![Value::utf8("HR"), Value::Int64(2)],
            vec![Value::Null, Value::Int64(1)],
        ])
        .unwrap();
        assert_eq!(counts[0].value, Value::utf8("HR"));
        assert_eq!(counts[0].count, 2);
        assert_eq!(counts[1].value, Value::Null);
        assert_eq!(counts[1].count, 1);
    }

    #[test]
    fn group_counts_rejects_non_integer_counts() {
        let err = group_counts(vec![vec![Value::utf8("HR"), Value::Null]]).unwrap_err();
        assert!(matches!(err, ReportError::Unsupported { .. }), "{err}");

        let err = group_counts(vec![vec![Value::utf8("HR"), Value::Int64(-1)]]).unwrap_err();
        assert!(matches!(err, ReportError::Unsupported { .. }), "{err}");

        let err = group_counts(vec![vec![Value::Int64(1)]]).unwrap_err();
        assert!(matches!(err, ReportError::RowArity { row: 0, found: 1, .. }), "{err}");
    }
}
