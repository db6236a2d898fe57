//! Row filtering for [`crate::types::DataSet`].

use std::cmp::Ordering;

use crate::error::ReportResult;
use crate::types::{DataSet, Value};

/// Comparison operator used by a [`Predicate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    NotEq,
    Gt,
    GtEq,
    Lt,
    LtEq,
}

impl CompareOp {
    fn holds(self, ordering: Ordering) -> bool {
        match self {
            Self::Eq => ordering == Ordering::Equal,
            Self::NotEq => ordering != Ordering::Equal,
            Self::Gt => ordering == Ordering::Greater,
            Self::GtEq => ordering != Ordering::Less,
            Self::Lt => ordering == Ordering::Less,
            Self::LtEq => ordering != Ordering::Greater,
        }
    }
}

/// A `column <op> literal` row predicate.
///
/// `Null` cells never satisfy a predicate, and neither do cells whose type cannot be compared
/// with the literal (see [`Value::compare`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub column: String,
    pub op: CompareOp,
    pub value: Value,
}

impl Predicate {
    /// Create a new predicate.
    pub fn new(column: impl Into<String>, op: CompareOp, value: Value) -> Self {
        Self {
            column: column.into(),
            op,
            value,
        }
    }

    /// `column > value`
    pub fn gt(column: impl Into<String>, value: Value) -> Self {
        Self::new(column, CompareOp::Gt, value)
    }

    /// Evaluate against a single cell.
    pub fn matches(&self, cell: &Value) -> bool {
        cell.compare(&self.value)
            .is_some_and(|ordering| self.op.holds(ordering))
    }
}

/// Returns a new [`DataSet`] containing only rows for which `predicate` returns `true`.
///
/// This is a convenience wrapper around [`DataSet::filter_rows`].
pub fn filter<F>(dataset: &DataSet, predicate: F) -> DataSet
where
    F: FnMut(&[Value]) -> bool,
{
    dataset.filter_rows(predicate)
}

/// Returns a new [`DataSet`] containing only rows matching a column [`Predicate`].
///
/// Row order and row labels are preserved.
pub fn filter_by(dataset: &DataSet, predicate: &Predicate) -> ReportResult<DataSet> {
    let idx = dataset.schema.require(&predicate.column)?;
    Ok(dataset.filter_rows(|row| predicate.matches(&row[idx])))
}

#[cfg(test)]
mod tests {
    use super::{filter, filter_by, CompareOp, Predicate};
    use crate::types::{DataSet, DataType, Field, Schema, Value};

    fn sample_dataset() -> DataSet {
        let schema = Schema::new(vec![
            Field::new("id", DataType::Int64),
            Field::new("age", DataType::Int64),
            Field::new("name", DataType::Utf8),
        ]);

        let rows = vec![
            vec![Value::Int64(1), Value::Int64(30), Value::utf8("a")],
            vec![Value::Int64(2), Value::Null, Value::utf8("b")],
            vec![Value::Int64(3), Value::Int64(35), Value::utf8("c")],
        ];

        DataSet::new(schema, rows)
    }

    #[test]
    fn filter_by_gt_is_strict() {
        let ds = sample_dataset();
        let out = filter_by(&ds, &Predicate::gt("age", Value::Int64(30))).unwrap();

        assert_eq!(out.schema, ds.schema);
        assert_eq!(
            out.rows,
            vec![vec![Value::Int64(3), Value::Int64(35), Value::utf8("c")]]
        );
        assert_eq!(out.index, vec![2]);
        // Original unchanged
        assert_eq!(ds.row_count(), 3);
    }

    #[test]
    fn nulls_never_match() {
        let ds = sample_dataset();
        let out = filter_by(&ds, &Predicate::new("age", CompareOp::NotEq, Value::Int64(0))).unwrap();
        assert_eq!(out.index, vec![0, 2]);
    }

    #[test]
    fn float_literal_compares_with_int_column() {
        let ds = sample_dataset();
        let out = filter_by(&ds, &Predicate::new("age", CompareOp::LtEq, Value::Float64(30.5))).unwrap();
        assert_eq!(out.index, vec![0]);
    }

    #[test]
    fn filter_by_unknown_column_errors() {
        let ds = sample_dataset();
        let err = filter_by(&ds, &Predicate::gt("salary", Value::Int64(1))).unwrap_err();
        assert!(err.to_string().contains("unknown column 'salary'"));
    }

    #[test]
    fn filter_can_return_empty_dataset() {
        let ds = sample_dataset();
        let out = filter(&ds, |_| false);
        assert_eq!(out.schema, ds.schema);
        assert!(out.rows.is_empty());
        assert!(out.index.is_empty());
    }
}
