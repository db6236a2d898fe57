//! Core data model types.
//!
//! Tables are in-memory [`DataSet`]s described by a [`Schema`] (a list of typed [`Field`]s).
//! Every operation in this crate takes a `&DataSet` and returns a new one; nothing mutates a
//! table after construction.

use std::cmp::Ordering;

use serde::{Serialize, Serializer};

use crate::error::{ReportError, ReportResult};

/// Logical data type for a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// 64-bit signed integer.
    Int64,
    /// 64-bit floating point number.
    Float64,
    /// Boolean.
    Bool,
    /// UTF-8 string.
    Utf8,
}

/// A single named, typed field in a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field/column name.
    pub name: String,
    /// Field data type.
    pub data_type: DataType,
}

impl Field {
    /// Create a new field.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// An ordered list of fields describing the shape of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Ordered list of fields.
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a new schema from fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Iterate field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Returns the index of a field by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Like [`Self::index_of`], but reports a missing field as [`ReportError::UnknownColumn`].
    pub fn require(&self, name: &str) -> ReportResult<usize> {
        self.index_of(name)
            .ok_or_else(|| ReportError::unknown_column(name, self.field_names()))
    }
}

/// A single typed value in a [`DataSet`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing/empty value.
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    Utf8(String),
}

impl Value {
    /// Convenience constructor for [`Value::Utf8`].
    pub fn utf8(s: impl Into<String>) -> Self {
        Self::Utf8(s.into())
    }

    /// Returns `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Compare two values.
    ///
    /// Integers and floats compare numerically with each other. `Null` and values of
    /// unrelated types are not comparable and yield `None`.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Self::Int64(a), Self::Int64(b)) => Some(a.cmp(b)),
            (Self::Float64(a), Self::Float64(b)) => a.partial_cmp(b),
            (Self::Int64(a), Self::Float64(b)) => (*a as f64).partial_cmp(b),
            (Self::Float64(a), Self::Int64(b)) => a.partial_cmp(&(*b as f64)),
            (Self::Bool(a), Self::Bool(b)) => Some(a.cmp(b)),
            (Self::Utf8(a), Self::Utf8(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    pub(crate) fn key(&self) -> ValueKey<'_> {
        match self {
            Self::Null => ValueKey::Null,
            Self::Int64(v) => ValueKey::Int64(*v),
            // -0.0 and 0.0 group together; every NaN groups together.
            Self::Float64(v) if *v == 0.0 => ValueKey::Float64(0f64.to_bits()),
            Self::Float64(v) if v.is_nan() => ValueKey::Float64(f64::NAN.to_bits()),
            Self::Float64(v) => ValueKey::Float64(v.to_bits()),
            Self::Bool(v) => ValueKey::Bool(*v),
            Self::Utf8(s) => ValueKey::Utf8(s),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_none(),
            Self::Int64(v) => serializer.serialize_i64(*v),
            Self::Float64(v) => serializer.serialize_f64(*v),
            Self::Bool(v) => serializer.serialize_bool(*v),
            Self::Utf8(s) => serializer.serialize_str(s),
        }
    }
}

/// Hashable view of a [`Value`], used for grouping and join lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum ValueKey<'a> {
    Null,
    Int64(i64),
    Float64(u64),
    Bool(bool),
    Utf8(&'a str),
}

/// In-memory tabular dataset.
///
/// Rows are stored as `Vec<Vec<Value>>` in the same order as the [`Schema`] fields. Each row
/// also carries a label in [`DataSet::index`]; labels survive projection, filtering and
/// prefix selection, so a filtered row still prints with the position it had in its source.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    /// Schema describing row shape.
    pub schema: Schema,
    /// Row-major value storage.
    pub rows: Vec<Vec<Value>>,
    /// One label per row.
    pub index: Vec<usize>,
}

impl DataSet {
    /// Create a dataset from schema and rows, labelling rows `0..n`.
    pub fn new(schema: Schema, rows: Vec<Vec<Value>>) -> Self {
        let index = (0..rows.len()).collect();
        Self {
            schema,
            rows,
            index,
        }
    }

    /// Create a dataset, checking that every row has one value per schema field.
    pub fn try_new(schema: Schema, rows: Vec<Vec<Value>>) -> ReportResult<Self> {
        let expected = schema.fields.len();
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != expected)
        {
            return Err(ReportError::RowArity {
                row,
                expected,
                found,
            });
        }
        Ok(Self::new(schema, rows))
    }

    /// Replace the row labels. `index` must hold exactly one label per row.
    pub fn with_index(mut self, index: Vec<usize>) -> ReportResult<Self> {
        if index.len() != self.rows.len() {
            return Err(ReportError::IndexLength {
                expected: self.rows.len(),
                found: index.len(),
            });
        }
        self.index = index;
        Ok(self)
    }

    /// Number of rows in the dataset.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in the dataset.
    pub fn column_count(&self) -> usize {
        self.schema.fields.len()
    }

    /// Returns `true` if the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate the values of one column in row order.
    pub fn column(&self, name: &str) -> ReportResult<impl Iterator<Item = &Value> + '_> {
        let idx = self.schema.require(name)?;
        Ok(self.rows.iter().map(move |row| &row[idx]))
    }

    /// Create a new dataset containing only rows that match `predicate`.
    ///
    /// The returned dataset preserves the original schema and row labels.
    pub fn filter_rows<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&[Value]) -> bool,
    {
        let (index, rows) = self
            .index
            .iter()
            .zip(&self.rows)
            .filter(|(_, row)| predicate(row.as_slice()))
            .map(|(label, row)| (*label, row.clone()))
            .unzip();
        Self {
            schema: self.schema.clone(),
            rows,
            index,
        }
    }
}
