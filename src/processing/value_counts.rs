//! Categorical counts over a single column.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::ReportResult;
use crate::types::{DataSet, DataType, Value, ValueKey};

/// Options for [`value_counts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueCountsOptions {
    /// Sort by count ascending instead of descending.
    pub ascending: bool,
    /// Skip `Null` values instead of counting them as their own group.
    pub dropna: bool,
}

impl Default for ValueCountsOptions {
    fn default() -> Self {
        Self {
            ascending: false,
            dropna: true,
        }
    }
}

/// One distinct value and the number of rows holding it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueCount {
    pub value: Value,
    pub count: usize,
}

/// Result of [`value_counts`]: distinct values of `column`, sorted by count.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueCounts {
    /// Name of the counted column.
    pub column: String,
    /// Data type of the counted column.
    pub data_type: DataType,
    /// Counts, most frequent first unless [`ValueCountsOptions::ascending`] was set.
    pub counts: Vec<ValueCount>,
}

impl ValueCounts {
    /// Count for `value`, if it occurs.
    pub fn get(&self, value: &Value) -> Option<usize> {
        self.counts
            .iter()
            .find(|c| &c.value == value)
            .map(|c| c.count)
    }

    /// Total number of counted rows.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|c| c.count).sum()
    }
}

/// Group `column` by distinct value and count rows per value.
///
/// Groups are ordered by count; the sort is stable, so equal counts keep the order in which
/// their values were first encountered.
pub fn value_counts(
    dataset: &DataSet,
    column: &str,
    options: &ValueCountsOptions,
) -> ReportResult<ValueCounts> {
    let idx = dataset.schema.require(column)?;

    let mut slots: HashMap<ValueKey<'_>, usize> = HashMap::new();
    let mut counts: Vec<ValueCount> = Vec::new();
    for row in &dataset.rows {
        let value = &row[idx];
        if options.dropna && value.is_null() {
            continue;
        }
        let slot = slots.get(&value.key()).copied();
        match slot {
            Some(slot) => counts[slot].count += 1,
            None => {
                slots.insert(value.key(), counts.len());
                counts.push(ValueCount {
                    value: value.clone(),
                    count: 1,
                });
            }
        }
    }

    if options.ascending {
        counts.sort_by_key(|c| c.count);
    } else {
        counts.sort_by(|a, b| b.count.cmp(&a.count));
    }

    Ok(ValueCounts {
        column: column.to_owned(),
        data_type: dataset.schema.fields[idx].data_type,
        counts,
    })
}

#[cfg(test)]
mod tests {
    use super::{value_counts, ValueCountsOptions};
    use crate::types::{DataSet, DataType, Field, Schema, Value};

    fn colors() -> DataSet {
        let schema = Schema::new(vec![Field::new("color", DataType::Utf8)]);
        let rows = ["red", "blue", "red", "green", "blue", "red"]
            .into_iter()
            .map(|c| vec![Value::utf8(c)])
            .chain(std::iter::once(vec![Value::Null]))
            .collect();
        DataSet::new(schema, rows)
    }

    fn pairs(vc: &super::ValueCounts) -> Vec<(Value, usize)> {
        vc.counts.iter().map(|c| (c.value.clone(), c.count)).collect()
    }

    #[test]
    fn counts_sort_descending_and_drop_nulls() {
        let vc = value_counts(&colors(), "color", &ValueCountsOptions::default()).unwrap();
        assert_eq!(
            pairs(&vc),
            vec![
                (Value::utf8("red"), 3),
                (Value::utf8("blue"), 2),
                (Value::utf8("green"), 1),
            ]
        );
        assert_eq!(vc.total(), 6);
        assert_eq!(vc.data_type, DataType::Utf8);
    }

    #[test]
    fn ties_keep_first_encountered_order() {
        let schema = Schema::new(vec![Field::new("d", DataType::Utf8)]);
        let ds = DataSet::new(
            schema,
            vec![
                vec![Value::utf8("HR")],
                vec![Value::utf8("IT")],
                vec![Value::utf8("Finance")],
            ],
        );
        let vc = value_counts(&ds, "d", &ValueCountsOptions::default()).unwrap();
        assert_eq!(
            pairs(&vc),
            vec![
                (Value::utf8("HR"), 1),
                (Value::utf8("IT"), 1),
                (Value::utf8("Finance"), 1),
            ]
        );
    }

    #[test]
    fn nulls_can_be_counted_and_sorted_ascending() {
        let opts = ValueCountsOptions {
            ascending: true,
            dropna: false,
        };
        let vc = value_counts(&colors(), "color", &opts).unwrap();
        assert_eq!(
            pairs(&vc),
            vec![
                (Value::utf8("green"), 1),
                (Value::Null, 1),
                (Value::utf8("blue"), 2),
                (Value::utf8("red"), 3),
            ]
        );
        assert_eq!(vc.get(&Value::Null), Some(1));
    }

    #[test]
    fn unknown_column_errors() {
        let err = value_counts(&colors(), "size", &ValueCountsOptions::default()).unwrap_err();
        assert!(err.to_string().contains("unknown column 'size'"));
    }
}
