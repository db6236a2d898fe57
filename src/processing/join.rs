//! Equality-based inner join of two [`crate::types::DataSet`]s.

use std::collections::HashMap;

use crate::error::ReportResult;
use crate::types::{DataSet, Field, Schema, Value};

/// Options for [`inner_join`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinOptions {
    /// Suffixes appended to column names that occur in both inputs (left, right).
    pub suffixes: (String, String),
}

impl Default for JoinOptions {
    fn default() -> Self {
        Self {
            suffixes: ("_x".to_owned(), "_y".to_owned()),
        }
    }
}

/// Output column layout of a join.
///
/// `right` has one entry per right input column; `None` marks the right key when both keys
/// share a name, in which case only the left key column is emitted.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct JoinLayout {
    pub left: Vec<Field>,
    pub right: Vec<Option<Field>>,
    pub left_key: usize,
    pub right_key: usize,
}

impl JoinLayout {
    pub(crate) fn new(
        left: &Schema,
        right: &Schema,
        left_on: &str,
        right_on: &str,
        options: &JoinOptions,
    ) -> ReportResult<Self> {
        let left_key = left.require(left_on)?;
        let right_key = right.require(right_on)?;
        let shared_key = left_on == right_on;

        let clashes = |name: &str, other: &Schema| {
            !(shared_key && name == left_on) && other.index_of(name).is_some()
        };

        let (left_suffix, right_suffix) = &options.suffixes;
        let left_fields = left
            .fields
            .iter()
            .map(|f| {
                if clashes(&f.name, right) {
                    Field::new(format!("{}{left_suffix}", f.name), f.data_type)
                } else {
                    f.clone()
                }
            })
            .collect();
        let right_fields = right
            .fields
            .iter()
            .enumerate()
            .map(|(i, f)| {
                if shared_key && i == right_key {
                    None
                } else if clashes(&f.name, left) {
                    Some(Field::new(format!("{}{right_suffix}", f.name), f.data_type))
                } else {
                    Some(f.clone())
                }
            })
            .collect();

        Ok(Self {
            left: left_fields,
            right: right_fields,
            left_key,
            right_key,
        })
    }

    pub(crate) fn schema(&self) -> Schema {
        Schema::new(
            self.left
                .iter()
                .chain(self.right.iter().flatten())
                .cloned()
                .collect(),
        )
    }
}

/// Inner join `left` and `right` where `left[left_on] == right[right_on]`.
///
/// - The output holds every left column followed by every right column; names present in
///   both inputs get [`JoinOptions::suffixes`]. If both keys have the same name the key is
///   emitted once.
/// - Left rows without a match are dropped. A left row matching several right rows is
///   repeated once per match.
/// - Rows come out in left order, then right order within one left row, labelled `0..n`.
/// - `Null` keys never match.
pub fn inner_join(
    left: &DataSet,
    right: &DataSet,
    left_on: &str,
    right_on: &str,
    options: &JoinOptions,
) -> ReportResult<DataSet> {
    let layout = JoinLayout::new(&left.schema, &right.schema, left_on, right_on, options)?;

    let mut lookup: HashMap<_, Vec<&[Value]>> = HashMap::new();
    for row in &right.rows {
        let key = &row[layout.right_key];
        if !key.is_null() {
            lookup.entry(key.key()).or_default().push(row.as_slice());
        }
    }

    let mut rows = Vec::new();
    for row in &left.rows {
        let Some(matches) = lookup.get(&row[layout.left_key].key()) else {
            continue;
        };
        for other in matches {
            let mut out = Vec::with_capacity(row.len() + other.len());
            out.extend_from_slice(row);
            out.extend(
                other
                    .iter()
                    .zip(&layout.right)
                    .filter(|(_, field)| field.is_some())
                    .map(|(value, _)| value.clone()),
            );
            rows.push(out);
        }
    }

    Ok(DataSet::new(layout.schema(), rows))
}

#[cfg(test)]
mod tests {
    use super::{inner_join, JoinOptions};
    use crate::types::{DataSet, DataType, Field, Schema, Value};

    fn orders() -> DataSet {
        let schema = Schema::new(vec![
            Field::new("id", DataType::Int64),
            Field::new("sku", DataType::Utf8),
        ]);
        DataSet::new(
            schema,
            vec![
                vec![Value::Int64(1), Value::utf8("A")],
                vec![Value::Int64(2), Value::utf8("B")],
                vec![Value::Int64(3), Value::Null],
                vec![Value::Int64(4), Value::utf8("A")],
            ],
        )
    }

    fn products() -> DataSet {
        let schema = Schema::new(vec![
            Field::new("id", DataType::Int64),
            Field::new("sku", DataType::Utf8),
        ]);
        DataSet::new(
            schema,
            vec![
                vec![Value::Int64(10), Value::utf8("A")],
                vec![Value::Int64(11), Value::Null],
                vec![Value::Int64(12), Value::utf8("A")],
            ],
        )
    }

    #[test]
    fn duplicates_left_rows_per_match_and_drops_unmatched() {
        let out = inner_join(&orders(), &products(), "sku", "sku", &JoinOptions::default()).unwrap();

        assert_eq!(
            out.schema.field_names().collect::<Vec<_>>(),
            vec!["id_x", "sku", "id_y"]
        );
        assert_eq!(
            out.rows,
            vec![
                vec![Value::Int64(1), Value::utf8("A"), Value::Int64(10)],
                vec![Value::Int64(1), Value::utf8("A"), Value::Int64(12)],
                vec![Value::Int64(4), Value::utf8("A"), Value::Int64(10)],
                vec![Value::Int64(4), Value::utf8("A"), Value::Int64(12)],
            ]
        );
        assert_eq!(out.index, vec![0, 1, 2, 3]);
    }

    #[test]
    fn differently_named_keys_keep_both_columns() {
        let schema = Schema::new(vec![
            Field::new("id", DataType::Int64),
            Field::new("code", DataType::Utf8),
        ]);
        let codes = DataSet::new(schema, vec![vec![Value::Int64(7), Value::utf8("B")]]);

        let opts = JoinOptions {
            suffixes: ("_left".to_owned(), "_right".to_owned()),
        };
        let out = inner_join(&orders(), &codes, "sku", "code", &opts).unwrap();

        assert_eq!(
            out.schema.field_names().collect::<Vec<_>>(),
            vec!["id_left", "sku", "id_right", "code"]
        );
        assert_eq!(
            out.rows,
            vec![vec![
                Value::Int64(2),
                Value::utf8("B"),
                Value::Int64(7),
                Value::utf8("B"),
            ]]
        );
    }

    #[test]
    fn unknown_key_errors() {
        let err = inner_join(&orders(), &products(), "sku", "name", &JoinOptions::default()).unwrap_err();
        assert!(err.to_string().contains("unknown column 'name'"));
    }
}
