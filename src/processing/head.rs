//! Bounded prefix selection for [`crate::types::DataSet`].

use crate::types::DataSet;

/// Returns the first `n` rows of `dataset`.
///
/// Asking for more rows than exist returns every row; this never fails.
pub fn head(dataset: &DataSet, n: usize) -> DataSet {
    let n = n.min(dataset.row_count());
    DataSet {
        schema: dataset.schema.clone(),
        rows: dataset.rows[..n].to_vec(),
        index: dataset.index[..n].to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::head;
    use crate::types::{DataSet, DataType, Field, Schema, Value};

    fn dataset_of_n(n: usize) -> DataSet {
        let schema = Schema::new(vec![Field::new("id", DataType::Int64)]);
        let rows = (0..n as i64).map(|i| vec![Value::Int64(i)]).collect();
        DataSet::new(schema, rows)
    }

    #[test]
    fn head_takes_prefix_in_order() {
        let out = head(&dataset_of_n(5), 2);
        assert_eq!(out.rows, vec![vec![Value::Int64(0)], vec![Value::Int64(1)]]);
        assert_eq!(out.index, vec![0, 1]);
    }

    #[test]
    fn head_truncates_to_available_rows() {
        let ds = dataset_of_n(3);
        assert_eq!(head(&ds, 10), ds);
        assert!(head(&ds, 0).is_empty());
    }
}
