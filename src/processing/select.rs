//! Column projection for [`crate::types::DataSet`].

use crate::error::ReportResult;
use crate::types::{DataSet, Schema};

/// Returns a new [`DataSet`] holding only `columns`, in the requested order.
///
/// All rows are kept, with their labels.
pub fn select<S: AsRef<str>>(dataset: &DataSet, columns: &[S]) -> ReportResult<DataSet> {
    let idxs = columns
        .iter()
        .map(|name| dataset.schema.require(name.as_ref()))
        .collect::<ReportResult<Vec<_>>>()?;

    let schema = Schema::new(
        idxs.iter()
            .map(|&i| dataset.schema.fields[i].clone())
            .collect(),
    );
    let rows = dataset
        .rows
        .iter()
        .map(|row| idxs.iter().map(|&i| row[i].clone()).collect())
        .collect();

    Ok(DataSet {
        schema,
        rows,
        index: dataset.index.clone(),
    })
}
