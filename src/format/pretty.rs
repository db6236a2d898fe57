//! Plain-text rendering in the layout pandas uses when printing frames and series.
//!
//! ```text
//!    id     name  age department
//! 0   1    Alice   30         HR
//! 2   3  Charlie   35    Finance
//! ```
//!
//! Row labels are left-justified in the first column; every other cell is right-justified
//! under its header. Cells carry one leading space, which a negative number fills with its
//! sign; headers of numeric and boolean columns carry one too.

use crate::processing::ValueCounts;
use crate::types::{DataSet, DataType, Value};

/// Render a table.
pub fn render_table(dataset: &DataSet) -> String {
    if dataset.is_empty() || dataset.column_count() == 0 {
        return render_empty(dataset);
    }

    let labels: Vec<String> = dataset.index.iter().map(ToString::to_string).collect();
    let label_width = max_width(labels.iter().map(String::as_str), 0);

    let columns: Vec<(String, Vec<String>)> = dataset
        .schema
        .fields
        .iter()
        .enumerate()
        .map(|(idx, field)| {
            let cells = dataset
                .rows
                .iter()
                .map(|row| cell(&row[idx], field.data_type))
                .collect();
            (header(&field.name, field.data_type), cells)
        })
        .collect();
    let widths: Vec<usize> = columns
        .iter()
        .map(|(name, cells)| max_width(cells.iter().map(String::as_str), width(name)))
        .collect();

    let mut lines = Vec::with_capacity(dataset.row_count() + 1);

    let mut header = " ".repeat(label_width);
    for ((name, _), w) in columns.iter().zip(&widths) {
        header.push(' ');
        header.push_str(&pad_left(name, *w));
    }
    lines.push(header);

    for (r, label) in labels.iter().enumerate() {
        let mut line = pad_right(label, label_width);
        for ((_, cells), w) in columns.iter().zip(&widths) {
            line.push(' ');
            line.push_str(&pad_left(&cells[r], *w));
        }
        lines.push(line);
    }

    lines.join("\n")
}

fn render_empty(dataset: &DataSet) -> String {
    let columns = dataset.schema.field_names().collect::<Vec<_>>().join(", ");
    let labels = dataset
        .index
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("Empty DataFrame\nColumns: [{columns}]\nIndex: [{labels}]")
}

/// Render categorical counts: a header line with the column name, one `value  count` line
/// per group and a trailing `Name: count` footer.
pub fn render_counts(counts: &ValueCounts) -> String {
    if counts.counts.is_empty() {
        return "Series([], Name: count, dtype: int64)".to_owned();
    }

    let labels: Vec<String> = counts
        .counts
        .iter()
        .map(|c| label(&c.value, counts.data_type))
        .collect();
    let label_width = max_width(labels.iter().map(String::as_str), 0);
    let values: Vec<String> = counts
        .counts
        .iter()
        .map(|c| format!(" {}", c.count))
        .collect();
    let value_width = max_width(values.iter().map(String::as_str), 0);

    let mut lines = Vec::with_capacity(counts.counts.len() + 2);
    lines.push(counts.column.clone());
    for (l, v) in labels.iter().zip(&values) {
        lines.push(format!(
            "{}   {}",
            pad_right(l, label_width),
            pad_left(v, value_width)
        ));
    }
    lines.push("Name: count, dtype: int64".to_owned());
    lines.join("\n")
}

fn header(name: &str, data_type: DataType) -> String {
    match data_type {
        DataType::Int64 | DataType::Float64 | DataType::Bool => format!(" {name}"),
        DataType::Utf8 => name.to_owned(),
    }
}

fn cell(value: &Value, data_type: DataType) -> String {
    match value {
        Value::Int64(v) if *v < 0 => v.to_string(),
        Value::Int64(v) => format!(" {v}"),
        Value::Float64(v) if v.is_sign_negative() && !v.is_nan() => float(*v),
        Value::Float64(v) => format!(" {}", float(*v)),
        Value::Bool(true) => " True".to_owned(),
        Value::Bool(false) => " False".to_owned(),
        Value::Utf8(s) => format!(" {s}"),
        Value::Null => format!(" {}", null(data_type)),
    }
}

fn null(data_type: DataType) -> &'static str {
    match data_type {
        DataType::Int64 | DataType::Float64 => "NaN",
        DataType::Bool | DataType::Utf8 => "None",
    }
}

fn label(value: &Value, data_type: DataType) -> String {
    match value {
        Value::Null => null(data_type).to_owned(),
        Value::Int64(v) => v.to_string(),
        Value::Float64(v) => float(*v),
        Value::Bool(true) => "True".to_owned(),
        Value::Bool(false) => "False".to_owned(),
        Value::Utf8(s) => s.clone(),
    }
}

fn float(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_owned()
    } else if v.is_finite() && v.fract() == 0.0 {
        format!("{v:.1}")
    } else {
        v.to_string()
    }
}

fn width(s: &str) -> usize {
    s.chars().count()
}

fn max_width<'a>(items: impl Iterator<Item = &'a str>, min: usize) -> usize {
    items.map(width).fold(min, usize::max)
}

fn pad_left(s: &str, w: usize) -> String {
    format!("{}{s}", " ".repeat(w.saturating_sub(width(s))))
}

fn pad_right(s: &str, w: usize) -> String {
    format!("{s}{}", " ".repeat(w.saturating_sub(width(s))))
}
