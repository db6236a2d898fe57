//! The literal employee and department tables the report runs over.

use crate::types::{DataSet, DataType, Field, Schema, Value};

/// Employees: `id`, `name`, `age`, `department`.
pub fn employees() -> DataSet {
    let schema = Schema::new(vec![
        Field::new("id", DataType::Int64),
        Field::new("name", DataType::Utf8),
        Field::new("age", DataType::Int64),
        Field::new("department", DataType::Utf8),
    ]);
    let rows = [
        (1, "Alice", 30, "HR"),
        (2, "Bob", 25, "IT"),
        (3, "Charlie", 35, "Finance"),
    ]
    .into_iter()
    .map(|(id, name, age, department)| {
        vec![
            Value::Int64(id),
            Value::utf8(name),
            Value::Int64(age),
            Value::utf8(department),
        ]
    })
    .collect();
    DataSet::new(schema, rows)
}

/// Departments: `id`, `department_name`.
pub fn departments() -> DataSet {
    let schema = Schema::new(vec![
        Field::new("id", DataType::Int64),
        Field::new("department_name", DataType::Utf8),
    ]);
    let rows = [(1, "HR"), (2, "Engineering"), (3, "Finance")]
        .into_iter()
        .map(|(id, name)| vec![Value::Int64(id), Value::utf8(name)])
        .collect();
    DataSet::new(schema, rows)
}
