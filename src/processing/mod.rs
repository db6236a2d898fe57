//! In-memory table operations.
//!
//! Every operation takes its inputs by shared reference and returns a new
//! [`crate::types::DataSet`] (or [`ValueCounts`]); inputs are never modified.
//!
//! Currently implemented:
//!
//! - [`select()`]: column projection
//! - [`filter()`] / [`filter_by()`]: row filtering by closure or column [`Predicate`]
//! - [`head()`]: bounded prefix
//! - [`value_counts()`]: categorical counts over one column
//! - [`inner_join()`]: equality join of two tables
//!
//! ## Example: select → filter → count
//!
//! ```rust
//! use tabular_report::processing::{filter_by, select, value_counts, Predicate, ValueCountsOptions};
//! use tabular_report::types::{DataSet, DataType, Field, Schema, Value};
//!
//! let schema = Schema::new(vec![
//!     Field::new("name", DataType::Utf8),
//!     Field::new("age", DataType::Int64),
//!     Field::new("team", DataType::Utf8),
//! ]);
//! let ds = DataSet::new(
//!     schema,
//!     vec![
//!         vec![Value::utf8("Ada"), Value::Int64(36), Value::utf8("core")],
//!         vec![Value::utf8("Bo"), Value::Int64(22), Value::utf8("web")],
//!         vec![Value::utf8("Cy"), Value::Int64(41), Value::utf8("core")],
//!     ],
//! );
//!
//! let seniors = filter_by(&ds, &Predicate::gt("age", Value::Int64(30))).unwrap();
//! assert_eq!(seniors.index, vec![0, 2]);
//!
//! let names = select(&seniors, &["name"]).unwrap();
//! assert_eq!(names.rows, vec![vec![Value::utf8("Ada")], vec![Value::utf8("Cy")]]);
//!
//! let teams = value_counts(&ds, "team", &ValueCountsOptions::default()).unwrap();
//! assert_eq!(teams.get(&Value::utf8("core")), Some(2));
//! ```

pub mod filter;
pub mod head;
pub mod join;
pub mod select;
pub mod value_counts;

pub use filter::{filter, filter_by, CompareOp, Predicate};
pub use head::head;
pub use join::{inner_join, JoinOptions};
pub use select::select;
pub use value_counts::{value_counts, ValueCount, ValueCounts, ValueCountsOptions};
