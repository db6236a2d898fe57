//! The employee/department report.
//!
//! [`build_report`] runs six read-only steps over two tables and collects their results;
//! [`write_report`] renders them in order, with a separator line after the value counts.
//! [`run`] does both for the built-in [`sample`] tables.
//!
//! ```rust
//! use tabular_report::report::{run, ReportOptions};
//!
//! let mut out = Vec::new();
//! let report = run(&mut out, &ReportOptions::default()).unwrap();
//! assert_eq!(report.steps.len(), 6);
//!
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains("------------"));
//! ```

mod observer;
pub mod sample;

use std::fmt;
use std::io::Write;
use std::sync::Arc;
use std::time::Instant;

use crate::engine::Engine;
use crate::error::ReportResult;
use crate::format::TableFormat;
use crate::processing::{JoinOptions, Predicate, ValueCounts, ValueCountsOptions};
use crate::types::{DataSet, Value};

pub use observer::{LogObserver, ReportEvent, ReportObserver};

/// The six report steps, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportStep {
    /// Every employee row and column.
    FullDump,
    /// Employee table reduced to the projection columns.
    Projection,
    /// Employee rows matching the filter predicate.
    Filter,
    /// First rows of the employee table.
    Head,
    /// Counts of each distinct value in the count column.
    ValueCounts,
    /// Employees joined to departments.
    Join,
}

impl ReportStep {
    /// All steps in execution order.
    pub const ALL: [Self; 6] = [
        Self::FullDump,
        Self::Projection,
        Self::Filter,
        Self::Head,
        Self::ValueCounts,
        Self::Join,
    ];

    /// Stable snake_case name, used in logs and JSON output.
    pub fn name(self) -> &'static str {
        match self {
            Self::FullDump => "full_dump",
            Self::Projection => "projection",
            Self::Filter => "filter",
            Self::Head => "head",
            Self::ValueCounts => "value_counts",
            Self::Join => "join",
        }
    }
}

/// What a step produced.
#[derive(Debug, Clone, PartialEq)]
pub enum StepResult {
    Table(DataSet),
    Counts(ValueCounts),
}

impl StepResult {
    /// Rows in a table result, groups in a counts result.
    pub fn len(&self) -> usize {
        match self {
            Self::Table(ds) => ds.row_count(),
            Self::Counts(vc) => vc.counts.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One executed step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutput {
    pub step: ReportStep,
    pub result: StepResult,
}

/// Results of every step, in execution order.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub steps: Vec<StepOutput>,
}

impl Report {
    /// Result of `step`.
    pub fn get(&self, step: ReportStep) -> Option<&StepResult> {
        self.steps
            .iter()
            .find(|s| s.step == step)
            .map(|s| &s.result)
    }

    /// Table produced by `step`, if that step produces a table.
    pub fn table(&self, step: ReportStep) -> Option<&DataSet> {
        match self.get(step)? {
            StepResult::Table(ds) => Some(ds),
            StepResult::Counts(_) => None,
        }
    }

    /// Counts produced by [`ReportStep::ValueCounts`].
    pub fn counts(&self) -> Option<&ValueCounts> {
        match self.get(ReportStep::ValueCounts)? {
            StepResult::Counts(vc) => Some(vc),
            StepResult::Table(_) => None,
        }
    }
}

/// Configuration for [`build_report`] and [`write_report`].
///
/// Use [`Default`] for the standard report.
#[derive(Clone)]
pub struct ReportOptions {
    /// Backend executing each step.
    pub engine: Engine,
    /// Output format.
    pub format: TableFormat,
    /// Columns kept by [`ReportStep::Projection`].
    pub projection: Vec<String>,
    /// Row predicate for [`ReportStep::Filter`].
    pub filter: Predicate,
    /// Row count for [`ReportStep::Head`].
    pub head_rows: usize,
    /// Column counted by [`ReportStep::ValueCounts`].
    pub count_column: String,
    /// Counting options.
    pub value_counts: ValueCountsOptions,
    /// Join keys (employee column, department column) for [`ReportStep::Join`].
    pub join_on: (String, String),
    /// Join options.
    pub join: JoinOptions,
    /// Line written after the value counts.
    pub separator: String,
    /// Optional observer for logging.
    pub observer: Option<Arc<dyn ReportObserver>>,
}

impl fmt::Debug for ReportOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportOptions")
            .field("engine", &self.engine)
            .field("format", &self.format)
            .field("projection", &self.projection)
            .field("filter", &self.filter)
            .field("head_rows", &self.head_rows)
            .field("count_column", &self.count_column)
            .field("value_counts", &self.value_counts)
            .field("join_on", &self.join_on)
            .field("join", &self.join)
            .field("separator", &self.separator)
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            engine: Engine::default(),
            format: TableFormat::default(),
            projection: vec!["name".to_owned(), "age".to_owned()],
            filter: Predicate::gt("age", Value::Int64(30)),
            head_rows: 2,
            count_column: "department".to_owned(),
            value_counts: ValueCountsOptions::default(),
            join_on: ("department".to_owned(), "department_name".to_owned()),
            join: JoinOptions::default(),
            separator: "------------".to_owned(),
            observer: None,
        }
    }
}

impl ReportOptions {
    fn emit(&self, event: ReportEvent) {
        if let Some(obs) = &self.observer {
            obs.on_event(&event);
        }
    }
}

/// Run every [`ReportStep`] over `employees` and `departments`.
///
/// Neither input is modified; each step works from the original tables.
pub fn build_report(
    employees: &DataSet,
    departments: &DataSet,
    options: &ReportOptions,
) -> ReportResult<Report> {
    let start = Instant::now();
    let engine = options.engine.backend();
    options.emit(ReportEvent::RunStarted {
        engine: options.engine,
    });

    let mut steps = Vec::with_capacity(ReportStep::ALL.len());
    for step in ReportStep::ALL {
        let step_start = Instant::now();
        let result = match step {
            ReportStep::FullDump => StepResult::Table(employees.clone()),
            ReportStep::Projection => {
                StepResult::Table(engine.select(employees, &options.projection)?)
            }
            ReportStep::Filter => StepResult::Table(engine.filter_by(employees, &options.filter)?),
            ReportStep::Head => StepResult::Table(engine.head(employees, options.head_rows)?),
            ReportStep::ValueCounts => StepResult::Counts(engine.value_counts(
                employees,
                &options.count_column,
                &options.value_counts,
            )?),
            ReportStep::Join => {
                let (left_on, right_on) = &options.join_on;
                StepResult::Table(engine.inner_join(
                    employees,
                    departments,
                    left_on,
                    right_on,
                    &options.join,
                )?)
            }
        };
        options.emit(ReportEvent::StepFinished {
            step,
            rows: result.len(),
            elapsed: step_start.elapsed(),
        });
        steps.push(StepOutput { step, result });
    }

    options.emit(ReportEvent::RunFinished {
        steps: steps.len(),
        elapsed: start.elapsed(),
    });
    Ok(Report { steps })
}

/// Write every step of `report` to `out`, one rendering after another.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &Report,
    options: &ReportOptions,
) -> ReportResult<()> {
    let format = options.format;
    for output in &report.steps {
        let name = output.step.name();
        let rendered = match &output.result {
            StepResult::Table(ds) => format.render_table(name, ds)?,
            StepResult::Counts(vc) => format.render_counts(name, vc)?,
        };
        writeln!(out, "{rendered}")?;

        if output.step == ReportStep::ValueCounts && format.allows_separators() {
            writeln!(out, "{}", options.separator)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Build the report over [`sample::employees`] and [`sample::departments`] and write it.
pub fn run<W: Write>(out: &mut W, options: &ReportOptions) -> ReportResult<Report> {
    let employees = sample::employees();
    let departments = sample::departments();
    let report = build_report(&employees, &departments, options)?;
    write_report(out, &report, options)?;
    Ok(report)
}
