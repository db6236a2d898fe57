use tabular_report::report::sample::{departments, employees};
use tabular_report::report::{build_report, run, ReportOptions, ReportStep};
use tabular_report::types::{DataSet, Value};

const EXPECTED: &str = "   id     name  age department
0   1    Alice   30         HR
1   2      Bob   25         IT
2   3  Charlie   35    Finance
      name  age
0    Alice   30
1      Bob   25
2  Charlie   35
   id     name  age department
2   3  Charlie   35    Finance
   id   name  age department
0   1  Alice   30         HR
1   2    Bob   25         IT
department
HR         1
IT         1
Finance    1
Name: count, dtype: int64
------------
   id_x     name  age department  id_y department_name
0     1    Alice   30         HR     1              HR
1     3  Charlie   35    Finance     3         Finance
";

fn employee(id: i64, name: &str, age: i64, department: &str) -> Vec<Value> {
    vec![
        Value::Int64(id),
        Value::utf8(name),
        Value::Int64(age),
        Value::utf8(department),
    ]
}

fn names(ds: &DataSet) -> Vec<&str> {
    ds.schema.field_names().collect()
}

#[test]
fn full_dump_is_the_employee_table() {
    let report = build_report(&employees(), &departments(), &ReportOptions::default()).unwrap();
    let dump = report.table(ReportStep::FullDump).unwrap();

    assert_eq!(names(dump), vec!["id", "name", "age", "department"]);
    assert_eq!(
        dump.rows,
        vec![
            employee(1, "Alice", 30, "HR"),
            employee(2, "Bob", 25, "IT"),
            employee(3, "Charlie", 35, "Finance"),
        ]
    );
}

#[test]
fn projection_keeps_name_and_age() {
    let report = build_report(&employees(), &departments(), &ReportOptions::default()).unwrap();
    let projected = report.table(ReportStep::Projection).unwrap();

    assert_eq!(names(projected), vec!["name", "age"]);
    assert_eq!(
        projected.rows,
        vec![
            vec![Value::utf8("Alice"), Value::Int64(30)],
            vec![Value::utf8("Bob"), Value::Int64(25)],
            vec![Value::utf8("Charlie"), Value::Int64(35)],
        ]
    );
}

#[test]
fn filter_keeps_only_charlie_with_original_label() {
    let report = build_report(&employees(), &departments(), &ReportOptions::default()).unwrap();
    let filtered = report.table(ReportStep::Filter).unwrap();

    assert_eq!(filtered.rows, vec![employee(3, "Charlie", 35, "Finance")]);
    assert_eq!(filtered.index, vec![2]);
}

#[test]
fn head_takes_first_two_rows() {
    let report = build_report(&employees(), &departments(), &ReportOptions::default()).unwrap();
    let prefix = report.table(ReportStep::Head).unwrap();

    assert_eq!(
        prefix.rows,
        vec![employee(1, "Alice", 30, "HR"), employee(2, "Bob", 25, "IT")]
    );
}

#[test]
fn head_larger_than_table_returns_everything() {
    let opts = ReportOptions {
        head_rows: 10,
        ..Default::default()
    };
    let report = build_report(&employees(), &departments(), &opts).unwrap();
    assert_eq!(report.table(ReportStep::Head).unwrap(), &employees());
}

#[test]
fn department_counts_follow_first_encounter_on_ties() {
    let report = build_report(&employees(), &departments(), &ReportOptions::default()).unwrap();
    let counts = report.counts().unwrap();

    let pairs: Vec<_> = counts
        .counts
        .iter()
        .map(|c| (c.value.clone(), c.count))
        .collect();
    assert_eq!(
        pairs,
        vec![
            (Value::utf8("HR"), 1),
            (Value::utf8("IT"), 1),
            (Value::utf8("Finance"), 1),
        ]
    );
}

#[test]
fn join_matches_on_department_name_and_drops_bob() {
    let employees = employees();
    let report = build_report(&employees, &departments(), &ReportOptions::default()).unwrap();
    let joined = report.table(ReportStep::Join).unwrap();

    assert_eq!(
        names(joined),
        vec!["id_x", "name", "age", "department", "id_y", "department_name"]
    );
    assert_eq!(
        joined.rows,
        vec![
            vec![
                Value::Int64(1),
                Value::utf8("Alice"),
                Value::Int64(30),
                Value::utf8("HR"),
                Value::Int64(1),
                Value::utf8("HR"),
            ],
            vec![
                Value::Int64(3),
                Value::utf8("Charlie"),
                Value::Int64(35),
                Value::utf8("Finance"),
                Value::Int64(3),
                Value::utf8("Finance"),
            ],
        ]
    );

    assert!(joined.row_count() <= employees.row_count());
    let dept = joined.schema.index_of("department").unwrap();
    let dept_name = joined.schema.index_of("department_name").unwrap();
    assert!(joined.rows.iter().all(|row| row[dept] == row[dept_name]));
}

#[test]
fn steps_do_not_modify_inputs() {
    let employees = employees();
    let departments = departments();
    let opts = ReportOptions::default();

    let first = build_report(&employees, &departments, &opts).unwrap();
    let second = build_report(&employees, &departments, &opts).unwrap();

    assert_eq!(employees, tabular_report::report::sample::employees());
    assert_eq!(departments, tabular_report::report::sample::departments());
    assert_eq!(
        first.table(ReportStep::FullDump),
        second.table(ReportStep::FullDump)
    );
    assert_eq!(first, second);
}

#[test]
fn pretty_output_matches_pandas_layout() {
    let mut out = Vec::new();
    run(&mut out, &ReportOptions::default()).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), EXPECTED);
}

#[test]
fn steps_run_in_order() {
    let report = build_report(&employees(), &departments(), &ReportOptions::default()).unwrap();
    let order: Vec<_> = report.steps.iter().map(|s| s.step).collect();
    assert_eq!(order, ReportStep::ALL.to_vec());
}
