use std::path::Path;

use osr_model::{CellValue, Table};
use osr_output::{
    OutputError, compile, split_by_representative, to_csv_string, write_csv,
};
use tempfile::TempDir;

fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
    let mut table = Table::new(headers.iter().map(|h| (*h).to_string()).collect());
    for row in rows {
        table.push_row(row.iter().map(|cell| CellValue::text(*cell)).collect());
    }
    table
}

#[test]
fn csv_output_quotes_and_blanks() {
    let mut report = table(&["Name", "Quantity", "OSR", "Flag"], &[&["Ada, L", "", "R07", ""]]);
    report.push_row(vec![
        CellValue::text("Grace"),
        CellValue::Number(10.0),
        CellValue::Missing,
        CellValue::text("Out of territory"),
    ]);

    let csv = to_csv_string(&report).unwrap();

    insta::assert_snapshot!(csv, @r#"
    Name,Quantity,OSR,Flag
    "Ada, L",,R07,
    Grace,10,,Out of territory
    "#);
}

#[test]
fn split_groups_by_first_appearance() {
    let report = table(
        &["Name", "OSR"],
        &[&["a", "R2"], &["b", "R1"], &["c", ""], &["d", "R2"], &["e", "R1"]],
    );

    let groups = split_by_representative(&report).unwrap();

    let reps: Vec<_> = groups.iter().map(|g| g.representative.as_str()).collect();
    assert_eq!(reps, vec!["R2", "R1", ""]);
    let names: Vec<_> = groups[0]
        .table
        .rows
        .iter()
        .map(|row| row[0].render())
        .collect();
    assert_eq!(names, vec!["a", "d"]);
    assert_eq!(groups[0].table.headers, report.headers);
    let total: usize = groups.iter().map(|g| g.table.height()).sum();
    assert_eq!(total, report.height());
}

#[test]
fn split_requires_representative_column() {
    let report = table(&["Name"], &[&["a"]]);
    let err = split_by_representative(&report).unwrap_err();
    assert!(matches!(err, OutputError::MissingColumn { column } if column == "OSR"));
}

#[test]
fn compile_appends_in_order() {
    let first = table(&["Name", "OSR"], &[&["a", "R1"]]);
    let second = table(&["Name", "OSR"], &[&["b", "R2"], &["c", "R2"]]);

    let compiled = compile(&[first, second]).unwrap();

    assert_eq!(compiled.height(), 3);
    assert_eq!(compiled.cell(2, 0).render(), "c");
}

#[test]
fn compile_rejects_column_count_mismatch() {
    let first = table(&["Name", "OSR"], &[]);
    let second = table(&["Name", "OSR"], &[]);
    let third = table(&["Name"], &[]);

    let err = compile(&[first, second, third]).unwrap_err();

    match err {
        OutputError::ColumnCountMismatch {
            table,
            expected,
            found,
        } => assert_eq!((table, expected, found), (3, 2, 1)),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn compile_rejects_reordered_columns() {
    let first = table(&["Name", "OSR", "Flag"], &[]);
    let second = table(&["Name", "Flag", "OSR"], &[]);

    let err = compile(&[first, second]).unwrap_err();

    assert_eq!(
        err.to_string(),
        "column mismatch between tables 1 and 2: column 2 is 'Flag', expected 'OSR'"
    );
}

#[test]
fn compile_of_nothing_is_an_error() {
    assert!(matches!(compile(&[]), Err(OutputError::EmptyInput)));
}

#[test]
fn write_csv_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("out.csv");
    let report = table(&["Name"], &[&["a"]]);

    write_csv(&path, &report).unwrap();

    let written = std::fs::read_to_string(Path::new(&path)).unwrap();
    assert_eq!(written, "Name\na\n");
}
