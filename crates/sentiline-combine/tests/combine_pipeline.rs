//! End-to-end tests for the combine pipeline

use std::fs;
use std::path::Path;

use sentiline_combine::{run, CombineConfig};
use sentiline_core::ProgressContext;

fn write_file(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn config_for(dir: &Path) -> CombineConfig {
    CombineConfig {
        input_dir: dir.to_path_buf(),
        ..CombineConfig::default()
    }
}

#[test]
fn cross_file_duplicate_collapses_to_one_row() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        "a.jsonl",
        "{\"id\": 1, \"content\": \"hello\"}\n{\"id\": 2, \"content\": \"world\"}\n",
    );
    write_file(
        dir.path(),
        "b.jsonl",
        "{\"id\": 1, \"content\": \"hello\"}\n{\"id\": 3, \"content\": \"again\"}\n",
    );

    let summary = run(&config_for(dir.path()), &ProgressContext::new()).unwrap();
    assert_eq!(summary.files_read, 2);
    assert_eq!(summary.rows_in, 4);
    assert_eq!(summary.duplicates_removed, 1);
    assert_eq!(summary.rows_out, 3);

    let jsonl = fs::read_to_string(dir.path().join("combined_file.jsonl")).unwrap();
    let hits = jsonl
        .lines()
        .filter(|l| l.contains("\"hello\""))
        .count();
    assert_eq!(hits, 1);
}

#[test]
fn nested_columns_come_out_as_strings() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        "a.jsonl",
        "{\"id\": 1, \"user\": {\"name\": \"w\"}}\n{\"id\": 2, \"user\": \"plain\"}\n",
    );

    run(&config_for(dir.path()), &ProgressContext::new()).unwrap();

    let jsonl = fs::read_to_string(dir.path().join("combined_file.jsonl")).unwrap();
    for line in jsonl.lines() {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        let user = value.get("user").unwrap();
        assert!(user.is_string(), "user column not stringified: {user}");
    }
    // Nested object serialized as compact JSON text
    assert!(jsonl.contains(r#""user":"{\"name\":\"w\"}""#));
}

#[test]
fn csv_output_has_header_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        "a.jsonl",
        "{\"id\": 1, \"content\": \"x,y\"}\n",
    );

    run(&config_for(dir.path()), &ProgressContext::new()).unwrap();

    let csv = fs::read_to_string(dir.path().join("combined_file.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "id,content");
    assert_eq!(lines[1], "1,\"x,y\"");
}

#[test]
fn empty_directory_writes_empty_outputs() {
    let dir = tempfile::tempdir().unwrap();

    let summary = run(&config_for(dir.path()), &ProgressContext::new()).unwrap();
    assert_eq!(summary.files_read, 0);
    assert_eq!(summary.rows_out, 0);

    assert_eq!(
        fs::read_to_string(dir.path().join("combined_file.jsonl")).unwrap(),
        ""
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("combined_file.csv")).unwrap(),
        ""
    );
}

#[test]
fn rerun_does_not_reingest_own_output() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "a.jsonl", "{\"id\": 1}\n");

    run(&config_for(dir.path()), &ProgressContext::new()).unwrap();
    let second = run(&config_for(dir.path()), &ProgressContext::new()).unwrap();

    // Only a.jsonl again, not combined_file.jsonl
    assert_eq!(second.files_read, 1);
    assert_eq!(second.rows_out, 1);
}

#[test]
fn bad_file_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "a.jsonl", "{\"id\": 1}\n");
    write_file(dir.path(), "b.jsonl", "{broken\n");

    let err = run(&config_for(dir.path()), &ProgressContext::new()).unwrap_err();
    assert!(format!("{err:#}").contains("b.jsonl"));
}

#[test]
fn sparse_columns_union_across_files() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "a.jsonl", "{\"a\": 1}\n");
    write_file(dir.path(), "b.jsonl", "{\"b\": 2}\n");

    run(&config_for(dir.path()), &ProgressContext::new()).unwrap();

    let csv = fs::read_to_string(dir.path().join("combined_file.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "a,b");
    assert_eq!(lines[1], "1,");
    assert_eq!(lines[2], ",2");
}
