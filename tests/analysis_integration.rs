//! End-to-end tests: parse real Python source and check the findings.

use std::path::{Path, PathBuf};

use hintcheck::{analyze, analyze_file, FunctionIssues, PythonParser, RunReport};
use tempfile::TempDir;

fn testdata_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

fn analyze_source(source: &str) -> Vec<FunctionIssues> {
    let parser = PythonParser::new();
    let parsed = parser
        .parse(Path::new("test.py"), source.as_bytes())
        .expect("fixture should parse");
    assert!(!parsed.has_errors(), "fixture should be syntactically valid");
    analyze(&parser.lower(&parsed)).expect("analysis should succeed")
}

#[test]
fn test_partially_annotated_function_with_value_return() {
    let records = analyze_source("def f(a, b: int):\n    return a\n");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "f");
    assert_eq!(
        records[0].issues,
        vec![
            "Missing type hint for return value".to_string(),
            "Missing type hint for 'a'".to_string(),
        ]
    );
}

#[test]
fn test_fully_annotated_method_emits_nothing() {
    let records = analyze_source("def g(self, x: int) -> int:\n    return x\n");
    assert!(records.is_empty(), "fully annotated, self exempt");
}

#[test]
fn test_nested_function_reported_before_enclosing() {
    let source = "\
def outer(n):
    def inner(m):
        return m
";
    let records = analyze_source(source);

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "inner");
    assert_eq!(
        records[0].issues,
        vec![
            "Missing type hint for return value".to_string(),
            "Missing type hint for 'm'".to_string(),
        ]
    );
    assert_eq!(records[1].name, "outer");
    assert_eq!(
        records[1].issues,
        vec!["Missing type hint for 'n'".to_string()]
    );
}

#[test]
fn test_outer_with_only_bare_return_is_isolated_from_inner() {
    // inner returns a value; outer's only return is bare. The value
    // return must not leak into outer's return-hint check.
    let source = "\
def outer(n: int):
    def inner(m: int):
        return m
    return
";
    let records = analyze_source(source);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "inner");
    assert_eq!(
        records[0].issues,
        vec!["Missing type hint for return value".to_string()]
    );
}

#[test]
fn test_return_none_counts_as_value_return() {
    let records = analyze_source("def f(x: int):\n    return None\n");

    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].issues,
        vec!["Missing type hint for return value".to_string()]
    );
}

#[test]
fn test_no_false_positives_on_annotated_module() {
    let source = "\
import os


def free(x: int, y: str = \"a\") -> bool:
    return x > len(y)


class Widget:
    def method(self, value: float) -> float:
        if value < 0:
            return -value
        return value

    def fire(self) -> None:
        print(self)
";
    assert!(analyze_source(source).is_empty());
}

#[test]
fn test_function_without_returns_or_parameters_emits_nothing() {
    assert!(analyze_source("def f():\n    pass\n").is_empty());
}

#[test]
fn test_self_exemption_in_free_function() {
    let records = analyze_source("def free(self, other):\n    pass\n");

    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].issues,
        vec!["Missing type hint for 'other'".to_string()]
    );
}

#[test]
fn test_record_position_matches_def_line() {
    let records = analyze_source("\n\ndef f(a):\n    pass\n");
    assert_eq!(records[0].span.line, 3);
    assert_eq!(records[0].span.column, 0);
}

#[test]
fn test_analysis_is_deterministic() {
    let source = "\
def f(a, b: int):
    return a

def g(c):
    def h(d):
        return d
    return c
";
    let first = serde_json::to_string(&hintcheck::FileReport::new(
        "test.py".to_string(),
        analyze_source(source),
    ))
    .unwrap();
    let second = serde_json::to_string(&hintcheck::FileReport::new(
        "test.py".to_string(),
        analyze_source(source),
    ))
    .unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_analyze_file_reports_findings_with_absolute_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("flagged.py");
    std::fs::write(&path, "def f(a):\n    return a\n").unwrap();

    let report = analyze_file(&path).unwrap().expect("should have findings");
    assert!(Path::new(&report.file).is_absolute());
    assert_eq!(report.report.len(), 1);
    assert_eq!(report.report[0].name, "f");
}

#[test]
fn test_analyze_file_returns_none_for_clean_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("clean.py");
    std::fs::write(&path, "def f(a: int) -> int:\n    return a\n").unwrap();

    assert!(analyze_file(&path).unwrap().is_none());
}

#[test]
fn test_analyze_file_rejects_malformed_source() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.py");
    std::fs::write(&path, "def f(:\n    pass\n").unwrap();

    let err = analyze_file(&path).unwrap_err();
    assert!(err.to_string().contains("syntax error"), "got: {}", err);
}

#[test]
fn test_analyze_file_rejects_missing_file() {
    let temp = TempDir::new().unwrap();
    assert!(analyze_file(&temp.path().join("absent.py")).is_err());
}

#[test]
fn test_testdata_run_report() {
    let mut run = RunReport::new();
    for name in ["clean.py", "flagged.py", "nested.py"] {
        if let Some(report) = analyze_file(&testdata_path().join(name)).unwrap() {
            run.push(report);
        }
    }

    assert_eq!(run.files.len(), 2, "clean.py should be omitted");
    assert!(run.files[0].file.ends_with("flagged.py"));
    assert!(run.files[1].file.ends_with("nested.py"));

    let flagged = &run.files[0];
    assert_eq!(flagged.report[0].name, "totals");
    assert_eq!(
        flagged.report[0].issues,
        vec![
            "Missing type hint for return value".to_string(),
            "Missing type hint for 'values'".to_string(),
        ]
    );
    assert_eq!(flagged.report[1].name, "add");
    assert_eq!(
        flagged.report[1].issues,
        vec!["Missing type hint for 'item'".to_string()]
    );

    let nested = &run.files[1];
    let names: Vec<_> = nested.report.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["inner", "outer"]);
}
