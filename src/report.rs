//! JSON report structures and output.
//!
//! The record shapes and field names follow the reference output format:
//! a top-level array of per-file entries, each holding the absolute file
//! path and an array of function records. Files without findings are
//! omitted entirely.

use serde::{Deserialize, Serialize};

use crate::analysis::FunctionIssues;

/// One function entry in a file's report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionRecord {
    /// Always `"function"`.
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub line: usize,
    pub column: usize,
    /// Ordered issue strings; a return-value issue, when present, is first.
    pub issues: Vec<String>,
}

impl From<FunctionIssues> for FunctionRecord {
    fn from(issues: FunctionIssues) -> Self {
        Self {
            record_type: "function".to_string(),
            name: issues.name,
            line: issues.span.line,
            column: issues.span.column,
            issues: issues.issues,
        }
    }
}

/// Report for a single analyzed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    /// Absolute path of the analyzed file.
    pub file: String,
    /// Function records in completion order.
    pub report: Vec<FunctionRecord>,
}

impl FileReport {
    /// Build a file report from per-function findings, preserving order.
    pub fn new(file: String, issues: Vec<FunctionIssues>) -> Self {
        Self {
            file,
            report: issues.into_iter().map(FunctionRecord::from).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.report.is_empty()
    }
}

/// Report for a whole run, in input-file order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunReport {
    pub files: Vec<FileReport>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a file report; files with no findings are dropped.
    pub fn push(&mut self, report: FileReport) {
        if !report.is_empty() {
            self.files.push(report);
        }
    }
}

/// Write a run report as pretty-printed JSON to stdout.
///
/// An empty run still prints `[]`.
pub fn write_json(run: &RunReport) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(run)?;
    println!("{}", json);
    Ok(())
}
