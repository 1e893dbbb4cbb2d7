//! Hintcheck - missing type hint linter for Python.
//!
//! Hintcheck audits Python source for functions whose parameters or return
//! values lack explicit type annotations. It only checks annotation
//! *presence* - it is not a type checker and never inspects whether an
//! annotation is correct.
//!
//! # Architecture
//!
//! The codebase uses tree-sitter for parsing:
//!
//! - `syntax`: the lowered syntax tree the analysis consumes
//! - `parser`: tree-sitter parsing and lowering to `syntax` nodes
//! - `analysis`: scope-aware visitor that collects missing-hint issues
//! - `report`: JSON report structures and output
//! - `cli`: argument parsing, file resolution, orchestration

pub mod analysis;
pub mod cli;
pub mod parser;
pub mod report;
pub mod syntax;

use std::path::Path;

pub use analysis::{analyze, AnalysisError, FunctionIssues};
pub use parser::{ParsedFile, PythonParser};
pub use report::{FileReport, FunctionRecord, RunReport};
pub use syntax::{NodeKind, Span, SyntaxNode};

/// Analyze one Python file, returning its report.
///
/// Returns `Ok(None)` when every function in the file is fully annotated.
/// Parse failures and unreadable files are errors; the caller decides
/// whether they abort the run.
pub fn analyze_file(path: &Path) -> anyhow::Result<Option<FileReport>> {
    let source = std::fs::read(path)?;

    let parser = PythonParser::new();
    let parsed = parser.parse(path, &source)?;

    if parsed.has_errors() {
        match parsed.first_error_span() {
            Some(span) => anyhow::bail!("syntax error at {}", span),
            None => anyhow::bail!("syntax error"),
        }
    }

    let tree = parser.lower(&parsed);
    let issues = analysis::analyze(&tree)?;

    if issues.is_empty() {
        return Ok(None);
    }

    let abs_path = path.canonicalize()?;
    Ok(Some(FileReport::new(
        abs_path.to_string_lossy().to_string(),
        issues,
    )))
}
