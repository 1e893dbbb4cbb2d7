//! Command-line interface for hintcheck.

use std::path::{Path, PathBuf};

use clap::Parser;
use walkdir::WalkDir;

use crate::analysis::AnalysisError;
use crate::report::{self, RunReport};

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_USAGE: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Missing type hint linter for Python.
///
/// Hintcheck audits Python source for functions whose parameters or
/// return values lack explicit type annotations and prints a JSON report.
/// It only checks annotation presence - it is not a type checker.
#[derive(Parser)]
#[command(name = "hintcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Files or directories to check
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Check directories recursively
    #[arg(short, long)]
    pub recursive: bool,
}

/// Find a directory argument that cannot be expanded because
/// `--recursive` was not given.
fn directory_without_recursive(paths: &[PathBuf], recursive: bool) -> Option<&Path> {
    if recursive {
        return None;
    }
    paths.iter().find(|p| p.is_dir()).map(|p| p.as_path())
}

/// Expand a directory argument to every `.py` file beneath it.
///
/// Entries are sorted so runs over the same tree are deterministic.
fn expand_directory(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() {
            let ext = entry.path().extension().and_then(|e| e.to_str()).unwrap_or("");
            if ext == "py" {
                files.push(entry.path().to_path_buf());
            }
        }
    }

    Ok(files)
}

/// Resolve the argument list to concrete files, in argument order.
///
/// Expanded directory contents are spliced at the directory argument's
/// position, so report order follows the command line.
fn resolve_paths(paths: &[PathBuf]) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            files.extend(expand_directory(path)?);
        } else {
            files.push(path.clone());
        }
    }

    Ok(files)
}

/// Run the linter over the resolved file list and print the report.
pub fn run(cli: &Cli) -> anyhow::Result<i32> {
    if let Some(dir) = directory_without_recursive(&cli.paths, cli.recursive) {
        eprintln!(
            "{} is a directory. Use -r if you want to check directories recursively.",
            dir.display()
        );
        return Ok(EXIT_USAGE);
    }

    let files = resolve_paths(&cli.paths)?;
    let mut run_report = RunReport::new();

    for file in &files {
        match crate::analyze_file(file) {
            Ok(Some(file_report)) => run_report.push(file_report),
            Ok(None) => {}
            Err(e) => {
                // Traversal invariant violations mean the tree itself is
                // inconsistent; abort instead of misattributing state.
                if e.downcast_ref::<AnalysisError>().is_some() {
                    return Err(e.context(format!("internal error in {}", file.display())));
                }
                // Unreadable or malformed files are per-file diagnostics;
                // the rest of the run continues.
                eprintln!("{}: {}", file.display(), e);
            }
        }
    }

    report::write_json(&run_report)?;
    Ok(EXIT_SUCCESS)
}
