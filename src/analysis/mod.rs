//! Scope-aware missing-hint analysis.
//!
//! A single depth-first pass over the lowered syntax tree. The visitor
//! keeps one accumulator frame per function currently being traversed, so
//! parameters and `return` statements always attach to their nearest
//! enclosing function, never to an outer one. Functions are reported in
//! completion order: a nested function finishes traversal before the
//! function that contains it, so it appears first.

mod visitor;

pub use visitor::{analyze, AnalysisError, FunctionIssues};
