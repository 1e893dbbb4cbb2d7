//! Syntax tree types shared between the parser and the analysis pass.
//!
//! The parser lowers the tree-sitter concrete tree into this closed set of
//! node kinds. The analysis dispatches on the kind tag only; it never sees
//! tree-sitter nodes.

use std::fmt;

/// Source position of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Line (1-indexed).
    pub line: usize,
    /// Column (0-indexed byte offset within the line).
    pub column: usize,
}

impl Span {
    /// Create a span from a tree-sitter node's start position.
    pub fn from_node(node: tree_sitter::Node) -> Self {
        let start = node.start_position();
        Self {
            line: start.row + 1, // tree-sitter rows are 0-indexed
            column: start.column,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Closed set of node kinds the analysis dispatches on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A named function definition (sync or async, method or free function).
    Function {
        name: String,
        has_return_annotation: bool,
    },
    /// A formal parameter of a function definition.
    Parameter { name: String, has_annotation: bool },
    /// A `return` statement. `has_value` is false for a bare `return`;
    /// an explicit `return None` counts as carrying a value.
    Return { has_value: bool },
    /// Any other node, traversed only for its children.
    Other,
}

/// A lowered syntax tree node.
///
/// Owned by the caller of the parser; the analysis pass only borrows it.
#[derive(Debug, Clone)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    pub span: Span,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// Create a leaf node.
    pub fn leaf(kind: NodeKind, span: Span) -> Self {
        Self {
            kind,
            span,
            children: Vec::new(),
        }
    }
}
