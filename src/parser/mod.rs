//! Python parsing front end.
//!
//! This is the only tree-sitter-facing part of the crate. Everything
//! downstream consumes the lowered [`crate::syntax::SyntaxNode`] tree.

mod python;

pub use python::PythonParser;

use crate::syntax::Span;

/// Holds a parsed tree-sitter tree and associated metadata.
///
/// Kept separate from the lowered tree so parse-error inspection can reuse
/// the concrete tree without re-parsing.
pub struct ParsedFile {
    /// The tree-sitter parse tree.
    pub tree: tree_sitter::Tree,
    /// The original source code (kept for node text extraction).
    pub source: Vec<u8>,
    /// The file path (for error reporting).
    pub path: String,
}

impl ParsedFile {
    /// Get text for a tree-sitter node.
    pub fn node_text(&self, node: tree_sitter::Node) -> &str {
        node.utf8_text(&self.source).unwrap_or("")
    }

    /// Whether the parse produced any error or missing nodes.
    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }

    /// Locate the first error or missing node, in document order.
    pub fn first_error_span(&self) -> Option<Span> {
        fn find(node: tree_sitter::Node) -> Option<Span> {
            if node.is_error() || node.is_missing() {
                return Some(Span::from_node(node));
            }
            if !node.has_error() {
                return None;
            }
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                if let Some(span) = find(child) {
                    return Some(span);
                }
            }
            None
        }
        find(self.tree.root_node())
    }
}
