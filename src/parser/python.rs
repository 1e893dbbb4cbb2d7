//! Python source lowering using tree-sitter.
//!
//! The lowering maps the tree-sitter-python grammar onto the closed
//! [`NodeKind`] set: `function_definition` nodes become functions with
//! their parameters spliced in declaration order ahead of the body
//! statements, `return_statement` nodes become returns, and everything
//! else is kept only as a container for its named children. Lambdas take
//! the generic path, so their parameter lists never produce parameter
//! nodes.

use std::path::Path;

use tree_sitter::{Language, Node, Parser};

use crate::parser::ParsedFile;
use crate::syntax::{NodeKind, Span, SyntaxNode};

pub struct PythonParser {
    language: Language,
}

impl PythonParser {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_python::LANGUAGE.into(),
        }
    }

    fn create_parser(&self) -> anyhow::Result<Parser> {
        let mut parser = Parser::new();
        parser.set_language(&self.language)?;
        Ok(parser)
    }

    /// Parse a source file into a tree-sitter tree.
    ///
    /// Partial parse errors still yield a tree with ERROR nodes; callers
    /// check [`ParsedFile::has_errors`] before lowering.
    pub fn parse(&self, path: &Path, source: &[u8]) -> anyhow::Result<ParsedFile> {
        let mut parser = self.create_parser()?;
        let tree = parser
            .parse(source, None)
            .ok_or_else(|| anyhow::anyhow!("failed to parse Python source: {}", path.display()))?;

        Ok(ParsedFile {
            tree,
            source: source.to_vec(),
            path: path.to_string_lossy().to_string(),
        })
    }

    /// Lower a parsed file into the syntax tree the analysis consumes.
    pub fn lower(&self, parsed: &ParsedFile) -> SyntaxNode {
        lower_node(parsed, parsed.tree.root_node())
    }
}

impl Default for PythonParser {
    fn default() -> Self {
        Self::new()
    }
}

fn lower_node(parsed: &ParsedFile, node: Node) -> SyntaxNode {
    match node.kind() {
        "function_definition" => lower_function(parsed, node),
        "return_statement" => {
            let mut cursor = node.walk();
            let has_value = node
                .named_children(&mut cursor)
                .any(|child| child.kind() != "comment");
            SyntaxNode::leaf(NodeKind::Return { has_value }, Span::from_node(node))
        }
        _ => SyntaxNode {
            kind: NodeKind::Other,
            span: Span::from_node(node),
            children: lower_children(parsed, node),
        },
    }
}

fn lower_children(parsed: &ParsedFile, node: Node) -> Vec<SyntaxNode> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .map(|child| lower_node(parsed, child))
        .collect()
}

/// Lower a `function_definition`.
///
/// The node's position is the `def` keyword, so decorators are excluded.
/// Covers both sync and async definitions; tree-sitter uses the same node
/// kind for both.
fn lower_function(parsed: &ParsedFile, node: Node) -> SyntaxNode {
    let name = node
        .child_by_field_name("name")
        .map(|n| parsed.node_text(n).to_string())
        .unwrap_or_default();
    let has_return_annotation = node.child_by_field_name("return_type").is_some();

    let mut children = Vec::new();
    if let Some(params) = node.child_by_field_name("parameters") {
        lower_parameters(parsed, params, &mut children);
    }
    if let Some(body) = node.child_by_field_name("body") {
        let mut cursor = body.walk();
        for stmt in body.named_children(&mut cursor) {
            children.push(lower_node(parsed, stmt));
        }
    }

    SyntaxNode {
        kind: NodeKind::Function {
            name,
            has_return_annotation,
        },
        span: Span::from_node(node),
        children,
    }
}

/// Lower the formal parameter list of a function definition.
///
/// `*args` and `**kwargs` are parameters named by their inner identifier;
/// bare `*` and `/` separators carry no name and produce nothing. Default
/// value expressions are not lowered - no statement can occur inside them.
fn lower_parameters(parsed: &ParsedFile, params: Node, out: &mut Vec<SyntaxNode>) {
    let mut cursor = params.walk();
    for child in params.named_children(&mut cursor) {
        let annotated = match child.kind() {
            "identifier" | "default_parameter" | "list_splat_pattern"
            | "dictionary_splat_pattern" => false,
            "typed_parameter" | "typed_default_parameter" => true,
            _ => continue,
        };

        if let Some(name) = parameter_name(parsed, child) {
            out.push(SyntaxNode::leaf(
                NodeKind::Parameter {
                    name,
                    has_annotation: annotated,
                },
                Span::from_node(child),
            ));
        }
    }
}

/// Extract the declared name of a parameter node of any form.
fn parameter_name(parsed: &ParsedFile, node: Node) -> Option<String> {
    if node.kind() == "identifier" {
        return Some(parsed.node_text(node).to_string());
    }
    if let Some(name) = node.child_by_field_name("name") {
        return parameter_name(parsed, name);
    }
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "identifier" | "list_splat_pattern" | "dictionary_splat_pattern" => {
                return parameter_name(parsed, child);
            }
            _ => {}
        }
    }
    None
}
