//! The scope-tracking visitor.

use thiserror::Error;

use crate::syntax::{NodeKind, Span, SyntaxNode};

/// Invariant violations during traversal.
///
/// These indicate a malformed syntax tree (e.g. a `return` with no
/// enclosing function), not a user error. A syntactically valid Python
/// file can never produce one.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("return statement at {span} outside any function")]
    ReturnOutsideFunction { span: Span },
    #[error("parameter '{name}' at {span} outside any function")]
    ParameterOutsideFunction { name: String, span: Span },
    #[error("scope stack empty when leaving function '{name}'")]
    ScopeUnderflow { name: String },
}

/// Missing-hint findings for one function.
///
/// `issues` is in report order: the return-value issue, when present, is
/// first, followed by parameter issues in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionIssues {
    pub name: String,
    pub span: Span,
    pub issues: Vec<String>,
}

/// Per-function accumulator, live exactly while that function's subtree
/// is being traversed.
#[derive(Default)]
struct ScopeFrame {
    /// Parameter issues discovered so far, in declaration order.
    issues: Vec<String>,
    /// One entry per `return` directly inside this function; true if the
    /// statement carried a value expression.
    returns: Vec<bool>,
}

struct HintVisitor {
    /// One frame per function-definition ancestor of the current node.
    stack: Vec<ScopeFrame>,
    /// Finished records, in completion order.
    completed: Vec<FunctionIssues>,
}

/// Analyze a lowered syntax tree.
///
/// Returns one record per function with at least one missing hint, in
/// completion order (post-order: inner functions before their enclosing
/// function, siblings in source order).
pub fn analyze(root: &SyntaxNode) -> Result<Vec<FunctionIssues>, AnalysisError> {
    let mut visitor = HintVisitor {
        stack: Vec::new(),
        completed: Vec::new(),
    };
    visitor.visit(root)?;
    Ok(visitor.completed)
}

impl HintVisitor {
    fn visit(&mut self, node: &SyntaxNode) -> Result<(), AnalysisError> {
        match &node.kind {
            NodeKind::Function { .. } => self.stack.push(ScopeFrame::default()),
            NodeKind::Parameter {
                name,
                has_annotation,
            } => {
                // Any parameter literally named `self` is exempt, method
                // or free function alike.
                if !has_annotation && name != "self" {
                    let frame = self.stack.last_mut().ok_or_else(|| {
                        AnalysisError::ParameterOutsideFunction {
                            name: name.clone(),
                            span: node.span,
                        }
                    })?;
                    frame
                        .issues
                        .push(format!("Missing type hint for '{}'", name));
                }
            }
            NodeKind::Return { has_value } => {
                let frame = self
                    .stack
                    .last_mut()
                    .ok_or(AnalysisError::ReturnOutsideFunction { span: node.span })?;
                frame.returns.push(*has_value);
            }
            NodeKind::Other => {}
        }

        for child in &node.children {
            self.visit(child)?;
        }

        if let NodeKind::Function {
            name,
            has_return_annotation,
        } = &node.kind
        {
            let mut frame = self
                .stack
                .pop()
                .ok_or_else(|| AnalysisError::ScopeUnderflow { name: name.clone() })?;

            if !has_return_annotation && frame.returns.iter().any(|&has_value| has_value) {
                frame
                    .issues
                    .insert(0, "Missing type hint for return value".to_string());
            }

            if !frame.issues.is_empty() {
                self.completed.push(FunctionIssues {
                    name: name.clone(),
                    span: node.span,
                    issues: frame.issues,
                });
            }
        }

        Ok(())
    }
}
