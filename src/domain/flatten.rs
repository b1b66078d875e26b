//! Flattening Entry Point
//!
//! Turns a program's top-level statements into one ordered row sequence.

use serde::Deserialize;

use crate::domain::ast::SyntaxNode;
use crate::domain::error::FlattenError;
use crate::domain::row::Row;
use crate::domain::statement;

/// Flatten top-level statements. Unsupported nodes contribute nothing.
pub fn flatten(statements: &[SyntaxNode]) -> Vec<Row> {
    statement::block(statements)
}

/// Lines of every unsupported node, in pre-order.
pub fn unsupported_lines(statements: &[SyntaxNode]) -> Vec<usize> {
    let mut lines = Vec::new();
    for statement in statements {
        statement.walk(&mut |node| {
            if node.is_unsupported() {
                lines.push(node.line());
            }
        });
    }
    lines
}

/// How the engine treats node kinds it has no handler for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FlattenOptions {
    /// Reject trees containing unsupported nodes instead of skipping them
    pub strict: bool,
}

impl FlattenOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }

    pub fn flatten(&self, statements: &[SyntaxNode]) -> Result<Vec<Row>, FlattenError> {
        if self.strict {
            if let Some(&line) = unsupported_lines(statements).first() {
                return Err(FlattenError::UnsupportedNode { line });
            }
        }
        Ok(flatten(statements))
    }
}
