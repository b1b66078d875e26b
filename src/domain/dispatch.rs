//! Node Dispatcher
//!
//! Maps a node's kind to the handler responsible for it. Statement handlers
//! yield rows, expression handlers yield rendered strings; the caller coerces
//! the result to whichever shape its position needs.

use crate::domain::ast::{NodeKind, SyntaxNode};
use crate::domain::expression::{self, UpdateRecord};
use crate::domain::row::Row;
use crate::domain::statement;

/// Result of dispatching one node.
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatched {
    /// No node was given (an optional child that is missing)
    Absent,
    Rows(Vec<Row>),
    Text(String),
    Update(UpdateRecord),
    /// The node's kind has no handler
    Unsupported { line: usize },
}

impl Dispatched {
    /// Coerce to rows for a statement position.
    pub fn into_rows(self) -> Vec<Row> {
        match self {
            Dispatched::Rows(rows) => rows,
            Dispatched::Update(record) => vec![record.into()],
            Dispatched::Absent | Dispatched::Text(_) | Dispatched::Unsupported { .. } => Vec::new(),
        }
    }

    /// Coerce to a rendered string for an expression position.
    pub fn into_text(self) -> String {
        match self {
            Dispatched::Text(text) => text,
            Dispatched::Update(record) => record.name,
            Dispatched::Absent | Dispatched::Rows(_) | Dispatched::Unsupported { .. } => String::new(),
        }
    }
}

/// Invoke the handler registered for `node`'s kind.
pub fn dispatch(node: Option<&SyntaxNode>) -> Dispatched {
    let Some(node) = node else {
        return Dispatched::Absent;
    };
    let line = node.line();

    match &node.kind {
        NodeKind::ExpressionStatement { expression } => {
            Dispatched::Rows(statement::expression_statement(line, expression))
        }
        NodeKind::FunctionDeclaration { id, params, body } => Dispatched::Rows(
            statement::function_declaration(line, id.as_deref(), params, body),
        ),
        NodeKind::VariableDeclaration { declarations } => {
            Dispatched::Rows(statement::variable_declaration(line, declarations))
        }
        NodeKind::WhileStatement { test, body } => {
            Dispatched::Rows(statement::while_statement(line, test, body))
        }
        NodeKind::IfStatement { test, consequent, alternate } => Dispatched::Rows(
            statement::if_statement(line, test, consequent, alternate.as_deref()),
        ),
        NodeKind::ReturnStatement { argument } => {
            Dispatched::Rows(statement::return_statement(line, argument.as_deref()))
        }
        NodeKind::BlockStatement { body } => Dispatched::Rows(statement::block(body)),
        NodeKind::ForStatement { init, test, update, body } => Dispatched::Rows(statement::for_statement(
            line,
            init.as_deref(),
            test.as_deref(),
            update.as_deref(),
            body,
        )),
        NodeKind::BinaryExpression { operator, left, right } => {
            Dispatched::Text(expression::binary(operator, left, right))
        }
        NodeKind::UnaryExpression { operator, argument } => {
            Dispatched::Text(expression::unary(operator, argument))
        }
        NodeKind::UpdateExpression { operator, argument, prefix } => {
            Dispatched::Update(expression::update(line, operator, argument, *prefix))
        }
        NodeKind::MemberExpression { object, property } => {
            Dispatched::Text(expression::member(object, property))
        }
        NodeKind::Identifier { name } => Dispatched::Text(expression::identifier(name)),
        NodeKind::Literal { raw } => Dispatched::Text(expression::literal(raw)),
        NodeKind::AssignmentExpression { operator, left, right } => {
            Dispatched::Text(expression::assignment(operator, left, right))
        }
        NodeKind::Unsupported => {
            tracing::debug!(line, "no handler for node kind, skipping");
            Dispatched::Unsupported { line }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::row::RowType;

    #[test]
    fn test_absent_node() {
        assert_eq!(dispatch(None), Dispatched::Absent);
        assert_eq!(dispatch(None).into_text(), "");
        assert!(dispatch(None).into_rows().is_empty());
    }

    #[test]
    fn test_unsupported_node_is_not_an_error() {
        let node = SyntaxNode::new(4, NodeKind::Unsupported);
        assert_eq!(dispatch(Some(&node)), Dispatched::Unsupported { line: 4 });
        assert_eq!(dispatch(Some(&node)).into_text(), "");
        assert!(dispatch(Some(&node)).into_rows().is_empty());
    }

    #[test]
    fn test_expression_yields_text() {
        let node = SyntaxNode::identifier(1, "total");
        assert_eq!(dispatch(Some(&node)), Dispatched::Text("total".to_string()));
        assert!(dispatch(Some(&node)).into_rows().is_empty());
    }

    #[test]
    fn test_update_record_coerces_both_ways() {
        let node = SyntaxNode::new(
            6,
            NodeKind::UpdateExpression {
                operator: "--".to_string(),
                argument: Box::new(SyntaxNode::identifier(6, "n")),
                prefix: true,
            },
        );
        assert_eq!(dispatch(Some(&node)).into_text(), "--n");

        let rows = dispatch(Some(&node)).into_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].row_type, RowType::UpdateExpression);
        assert_eq!(rows[0].line, 6);
        assert_eq!(rows[0].name, "--n");
    }
}
