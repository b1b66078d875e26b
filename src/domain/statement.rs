//! Statement Handlers
//!
//! Each handler turns one statement into an ordered run of rows, recursively
//! flattening nested blocks and splicing their rows in source order.

use crate::domain::ast::{NodeKind, SyntaxNode, VariableDeclarator};
use crate::domain::dispatch::{dispatch, Dispatched};
use crate::domain::expression::{render, render_optional};
use crate::domain::row::{Row, RowType};

/// Flatten a sequence of statements, concatenating their rows in order.
pub fn block(body: &[SyntaxNode]) -> Vec<Row> {
    body.iter()
        .flat_map(|statement| dispatch(Some(statement)).into_rows())
        .collect()
}

fn flatten_child(node: &SyntaxNode) -> Vec<Row> {
    dispatch(Some(node)).into_rows()
}

pub fn expression_statement(line: usize, expression: &SyntaxNode) -> Vec<Row> {
    let row = match &expression.kind {
        NodeKind::AssignmentExpression { left, right, .. } => Row::new(line, RowType::AssignmentExpression)
            .with_name(render(left))
            .with_value(render(right)),
        _ => Row::new(line, RowType::UpdateExpression).with_value(render(expression)),
    };
    vec![row]
}

pub fn variable_declaration(line: usize, declarations: &[VariableDeclarator]) -> Vec<Row> {
    declarations
        .iter()
        .map(|declarator| {
            Row::new(line, RowType::VariableDeclaration)
                .with_name(render(&declarator.id))
                .with_value(render_optional(declarator.init.as_deref()))
        })
        .collect()
}

/// Function row, one row per parameter, then the body.
pub fn function_declaration(
    line: usize,
    id: Option<&SyntaxNode>,
    params: &[SyntaxNode],
    body: &SyntaxNode,
) -> Vec<Row> {
    let mut rows = vec![Row::new(line, RowType::FunctionDeclaration).with_name(render_optional(id))];
    rows.extend(
        params
            .iter()
            .map(|param| Row::new(line, RowType::VariableDeclaration).with_name(render(param))),
    );
    rows.extend(flatten_child(body));
    rows
}

pub fn return_statement(line: usize, argument: Option<&SyntaxNode>) -> Vec<Row> {
    vec![Row::new(line, RowType::ReturnStatement).with_value(render_optional(argument))]
}

pub fn while_statement(line: usize, test: &SyntaxNode, body: &SyntaxNode) -> Vec<Row> {
    let mut rows = vec![Row::new(line, RowType::WhileStatement).with_condition(render(test))];
    rows.extend(flatten_child(body));
    rows
}

pub fn for_statement(
    line: usize,
    init: Option<&SyntaxNode>,
    test: Option<&SyntaxNode>,
    update: Option<&SyntaxNode>,
    body: &SyntaxNode,
) -> Vec<Row> {
    let condition = format!(
        "{};{};{}",
        init_clause(init),
        render_optional(test),
        update_clause(update)
    );
    let mut rows = vec![Row::new(line, RowType::ForStatement).with_condition(condition)];
    rows.extend(flatten_child(body));
    rows
}

// `let i = 0, j = n` renders in assignment form: `i=0,j=n`.
fn init_clause(init: Option<&SyntaxNode>) -> String {
    match init.map(|node| &node.kind) {
        Some(NodeKind::VariableDeclaration { declarations }) => declarations
            .iter()
            .map(|declarator| match &declarator.init {
                Some(value) => format!("{}={}", render(&declarator.id), render(value)),
                None => render(&declarator.id),
            })
            .collect::<Vec<_>>()
            .join(","),
        _ => render_optional(init),
    }
}

fn update_clause(update: Option<&SyntaxNode>) -> String {
    match dispatch(update) {
        Dispatched::Update(record) => record.name,
        other => other.into_text(),
    }
}

/// If row, consequent rows, then the alternate. An alternate that is itself an
/// `if` collapses into an "else if" row; anything else gets a synthetic "else" row.
pub fn if_statement(
    line: usize,
    test: &SyntaxNode,
    consequent: &SyntaxNode,
    alternate: Option<&SyntaxNode>,
) -> Vec<Row> {
    let mut rows = vec![Row::new(line, RowType::IfStatement).with_condition(render(test))];
    rows.extend(flatten_child(consequent));

    if let Some(alternate) = alternate {
        let mut branch = flatten_child(alternate);
        let collapsed = branch
            .first()
            .filter(|head| head.row_type == RowType::IfStatement)
            .map(|head| head.retyped(RowType::ElseIfStatement));
        match collapsed {
            Some(head) => branch[0] = head,
            None => rows.push(Row::new(alternate.line(), RowType::ElseStatement)),
        }
        rows.extend(branch);
    }

    rows
}
