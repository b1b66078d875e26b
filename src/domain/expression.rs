// Expression handlers: render expression subtrees into display strings.
// Parenthesization is deliberately minimal: only a binary expression nested
// directly inside another binary expression is wrapped, regardless of precedence.

use crate::domain::ast::SyntaxNode;
use crate::domain::dispatch::dispatch;
use crate::domain::row::{Row, RowType};

/// Render an expression node.
pub fn render(node: &SyntaxNode) -> String {
    dispatch(Some(node)).into_text()
}

/// Render an optional child; a missing child renders as the empty string.
pub fn render_optional(node: Option<&SyntaxNode>) -> String {
    dispatch(node).into_text()
}

pub fn identifier(name: &str) -> String {
    name.to_string()
}

/// Literals keep their original source text (`0x1F`, `'a'`, `1e3`).
pub fn literal(raw: &str) -> String {
    raw.to_string()
}

/// `object[property]`, bracketed for every property kind.
pub fn member(object: &SyntaxNode, property: &SyntaxNode) -> String {
    format!("{}[{}]", render(object), render(property))
}

pub fn unary(operator: &str, argument: &SyntaxNode) -> String {
    format!("{}{}", operator, render(argument))
}

pub fn binary(operator: &str, left: &SyntaxNode, right: &SyntaxNode) -> String {
    format!("{} {} {}", operand(left), operator, operand(right))
}

fn operand(side: &SyntaxNode) -> String {
    if side.is_binary() {
        format!("({})", render(side))
    } else {
        render(side)
    }
}

/// Assignment renders without spaces around the operator (`i=i + 2`).
pub fn assignment(operator: &str, left: &SyntaxNode, right: &SyntaxNode) -> String {
    format!("{}{}{}", render(left), operator, render(right))
}

/// Rendered update expression together with the line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRecord {
    pub line: usize,
    pub name: String,
}

pub fn update(line: usize, operator: &str, argument: &SyntaxNode, prefix: bool) -> UpdateRecord {
    let name = if prefix {
        format!("{}{}", operator, render(argument))
    } else {
        format!("{}{}", render(argument), operator)
    };
    UpdateRecord { line, name }
}

impl From<UpdateRecord> for Row {
    fn from(record: UpdateRecord) -> Self {
        Row::new(record.line, RowType::UpdateExpression).with_name(record.name)
    }
}
