//! Row Data Structures
//!
//! The flattened output of the engine: one record per statement or notable sub-construct.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification label of a row, serialized as its human-readable form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowType {
    #[serde(rename = "function declaration")]
    FunctionDeclaration,
    #[serde(rename = "variable declaration")]
    VariableDeclaration,
    #[serde(rename = "assignment expression")]
    AssignmentExpression,
    #[serde(rename = "update expression")]
    UpdateExpression,
    #[serde(rename = "while statement")]
    WhileStatement,
    #[serde(rename = "if statement")]
    IfStatement,
    #[serde(rename = "else if statement")]
    ElseIfStatement,
    #[serde(rename = "else statement")]
    ElseStatement,
    #[serde(rename = "for statement")]
    ForStatement,
    #[serde(rename = "return statement")]
    ReturnStatement,
}

impl RowType {
    pub fn label(&self) -> &'static str {
        match self {
            RowType::FunctionDeclaration => "function declaration",
            RowType::VariableDeclaration => "variable declaration",
            RowType::AssignmentExpression => "assignment expression",
            RowType::UpdateExpression => "update expression",
            RowType::WhileStatement => "while statement",
            RowType::IfStatement => "if statement",
            RowType::ElseIfStatement => "else if statement",
            RowType::ElseStatement => "else statement",
            RowType::ForStatement => "for statement",
            RowType::ReturnStatement => "return statement",
        }
    }
}

impl fmt::Display for RowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One flattened output record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Source line of the originating node
    pub line: usize,
    #[serde(rename = "type")]
    pub row_type: RowType,
    pub name: String,
    pub condition: String,
    pub value: String,
}

impl Row {
    /// A row with empty name, condition and value.
    pub fn new(line: usize, row_type: RowType) -> Self {
        Self {
            line,
            row_type,
            name: String::new(),
            condition: String::new(),
            value: String::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = condition.into();
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Copy of this row carrying a different classification.
    pub fn retyped(&self, row_type: RowType) -> Self {
        Self {
            row_type,
            ..self.clone()
        }
    }
}

/// The rows flattened from one source tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowTable {
    /// Where the tree came from (file path or request label)
    pub source: String,
    pub rows: Vec<Row>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_serializes_with_labels() {
        let row = Row::new(2, RowType::ElseIfStatement).with_condition("y");
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(
            json,
            r#"{"line":2,"type":"else if statement","name":"","condition":"y","value":""}"#
        );
    }

    #[test]
    fn test_retyped_leaves_original_untouched() {
        let original = Row::new(1, RowType::IfStatement).with_condition("x");
        let collapsed = original.retyped(RowType::ElseIfStatement);
        assert_eq!(original.row_type, RowType::IfStatement);
        assert_eq!(collapsed.row_type, RowType::ElseIfStatement);
        assert_eq!(collapsed.condition, "x");
        assert_eq!(collapsed.line, 1);
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(RowType::ForStatement.to_string(), "for statement");
        assert_eq!(format!("{}", RowType::ElseStatement), "else statement");
    }
}
