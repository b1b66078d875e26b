// Syntax tree data structures for RowTrace.
// These types mirror the ESTree JSON produced by esprima/acorn with `loc` tracking on.
// Only the properties the flattening engine reads are modelled; everything else is ignored.

use serde::Deserialize;

/// A line/column pair as emitted in `loc.start`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Position {
    #[serde(default)]
    pub line: usize,
    #[serde(default)]
    pub column: usize,
}

/// The `loc` object attached to every node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct SourceLocation {
    #[serde(default)]
    pub start: Position,
}

/// A node in the syntax tree: its source location plus the kind-specific payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SyntaxNode {
    #[serde(default)]
    pub loc: SourceLocation,
    #[serde(flatten)]
    pub kind: NodeKind,
}

/// Recognised node kinds. Each variant carries only the children it actually has.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum NodeKind {
    ExpressionStatement {
        expression: Box<SyntaxNode>,
    },
    FunctionDeclaration {
        id: Option<Box<SyntaxNode>>,
        params: Vec<SyntaxNode>,
        body: Box<SyntaxNode>,
    },
    VariableDeclaration {
        declarations: Vec<VariableDeclarator>,
    },
    WhileStatement {
        test: Box<SyntaxNode>,
        body: Box<SyntaxNode>,
    },
    IfStatement {
        test: Box<SyntaxNode>,
        consequent: Box<SyntaxNode>,
        alternate: Option<Box<SyntaxNode>>,
    },
    ReturnStatement {
        argument: Option<Box<SyntaxNode>>,
    },
    BinaryExpression {
        operator: String,
        left: Box<SyntaxNode>,
        right: Box<SyntaxNode>,
    },
    UnaryExpression {
        operator: String,
        argument: Box<SyntaxNode>,
    },
    UpdateExpression {
        operator: String,
        argument: Box<SyntaxNode>,
        prefix: bool,
    },
    BlockStatement {
        body: Vec<SyntaxNode>,
    },
    MemberExpression {
        object: Box<SyntaxNode>,
        property: Box<SyntaxNode>,
    },
    ForStatement {
        init: Option<Box<SyntaxNode>>,
        test: Option<Box<SyntaxNode>>,
        update: Option<Box<SyntaxNode>>,
        body: Box<SyntaxNode>,
    },
    Identifier {
        name: String,
    },
    Literal {
        raw: String,
    },
    AssignmentExpression {
        operator: String,
        left: Box<SyntaxNode>,
        right: Box<SyntaxNode>,
    },
    /// Any `type` tag outside the recognised set (calls, arrow functions, classes ...).
    #[serde(other)]
    Unsupported,
}

/// One `id = init` entry of a variable declaration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VariableDeclarator {
    pub id: Box<SyntaxNode>,
    pub init: Option<Box<SyntaxNode>>,
}

/// A whole parsed program. Only `body` matters to the engine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Program {
    pub body: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn new(line: usize, kind: NodeKind) -> Self {
        Self {
            loc: SourceLocation {
                start: Position { line, column: 0 },
            },
            kind,
        }
    }

    pub fn identifier(line: usize, name: &str) -> Self {
        Self::new(line, NodeKind::Identifier { name: name.to_string() })
    }

    pub fn literal(line: usize, raw: &str) -> Self {
        Self::new(line, NodeKind::Literal { raw: raw.to_string() })
    }

    pub fn binary(line: usize, left: SyntaxNode, operator: &str, right: SyntaxNode) -> Self {
        Self::new(
            line,
            NodeKind::BinaryExpression {
                operator: operator.to_string(),
                left: Box::new(left),
                right: Box::new(right),
            },
        )
    }

    pub fn assignment(line: usize, left: SyntaxNode, right: SyntaxNode) -> Self {
        Self::new(
            line,
            NodeKind::AssignmentExpression {
                operator: "=".to_string(),
                left: Box::new(left),
                right: Box::new(right),
            },
        )
    }

    /// Wrap an expression in an `ExpressionStatement` on the same line.
    pub fn statement(expression: SyntaxNode) -> Self {
        Self::new(
            expression.line(),
            NodeKind::ExpressionStatement {
                expression: Box::new(expression),
            },
        )
    }

    /// 1-based source line of the node (0 when the producer omitted locations).
    pub fn line(&self) -> usize {
        self.loc.start.line
    }

    pub fn is_binary(&self) -> bool {
        matches!(self.kind, NodeKind::BinaryExpression { .. })
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self.kind, NodeKind::Unsupported)
    }

    /// The ESTree `type` tag this node was read from.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            NodeKind::ExpressionStatement { .. } => "ExpressionStatement",
            NodeKind::FunctionDeclaration { .. } => "FunctionDeclaration",
            NodeKind::VariableDeclaration { .. } => "VariableDeclaration",
            NodeKind::WhileStatement { .. } => "WhileStatement",
            NodeKind::IfStatement { .. } => "IfStatement",
            NodeKind::ReturnStatement { .. } => "ReturnStatement",
            NodeKind::BinaryExpression { .. } => "BinaryExpression",
            NodeKind::UnaryExpression { .. } => "UnaryExpression",
            NodeKind::UpdateExpression { .. } => "UpdateExpression",
            NodeKind::BlockStatement { .. } => "BlockStatement",
            NodeKind::MemberExpression { .. } => "MemberExpression",
            NodeKind::ForStatement { .. } => "ForStatement",
            NodeKind::Identifier { .. } => "Identifier",
            NodeKind::Literal { .. } => "Literal",
            NodeKind::AssignmentExpression { .. } => "AssignmentExpression",
            NodeKind::Unsupported => "Unsupported",
        }
    }

    /// Visit this node and all descendants in pre-order, left to right.
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a SyntaxNode)) {
        visit(self);
        match &self.kind {
            NodeKind::ExpressionStatement { expression } => expression.walk(visit),
            NodeKind::FunctionDeclaration { id, params, body } => {
                if let Some(id) = id {
                    id.walk(visit);
                }
                for param in params {
                    param.walk(visit);
                }
                body.walk(visit);
            }
            NodeKind::VariableDeclaration { declarations } => {
                for declarator in declarations {
                    declarator.id.walk(visit);
                    if let Some(init) = &declarator.init {
                        init.walk(visit);
                    }
                }
            }
            NodeKind::WhileStatement { test, body } => {
                test.walk(visit);
                body.walk(visit);
            }
            NodeKind::IfStatement { test, consequent, alternate } => {
                test.walk(visit);
                consequent.walk(visit);
                if let Some(alternate) = alternate {
                    alternate.walk(visit);
                }
            }
            NodeKind::ReturnStatement { argument } => {
                if let Some(argument) = argument {
                    argument.walk(visit);
                }
            }
            NodeKind::BinaryExpression { left, right, .. }
            | NodeKind::AssignmentExpression { left, right, .. } => {
                left.walk(visit);
                right.walk(visit);
            }
            NodeKind::UnaryExpression { argument, .. }
            | NodeKind::UpdateExpression { argument, .. } => argument.walk(visit),
            NodeKind::BlockStatement { body } => {
                for statement in body {
                    statement.walk(visit);
                }
            }
            NodeKind::MemberExpression { object, property } => {
                object.walk(visit);
                property.walk(visit);
            }
            NodeKind::ForStatement { init, test, update, body } => {
                for clause in [init, test, update].into_iter().flatten() {
                    clause.walk(visit);
                }
                body.walk(visit);
            }
            NodeKind::Identifier { .. } | NodeKind::Literal { .. } | NodeKind::Unsupported => {}
        }
    }
}
