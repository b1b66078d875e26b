// Domain layer for RowTrace: the syntax tree model and the flattening engine.

pub mod ast;
pub mod dispatch;
pub mod error;
pub mod expression;
pub mod flatten;
pub mod row;
pub mod statement;
