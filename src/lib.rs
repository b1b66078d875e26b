// Main library entry point for RowTrace.

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::ast::{NodeKind, Program, SyntaxNode};
pub use domain::flatten::{flatten, FlattenOptions};
pub use domain::row::{Row, RowTable, RowType};
