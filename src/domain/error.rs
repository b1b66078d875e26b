use thiserror::Error;

/// Errors raised by the flattening engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlattenError {
    /// Strict mode met a node kind with no handler.
    #[error("unsupported syntax node at line {line}")]
    UnsupportedNode { line: usize },
}
