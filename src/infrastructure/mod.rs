// Infrastructure implementations for RowTrace.

use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::ast::{Program, SyntaxNode};
use crate::domain::row::RowTable;
use crate::ports::{RowExporter, SyntaxTreeSource};

pub mod concurrency;
pub mod project_loader;

/// Reads ESTree JSON as emitted by esprima/acorn with location tracking.
/// Accepts either a `Program` object or a bare array of statements.
pub struct EstreeJsonSource;

impl SyntaxTreeSource for EstreeJsonSource {
    fn parse_str(&self, text: &str) -> Result<Program> {
        let value: serde_json::Value = serde_json::from_str(text).context("Invalid JSON syntax tree")?;
        program_from_value(value)
    }

    fn load(&self, path: &Path) -> Result<Program> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read syntax tree {}", path.display()))?;
        self.parse_str(&text)
            .with_context(|| format!("Failed to parse syntax tree {}", path.display()))
    }
}

/// Build a program from an already-decoded JSON value.
pub fn program_from_value(value: serde_json::Value) -> Result<Program> {
    if value.is_array() {
        let body: Vec<SyntaxNode> =
            serde_json::from_value(value).context("Statement array does not match the ESTree shape")?;
        return Ok(Program { body });
    }
    serde_json::from_value(value).context("Program does not match the ESTree shape")
}

/// Pretty JSON output: `[{"source": ..., "rows": [{line, type, name, condition, value}]}]`.
pub struct JsonRowExporter;

impl RowExporter for JsonRowExporter {
    fn render(&self, tables: &[RowTable]) -> String {
        // RowTable holds only strings and integers, serialization cannot fail
        serde_json::to_string_pretty(tables).unwrap_or_default()
    }
}
