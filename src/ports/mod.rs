use std::path::Path;

use crate::domain::ast::Program;
use crate::domain::row::RowTable;

pub mod table_exporter;

/// Supplies syntax trees produced by an external parser.
pub trait SyntaxTreeSource: Send + Sync {
    fn parse_str(&self, text: &str) -> anyhow::Result<Program>;
    fn load(&self, path: &Path) -> anyhow::Result<Program>;
}

/// Renders flattened row tables for presentation.
pub trait RowExporter: Send + Sync {
    fn render(&self, tables: &[RowTable]) -> String;

    fn export(&self, tables: &[RowTable], path: &str) -> std::io::Result<()> {
        std::fs::write(path, self.render(tables))
    }
}
