use std::path::PathBuf;

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::domain::ast::Program;
use crate::domain::flatten::{unsupported_lines, FlattenOptions};
use crate::domain::row::RowTable;
use crate::ports::{RowExporter, SyntaxTreeSource};

pub struct FlattenUsecase<'a> {
    pub source: &'a dyn SyntaxTreeSource,
    pub exporter: &'a dyn RowExporter,
    pub options: FlattenOptions,
}

impl<'a> FlattenUsecase<'a> {
    /// Flatten one already-loaded program under the configured options.
    pub fn flatten_program(&self, label: &str, program: &Program) -> Result<RowTable> {
        let skipped = unsupported_lines(&program.body);
        if !skipped.is_empty() && !self.options.strict {
            tracing::warn!(source = label, lines = ?skipped, "skipped unsupported syntax nodes");
        }

        let rows = self
            .options
            .flatten(&program.body)
            .with_context(|| format!("Failed to flatten {}", label))?;
        tracing::debug!(source = label, rows = rows.len(), "flattened tree");

        Ok(RowTable {
            source: label.to_string(),
            rows,
        })
    }

    /// Load and flatten every input in parallel; tables come back in input order.
    pub fn flatten_files(&self, inputs: &[PathBuf]) -> Result<Vec<RowTable>> {
        inputs
            .par_iter()
            .map(|path| {
                let label = path.display().to_string();
                let program = self.source.load(path)?;
                self.flatten_program(&label, &program)
            })
            .collect()
    }

    /// Flatten the inputs and write the rendered tables to `export_path`,
    /// or return the rendering when no path is given.
    pub fn run(&self, inputs: &[PathBuf], export_path: Option<&str>) -> Result<String> {
        let tables = self.flatten_files(inputs)?;
        let rendered = self.exporter.render(&tables);

        if let Some(path) = export_path {
            self.exporter
                .export(&tables, path)
                .with_context(|| format!("Failed to write {}", path))?;
            tracing::info!(path, tables = tables.len(), "wrote row tables");
        }

        Ok(rendered)
    }
}
