//! Text Table Exporter
//!
//! Renders row tables as fixed-width text with the columns
//! Line | Type | Name | Condition | Value.

use crate::domain::row::{Row, RowTable};
use crate::ports::RowExporter;

const HEADERS: [&str; 5] = ["Line", "Type", "Name", "Condition", "Value"];

pub struct TableExporter;

impl TableExporter {
    /// Convert one table to text, preceded by its source label.
    pub fn to_table(table: &RowTable) -> String {
        let cells: Vec<[String; 5]> = table.rows.iter().map(Self::cells).collect();

        let mut widths = HEADERS.map(str::len);
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut lines = Vec::new();
        lines.push(format!("== {}", table.source));
        lines.push(Self::format_line(&HEADERS.map(str::to_string), &widths));
        lines.push(
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("-+-"),
        );
        for row in &cells {
            lines.push(Self::format_line(row, &widths));
        }
        if cells.is_empty() {
            lines.push("(no rows)".to_string());
        }

        lines.join("\n")
    }

    fn cells(row: &Row) -> [String; 5] {
        [
            row.line.to_string(),
            row.row_type.label().to_string(),
            Self::escape_cell(&row.name),
            Self::escape_cell(&row.condition),
            Self::escape_cell(&row.value),
        ]
    }

    fn format_line(cells: &[String; 5], widths: &[usize; 5]) -> String {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end_matches([' ', '|'])
            .to_string()
    }

    fn escape_cell(cell: &str) -> String {
        cell.replace('\\', "\\\\").replace('\n', "\\n")
    }
}

impl RowExporter for TableExporter {
    fn render(&self, tables: &[RowTable]) -> String {
        let mut out = tables
            .iter()
            .map(Self::to_table)
            .collect::<Vec<_>>()
            .join("\n\n");
        out.push('\n');
        out
    }
}
