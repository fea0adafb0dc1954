// src/formatting/table/render.rs
//! Markdown rendering for tables.

use super::types::*;
use crate::formatting::columns::Column;
use std::fmt::Write;

/// Shown instead of a table when there is nothing to list.
pub const NO_RECORDS_MESSAGE: &str = "*No records found.*";

/// Trait for rendering tables to different formats.
pub trait TableRenderer {
    fn render(&self, table: &Table) -> String;
}

/// Markdown table renderer.
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer {
    config: RenderConfig,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }
}

impl TableRenderer for MarkdownRenderer {
    fn render(&self, table: &Table) -> String {
        if table.is_empty() {
            return format!("{}\n", NO_RECORDS_MESSAGE);
        }

        let mut output = String::new();
        self.render_header(&mut output, &table.columns);
        self.render_separator(&mut output, &table.columns);
        for row in &table.rows {
            self.render_row(&mut output, row);
        }
        output
    }
}

impl MarkdownRenderer {
    fn render_header(&self, output: &mut String, columns: &[Column]) {
        let _ = write!(output, "|");
        for col in columns {
            let name = escape_for_table(&col.name);
            if self.config.show_kind_icons {
                let _ = write!(output, " {} {} |", kind_icon(&col.kind), name);
            } else {
                let _ = write!(output, " {} |", name);
            }
        }
        let _ = writeln!(output);
    }

    fn render_separator(&self, output: &mut String, columns: &[Column]) {
        let _ = write!(output, "|");
        for col in columns {
            let alignment = ColumnAlignment::for_kind(&col.kind);
            let _ = write!(output, " {} |", alignment.to_markdown());
        }
        let _ = writeln!(output);
    }

    fn render_row(&self, output: &mut String, row: &TableRow) {
        let _ = write!(output, "|");
        for cell in &row.cells {
            let _ = write!(output, " {} |", self.render_cell(cell));
        }
        let _ = writeln!(output);
    }

    fn render_cell(&self, cell: &CellValue) -> String {
        match cell {
            CellValue::Title(text) => format!("**{}**", escape_for_table(text)),
            CellValue::Badge { label, color } if self.config.show_badge_colors => {
                format!("`{}` ({})", escape_for_table(label), color)
            }
            CellValue::Badge { label, .. } => format!("`{}`", escape_for_table(label)),
            CellValue::Person { name, initials } => {
                format!("({}) {}", initials, escape_for_table(name))
            }
            CellValue::Link(url) => {
                let url = escape_for_table(url);
                format!("[{}]({})", url, url)
            }
            CellValue::Date(text) | CellValue::Text(text) => escape_for_table(text),
            CellValue::Empty => self.config.empty_cell_text.clone(),
        }
    }
}

/// Configuration for table rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Text to use for empty cells.
    pub empty_cell_text: String,
    /// Prefix column names with a glyph for their property kind.
    pub show_kind_icons: bool,
    /// Append the palette color name to badges.
    pub show_badge_colors: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            empty_cell_text: "-".to_string(),
            show_kind_icons: false,
            show_badge_colors: false,
        }
    }
}

/// Escapes text for use in a Markdown table cell.
pub fn escape_for_table(text: &str) -> String {
    text.replace('|', "\\|")
        .replace('\n', "<br>")
        .replace('\r', "")
}

impl Table {
    /// Renders the table to Markdown using default settings.
    pub fn render_markdown(&self) -> String {
        MarkdownRenderer::new().render(self)
    }
}
