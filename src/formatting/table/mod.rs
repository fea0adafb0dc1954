// src/formatting/table/mod.rs
//! Type-safe table construction for Notion databases.
//!
//! Structure (`types`), construction (`builder`) and output (`render`) are
//! kept apart so the same `Table` can feed any renderer.

mod builder;
mod render;
mod types;

pub use builder::TableBuilder;
pub use render::{
    escape_for_table, MarkdownRenderer, RenderConfig, TableRenderer, NO_RECORDS_MESSAGE,
};
pub use types::{initials, kind_icon, CellValue, ColumnAlignment, Table, TableRow};

use crate::model::{Database, Record};

/// Builds and renders a database's records as a Markdown table.
pub fn render_records(database: &Database, records: &[Record], config: RenderConfig) -> String {
    let table = TableBuilder::new(database, records).build();
    MarkdownRenderer::with_config(config).render(&table)
}
