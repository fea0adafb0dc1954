// src/formatting/mod.rs
//! Turns Notion records into display strings, search results and tables.

pub mod columns;
pub mod filter;
pub mod properties;
pub mod table;

pub use columns::{derive_columns, property_names, Column};
pub use filter::{filter_records, RecordFilter, SearchScope, SEARCH_ALL};
pub use properties::{display_value, format_property_value};
pub use table::{render_records, MarkdownRenderer, Table, TableBuilder};
