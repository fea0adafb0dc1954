// src/formatting/table/types.rs
//! Type definitions for table structures.
//!
//! A `Table` is pure data. Building it and rendering it live in sibling
//! modules.

use crate::formatting::columns::Column;
use crate::model::PropertyKind;
use crate::types::Color;

// --- Table Structure ---

/// A database laid out as columns and rows of typed cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Checks if there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() || self.rows.is_empty()
    }
}

/// Column alignment options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnAlignment {
    Left,
    Center,
    Right,
}

impl ColumnAlignment {
    /// Determines column alignment based on property kind.
    pub fn for_kind(kind: &PropertyKind) -> Self {
        match kind {
            PropertyKind::Number => ColumnAlignment::Right,
            PropertyKind::Date | PropertyKind::Checkbox => ColumnAlignment::Center,
            _ => ColumnAlignment::Left,
        }
    }

    /// Converts to Markdown alignment syntax.
    pub fn to_markdown(self) -> &'static str {
        match self {
            ColumnAlignment::Left => "---",
            ColumnAlignment::Center => ":---:",
            ColumnAlignment::Right => "---:",
        }
    }
}

/// Short glyph shown next to a column name.
pub fn kind_icon(kind: &PropertyKind) -> &'static str {
    match kind {
        PropertyKind::Title | PropertyKind::RichText => "T",
        PropertyKind::Number => "#",
        PropertyKind::Select | PropertyKind::MultiSelect => "◆",
        PropertyKind::Date => "📅",
        PropertyKind::Checkbox => "☑",
        PropertyKind::People => "👤",
        PropertyKind::Url => "🔗",
        PropertyKind::Email => "✉",
        PropertyKind::PhoneNumber => "☎",
        PropertyKind::Unknown(_) => "○",
    }
}

/// A single row, tied back to the record it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub record_id: String,
    pub cells: Vec<CellValue>,
}

impl TableRow {
    pub fn new(record_id: String) -> Self {
        Self {
            record_id,
            cells: Vec::new(),
        }
    }

    /// Adds a cell to the row.
    pub fn with_cell(mut self, cell: CellValue) -> Self {
        self.cells.push(cell);
        self
    }
}

/// Type-safe representation of cell values.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Title(String),
    Badge { label: String, color: Color },
    Person { name: String, initials: String },
    Link(String),
    Date(String),
    Text(String),
    Empty,
}

/// Up to two uppercase initials, one per space-separated word.
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}
