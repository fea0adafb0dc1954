// src/formatting/table/builder.rs
//! Table building logic for Notion databases.

use super::types::*;
use crate::formatting::columns::{derive_columns, Column};
use crate::formatting::properties::display_value;
use crate::model::{Database, PropertyKind, Record};
use crate::types::Color;
use chrono::{DateTime, NaiveDate};

// --- Table Builder ---

/// Builder for constructing tables from a database and its records.
pub struct TableBuilder<'a> {
    database: &'a Database,
    records: &'a [Record],
    max_rows: Option<usize>,
}

impl<'a> TableBuilder<'a> {
    pub fn new(database: &'a Database, records: &'a [Record]) -> Self {
        Self {
            database,
            records,
            max_rows: None,
        }
    }

    /// Sets the maximum number of rows to include.
    pub fn max_rows(mut self, max: usize) -> Self {
        self.max_rows = Some(max);
        self
    }

    /// Builds the table.
    pub fn build(self) -> Table {
        let columns = derive_columns(self.database, self.records);
        let rows = self.build_rows(&columns);

        log::debug!(
            "Built table for '{}' with {} columns and {} rows",
            self.database.display_title(),
            columns.len(),
            rows.len()
        );

        Table { columns, rows }
    }

    fn build_rows(&self, columns: &[Column]) -> Vec<TableRow> {
        let records = match self.max_rows {
            Some(max) => &self.records[..self.records.len().min(max)],
            None => self.records,
        };

        records
            .iter()
            .map(|record| build_row(record, columns))
            .collect()
    }
}

fn build_row(record: &Record, columns: &[Column]) -> TableRow {
    columns.iter().fold(
        TableRow::new(record.id.to_hyphenated()),
        |row, column| row.with_cell(build_cell(record, column)),
    )
}

/// Builds a single cell. The column's kind decides the cell shape, the
/// display string decides its content.
fn build_cell(record: &Record, column: &Column) -> CellValue {
    let value = display_value(record.property(&column.name));
    if value.is_empty() {
        return CellValue::Empty;
    }

    match column.kind {
        PropertyKind::Title => CellValue::Title(value),
        PropertyKind::Select | PropertyKind::MultiSelect => CellValue::Badge {
            color: Color::for_badge(&value),
            label: value,
        },
        PropertyKind::Checkbox => CellValue::Badge {
            color: if value == "Yes" { Color::Green } else { Color::Gray },
            label: value,
        },
        PropertyKind::People => CellValue::Person {
            initials: initials(&value),
            name: value,
        },
        PropertyKind::Url => CellValue::Link(value),
        PropertyKind::Date => CellValue::Date(date_part(&value)),
        _ => CellValue::Text(value),
    }
}

/// Calendar date of a Notion date start, or the raw string if it does not parse.
fn date_part(start: &str) -> String {
    if let Ok(date) = NaiveDate::parse_from_str(start, "%Y-%m-%d") {
        return date.to_string();
    }
    match DateTime::parse_from_rfc3339(start) {
        Ok(datetime) => datetime.date_naive().to_string(),
        Err(_) => start.to_string(),
    }
}
