// src/formatting/columns.rs
//! Column derivation for a database table.

use crate::model::{Database, PropertyKind, Record};

/// One table column: a property name and the kind used to render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub kind: PropertyKind,
}

impl Column {
    pub fn new(name: &str, kind: PropertyKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
        }
    }
}

/// Generic kind for a record property that arrived without a `type` tag.
fn fallback_kind() -> PropertyKind {
    PropertyKind::Unknown("text".to_string())
}

/// Derives the ordered column list for a database.
///
/// The declared schema wins when it has entries. Otherwise the first
/// record's keys are used in their original order. With neither, the list is
/// empty and callers must show a "no records" state.
pub fn derive_columns(database: &Database, records: &[Record]) -> Vec<Column> {
    if !database.properties.is_empty() {
        return database
            .properties
            .iter()
            .map(|(name, schema)| Column::new(name, schema.kind.clone()))
            .collect();
    }

    let Some(first) = records.first() else {
        log::debug!(
            "Database '{}' declares no properties and has no records",
            database.display_title()
        );
        return Vec::new();
    };

    log::debug!(
        "Database '{}' declares no properties, deriving {} column(s) from record {}",
        database.display_title(),
        first.properties.len(),
        first.id
    );

    first
        .properties
        .iter()
        .map(|(name, value)| {
            let kind = match value.kind() {
                PropertyKind::Unknown(tag) if tag.is_empty() => fallback_kind(),
                kind => kind,
            };
            Column::new(name, kind)
        })
        .collect()
}

/// Column names only, in column order.
pub fn property_names(database: &Database, records: &[Record]) -> Vec<String> {
    derive_columns(database, records)
        .into_iter()
        .map(|column| column.name)
        .collect()
}
