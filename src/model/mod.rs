mod property_value;

pub use property_value::{PropertyKind, PropertyTypeValue, PropertyValue};

use crate::types::{NotionId, RichTextItem};
use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A Notion database: its title and declared property schema.
///
/// Fields the viewer does not interpret (`object`, `parent`, `icon`, ...) are
/// kept in `extra` so the object serializes back the way Notion sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Database {
    pub id: NotionId,
    #[serde(default)]
    pub title: Vec<RichTextItem>,
    #[serde(default)]
    pub properties: IndexMap<String, DatabaseProperty>,
    #[serde(
        default,
        serialize_with = "serialize_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(
        default,
        serialize_with = "serialize_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_edited_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Database {
    pub fn new(id: NotionId, title: &str) -> Self {
        Self {
            id,
            title: vec![RichTextItem::plain_text(title)],
            properties: IndexMap::new(),
            created_time: None,
            last_edited_time: None,
            url: None,
            extra: Map::new(),
        }
    }

    /// Appends a property to the declared schema.
    pub fn with_property(mut self, name: &str, kind: PropertyKind) -> Self {
        self.properties
            .insert(name.to_string(), DatabaseProperty::new(name, kind));
        self
    }

    /// Plain text of the first title run, or "Untitled Database".
    pub fn display_title(&self) -> String {
        match self.title.first() {
            Some(run) if !run.plain_text.is_empty() => run.plain_text.clone(),
            _ => "Untitled Database".to_string(),
        }
    }
}

/// Database property definition: a name and a type, no value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseProperty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PropertyKind,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DatabaseProperty {
    pub fn new(name: &str, kind: PropertyKind) -> Self {
        let mut extra = Map::new();
        extra.insert(kind.as_str().to_string(), Value::Object(Map::new()));
        Self {
            id: None,
            name: name.to_string(),
            kind,
            extra,
        }
    }
}

/// A row of a database (a "page" in Notion's terms).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: NotionId,
    #[serde(default)]
    pub properties: IndexMap<String, PropertyValue>,
    #[serde(
        default,
        serialize_with = "serialize_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(
        default,
        serialize_with = "serialize_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_edited_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub archived: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record {
    pub fn new(id: NotionId) -> Self {
        Self {
            id,
            properties: IndexMap::new(),
            created_time: None,
            last_edited_time: None,
            url: None,
            archived: false,
            extra: Map::new(),
        }
    }

    /// Appends a property value, keeping insertion order.
    pub fn with_property(mut self, name: &str, value: PropertyTypeValue) -> Self {
        self.properties
            .insert(name.to_string(), PropertyValue::new(value));
        self
    }

    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }
}

/// Writes timestamps the way Notion does, `2023-10-01T00:00:00.000Z`.
fn serialize_timestamp<S>(time: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match time {
        Some(time) => serializer.serialize_str(&time.to_rfc3339_opts(SecondsFormat::Millis, true)),
        None => serializer.serialize_none(),
    }
}
