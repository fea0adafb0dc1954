use super::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single run of rich text.
///
/// Only `plain_text` and `href` are interpreted; everything else Notion sends
/// (`type`, `text`, `annotations`, ...) is carried through untouched so the
/// run serializes back to the shape it arrived in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextItem {
    #[serde(default)]
    pub plain_text: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl RichTextItem {
    /// Create a plain text run in Notion's `text` shape.
    pub fn plain_text(text: &str) -> Self {
        let mut extra = serde_json::Map::new();
        extra.insert("type".to_string(), serde_json::json!("text"));
        extra.insert(
            "text".to_string(),
            serde_json::json!({ "content": text, "link": null }),
        );
        Self {
            plain_text: text.to_string(),
            href: None,
            extra,
        }
    }
}

/// Select option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub color: Color,
}

impl SelectOption {
    pub fn named(name: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            color: Color::Default,
        }
    }
}

/// Date value with optional end and time zone.
///
/// `start` stays the ISO string Notion sent, which may be a date or a
/// date-time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateValue {
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub time_zone: Option<String>,
}

impl DateValue {
    pub fn on(start: &str) -> Self {
        Self {
            start: start.to_string(),
            end: None,
            time_zone: None,
        }
    }
}

/// User representation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl User {
    pub fn named(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: Some(name.to_string()),
            avatar_url: None,
            extra: serde_json::Map::new(),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "User {}", self.id),
        }
    }
}
