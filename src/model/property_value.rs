use crate::types::{DateValue, RichTextItem, SelectOption, User};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// The `type` discriminator of a Notion property.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    Title,
    RichText,
    Select,
    MultiSelect,
    Date,
    Number,
    Checkbox,
    Url,
    Email,
    PhoneNumber,
    People,
    /// Any tag this viewer does not interpret, kept verbatim.
    Unknown(String),
}

impl PropertyKind {
    pub fn from_type_name(name: &str) -> Self {
        match name {
            "title" => Self::Title,
            "rich_text" => Self::RichText,
            "select" => Self::Select,
            "multi_select" => Self::MultiSelect,
            "date" => Self::Date,
            "number" => Self::Number,
            "checkbox" => Self::Checkbox,
            "url" => Self::Url,
            "email" => Self::Email,
            "phone_number" => Self::PhoneNumber,
            "people" => Self::People,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Returns the Notion API type name.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Title => "title",
            Self::RichText => "rich_text",
            Self::Select => "select",
            Self::MultiSelect => "multi_select",
            Self::Date => "date",
            Self::Number => "number",
            Self::Checkbox => "checkbox",
            Self::Url => "url",
            Self::Email => "email",
            Self::PhoneNumber => "phone_number",
            Self::People => "people",
            Self::Unknown(name) => name,
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for PropertyKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PropertyKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_type_name(&name))
    }
}

/// Property value: a typed payload plus the property's ID.
///
/// Serializes to and from Notion's wire shape,
/// `{"id": "...", "type": "<kind>", "<kind>": <payload>}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<RawProperty>", into = "RawProperty")]
pub struct PropertyValue {
    pub id: Option<String>,
    pub type_specific_value: PropertyTypeValue,
}

impl PropertyValue {
    pub fn new(type_specific_value: PropertyTypeValue) -> Self {
        Self {
            id: None,
            type_specific_value,
        }
    }

    pub fn kind(&self) -> PropertyKind {
        self.type_specific_value.kind()
    }
}

/// The payload of a property, one variant per recognized type.
///
/// Absent or `null` payloads are the empty value of their variant.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyTypeValue {
    Title(Vec<RichTextItem>),
    RichText(Vec<RichTextItem>),
    Select(Option<SelectOption>),
    MultiSelect(Vec<SelectOption>),
    Date(Option<DateValue>),
    Number(Option<f64>),
    Checkbox(bool),
    Url(Option<String>),
    Email(Option<String>),
    PhoneNumber(Option<String>),
    People(Vec<User>),
    Unknown {
        type_name: String,
        payload: Map<String, Value>,
    },
}

impl PropertyTypeValue {
    pub fn kind(&self) -> PropertyKind {
        match self {
            Self::Title(_) => PropertyKind::Title,
            Self::RichText(_) => PropertyKind::RichText,
            Self::Select(_) => PropertyKind::Select,
            Self::MultiSelect(_) => PropertyKind::MultiSelect,
            Self::Date(_) => PropertyKind::Date,
            Self::Number(_) => PropertyKind::Number,
            Self::Checkbox(_) => PropertyKind::Checkbox,
            Self::Url(_) => PropertyKind::Url,
            Self::Email(_) => PropertyKind::Email,
            Self::PhoneNumber(_) => PropertyKind::PhoneNumber,
            Self::People(_) => PropertyKind::People,
            Self::Unknown { type_name, .. } => PropertyKind::Unknown(type_name.clone()),
        }
    }

    /// Builds the typed payload for `kind` from the JSON found under its key.
    fn from_payload(kind: PropertyKind, payload: Value, rest: Map<String, Value>) -> Self {
        let name = kind.as_str().to_string();
        match kind {
            PropertyKind::Title => Self::Title(lenient(&name, payload)),
            PropertyKind::RichText => Self::RichText(lenient(&name, payload)),
            PropertyKind::Select => Self::Select(lenient(&name, payload)),
            PropertyKind::MultiSelect => Self::MultiSelect(lenient(&name, payload)),
            PropertyKind::Date => Self::Date(lenient(&name, payload)),
            PropertyKind::Number => Self::Number(lenient(&name, payload)),
            PropertyKind::Checkbox => Self::Checkbox(lenient(&name, payload)),
            PropertyKind::Url => Self::Url(lenient(&name, payload)),
            PropertyKind::Email => Self::Email(lenient(&name, payload)),
            PropertyKind::PhoneNumber => Self::PhoneNumber(lenient(&name, payload)),
            PropertyKind::People => Self::People(lenient(&name, payload)),
            PropertyKind::Unknown(type_name) => {
                let mut payload_map = rest;
                if !payload.is_null() {
                    payload_map.insert(type_name.clone(), payload);
                }
                Self::Unknown {
                    type_name,
                    payload: payload_map,
                }
            }
        }
    }

    fn payload_json(&self) -> Value {
        match self {
            Self::Title(items) | Self::RichText(items) => to_json(items),
            Self::Select(option) => to_json(option),
            Self::MultiSelect(options) => to_json(options),
            Self::Date(date) => to_json(date),
            Self::Number(number) => to_json(number),
            Self::Checkbox(checked) => Value::Bool(*checked),
            Self::Url(s) | Self::Email(s) | Self::PhoneNumber(s) => to_json(s),
            Self::People(people) => to_json(people),
            Self::Unknown { .. } => Value::Null,
        }
    }
}

/// Decodes a payload, degrading `null` or a malformed shape to the empty value.
fn lenient<T: DeserializeOwned + Default>(type_name: &str, payload: Value) -> T {
    if payload.is_null() {
        return T::default();
    }
    serde_json::from_value(payload).unwrap_or_else(|e| {
        log::warn!(
            "Malformed '{}' property payload, treating it as empty: {}",
            type_name,
            e
        );
        T::default()
    })
}

fn to_json<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

/// Wire shape of a property value.
#[derive(Serialize, Deserialize)]
struct RawProperty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    type_name: Option<String>,
    #[serde(flatten)]
    payload: Map<String, Value>,
}

impl From<RawProperty> for PropertyValue {
    fn from(raw: RawProperty) -> Self {
        let RawProperty {
            id,
            type_name,
            mut payload,
        } = raw;
        let kind = PropertyKind::from_type_name(type_name.as_deref().unwrap_or_default());
        let value = payload.remove(kind.as_str()).unwrap_or(Value::Null);
        Self {
            id,
            type_specific_value: PropertyTypeValue::from_payload(kind, value, payload),
        }
    }
}

/// A `null` property value is an untyped property with nothing in it.
impl From<Option<RawProperty>> for PropertyValue {
    fn from(raw: Option<RawProperty>) -> Self {
        match raw {
            Some(raw) => raw.into(),
            None => Self::new(PropertyTypeValue::Unknown {
                type_name: String::new(),
                payload: Map::new(),
            }),
        }
    }
}

impl From<PropertyValue> for RawProperty {
    fn from(value: PropertyValue) -> Self {
        let kind = value.kind();
        let payload = match value.type_specific_value {
            PropertyTypeValue::Unknown { payload, .. } => payload,
            ref known => {
                let mut map = Map::new();
                map.insert(kind.as_str().to_string(), known.payload_json());
                map
            }
        };
        let type_name = match kind.as_str() {
            "" => None,
            name => Some(name.to_string()),
        };
        Self {
            id: value.id,
            type_name,
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> PropertyValue {
        serde_json::from_str(json).expect("property should deserialize")
    }

    #[test]
    fn test_select_with_null_payload() {
        let prop = parse(r#"{"id": "a", "type": "select", "select": null}"#);
        assert_eq!(prop.type_specific_value, PropertyTypeValue::Select(None));
    }

    #[test]
    fn test_missing_payload_is_empty() {
        let prop = parse(r#"{"type": "multi_select"}"#);
        assert_eq!(prop.type_specific_value, PropertyTypeValue::MultiSelect(vec![]));

        let prop = parse(r#"{"type": "checkbox"}"#);
        assert_eq!(prop.type_specific_value, PropertyTypeValue::Checkbox(false));
    }

    #[test]
    fn test_null_property_is_untyped() {
        let prop = parse("null");
        assert_eq!(prop.kind(), PropertyKind::Unknown(String::new()));
        assert_eq!(serde_json::to_value(&prop).unwrap(), serde_json::json!({}));
    }

    #[test]
    fn test_malformed_payload_degrades() {
        let prop = parse(r#"{"type": "number", "number": "twelve"}"#);
        assert_eq!(prop.type_specific_value, PropertyTypeValue::Number(None));
    }

    #[test]
    fn test_unknown_type_round_trips() {
        let json = r#"{"id":"x","type":"status","status":{"name":"Done","color":"green"}}"#;
        let prop = parse(json);
        assert_eq!(prop.kind(), PropertyKind::Unknown("status".to_string()));

        let back = serde_json::to_value(&prop).unwrap();
        assert_eq!(back["type"], "status");
        assert_eq!(back["status"]["name"], "Done");
    }

    #[test]
    fn test_known_type_serializes_in_wire_shape() {
        let prop = PropertyValue::new(PropertyTypeValue::Number(Some(1200.0)));
        let back = serde_json::to_value(&prop).unwrap();
        assert_eq!(back, serde_json::json!({"type": "number", "number": 1200.0}));
    }
}
