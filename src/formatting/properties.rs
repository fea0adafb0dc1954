// src/formatting/properties.rs
//! Display strings for Notion property values.
//!
//! This is the one place that knows how each property type reads as text.
//! Table cells and search matching both go through `display_value`, so what
//! a user sees is exactly what they can search for.

use crate::model::{PropertyTypeValue, PropertyValue};
use crate::types::{RichTextItem, SelectOption, User};

/// Renders a property value to its display string.
///
/// Total: an absent property, an empty payload, or an unrecognized type all
/// yield `""`.
pub fn display_value(value: Option<&PropertyValue>) -> String {
    match value {
        None => String::new(),
        Some(pv) => format_property_value(&pv.type_specific_value),
    }
}

/// Formats a property payload directly.
pub fn format_property_value(value: &PropertyTypeValue) -> String {
    use PropertyTypeValue::*;

    match value {
        Title(items) | RichText(items) => first_run_text(items),
        Select(option) => option
            .as_ref()
            .map_or_else(String::new, |opt| opt.name.clone()),
        MultiSelect(options) => join_option_names(options),
        Date(date) => date
            .as_ref()
            .map_or_else(String::new, |d| d.start.clone()),
        Number(number) => number.map_or_else(String::new, format_number),
        Checkbox(checked) => if *checked { "Yes" } else { "No" }.to_string(),
        Url(s) | Email(s) | PhoneNumber(s) => s.clone().unwrap_or_default(),
        People(people) => join_people(people),
        Unknown { .. } => String::new(),
    }
}

// --- Helper Functions ---

fn first_run_text(items: &[RichTextItem]) -> String {
    items
        .first()
        .map_or_else(String::new, |item| item.plain_text.clone())
}

fn join_option_names(options: &[SelectOption]) -> String {
    options
        .iter()
        .map(|opt| opt.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Joins the names of people, skipping anyone Notion sent without one.
fn join_people(people: &[User]) -> String {
    people
        .iter()
        .filter_map(|p| p.name.as_deref())
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Formats a number the shortest way that round-trips: integers print
/// without a fractional part.
fn format_number(n: f64) -> String {
    if n == 0.0 {
        // also folds -0 into "0"
        "0".to_string()
    } else {
        n.to_string()
    }
}
