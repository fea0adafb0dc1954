use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Colors Notion assigns to select and multi-select options.
///
/// Unrecognized color names deserialize to `Default` rather than failing the
/// whole record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Default,
    Gray,
    Brown,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    Red,
}

impl Color {
    /// Palette cycled through when badging select values, in lookup order.
    pub const BADGE_PALETTE: [Color; 9] = [
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Red,
        Color::Purple,
        Color::Pink,
        Color::Brown,
        Color::Orange,
        Color::Gray,
    ];

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Default => "default",
            Color::Gray => "gray",
            Color::Brown => "brown",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Purple => "purple",
            Color::Pink => "pink",
            Color::Red => "red",
        }
    }

    /// Picks a stable palette color for a badge label.
    ///
    /// The index is the sum of the label's UTF-16 code units modulo the
    /// palette size, so the same label always gets the same color.
    pub fn for_badge(label: &str) -> Color {
        let hash: u64 = label.encode_utf16().map(u64::from).sum();
        Self::BADGE_PALETTE[(hash % Self::BADGE_PALETTE.len() as u64) as usize]
    }
}

impl std::str::FromStr for Color {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Color::Default),
            "gray" => Ok(Color::Gray),
            "brown" => Ok(Color::Brown),
            "orange" => Ok(Color::Orange),
            "yellow" => Ok(Color::Yellow),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            "purple" => Ok(Color::Purple),
            "pink" => Ok(Color::Pink),
            "red" => Ok(Color::Red),
            _ => Err(ValidationError::InvalidColor(s.to_string())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(name.parse().unwrap_or_else(|_| {
            log::debug!("Unrecognized option color '{}', using default", name);
            Color::Default
        }))
    }
}
