// src/formatting/filter.rs
//! Free-text search over database records.

use super::properties::display_value;
use crate::model::Record;
use std::fmt;
use std::str::FromStr;

/// Sentinel scope value that searches every property.
pub const SEARCH_ALL: &str = "all";

/// Which properties a search looks at.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchScope {
    #[default]
    All,
    Property(String),
}

impl FromStr for SearchScope {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == SEARCH_ALL {
            SearchScope::All
        } else {
            SearchScope::Property(s.to_string())
        })
    }
}

impl fmt::Display for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchScope::All => write!(f, "{}", SEARCH_ALL),
            SearchScope::Property(name) => write!(f, "{}", name),
        }
    }
}

/// A case-insensitive search term plus its scope.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordFilter {
    term: String,
    scope: SearchScope,
}

impl RecordFilter {
    pub fn new(term: impl Into<String>, scope: SearchScope) -> Self {
        Self {
            term: term.into().to_lowercase(),
            scope,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }

    pub fn scope(&self) -> &SearchScope {
        &self.scope
    }

    /// Whether a record's scoped display strings contain the term.
    ///
    /// A scoped property the record does not have never matches.
    pub fn matches(&self, record: &Record) -> bool {
        if self.term.is_empty() {
            return true;
        }

        match &self.scope {
            SearchScope::All => record
                .properties
                .values()
                .any(|value| self.contains_term(&display_value(Some(value)))),
            SearchScope::Property(name) => record
                .property(name)
                .is_some_and(|value| self.contains_term(&display_value(Some(value)))),
        }
    }

    fn contains_term(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.term)
    }
}

/// Returns the records the filter matches, in their original order.
pub fn filter_records(records: &[Record], filter: &RecordFilter) -> Vec<Record> {
    if filter.is_empty() {
        return records.to_vec();
    }

    let matched: Vec<Record> = records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect();

    log::debug!(
        "Search '{}' in {} matched {} of {} record(s)",
        filter.term,
        filter.scope,
        matched.len(),
        records.len()
    );
    matched
}
