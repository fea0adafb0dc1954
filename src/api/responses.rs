// src/api/responses.rs
//! Wire shapes of Notion API envelopes.

use crate::types::NotionId;
use serde::{Deserialize, Serialize};

/// Generic paginated response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    #[serde(default)]
    pub object: String,
    pub results: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

/// The part of a child block the database listing needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChildBlock {
    pub id: NotionId,
    #[serde(rename = "type")]
    pub block_type: String,
}

impl ChildBlock {
    pub fn is_child_database(&self) -> bool {
        self.block_type == "child_database"
    }
}

/// Error body Notion returns on any non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotionErrorBody {
    #[serde(default)]
    pub object: String,
    pub status: u16,
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub request_id: Option<String>,
}
