// src/api/mod.rs
//! Notion API interaction: the ability to read databases from a workspace.
//!
//! I/O lives in `client`, body parsing in `parser`, and a canned workspace
//! for offline use in `mock`. Everything above this module talks to the
//! `NotionRepository` trait only.

pub mod client;
pub mod mock;
pub mod parser;
mod responses;

use crate::error::AppError;
use crate::model::{Database, Record};
use crate::types::NotionId;

/// The ability to read databases and their records from a Notion workspace.
///
/// Business logic depends on this trait, never on HTTP details.
#[async_trait::async_trait]
pub trait NotionRepository: Send + Sync {
    /// Fetches a database's title and property schema.
    async fn retrieve_database(&self, id: &NotionId) -> Result<Database, AppError>;

    /// Fetches the first `page_size` records of a database, in upstream order.
    async fn query_records(&self, id: &NotionId, page_size: usize)
        -> Result<Vec<Record>, AppError>;

    /// IDs of the databases embedded directly under a page, in block order.
    async fn list_child_databases(&self, page: &NotionId) -> Result<Vec<NotionId>, AppError>;
}

// Re-export the public interface
pub use client::{ApiResponse, NotionHttpClient};
pub use mock::MockNotionRepository;
pub use responses::{ChildBlock, NotionErrorBody, PaginatedResponse};
