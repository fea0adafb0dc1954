// src/gateway.rs
//! The operations the HTTP surface and the CLI viewer expose.
//!
//! `NotionGateway` owns no I/O of its own. It composes calls on an injected
//! `NotionRepository` and stamps the results.

use crate::api::NotionRepository;
use crate::constants::{ENV_ROOT_PAGE_URL, NOTION_API_PAGE_SIZE};
use crate::error::AppError;
use crate::model::{Database, Record};
use crate::types::NotionId;
use chrono::{SecondsFormat, Utc};
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Message returned when a URL carries no recognizable database ID.
pub const INVALID_URL_MESSAGE: &str = "Invalid Notion URL format";

/// A database with one page of its records, as served to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseSnapshot {
    pub database: Database,
    pub records: Vec<Record>,
    pub record_count: usize,
    /// Server time the snapshot was taken, RFC 3339 with milliseconds.
    pub last_updated: String,
}

#[derive(Clone)]
pub struct NotionGateway {
    repository: Arc<dyn NotionRepository>,
    root_page: Option<NotionId>,
}

impl NotionGateway {
    pub fn new(repository: Arc<dyn NotionRepository>, root_page: Option<NotionId>) -> Self {
        Self {
            repository,
            root_page,
        }
    }

    /// Fetches a database's schema and first page of records concurrently.
    ///
    /// Fails as a whole if either call fails.
    pub async fn retrieve_database(&self, id: &NotionId) -> Result<DatabaseSnapshot, AppError> {
        log::info!("Retrieving database {}", id);

        let (database, records) = futures::try_join!(
            self.repository.retrieve_database(id),
            self.repository.query_records(id, NOTION_API_PAGE_SIZE),
        )?;

        Ok(DatabaseSnapshot {
            record_count: records.len(),
            database,
            records,
            last_updated: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }

    /// Retrieves every database embedded directly under the root page.
    pub async fn list_databases(&self) -> Result<Vec<Database>, AppError> {
        let root = self.root_page.as_ref().ok_or_else(|| {
            AppError::MissingConfiguration(format!(
                "{} is not set; no page to list databases from",
                ENV_ROOT_PAGE_URL
            ))
        })?;

        let ids = self.repository.list_child_databases(root).await?;
        log::info!("Root page {} has {} child database(s)", root, ids.len());

        try_join_all(ids.iter().map(|id| self.repository.retrieve_database(id))).await
    }
}

/// Finds the database ID in a Notion URL and returns it hyphenated.
pub fn extract_database_id(url: &str) -> Result<String, AppError> {
    NotionId::parse(url)
        .map(|id| id.to_hyphenated())
        .map_err(|e| {
            log::debug!("No database ID in '{}': {}", url, e);
            AppError::InvalidInput(INVALID_URL_MESSAGE.to_string())
        })
}
