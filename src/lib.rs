// src/lib.rs
//! notion-viewer library: reads a Notion database and serves it as JSON or
//! renders it as a searchable table.
//!
//! # Public API
//!
//! - **Error handling**: `AppError`, `NotionErrorCode`, `ValidationError`
//! - **Configuration**: `CommandLineInput`, `ViewerConfig`, `NotionConfig`
//! - **Domain model**: `Database`, `Record`, `PropertyValue`, `PropertyTypeValue`
//! - **Domain types**: `NotionId`, `ApiKey`, `Color`, `RichTextItem`, ...
//! - **API client**: `NotionRepository`, `NotionHttpClient`, `MockNotionRepository`
//! - **Operations**: `NotionGateway`, `extract_database_id`
//! - **Formatting**: `display_value`, `derive_columns`, `filter_records`, `TableBuilder`
//! - **Surfaces**: `server::router`, `Viewer`

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod gateway;
pub mod model;
pub mod server;
pub mod types;
pub mod viewer;

// --- Error Handling ---
pub use crate::error::{AppError, NotionErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{Backend, CommandLineInput, NotionConfig, ViewerConfig};

// --- Domain Model ---
pub use crate::model::{
    Database, DatabaseProperty, PropertyKind, PropertyTypeValue, PropertyValue, Record,
};

// --- Domain Types ---
pub use crate::types::{
    ApiKey, Color, DateValue, NotionId, RichTextItem, SelectOption, User, ValidatedUrl,
};

// --- API Client ---
pub use crate::api::{MockNotionRepository, NotionHttpClient, NotionRepository};

// --- Operations ---
pub use crate::gateway::{extract_database_id, DatabaseSnapshot, NotionGateway};

// --- Formatting ---
pub use crate::formatting::{
    derive_columns, display_value, filter_records, format_property_value,
    property_names, Column, MarkdownRenderer, RecordFilter, SearchScope, Table, TableBuilder,
};

// --- Surfaces ---
pub use crate::server::AppState;
pub use crate::viewer::{render_snapshot, Viewer};

use std::sync::Arc;

/// Builds the repository the resolved backend calls for.
pub fn build_repository(config: &ViewerConfig) -> Result<Arc<dyn NotionRepository>, AppError> {
    let repository: Arc<dyn NotionRepository> = match &config.backend {
        Backend::Notion(notion) => Arc::new(NotionHttpClient::new(notion)?),
        Backend::Mock => Arc::new(MockNotionRepository::new()),
    };
    Ok(repository)
}

/// Wires a gateway from resolved configuration.
pub fn build_gateway(config: &ViewerConfig) -> Result<NotionGateway, AppError> {
    Ok(NotionGateway::new(
        build_repository(config)?,
        config.root_page.clone(),
    ))
}
