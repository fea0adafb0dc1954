// src/server/handlers.rs
use super::{AppState, ServerError};
use crate::error::AppError;
use crate::gateway::{self, DatabaseSnapshot};
use crate::model::Database;
use crate::types::NotionId;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

const INVALID_DATABASE_ID: &str = "Invalid database ID format";
const PAGE_URL_REQUIRED: &str = "Page URL is required";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractIdRequest {
    #[serde(default)]
    pub page_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExtractIdResponse {
    pub database_id: String,
}

pub async fn get_database(
    State(state): State<AppState>,
    Path(database_id): Path<String>,
) -> Result<Json<DatabaseSnapshot>, ServerError> {
    let id = NotionId::parse(&database_id)
        .map_err(|_| AppError::InvalidInput(INVALID_DATABASE_ID.to_string()))?;

    Ok(Json(state.gateway.retrieve_database(&id).await?))
}

pub async fn list_databases(
    State(state): State<AppState>,
) -> Result<Json<Vec<Database>>, ServerError> {
    Ok(Json(state.gateway.list_databases().await?))
}

/// A body that is not JSON counts as a missing URL.
pub async fn extract_database_id(
    payload: Result<Json<ExtractIdRequest>, JsonRejection>,
) -> Result<Json<ExtractIdResponse>, ServerError> {
    let page_url = payload
        .ok()
        .and_then(|Json(request)| request.page_url)
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| AppError::InvalidInput(PAGE_URL_REQUIRED.to_string()))?;

    let database_id = gateway::extract_database_id(&page_url)?;
    Ok(Json(ExtractIdResponse { database_id }))
}
