// src/api/client.rs
//! Thin HTTP client wrapper for the Notion API.
//!
//! Handles authentication and request plumbing. Parsing lives in
//! `super::parser`.

use crate::config::NotionConfig;
use crate::constants::{NOTION_API_PAGE_SIZE, NOTION_VERSION};
use crate::error::AppError;
use crate::model::{Database, Record};
use crate::types::{ApiKey, NotionId};
use reqwest::{header, Client, Response};
use serde::Serialize;

/// A thin wrapper around reqwest Client for Notion API requests.
#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
    base_url: String,
}

impl NotionHttpClient {
    /// Creates a new HTTP client with Notion API authentication.
    pub fn new(config: &NotionConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(&config.api_key)?)
            .build()?;
        log::debug!(
            "Notion client ready for {} with key {}",
            config.base_url.as_base(),
            config.api_key
        );
        Ok(Self {
            client,
            base_url: config.base_url.as_base().to_string(),
        })
    }

    /// Creates the default headers for Notion API requests.
    fn create_headers(api_key: &ApiKey) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let mut auth = header::HeaderValue::from_str(&format!("Bearer {}", api_key.as_str()))
            .map_err(|_| {
                AppError::MissingConfiguration(
                    "Integration secret contains characters not allowed in a header".to_string(),
                )
            })?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);

        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_static(NOTION_VERSION),
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    /// Body of a database query for the first `page_size` records.
    fn query_body(page_size: usize) -> serde_json::Value {
        serde_json::json!({ "page_size": page_size })
    }

    /// Makes a GET request to `endpoint` (a path relative to the base URL).
    pub async fn get(&self, endpoint: &str) -> Result<Response, AppError> {
        let url = self.endpoint_url(endpoint);
        log::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;

        log::debug!("GET {} -> {}", endpoint, response.status());
        Ok(response)
    }

    /// Makes a POST request with a JSON body.
    pub async fn post<T: Serialize>(&self, endpoint: &str, body: &T) -> Result<Response, AppError> {
        let url = self.endpoint_url(endpoint);

        if log::log_enabled!(log::Level::Debug) {
            log::debug!(
                "POST {} body: {}",
                url,
                serde_json::to_string(body).unwrap_or_else(|_| "<unserializable>".to_string())
            );
        }

        let response = self.client.post(&url).json(body).send().await?;

        log::debug!("POST {} -> {}", endpoint, response.status());
        Ok(response)
    }
}

#[async_trait::async_trait]
impl super::NotionRepository for NotionHttpClient {
    async fn retrieve_database(&self, id: &NotionId) -> Result<Database, AppError> {
        let endpoint = format!("databases/{}", id.to_hyphenated());
        let response = self.get(&endpoint).await?;
        let result = extract_response_text(response).await?;
        super::parser::parse_database_response(result)
    }

    async fn query_records(
        &self,
        id: &NotionId,
        page_size: usize,
    ) -> Result<Vec<Record>, AppError> {
        let endpoint = format!("databases/{}/query", id.to_hyphenated());
        let response = self.post(&endpoint, &Self::query_body(page_size)).await?;
        let result = extract_response_text(response).await?;
        let records = super::parser::parse_query_response(result)?;

        log::info!("Fetched {} record(s) from database {}", records.len(), id);
        Ok(records)
    }

    async fn list_child_databases(&self, page: &NotionId) -> Result<Vec<NotionId>, AppError> {
        let endpoint = format!(
            "blocks/{}/children?page_size={}",
            page.to_hyphenated(),
            NOTION_API_PAGE_SIZE
        );
        let response = self.get(&endpoint).await?;
        let result = extract_response_text(response).await?;
        super::parser::parse_child_database_ids(result)
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text along with its status and URL.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
