// src/api/parser.rs
//! Turns raw Notion API responses into domain values or typed errors.

use super::client::ApiResponse;
use super::responses::{ChildBlock, NotionErrorBody, PaginatedResponse};
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, NotionErrorCode};
use crate::model::{Database, Record};
use crate::types::NotionId;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// Parses any Notion API response: the body on success, a typed error otherwise.
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: DeserializeOwned,
{
    if result.status.is_success() {
        parse_success(&result.data, &result.url)
    } else {
        Err(parse_error(&result.data, result.status, &result.url))
    }
}

fn parse_success<T>(body: &str, url: &str) -> Result<T, AppError>
where
    T: DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);
        AppError::MalformedResponse(format!("{} (body: {})", e, preview(body)))
    })
}

/// Builds the error for a non-2xx response.
///
/// Notion's own error body wins. Anything else falls back to the HTTP status.
fn parse_error(body: &str, status: StatusCode, url: &str) -> AppError {
    match serde_json::from_str::<NotionErrorBody>(body) {
        Ok(error) => {
            log::warn!(
                "Notion returned {} ({}) for {}: {}",
                error.status,
                error.code,
                url,
                error.message
            );
            AppError::NotionService {
                code: NotionErrorCode::from_api_response(&error.code),
                message: error.message,
                status: StatusCode::from_u16(error.status).unwrap_or(status),
            }
        }
        Err(_) => {
            log::warn!("Notion returned {} for {} with an unrecognized body", status, url);
            AppError::NotionService {
                code: NotionErrorCode::from_http_status(status.as_u16()),
                message: format!("HTTP {} from {}: {}", status, url, preview(body)),
                status,
            }
        }
    }
}

fn preview(body: &str) -> String {
    if body.chars().count() > ERROR_BODY_PREVIEW_LENGTH {
        let cut: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
        format!("{}...", cut)
    } else {
        body.to_string()
    }
}

pub fn parse_database_response(result: ApiResponse<String>) -> Result<Database, AppError> {
    parse_api_response(result)
}

/// Records from the first page of a database query.
pub fn parse_query_response(result: ApiResponse<String>) -> Result<Vec<Record>, AppError> {
    let page: PaginatedResponse<Record> = parse_api_response(result)?;
    if page.has_more {
        log::debug!("Query has more records than one page; only the first page is returned");
    }
    Ok(page.results)
}

/// IDs of the `child_database` blocks in a children listing.
pub fn parse_child_database_ids(result: ApiResponse<String>) -> Result<Vec<NotionId>, AppError> {
    let page: PaginatedResponse<ChildBlock> = parse_api_response(result)?;
    let total = page.results.len();
    let ids: Vec<NotionId> = page
        .results
        .into_iter()
        .filter(ChildBlock::is_child_database)
        .map(|block| block.id)
        .collect();

    log::debug!("{} of {} child block(s) are databases", ids.len(), total);
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> ApiResponse<String> {
        ApiResponse {
            data: body.to_string(),
            status: StatusCode::from_u16(status).unwrap(),
            url: "https://api.notion.com/v1/databases/x".to_string(),
        }
    }

    #[test]
    fn test_notion_error_body_is_typed() {
        let body = r#"{"object":"error","status":404,"code":"object_not_found","message":"Could not find database"}"#;
        let err = parse_database_response(response(404, body)).unwrap_err();
        match err {
            AppError::NotionService {
                code,
                message,
                status,
            } => {
                assert_eq!(code, NotionErrorCode::ObjectNotFound);
                assert_eq!(message, "Could not find database");
                assert_eq!(status, StatusCode::NOT_FOUND);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_unparseable_error_falls_back_to_status() {
        let err = parse_database_response(response(502, "<html>bad gateway</html>")).unwrap_err();
        match err {
            AppError::NotionService { code, status, .. } => {
                assert_eq!(code, NotionErrorCode::HttpStatus(502));
                assert_eq!(status, StatusCode::BAD_GATEWAY);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_success_body() {
        let err = parse_database_response(response(200, "not json")).unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[test]
    fn test_query_keeps_upstream_order() {
        let body = r#"{
            "object": "list",
            "results": [
                {"object": "page", "id": "00000000000000000000000000000002", "properties": {}},
                {"object": "page", "id": "00000000000000000000000000000001", "properties": {}}
            ],
            "next_cursor": "abc",
            "has_more": true
        }"#;
        let records = parse_query_response(response(200, body)).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id.as_str(), "00000000000000000000000000000002");
    }

    #[test]
    fn test_child_databases_are_filtered() {
        let body = r#"{
            "object": "list",
            "results": [
                {"object": "block", "id": "aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaaa", "type": "paragraph"},
                {"object": "block", "id": "bbbbbbbb-bbbb-bbbb-bbbb-bbbbbbbbbbbb", "type": "child_database"},
                {"object": "block", "id": "cccccccc-cccc-cccc-cccc-cccccccccccc", "type": "child_database"}
            ],
            "has_more": false
        }"#;
        let ids = parse_child_database_ids(response(200, body)).unwrap();
        let ids: Vec<String> = ids.iter().map(|id| id.to_hyphenated()).collect();
        assert_eq!(
            ids,
            vec![
                "bbbbbbbb-bbbb-bbbb-bbbb-bbbbbbbbbbbb",
                "cccccccc-cccc-cccc-cccc-cccccccccccc"
            ]
        );
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let long = "é".repeat(ERROR_BODY_PREVIEW_LENGTH + 10);
        let cut = preview(&long);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), ERROR_BODY_PREVIEW_LENGTH + 3);
    }
}
