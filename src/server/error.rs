// src/server/error.rs
use crate::error::AppError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// An `AppError` on its way out as an HTTP response.
///
/// Caller mistakes become 400, everything else 500. The body is always
/// `{"message": ...}`.
#[derive(Debug)]
pub struct ServerError(pub AppError);

impl ServerError {
    pub fn status(&self) -> StatusCode {
        if self.0.is_invalid_input() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("Request failed: {}", self.0);
        } else {
            log::warn!("Rejected request: {}", self.0);
        }

        (status, Json(json!({ "message": self.0.to_string() }))).into_response()
    }
}

// Lets handlers use `?` on anything that returns `Result<_, AppError>`.
impl From<AppError> for ServerError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}
