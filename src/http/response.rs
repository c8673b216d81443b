//! Error responses.
//!
//! # Responsibilities
//! - Map gateway errors to HTTP status codes
//! - Render errors as JSON bodies with a stable shape
//!
//! # Design Decisions
//! - Body shape is `{"message": ..., "status": ...}`
//! - Encoding failures are logged server-side, the client sees a 500

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Errors surfaced to API clients.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("unsupported schema format `{0}`")]
    UnsupportedFormat(String),

    #[error("invalid host header")]
    DisallowedHost,

    #[error("failed to encode schema document: {0}")]
    Encoding(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::UnsupportedFormat(_) => StatusCode::NOT_ACCEPTABLE,
            ApiError::DisallowedHost => StatusCode::BAD_REQUEST,
            ApiError::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = Json(json!({
            "message": self.to_string(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
