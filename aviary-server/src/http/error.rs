//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! No error is fatal: the server keeps serving after any single request
//! fails.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

/// Request handling error with automatic HTTP status mapping
#[derive(Debug, Error)]
pub enum ApiError {
    /// Response body could not be serialized (500)
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Reading from the bird store failed (500)
    #[error("store read failed: {0}")]
    StoreRead(#[source] StoreError),

    /// Writing to the bird store failed (500)
    #[error("store write failed: {0}")]
    StoreWrite(#[source] StoreError),

    /// Request body was not a valid urlencoded form (400)
    #[error("malformed request: {0}")]
    MalformedRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Serialization(e) => {
                tracing::error!("serialization error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "serialization_failed",
                        "message": "an internal error occurred"
                    }),
                )
            }
            Self::StoreRead(e) => {
                tracing::error!("store read error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "store_read_failed",
                        "message": "an internal error occurred"
                    }),
                )
            }
            Self::StoreWrite(e) => {
                tracing::error!("store write error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "store_write_failed",
                        "message": "an internal error occurred"
                    }),
                )
            }
            Self::MalformedRequest(msg) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "malformed_request",
                    "message": msg
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_store() -> StoreError {
        StoreError::Unavailable("engine unreachable".into())
    }

    #[tokio::test]
    async fn store_read_is_500() {
        let response = ApiError::StoreRead(unreachable_store()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn store_write_is_500() {
        let response = ApiError::StoreWrite(unreachable_store()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn malformed_request_is_400() {
        let response = ApiError::MalformedRequest("not a form".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn serialization_is_500() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let response = ApiError::Serialization(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
