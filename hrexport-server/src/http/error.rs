//! API error types with IntoResponse
//!
//! Storage failures are split by kind: connectivity problems become 503 so
//! callers know to retry later, everything else becomes a generic 500.
//! Storage detail is logged, never returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::{StorageError, StorageErrorKind};
use crate::models::ValidationError;

/// Message returned with 503
pub const UNAVAILABLE_MESSAGE: &str = "database is unreachable, try again later";

/// Message returned with 500
pub const INTERNAL_MESSAGE: &str = "an internal error occurred";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Request input failed validation (422)
    Validation(ValidationError),

    /// No route matched (404)
    NotFound { path: String },

    /// Storage failure (503 or 500 depending on kind, logged)
    Storage(StorageError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Storage(e) => match e.kind() {
                StorageErrorKind::Connectivity => StatusCode::SERVICE_UNAVAILABLE,
                StorageErrorKind::Query => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::Validation(e) => json!({
                "error": "validation_error",
                "message": e.to_string()
            }),
            Self::NotFound { path } => json!({
                "error": "not_found",
                "message": format!("no route for '{}'", path)
            }),
            Self::Storage(e) => match e.kind() {
                StorageErrorKind::Connectivity => {
                    tracing::warn!("Database unavailable: {}", e);
                    json!({
                        "error": "service_unavailable",
                        "message": UNAVAILABLE_MESSAGE
                    })
                }
                StorageErrorKind::Query => {
                    // Log the actual error, return generic message
                    tracing::error!("Database error: {}", e);
                    json!({
                        "error": "internal_error",
                        "message": INTERNAL_MESSAGE
                    })
                }
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        Self::Storage(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_422() {
        let err = ApiError::Validation(ValidationError::OutOfRange {
            field: "limit",
            min: 0,
            max: Some(100),
            value: "101".into(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["message"], "limit must be between 0 and 100, got 101");
    }

    #[tokio::test]
    async fn connectivity_is_503() {
        let err = ApiError::from(StorageError::Connectivity("connection refused".into()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = body_json(response).await;
        assert_eq!(body["message"], UNAVAILABLE_MESSAGE);
    }

    #[tokio::test]
    async fn query_failure_is_500_without_detail() {
        let err = ApiError::from(StorageError::Query(
            "relation \"employees\" does not exist".into(),
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "internal_error");
        assert_eq!(body["message"], INTERNAL_MESSAGE);
        assert!(!body.to_string().contains("relation"));
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let err = ApiError::NotFound {
            path: "/nope".into(),
        };
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
