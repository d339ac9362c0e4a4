//! Error mapping between the domain taxonomy and HTTP.
//!
//! Every failure renders the same JSON envelope the original API used:
//! `{"message": ..., "error": ..., "statusCode": ...}`, with `message`
//! being an array of per-field strings for shape validation failures and a
//! single string otherwise.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use foodprint_core::ComputeError;
use foodprint_store::StoreError;
use foodprint_types::TypeError;

/// A request-level failure, ready to render as an HTTP response.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body shape errors, one message per offending field. 400.
    #[error("validation failed")]
    Validation(Vec<String>),

    /// A bad argument reached the computation core (unit, quantity). 400.
    #[error("{0}")]
    InvalidArgument(String),

    /// Unknown record name. 404.
    #[error("{0}")]
    NotFound(String),

    /// Unique-name conflict. 409.
    #[error("{0}")]
    Conflict(String),

    /// Unexpected backend failure. 500.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            StoreError::AlreadyExists { .. } => ApiError::Conflict(err.to_string()),
            StoreError::Internal(detail) => ApiError::Internal(detail),
        }
    }
}

impl From<ComputeError> for ApiError {
    fn from(err: ComputeError) -> Self {
        match err {
            ComputeError::Lookup(e) => ApiError::Internal(e.to_string()),
            _ => ApiError::InvalidArgument(err.to_string()),
        }
    }
}

impl From<TypeError> for ApiError {
    fn from(err: TypeError) -> Self {
        ApiError::InvalidArgument(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::Validation(messages) => json!({
                "message": messages,
                "error": "Bad Request",
                "statusCode": status.as_u16(),
            }),
            ApiError::Internal(detail) => {
                tracing::error!(%detail, "request failed with internal error");
                json!({
                    "message": "Internal Server Error",
                    "statusCode": status.as_u16(),
                })
            }
            other => json!({
                "message": other.to_string(),
                "error": status.canonical_reason().unwrap_or("Error"),
                "statusCode": status.as_u16(),
            }),
        };
        (status, Json(body)).into_response()
    }
}

/// Failures while starting the server itself.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for server startup.
pub type ServerResult<T> = std::result::Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_conflict_maps_to_409() {
        let err: ApiError = StoreError::AlreadyExists {
            entity: foodprint_store::error::FACTOR_ENTITY,
            name: "ham".to_string(),
        }
        .into();
        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert_eq!(err.to_string(), "Carbon Emission factor 'ham' already exists");
    }

    #[test]
    fn compute_error_maps_to_400() {
        let err: ApiError = ComputeError::UnsupportedUnit.into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Unit not valid or not implemented");
    }

    #[test]
    fn lookup_failure_maps_to_500() {
        let err: ApiError = ComputeError::Lookup(foodprint_core::LookupError(
            "backend down".to_string(),
        ))
        .into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
