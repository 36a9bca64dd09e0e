//! Typed errors and HTTP mapping.

use crate::catalog::{ApiError, ErrorCode};
use crate::response::respond_api_error;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("DATABASE_URL or POSTGRES_DSN is not set")]
    MissingDatabaseUrl,
    #[error("invalid {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Access layer failures. Anything other than a missing row is passed through verbatim.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Frontend type generation failures.
#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("invalid product id")]
    InvalidId,
    #[error("per_page {requested} exceeds maximum {max_per_page}")]
    PerPageTooLarge { requested: i64, max_per_page: u32 },
    #[error("product not found")]
    NotFound,
    #[error("internal: {0}")]
    Internal(String),
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound => AppError::NotFound,
            StoreError::Database(e) => AppError::Internal(e.to_string()),
        }
    }
}

impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

impl AppError {
    /// Catalog entry and status for this error.
    pub fn to_api_error(&self) -> (ApiError, axum::http::StatusCode) {
        match self {
            AppError::InvalidRequest(text) => {
                ApiError::bad_request(ErrorCode::InvalidRequest, Some(text.clone().into()))
            }
            AppError::InvalidId => ApiError::bad_request(ErrorCode::InvalidId, None),
            AppError::PerPageTooLarge { requested, max_per_page } => ApiError::bad_request(
                ErrorCode::PerPageTooLarge,
                Some(serde_json::json!({
                    "requested": requested,
                    "max_per_page": max_per_page,
                })),
            ),
            AppError::NotFound => ApiError::not_found(ErrorCode::ProductNotFound, None),
            AppError::Internal(text) => {
                ApiError::internal(ErrorCode::InternalError, Some(text.clone().into()))
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal(ref text) = self {
            tracing::error!(error = %text, "request failed");
        }
        let (err, status) = self.to_api_error();
        respond_api_error(status, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn store_not_found_maps_to_not_found() {
        let err: AppError = StoreError::NotFound.into();
        let (api, status) = err.to_api_error();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(api.code, ErrorCode::ProductNotFound);
    }

    #[test]
    fn database_error_surfaces_raw_text() {
        let err: AppError = StoreError::Database(sqlx::Error::PoolTimedOut).into();
        let (api, status) = err.to_api_error();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.code, ErrorCode::InternalError);
        assert_eq!(
            api.details,
            Some(serde_json::Value::String(sqlx::Error::PoolTimedOut.to_string()))
        );
    }

    #[test]
    fn per_page_details() {
        let (api, status) = AppError::PerPageTooLarge { requested: 1000, max_per_page: 100 }.to_api_error();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            api.details,
            Some(serde_json::json!({ "requested": 1000, "max_per_page": 100 }))
        );
    }

    #[test]
    fn invalid_id_has_no_details() {
        let (api, status) = AppError::InvalidId.to_api_error();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(api.code, ErrorCode::InvalidId);
        assert!(api.details.is_none());
    }
}
