//! Error catalog: symbolic error codes, their default messages, and status-class constructors.
//!
//! `CATALOG` is also read as text by the frontend type generator, so keep one row per line.

use axum::http::StatusCode;
use serde::Serialize;

/// Closed set of error codes sent to clients.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InternalError,
    ProductNotFound,
    ProductsNotFound,
    InvalidRequest,
    InvalidId,
    PerPageTooLarge,
}

/// (code, wire string, default message)
pub const CATALOG: &[(ErrorCode, &str, &str)] = &[
    (ErrorCode::InternalError, "INTERNAL_ERROR", "internal server error"),
    (ErrorCode::ProductNotFound, "PRODUCT_NOT_FOUND", "product not found"),
    (ErrorCode::ProductsNotFound, "PRODUCTS_NOT_FOUND", "products not found"),
    (ErrorCode::InvalidRequest, "INVALID_REQUEST", "invalid request"),
    (ErrorCode::InvalidId, "INVALID_ID", "invalid product id"),
    (ErrorCode::PerPageTooLarge, "PER_PAGE_TOO_LARGE", "per_page exceeds maximum allowed"),
];

impl ErrorCode {
    pub const ALL: [ErrorCode; 6] = [
        ErrorCode::InternalError,
        ErrorCode::ProductNotFound,
        ErrorCode::ProductsNotFound,
        ErrorCode::InvalidRequest,
        ErrorCode::InvalidId,
        ErrorCode::PerPageTooLarge,
    ];

    fn entry(self) -> Option<&'static (ErrorCode, &'static str, &'static str)> {
        CATALOG.iter().find(|(c, _, _)| *c == self)
    }

    /// Wire string, e.g. `PRODUCT_NOT_FOUND`.
    pub fn as_str(self) -> &'static str {
        self.entry().map(|(_, s, _)| *s).unwrap_or("")
    }

    /// Default message. Empty when the catalog has no row for the code.
    pub fn default_message(self) -> &'static str {
        self.entry().map(|(_, _, m)| *m).unwrap_or("")
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured API error as it appears inside the error envelope.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Builds an error with the catalog's default message; `details` is attached verbatim.
    pub fn new(code: ErrorCode, details: Option<serde_json::Value>) -> Self {
        ApiError {
            code,
            message: code.default_message().to_string(),
            details,
        }
    }

    pub fn bad_request(code: ErrorCode, details: Option<serde_json::Value>) -> (Self, StatusCode) {
        (Self::new(code, details), StatusCode::BAD_REQUEST)
    }

    pub fn not_found(code: ErrorCode, details: Option<serde_json::Value>) -> (Self, StatusCode) {
        (Self::new(code, details), StatusCode::NOT_FOUND)
    }

    pub fn internal(code: ErrorCode, details: Option<serde_json::Value>) -> (Self, StatusCode) {
        (Self::new(code, details), StatusCode::INTERNAL_SERVER_ERROR)
    }
}
