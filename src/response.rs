//! Standard response envelope helpers.

use crate::catalog::{ApiError, ErrorCode};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct SuccessEnvelope<T> {
    pub success: bool,
    pub status: u16,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

#[derive(Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub status: u16,
    pub error: ErrorBody,
}

/// Error payload inside the envelope. `code` is the wire string so callers can pass any catalog code.
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// `{success: true, status, data, meta?}` with `meta` left out entirely when absent.
pub fn respond_success<T: Serialize>(
    status: StatusCode,
    data: T,
    meta: Option<serde_json::Value>,
) -> Response {
    (
        status,
        Json(SuccessEnvelope {
            success: true,
            status: status.as_u16(),
            data,
            meta,
        }),
    )
        .into_response()
}

/// `{success: false, status, error: {code, message, details?}}`.
pub fn respond_error(
    status: StatusCode,
    code: &str,
    message: String,
    details: Option<serde_json::Value>,
) -> Response {
    (
        status,
        Json(ErrorEnvelope {
            success: false,
            status: status.as_u16(),
            error: ErrorBody {
                code: code.to_string(),
                message,
                details,
            },
        }),
    )
        .into_response()
}

pub fn respond_api_error(status: StatusCode, err: ApiError) -> Response {
    respond_error(status, err.code.as_str(), err.message, err.details)
}

/// Message comes from the catalog.
pub fn respond_error_code(
    status: StatusCode,
    code: ErrorCode,
    details: Option<serde_json::Value>,
) -> Response {
    respond_api_error(status, ApiError::new(code, details))
}
