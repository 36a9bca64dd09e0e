//! Liveness.

use crate::response::respond_success;
use axum::{http::StatusCode, response::Response};

pub async fn ping() -> Response {
    respond_success(StatusCode::OK, serde_json::json!({ "message": "pong" }), None)
}
