//! Common routes: liveness.

use crate::handlers::ping;
use axum::{routing::get, Router};

/// Common routes (no state): GET /ping.
pub fn common_routes() -> Router {
    Router::new().route("/ping", get(ping))
}
