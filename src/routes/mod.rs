//! Router assembly.

mod common;
mod product;

pub use common::common_routes;
pub use product::product_routes;

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Request bodies above this size fail JSON extraction and are answered as `INVALID_REQUEST`.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Full application router: ping plus product routes, with tracing, CORS, and a body limit.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes())
        .merge(product_routes(state))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}
