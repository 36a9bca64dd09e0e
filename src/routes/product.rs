//! Product CRUD routes. `/product/latest` is registered before `/product/:id` and takes precedence.

use crate::handlers::product::{create, delete as delete_handler, latest, list, read, update};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn product_routes(state: AppState) -> Router {
    Router::new()
        .route("/products", get(list))
        .route("/product", post(create))
        .route("/product/latest", get(latest))
        .route(
            "/product/:id",
            get(read).put(update).delete(delete_handler),
        )
        .with_state(state)
}
