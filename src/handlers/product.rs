//! Product CRUD handlers: list, latest, read, create, update, delete.

use crate::error::AppError;
use crate::extractors::{lookup_path_id, product_path_id, ValidProduct};
use crate::pagination::Pagination;
use crate::response::respond_success;
use crate::state::AppState;
use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::collections::HashMap;

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, AppError> {
    let pagination = Pagination::from_query(&params, state.max_per_page)?;
    let (products, total) = state.store.list(pagination.page, pagination.per_page).await?;
    let meta = serde_json::to_value(pagination.meta(total))
        .map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(respond_success(StatusCode::OK, products, Some(meta)))
}

pub async fn latest(State(state): State<AppState>) -> Result<Response, AppError> {
    let product = state.store.latest().await?;
    Ok(respond_success(StatusCode::OK, product, None))
}

pub async fn read(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, AppError> {
    let id = lookup_path_id(path)?;
    let product = state.store.get(&id).await?;
    Ok(respond_success(StatusCode::OK, product, None))
}

pub async fn create(
    State(state): State<AppState>,
    ValidProduct(input): ValidProduct,
) -> Result<Response, AppError> {
    let created = state.store.create(&input.code, input.price).await?;
    tracing::info!(id = created.id, code = %created.code, "product created");
    let location = format!("/product/{}", created.id);
    Ok((
        [(header::LOCATION, location)],
        respond_success(StatusCode::CREATED, created, None),
    )
        .into_response())
}

/// Body is validated before the path id, so a request with both wrong reports the body.
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    ValidProduct(input): ValidProduct,
) -> Result<Response, AppError> {
    let id = product_path_id(path)?;
    let updated = state.store.update(id, &input.code, input.price).await?;
    Ok(respond_success(StatusCode::OK, updated, None))
}

pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, AppError> {
    let id = product_path_id(path)?;
    state.store.delete(id).await?;
    tracing::info!(id, "product deleted");
    Ok(respond_success(
        StatusCode::OK,
        serde_json::json!({ "message": "product deleted" }),
        None,
    ))
}
