//! Product request body and path id parsing.

use crate::error::AppError;
use crate::model::ProductInput;
use async_trait::async_trait;
use axum::{
    extract::{rejection::PathRejection, FromRequest, Path, Request},
    Json,
};

/// JSON body decoded into `ProductInput` and validated. Decode failures and rule violations
/// reject with `INVALID_REQUEST` carrying the error text.
#[derive(Clone, Debug)]
pub struct ValidProduct(pub ProductInput);

#[async_trait]
impl<S> FromRequest<S> for ValidProduct
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(input) = Json::<ProductInput>::from_request(req, state).await?;
        input.validate().map_err(AppError::InvalidRequest)?;
        Ok(ValidProduct(input))
    }
}

/// Raw path id for lookups. An undecodable segment cannot name a product, so it is `NotFound`.
pub fn lookup_path_id(path: Result<Path<String>, PathRejection>) -> Result<String, AppError> {
    match path {
        Ok(Path(raw)) => Ok(raw),
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "undecodable product id");
            Err(AppError::NotFound)
        }
    }
}

/// Path id for update and delete. Undecodable segments and bad numbers are both `InvalidId`.
pub fn product_path_id(path: Result<Path<String>, PathRejection>) -> Result<i64, AppError> {
    match path {
        Ok(Path(raw)) => parse_product_id(&raw),
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "undecodable product id");
            Err(AppError::InvalidId)
        }
    }
}

/// Path id for update and delete: a non-negative integer.
pub fn parse_product_id(raw: &str) -> Result<i64, AppError> {
    match raw.parse::<i64>() {
        Ok(id) if id >= 0 => Ok(id),
        _ => Err(AppError::InvalidId),
    }
}
