//! Product entity and request payload.
//!
//! The `Product` struct is read as text by the frontend type generator: one `pub` field per line.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub code: String,
    pub price: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Body of POST /product and PUT /product/:id. Both fields are required.
#[derive(Clone, Debug, Deserialize)]
pub struct ProductInput {
    pub code: String,
    pub price: i64,
}

impl ProductInput {
    /// `code` must be non-empty and `price` a positive integer.
    pub fn validate(&self) -> Result<(), String> {
        if self.code.is_empty() {
            return Err("code is required".into());
        }
        if self.price <= 0 {
            return Err("price must be a positive integer".into());
        }
        Ok(())
    }
}
