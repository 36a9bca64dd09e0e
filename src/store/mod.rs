//! Product access layer: one trait, a PostgreSQL implementation, and an in-process one.

mod memory;
mod postgres;

pub use memory::MemoryProductStore;
pub use postgres::{ensure_products_table, PgProductStore, PRODUCTS_TABLE};

use crate::error::StoreError;
use crate::model::Product;
use async_trait::async_trait;

/// CRUD over non-deleted products. Every method is a single statement against the backing store,
/// except `list`, which counts and pages independently.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Product with the lowest id.
    async fn latest(&self) -> Result<Product, StoreError>;

    /// One page in id order plus the total number of products.
    /// `page` is 1-based; `page < 1` is treated as the first page.
    async fn list(&self, page: i64, per_page: u32) -> Result<(Vec<Product>, i64), StoreError>;

    /// Lookup by the raw path id. Anything that does not parse as an `i64` is `NotFound`.
    async fn get(&self, id: &str) -> Result<Product, StoreError>;

    async fn create(&self, code: &str, price: i64) -> Result<Product, StoreError>;

    /// Overwrites `code` and `price`; `updated_at` is refreshed.
    async fn update(&self, id: i64, code: &str, price: i64) -> Result<Product, StoreError>;

    /// Soft delete. `NotFound` when no live row had this id.
    async fn delete(&self, id: i64) -> Result<(), StoreError>;
}

/// Rows to skip before `page`. Saturates at `i64::MAX`, which is past any real table.
pub(crate) fn page_offset(page: i64, per_page: u32) -> i64 {
    if page > 1 {
        (page - 1).saturating_mul(i64::from(per_page))
    } else {
        0
    }
}

/// Numeric id for a lookup; `None` means no row can match.
pub(crate) fn lookup_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok()
}
