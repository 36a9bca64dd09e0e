//! In-process product store with the same semantics as the PostgreSQL one. Used by tests and local demos.

use super::{lookup_id, page_offset, ProductStore};
use crate::error::StoreError;
use crate::model::Product;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
struct Rows {
    /// Kept in id order; soft-deleted rows stay in place.
    products: Vec<Product>,
    last_id: i64,
}

#[derive(Default)]
pub struct MemoryProductStore {
    rows: Mutex<Rows>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn rows(&self) -> MutexGuard<'_, Rows> {
        self.rows.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn live(p: &Product) -> bool {
    p.deleted_at.is_none()
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn latest(&self) -> Result<Product, StoreError> {
        self.rows()
            .products
            .iter()
            .find(|p| live(p))
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn list(&self, page: i64, per_page: u32) -> Result<(Vec<Product>, i64), StoreError> {
        let rows = self.rows();
        let total = rows.products.iter().filter(|p| live(p)).count() as i64;
        let offset = usize::try_from(page_offset(page, per_page)).unwrap_or(usize::MAX);
        let page_rows = rows
            .products
            .iter()
            .filter(|p| live(p))
            .skip(offset)
            .take(per_page as usize)
            .cloned()
            .collect();
        Ok((page_rows, total))
    }

    async fn get(&self, id: &str) -> Result<Product, StoreError> {
        let id = lookup_id(id).ok_or(StoreError::NotFound)?;
        self.rows()
            .products
            .iter()
            .find(|p| live(p) && p.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, code: &str, price: i64) -> Result<Product, StoreError> {
        let mut rows = self.rows();
        rows.last_id += 1;
        let now = Utc::now();
        let product = Product {
            id: rows.last_id,
            code: code.to_string(),
            price,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        rows.products.push(product.clone());
        Ok(product)
    }

    async fn update(&self, id: i64, code: &str, price: i64) -> Result<Product, StoreError> {
        let mut rows = self.rows();
        let product = rows
            .products
            .iter_mut()
            .find(|p| p.id == id && p.deleted_at.is_none())
            .ok_or(StoreError::NotFound)?;
        product.code = code.to_string();
        product.price = price;
        product.updated_at = Utc::now();
        Ok(product.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut rows = self.rows();
        let product = rows
            .products
            .iter_mut()
            .find(|p| p.id == id && p.deleted_at.is_none())
            .ok_or(StoreError::NotFound)?;
        product.deleted_at = Some(Utc::now());
        Ok(())
    }
}
