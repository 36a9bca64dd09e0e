//! PostgreSQL product store and table bootstrap.

use super::{lookup_id, page_offset, ProductStore};
use crate::error::StoreError;
use crate::model::Product;
use async_trait::async_trait;
use sqlx::PgPool;

pub const PRODUCTS_TABLE: &str = "products";

const COLUMNS: &str = "id, code, price, created_at, updated_at, deleted_at";

/// Create the products table if it does not exist. Does not alter an existing table.
pub async fn ensure_products_table(pool: &PgPool) -> Result<(), StoreError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
            code TEXT NOT NULL,
            price BIGINT NOT NULL CHECK (price >= 0),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            deleted_at TIMESTAMPTZ
        )
        "#,
        PRODUCTS_TABLE
    );
    sqlx::query(&ddl).execute(pool).await?;
    let index = format!(
        "CREATE INDEX IF NOT EXISTS idx_{0}_deleted_at ON {0} (deleted_at)",
        PRODUCTS_TABLE
    );
    sqlx::query(&index).execute(pool).await?;
    Ok(())
}

#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        PgProductStore { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn latest(&self) -> Result<Product, StoreError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE deleted_at IS NULL ORDER BY id LIMIT 1",
            COLUMNS, PRODUCTS_TABLE
        );
        tracing::debug!(sql = %sql, "query");
        sqlx::query_as::<_, Product>(&sql)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn list(&self, page: i64, per_page: u32) -> Result<(Vec<Product>, i64), StoreError> {
        let count_sql = format!("SELECT COUNT(*) FROM {} WHERE deleted_at IS NULL", PRODUCTS_TABLE);
        tracing::debug!(sql = %count_sql, "query");
        let total: i64 = sqlx::query_scalar(&count_sql).fetch_one(&self.pool).await?;

        let offset = page_offset(page, per_page);
        let sql = format!(
            "SELECT {} FROM {} WHERE deleted_at IS NULL ORDER BY id LIMIT $1 OFFSET $2",
            COLUMNS, PRODUCTS_TABLE
        );
        tracing::debug!(sql = %sql, limit = per_page, offset, "query");
        let rows = sqlx::query_as::<_, Product>(&sql)
            .bind(i64::from(per_page))
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;
        Ok((rows, total))
    }

    async fn get(&self, id: &str) -> Result<Product, StoreError> {
        let Some(id) = lookup_id(id) else {
            return Err(StoreError::NotFound);
        };
        let sql = format!(
            "SELECT {} FROM {} WHERE id = $1 AND deleted_at IS NULL",
            COLUMNS, PRODUCTS_TABLE
        );
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, code: &str, price: i64) -> Result<Product, StoreError> {
        let sql = format!(
            "INSERT INTO {} (code, price) VALUES ($1, $2) RETURNING {}",
            PRODUCTS_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, code, price, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(code)
            .bind(price)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: i64, code: &str, price: i64) -> Result<Product, StoreError> {
        let sql = format!(
            "UPDATE {} SET code = $2, price = $3, updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL RETURNING {}",
            PRODUCTS_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, id, code, price, "query");
        sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .bind(code)
            .bind(price)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let sql = format!(
            "UPDATE {} SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
            PRODUCTS_TABLE
        );
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
