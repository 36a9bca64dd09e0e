//! Product service: CRUD REST API for products over PostgreSQL, with a uniform JSON envelope
//! and a generator that mirrors error codes and response types into frontend TypeScript.

pub mod case;
pub mod catalog;
pub mod codegen;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod pagination;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use catalog::{ApiError, ErrorCode, CATALOG};
pub use config::{load_dotenv, ServiceConfig};
pub use error::{AppError, CodegenError, ConfigError, StoreError};
pub use model::{Product, ProductInput};
pub use pagination::{PageMeta, Pagination};
pub use response::{respond_api_error, respond_error, respond_error_code, respond_success};
pub use routes::{app, common_routes, product_routes};
pub use state::AppState;
pub use store::{ensure_products_table, MemoryProductStore, PgProductStore, ProductStore};
