//! Product service: loads configuration, optionally regenerates frontend types, connects to
//! PostgreSQL, ensures the products table, and serves the HTTP API.

use product_service::{
    app, codegen, ensure_products_table, load_dotenv, AppState, PgProductStore, ServiceConfig,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("product_service=info,tower_http=info")),
        )
        .init();

    load_dotenv();
    let config = ServiceConfig::from_env()?;

    if config.generate_frontend {
        if let Err(e) = codegen::run(&config.frontend_out_dir) {
            tracing::warn!(error = %e, "frontend type generation failed");
        }
    }

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    tracing::info!("connected to PostgreSQL");
    ensure_products_table(&pool).await?;

    let state = AppState::new(Arc::new(PgProductStore::new(pool)), config.max_per_page);
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(max_per_page = config.max_per_page, "listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
