//! Service configuration from environment variables (after `.env` loading).

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_MAX_PER_PAGE: u32 = 100;
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_FRONTEND_OUT_DIR: &str = "frontend/src";

#[derive(Clone, Debug)]
pub struct ServiceConfig {
    pub database_url: String,
    pub max_per_page: u32,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    /// Development mode runs the frontend type generator at startup.
    pub generate_frontend: bool,
    pub frontend_out_dir: PathBuf,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let env = |name: &str| std::env::var(name).ok();
        Self::from_lookup(env)
    }

    /// Builds config from any variable lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = resolve_database_url(lookup("DATABASE_URL"), lookup("POSTGRES_DSN"))?;
        let max_per_page = parse_max_per_page(lookup("MAX_PER_PAGE").as_deref());

        let port = match lookup("PORT") {
            Some(v) if !v.trim().is_empty() => v
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { name: "PORT", value: v })?,
            _ => DEFAULT_PORT,
        };
        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(v) if !v.trim().is_empty() => match v.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::Invalid { name: "DB_MAX_CONNECTIONS", value: v }),
            },
            _ => DEFAULT_MAX_CONNECTIONS,
        };
        let generate_frontend = !is_production(lookup("APP_ENV").as_deref());
        let frontend_out_dir = lookup("FRONTEND_OUT_DIR")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FRONTEND_OUT_DIR.into())
            .into();

        Ok(ServiceConfig {
            database_url,
            max_per_page,
            bind_addr: SocketAddr::from(([0, 0, 0, 0], port)),
            max_connections,
            generate_frontend,
            frontend_out_dir,
        })
    }
}

/// `DATABASE_URL`, falling back to `POSTGRES_DSN`. Empty values count as unset.
pub fn resolve_database_url(
    database_url: Option<String>,
    postgres_dsn: Option<String>,
) -> Result<String, ConfigError> {
    database_url
        .filter(|s| !s.is_empty())
        .or(postgres_dsn.filter(|s| !s.is_empty()))
        .ok_or(ConfigError::MissingDatabaseUrl)
}

/// Positive integer override; anything else, including padded values, falls back to the default.
pub fn parse_max_per_page(value: Option<&str>) -> u32 {
    value
        .and_then(|v| v.parse::<u32>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_MAX_PER_PAGE)
}

fn is_production(app_env: Option<&str>) -> bool {
    matches!(
        app_env.map(|s| s.trim().to_lowercase()).as_deref(),
        Some("production") | Some("release")
    )
}

/// Load `../.env`, then `.env`. Missing files are not an error.
pub fn load_dotenv() {
    if let Err(e) = dotenvy::from_filename("../.env") {
        if let Err(e2) = dotenvy::dotenv() {
            tracing::warn!("no .env loaded (tried ../.env and .env): {}; {}", e, e2);
        }
    }
}
