//! Emits TypeScript error codes and API types for the frontend.
//!
//! `cargo run --bin genfrontend -- --out ../frontend/src`

use clap::Parser;
use product_service::codegen::{self, EMBEDDED_CATALOG_SOURCE, EMBEDDED_MODEL_SOURCE};
use product_service::config::DEFAULT_FRONTEND_OUT_DIR;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "genfrontend")]
#[command(about = "Generate frontend TypeScript types from the backend error catalog and models", long_about = None)]
struct Cli {
    /// Output directory for errorCodes.ts and apiTypes.ts
    #[arg(long, value_name = "DIR", default_value = DEFAULT_FRONTEND_OUT_DIR)]
    out: PathBuf,

    /// Error catalog source to read instead of the one compiled into this binary
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Model source to read instead of the one compiled into this binary
    #[arg(long, value_name = "FILE")]
    model: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("product_service=info")),
        )
        .init();

    let cli = Cli::parse();
    let catalog_src = match &cli.catalog {
        Some(path) => codegen::read_source(path)?,
        None => EMBEDDED_CATALOG_SOURCE.to_string(),
    };
    let model_src = match &cli.model {
        Some(path) => codegen::read_source(path)?,
        None => EMBEDDED_MODEL_SOURCE.to_string(),
    };

    let files = codegen::generate(&catalog_src, &model_src)?;
    for path in codegen::write_to_dir(&cli.out, &files)? {
        println!("wrote {}", path.display());
    }
    Ok(())
}
