//! Frontend type generation: mirrors the error catalog and the Product model into TypeScript.
//!
//! Sources are read as text (see [`parse`]); anything the patterns miss falls back to the
//! compiled-in catalog and a baseline Product shape, so generation only fails on I/O.

pub mod parse;
pub mod render;

use crate::catalog::CATALOG;
use crate::error::CodegenError;
use parse::{baseline_product_fields, parse_error_codes, parse_struct_fields, ErrorCodeDef};
use render::{render_api_types, render_error_codes};
use std::path::{Path, PathBuf};

pub const ERROR_CODES_FILE: &str = "errorCodes.ts";
pub const API_TYPES_FILE: &str = "apiTypes.ts";

/// Catalog and model sources as of this build.
pub const EMBEDDED_CATALOG_SOURCE: &str = include_str!("../catalog.rs");
pub const EMBEDDED_MODEL_SOURCE: &str = include_str!("../model.rs");

#[derive(Clone, Debug)]
pub struct GeneratedFiles {
    pub error_codes: String,
    pub api_types: String,
}

pub fn generate(catalog_src: &str, model_src: &str) -> Result<GeneratedFiles, CodegenError> {
    let mut codes = parse_error_codes(catalog_src)?;
    if codes.is_empty() {
        tracing::warn!("no error codes found in catalog source; using compiled catalog");
        codes = compiled_error_codes();
    }
    let mut fields = parse_struct_fields(model_src, "Product")?;
    if fields.is_empty() {
        tracing::warn!("Product struct not found in model source; using baseline fields");
        fields = baseline_product_fields();
    }
    Ok(GeneratedFiles {
        error_codes: render_error_codes(&codes),
        api_types: render_api_types(&fields),
    })
}

fn compiled_error_codes() -> Vec<ErrorCodeDef> {
    CATALOG
        .iter()
        .map(|(code, wire, message)| ErrorCodeDef {
            variant: format!("{:?}", code),
            code: wire.to_string(),
            message: message.to_string(),
        })
        .collect()
}

/// Write both files into `out_dir` (created if missing). Each file is written to a temp path and
/// renamed into place.
pub fn write_to_dir(out_dir: &Path, files: &GeneratedFiles) -> Result<Vec<PathBuf>, CodegenError> {
    std::fs::create_dir_all(out_dir).map_err(|source| CodegenError::Write {
        path: out_dir.display().to_string(),
        source,
    })?;
    let mut written = Vec::with_capacity(2);
    for (name, contents) in [
        (ERROR_CODES_FILE, &files.error_codes),
        (API_TYPES_FILE, &files.api_types),
    ] {
        let path = out_dir.join(name);
        let tmp = out_dir.join(format!(".{}.tmp", name));
        let to_err = |source| CodegenError::Write {
            path: path.display().to_string(),
            source,
        };
        std::fs::write(&tmp, contents).map_err(to_err)?;
        if let Err(source) = std::fs::rename(&tmp, &path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(to_err(source));
        }
        written.push(path);
    }
    Ok(written)
}

pub fn read_source(path: &Path) -> Result<String, CodegenError> {
    std::fs::read_to_string(path).map_err(|source| CodegenError::Read {
        path: path.display().to_string(),
        source,
    })
}

/// Generate from the embedded sources into `out_dir`.
pub fn run(out_dir: &Path) -> Result<Vec<PathBuf>, CodegenError> {
    let files = generate(EMBEDDED_CATALOG_SOURCE, EMBEDDED_MODEL_SOURCE)?;
    let written = write_to_dir(out_dir, &files)?;
    tracing::info!(out_dir = %out_dir.display(), files = written.len(), "frontend types generated");
    Ok(written)
}
