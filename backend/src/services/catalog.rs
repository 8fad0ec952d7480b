//! Crop catalog loading
//!
//! The catalog is read once at startup. A configured file that is missing or
//! fails validation stops the server from starting.

use std::path::Path;

use config::{File, FileFormat};
use shared::{builtin_catalog, CropCatalog};

use crate::error::{AppError, AppResult};

/// Load the catalog from `path`, or the built-in one when no path is given
pub fn load_catalog(path: Option<&str>) -> AppResult<CropCatalog> {
    let catalog = match path {
        Some(path) => load_catalog_file(Path::new(path))?,
        None => builtin_catalog().map_err(|e| AppError::Configuration(e.to_string()))?,
    };
    tracing::info!(crops = catalog.len(), "Crop catalog loaded");
    Ok(catalog)
}

fn load_catalog_file(path: &Path) -> AppResult<CropCatalog> {
    config::Config::builder()
        .add_source(File::from(path).format(FileFormat::Toml).required(true))
        .build()
        .and_then(|raw| raw.try_deserialize::<CropCatalog>())
        .map_err(|e| AppError::Configuration(format!("Crop catalog {}: {}", path.display(), e)))
}

/// Parse a catalog from TOML text
pub fn parse_catalog(toml: &str) -> AppResult<CropCatalog> {
    config::Config::builder()
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()
        .and_then(|raw| raw.try_deserialize::<CropCatalog>())
        .map_err(|e| AppError::Configuration(format!("Crop catalog: {}", e)))
}
