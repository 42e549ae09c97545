//! Settings files, catalog export and catalog validation for isomap
//!
//! Path realignment settings live in a `[realign]` table of a TOML file, or
//! a `"realign"` object of a JSON file. The catalog itself is compiled in;
//! this crate can dump it for content tooling and check its invariants.
//!
//! # Example
//!
//! ```rust,ignore
//! use isomap_schema::{load_settings, validate_catalog};
//!
//! validate_catalog()?;
//! let config = load_settings(Path::new("isomap.toml"))?;
//! realign_grid_with(&mut grid, &config.realign);
//! ```

mod catalog;
mod validate;

pub use catalog::*;
pub use validate::*;

use isomap_paths::RealignSettings;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading settings or validating the catalog
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Contents of an isomap settings file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Settings for the realignment pass
    pub realign: RealignSettings,
}

/// Load settings from a `.toml` or `.json` file
pub fn load_settings(path: &Path) -> Result<PathsConfig, SchemaError> {
    let content = std::fs::read_to_string(path).map_err(|e| SchemaError::IoError(e.to_string()))?;

    let config = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_settings_json(&content)?,
        Some("toml") => parse_settings_toml(&content)?,
        other => {
            return Err(SchemaError::ParseError(format!(
                "Unsupported settings file extension: {:?}",
                other
            )))
        }
    };

    info!("loaded path settings from {}", path.display());
    Ok(config)
}

/// Parse settings from a TOML string
pub fn parse_settings_toml(source: &str) -> Result<PathsConfig, SchemaError> {
    let config: PathsConfig =
        toml::from_str(source).map_err(|e| SchemaError::ParseError(e.to_string()))?;

    validate_settings(&config.realign)?;

    Ok(config)
}

/// Parse settings from a JSON string
pub fn parse_settings_json(source: &str) -> Result<PathsConfig, SchemaError> {
    let config: PathsConfig =
        serde_json::from_str(source).map_err(|e| SchemaError::ParseError(e.to_string()))?;

    validate_settings(&config.realign)?;

    Ok(config)
}

/// Save settings as TOML
pub fn save_settings(config: &PathsConfig, path: &Path) -> Result<(), SchemaError> {
    let content =
        toml::to_string_pretty(config).map_err(|e| SchemaError::ParseError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| SchemaError::IoError(e.to_string()))?;

    Ok(())
}
