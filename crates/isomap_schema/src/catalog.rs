//! Catalog export for content tooling
//!
//! Tools that draw tile sheets or author maps outside of Rust need the same
//! names, indices, family membership and rotation variants the path system
//! uses. This module flattens the compiled-in tables into serializable
//! records.

use crate::SchemaError;
use isomap_core::{all_tiles, rotation_entry, EntityKind, TileIndex};
use isomap_paths::{classify_path, family_of, PathVariant, TerrainFamily};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One catalog tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileRecord {
    pub name: String,
    pub index: TileIndex,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<TerrainFamily>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_variant: Option<PathVariant>,
    /// Variants at 0, 90, 180 and 270 degrees, for oriented tiles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotations: Option<[TileIndex; 4]>,
}

impl TileRecord {
    fn from_tile(name: &str, tile: TileIndex) -> Self {
        Self {
            name: name.to_string(),
            index: tile,
            family: family_of(tile),
            path_variant: classify_path(tile).map(|(_, variant)| variant),
            rotations: rotation_entry(tile),
        }
    }
}

/// One placeable entity kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub name: String,
    pub id: u32,
    pub blocking: bool,
}

/// Flattened catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogExport {
    pub tiles: Vec<TileRecord>,
    pub entities: Vec<EntityRecord>,
}

impl CatalogExport {
    /// Find a tile record by name
    pub fn tile(&self, name: &str) -> Option<&TileRecord> {
        self.tiles.iter().find(|record| record.name == name)
    }
}

/// Build the export from the compiled-in tables
pub fn catalog_records() -> CatalogExport {
    let tiles = all_tiles()
        .filter_map(|tile| tile.name().map(|name| TileRecord::from_tile(name, tile)))
        .collect();

    let entities = EntityKind::ALL
        .iter()
        .map(|kind| EntityRecord {
            name: kind.name().to_string(),
            id: kind.id(),
            blocking: kind.is_blocking(),
        })
        .collect();

    CatalogExport { tiles, entities }
}

/// Serialize the catalog to pretty JSON
pub fn catalog_to_json() -> Result<String, SchemaError> {
    serde_json::to_string_pretty(&catalog_records())
        .map_err(|e| SchemaError::ParseError(e.to_string()))
}

/// Write the catalog as JSON
pub fn save_catalog(path: &Path) -> Result<(), SchemaError> {
    let content = catalog_to_json()?;
    std::fs::write(path, content).map_err(|e| SchemaError::IoError(e.to_string()))?;
    info!("wrote tile catalog to {}", path.display());
    Ok(())
}

/// Read a previously exported catalog
pub fn load_catalog(path: &Path) -> Result<CatalogExport, SchemaError> {
    let content = std::fs::read_to_string(path).map_err(|e| SchemaError::IoError(e.to_string()))?;
    serde_json::from_str(&content).map_err(|e| SchemaError::ParseError(e.to_string()))
}
