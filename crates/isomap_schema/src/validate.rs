//! Catalog and settings validation

use crate::SchemaError;
use isomap_core::{
    all_tiles, is_known_tile, oriented_tiles, rotate_tile, rotation_entry, tile_by_name, Rotation,
    TileIndex, PATH_VARIANT_COUNT, TILE_NAMES,
};
use isomap_paths::{
    family_of, path_family_of, resolve_variant, PathVariant, RealignSettings, TerrainFamily,
};
use std::collections::HashSet;

/// Largest accepted `height_tolerance`
pub const MAX_HEIGHT_TOLERANCE: u32 = 16;

/// Validate realignment settings
pub fn validate_settings(settings: &RealignSettings) -> Result<(), SchemaError> {
    if settings.height_tolerance > MAX_HEIGHT_TOLERANCE {
        return Err(SchemaError::ValidationError(format!(
            "height_tolerance {} exceeds the maximum of {}",
            settings.height_tolerance, MAX_HEIGHT_TOLERANCE
        )));
    }
    Ok(())
}

/// Check that the compiled-in catalog is internally consistent
pub fn validate_catalog() -> Result<(), SchemaError> {
    validate_names()?;
    validate_sentinels()?;
    validate_families()?;
    validate_variant_table()?;
    validate_rotations()?;
    Ok(())
}

/// Names and indices are unique and names resolve back to their index
fn validate_names() -> Result<(), SchemaError> {
    let mut names = HashSet::new();
    let mut indices = HashSet::new();
    for &(name, tile) in TILE_NAMES {
        if !names.insert(name) {
            return Err(SchemaError::ValidationError(format!(
                "Duplicate tile name '{}'",
                name
            )));
        }
        if !indices.insert(tile) {
            return Err(SchemaError::ValidationError(format!(
                "Duplicate tile index {} ('{}')",
                tile.raw(),
                name
            )));
        }
        if tile_by_name(name) != Some(tile) {
            return Err(SchemaError::ValidationError(format!(
                "Tile name '{}' does not resolve to index {}",
                name,
                tile.raw()
            )));
        }
    }
    Ok(())
}

/// Sentinels are cataloged and excluded from path and rotation logic
fn validate_sentinels() -> Result<(), SchemaError> {
    for sentinel in [TileIndex::TOMBSTONE, TileIndex::UNKNOWN] {
        if !is_known_tile(sentinel) {
            return Err(SchemaError::ValidationError(format!(
                "Sentinel {} is missing from the catalog",
                sentinel.raw()
            )));
        }
        if family_of(sentinel).is_some() || rotation_entry(sentinel).is_some() {
            return Err(SchemaError::ValidationError(format!(
                "Sentinel {} takes part in path or rotation logic",
                sentinel
            )));
        }
    }
    Ok(())
}

/// Every tile is in at most one family and path blocks follow the offset layout
fn validate_families() -> Result<(), SchemaError> {
    for tile in all_tiles() {
        let memberships = TerrainFamily::ALL
            .iter()
            .filter(|family| isomap_paths::is_of_family(tile, **family))
            .count();
        if memberships > 1 {
            return Err(SchemaError::ValidationError(format!(
                "Tile {} belongs to {} terrain families",
                tile, memberships
            )));
        }
    }

    for family in TerrainFamily::ALL {
        let tiles: Vec<TileIndex> = family.path_tiles().collect();
        if tiles.len() as u32 != PATH_VARIANT_COUNT {
            return Err(SchemaError::ValidationError(format!(
                "Family '{}' has {} path variants",
                family.name(),
                tiles.len()
            )));
        }
        for (variant, tile) in PathVariant::ALL.iter().zip(&tiles) {
            if !is_known_tile(*tile) {
                return Err(SchemaError::ValidationError(format!(
                    "Path variant {:?} of '{}' is not in the catalog (index {})",
                    variant,
                    family.name(),
                    tile.raw()
                )));
            }
            if path_family_of(*tile) != Some(family) {
                return Err(SchemaError::ValidationError(format!(
                    "Path tile {} is not classified as '{}'",
                    tile,
                    family.name()
                )));
            }
        }
        for base in family.base_tiles() {
            if path_family_of(*base).is_some() {
                return Err(SchemaError::ValidationError(format!(
                    "Base tile {} of '{}' is classified as a path",
                    base,
                    family.name()
                )));
            }
        }
    }
    Ok(())
}

/// Every bitmask resolves to a cataloged path tile of the requested family
fn validate_variant_table() -> Result<(), SchemaError> {
    for family in TerrainFamily::ALL {
        for bitmask in 0..16u8 {
            let tile = resolve_variant(bitmask, family.offset());
            if path_family_of(tile) != Some(family) {
                return Err(SchemaError::ValidationError(format!(
                    "Bitmask {:#06b} resolves to {} outside '{}'",
                    bitmask,
                    tile,
                    family.name()
                )));
            }
        }
    }
    Ok(())
}

/// Rotation entries start at their own tile, name cataloged tiles and close
/// after four quarter turns
fn validate_rotations() -> Result<(), SchemaError> {
    for tile in oriented_tiles() {
        let Some(entry) = rotation_entry(tile) else {
            continue;
        };
        if entry[0] != tile {
            return Err(SchemaError::ValidationError(format!(
                "Rotation entry of {} starts at {}",
                tile, entry[0]
            )));
        }
        if let Some(unknown) = entry.iter().find(|t| !is_known_tile(**t)) {
            return Err(SchemaError::ValidationError(format!(
                "Rotation entry of {} names unknown tile {}",
                tile,
                unknown.raw()
            )));
        }
        let mut current = tile;
        for _ in 0..4 {
            current = rotate_tile(current, Rotation::Deg90);
        }
        if current != tile {
            return Err(SchemaError::ValidationError(format!(
                "Rotating {} four times yields {}",
                tile, current
            )));
        }
    }
    Ok(())
}
