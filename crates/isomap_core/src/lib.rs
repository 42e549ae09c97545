//! Core data structures for isomap
//!
//! This crate provides the fixed data the path system works on:
//! - `TileIndex` and the `tiles` catalog - every visual tile variant, with name lookup
//! - `EntityKind` - placeable entity kinds, with name lookup
//! - `Rotation` and the rotation table - quarter-turn variants of oriented tiles
//! - `Grid` - the 3D tile grid owned by the map editor

mod entity;
mod grid;
mod rotation;
mod tile;

pub use entity::EntityKind;
pub use grid::Grid;
pub use rotation::{
    is_oriented, oriented_tiles, rotate_tile, rotation_entry, Rotation, ROTATION_CYCLES,
};
pub use tile::{
    all_tiles, is_known_tile, tile_by_name, tile_name, tiles, TileIndex, EMPTY_CELL,
    PATH_VARIANT_COUNT, TILE_NAMES,
};
