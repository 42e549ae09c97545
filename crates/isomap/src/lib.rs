//! isomap - path tiles for isometric voxel maps
//!
//! Umbrella crate over the isomap workspace:
//! - [`isomap_core`] - tile and entity catalogs, rotation table, the 3D grid
//! - [`isomap_paths`] - family classification, variant resolution, realignment
//! - `isomap_schema` - settings files, catalog export and validation (feature `schema`)
//!
//! # Example
//!
//! ```rust,ignore
//! use isomap::prelude::*;
//!
//! let mut grid = Grid::new(8, 8, 4);
//! grid.fill_layer(0, Some(tiles::GRASS));
//! paint_path(&mut grid, 3, 3, 0, &RealignSettings::default());
//! paint_path(&mut grid, 4, 3, 0, &RealignSettings::default());
//!
//! let turned = rotate_grid(&grid, Rotation::Deg90, &RealignSettings::default());
//! ```

pub use isomap_core;
pub use isomap_paths;
#[cfg(feature = "schema")]
pub use isomap_schema;

pub mod prelude {
    pub use isomap_core::{
        rotate_tile, rotation_entry, tile_by_name, tile_name, tiles, EntityKind, Grid, Rotation,
        TileIndex, EMPTY_CELL,
    };
    pub use isomap_paths::{
        family_of, is_of_family, is_path_of_family, paint_path, path_family_of, realign_grid,
        realign_grid_with, realign_region, resolve_path_variant, resolve_variant, rotate_grid,
        BoundaryHandling, PathVariant, RealignSettings, RealignStats, TerrainFamily,
    };

    #[cfg(feature = "schema")]
    pub use isomap_schema::{load_settings, validate_catalog, PathsConfig, SchemaError};
}
