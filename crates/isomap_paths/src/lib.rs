//! Path tile autotiling for isometric voxel maps
//!
//! This crate keeps connected path tiles visually coherent. Every path tile
//! has eleven pre-drawn variants per terrain family; the variant shown depends
//! on which of the four horizontal neighbors (F, G, T, R) are paths of the
//! same family.
//!
//! # Features
//! - Terrain family classification for grass, half grass, dry and half dry
//! - Adjacency bitmask to path variant lookup with a fixed family offset
//! - Single-cell resolution for interactive painting
//! - Whole-grid realignment tolerant of one-level height steps
//! - Quarter-turn grid rotation through the rotation table
//!
//! # Example
//!
//! ```rust,ignore
//! use isomap_core::{tiles, Grid};
//! use isomap_paths::{realign_grid, resolve_path_variant};
//!
//! // Painting a single tile
//! let tile = resolve_path_variant(
//!     tiles::GRASS,
//!     Some(tiles::PATH_GRASS_GR),
//!     Some(tiles::PATH_GRASS_GR),
//!     Some(tiles::DIRT),
//!     Some(tiles::DIRT),
//! );
//! assert_eq!(tile, tiles::PATH_GRASS_FG);
//!
//! // Normalizing a whole map after a bulk edit
//! let mut grid = Grid::new(16, 16, 4);
//! realign_grid(&mut grid);
//! ```

pub mod bitmask;
pub mod config;
pub mod realign;
pub mod resolve;
pub mod rotate;
pub mod terrain;

// Re-export main types at crate root
pub use bitmask::{
    bitmask_from_flags, calculate_bitmask, neighbors, resolve_variant, rotate_bitmask, DIRECTIONS,
    FALLBACK_BITMASK, PATH_VARIANT_TABLE,
};
pub use config::{BoundaryHandling, RealignSettings};
pub use realign::{realign_grid, realign_grid_with, realign_region, RealignStats};
pub use resolve::{paint_path, resolve_path_variant};
pub use rotate::{rotate_cells, rotate_grid, rotate_position};
pub use terrain::{
    classify_path, family_of, is_dry, is_dry_path, is_grass, is_grass_path, is_half_dry,
    is_half_dry_path, is_half_grass, is_half_grass_path, is_of_family, is_path_of_family,
    normalize_surface, path_family_of, PathVariant, TerrainFamily,
};

// Re-export isomap_core
pub use isomap_core;
