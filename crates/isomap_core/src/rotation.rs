//! Rotation table for orientation-dependent tiles
//!
//! Rotating the map by a quarter turn (counterclockwise) moves every F edge
//! to G, G to T, T to R and R to F. Tiles whose sprite depends on orientation
//! are listed here as quarter-turn cycles; everything else is rotation
//! invariant.

use crate::tile::{tiles::*, TileIndex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// A rotation of the whole map, in counterclockwise quarter turns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    /// Number of counterclockwise quarter turns (0-3)
    pub fn quarter_turns(&self) -> usize {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 1,
            Rotation::Deg180 => 2,
            Rotation::Deg270 => 3,
        }
    }

    /// Rotation for any number of quarter turns (wraps modulo 4)
    pub fn from_quarter_turns(turns: usize) -> Self {
        Self::ALL[turns % 4]
    }

    /// Compose two rotations
    pub fn then(self, other: Rotation) -> Self {
        Self::from_quarter_turns(self.quarter_turns() + other.quarter_turns())
    }

    /// The rotation that undoes this one
    pub fn inverse(self) -> Self {
        Self::from_quarter_turns(4 - self.quarter_turns())
    }
}

/// Quarter-turn cycles: each row lists a tile followed by its 90°, 180° and
/// 270° counterclockwise rotations
pub static ROTATION_CYCLES: &[[TileIndex; 4]] = &[
    [PATH_GRASS_FT, PATH_GRASS_GR, PATH_GRASS_FT, PATH_GRASS_GR],
    [PATH_GRASS_FG, PATH_GRASS_GT, PATH_GRASS_TR, PATH_GRASS_RF],
    [PATH_GRASS_FGT, PATH_GRASS_GTR, PATH_GRASS_TRF, PATH_GRASS_RFG],
    [HALF_PATH_GRASS_FT, HALF_PATH_GRASS_GR, HALF_PATH_GRASS_FT, HALF_PATH_GRASS_GR],
    [HALF_PATH_GRASS_FG, HALF_PATH_GRASS_GT, HALF_PATH_GRASS_TR, HALF_PATH_GRASS_RF],
    [HALF_PATH_GRASS_FGT, HALF_PATH_GRASS_GTR, HALF_PATH_GRASS_TRF, HALF_PATH_GRASS_RFG],
    [PATH_DRY_FT, PATH_DRY_GR, PATH_DRY_FT, PATH_DRY_GR],
    [PATH_DRY_FG, PATH_DRY_GT, PATH_DRY_TR, PATH_DRY_RF],
    [PATH_DRY_FGT, PATH_DRY_GTR, PATH_DRY_TRF, PATH_DRY_RFG],
    [HALF_PATH_DRY_FT, HALF_PATH_DRY_GR, HALF_PATH_DRY_FT, HALF_PATH_DRY_GR],
    [HALF_PATH_DRY_FG, HALF_PATH_DRY_GT, HALF_PATH_DRY_TR, HALF_PATH_DRY_RF],
    [HALF_PATH_DRY_FGT, HALF_PATH_DRY_GTR, HALF_PATH_DRY_TRF, HALF_PATH_DRY_RFG],
    [SLOPE_GRASS_F, SLOPE_GRASS_G, SLOPE_GRASS_T, SLOPE_GRASS_R],
    [STAIRS_STONE_F, STAIRS_STONE_G, STAIRS_STONE_T, STAIRS_STONE_R],
    [FENCE_FT, FENCE_GR, FENCE_FT, FENCE_GR],
    [BRIDGE_FT, BRIDGE_GR, BRIDGE_FT, BRIDGE_GR],
];

fn rotation_table() -> &'static HashMap<TileIndex, [TileIndex; 4]> {
    static TABLE: OnceLock<HashMap<TileIndex, [TileIndex; 4]>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = HashMap::new();
        for cycle in ROTATION_CYCLES {
            for start in 0..4 {
                let entry = [
                    cycle[start],
                    cycle[(start + 1) % 4],
                    cycle[(start + 2) % 4],
                    cycle[(start + 3) % 4],
                ];
                table.insert(cycle[start], entry);
            }
        }
        table
    })
}

/// Rotation tuple (0°, 90°, 180°, 270°) for an oriented tile.
/// `None` means the tile looks the same from every side.
pub fn rotation_entry(tile: TileIndex) -> Option<[TileIndex; 4]> {
    rotation_table().get(&tile).copied()
}

/// Tile to display after rotating the map by `rotation`
pub fn rotate_tile(tile: TileIndex, rotation: Rotation) -> TileIndex {
    match rotation_entry(tile) {
        Some(entry) => entry[rotation.quarter_turns()],
        None => tile,
    }
}

/// Whether the tile has orientation-dependent variants
pub fn is_oriented(tile: TileIndex) -> bool {
    rotation_table().contains_key(&tile)
}

/// Every tile that appears in the rotation table
pub fn oriented_tiles() -> impl Iterator<Item = TileIndex> {
    rotation_table().keys().copied()
}
