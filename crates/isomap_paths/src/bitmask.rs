//! Adjacency bitmasks and the path variant table
//!
//! A path tile's sprite is chosen from a 4-bit mask of which horizontal
//! neighbors it connects to. The table maps each mask to the canonical grass
//! path tile; other families add their offset.

use isomap_core::{tiles::*, Rotation, TileIndex};

/// Neighbor direction flags for bitmask calculation
pub mod neighbors {
    pub const F: u8 = 0b0001; // f - 1
    pub const G: u8 = 0b0010; // g - 1
    pub const T: u8 = 0b0100; // f + 1
    pub const R: u8 = 0b1000; // g + 1
    pub const ALL: u8 = F | G | T | R;
}

/// Direction flags with their `(df, dg)` step, in bit order
pub const DIRECTIONS: [(u8, i32, i32); 4] = [
    (neighbors::F, -1, 0),
    (neighbors::G, 0, -1),
    (neighbors::T, 1, 0),
    (neighbors::R, 0, 1),
];

/// Mask whose entry stands in for masks without a sprite of their own.
/// An isolated path (mask 0) is drawn as a single G-R segment.
pub const FALLBACK_BITMASK: u8 = neighbors::G;

/// Canonical grass path tile for every adjacency bitmask.
/// Mask 0 has no dedicated sprite.
pub const PATH_VARIANT_TABLE: [Option<TileIndex>; 16] = [
    None,                  // 0b0000
    Some(PATH_GRASS_FT),   // 0b0001 F
    Some(PATH_GRASS_GR),   // 0b0010 G
    Some(PATH_GRASS_FG),   // 0b0011 F G
    Some(PATH_GRASS_FT),   // 0b0100 T
    Some(PATH_GRASS_FT),   // 0b0101 F T
    Some(PATH_GRASS_GT),   // 0b0110 G T
    Some(PATH_GRASS_FGT),  // 0b0111 F G T
    Some(PATH_GRASS_GR),   // 0b1000 R
    Some(PATH_GRASS_RF),   // 0b1001 F R
    Some(PATH_GRASS_GR),   // 0b1010 G R
    Some(PATH_GRASS_RFG),  // 0b1011 F G R
    Some(PATH_GRASS_TR),   // 0b1100 T R
    Some(PATH_GRASS_TRF),  // 0b1101 F T R
    Some(PATH_GRASS_GTR),  // 0b1110 G T R
    Some(PATH_GRASS_FGTR), // 0b1111
];

/// Tile stored under [`FALLBACK_BITMASK`], checked at compile time
const FALLBACK_TILE: TileIndex = match PATH_VARIANT_TABLE[FALLBACK_BITMASK as usize] {
    Some(tile) => tile,
    None => panic!("fallback bitmask has no entry in PATH_VARIANT_TABLE"),
};

/// Path tile for an adjacency bitmask in the family at `family_offset`.
///
/// Masks without an entry (0, or anything above 15) use the
/// [`FALLBACK_BITMASK`] entry.
pub fn resolve_variant(bitmask: u8, family_offset: u32) -> TileIndex {
    let base = PATH_VARIANT_TABLE
        .get(bitmask as usize)
        .copied()
        .flatten()
        .unwrap_or(FALLBACK_TILE);
    base.offset(family_offset)
}

/// Build a bitmask from `[F, G, T, R]` connection flags
pub fn bitmask_from_flags(connected: [bool; 4]) -> u8 {
    DIRECTIONS
        .iter()
        .zip(connected)
        .filter(|(_, is_connected)| *is_connected)
        .fold(0, |mask, ((flag, _, _), _)| mask | flag)
}

/// Calculate the neighbor bitmask for a cell
pub fn calculate_bitmask<F>(f: i32, g: i32, is_connected: F) -> u8
where
    F: Fn(i32, i32) -> bool,
{
    let mut bitmask = 0u8;
    for (flag, df, dg) in DIRECTIONS {
        if is_connected(f + df, g + dg) {
            bitmask |= flag;
        }
    }
    bitmask
}

/// Rotate a bitmask with the map: each quarter turn moves F→G→T→R→F
pub fn rotate_bitmask(bitmask: u8, rotation: Rotation) -> u8 {
    let mask = bitmask & neighbors::ALL;
    let turns = rotation.quarter_turns() as u32;
    ((mask << turns) | (mask >> (4 - turns))) & neighbors::ALL
}
