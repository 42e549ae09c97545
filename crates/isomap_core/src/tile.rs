//! Tile indices and the static tile catalog
//!
//! Every visual tile variant the renderer knows about has a fixed
//! [`TileIndex`]. The constants in [`tiles`] are the catalog; the name table
//! maps the snake_case names used by content tooling onto those indices.
//!
//! The four path blocks are laid out so that the half-grass, dry and half-dry
//! variants sit at a fixed offset (11, 22, 33) from the matching grass path
//! variant. Path resolution depends on this layout.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// Raw cell value marking "no tile present" at the `i32` grid boundary
pub const EMPTY_CELL: i32 = -1;

/// Identifier of one visual tile variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileIndex(pub u32);

impl TileIndex {
    /// Reserved marker for a removed tile
    pub const TOMBSTONE: Self = TileIndex(0);
    /// Reserved marker for a tile the catalog does not know
    pub const UNKNOWN: Self = TileIndex(1);

    /// Raw numeric value
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Whether this is one of the two reserved sentinel values
    pub const fn is_sentinel(self) -> bool {
        self.0 == Self::TOMBSTONE.0 || self.0 == Self::UNKNOWN.0
    }

    /// Shift the index by a family offset
    pub const fn offset(self, by: u32) -> Self {
        TileIndex(self.0 + by)
    }

    /// Catalog name, if this index is a known tile
    pub fn name(self) -> Option<&'static str> {
        tile_name(self)
    }
}

impl fmt::Display for TileIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match tile_name(*self) {
            Some(name) => write!(f, "{}#{}", name, self.0),
            None => write!(f, "#{}", self.0),
        }
    }
}

impl From<u32> for TileIndex {
    fn from(raw: u32) -> Self {
        TileIndex(raw)
    }
}

/// Catalog constants
pub mod tiles {
    use super::TileIndex;

    pub const TOMBSTONE: TileIndex = TileIndex::TOMBSTONE;
    pub const UNKNOWN: TileIndex = TileIndex::UNKNOWN;

    // Plain surfaces
    pub const GRASS: TileIndex = TileIndex(2);
    pub const DIRT: TileIndex = TileIndex(3);
    pub const HALF_GRASS: TileIndex = TileIndex(4);
    pub const HALF_DIRT: TileIndex = TileIndex(5);
    pub const DRY: TileIndex = TileIndex(6);
    pub const DRY_DIRT: TileIndex = TileIndex(7);
    pub const HALF_DRY: TileIndex = TileIndex(8);
    pub const HALF_DRY_DIRT: TileIndex = TileIndex(9);
    pub const BASALT: TileIndex = TileIndex(10);
    pub const LAVA: TileIndex = TileIndex(11);
    pub const SNOW: TileIndex = TileIndex(12);
    pub const ICE: TileIndex = TileIndex(13);
    pub const STONE: TileIndex = TileIndex(14);
    pub const HALF_STONE: TileIndex = TileIndex(15);
    pub const SAND: TileIndex = TileIndex(16);
    pub const HALF_SAND: TileIndex = TileIndex(17);

    // Cover tiles
    pub const WATER: TileIndex = TileIndex(18);
    pub const WATER_SHALLOW: TileIndex = TileIndex(19);
    pub const HALF_WATER: TileIndex = TileIndex(20);
    pub const HALF_WATER_SHALLOW: TileIndex = TileIndex(21);
    pub const SWAMP: TileIndex = TileIndex(22);
    pub const SWAMP_REEDS: TileIndex = TileIndex(23);
    pub const HALF_SWAMP: TileIndex = TileIndex(24);
    pub const HALF_SWAMP_REEDS: TileIndex = TileIndex(25);

    // Grass paths. Every other path block mirrors this one.
    pub const PATH_GRASS_FT: TileIndex = TileIndex(26);
    pub const PATH_GRASS_GR: TileIndex = TileIndex(27);
    pub const PATH_GRASS_FG: TileIndex = TileIndex(28);
    pub const PATH_GRASS_GT: TileIndex = TileIndex(29);
    pub const PATH_GRASS_TR: TileIndex = TileIndex(30);
    pub const PATH_GRASS_RF: TileIndex = TileIndex(31);
    pub const PATH_GRASS_FGT: TileIndex = TileIndex(32);
    pub const PATH_GRASS_GTR: TileIndex = TileIndex(33);
    pub const PATH_GRASS_TRF: TileIndex = TileIndex(34);
    pub const PATH_GRASS_RFG: TileIndex = TileIndex(35);
    pub const PATH_GRASS_FGTR: TileIndex = TileIndex(36);

    pub const HALF_PATH_GRASS_FT: TileIndex = TileIndex(37);
    pub const HALF_PATH_GRASS_GR: TileIndex = TileIndex(38);
    pub const HALF_PATH_GRASS_FG: TileIndex = TileIndex(39);
    pub const HALF_PATH_GRASS_GT: TileIndex = TileIndex(40);
    pub const HALF_PATH_GRASS_TR: TileIndex = TileIndex(41);
    pub const HALF_PATH_GRASS_RF: TileIndex = TileIndex(42);
    pub const HALF_PATH_GRASS_FGT: TileIndex = TileIndex(43);
    pub const HALF_PATH_GRASS_GTR: TileIndex = TileIndex(44);
    pub const HALF_PATH_GRASS_TRF: TileIndex = TileIndex(45);
    pub const HALF_PATH_GRASS_RFG: TileIndex = TileIndex(46);
    pub const HALF_PATH_GRASS_FGTR: TileIndex = TileIndex(47);

    pub const PATH_DRY_FT: TileIndex = TileIndex(48);
    pub const PATH_DRY_GR: TileIndex = TileIndex(49);
    pub const PATH_DRY_FG: TileIndex = TileIndex(50);
    pub const PATH_DRY_GT: TileIndex = TileIndex(51);
    pub const PATH_DRY_TR: TileIndex = TileIndex(52);
    pub const PATH_DRY_RF: TileIndex = TileIndex(53);
    pub const PATH_DRY_FGT: TileIndex = TileIndex(54);
    pub const PATH_DRY_GTR: TileIndex = TileIndex(55);
    pub const PATH_DRY_TRF: TileIndex = TileIndex(56);
    pub const PATH_DRY_RFG: TileIndex = TileIndex(57);
    pub const PATH_DRY_FGTR: TileIndex = TileIndex(58);

    pub const HALF_PATH_DRY_FT: TileIndex = TileIndex(59);
    pub const HALF_PATH_DRY_GR: TileIndex = TileIndex(60);
    pub const HALF_PATH_DRY_FG: TileIndex = TileIndex(61);
    pub const HALF_PATH_DRY_GT: TileIndex = TileIndex(62);
    pub const HALF_PATH_DRY_TR: TileIndex = TileIndex(63);
    pub const HALF_PATH_DRY_RF: TileIndex = TileIndex(64);
    pub const HALF_PATH_DRY_FGT: TileIndex = TileIndex(65);
    pub const HALF_PATH_DRY_GTR: TileIndex = TileIndex(66);
    pub const HALF_PATH_DRY_TRF: TileIndex = TileIndex(67);
    pub const HALF_PATH_DRY_RFG: TileIndex = TileIndex(68);
    pub const HALF_PATH_DRY_FGTR: TileIndex = TileIndex(69);

    // Oriented props
    pub const SLOPE_GRASS_F: TileIndex = TileIndex(70);
    pub const SLOPE_GRASS_G: TileIndex = TileIndex(71);
    pub const SLOPE_GRASS_T: TileIndex = TileIndex(72);
    pub const SLOPE_GRASS_R: TileIndex = TileIndex(73);
    pub const STAIRS_STONE_F: TileIndex = TileIndex(74);
    pub const STAIRS_STONE_G: TileIndex = TileIndex(75);
    pub const STAIRS_STONE_T: TileIndex = TileIndex(76);
    pub const STAIRS_STONE_R: TileIndex = TileIndex(77);
    pub const FENCE_FT: TileIndex = TileIndex(78);
    pub const FENCE_GR: TileIndex = TileIndex(79);
    pub const BRIDGE_FT: TileIndex = TileIndex(80);
    pub const BRIDGE_GR: TileIndex = TileIndex(81);
}

/// Number of path variants per terrain family
pub const PATH_VARIANT_COUNT: u32 = 11;

use tiles::*;

/// Name table for every catalog tile, in index order
pub static TILE_NAMES: &[(&str, TileIndex)] = &[
    ("tombstone", TOMBSTONE),
    ("unknown", UNKNOWN),
    ("grass", GRASS),
    ("dirt", DIRT),
    ("half_grass", HALF_GRASS),
    ("half_dirt", HALF_DIRT),
    ("dry", DRY),
    ("dry_dirt", DRY_DIRT),
    ("half_dry", HALF_DRY),
    ("half_dry_dirt", HALF_DRY_DIRT),
    ("basalt", BASALT),
    ("lava", LAVA),
    ("snow", SNOW),
    ("ice", ICE),
    ("stone", STONE),
    ("half_stone", HALF_STONE),
    ("sand", SAND),
    ("half_sand", HALF_SAND),
    ("water", WATER),
    ("water_shallow", WATER_SHALLOW),
    ("half_water", HALF_WATER),
    ("half_water_shallow", HALF_WATER_SHALLOW),
    ("swamp", SWAMP),
    ("swamp_reeds", SWAMP_REEDS),
    ("half_swamp", HALF_SWAMP),
    ("half_swamp_reeds", HALF_SWAMP_REEDS),
    ("path_grass_ft", PATH_GRASS_FT),
    ("path_grass_gr", PATH_GRASS_GR),
    ("path_grass_fg", PATH_GRASS_FG),
    ("path_grass_gt", PATH_GRASS_GT),
    ("path_grass_tr", PATH_GRASS_TR),
    ("path_grass_rf", PATH_GRASS_RF),
    ("path_grass_fgt", PATH_GRASS_FGT),
    ("path_grass_gtr", PATH_GRASS_GTR),
    ("path_grass_trf", PATH_GRASS_TRF),
    ("path_grass_rfg", PATH_GRASS_RFG),
    ("path_grass_fgtr", PATH_GRASS_FGTR),
    ("half_path_grass_ft", HALF_PATH_GRASS_FT),
    ("half_path_grass_gr", HALF_PATH_GRASS_GR),
    ("half_path_grass_fg", HALF_PATH_GRASS_FG),
    ("half_path_grass_gt", HALF_PATH_GRASS_GT),
    ("half_path_grass_tr", HALF_PATH_GRASS_TR),
    ("half_path_grass_rf", HALF_PATH_GRASS_RF),
    ("half_path_grass_fgt", HALF_PATH_GRASS_FGT),
    ("half_path_grass_gtr", HALF_PATH_GRASS_GTR),
    ("half_path_grass_trf", HALF_PATH_GRASS_TRF),
    ("half_path_grass_rfg", HALF_PATH_GRASS_RFG),
    ("half_path_grass_fgtr", HALF_PATH_GRASS_FGTR),
    ("path_dry_ft", PATH_DRY_FT),
    ("path_dry_gr", PATH_DRY_GR),
    ("path_dry_fg", PATH_DRY_FG),
    ("path_dry_gt", PATH_DRY_GT),
    ("path_dry_tr", PATH_DRY_TR),
    ("path_dry_rf", PATH_DRY_RF),
    ("path_dry_fgt", PATH_DRY_FGT),
    ("path_dry_gtr", PATH_DRY_GTR),
    ("path_dry_trf", PATH_DRY_TRF),
    ("path_dry_rfg", PATH_DRY_RFG),
    ("path_dry_fgtr", PATH_DRY_FGTR),
    ("half_path_dry_ft", HALF_PATH_DRY_FT),
    ("half_path_dry_gr", HALF_PATH_DRY_GR),
    ("half_path_dry_fg", HALF_PATH_DRY_FG),
    ("half_path_dry_gt", HALF_PATH_DRY_GT),
    ("half_path_dry_tr", HALF_PATH_DRY_TR),
    ("half_path_dry_rf", HALF_PATH_DRY_RF),
    ("half_path_dry_fgt", HALF_PATH_DRY_FGT),
    ("half_path_dry_gtr", HALF_PATH_DRY_GTR),
    ("half_path_dry_trf", HALF_PATH_DRY_TRF),
    ("half_path_dry_rfg", HALF_PATH_DRY_RFG),
    ("half_path_dry_fgtr", HALF_PATH_DRY_FGTR),
    ("slope_grass_f", SLOPE_GRASS_F),
    ("slope_grass_g", SLOPE_GRASS_G),
    ("slope_grass_t", SLOPE_GRASS_T),
    ("slope_grass_r", SLOPE_GRASS_R),
    ("stairs_stone_f", STAIRS_STONE_F),
    ("stairs_stone_g", STAIRS_STONE_G),
    ("stairs_stone_t", STAIRS_STONE_T),
    ("stairs_stone_r", STAIRS_STONE_R),
    ("fence_ft", FENCE_FT),
    ("fence_gr", FENCE_GR),
    ("bridge_ft", BRIDGE_FT),
    ("bridge_gr", BRIDGE_GR),
];

fn names_by_tile() -> &'static HashMap<TileIndex, &'static str> {
    static TABLE: OnceLock<HashMap<TileIndex, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| TILE_NAMES.iter().map(|&(name, tile)| (tile, name)).collect())
}

fn tiles_by_name() -> &'static HashMap<&'static str, TileIndex> {
    static TABLE: OnceLock<HashMap<&'static str, TileIndex>> = OnceLock::new();
    TABLE.get_or_init(|| TILE_NAMES.iter().copied().collect())
}

/// Look up a tile by its catalog name
pub fn tile_by_name(name: &str) -> Option<TileIndex> {
    tiles_by_name().get(name).copied()
}

/// Catalog name of a tile
pub fn tile_name(tile: TileIndex) -> Option<&'static str> {
    names_by_tile().get(&tile).copied()
}

/// Whether the catalog contains this index
pub fn is_known_tile(tile: TileIndex) -> bool {
    names_by_tile().contains_key(&tile)
}

/// Every catalog tile, in index order
pub fn all_tiles() -> impl Iterator<Item = TileIndex> {
    TILE_NAMES.iter().map(|&(_, tile)| tile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_and_indices_are_unique() {
        let names: HashSet<_> = TILE_NAMES.iter().map(|(n, _)| *n).collect();
        let indices: HashSet<_> = TILE_NAMES.iter().map(|(_, t)| *t).collect();
        assert_eq!(names.len(), TILE_NAMES.len());
        assert_eq!(indices.len(), TILE_NAMES.len());
    }

    #[test]
    fn test_table_is_dense_and_ordered() {
        for (i, (_, tile)) in TILE_NAMES.iter().enumerate() {
            assert_eq!(tile.raw(), i as u32);
        }
    }

    #[test]
    fn test_name_lookup_round_trip() {
        assert_eq!(tile_by_name("path_grass_fg"), Some(tiles::PATH_GRASS_FG));
        assert_eq!(tile_name(tiles::HALF_PATH_DRY_GR), Some("half_path_dry_gr"));
        assert_eq!(tile_by_name("no_such_tile"), None);
        assert_eq!(tile_name(TileIndex(9999)), None);
    }

    #[test]
    fn test_family_blocks_are_offset_from_grass() {
        assert_eq!(tiles::PATH_GRASS_FT.offset(11), tiles::HALF_PATH_GRASS_FT);
        assert_eq!(tiles::PATH_GRASS_FT.offset(22), tiles::PATH_DRY_FT);
        assert_eq!(tiles::PATH_GRASS_FT.offset(33), tiles::HALF_PATH_DRY_FT);
        assert_eq!(tiles::PATH_GRASS_FGTR.offset(33), tiles::HALF_PATH_DRY_FGTR);
        assert_eq!(
            tiles::PATH_GRASS_FGTR.raw() - tiles::PATH_GRASS_FT.raw() + 1,
            PATH_VARIANT_COUNT
        );
    }

    #[test]
    fn test_sentinels() {
        assert!(TileIndex::TOMBSTONE.is_sentinel());
        assert!(TileIndex::UNKNOWN.is_sentinel());
        assert!(!tiles::GRASS.is_sentinel());
    }

    #[test]
    fn test_display_includes_name() {
        assert_eq!(tiles::GRASS.to_string(), "grass#2");
        assert_eq!(TileIndex(500).to_string(), "#500");
    }

    #[test]
    fn test_serializes_as_plain_number() {
        let json = serde_json::to_string(&tiles::DIRT).unwrap();
        assert_eq!(json, "3");
        let back: TileIndex = serde_json::from_str("3").unwrap();
        assert_eq!(back, tiles::DIRT);
    }
}
