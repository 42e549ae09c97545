//! Terrain families and the tile classifier
//!
//! A terrain family groups the plain surface tiles a path can be painted on
//! with the eleven path variants drawn for that surface. Membership is an
//! explicit set test against catalog constants, so extending the catalog
//! never silently pulls new tiles into a family.

use isomap_core::{tiles::*, TileIndex};
use serde::{Deserialize, Serialize};

/// Surface a path is drawn on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerrainFamily {
    Grass,
    HalfGrass,
    Dry,
    HalfDry,
}

impl TerrainFamily {
    pub const ALL: [TerrainFamily; 4] = [
        TerrainFamily::Grass,
        TerrainFamily::HalfGrass,
        TerrainFamily::Dry,
        TerrainFamily::HalfDry,
    ];

    /// Offset from a grass path variant to the same variant in this family
    pub fn offset(&self) -> u32 {
        match self {
            TerrainFamily::Grass => 0,
            TerrainFamily::HalfGrass => 11,
            TerrainFamily::Dry => 22,
            TerrainFamily::HalfDry => 33,
        }
    }

    /// Plain (non-path) surface tiles of this family
    pub fn base_tiles(&self) -> &'static [TileIndex] {
        match self {
            TerrainFamily::Grass => &[GRASS, DIRT],
            TerrainFamily::HalfGrass => &[HALF_GRASS, HALF_DIRT],
            TerrainFamily::Dry => &[DRY, DRY_DIRT],
            TerrainFamily::HalfDry => &[HALF_DRY, HALF_DRY_DIRT],
        }
    }

    /// The path tile drawn for `variant` on this surface
    pub fn path_tile(&self, variant: PathVariant) -> TileIndex {
        variant.grass_tile().offset(self.offset())
    }

    /// All eleven path tiles of this family
    pub fn path_tiles(&self) -> impl Iterator<Item = TileIndex> {
        let family = *self;
        PathVariant::ALL.into_iter().map(move |v| family.path_tile(v))
    }

    /// Which path variant `tile` is, if it belongs to this family's path set
    pub fn path_variant(&self, tile: TileIndex) -> Option<PathVariant> {
        PathVariant::ALL
            .into_iter()
            .find(|&v| self.path_tile(v) == tile)
    }

    pub fn is_half_height(&self) -> bool {
        matches!(self, TerrainFamily::HalfGrass | TerrainFamily::HalfDry)
    }

    pub fn name(&self) -> &'static str {
        match self {
            TerrainFamily::Grass => "grass",
            TerrainFamily::HalfGrass => "half_grass",
            TerrainFamily::Dry => "dry",
            TerrainFamily::HalfDry => "half_dry",
        }
    }
}

/// Connectivity pattern of a path sprite, named by the edges it reaches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathVariant {
    Ft,
    Gr,
    Fg,
    Gt,
    Tr,
    Rf,
    Fgt,
    Gtr,
    Trf,
    Rfg,
    Fgtr,
}

impl PathVariant {
    /// Variants in catalog order
    pub const ALL: [PathVariant; 11] = [
        PathVariant::Ft,
        PathVariant::Gr,
        PathVariant::Fg,
        PathVariant::Gt,
        PathVariant::Tr,
        PathVariant::Rf,
        PathVariant::Fgt,
        PathVariant::Gtr,
        PathVariant::Trf,
        PathVariant::Rfg,
        PathVariant::Fgtr,
    ];

    /// Canonical (grass) tile of this variant
    pub fn grass_tile(&self) -> TileIndex {
        match self {
            PathVariant::Ft => PATH_GRASS_FT,
            PathVariant::Gr => PATH_GRASS_GR,
            PathVariant::Fg => PATH_GRASS_FG,
            PathVariant::Gt => PATH_GRASS_GT,
            PathVariant::Tr => PATH_GRASS_TR,
            PathVariant::Rf => PATH_GRASS_RF,
            PathVariant::Fgt => PATH_GRASS_FGT,
            PathVariant::Gtr => PATH_GRASS_GTR,
            PathVariant::Trf => PATH_GRASS_TRF,
            PathVariant::Rfg => PATH_GRASS_RFG,
            PathVariant::Fgtr => PATH_GRASS_FGTR,
        }
    }

    /// Edges drawn by the sprite, as an adjacency bitmask
    pub fn edges(&self) -> u8 {
        use crate::bitmask::neighbors::{F, G, R, T};
        match self {
            PathVariant::Ft => F | T,
            PathVariant::Gr => G | R,
            PathVariant::Fg => F | G,
            PathVariant::Gt => G | T,
            PathVariant::Tr => T | R,
            PathVariant::Rf => R | F,
            PathVariant::Fgt => F | G | T,
            PathVariant::Gtr => G | T | R,
            PathVariant::Trf => T | R | F,
            PathVariant::Rfg => R | F | G,
            PathVariant::Fgtr => F | G | T | R,
        }
    }
}

/// Whether `tile` is a plain surface or path tile of `family`
pub fn is_of_family(tile: TileIndex, family: TerrainFamily) -> bool {
    family.base_tiles().contains(&tile) || is_path_of_family(tile, family)
}

/// Whether `tile` is one of the path variants of `family`
pub fn is_path_of_family(tile: TileIndex, family: TerrainFamily) -> bool {
    family.path_variant(tile).is_some()
}

/// The family a tile belongs to, counting plain surfaces
pub fn family_of(tile: TileIndex) -> Option<TerrainFamily> {
    TerrainFamily::ALL
        .into_iter()
        .find(|&family| is_of_family(tile, family))
}

/// The family of a path tile; `None` for anything that is not a path
pub fn path_family_of(tile: TileIndex) -> Option<TerrainFamily> {
    TerrainFamily::ALL
        .into_iter()
        .find(|&family| is_path_of_family(tile, family))
}

/// Family and variant of a path tile
pub fn classify_path(tile: TileIndex) -> Option<(TerrainFamily, PathVariant)> {
    TerrainFamily::ALL
        .into_iter()
        .find_map(|family| family.path_variant(tile).map(|variant| (family, variant)))
}

pub fn is_grass(tile: TileIndex) -> bool {
    is_of_family(tile, TerrainFamily::Grass)
}

pub fn is_half_grass(tile: TileIndex) -> bool {
    is_of_family(tile, TerrainFamily::HalfGrass)
}

pub fn is_dry(tile: TileIndex) -> bool {
    is_of_family(tile, TerrainFamily::Dry)
}

pub fn is_half_dry(tile: TileIndex) -> bool {
    is_of_family(tile, TerrainFamily::HalfDry)
}

pub fn is_grass_path(tile: TileIndex) -> bool {
    is_path_of_family(tile, TerrainFamily::Grass)
}

pub fn is_half_grass_path(tile: TileIndex) -> bool {
    is_path_of_family(tile, TerrainFamily::HalfGrass)
}

pub fn is_dry_path(tile: TileIndex) -> bool {
    is_path_of_family(tile, TerrainFamily::Dry)
}

pub fn is_half_dry_path(tile: TileIndex) -> bool {
    is_path_of_family(tile, TerrainFamily::HalfDry)
}

/// Collapse linked surfaces to the tile a path is resolved against.
///
/// Water covers continue the dry surface underneath, swamp covers continue
/// grass. Lava and ice collapse onto basalt and snow, which carry no paths.
pub fn normalize_surface(tile: TileIndex) -> TileIndex {
    match tile {
        LAVA | BASALT => BASALT,
        ICE | SNOW => SNOW,
        WATER | WATER_SHALLOW => DRY,
        HALF_WATER | HALF_WATER_SHALLOW => HALF_DRY,
        SWAMP | SWAMP_REEDS => GRASS,
        HALF_SWAMP | HALF_SWAMP_REEDS => HALF_GRASS,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isomap_core::all_tiles;

    #[test]
    fn test_family_exclusivity() {
        for tile in all_tiles() {
            let count = [is_grass, is_half_grass, is_dry, is_half_dry]
                .iter()
                .filter(|pred| pred(tile))
                .count();
            assert!(count <= 1, "{} is in {} families", tile, count);
        }
    }

    #[test]
    fn test_every_path_tile_has_exactly_one_family() {
        let mut paths = 0;
        for tile in all_tiles() {
            let families = TerrainFamily::ALL
                .iter()
                .filter(|&&family| is_path_of_family(tile, family))
                .count();
            assert!(families <= 1);
            paths += families;
        }
        assert_eq!(paths, 44);
    }

    #[test]
    fn test_base_tiles_are_family_but_not_path() {
        assert!(is_grass(GRASS));
        assert!(is_grass(DIRT));
        assert!(!is_grass_path(GRASS));
        assert!(is_half_dry(HALF_DRY_DIRT));
        assert!(!is_half_dry_path(HALF_DRY_DIRT));
    }

    #[test]
    fn test_path_tiles_match_their_family_only() {
        assert!(is_grass_path(PATH_GRASS_FG));
        assert!(is_grass(PATH_GRASS_FG));
        assert!(!is_half_grass_path(PATH_GRASS_FG));
        assert!(is_half_grass_path(HALF_PATH_GRASS_TRF));
        assert!(is_dry_path(PATH_DRY_FGTR));
        assert!(is_half_dry_path(HALF_PATH_DRY_FT));
        assert_eq!(
            classify_path(HALF_PATH_DRY_RFG),
            Some((TerrainFamily::HalfDry, PathVariant::Rfg))
        );
    }

    #[test]
    fn test_unknown_indices_classify_as_nothing() {
        for tile in [
            TileIndex::TOMBSTONE,
            TileIndex::UNKNOWN,
            LAVA,
            STONE,
            SLOPE_GRASS_F,
            TileIndex(70_000),
            TileIndex(u32::MAX),
        ] {
            assert_eq!(family_of(tile), None, "{}", tile);
            assert_eq!(path_family_of(tile), None, "{}", tile);
        }
    }

    #[test]
    fn test_path_tiles_follow_offset_layout() {
        for family in TerrainFamily::ALL {
            for variant in PathVariant::ALL {
                assert_eq!(
                    family.path_tile(variant).raw(),
                    variant.grass_tile().raw() + family.offset()
                );
            }
            assert_eq!(family.path_tiles().count(), 11);
        }
    }

    #[test]
    fn test_variant_edges_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for variant in PathVariant::ALL {
            assert!(variant.edges().count_ones() >= 2);
            assert!(seen.insert(variant.edges()));
        }
    }

    #[test]
    fn test_normalize_surface() {
        assert_eq!(normalize_surface(LAVA), BASALT);
        assert_eq!(normalize_surface(BASALT), BASALT);
        assert_eq!(normalize_surface(ICE), SNOW);
        assert_eq!(normalize_surface(WATER_SHALLOW), DRY);
        assert_eq!(normalize_surface(HALF_WATER), HALF_DRY);
        assert_eq!(normalize_surface(SWAMP_REEDS), GRASS);
        assert_eq!(normalize_surface(HALF_SWAMP), HALF_GRASS);
        assert_eq!(normalize_surface(PATH_DRY_GT), PATH_DRY_GT);
    }
}
