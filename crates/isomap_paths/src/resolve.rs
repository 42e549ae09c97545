//! Single-cell path resolution and path painting

use crate::bitmask::{bitmask_from_flags, resolve_variant, DIRECTIONS};
use crate::config::RealignSettings;
use crate::realign::realign_region;
use crate::terrain::{family_of, is_path_of_family, normalize_surface};
use isomap_core::{Grid, TileIndex};
use log::trace;

/// Tile to display at `center` so its path lines up with same-family path
/// neighbors.
///
/// `center` is first normalized (cover tiles resolve as the surface under
/// them). Tiles outside every terrain family are returned unchanged. Only
/// neighbors that are already path tiles of the same family connect; empty
/// neighbors never do.
pub fn resolve_path_variant(
    center: TileIndex,
    adjacent_f: Option<TileIndex>,
    adjacent_g: Option<TileIndex>,
    adjacent_t: Option<TileIndex>,
    adjacent_r: Option<TileIndex>,
) -> TileIndex {
    let Some(family) = family_of(normalize_surface(center)) else {
        return center;
    };

    let connected = [adjacent_f, adjacent_g, adjacent_t, adjacent_r]
        .map(|neighbor| neighbor.is_some_and(|tile| is_path_of_family(tile, family)));

    resolve_variant(bitmask_from_flags(connected), family.offset())
}

/// Paint a path onto the cell at `(f, g, h)` and fix up its surroundings.
///
/// The cell is resolved against its four same-level neighbors, then the 3×3
/// block of columns around it is realigned so neighbors pick up the new
/// connection. Returns `false` if the cell is empty, out of bounds, or not a
/// surface a path can be drawn on.
pub fn paint_path(grid: &mut Grid, f: i32, g: i32, h: i32, settings: &RealignSettings) -> bool {
    let Some(center) = grid.get(f, g, h) else {
        return false;
    };
    if family_of(normalize_surface(center)).is_none() {
        return false;
    }

    let [n_f, n_g, n_t, n_r] = DIRECTIONS.map(|(_, df, dg)| grid.get(f + df, g + dg, h));
    let painted = resolve_path_variant(center, n_f, n_g, n_t, n_r);
    trace!("paint_path ({}, {}, {}): {} -> {}", f, g, h, center, painted);
    grid.set(f, g, h, Some(painted));

    realign_region(grid, (f - 1, g - 1), (f + 1, g + 1), settings);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use isomap_core::tiles::*;

    #[test]
    fn test_grass_with_two_path_neighbors() {
        let tile = resolve_path_variant(
            GRASS,
            Some(PATH_GRASS_GR),
            Some(PATH_GRASS_GR),
            Some(DIRT),
            Some(DIRT),
        );
        assert_eq!(tile, PATH_GRASS_FG);
    }

    #[test]
    fn test_half_dry_isolated_falls_back_to_gr() {
        let tile = resolve_path_variant(
            HALF_DRY,
            Some(HALF_DRY),
            Some(HALF_DRY),
            Some(HALF_DRY),
            Some(HALF_DRY),
        );
        assert_eq!(tile, HALF_PATH_DRY_GR);
        assert_eq!(tile.raw(), PATH_GRASS_GR.raw() + 33);
    }

    #[test]
    fn test_lava_is_left_unchanged() {
        let tile = resolve_path_variant(
            LAVA,
            Some(PATH_GRASS_FGTR),
            Some(PATH_GRASS_FGTR),
            None,
            None,
        );
        assert_eq!(tile, LAVA);
    }

    #[test]
    fn test_sentinels_are_left_unchanged() {
        for sentinel in [TileIndex::TOMBSTONE, TileIndex::UNKNOWN] {
            assert_eq!(
                resolve_path_variant(sentinel, Some(PATH_GRASS_FT), None, None, None),
                sentinel
            );
        }
    }

    #[test]
    fn test_other_family_paths_do_not_connect() {
        let tile = resolve_path_variant(
            DIRT,
            Some(HALF_PATH_GRASS_FT),
            Some(PATH_DRY_FT),
            Some(GRASS),
            Some(PATH_GRASS_FT),
        );
        assert_eq!(tile, PATH_GRASS_GR); // only R connects
    }

    #[test]
    fn test_water_cover_resolves_as_dry_path() {
        let tile = resolve_path_variant(
            WATER,
            Some(PATH_DRY_FT),
            None,
            Some(PATH_DRY_FT),
            None,
        );
        assert_eq!(tile, PATH_DRY_FT);

        let tile = resolve_path_variant(HALF_SWAMP_REEDS, None, None, None, None);
        assert_eq!(tile, HALF_PATH_GRASS_GR);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let [n_f, n_g, n_t, n_r] = [
            Some(PATH_GRASS_FT),
            None,
            Some(PATH_GRASS_TR),
            Some(PATH_GRASS_GR),
        ];
        let once = resolve_path_variant(GRASS, n_f, n_g, n_t, n_r);
        let twice = resolve_path_variant(once, n_f, n_g, n_t, n_r);
        assert_eq!(once, PATH_GRASS_TRF);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_paint_path_connects_neighbor() {
        let mut grid = Grid::new(4, 1, 1);
        grid.fill_layer(0, Some(GRASS));
        let settings = RealignSettings::default();

        assert!(paint_path(&mut grid, 1, 0, 0, &settings));
        assert!(paint_path(&mut grid, 2, 0, 0, &settings));

        // Both paths see each other along f; g neighbors are off the map.
        assert_eq!(grid.get(1, 0, 0), Some(PATH_GRASS_GTR));
        assert_eq!(grid.get(2, 0, 0), Some(PATH_GRASS_RFG));
        assert_eq!(grid.get(0, 0, 0), Some(GRASS));
    }

    #[test]
    fn test_paint_path_rejects_unpaintable_cells() {
        let mut grid = Grid::new(2, 2, 1);
        grid.set(0, 0, 0, Some(STONE));
        let settings = RealignSettings::default();
        assert!(!paint_path(&mut grid, 0, 0, 0, &settings));
        assert!(!paint_path(&mut grid, 1, 1, 0, &settings));
        assert!(!paint_path(&mut grid, 5, 0, 0, &settings));
        assert_eq!(grid.get(0, 0, 0), Some(STONE));
    }
}
