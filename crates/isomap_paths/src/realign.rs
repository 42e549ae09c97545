//! Whole-grid path realignment
//!
//! After bulk edits (load, rotation, generation) neighboring path tiles may
//! have been written independently and no longer line up. The realigner
//! recomputes each path tile's variant from its current neighbors in one
//! sweep over the grid footprint.

use crate::bitmask::{calculate_bitmask, resolve_variant};
use crate::config::RealignSettings;
use crate::terrain::{is_path_of_family, path_family_of, TerrainFamily};
use isomap_core::Grid;
use log::{debug, trace};

/// Counters from one realignment pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RealignStats {
    /// Columns visited
    pub columns_scanned: usize,
    /// Path tiles that were re-resolved
    pub paths_visited: usize,
    /// Path tiles whose variant changed
    pub tiles_changed: usize,
}

/// Realign every path tile in the grid with the default settings.
///
/// Returns the grid for chaining.
pub fn realign_grid(grid: &mut Grid) -> &mut Grid {
    realign_grid_with(grid, &RealignSettings::default());
    grid
}

/// Realign every path tile in the grid
pub fn realign_grid_with(grid: &mut Grid, settings: &RealignSettings) -> RealignStats {
    let (size_f, size_g, _) = grid.dimensions();
    if size_f == 0 || size_g == 0 {
        return RealignStats::default();
    }
    realign_region(
        grid,
        (0, 0),
        (size_f as i32 - 1, size_g as i32 - 1),
        settings,
    )
}

/// Realign the columns in the inclusive rectangle `min..=max` of `(f, g)`.
///
/// The rectangle is clipped to the grid footprint. Neighbor probes still
/// read columns outside the rectangle.
pub fn realign_region(
    grid: &mut Grid,
    min: (i32, i32),
    max: (i32, i32),
    settings: &RealignSettings,
) -> RealignStats {
    let mut stats = RealignStats::default();
    let (size_f, size_g, _) = grid.dimensions();
    if size_f == 0 || size_g == 0 {
        return stats;
    }

    let min_f = min.0.max(0);
    let min_g = min.1.max(0);
    let max_f = max.0.min(size_f as i32 - 1);
    let max_g = max.1.min(size_g as i32 - 1);

    for g in min_g..=max_g {
        for f in min_f..=max_f {
            realign_column(grid, f, g, settings, &mut stats);
        }
    }

    debug!(
        "realigned {} columns: {} paths, {} changed",
        stats.columns_scanned, stats.paths_visited, stats.tiles_changed
    );
    stats
}

/// Scan one column top-down and re-resolve its path tiles
fn realign_column(
    grid: &mut Grid,
    f: i32,
    g: i32,
    settings: &RealignSettings,
    stats: &mut RealignStats,
) {
    stats.columns_scanned += 1;

    for h in (0..grid.size_h() as i32).rev() {
        let Some(tile) = grid.get(f, g, h) else {
            continue;
        };

        if let Some(family) = path_family_of(tile) {
            let bitmask = calculate_bitmask(f, g, |nf, ng| {
                neighbor_connects(grid, nf, ng, h, family, settings)
            });
            let resolved = resolve_variant(bitmask, family.offset());
            stats.paths_visited += 1;
            if resolved != tile {
                trace!("({}, {}, {}): {} -> {}", f, g, h, tile, resolved);
                grid.set(f, g, h, Some(resolved));
                stats.tiles_changed += 1;
            }
        }

        if settings.top_surface_only {
            break;
        }
    }
}

/// Whether the neighbor column at `(nf, ng)` carries a same-family path
/// within the height tolerance of `h`
fn neighbor_connects(
    grid: &Grid,
    nf: i32,
    ng: i32,
    h: i32,
    family: TerrainFamily,
    settings: &RealignSettings,
) -> bool {
    if !grid.column_in_bounds(nf, ng) {
        return settings.boundary_connects();
    }
    let size_h = grid.size_h();
    if size_h == 0 || h < 0 {
        return false;
    }
    // Probe range is clipped to the column so any tolerance stays bounded.
    let tolerance = (settings.height_tolerance as usize).min(size_h);
    let h = h as usize;
    let low = h.saturating_sub(tolerance);
    let high = h.saturating_add(tolerance).min(size_h - 1);
    (low..=high).any(|nh| {
        grid.get(nf, ng, nh as i32).is_some_and(|tile| is_path_of_family(tile, family))
    })
}
