//! Rotating a whole grid by quarter turns
//!
//! Cells move with the map and every oriented tile is swapped for its
//! rotated variant from the rotation table. A quarter turn maps column
//! `(f, g)` of a `size_f × size_g` footprint to `(size_g - 1 - g, f)`, which
//! carries the F side of the map onto G, G onto T, T onto R and R onto F.

use crate::config::RealignSettings;
use crate::realign::realign_grid_with;
use isomap_core::{rotate_tile, Grid, Rotation};
use log::debug;

/// New position of column `(f, g)` after `rotation`
pub fn rotate_position(
    f: usize,
    g: usize,
    size_f: usize,
    size_g: usize,
    rotation: Rotation,
) -> (usize, usize) {
    let (mut f, mut g) = (f, g);
    let (mut span_f, mut span_g) = (size_f, size_g);
    for _ in 0..rotation.quarter_turns() {
        (f, g) = (span_g - 1 - g, f);
        std::mem::swap(&mut span_f, &mut span_g);
    }
    (f, g)
}

/// Rotate cells and tiles without realigning paths
pub fn rotate_cells(grid: &Grid, rotation: Rotation) -> Grid {
    let (size_f, size_g, size_h) = grid.dimensions();
    let (out_f, out_g) = if rotation.quarter_turns() % 2 == 0 {
        (size_f, size_g)
    } else {
        (size_g, size_f)
    };

    let mut rotated = Grid::new(out_f, out_g, size_h);
    for g in 0..size_g {
        for f in 0..size_f {
            let (nf, ng) = rotate_position(f, g, size_f, size_g, rotation);
            for (h, cell) in grid.column(f, g).iter().enumerate() {
                if let Some(tile) = cell {
                    let idx = rotated.index_of(nf, ng, h);
                    rotated.cells_mut()[idx] = Some(rotate_tile(*tile, rotation));
                }
            }
        }
    }
    rotated
}

/// Rotate the grid and realign its paths
pub fn rotate_grid(grid: &Grid, rotation: Rotation, settings: &RealignSettings) -> Grid {
    let mut rotated = rotate_cells(grid, rotation);
    let stats = realign_grid_with(&mut rotated, settings);
    debug!(
        "rotated grid by {:?}: {} path tiles changed after realignment",
        rotation, stats.tiles_changed
    );
    rotated
}
