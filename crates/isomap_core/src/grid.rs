//! The 3D tile grid
//!
//! Cells are addressed by `(f, g, h)`: `f` and `g` are the horizontal axes,
//! `h` is the stacking axis. Storage is column-major so that every `(f, g)`
//! column is one contiguous run of `size_h` cells, bottom to top.

use crate::tile::{TileIndex, EMPTY_CELL};
use log::warn;

/// A dense 3D grid of tiles. `None` is an empty cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size_f: usize,
    size_g: usize,
    size_h: usize,
    cells: Vec<Option<TileIndex>>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(size_f: usize, size_g: usize, size_h: usize) -> Self {
        Self {
            size_f,
            size_g,
            size_h,
            cells: vec![None; size_f * size_g * size_h],
        }
    }

    /// Build a grid from raw `i32` cells in storage order, where
    /// [`EMPTY_CELL`] (-1) marks an empty cell.
    ///
    /// Returns `None` if `raw` does not hold exactly `size_f * size_g * size_h`
    /// values. Other negative values are treated as empty.
    pub fn from_raw(size_f: usize, size_g: usize, size_h: usize, raw: &[i32]) -> Option<Self> {
        if raw.len() != size_f * size_g * size_h {
            return None;
        }
        let cells = raw
            .iter()
            .map(|&value| {
                if value >= 0 {
                    Some(TileIndex(value as u32))
                } else {
                    if value != EMPTY_CELL {
                        warn!("raw grid cell {} is not a tile index, treating as empty", value);
                    }
                    None
                }
            })
            .collect();
        Some(Self {
            size_f,
            size_g,
            size_h,
            cells,
        })
    }

    /// Export cells in storage order, empty cells as [`EMPTY_CELL`].
    ///
    /// Indices that do not fit an `i32` export as [`TileIndex::UNKNOWN`] so an
    /// occupied cell never reads back as empty.
    pub fn to_raw(&self) -> Vec<i32> {
        self.cells
            .iter()
            .map(|cell| match cell {
                None => EMPTY_CELL,
                Some(tile) => i32::try_from(tile.0).unwrap_or_else(|_| {
                    warn!(
                        "tile index {} does not fit a raw grid cell, exporting as unknown",
                        tile.0
                    );
                    TileIndex::UNKNOWN.0 as i32
                }),
            })
            .collect()
    }

    pub fn size_f(&self) -> usize {
        self.size_f
    }

    pub fn size_g(&self) -> usize {
        self.size_g
    }

    pub fn size_h(&self) -> usize {
        self.size_h
    }

    /// `(size_f, size_g, size_h)`
    pub fn dimensions(&self) -> (usize, usize, usize) {
        (self.size_f, self.size_g, self.size_h)
    }

    /// Check whether a horizontal position lies inside the footprint
    pub fn column_in_bounds(&self, f: i32, g: i32) -> bool {
        f >= 0 && g >= 0 && (f as usize) < self.size_f && (g as usize) < self.size_g
    }

    /// Check whether a cell position lies inside the grid
    pub fn in_bounds(&self, f: i32, g: i32, h: i32) -> bool {
        self.column_in_bounds(f, g) && h >= 0 && (h as usize) < self.size_h
    }

    /// Storage index of an in-bounds cell
    #[inline]
    pub fn index_of(&self, f: usize, g: usize, h: usize) -> usize {
        (g * self.size_f + f) * self.size_h + h
    }

    /// Bounds-checked read. Out-of-bounds and empty cells both read as `None`.
    pub fn get(&self, f: i32, g: i32, h: i32) -> Option<TileIndex> {
        if !self.in_bounds(f, g, h) {
            return None;
        }
        self.cells[self.index_of(f as usize, g as usize, h as usize)]
    }

    /// Bounds-checked write. Returns `false` (and writes nothing) when the
    /// position is outside the grid.
    pub fn set(&mut self, f: i32, g: i32, h: i32, tile: Option<TileIndex>) -> bool {
        if !self.in_bounds(f, g, h) {
            return false;
        }
        let idx = self.index_of(f as usize, g as usize, h as usize);
        self.cells[idx] = tile;
        true
    }

    /// All cells in storage order
    pub fn cells(&self) -> &[Option<TileIndex>] {
        &self.cells
    }

    /// Mutable view of all cells in storage order
    pub fn cells_mut(&mut self) -> &mut [Option<TileIndex>] {
        &mut self.cells
    }

    /// One column, bottom (`h = 0`) to top
    pub fn column(&self, f: usize, g: usize) -> &[Option<TileIndex>] {
        let start = self.index_of(f, g, 0);
        &self.cells[start..start + self.size_h]
    }

    /// Highest occupied cell of a column as `(h, tile)`
    pub fn topmost(&self, f: usize, g: usize) -> Option<(usize, TileIndex)> {
        if f >= self.size_f || g >= self.size_g {
            return None;
        }
        self.column(f, g)
            .iter()
            .enumerate()
            .rev()
            .find_map(|(h, cell)| cell.map(|tile| (h, tile)))
    }

    /// Number of non-empty cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Fill a whole horizontal layer with one tile
    pub fn fill_layer(&mut self, h: usize, tile: Option<TileIndex>) {
        if h >= self.size_h {
            return;
        }
        for g in 0..self.size_g {
            for f in 0..self.size_f {
                let idx = self.index_of(f, g, h);
                self.cells[idx] = tile;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::tiles;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(4, 3, 2);
        assert_eq!(grid.dimensions(), (4, 3, 2));
        assert_eq!(grid.cells().len(), 24);
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn test_get_set_bounds_checked() {
        let mut grid = Grid::new(2, 2, 2);
        assert!(grid.set(1, 1, 1, Some(tiles::GRASS)));
        assert_eq!(grid.get(1, 1, 1), Some(tiles::GRASS));
        assert!(!grid.set(2, 0, 0, Some(tiles::GRASS)));
        assert!(!grid.set(-1, 0, 0, Some(tiles::GRASS)));
        assert_eq!(grid.get(0, 0, 5), None);
        assert_eq!(grid.get(0, -1, 0), None);
    }

    #[test]
    fn test_raw_round_trip_keeps_empty_and_zero_distinct() {
        let raw = vec![-1, 0, 2, -1, 27, 3, -1, -1];
        let grid = Grid::from_raw(2, 2, 2, &raw).unwrap();
        assert_eq!(grid.get(0, 0, 0), None);
        assert_eq!(grid.get(0, 0, 1), Some(TileIndex::TOMBSTONE));
        assert_eq!(grid.to_raw(), raw);
    }

    #[test]
    fn test_from_raw_rejects_wrong_length() {
        assert!(Grid::from_raw(2, 2, 2, &[0; 7]).is_none());
    }

    #[test]
    fn test_from_raw_treats_other_negatives_as_empty() {
        let grid = Grid::from_raw(1, 1, 2, &[-7, 2]).unwrap();
        assert_eq!(grid.get(0, 0, 0), None);
        assert_eq!(grid.to_raw(), vec![-1, 2]);
    }

    #[test]
    fn test_to_raw_keeps_oversized_indices_occupied() {
        let mut grid = Grid::new(1, 1, 3);
        grid.set(0, 0, 0, Some(TileIndex(u32::MAX)));
        grid.set(0, 0, 1, Some(TileIndex(i32::MAX as u32 + 1)));
        grid.set(0, 0, 2, Some(TileIndex(i32::MAX as u32)));
        assert_eq!(grid.to_raw(), vec![1, 1, i32::MAX]);
    }

    #[test]
    fn test_topmost_skips_empty_cells_above() {
        let mut grid = Grid::new(1, 1, 4);
        grid.set(0, 0, 0, Some(tiles::DIRT));
        grid.set(0, 0, 2, Some(tiles::GRASS));
        assert_eq!(grid.topmost(0, 0), Some((2, tiles::GRASS)));
        assert_eq!(Grid::new(1, 1, 4).topmost(0, 0), None);
        assert_eq!(grid.topmost(3, 0), None);
    }

    #[test]
    fn test_fill_layer() {
        let mut grid = Grid::new(3, 3, 2);
        grid.fill_layer(0, Some(tiles::SAND));
        assert_eq!(grid.occupied_count(), 9);
        assert_eq!(grid.column(2, 1), &[Some(tiles::SAND), None]);
    }
}
