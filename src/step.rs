use std::mem;

use crate::cell::Cell;
use crate::grid::Grid;

/// Count the live cells among the 8 neighbors of `(row, col)`.
///
/// Both coordinates wrap, so a corner cell sees cells on the opposite edges
/// and the count is total over the whole grid. Always in `0..=8`.
pub fn neighbor_count(grid: &Grid, row: usize, col: usize) -> u8 {
    let n = grid.size();

    let up = (row + n - 1) % n;
    let down = (row + 1) % n;
    let left = (col + n - 1) % n;
    let right = (col + 1) % n;

    let neighbors = [
        (up, left),
        (up, col),
        (up, right),
        (row, left),
        (row, right),
        (down, left),
        (down, col),
        (down, right),
    ];

    neighbors
        .into_iter()
        .filter(|&(r, c)| grid.get(r, c).is_alive())
        .count() as u8
}

/// Advances a grid one generation at a time under the standard life rules
/// (birth on 3 neighbors, survival on 2 or 3).
///
/// The engine owns a scratch grid so every next-state value is computed from
/// the pre-transition grid; the scratch is swapped in only once the full
/// pass is done. No cell ever reads a half-updated generation.
pub struct StepEngine {
    scratch: Grid,
}

impl StepEngine {
    pub fn new(size: usize) -> Self {
        Self {
            scratch: Grid::dead(size),
        }
    }

    /// Replace `grid` with its next generation.
    pub fn advance(&mut self, grid: &mut Grid) {
        let n = grid.size();
        assert!(n == self.scratch.size(), "engine and grid sizes differ");

        for row in 0..n {
            for col in 0..n {
                let count = neighbor_count(grid, row, col);

                let next = match grid.get(row, col) {
                    Cell::Alive => Cell::from(count == 2 || count == 3),
                    Cell::Dead => Cell::from(count == 3),
                };

                self.scratch.set(row, col, next);
            }
        }

        mem::swap(grid, &mut self.scratch);
    }
}
