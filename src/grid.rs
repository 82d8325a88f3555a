use rand::Rng;

use crate::cell::Cell;

/// A square cell matrix, stored row-major.
///
/// The grid itself is plain storage with direct indexing. Wrap-around only
/// happens in neighbor lookups (see [`crate::step`]), so `get` and `set`
/// expect in-range coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-dead grid
    pub fn dead(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Dead; size * size],
        }
    }

    /// Create a grid where each cell is independently alive with probability
    /// `alive_probability`, which must be within `[0, 1]`.
    ///
    /// The RNG is passed in so a seeded run stays reproducible.
    pub fn random<R: Rng>(size: usize, alive_probability: f64, rng: &mut R) -> Self {
        let cells = (0..size * size)
            .map(|_| Cell::from(rng.gen_bool(alive_probability)))
            .collect();

        Self { size, cells }
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major view of the cells, for renderers
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        let i = self.index(row, col);

        self.cells[i]
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let i = self.index(row, col);

        self.cells[i] = cell;
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(row < self.size, "row is out of bounds");
        assert!(col < self.size, "col is out of bounds");

        row * self.size + col
    }
}
