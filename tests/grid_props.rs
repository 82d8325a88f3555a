use proptest::prelude::*;

use rand::SeedableRng;
use rand::rngs::StdRng;

use toruslife::grid::Grid;
use toruslife::step::StepEngine;
use toruslife::step::neighbor_count;

fn arb_grid() -> impl Strategy<Value = Grid> {
    (9usize..24, any::<u64>(), 0.0f64..=1.0).prop_map(|(size, seed, p)| {
        let mut rng = StdRng::seed_from_u64(seed);

        Grid::random(size, p, &mut rng)
    })
}

/// Shift every cell by `(dr, dc)`, wrapping at the edges
fn translate(grid: &Grid, dr: usize, dc: usize) -> Grid {
    let n = grid.size();
    let mut out = Grid::dead(n);

    for row in 0..n {
        for col in 0..n {
            out.set((row + dr) % n, (col + dc) % n, grid.get(row, col));
        }
    }

    out
}

proptest! {
    #[test]
    fn advance_preserves_dimensions(mut grid in arb_grid()) {
        let size = grid.size();
        let mut engine = StepEngine::new(size);

        engine.advance(&mut grid);

        prop_assert_eq!(grid.size(), size);
        prop_assert_eq!(grid.cells().len(), size * size);
    }

    #[test]
    fn neighbor_counts_never_exceed_eight(grid in arb_grid(), row: usize, col: usize) {
        let (row, col) = (row % grid.size(), col % grid.size());

        prop_assert!(neighbor_count(&grid, row, col) <= 8);
    }

    #[test]
    fn no_spontaneous_life(size in 9usize..24) {
        let mut grid = Grid::dead(size);
        let mut engine = StepEngine::new(size);

        engine.advance(&mut grid);

        prop_assert_eq!(grid.population(), 0);
    }

    // On a torus there is no special position, so stepping commutes with
    // shifting the whole pattern
    #[test]
    fn advance_commutes_with_translation(grid in arb_grid(), dr: usize, dc: usize) {
        let size = grid.size();
        let (dr, dc) = (dr % size, dc % size);

        let mut engine = StepEngine::new(size);

        let mut shifted = translate(&grid, dr, dc);
        let mut grid = grid;

        engine.advance(&mut grid);
        engine.advance(&mut shifted);

        prop_assert_eq!(translate(&grid, dr, dc), shifted);
    }
}
