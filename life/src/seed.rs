use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::grid::{Grid, State};

/// Sets `count` uniformly chosen cells alive, drawing from process entropy.
///
/// Draws are made with replacement, so fewer than `count` distinct cells may
/// end up alive. The grid is not cleared first.
pub fn random_seed(grid: &mut Grid, count: usize) {
    random_seed_with(grid, count, &mut rand::rng());
}

/// Like [`random_seed`], but reproducible for a given `seed`.
pub fn seeded(grid: &mut Grid, count: usize, seed: u64) {
    random_seed_with(grid, count, &mut StdRng::seed_from_u64(seed));
}

pub fn random_seed_with<R: Rng>(grid: &mut Grid, count: usize, rng: &mut R) {
    let (rows, columns) = grid.dimensions();
    let capacity = rows * columns;
    let mut live = grid.population();
    for _ in 0..count {
        // Nothing left to change once the grid is full.
        if live == capacity {
            break;
        }
        let (row, col) = (rng.random_range(0..rows), rng.random_range(0..columns));
        if !grid.at(row, col).is_alive() {
            grid.put(row, col, State::Alive);
            live += 1;
        }
    }
    debug!("seeded {count} draws into a {rows}x{columns} grid, population {live}");
}
