use itertools::Itertools;

use crate::{error::Result, grid::Grid};

/// What happens to neighbour coordinates that fall off the edge of the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Boundary {
    /// Off-grid neighbours are excluded: corners see at most 3 neighbours,
    /// edges at most 5.
    #[default]
    Clamped,
    /// Off-grid neighbours wrap to the opposite edge. On grids narrower than
    /// 3 cells the same cell can be visited by more than one offset.
    Toroidal,
}

fn offsets() -> impl Iterator<Item = (isize, isize)> {
    (-1..=1)
        .cartesian_product(-1..=1)
        .filter(|&d| d != (0, 0))
}

/// The in-grid neighbours of `(row, col)` under `boundary`.
pub fn neighbours(
    (rows, columns): (usize, usize),
    (row, col): (usize, usize),
    boundary: Boundary,
) -> impl Iterator<Item = (usize, usize)> {
    offsets().filter_map(move |(dy, dx)| match boundary {
        Boundary::Clamped => {
            let y = row.checked_add_signed(dy).filter(|&y| y < rows)?;
            let x = col.checked_add_signed(dx).filter(|&x| x < columns)?;
            Some((y, x))
        }
        Boundary::Toroidal => Some((wrap(row, dy, rows), wrap(col, dx, columns))),
    })
}

fn wrap(i: usize, d: isize, len: usize) -> usize {
    match d {
        -1 if i == 0 => len - 1,
        -1 => i - 1,
        1 => (i + 1) % len,
        _ => i,
    }
}

pub fn count_live_neighbours(grid: &Grid, row: usize, col: usize) -> Result<u8> {
    count_live_neighbours_with(grid, row, col, Boundary::Clamped)
}

pub fn count_live_neighbours_with(
    grid: &Grid,
    row: usize,
    col: usize,
    boundary: Boundary,
) -> Result<u8> {
    grid.get(row, col)?;
    Ok(live_neighbours(grid, row, col, boundary))
}

/// Counts without validating `(row, col)`.
pub(crate) fn live_neighbours(grid: &Grid, row: usize, col: usize, boundary: Boundary) -> u8 {
    neighbours(grid.dimensions(), (row, col), boundary)
        .filter(|&(y, x)| grid.at(y, x).is_alive())
        .count() as u8
}
