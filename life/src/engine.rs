use crate::{
    error::Result,
    grid::Grid,
    neighbourhood::{Boundary, live_neighbours},
    rule::next_state,
};

/// Writes the generation after `source` into `destination` using the clamped
/// boundary.
///
/// Every cell of `destination` is overwritten; `source` is only read. The two
/// must have the same dimensions, otherwise nothing is written. Because
/// `destination` is borrowed mutably, it can never alias `source`.
pub fn tick(source: &Grid, destination: &mut Grid) -> Result<()> {
    tick_with(source, destination, Boundary::Clamped)
}

pub fn tick_with(source: &Grid, destination: &mut Grid, boundary: Boundary) -> Result<()> {
    source.check_same_dimensions(destination)?;
    let (rows, columns) = source.dimensions();
    for row in 0..rows {
        for col in 0..columns {
            let live = live_neighbours(source, row, col, boundary);
            destination.put(row, col, next_state(source.at(row, col), live));
        }
    }
    Ok(())
}
