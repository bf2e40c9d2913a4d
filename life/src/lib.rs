//! Conway's Game of Life (B3/S23) on a fixed-size grid.

mod config;
mod engine;
mod error;
mod grid;
mod neighbourhood;
mod rule;
mod seed;
mod simulation;


pub use crate::{
    config::Config,
    engine::{tick, tick_with},
    error::{Error, Result},
    grid::{Grid, State},
    neighbourhood::{Boundary, count_live_neighbours, count_live_neighbours_with, neighbours},
    rule::next_state,
    seed::{random_seed, random_seed_with, seeded},
    simulation::{Phase, Simulation},
};

/// True iff `grid` has no live cell.
pub fn is_empty(grid: &Grid) -> bool {
    grid.is_empty()
}
