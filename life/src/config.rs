use crate::{
    error::Result,
    grid::Grid,
    neighbourhood::Boundary,
    simulation::Simulation,
};

/// Size, starting population and boundary policy of a simulation.
///
/// Defaults to a 120x120 clamped grid seeded with 2000 random draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub rows: usize,
    pub columns: usize,
    /// Number of random draws made when seeding.
    pub population: usize,
    pub boundary: Boundary,
    /// Fixed seed for reproducible seeding; `None` uses process entropy.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: 120,
            columns: 120,
            population: 2000,
            boundary: Boundary::Clamped,
            seed: None,
        }
    }
}

impl Config {
    pub fn rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    pub fn population(mut self, population: usize) -> Self {
        self.population = population;
        self
    }

    pub fn boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn grid(&self) -> Result<Grid> {
        Grid::new(self.rows, self.columns)
    }

    pub fn simulation(&self) -> Result<Simulation> {
        Ok(Simulation::new(self.grid()?, self.boundary))
    }
}
