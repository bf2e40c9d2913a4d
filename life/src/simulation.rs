use std::mem;

use log::{debug, info};

use crate::{
    engine::tick_with,
    error::Result,
    grid::Grid,
    neighbourhood::Boundary,
    seed::{random_seed, seeded},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// The initial generation is still being edited.
    Seeding,
    Running,
    /// A tick produced an empty grid. Final.
    Terminated,
}

/// Owns the current and next generation buffers and drives them one tick at
/// a time through `Seeding -> Running -> Terminated`.
#[derive(Clone, Debug)]
pub struct Simulation {
    current: Grid,
    next: Grid,
    boundary: Boundary,
    generation: u64,
    phase: Phase,
}

impl Simulation {
    /// Starts in [`Phase::Seeding`] with `grid` as the initial generation.
    pub fn new(grid: Grid, boundary: Boundary) -> Self {
        Self {
            next: grid.clone(),
            current: grid,
            boundary,
            generation: 0,
            phase: Phase::Seeding,
        }
    }

    pub fn current(&self) -> &Grid {
        &self.current
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The initial generation, editable only while seeding.
    pub fn seed_grid_mut(&mut self) -> Option<&mut Grid> {
        match self.phase {
            Phase::Seeding => Some(&mut self.current),
            Phase::Running | Phase::Terminated => None,
        }
    }

    /// Makes `count` random draws into the initial generation, reproducibly
    /// when `seed` is given, and starts. Does nothing outside seeding.
    pub fn randomize(&mut self, count: usize, seed: Option<u64>) -> Phase {
        if self.phase != Phase::Seeding {
            return self.phase;
        }
        match seed {
            Some(seed) => seeded(&mut self.current, count, seed),
            None => random_seed(&mut self.current, count),
        }
        self.start()
    }

    pub fn start(&mut self) -> Phase {
        if self.phase == Phase::Seeding {
            info!(
                "starting with population {} on a {:?} grid",
                self.current.population(),
                self.current.dimensions()
            );
            self.phase = Phase::Running;
        }
        self.phase
    }

    /// Advances one generation if running. Terminates once the new current
    /// generation has no live cells.
    pub fn step(&mut self) -> Result<Phase> {
        if self.phase != Phase::Running {
            return Ok(self.phase);
        }
        tick_with(&self.current, &mut self.next, self.boundary)?;
        mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
        if self.current.is_empty() {
            info!("no live cells left after generation {}", self.generation);
            self.phase = Phase::Terminated;
        } else {
            debug!(
                "generation {}: population {}",
                self.generation,
                self.current.population()
            );
        }
        Ok(self.phase)
    }
}
