use std::{
    fmt::{Display, Write},
    str::FromStr,
};

use itertools::Itertools;

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum State {
    #[default]
    Dead,
    Alive,
}

impl State {
    pub fn is_alive(self) -> bool {
        self == State::Alive
    }

    pub fn toggled(self) -> Self {
        match self {
            State::Dead => State::Alive,
            State::Alive => State::Dead,
        }
    }
}

impl From<bool> for State {
    fn from(alive: bool) -> Self {
        if alive { State::Alive } else { State::Dead }
    }
}

/// A fixed-size rectangle of cells, stored row-major.
///
/// The dimensions are set by [`Grid::new`] and never change afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<State>,
}

impl Grid {
    /// Creates an all-dead grid. Both dimensions must be positive and their
    /// product must fit in an allocation.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(Error::EmptyGrid { rows, columns });
        }
        let len = rows
            .checked_mul(columns)
            .filter(|&len| len <= isize::MAX as usize)
            .ok_or(Error::TooLarge { rows, columns })?;
        Ok(Self {
            rows,
            columns,
            cells: vec![State::Dead; len],
        })
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<State> {
        self.index(row, col).map(|i| self.cells[i])
    }

    pub fn set(&mut self, row: usize, col: usize, state: State) -> Result<()> {
        let i = self.index(row, col)?;
        self.cells[i] = state;
        Ok(())
    }

    /// Flips the cell and returns its new state.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<State> {
        let i = self.index(row, col)?;
        self.cells[i] = self.cells[i].toggled();
        Ok(self.cells[i])
    }

    pub fn clear(&mut self) {
        self.cells.fill(State::Dead);
    }

    /// True iff no cell is alive. Stops at the first live cell.
    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|s| s.is_alive())
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|s| s.is_alive()).count()
    }

    /// Coordinates of the live cells in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .positions(|s| s.is_alive())
            .map(|i| (i / self.columns, i % self.columns))
    }

    /// Overwrites every cell with the contents of `other`.
    pub fn copy_from(&mut self, other: &Grid) -> Result<()> {
        self.check_same_dimensions(other)?;
        self.cells.copy_from_slice(&other.cells);
        Ok(())
    }

    /// Sets the live cells of `pattern` alive, with the pattern's top-left
    /// corner at `(row, col)`. Dead pattern cells leave the grid untouched.
    pub fn paste(&mut self, pattern: &Grid, (row, col): (usize, usize)) -> Result<()> {
        let last_row = row.saturating_add(pattern.rows - 1);
        let last_col = col.saturating_add(pattern.columns - 1);
        if last_row >= self.rows || last_col >= self.columns {
            return Err(self.out_of_bounds(last_row, last_col));
        }
        for (y, x) in pattern.live_cells() {
            self.put(row + y, col + x, State::Alive);
        }
        Ok(())
    }
}

impl Grid {
    pub(crate) fn check_same_dimensions(&self, other: &Grid) -> Result<()> {
        if self.dimensions() != other.dimensions() {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                found: other.dimensions(),
            });
        }
        Ok(())
    }

    /// Unchecked read for callers that have already validated the coordinate.
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> State {
        self.cells[row * self.columns + col]
    }

    #[inline]
    pub(crate) fn put(&mut self, row: usize, col: usize, state: State) {
        self.cells[row * self.columns + col] = state;
    }

    pub(crate) fn out_of_bounds(&self, row: usize, col: usize) -> Error {
        Error::OutOfBounds {
            row,
            col,
            rows: self.rows,
            columns: self.columns,
        }
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row < self.rows && col < self.columns {
            Ok(row * self.columns + col)
        } else {
            Err(self.out_of_bounds(row, col))
        }
    }
}

impl FromStr for Grid {
    type Err = String;

    /// Parses a pattern of `o` (alive) and `.` (dead). Leading whitespace and
    /// blank lines are ignored; short lines are padded with dead cells.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect_vec();
        let columns = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let mut grid = Grid::new(lines.len(), columns).map_err(|e| e.to_string())?;
        for (y, line) in lines.into_iter().enumerate() {
            for (x, c) in line.chars().enumerate() {
                match c {
                    '.' => (),
                    'o' => grid.put(y, x, State::Alive),
                    _ => return Err(format!("Unexpected character {c}")),
                }
            }
        }
        Ok(grid)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (y, row) in self.cells.chunks(self.columns).enumerate() {
            if y > 0 {
                f.write_char('\n')?;
            }
            for &state in row {
                f.write_char(if state.is_alive() { 'o' } else { '.' })?;
            }
        }
        Ok(())
    }
}
