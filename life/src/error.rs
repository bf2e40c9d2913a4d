use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("cell ({row}, {col}) is outside the {rows}x{columns} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        columns: usize,
    },
    #[error("expected a {}x{} grid, found {}x{}", .expected.0, .expected.1, .found.0, .found.1)]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    #[error("grid dimensions must be positive, got {rows}x{columns}")]
    EmptyGrid { rows: usize, columns: usize },
    #[error("a {rows}x{columns} grid has too many cells to allocate")]
    TooLarge { rows: usize, columns: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
