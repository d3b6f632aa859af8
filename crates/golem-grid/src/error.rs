//! Error types for grid construction and cell access.

use golem_core::{Coord, EngineError};
use std::fmt;

/// Errors arising from grid construction or coordinate access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with a side of zero or above
    /// [`Grid::MAX_SIDE`](crate::Grid::MAX_SIDE).
    InvalidSize {
        /// The rejected side length.
        size: usize,
    },
    /// A coordinate is outside `[0, size)` on at least one axis.
    OutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Side length of the grid.
        size: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size } => write!(f, "invalid grid size {size}"),
            Self::OutOfBounds { coord, size } => {
                write!(f, "coordinate {coord} out of bounds: [0, {size}) x [0, {size})")
            }
        }
    }
}

impl std::error::Error for GridError {}

impl From<GridError> for EngineError {
    fn from(e: GridError) -> Self {
        match e {
            GridError::InvalidSize { size } => EngineError::InvalidSize {
                size: i64::try_from(size).unwrap_or(i64::MAX),
            },
            GridError::OutOfBounds { coord, size } => EngineError::OutOfBounds { coord, size },
        }
    }
}
