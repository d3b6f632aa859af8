//! Error types for the Golem engine.
//!
//! Every simulation engine operation reports failure through
//! [`EngineError`]. All variants are local and synchronous, and a failed
//! call leaves engine state untouched.

use crate::id::Coord;
use std::error::Error;
use std::fmt;

/// Errors returned by engine lifecycle and cell operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// The requested grid size is zero, negative, or too large to address.
    InvalidSize {
        /// The rejected size.
        size: i64,
    },
    /// The pattern identifier does not name a known preset.
    UnknownPattern {
        /// The rejected identifier.
        name: String,
    },
    /// A coordinate lies outside `[0, size)` on either axis.
    OutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Side length of the grid it was checked against.
        size: usize,
    },
    /// A mutation was attempted before `initialize`.
    NotInitialized,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size } => write!(f, "invalid grid size {size}"),
            Self::UnknownPattern { name } => write!(f, "unknown pattern '{name}'"),
            Self::OutOfBounds { coord, size } => {
                write!(f, "coordinate {coord} out of bounds: [0, {size}) x [0, {size})")
            }
            Self::NotInitialized => write!(f, "simulation is not initialized"),
        }
    }
}

impl Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            EngineError::InvalidSize { size: -2 }.to_string(),
            "invalid grid size -2"
        );
        assert_eq!(
            EngineError::UnknownPattern {
                name: "Spaceship".into()
            }
            .to_string(),
            "unknown pattern 'Spaceship'"
        );
        assert_eq!(
            EngineError::OutOfBounds {
                coord: Coord::new(10, 0),
                size: 10
            }
            .to_string(),
            "coordinate (10, 0) out of bounds: [0, 10) x [0, 10)"
        );
        assert_eq!(
            EngineError::NotInitialized.to_string(),
            "simulation is not initialized"
        );
    }
}
