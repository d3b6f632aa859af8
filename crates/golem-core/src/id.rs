//! Strongly-typed identifiers: [`Coord`] and [`CycleCount`].

use std::fmt;

/// A `(row, col)` position on a square grid.
///
/// Components are signed so that callers can express coordinates that
/// fall outside a grid (including negative ones); bounds are checked by
/// the grid, not by the type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Zero-based row index.
    pub row: i32,
    /// Zero-based column index.
    pub col: i32,
}

impl Coord {
    /// Create a coordinate from a row and a column.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Translate by `(dr, dc)`, returning `None` on `i32` overflow.
    pub fn offset(self, dr: i32, dc: i32) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add(dr)?,
            col: self.col.checked_add(dc)?,
        })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

/// Number of generations computed since initialization.
///
/// Incremented by exactly one on each successful tick and returned to
/// zero by initialize and reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CycleCount(pub u64);

impl CycleCount {
    /// The counter value following this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for CycleCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CycleCount {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
