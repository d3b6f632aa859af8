//! Canonical pattern coordinates for regression tests.
//!
//! All shapes are anchored at the top-left corner.

/// Two diagonally touching 2×2 blocks; period-2 oscillator (8 ↔ 6 cells).
pub const BEACON: [(i32, i32); 8] = [
    (0, 0),
    (0, 1),
    (1, 0),
    (1, 1),
    (2, 2),
    (2, 3),
    (3, 2),
    (3, 3),
];

/// Horizontal blinker on row 1.
pub const BLINKER: [(i32, i32); 3] = [(1, 0), (1, 1), (1, 2)];

/// 2×2 still life.
pub const BLOCK: [(i32, i32); 4] = [(0, 0), (0, 1), (1, 0), (1, 1)];

/// South-east travelling glider.
pub const GLIDER: [(i32, i32); 5] = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

/// Every cell of row 0 on a grid `width` wide.
pub fn first_row(width: i32) -> Vec<(i32, i32)> {
    (0..width).map(|c| (0, c)).collect()
}
