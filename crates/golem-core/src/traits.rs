//! Read-only access to cell state.

use crate::id::Coord;

/// Read-only view of a square board of live/dead cells.
///
/// Implemented by the grid itself and by anything that wraps one, so that
/// observers (renderers, test helpers, statistics) can read cells without
/// depending on a concrete storage type.
pub trait CellReader {
    /// Side length of the board. Zero means there is no board to read.
    fn side(&self) -> usize;

    /// Whether the cell at `coord` is alive, or `None` if `coord` is outside
    /// the board.
    fn is_alive(&self, coord: Coord) -> Option<bool>;

    /// Number of live cells. The default walks every coordinate.
    fn alive_count(&self) -> usize {
        let n = self.side() as i32;
        let mut count = 0;
        for row in 0..n {
            for col in 0..n {
                if self.is_alive(Coord::new(row, col)) == Some(true) {
                    count += 1;
                }
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Diagonal(usize);

    impl CellReader for Diagonal {
        fn side(&self) -> usize {
            self.0
        }

        fn is_alive(&self, coord: Coord) -> Option<bool> {
            let n = self.0 as i32;
            if coord.row < 0 || coord.col < 0 || coord.row >= n || coord.col >= n {
                return None;
            }
            Some(coord.row == coord.col)
        }
    }

    #[test]
    fn default_alive_count_walks_board() {
        assert_eq!(Diagonal(5).alive_count(), 5);
        assert_eq!(Diagonal(0).alive_count(), 0);
    }

    #[test]
    fn outside_board_is_none() {
        assert_eq!(Diagonal(3).is_alive(Coord::new(3, 0)), None);
        assert_eq!(Diagonal(3).is_alive(Coord::new(-1, 0)), None);
    }
}
