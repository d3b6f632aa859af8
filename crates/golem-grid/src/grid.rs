//! The square live/dead cell matrix.

use crate::error::GridError;
use crate::moore::{self, OFFSETS_8};
use golem_core::{CellReader, Coord};
use smallvec::SmallVec;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A `size × size` grid of boolean cells, stored row-major.
///
/// The side length is fixed at construction. Resizing means building a new
/// `Grid`; no operation reshapes one in place, so every row always has
/// exactly `size` columns.
///
/// # Examples
///
/// ```
/// use golem_core::Coord;
/// use golem_grid::Grid;
///
/// let mut grid = Grid::new(4).unwrap();
/// grid.set(Coord::new(1, 2), true).unwrap();
/// assert!(grid.get(Coord::new(1, 2)).unwrap());
/// assert_eq!(grid.count_alive(), 1);
/// assert!(grid.get(Coord::new(4, 0)).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Largest accepted side length.
    pub const MAX_SIDE: usize = 4096;

    /// Create a grid with every cell dead.
    ///
    /// Returns `Err(GridError::InvalidSize)` if `size` is 0 or exceeds
    /// [`MAX_SIDE`](Self::MAX_SIDE).
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size == 0 || size > Self::MAX_SIDE {
            return Err(GridError::InvalidSize { size });
        }
        Ok(Self {
            size,
            cells: vec![false; size * size],
        })
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (`size²`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `coord` lies inside `[0, size)` on both axes.
    pub fn contains(&self, coord: Coord) -> bool {
        self.index(coord).is_ok()
    }

    fn index(&self, coord: Coord) -> Result<usize, GridError> {
        match (
            moore::resolve_axis(coord.row, self.size),
            moore::resolve_axis(coord.col, self.size),
        ) {
            (Some(r), Some(c)) => Ok(r * self.size + c),
            _ => Err(GridError::OutOfBounds {
                coord,
                size: self.size,
            }),
        }
    }

    /// Read one cell.
    pub fn get(&self, coord: Coord) -> Result<bool, GridError> {
        let i = self.index(coord)?;
        Ok(self.cells[i])
    }

    /// Overwrite one cell.
    pub fn set(&mut self, coord: Coord, alive: bool) -> Result<(), GridError> {
        let i = self.index(coord)?;
        self.cells[i] = alive;
        Ok(())
    }

    /// Flip one cell and return its new state.
    pub fn toggle(&mut self, coord: Coord) -> Result<bool, GridError> {
        let i = self.index(coord)?;
        self.cells[i] = !self.cells[i];
        Ok(self.cells[i])
    }

    /// Number of live cells. O(size²).
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Deep, independent copy of the grid contents.
    ///
    /// Mutating the original afterwards never affects the snapshot. Use it
    /// to keep a generation that outlives later edits. Computing the next
    /// generation does not need one: [`step_with`](Self::step_with) reads
    /// through `&self`, which already freezes the grid for the whole step.
    pub fn snapshot(&self) -> Grid {
        self.clone()
    }

    /// Iterate rows top to bottom, each a slice of exactly `size` cells.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[bool]> + '_ {
        self.cells.chunks_exact(self.size)
    }

    /// Coordinates of every live cell in row-major order.
    pub fn alive_cells(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &alive)| alive)
            .map(|(i, _)| Coord::new((i / self.size) as i32, (i % self.size) as i32))
            .collect()
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Bring every listed coordinate to life, skipping those outside the grid.
    ///
    /// Returns how many coordinates landed inside the grid.
    pub fn fill_from<I>(&mut self, cells: I) -> usize
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut placed = 0;
        for coord in cells {
            if let Ok(i) = self.index(coord) {
                self.cells[i] = true;
                placed += 1;
            }
        }
        placed
    }

    /// In-bounds Moore neighbours of `coord`.
    pub fn neighbours(&self, coord: Coord) -> Result<SmallVec<[Coord; 8]>, GridError> {
        self.index(coord)?;
        let mut out = SmallVec::new();
        for (dr, dc) in OFFSETS_8 {
            let nr = moore::resolve_axis(coord.row + dr, self.size);
            let nc = moore::resolve_axis(coord.col + dc, self.size);
            if let (Some(nr), Some(nc)) = (nr, nc) {
                out.push(Coord::new(nr as i32, nc as i32));
            }
        }
        Ok(out)
    }

    /// Number of live in-bounds Moore neighbours of `coord`.
    pub fn live_neighbours(&self, coord: Coord) -> Result<u8, GridError> {
        let i = self.index(coord)?;
        Ok(self.live_neighbours_at(i / self.size, i % self.size))
    }

    /// Live neighbour count for an index pair already known to be in bounds.
    pub(crate) fn live_neighbours_at(&self, r: usize, c: usize) -> u8 {
        let mut count = 0;
        for (dr, dc) in OFFSETS_8 {
            let nr = moore::resolve_axis(r as i32 + dr, self.size);
            let nc = moore::resolve_axis(c as i32 + dc, self.size);
            if let (Some(nr), Some(nc)) = (nr, nc) {
                if self.cells[nr * self.size + nc] {
                    count += 1;
                }
            }
        }
        count
    }

    /// Build the next generation from this one.
    ///
    /// `next_state(alive, live_neighbours)` is evaluated for every cell
    /// against `self` only; results go into a fresh grid, so evaluation
    /// order never leaks into the outcome.
    pub fn step_with<F>(&self, mut next_state: F) -> Grid
    where
        F: FnMut(bool, u8) -> bool,
    {
        let mut cells = Vec::with_capacity(self.cells.len());
        for r in 0..self.size {
            for c in 0..self.size {
                let alive = self.cells[r * self.size + c];
                cells.push(next_state(alive, self.live_neighbours_at(r, c)));
            }
        }
        Grid {
            size: self.size,
            cells,
        }
    }

    /// 64-bit fingerprint of size and contents.
    ///
    /// Equal grids always share a fingerprint; distinct grids collide only
    /// with hash-collision probability.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl CellReader for Grid {
    fn side(&self) -> usize {
        self.size
    }

    fn is_alive(&self, coord: Coord) -> Option<bool> {
        self.get(coord).ok()
    }

    fn alive_count(&self) -> usize {
        self.count_alive()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("size", &self.size)
            .field("alive", &self.count_alive())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn c(r: i32, col: i32) -> Coord {
        Coord::new(r, col)
    }

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn new_zero_size_returns_error() {
        assert_eq!(Grid::new(0), Err(GridError::InvalidSize { size: 0 }));
    }

    #[test]
    fn new_rejects_size_above_max() {
        let big = Grid::MAX_SIDE + 1;
        assert_eq!(Grid::new(big), Err(GridError::InvalidSize { size: big }));
        assert!(Grid::new(Grid::MAX_SIDE).is_ok());
    }

    #[test]
    fn new_grid_is_square_and_dead() {
        let g = Grid::new(7).unwrap();
        assert_eq!(g.size(), 7);
        assert_eq!(g.cell_count(), 49);
        assert_eq!(g.rows().len(), 7);
        assert!(g.rows().all(|row| row.len() == 7 && row.iter().all(|&a| !a)));
        assert_eq!(g.count_alive(), 0);
    }

    // ── Access tests ────────────────────────────────────────────

    #[test]
    fn get_set_roundtrip() {
        let mut g = Grid::new(3).unwrap();
        g.set(c(2, 1), true).unwrap();
        assert!(g.get(c(2, 1)).unwrap());
        assert!(!g.get(c(1, 2)).unwrap());
        g.set(c(2, 1), false).unwrap();
        assert!(!g.get(c(2, 1)).unwrap());
    }

    #[test]
    fn out_of_bounds_access_is_rejected() {
        let mut g = Grid::new(3).unwrap();
        let err = GridError::OutOfBounds {
            coord: c(3, 0),
            size: 3,
        };
        assert_eq!(g.get(c(3, 0)), Err(err.clone()));
        assert_eq!(g.set(c(3, 0), true), Err(err));
        assert!(g.get(c(-1, 0)).is_err());
        assert!(g.toggle(c(0, -1)).is_err());
        assert_eq!(g.count_alive(), 0);
    }

    #[test]
    fn toggle_twice_restores() {
        let mut g = Grid::new(4).unwrap();
        assert!(g.toggle(c(1, 1)).unwrap());
        assert_eq!(g.count_alive(), 1);
        assert!(!g.toggle(c(1, 1)).unwrap());
        assert_eq!(g.count_alive(), 0);
    }

    #[test]
    fn snapshot_is_independent() {
        let mut g = Grid::new(3).unwrap();
        g.set(c(0, 0), true).unwrap();
        let snap = g.snapshot();
        g.set(c(0, 0), false).unwrap();
        g.set(c(2, 2), true).unwrap();
        assert!(snap.get(c(0, 0)).unwrap());
        assert!(!snap.get(c(2, 2)).unwrap());
    }

    #[test]
    fn alive_cells_row_major() {
        let mut g = Grid::new(3).unwrap();
        g.fill_from([c(2, 0), c(0, 2), c(1, 1)]);
        assert_eq!(g.alive_cells(), vec![c(0, 2), c(1, 1), c(2, 0)]);
    }

    #[test]
    fn fill_from_clips_outside_cells() {
        let mut g = Grid::new(2).unwrap();
        let placed = g.fill_from([c(0, 0), c(1, 1), c(2, 2), c(-1, 0)]);
        assert_eq!(placed, 2);
        assert_eq!(g.count_alive(), 2);
        g.clear();
        assert_eq!(g.count_alive(), 0);
    }

    // ── Neighbour tests ─────────────────────────────────────────

    #[test]
    fn neighbours_interior() {
        let g = Grid::new(5).unwrap();
        assert_eq!(g.neighbours(c(2, 2)).unwrap().len(), 8);
    }

    #[test]
    fn neighbours_corner() {
        let g = Grid::new(5).unwrap();
        let n = g.neighbours(c(0, 0)).unwrap();
        assert_eq!(n.len(), 3);
        assert!(n.contains(&c(1, 0)));
        assert!(n.contains(&c(0, 1)));
        assert!(n.contains(&c(1, 1)));
    }

    #[test]
    fn neighbours_edge() {
        let g = Grid::new(5).unwrap();
        assert_eq!(g.neighbours(c(0, 2)).unwrap().len(), 5);
        assert_eq!(g.neighbours(c(4, 2)).unwrap().len(), 5);
    }

    #[test]
    fn single_cell_has_no_neighbours() {
        let g = Grid::new(1).unwrap();
        assert!(g.neighbours(c(0, 0)).unwrap().is_empty());
        assert_eq!(g.live_neighbours(c(0, 0)).unwrap(), 0);
    }

    #[test]
    fn live_neighbours_counts_only_in_bounds() {
        let mut g = Grid::new(3).unwrap();
        for r in 0..3 {
            for col in 0..3 {
                g.set(c(r, col), true).unwrap();
            }
        }
        assert_eq!(g.live_neighbours(c(0, 0)).unwrap(), 3);
        assert_eq!(g.live_neighbours(c(0, 1)).unwrap(), 5);
        assert_eq!(g.live_neighbours(c(1, 1)).unwrap(), 8);
    }

    // ── Stepping ────────────────────────────────────────────────

    #[test]
    fn step_with_reads_only_previous_generation() {
        // "Alive if any neighbour is alive" spreads exactly one ring per step
        // when computed from a stable read view.
        let mut g = Grid::new(5).unwrap();
        g.set(c(2, 2), true).unwrap();
        let next = g.step_with(|_, n| n > 0);
        assert_eq!(next.count_alive(), 8);
        assert!(!next.get(c(2, 2)).unwrap());
        assert!(g.get(c(2, 2)).unwrap());
    }

    // ── Display / fingerprint ───────────────────────────────────

    #[test]
    fn display_renders_rows() {
        let mut g = Grid::new(3).unwrap();
        g.fill_from([c(0, 1), c(1, 1), c(2, 1)]);
        assert_eq!(g.to_string(), ".#.\n.#.\n.#.");
    }

    #[test]
    fn fingerprint_tracks_contents() {
        let mut a = Grid::new(4).unwrap();
        let b = Grid::new(4).unwrap();
        assert_eq!(a.fingerprint(), b.fingerprint());
        a.set(c(3, 3), true).unwrap();
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn cell_reader_matches_grid() {
        let mut g = Grid::new(3).unwrap();
        g.set(c(1, 0), true).unwrap();
        let reader: &dyn CellReader = &g;
        assert_eq!(reader.side(), 3);
        assert_eq!(reader.is_alive(c(1, 0)), Some(true));
        assert_eq!(reader.is_alive(c(5, 0)), None);
        assert_eq!(reader.alive_count(), 1);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn neighbours_symmetric(size in 1usize..10, r in 0i32..10, col in 0i32..10) {
            let g = Grid::new(size).unwrap();
            let coord = c(r % size as i32, col % size as i32);
            for nb in g.neighbours(coord).unwrap() {
                prop_assert!(
                    g.neighbours(nb).unwrap().contains(&coord),
                    "neighbour symmetry violated: {:?} in N({:?}) but not the reverse",
                    nb, coord,
                );
            }
        }

        #[test]
        fn neighbour_count_matches_degree(size in 1usize..10, r in 0usize..10, col in 0usize..10) {
            let g = Grid::new(size).unwrap();
            let (r, col) = (r % size, col % size);
            let n = g.neighbours(c(r as i32, col as i32)).unwrap();
            prop_assert_eq!(n.len(), moore::degree(r, col, size));
        }

        #[test]
        fn count_alive_matches_set_cells(
            size in 1usize..12,
            cells in proptest::collection::vec((0i32..12, 0i32..12), 0..40),
        ) {
            let mut g = Grid::new(size).unwrap();
            let mut expected = std::collections::BTreeSet::new();
            for (r, col) in cells {
                if g.set(c(r, col), true).is_ok() {
                    expected.insert((r, col));
                }
            }
            prop_assert_eq!(g.count_alive(), expected.len());
            prop_assert_eq!(g.alive_cells().len(), expected.len());
        }
    }
}
