//! Period detection over recent generations.

use std::collections::VecDeque;

use golem_grid::Grid;

/// Sliding window of recent generations.
///
/// Each observed generation is compared against the window; a match
/// `p` generations back means the board has entered a cycle of period `p`
/// (1 for a still life, 2 for a blinker or beacon). Fingerprints narrow
/// the search and a full grid comparison confirms every match, so a hash
/// collision never reports a period.
#[derive(Clone, Debug)]
pub struct CycleDetector {
    depth: usize,
    recent: VecDeque<(u64, Grid)>,
}

impl CycleDetector {
    /// Create a detector remembering up to `depth` generations (minimum 1).
    pub fn new(depth: usize) -> Self {
        let depth = depth.max(1);
        Self {
            depth,
            recent: VecDeque::with_capacity(depth),
        }
    }

    /// Forget everything and start over from `grid`.
    pub fn restart(&mut self, grid: &Grid) {
        self.recent.clear();
        self.recent.push_back((grid.fingerprint(), grid.snapshot()));
    }

    /// Record a new generation. Returns the period if it repeats one in
    /// the window.
    pub fn observe(&mut self, grid: &Grid) -> Option<u64> {
        self.observe_keyed(grid.fingerprint(), grid)
    }

    pub(crate) fn observe_keyed(&mut self, fingerprint: u64, grid: &Grid) -> Option<u64> {
        let period = self
            .recent
            .iter()
            .rev()
            .position(|(fp, seen)| *fp == fingerprint && seen == grid)
            .map(|i| i as u64 + 1);
        if self.recent.len() == self.depth {
            self.recent.pop_front();
        }
        self.recent.push_back((fingerprint, grid.snapshot()));
        period
    }

    /// Number of generations currently held.
    pub fn len(&self) -> usize {
        self.recent.len()
    }

    /// Whether no generation has been recorded.
    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use golem_core::Coord;

    fn grid_with(cells: &[(i32, i32)]) -> Grid {
        let mut g = Grid::new(4).unwrap();
        g.fill_from(cells.iter().map(|&(r, c)| Coord::new(r, c)));
        g
    }

    #[test]
    fn still_life_has_period_one() {
        let block = grid_with(&[(0, 0), (0, 1), (1, 0), (1, 1)]);
        let mut d = CycleDetector::new(4);
        d.restart(&block);
        assert_eq!(d.observe(&block), Some(1));
    }

    #[test]
    fn oscillator_has_period_two() {
        let horizontal = grid_with(&[(1, 0), (1, 1), (1, 2)]);
        let vertical = grid_with(&[(0, 1), (1, 1), (2, 1)]);
        let mut d = CycleDetector::new(4);
        d.restart(&horizontal);
        assert_eq!(d.observe(&vertical), None);
        assert_eq!(d.observe(&horizontal), Some(2));
        assert_eq!(d.observe(&vertical), Some(2));
    }

    #[test]
    fn window_forgets_old_generations() {
        let a = grid_with(&[(0, 0)]);
        let b = grid_with(&[(1, 1)]);
        let c = grid_with(&[(2, 2)]);
        let mut d = CycleDetector::new(2);
        d.restart(&a);
        assert_eq!(d.observe(&b), None);
        assert_eq!(d.observe(&c), None);
        assert_eq!(d.len(), 2);
        // `a` has been evicted.
        assert_eq!(d.observe(&a), None);
    }

    #[test]
    fn zero_depth_is_clamped() {
        let g = grid_with(&[]);
        let mut d = CycleDetector::new(0);
        assert!(d.is_empty());
        d.restart(&g);
        assert_eq!(d.observe(&g), Some(1));
        assert_eq!(d.len(), 1);
    }

    #[test]
    fn colliding_fingerprints_are_not_a_period() {
        let a = grid_with(&[(0, 0)]);
        let b = grid_with(&[(3, 3)]);
        let mut d = CycleDetector::new(4);
        d.recent.push_back((99, a.clone()));
        assert_eq!(d.observe_keyed(99, &b), None);
        assert_eq!(d.observe_keyed(99, &a), Some(2));
    }
}
