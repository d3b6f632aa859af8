//! Outer-totalistic transition rules.

use crate::config::ConfigError;
use std::fmt;

/// Birth/survival rule over live-neighbour counts `0..=8`.
///
/// Stored as two 9-bit masks: bit `n` of `birth` means a dead cell with `n`
/// live neighbours is born, bit `n` of `survive` means a live cell with `n`
/// live neighbours stays alive. Every other cell is dead next generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LifeRule {
    birth: u16,
    survive: u16,
}

impl LifeRule {
    /// Build a rule from neighbour-count lists.
    ///
    /// Returns `Err(ConfigError::InvalidRule)` if any count exceeds 8.
    pub fn new(birth: &[u8], survive: &[u8]) -> Result<Self, ConfigError> {
        Ok(Self {
            birth: Self::mask(birth)?,
            survive: Self::mask(survive)?,
        })
    }

    fn mask(counts: &[u8]) -> Result<u16, ConfigError> {
        counts.iter().try_fold(0u16, |acc, &n| {
            if n > 8 {
                return Err(ConfigError::InvalidRule {
                    reason: format!("neighbour count {n} exceeds 8"),
                });
            }
            Ok(acc | (1 << n))
        })
    }

    /// Conway's Game of Life, B3/S23.
    pub const fn conway() -> Self {
        Self {
            birth: 1 << 3,
            survive: (1 << 2) | (1 << 3),
        }
    }

    /// HighLife, B36/S23.
    pub const fn high_life() -> Self {
        Self {
            birth: (1 << 3) | (1 << 6),
            survive: (1 << 2) | (1 << 3),
        }
    }

    /// State of a cell in the next generation.
    #[inline]
    pub fn next_state(&self, alive: bool, live_neighbours: u8) -> bool {
        let mask = if alive { self.survive } else { self.birth };
        live_neighbours <= 8 && mask & (1 << live_neighbours) != 0
    }
}

impl Default for LifeRule {
    fn default() -> Self {
        Self::conway()
    }
}

impl fmt::Display for LifeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = |mask: u16| -> String {
            (0..=8u8)
                .filter(|n| mask & (1 << n) != 0)
                .map(|n| char::from(b'0' + n))
                .collect()
        };
        write!(f, "B{}/S{}", digits(self.birth), digits(self.survive))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conway_truth_table() {
        let r = LifeRule::conway();
        for n in 0..=8u8 {
            assert_eq!(r.next_state(true, n), n == 2 || n == 3, "live, {n}");
            assert_eq!(r.next_state(false, n), n == 3, "dead, {n}");
        }
    }

    #[test]
    fn default_is_conway() {
        assert_eq!(LifeRule::default(), LifeRule::conway());
        assert_eq!(LifeRule::conway().to_string(), "B3/S23");
        assert_eq!(LifeRule::high_life().to_string(), "B36/S23");
    }

    #[test]
    fn new_matches_presets() {
        assert_eq!(LifeRule::new(&[3], &[2, 3]).unwrap(), LifeRule::conway());
        assert_eq!(LifeRule::new(&[6, 3], &[3, 2]).unwrap(), LifeRule::high_life());
    }

    #[test]
    fn new_rejects_count_above_eight() {
        assert!(matches!(
            LifeRule::new(&[9], &[]),
            Err(ConfigError::InvalidRule { .. })
        ));
    }

    #[test]
    fn counts_above_eight_are_dead() {
        let r = LifeRule::new(&[0, 1, 2, 3, 4, 5, 6, 7, 8], &[0, 1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert!(r.next_state(true, 8));
        assert!(!r.next_state(true, 9));
    }
}
