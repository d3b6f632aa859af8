//! Engine and runner configuration, validation, and error types.
//!
//! [`EngineConfig`] is consumed by
//! [`SimulationEngine::with_config`](crate::SimulationEngine::with_config);
//! [`RunnerConfig`] by [`Runner::spawn`](crate::Runner::spawn). Both are
//! plain structs with a [`Default`] and a `validate()` that checks
//! invariants up front, so that later operations cannot fail on them.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use golem_core::Coord;

use crate::pattern::PatternCatalog;
use crate::rule::LifeRule;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Pattern anchor has a negative component.
    NegativeAnchor {
        /// The rejected anchor.
        anchor: Coord,
    },
    /// `history_depth` is zero.
    HistoryDepthZero,
    /// `soup_density` is NaN, infinite, or outside `[0, 1]`.
    InvalidSoupDensity {
        /// The invalid value.
        value: f64,
    },
    /// A transition rule could not be built.
    InvalidRule {
        /// Description of the problem.
        reason: String,
    },
    /// `tick_interval` is zero.
    ZeroTickInterval,
    /// `control_capacity` is zero.
    ControlQueueZero,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAnchor { anchor } => {
                write!(f, "pattern anchor {anchor} must be non-negative")
            }
            Self::HistoryDepthZero => write!(f, "history_depth must be at least 1"),
            Self::InvalidSoupDensity { value } => {
                write!(f, "soup_density must be within [0, 1], got {value}")
            }
            Self::InvalidRule { reason } => write!(f, "invalid rule: {reason}"),
            Self::ZeroTickInterval => write!(f, "tick_interval must be non-zero"),
            Self::ControlQueueZero => write!(f, "control_capacity must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

// ── EngineConfig ───────────────────────────────────────────────────

/// Settings for a [`SimulationEngine`](crate::SimulationEngine).
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    /// Offset at which preset shapes are stamped. Default: `(0, 0)`.
    pub anchor: Coord,
    /// Transition rule. Default: Conway B3/S23.
    pub rule: LifeRule,
    /// Number of past generation fingerprints kept for period detection.
    /// Default: 16.
    pub history_depth: usize,
    /// Seed for the random `Soup` preset. Default: 0.
    pub soup_seed: u64,
    /// Probability of each cell being alive in the `Soup` preset.
    /// Default: 1/3.
    pub soup_density: f64,
    /// Patterns selectable by name in `initialize`.
    /// Default: [`PatternCatalog::standard`].
    pub catalog: PatternCatalog,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            anchor: Coord::new(0, 0),
            rule: LifeRule::conway(),
            history_depth: 16,
            soup_seed: 0,
            soup_density: 1.0 / 3.0,
            catalog: PatternCatalog::standard(),
        }
    }
}

impl EngineConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.anchor.row < 0 || self.anchor.col < 0 {
            return Err(ConfigError::NegativeAnchor {
                anchor: self.anchor,
            });
        }
        if self.history_depth == 0 {
            return Err(ConfigError::HistoryDepthZero);
        }
        if !self.soup_density.is_finite() || !(0.0..=1.0).contains(&self.soup_density) {
            return Err(ConfigError::InvalidSoupDensity {
                value: self.soup_density,
            });
        }
        Ok(())
    }
}

// ── RunnerConfig ───────────────────────────────────────────────────

/// Settings for the background auto-tick [`Runner`](crate::Runner).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Period between automatic ticks while running. Default: 200 ms.
    pub tick_interval: Duration,
    /// Capacity of the bounded control channel. Default: 64.
    pub control_capacity: usize,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(200),
            control_capacity: 64,
        }
    }
}

impl RunnerConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.control_capacity == 0 {
            return Err(ConfigError::ControlQueueZero);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(EngineConfig::default().validate(), Ok(()));
        assert_eq!(RunnerConfig::default().validate(), Ok(()));
    }

    #[test]
    fn negative_anchor_rejected() {
        let cfg = EngineConfig {
            anchor: Coord::new(0, -1),
            ..Default::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::NegativeAnchor {
                anchor: Coord::new(0, -1)
            })
        );
    }

    #[test]
    fn zero_history_rejected() {
        let cfg = EngineConfig {
            history_depth: 0,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::HistoryDepthZero));
    }

    #[test]
    fn soup_density_bounds() {
        for bad in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            let cfg = EngineConfig {
                soup_density: bad,
                ..Default::default()
            };
            assert!(matches!(
                cfg.validate(),
                Err(ConfigError::InvalidSoupDensity { .. })
            ));
        }
        for ok in [0.0, 0.5, 1.0] {
            let cfg = EngineConfig {
                soup_density: ok,
                ..Default::default()
            };
            assert_eq!(cfg.validate(), Ok(()));
        }
    }

    #[test]
    fn runner_config_rejects_zeroes() {
        let cfg = RunnerConfig {
            tick_interval: Duration::ZERO,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroTickInterval));
        let cfg = RunnerConfig {
            control_capacity: 0,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ControlQueueZero));
    }
}
