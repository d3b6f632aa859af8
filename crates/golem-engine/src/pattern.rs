//! Seeding patterns and the catalog of selectable presets.
//!
//! [`Pattern`] names the built-in seeding modes. The shapes themselves are
//! configuration data: a [`PatternCatalog`] maps display names to
//! [`Seeding`] entries, and the engine resolves every pattern name through
//! the catalog held in its [`EngineConfig`]. Callers can register new
//! shapes or replace built-in ones without touching the transition logic.

use std::fmt;
use std::str::FromStr;

use golem_core::{Coord, EngineError};
use golem_grid::Grid;
use indexmap::IndexMap;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::EngineConfig;

/// Display name of the manual seeding mode.
pub const MANUAL_NAME: &str = "By Click";

const BLOCK: &[(i32, i32)] = &[(0, 0), (0, 1), (1, 0), (1, 1)];

const BLINKER: &[(i32, i32)] = &[(1, 0), (1, 1), (1, 2)];

const TOAD: &[(i32, i32)] = &[(1, 1), (1, 2), (1, 3), (2, 0), (2, 1), (2, 2)];

const BEACON: &[(i32, i32)] = &[
    (0, 0),
    (0, 1),
    (1, 0),
    (1, 1),
    (2, 2),
    (2, 3),
    (3, 2),
    (3, 3),
];

const GLIDER: &[(i32, i32)] = &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

/// Built-in seeding modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Empty grid; cells are brought to life by toggling ("By Click").
    Manual,
    /// 2×2 still life.
    Block,
    /// Period-2 oscillator, three cells in a row.
    Blinker,
    /// Period-2 oscillator.
    Toad,
    /// Period-2 oscillator made of two diagonally touching blocks.
    Beacon,
    /// Diagonal spaceship.
    Glider,
    /// Random fill driven by the engine's soup seed and density.
    Soup,
}

impl Pattern {
    /// Every built-in pattern, in catalog order.
    pub const ALL: [Pattern; 7] = [
        Pattern::Manual,
        Pattern::Block,
        Pattern::Blinker,
        Pattern::Toad,
        Pattern::Beacon,
        Pattern::Glider,
        Pattern::Soup,
    ];

    /// Display name, as accepted by [`parse`](Self::parse).
    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Manual => MANUAL_NAME,
            Pattern::Block => "Block",
            Pattern::Blinker => "Blinker",
            Pattern::Toad => "Toad",
            Pattern::Beacon => "Beacon",
            Pattern::Glider => "Glider",
            Pattern::Soup => "Soup",
        }
    }

    /// Look up a built-in pattern by display name (case-sensitive).
    pub fn parse(name: &str) -> Result<Self, EngineError> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == name)
            .ok_or_else(|| EngineError::UnknownPattern {
                name: name.to_string(),
            })
    }

    /// Default cells of a fixed preset relative to the anchor, or `None`
    /// for the manual and random modes.
    pub fn default_shape(&self) -> Option<&'static [(i32, i32)]> {
        match self {
            Pattern::Manual | Pattern::Soup => None,
            Pattern::Block => Some(BLOCK),
            Pattern::Blinker => Some(BLINKER),
            Pattern::Toad => Some(TOAD),
            Pattern::Beacon => Some(BEACON),
            Pattern::Glider => Some(GLIDER),
        }
    }

    /// The catalog entry this pattern starts with.
    pub fn default_seeding(&self) -> Seeding {
        match self {
            Pattern::Manual => Seeding::Manual,
            Pattern::Soup => Seeding::Soup,
            preset => Seeding::Shape(PatternShape::new(
                preset.name(),
                preset.default_shape().unwrap_or_default().iter().copied(),
            )),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ── PatternShape ────────────────────────────────────────────────

/// A named set of cells, relative to the pattern anchor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternShape {
    /// Display name.
    pub name: String,
    /// `(row, col)` offsets from the anchor.
    pub cells: Vec<(i32, i32)>,
}

impl PatternShape {
    /// Build a shape from a name and its cell offsets.
    pub fn new(name: impl Into<String>, cells: impl IntoIterator<Item = (i32, i32)>) -> Self {
        Self {
            name: name.into(),
            cells: cells.into_iter().collect(),
        }
    }

    /// Bring the shape's cells to life at `anchor`, clipping any that fall
    /// outside the grid. Returns the number placed.
    pub fn stamp(&self, grid: &mut Grid, anchor: Coord) -> usize {
        grid.fill_from(
            self.cells
                .iter()
                .filter_map(|&(dr, dc)| anchor.offset(dr, dc)),
        )
    }
}

// ── Seeding ─────────────────────────────────────────────────────

/// How a catalog entry populates a fresh grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Seeding {
    /// Leave every cell dead.
    Manual,
    /// Stamp a fixed shape at the configured anchor.
    Shape(PatternShape),
    /// Random fill from the configured soup seed and density.
    Soup,
}

impl Seeding {
    /// Populate `grid`; returns the number of cells brought to life.
    ///
    /// A non-finite soup density seeds nothing; out-of-range densities are
    /// clamped to `[0, 1]`.
    pub(crate) fn seed(&self, grid: &mut Grid, config: &EngineConfig) -> usize {
        match self {
            Seeding::Manual => 0,
            Seeding::Shape(shape) => shape.stamp(grid, config.anchor),
            Seeding::Soup => {
                let density = if config.soup_density.is_finite() {
                    config.soup_density.clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let mut rng = ChaCha8Rng::seed_from_u64(config.soup_seed);
                let n = grid.size() as i32;
                let mut live = Vec::new();
                for row in 0..n {
                    for col in 0..n {
                        if rng.random_bool(density) {
                            live.push(Coord::new(row, col));
                        }
                    }
                }
                grid.fill_from(live)
            }
        }
    }
}

// ── PatternCatalog ──────────────────────────────────────────────

/// Ordered name → [`Seeding`] table.
///
/// Insertion order is listing order. Registering a shape under an existing
/// name replaces that entry in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternCatalog {
    entries: IndexMap<String, Seeding>,
}

impl PatternCatalog {
    /// Catalog of every built-in pattern, manual mode first.
    pub fn standard() -> Self {
        Self {
            entries: Pattern::ALL
                .into_iter()
                .map(|p| (p.name().to_string(), p.default_seeding()))
                .collect(),
        }
    }

    /// Add or replace a shape, keyed by its name.
    pub fn register(&mut self, shape: PatternShape) -> Option<Seeding> {
        self.entries
            .insert(shape.name.clone(), Seeding::Shape(shape))
    }

    /// Builder form of [`register`](Self::register).
    pub fn with_shape(mut self, shape: PatternShape) -> Self {
        self.register(shape);
        self
    }

    /// Selectable names in listing order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// Resolve a name to its seeding entry.
    pub fn get(&self, name: &str) -> Result<&Seeding, EngineError> {
        self.entries
            .get(name)
            .ok_or_else(|| EngineError::UnknownPattern {
                name: name.to_string(),
            })
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
