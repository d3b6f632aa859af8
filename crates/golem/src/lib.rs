//! Golem: a Game of Life simulation engine.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Golem sub-crates. For most users, adding `golem` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use golem::prelude::*;
//!
//! let mut engine = SimulationEngine::new();
//! engine.initialize(10, "By Click").unwrap();
//! for (r, c) in [(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)] {
//!     engine.toggle_cell(r, c).unwrap();
//! }
//! assert_eq!(engine.total_alive_cells(), 8);
//!
//! assert_eq!(engine.tick().unwrap().alive, 6);
//! assert_eq!(engine.tick().unwrap().alive, 8);
//! assert_eq!(engine.total_cycles(), CycleCount(2));
//!
//! engine.reset();
//! assert!(!engine.state().is_initialized);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `golem-core` | `Coord`, `CycleCount`, `EngineError`, `CellReader` |
//! | [`grid`] | `golem-grid` | `Grid` and Moore-neighbourhood helpers |
//! | [`engine`] | `golem-engine` | `SimulationEngine`, patterns, rules, `Runner` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, errors, and traits (`golem-core`).
pub use golem_core as types;

/// The cell grid (`golem-grid`).
pub use golem_grid as grid;

/// Simulation engine, configuration, patterns, and runner (`golem-engine`).
pub use golem_engine as engine;

/// Common imports for typical usage.
///
/// ```rust
/// use golem::prelude::*;
/// ```
pub mod prelude {
    pub use golem_core::{CellReader, Coord, CycleCount, EngineError};
    pub use golem_engine::{
        EngineConfig, EngineState, LifeRule, Observation, Pattern, PatternCatalog, PatternShape,
        Runner, RunnerConfig, RunnerError, SimulationEngine, TickReport,
    };
    pub use golem_grid::Grid;
}
