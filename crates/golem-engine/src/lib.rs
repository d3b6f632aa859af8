//! Game of Life simulation engine.
//!
//! [`SimulationEngine`] owns a [`Grid`](golem_grid::Grid) and the counters
//! that describe it, seeds it from a [`Pattern`], and advances it one
//! generation per [`tick()`](SimulationEngine::tick). It holds no timer and
//! performs no I/O; automatic ticking is provided separately by
//! [`Runner`], which moves an engine onto its own thread.
//!
//! # Lifecycle
//!
//! ```text
//! Uninitialized --initialize--> Initialized --tick/toggle_cell--> Initialized
//!       ^                             |
//!       +------------reset------------+
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod history;
pub mod metrics;
pub mod pattern;
pub mod rule;
pub mod runner;

pub use config::{ConfigError, EngineConfig, RunnerConfig};
pub use engine::{EngineState, Observation, SimulationEngine, TickReport};
pub use history::CycleDetector;
pub use metrics::StepMetrics;
pub use pattern::{Pattern, PatternCatalog, PatternShape, Seeding};
pub use rule::LifeRule;
pub use runner::{Runner, RunnerError};
