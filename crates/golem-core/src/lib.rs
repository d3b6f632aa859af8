//! Core types and traits for the Golem Game of Life engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary shared by the grid and engine crates:
//! coordinates, the cycle counter, the engine error type, and the
//! read-only [`CellReader`] trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod traits;

pub use error::EngineError;
pub use id::{Coord, CycleCount};
pub use traits::CellReader;
