//! Square cell grid for Golem simulations.
//!
//! [`Grid`] owns a `size × size` matrix of live/dead cells and exposes
//! coordinate-checked reads and writes. It has no knowledge of transition
//! rules; neighbourhood queries follow the 8-connected Moore neighbourhood
//! with absorbing edges (see [`moore`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod moore;

pub use error::GridError;
pub use grid::Grid;
pub use moore::OFFSETS_8;
