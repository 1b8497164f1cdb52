//! Core grid types for the Gyre lattice toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! structures everything else consumes: adjacency descriptors for the
//! supported lattice families, the [`Topology`] (extents, flat indexing,
//! and per-cell validity mask), and the generic [`Grid`] cell store.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod directions;
pub mod error;
pub mod grid;
pub mod topology;

pub use directions::Directions;
pub use error::GridError;
pub use grid::Grid;
pub use topology::Topology;
