//! Tile values and rotation-equivalence catalogs.
//!
//! A [`Tile`] is an opaque identifier for one cell value in a tile-based
//! grid. The [`RotationCatalog`] records, per tile, which tile is
//! equivalent under each rotation/reflection of the lattice — or that no
//! equivalent exists. Reorientation entry points consult the catalog to
//! remap tile values alongside their positions.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod tile;

pub use catalog::{RotationCatalog, Treatment};
pub use tile::Tile;
