//! Rotation and reflection of square and hexagonal lattice grids.
//!
//! Both lattice families share one engine: a family-specific coordinate
//! mapper feeds a rebuild pass that recomputes the bounding box of the
//! transformed footprint, copies every cell to its mapped position, and
//! propagates the validity mask. An optional
//! per-value transform remaps cell values alongside their positions and
//! may reject a value, invalidating its destination cell.
//!
//! Entry points come in three forms per family: plain ([`rotate`],
//! [`hex_rotate`]), with a caller-supplied value transform
//! ([`rotate_with`], [`hex_rotate_with`]), and specialized to tile grids
//! backed by a rotation catalog ([`rotate_tiles`], [`hex_rotate_tiles`]).
//!
//! Rotating by step 0 without reflection returns an observably identical
//! clone of the input without running the engine.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod hex;
pub mod square;

mod rebuild;

pub use error::RotateError;
pub use hex::{hex_rotate, hex_rotate_tiles, hex_rotate_with, HEX_STEPS};
pub use square::{rotate, rotate_tiles, rotate_with, SQUARE_STEPS};
