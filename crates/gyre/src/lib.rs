//! Gyre: fixed-step rotation and reflection of square and hexagonal grids.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Gyre sub-crates. For most users, adding `gyre` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gyre::prelude::*;
//!
//! // A 2x3 square grid of numbered cells.
//! let grid = Grid::from_rows(Directions::Cardinal, vec![
//!     vec![1, 2],
//!     vec![3, 4],
//!     vec![5, 6],
//! ]).unwrap();
//!
//! // One quarter turn swaps the extents and re-bounds the footprint.
//! let turned = rotate(&grid, 1, false).unwrap();
//! assert_eq!(turned.topology().width(), 3);
//! assert_eq!(turned.topology().height(), 2);
//! assert_eq!(turned.values(), &[2, 4, 6, 1, 3, 5]);
//!
//! // Tile grids remap values through a rotation catalog; tiles with no
//! // rotated counterpart invalidate their destination cell.
//! let mut catalog = RotationCatalog::new(Treatment::Missing);
//! catalog.add(Tile(1), 1, false, Tile(2));
//! let tiles = Grid::from_rows(Directions::Cardinal, vec![vec![Tile(1), Tile(9)]]).unwrap();
//! let turned = rotate_tiles(&tiles, 1, false, &catalog).unwrap();
//! assert_eq!(turned.values(), &[Tile(0), Tile(2)]);
//! assert_eq!(turned.topology().mask(), Some(&[0, 1][..]));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for paths not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gyre-core` | Topologies, validity masks, the `Grid` store |
//! | [`tiles`] | `gyre-tiles` | `Tile` values and rotation catalogs |
//! | [`symmetry`] | `gyre-symmetry` | Rotation/reflection entry points |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use gyre_core as types;
pub use gyre_symmetry as symmetry;
pub use gyre_tiles as tiles;

/// Everything most consumers need, in one import.
pub mod prelude {
    pub use gyre_core::{Directions, Grid, GridError, Topology};
    pub use gyre_symmetry::{
        hex_rotate, hex_rotate_tiles, hex_rotate_with, rotate, rotate_tiles, rotate_with,
        RotateError, HEX_STEPS, SQUARE_STEPS,
    };
    pub use gyre_tiles::{RotationCatalog, Tile, Treatment};
}
