//! The [`Tile`] identifier type.

use std::fmt;

/// Identifies a tile within a tile set.
///
/// Tiles are registered by the consumer and referenced by sequential IDs.
/// `Tile(n)` corresponds to the n-th tile in the consumer's tile set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tile(pub u32);

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Tile {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
