//! Per-tile rotation-equivalence lookup.

use crate::tile::Tile;
use indexmap::IndexMap;

/// Fallback behavior for tiles with no registered equivalence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Treatment {
    /// The tile is rotation-invariant: it maps to itself.
    #[default]
    Unchanged,
    /// The tile has no rotated counterpart: lookups report no equivalent.
    Missing,
}

/// Catalog of per-tile rotation equivalences.
///
/// Records which tile a given tile becomes under a rotation step and
/// reflection flag. Tiles without an explicit entry fall back to the
/// catalog's default [`Treatment`]. The identity transform (step 0, no
/// reflection) always maps a tile to itself, entries notwithstanding.
///
/// "No equivalent" is a first-class outcome, not an error: a lookup
/// returning `None` tells the reorientation engine to invalidate the
/// destination cell.
///
/// # Examples
///
/// ```
/// use gyre_tiles::{RotationCatalog, Tile, Treatment};
///
/// let mut catalog = RotationCatalog::new(Treatment::Missing);
/// catalog.add(Tile(1), 1, false, Tile(2));
///
/// assert_eq!(catalog.rotate(Tile(1), 1, false), Some(Tile(2)));
/// assert_eq!(catalog.rotate(Tile(3), 1, false), None);
/// assert_eq!(catalog.rotate(Tile(3), 0, false), Some(Tile(3)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct RotationCatalog {
    entries: IndexMap<(Tile, u32, bool), Tile>,
    default_treatment: Treatment,
}

impl RotationCatalog {
    /// Create an empty catalog with the given fallback treatment.
    pub fn new(default_treatment: Treatment) -> Self {
        Self {
            entries: IndexMap::new(),
            default_treatment,
        }
    }

    /// Register one equivalence: `tile` becomes `result` under
    /// `(rotation, reflect_x)`.
    ///
    /// A later registration for the same key replaces the earlier one.
    pub fn add(&mut self, tile: Tile, rotation: u32, reflect_x: bool, result: Tile) {
        self.entries.insert((tile, rotation, reflect_x), result);
    }

    /// Number of registered equivalences.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no registered equivalences.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the equivalent of `tile` under `(rotation, reflect_x)`.
    ///
    /// Returns `Some` with the equivalent tile, or `None` when the tile
    /// has no rotated counterpart. Precedence: identity transform, then
    /// explicit entries, then the default treatment.
    pub fn rotate(&self, tile: Tile, rotation: u32, reflect_x: bool) -> Option<Tile> {
        if rotation == 0 && !reflect_x {
            return Some(tile);
        }
        if let Some(&result) = self.entries.get(&(tile, rotation, reflect_x)) {
            return Some(result);
        }
        match self.default_treatment {
            Treatment::Unchanged => Some(tile),
            Treatment::Missing => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_always_maps_to_self() {
        let catalog = RotationCatalog::new(Treatment::Missing);
        assert_eq!(catalog.rotate(Tile(5), 0, false), Some(Tile(5)));
    }

    #[test]
    fn explicit_entry_wins_over_default() {
        let mut catalog = RotationCatalog::new(Treatment::Missing);
        catalog.add(Tile(1), 2, false, Tile(9));
        assert_eq!(catalog.rotate(Tile(1), 2, false), Some(Tile(9)));
        // Same tile, different transform: falls through to the default.
        assert_eq!(catalog.rotate(Tile(1), 1, false), None);
    }

    #[test]
    fn unchanged_default_keeps_tile() {
        let catalog = RotationCatalog::default();
        assert_eq!(catalog.rotate(Tile(4), 3, true), Some(Tile(4)));
    }

    #[test]
    fn missing_default_reports_no_equivalent() {
        let catalog = RotationCatalog::new(Treatment::Missing);
        assert_eq!(catalog.rotate(Tile(4), 3, true), None);
    }

    #[test]
    fn reflection_is_part_of_the_key() {
        let mut catalog = RotationCatalog::new(Treatment::Missing);
        catalog.add(Tile(1), 1, true, Tile(2));
        assert_eq!(catalog.rotate(Tile(1), 1, true), Some(Tile(2)));
        assert_eq!(catalog.rotate(Tile(1), 1, false), None);
    }

    #[test]
    fn later_registration_replaces_earlier() {
        let mut catalog = RotationCatalog::new(Treatment::Missing);
        catalog.add(Tile(1), 1, false, Tile(2));
        catalog.add(Tile(1), 1, false, Tile(3));
        assert_eq!(catalog.rotate(Tile(1), 1, false), Some(Tile(3)));
        assert_eq!(catalog.len(), 1);
    }
}
