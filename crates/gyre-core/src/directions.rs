//! Adjacency descriptors for the supported lattice families.

use smallvec::SmallVec;

/// 4-connected square offsets in `(dx, dy)` order: E, N, W, S.
const CARDINAL_OFFSETS: [(i32, i32); 4] = [(1, 0), (0, -1), (-1, 0), (0, 1)];

/// 8-connected square offsets: cardinals first, then diagonals.
const EIGHT_WAY_OFFSETS: [(i32, i32); 8] = [
    (1, 0),
    (0, -1),
    (-1, 0),
    (0, 1),
    (1, -1),
    (-1, -1),
    (-1, 1),
    (1, 1),
];

/// Pointy-top hex offsets in axial `(dx, dy)` order: E, NE, NW, W, SW, SE.
const HEX_OFFSETS: [(i32, i32); 6] = [
    (1, 0),  // E
    (1, -1), // NE
    (0, -1), // NW
    (-1, 0), // W
    (-1, 1), // SW
    (0, 1),  // SE
];

/// The adjacency descriptor carried by a [`Topology`](crate::Topology).
///
/// Identifies the lattice family and fixes the neighbour offset table.
/// Grid reorientation passes this through unchanged: a rotated hexagonal
/// grid is still hexagonal.
///
/// # Examples
///
/// ```
/// use gyre_core::Directions;
///
/// assert_eq!(Directions::Cardinal.count(), 4);
/// assert_eq!(Directions::Hexagonal.count(), 6);
///
/// // Neighbours are offset applications, not bounds-checked.
/// let n = Directions::Cardinal.neighbours(0, 0);
/// assert!(n.contains(&(-1, 0)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Directions {
    /// 4-neighbour square lattice (N/S/E/W).
    Cardinal,
    /// 8-neighbour square lattice (cardinals plus diagonals).
    EightWay,
    /// 6-neighbour hexagonal lattice, axial coordinates, pointy-top.
    Hexagonal,
}

impl Directions {
    /// Number of neighbours per interior cell.
    pub fn count(&self) -> usize {
        self.offsets().len()
    }

    /// The `(dx, dy)` offset table for this lattice family.
    ///
    /// Offsets are in a deterministic family-defined order.
    pub fn offsets(&self) -> &'static [(i32, i32)] {
        match self {
            Self::Cardinal => &CARDINAL_OFFSETS,
            Self::EightWay => &EIGHT_WAY_OFFSETS,
            Self::Hexagonal => &HEX_OFFSETS,
        }
    }

    /// Apply every offset to `(x, y)`.
    ///
    /// Results are not bounds-checked; callers filter against their own
    /// extents.
    pub fn neighbours(&self, x: i32, y: i32) -> SmallVec<[(i32, i32); 8]> {
        self.offsets().iter().map(|&(dx, dy)| (x + dx, y + dy)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_offset_tables() {
        assert_eq!(Directions::Cardinal.count(), 4);
        assert_eq!(Directions::EightWay.count(), 8);
        assert_eq!(Directions::Hexagonal.count(), 6);
    }

    #[test]
    fn hex_neighbours_of_origin() {
        let n = Directions::Hexagonal.neighbours(0, 0);
        assert_eq!(n.len(), 6);
        assert!(n.contains(&(1, 0))); // E
        assert!(n.contains(&(1, -1))); // NE
        assert!(n.contains(&(0, -1))); // NW
        assert!(n.contains(&(-1, 0))); // W
        assert!(n.contains(&(-1, 1))); // SW
        assert!(n.contains(&(0, 1))); // SE
    }

    #[test]
    fn cardinal_neighbours_are_translated() {
        let n = Directions::Cardinal.neighbours(2, 3);
        assert_eq!(n.len(), 4);
        assert!(n.contains(&(3, 3)));
        assert!(n.contains(&(2, 2)));
        assert!(n.contains(&(1, 3)));
        assert!(n.contains(&(2, 4)));
    }

    #[test]
    fn eight_way_includes_diagonals() {
        let n = Directions::EightWay.neighbours(0, 0);
        assert!(n.contains(&(1, 1)));
        assert!(n.contains(&(-1, -1)));
    }
}
