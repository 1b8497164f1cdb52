//! The generic cell store: values in flat index order over a [`Topology`].

use crate::directions::Directions;
use crate::error::GridError;
use crate::topology::Topology;

/// An immutable rectangular store of typed cell values.
///
/// Values are held in the flat index order defined by the grid's
/// [`Topology`]: `x` fastest, then `y`, then `z`. A grid never changes
/// after construction; operations that reshape a grid (such as
/// reorientation) allocate and return a new one.
///
/// # Examples
///
/// ```
/// use gyre_core::{Directions, Grid};
///
/// let grid = Grid::from_rows(Directions::Cardinal, vec![
///     vec![1, 2, 3],
///     vec![4, 5, 6],
/// ]).unwrap();
/// assert_eq!(grid.topology().width(), 3);
/// assert_eq!(grid.topology().height(), 2);
/// assert_eq!(*grid.get(2, 1, 0), 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    values: Vec<T>,
    topology: Topology,
}

impl<T> Grid<T> {
    /// Wrap a flat value store in a topology.
    ///
    /// Returns `Err(GridError::ValueCountMismatch)` unless `values` holds
    /// exactly one value per cell.
    pub fn new(values: Vec<T>, topology: Topology) -> Result<Self, GridError> {
        let expected = topology.cell_count();
        if values.len() != expected {
            return Err(GridError::ValueCountMismatch {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self { values, topology })
    }

    /// Build a depth-1 grid from rows of values, top row first.
    ///
    /// Returns `Err(GridError::EmptyGrid)` for no rows or empty rows and
    /// `Err(GridError::RaggedRows)` if row lengths differ.
    pub fn from_rows(directions: Directions, rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if let Some((row, bad)) = rows
            .iter()
            .enumerate()
            .find(|(_, r)| r.len() != width)
        {
            return Err(GridError::RaggedRows {
                row,
                expected: width,
                actual: bad.len(),
            });
        }
        let topology = Topology::new(directions, width as u32, height as u32, 1)?;
        let values: Vec<T> = rows.into_iter().flatten().collect();
        Self::new(values, topology)
    }

    /// Read the value at `(x, y, z)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds, like slice indexing.
    pub fn get(&self, x: i32, y: i32, z: i32) -> &T {
        &self.values[self.topology.index(x, y, z)]
    }

    /// The grid's topology.
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// The flat value store, in topology index order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Decompose into the flat value store and the topology.
    pub fn into_parts(self) -> (Vec<T>, Topology) {
        (self.values, self.topology)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_wrong_value_count() {
        let topo = Topology::new(Directions::Cardinal, 2, 2, 1).unwrap();
        assert_eq!(
            Grid::new(vec![1, 2, 3], topo),
            Err(GridError::ValueCountMismatch {
                expected: 4,
                actual: 3,
            })
        );
    }

    #[test]
    fn from_rows_lays_out_row_major() {
        let grid = Grid::from_rows(Directions::Cardinal, vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(grid.values(), &[1, 2, 3, 4]);
        assert_eq!(*grid.get(0, 0, 0), 1);
        assert_eq!(*grid.get(1, 0, 0), 2);
        assert_eq!(*grid.get(0, 1, 0), 3);
        assert_eq!(*grid.get(1, 1, 0), 4);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        assert_eq!(
            Grid::from_rows(Directions::Cardinal, vec![vec![1, 2], vec![3]]),
            Err(GridError::RaggedRows {
                row: 1,
                expected: 2,
                actual: 1,
            })
        );
    }

    #[test]
    fn from_rows_rejects_empty_input() {
        assert_eq!(
            Grid::<u32>::from_rows(Directions::Cardinal, vec![]),
            Err(GridError::EmptyGrid)
        );
        assert_eq!(
            Grid::<u32>::from_rows(Directions::Cardinal, vec![vec![]]),
            Err(GridError::EmptyGrid)
        );
    }

    #[test]
    fn depth_layers_are_indexed_independently() {
        let topo = Topology::new(Directions::Cardinal, 2, 1, 2).unwrap();
        let grid = Grid::new(vec![1, 2, 3, 4], topo).unwrap();
        assert_eq!(*grid.get(0, 0, 0), 1);
        assert_eq!(*grid.get(1, 0, 0), 2);
        assert_eq!(*grid.get(0, 0, 1), 3);
        assert_eq!(*grid.get(1, 0, 1), 4);
    }

    #[test]
    fn into_parts_round_trips() {
        let grid = Grid::from_rows(Directions::Hexagonal, vec![vec![7, 8]]).unwrap();
        let (values, topology) = grid.into_parts();
        assert_eq!(values, vec![7, 8]);
        assert_eq!(topology.directions(), Directions::Hexagonal);
    }
}
