//! Reorientation of square/rectangular lattice grids.

use crate::error::RotateError;
use crate::rebuild::rebuild;
use gyre_core::Grid;
use gyre_tiles::{RotationCatalog, Tile};

/// Number of rotation steps in the square family (quarter turns).
pub const SQUARE_STEPS: u32 = 4;

/// Rotate and/or reflect a square-lattice grid.
///
/// `rotation` counts quarter turns (0–3); `reflect_x` mirrors across the
/// vertical axis before rotating. The returned grid is re-bounded to the
/// footprint of the transform, so a quarter turn of a `W x H` grid is
/// `H x W`. Values are carried through unchanged.
///
/// Returns `Err(RotateError::InvalidRotationStep)` for steps above 3.
///
/// # Examples
///
/// ```
/// use gyre_core::{Directions, Grid};
/// use gyre_symmetry::rotate;
///
/// let grid = Grid::from_rows(Directions::Cardinal, vec![
///     vec![1, 2],
///     vec![3, 4],
///     vec![5, 6],
/// ]).unwrap();
/// let turned = rotate(&grid, 1, false).unwrap();
/// assert_eq!(turned.topology().width(), 3);
/// assert_eq!(turned.topology().height(), 2);
/// assert_eq!(turned.values(), &[2, 4, 6, 1, 3, 5]);
/// ```
pub fn rotate<T>(grid: &Grid<T>, rotation: u32, reflect_x: bool) -> Result<Grid<T>, RotateError>
where
    T: Clone + Default,
{
    rotate_inner(grid, rotation, reflect_x, None::<fn(&T) -> Option<T>>)
}

/// [`rotate`] with a per-value transform.
///
/// `value_rotate` is invoked once per cell; returning `None` rejects the
/// value, which clears the destination cell's validity-mask entry and
/// stores `T::default()` there. Rejection is a first-class outcome, not
/// an error.
pub fn rotate_with<T, F>(
    grid: &Grid<T>,
    rotation: u32,
    reflect_x: bool,
    value_rotate: F,
) -> Result<Grid<T>, RotateError>
where
    T: Clone + Default,
    F: FnMut(&T) -> Option<T>,
{
    rotate_inner(grid, rotation, reflect_x, Some(value_rotate))
}

/// [`rotate`] for tile grids, remapping each tile through `catalog`.
///
/// A tile the catalog reports no equivalent for invalidates its
/// destination cell.
pub fn rotate_tiles(
    grid: &Grid<Tile>,
    rotation: u32,
    reflect_x: bool,
    catalog: &RotationCatalog,
) -> Result<Grid<Tile>, RotateError> {
    rotate_inner(
        grid,
        rotation,
        reflect_x,
        Some(|tile: &Tile| catalog.rotate(*tile, rotation, reflect_x)),
    )
}

fn rotate_inner<T, F>(
    grid: &Grid<T>,
    rotation: u32,
    reflect_x: bool,
    value_rotate: Option<F>,
) -> Result<Grid<T>, RotateError>
where
    T: Clone + Default,
    F: FnMut(&T) -> Option<T>,
{
    if rotation >= SQUARE_STEPS {
        return Err(RotateError::InvalidRotationStep {
            step: rotation,
            max: SQUARE_STEPS - 1,
        });
    }
    if rotation == 0 && !reflect_x {
        return Ok(grid.clone());
    }
    let map = move |x: i32, y: i32| {
        let x = if reflect_x { -x } else { x };
        match rotation {
            1 => (y, -x),
            2 => (-x, -y),
            3 => (-y, x),
            _ => (x, y), // 0: reflection only
        }
    };
    Ok(rebuild(grid, map, value_rotate))
}
