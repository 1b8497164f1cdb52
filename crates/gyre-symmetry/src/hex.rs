//! Reorientation of hexagonal lattice grids (axial coordinates).
//!
//! Sixth-turn rotation has no clean closed form directly on axial
//! coordinates, so the mapper works in cube coordinates `(q, r, s)` with
//! `q + r + s = 0`: a step decomposes into a 120-degree cube-axis
//! permutation (`step % 3`) optionally followed by a point reflection
//! (`step % 2 == 1`).

use crate::error::RotateError;
use crate::rebuild::rebuild;
use gyre_core::Grid;
use gyre_tiles::{RotationCatalog, Tile};

/// Number of rotation steps in the hex family (sixth turns).
pub const HEX_STEPS: u32 = 6;

/// Rotate and/or reflect a hexagonal-lattice grid.
///
/// `rotation` counts sixth turns (0–5); `reflect_x` mirrors across the
/// vertical axis (consistently with the axial skew) before rotating.
/// The returned grid is re-bounded to the footprint of the transform;
/// because a rotated axial rectangle is generally not a rectangle, the
/// result can contain padding cells, which carry `T::default()` and a
/// cleared validity-mask entry.
///
/// Returns `Err(RotateError::InvalidRotationStep)` for steps above 5.
///
/// # Examples
///
/// ```
/// use gyre_core::{Directions, Grid};
/// use gyre_symmetry::hex_rotate;
///
/// let grid = Grid::from_rows(Directions::Hexagonal, vec![
///     vec![1, 2],
///     vec![3, 4],
/// ]).unwrap();
/// let turned = hex_rotate(&grid, 3, false).unwrap();
/// // Three sixth turns are a half turn.
/// assert_eq!(turned.values(), &[4, 3, 2, 1]);
/// ```
pub fn hex_rotate<T>(
    grid: &Grid<T>,
    rotation: u32,
    reflect_x: bool,
) -> Result<Grid<T>, RotateError>
where
    T: Clone + Default,
{
    hex_rotate_inner(grid, rotation, reflect_x, None::<fn(&T) -> Option<T>>)
}

/// [`hex_rotate`] with a per-value transform.
///
/// `value_rotate` is invoked once per cell; returning `None` rejects the
/// value, which clears the destination cell's validity-mask entry and
/// stores `T::default()` there.
pub fn hex_rotate_with<T, F>(
    grid: &Grid<T>,
    rotation: u32,
    reflect_x: bool,
    value_rotate: F,
) -> Result<Grid<T>, RotateError>
where
    T: Clone + Default,
    F: FnMut(&T) -> Option<T>,
{
    hex_rotate_inner(grid, rotation, reflect_x, Some(value_rotate))
}

/// [`hex_rotate`] for tile grids, remapping each tile through `catalog`.
pub fn hex_rotate_tiles(
    grid: &Grid<Tile>,
    rotation: u32,
    reflect_x: bool,
    catalog: &RotationCatalog,
) -> Result<Grid<Tile>, RotateError> {
    hex_rotate_inner(
        grid,
        rotation,
        reflect_x,
        Some(|tile: &Tile| catalog.rotate(*tile, rotation, reflect_x)),
    )
}

fn hex_rotate_inner<T, F>(
    grid: &Grid<T>,
    rotation: u32,
    reflect_x: bool,
    value_rotate: Option<F>,
) -> Result<Grid<T>, RotateError>
where
    T: Clone + Default,
    F: FnMut(&T) -> Option<T>,
{
    if rotation >= HEX_STEPS {
        return Err(RotateError::InvalidRotationStep {
            step: rotation,
            max: HEX_STEPS - 1,
        });
    }
    if rotation == 0 && !reflect_x {
        return Ok(grid.clone());
    }
    let micro_rotate = rotation % 3;
    let half_turn = rotation % 2 == 1;
    let map = move |x: i32, y: i32| {
        let x = if reflect_x { -x + y } else { x };
        let q = x - y;
        let r = -x;
        let s = y;
        let (q, r, s) = match micro_rotate {
            1 => (r, s, q),
            2 => (s, q, r),
            _ => (q, r, s),
        };
        // Back to axial; the q component is redundant (q + r + s = 0).
        let (_, r, s) = if half_turn { (-q, -r, -s) } else { (q, r, s) };
        (-r, s)
    };
    Ok(rebuild(grid, map, value_rotate))
}
