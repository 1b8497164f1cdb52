//! The shared rebuild engine behind both lattice families.
//!
//! Given a coordinate mapper, computes the bounding box of the mapped
//! footprint, allocates a grid of that size, and copies every source
//! cell through the mapper and the optional per-value transform.

use gyre_core::{Grid, Topology};

/// Rebuild `grid` through `map_coord`, remapping values with `value_rotate`.
///
/// The mapper must be a bijection on the integer lattice (every supported
/// transform is), so no two source cells write the same destination cell.
/// Destination cells outside the mapped footprint keep `T::default()`
/// and a cleared mask entry. A destination mask entry is set only when
/// the value transform accepted the value *and* the source cell was
/// valid in the source topology's own mask.
///
/// `value_rotate` returning `None` rejects a value: the destination cell
/// stores `T::default()` and is marked invalid. `None` for the whole
/// parameter means "no value transform" — values are cloned through
/// unchanged and always accepted.
///
/// Every depth layer undergoes the identical 2D transform independently.
pub(crate) fn rebuild<T, F>(
    grid: &Grid<T>,
    map_coord: impl Fn(i32, i32) -> (i32, i32),
    mut value_rotate: Option<F>,
) -> Grid<T>
where
    T: Clone + Default,
    F: FnMut(&T) -> Option<T>,
{
    let source = grid.topology();
    let width = source.width() as i32;
    let height = source.height() as i32;
    let depth = source.depth();

    // The supported transforms are affine, so the extrema of the mapped
    // footprint occur at the mapped corners of the source rectangle.
    let corners = [
        map_coord(0, 0),
        map_coord(width - 1, 0),
        map_coord(width - 1, height - 1),
        map_coord(0, height - 1),
    ];
    let min_x = corners[0].0.min(corners[1].0).min(corners[2].0).min(corners[3].0);
    let max_x = corners[0].0.max(corners[1].0).max(corners[2].0).max(corners[3].0);
    let min_y = corners[0].1.min(corners[1].1).min(corners[2].1).min(corners[3].1);
    let max_y = corners[0].1.max(corners[1].1).max(corners[2].1).max(corners[3].1);

    // Shift mapped coordinates into a zero-based rectangle.
    let offset_x = -min_x;
    let offset_y = -min_y;
    let new_width = (max_x as i64 - min_x as i64 + 1) as u32;
    let new_height = (max_y as i64 - min_y as i64 + 1) as u32;

    let layer = new_width as usize * new_height as usize;
    let mut values = vec![T::default(); layer * depth as usize];
    let mut mask = vec![0u8; layer * depth as usize];

    for z in 0..depth as i32 {
        for y in 0..height {
            for x in 0..width {
                let (map_x, map_y) = map_coord(x, y);
                // Same layout as Topology::index on the rebuilt extents.
                let dest = (map_x + offset_x) as usize
                    + (map_y + offset_y) as usize * new_width as usize
                    + z as usize * layer;
                let source_valid = source.contains_index(source.index(x, y, z));
                let (value, accepted) = match value_rotate.as_mut() {
                    Some(rotate) => match rotate(grid.get(x, y, z)) {
                        Some(value) => (value, true),
                        None => (T::default(), false),
                    },
                    None => (grid.get(x, y, z).clone(), true),
                };
                values[dest] = value;
                mask[dest] = u8::from(accepted && source_valid);
            }
        }
    }

    let rebuilt = Topology::with_mask(source.directions(), new_width, new_height, depth, mask)
        .and_then(|topology| Grid::new(values, topology));
    match rebuilt {
        Ok(grid) => grid,
        Err(err) => unreachable!("rebuilt extents derive from a valid source topology: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gyre_core::Directions;

    fn numbered(width: u32, height: u32) -> Grid<u32> {
        let topology = Topology::new(Directions::Cardinal, width, height, 1).unwrap();
        let values = (0..topology.cell_count() as u32).collect();
        Grid::new(values, topology).unwrap()
    }

    #[test]
    fn identity_mapper_copies_in_place() {
        let grid = numbered(3, 2);
        let out = rebuild(&grid, |x, y| (x, y), None::<fn(&u32) -> Option<u32>>);
        assert_eq!(out.values(), grid.values());
        assert_eq!(out.topology().width(), 3);
        assert_eq!(out.topology().height(), 2);
        assert!((0..6).all(|i| out.topology().contains_index(i)));
    }

    #[test]
    fn translation_is_normalized_away() {
        // A pure translation maps onto the same zero-based rectangle.
        let grid = numbered(2, 2);
        let out = rebuild(&grid, |x, y| (x - 7, y + 3), None::<fn(&u32) -> Option<u32>>);
        assert_eq!(out.values(), grid.values());
        assert_eq!(out.topology().width(), 2);
        assert_eq!(out.topology().height(), 2);
    }

    #[test]
    fn value_transform_applies_per_cell() {
        let grid = numbered(2, 1);
        let out = rebuild(&grid, |x, y| (x, y), Some(|v: &u32| Some(v * 10)));
        assert_eq!(out.values(), &[0, 10]);
    }

    #[test]
    fn rejected_value_clears_mask_and_stores_default() {
        let grid = numbered(2, 1);
        let out = rebuild(
            &grid,
            |x, y| (x, y),
            Some(|v: &u32| if *v == 1 { None } else { Some(*v + 5) }),
        );
        assert_eq!(out.values(), &[5, 0]);
        assert!(out.topology().contains_index(0));
        assert!(!out.topology().contains_index(1));
    }
}
