//! Candidate cell gathering for the narrow phase.
//!
//! The capsule's bounds are padded out to whole grid cells and every cell in
//! that range is queried. Only solid cells are kept. Nothing is cached between
//! frames; the set always reflects the current tentative position.

use glam::IVec3;
use log::trace;

use crate::geometry::Aabb;
use crate::numeric::cell_corner;
use crate::world::VoxelWorld;

/// Collects the bounds of every solid cell that could touch `bounds`.
///
/// Cells are visited with X outermost, then Y, then Z, so the resolver's
/// tie-breaking is deterministic for a given world.
///
/// # Examples
/// ```
/// use glam::{IVec3, Vec3};
/// use voxel_body::{solid_cells, Aabb, SparseVoxelWorld};
/// let mut world = SparseVoxelWorld::new(1.0).unwrap();
/// world.set(IVec3::new(0, 0, 0), 1);
/// world.set(IVec3::new(5, 5, 5), 1);
/// let bounds = Aabb::new(Vec3::new(-0.5, 0.5, -0.5), Vec3::new(0.5, 1.5, 0.5));
/// let cells = solid_cells(&world, &bounds);
/// assert_eq!(cells, vec![Aabb::new(Vec3::ZERO, Vec3::ONE)]);
/// ```
#[must_use]
pub fn solid_cells<W>(world: &W, bounds: &Aabb) -> Vec<Aabb>
where
    W: VoxelWorld + ?Sized,
{
    let mut cells = Vec::new();
    solid_cells_into(world, bounds, &mut cells);
    cells
}

/// Like [`solid_cells`] but reuses `out`, which is cleared first.
pub fn solid_cells_into<W>(world: &W, bounds: &Aabb, out: &mut Vec<Aabb>)
where
    W: VoxelWorld + ?Sized,
{
    out.clear();
    let scale = world.scale();
    let (lo, hi) = bounds.cell_span(scale);
    for x in lo.x..hi.x {
        for y in lo.y..hi.y {
            for z in lo.z..hi.z {
                let index = IVec3::new(x, y, z);
                if world.is_solid(cell_corner(index, scale)) {
                    out.push(Aabb::cell(index, scale));
                }
            }
        }
    }
    trace!(
        "broadphase scanned cells {lo:?}..{hi:?}, {} solid",
        out.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::FnWorld;
    use glam::Vec3;
    use std::cell::Cell;

    #[test]
    fn queries_every_cell_in_padded_span() {
        let queries = Cell::new(0_u32);
        let world = FnWorld::new(1.0, |_| {
            queries.set(queries.get() + 1);
            0
        });
        let bounds = Aabb::new(Vec3::new(-0.5, 0.2, 0.1), Vec3::new(0.5, 2.2, 0.9));
        assert!(solid_cells(&world, &bounds).is_empty());
        assert_eq!(queries.get(), 2 * 3 * 1);
    }

    #[test]
    fn reused_buffer_is_cleared() {
        let world = FnWorld::new(1.0, |corner: Vec3| i32::from(corner.x >= 0.0));
        let bounds = Aabb::new(Vec3::splat(-0.5), Vec3::splat(0.5));
        let mut out = vec![Aabb::default(); 8];
        solid_cells_into(&world, &bounds, &mut out);
        assert_eq!(out.len(), 4);
        assert!(out.iter().all(|cell| cell.min.x >= 0.0));
    }
}
