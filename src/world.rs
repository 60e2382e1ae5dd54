//! Voxel world capability consumed by the broadphase.
//!
//! Bodies never look the world up through global state: they borrow
//! something implementing [`VoxelWorld`]. The trait is deliberately tiny so a
//! chunk store, a closure or a test double can all stand in for the grid.

use glam::{IVec3, Vec3};
use hashbrown::HashMap;

use crate::error::ConfigError;
use crate::numeric::cell_index;

/// Read-only view of a uniform cubic voxel lattice.
pub trait VoxelWorld {
    /// Edge length of one grid cell in world units.
    fn scale(&self) -> f32;

    /// Solidity indicator of the cell whose minimum corner is `corner`.
    ///
    /// `corner` is always a multiple of [`VoxelWorld::scale`] on every axis.
    /// Positive values mark solid cells; zero or negative values are empty.
    fn voxel(&self, corner: Vec3) -> i32;

    /// Whether the cell at `corner` is solid.
    fn is_solid(&self, corner: Vec3) -> bool {
        self.voxel(corner) > 0
    }
}

impl<T: VoxelWorld + ?Sized> VoxelWorld for &T {
    fn scale(&self) -> f32 {
        (**self).scale()
    }

    fn voxel(&self, corner: Vec3) -> i32 {
        (**self).voxel(corner)
    }
}

/// Adapts a closure into a [`VoxelWorld`].
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use voxel_body::{FnWorld, VoxelWorld};
/// let ground = FnWorld::new(1.0, |corner: Vec3| i32::from(corner.y < 0.0));
/// assert!(ground.is_solid(Vec3::new(3.0, -1.0, 2.0)));
/// assert!(!ground.is_solid(Vec3::new(3.0, 0.0, 2.0)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnWorld<F> {
    scale: f32,
    lookup: F,
}

impl<F> FnWorld<F>
where
    F: Fn(Vec3) -> i32,
{
    /// Wraps `lookup`, which answers queries for cells of edge `scale`.
    pub const fn new(scale: f32, lookup: F) -> Self {
        Self { scale, lookup }
    }
}

impl<F> VoxelWorld for FnWorld<F>
where
    F: Fn(Vec3) -> i32,
{
    fn scale(&self) -> f32 {
        self.scale
    }

    fn voxel(&self, corner: Vec3) -> i32 {
        (self.lookup)(corner)
    }
}

/// In-memory sparse voxel store keyed by lattice coordinate.
#[derive(Debug, Clone)]
pub struct SparseVoxelWorld {
    scale: f32,
    cells: HashMap<IVec3, i32>,
}

impl SparseVoxelWorld {
    /// Creates an empty world with cells of edge `scale`.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidScale`] when `scale` is not a positive,
    /// finite number.
    pub fn new(scale: f32) -> Result<Self, ConfigError> {
        validate_scale(scale)?;
        Ok(Self {
            scale,
            cells: HashMap::new(),
        })
    }

    /// Sets the indicator of the cell at `index`. Non-positive values remove
    /// the cell.
    pub fn set(&mut self, index: IVec3, value: i32) {
        if value > 0 {
            self.cells.insert(index, value);
        } else {
            self.cells.remove(&index);
        }
    }

    /// Sets every cell in the inclusive index box `[from, to]`.
    pub fn fill(&mut self, from: IVec3, to: IVec3, value: i32) {
        let lo = from.min(to);
        let hi = from.max(to);
        for x in lo.x..=hi.x {
            for y in lo.y..=hi.y {
                for z in lo.z..=hi.z {
                    self.set(IVec3::new(x, y, z), value);
                }
            }
        }
    }

    /// Number of solid cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the world has no solid cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Indicator stored for the cell at `index`, `0` when empty.
    #[must_use]
    pub fn get(&self, index: IVec3) -> i32 {
        self.cells.get(&index).copied().unwrap_or(0)
    }
}

impl VoxelWorld for SparseVoxelWorld {
    fn scale(&self) -> f32 {
        self.scale
    }

    fn voxel(&self, corner: Vec3) -> i32 {
        self.get(cell_index(corner, self.scale))
    }
}

/// Rejects grid scales that would break cell enumeration.
///
/// # Errors
/// Returns [`ConfigError::InvalidScale`] for zero, negative or non-finite
/// values.
pub const fn validate_scale(scale: f32) -> Result<(), ConfigError> {
    if scale.is_finite() && scale > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidScale(scale))
    }
}
