//! Convenience constructors for worlds and bodies used in tests.

use glam::{IVec3, Vec3};
use voxel_body::{Aabb, Body, BodyConfig, SparseVoxelWorld, VoxelWorld};

/// Downward acceleration used by the falling-body scenarios.
pub const GRAVITY: Vec3 = Vec3::new(0.0, -9.8, 0.0);

/// Frame duration used by the falling-body scenarios.
pub const FRAME: f32 = 1.0 / 60.0;

/// Create an empty unit-scale world.
///
/// # Examples
/// ```
/// use test_utils::physics::empty_world;
/// assert!(empty_world().is_empty());
/// ```
///
/// # Panics
/// Never; the unit scale is always valid.
pub fn empty_world() -> SparseVoxelWorld {
    SparseVoxelWorld::new(1.0).expect("unit scale is valid")
}

/// Unit-scale world whose solid cells fill `[-1, 1] x [0, 1] x [-1, 1]`.
///
/// # Examples
/// ```
/// use test_utils::physics::pedestal_world;
/// assert_eq!(pedestal_world().len(), 4);
/// ```
pub fn pedestal_world() -> SparseVoxelWorld {
    let mut world = empty_world();
    world.fill(IVec3::new(-1, 0, -1), IVec3::new(0, 0, 0), 1);
    world
}

/// World with a square floor of `half_width` cells either side of the origin
/// whose top face is at `y = 0`.
///
/// # Panics
/// Panics if `scale` is not a valid grid scale.
pub fn floor_world(scale: f32, half_width: i32) -> SparseVoxelWorld {
    let mut world = SparseVoxelWorld::new(scale).expect("valid test scale");
    world.fill(
        IVec3::new(-half_width, -1, -half_width),
        IVec3::new(half_width - 1, -1, half_width - 1),
        1,
    );
    world
}

/// Unit cell at lattice index `(x, y, z)`.
pub fn unit_cell(x: i32, y: i32, z: i32) -> Aabb {
    Aabb::cell(IVec3::new(x, y, z), 1.0)
}

/// Body with the given capsule placed at `position`, under gravity.
///
/// # Panics
/// Panics if the capsule or world scale is invalid.
pub fn falling_body<W: VoxelWorld + ?Sized>(
    world: &W,
    config: BodyConfig,
    position: Vec3,
) -> Body<'_, W> {
    let mut body = Body::new(world, config).expect("valid test body");
    body.set_position(position);
    body.set_acceleration(GRAVITY);
    body
}

/// Step `body` `frames` times with a fixed `dt`.
///
/// # Panics
/// Panics if a step is rejected.
pub fn run_frames<W: VoxelWorld + ?Sized>(body: &mut Body<'_, W>, frames: u32, dt: f32) {
    for _ in 0..frames {
        body.step(dt).expect("valid time step");
    }
}
