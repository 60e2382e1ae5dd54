#![cfg_attr(docsrs, feature(doc_cfg))]
//! Capsule character collision against voxel grids.
//!
//! A [`Body`] carries a vertical [`CapsuleY`] through a world of solid and
//! empty cells. Each [`Body::step`] integrates motion, gathers nearby solid
//! cells through the [`broadphase`], and lets the [`Resolver`] push the capsule
//! out of the deepest overlap until it rests clear of the grid.
//!
//! ```
//! use glam::{IVec3, Vec3};
//! use voxel_body::{Body, BodyConfig, SparseVoxelWorld};
//!
//! let mut world = SparseVoxelWorld::new(1.0).unwrap();
//! world.fill(IVec3::new(-2, -1, -2), IVec3::new(1, -1, 1), 1);
//!
//! let mut body = Body::new(&world, BodyConfig::capsule(1.0, 0.5)).unwrap();
//! body.set_position(Vec3::new(0.0, 1.0, 0.0));
//! body.set_acceleration(Vec3::new(0.0, -9.8, 0.0));
//! for _ in 0..240 {
//!     body.step(1.0 / 60.0).unwrap();
//! }
//! assert!((body.position().y - 1.0).abs() < 1e-3);
//! ```
pub mod body;
pub mod broadphase;
pub mod capsule;
pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod numeric;
pub mod resolver;
pub mod world;
pub use constants::*;

// Re-export commonly used items
pub use body::{Body, StepReport};
pub use broadphase::{solid_cells, solid_cells_into};
pub use capsule::{CapsuleY, Contact, Face};
pub use clock::FrameClock;
pub use config::{BodyConfig, VelocityCorrection};
pub use error::{ConfigError, StepError};
pub use geometry::{clip_point, clip_segment, Aabb};
pub use logging::init as init_logging;
pub use resolver::{deepest_contact, Resolution, Resolver};
pub use world::{FnWorld, SparseVoxelWorld, VoxelWorld};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use voxel_body::prelude::*;
    //! ```

    pub use crate::{Aabb, Body, BodyConfig, CapsuleY, SparseVoxelWorld, VoxelWorld};
    pub use glam::{IVec3, Vec3};
}
