//! Capsule body integrated against a voxel world.
//!
//! A [`Body`] advances with semi-implicit Euler, gathers candidate cells
//! around its tentative position, resolves any penetration, and folds the
//! resulting positional correction back into its velocity.

use std::fmt;

use glam::Vec3;
use log::debug;

use crate::broadphase::solid_cells_into;
use crate::capsule::CapsuleY;
use crate::config::{BodyConfig, VelocityCorrection};
use crate::error::{ConfigError, StepError};
use crate::geometry::Aabb;
use crate::resolver::{Resolution, Resolver};
use crate::world::{validate_scale, VoxelWorld};

/// Summary of a single [`Body::step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport {
    /// Resolved position minus tentative position.
    pub correction: Vec3,
    /// Number of solid cells around the capsule when resolution finished.
    pub candidates: usize,
    /// Resolver outcome.
    pub resolution: Resolution,
}

/// A capsule-shaped character moving through a voxel world.
///
/// The body borrows the world for voxel queries and owns everything it
/// mutates, so bodies sharing a `Sync` world can be stepped on separate
/// threads.
pub struct Body<'w, W: VoxelWorld + ?Sized> {
    world: &'w W,
    shape: CapsuleY,
    bounds: Aabb,
    candidates: Vec<Aabb>,
    resolver: Resolver,
    velocity_correction: VelocityCorrection,
    position: Vec3,
    velocity: Vec3,
    acceleration: Vec3,
}

impl<W: VoxelWorld + ?Sized> fmt::Debug for Body<'_, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Body")
            .field("shape", &self.shape)
            .field("position", &self.position)
            .field("velocity", &self.velocity)
            .field("acceleration", &self.acceleration)
            .field("resolver", &self.resolver)
            .finish_non_exhaustive()
    }
}

impl<'w, W: VoxelWorld + ?Sized> Body<'w, W> {
    /// Creates a body at the origin, at rest.
    ///
    /// # Errors
    /// Fails when `config` describes an unusable capsule or the world's grid
    /// scale is not positive.
    ///
    /// # Examples
    /// ```
    /// use voxel_body::{Body, BodyConfig, SparseVoxelWorld};
    /// let world = SparseVoxelWorld::new(1.0).unwrap();
    /// let body = Body::new(&world, BodyConfig::capsule(2.0, 0.5)).unwrap();
    /// assert_eq!(body.position(), glam::Vec3::ZERO);
    /// ```
    pub fn new(world: &'w W, config: BodyConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        validate_scale(world.scale())?;
        let shape = CapsuleY::new(Vec3::ZERO, config.height, config.radius)?;
        Ok(Self {
            world,
            bounds: shape.aabb(),
            shape,
            candidates: Vec::new(),
            resolver: Resolver::new(config.max_iterations),
            velocity_correction: config.velocity_correction,
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
        })
    }

    /// Current position of the capsule centre.
    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    /// Current velocity.
    #[must_use]
    pub const fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Constant acceleration applied every step.
    #[must_use]
    pub const fn acceleration(&self) -> Vec3 {
        self.acceleration
    }

    /// Collision shape at the current position.
    #[must_use]
    pub const fn shape(&self) -> &CapsuleY {
        &self.shape
    }

    /// Exact capsule bounds at the start of the most recent broadphase.
    #[must_use]
    pub const fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    /// Teleports the body, keeping its velocity.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.shape.set_position(position);
        self.shape.update_aabb(&mut self.bounds);
    }

    /// Replaces the velocity.
    pub const fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    /// Replaces the acceleration.
    pub const fn set_acceleration(&mut self, acceleration: Vec3) {
        self.acceleration = acceleration;
    }

    /// Advances the body by `dt` seconds.
    ///
    /// A zero `dt` moves nothing but still re-tests the current position, so a
    /// body teleported into a wall is pushed out.
    ///
    /// # Errors
    /// Returns [`StepError::InvalidTimeStep`] when `dt` is negative or not
    /// finite; the body is left untouched.
    pub fn step(&mut self, dt: f32) -> Result<StepReport, StepError> {
        if !(dt.is_finite() && dt >= 0.0) {
            return Err(StepError::InvalidTimeStep(dt));
        }

        self.velocity += self.acceleration * dt;
        self.position += self.velocity * dt;

        let tentative = self.position;
        self.shape.set_position(tentative);
        self.shape.update_aabb(&mut self.bounds);
        solid_cells_into(self.world, &self.bounds, &mut self.candidates);
        let resolution = self
            .resolver
            .resolve_in(self.world, &mut self.shape, &mut self.candidates);

        let correction = self.shape.center() - tentative;
        self.velocity += self.velocity_feedback(correction, dt);
        self.position = self.shape.center();

        debug!(
            "step dt={dt}: position {:?}, velocity {:?}, correction {correction:?} from {} cells",
            self.position,
            self.velocity,
            self.candidates.len()
        );
        Ok(StepReport {
            correction,
            candidates: self.candidates.len(),
            resolution,
        })
    }

    fn velocity_feedback(&self, correction: Vec3, dt: f32) -> Vec3 {
        match self.velocity_correction {
            VelocityCorrection::Displacement => correction,
            VelocityCorrection::Rate if dt > 0.0 => correction / dt,
            VelocityCorrection::Rate => Vec3::ZERO,
        }
    }
}
