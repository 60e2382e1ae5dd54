//! Vertical capsule shape and its narrow-phase test against boxes.
//!
//! The capsule is the set of points within `radius` of the vertical segment
//! `[(x, y0, z), (x, y1, z)]`. Because the segment is axis aligned the closest
//! feature of a box can be found one axis at a time with the clipping helpers
//! in [`crate::geometry`].

use glam::{IVec3, Vec3};
use log::trace;

use crate::error::ConfigError;
use crate::geometry::{clip_point, clip_segment, Aabb};

/// Penetration of the capsule into a box and the translation that clears it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Displacement that moves the capsule out of the box, `penetration`
    /// units long.
    pub resolution: Vec3,
    /// Overlap depth. Never negative.
    pub penetration: f32,
}

/// A face of an axis-aligned box, named by its outward normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    /// Minimum X face.
    NegX,
    /// Maximum X face.
    PosX,
    /// Minimum Y face.
    NegY,
    /// Maximum Y face.
    PosY,
    /// Minimum Z face.
    NegZ,
    /// Maximum Z face.
    PosZ,
}

impl Face {
    /// Every face, in the order buried capsules prefer them on ties.
    pub const ALL: [Self; 6] = [
        Self::NegX,
        Self::PosX,
        Self::NegY,
        Self::PosY,
        Self::NegZ,
        Self::PosZ,
    ];

    /// Outward lattice step across this face.
    #[must_use]
    pub const fn normal(self) -> IVec3 {
        match self {
            Self::NegX => IVec3::NEG_X,
            Self::PosX => IVec3::X,
            Self::NegY => IVec3::NEG_Y,
            Self::PosY => IVec3::Y,
            Self::NegZ => IVec3::NEG_Z,
            Self::PosZ => IVec3::Z,
        }
    }
}

/// Checks capsule dimensions: the radius must be finite and positive, the
/// core segment length finite and non-negative.
pub(crate) const fn check_dimensions(height: f32, radius: f32) -> Result<(), ConfigError> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(ConfigError::InvalidRadius(radius));
    }
    if !(height.is_finite() && height >= 0.0) {
        return Err(ConfigError::InvalidHeight(height));
    }
    Ok(())
}

/// Capsule whose core segment is aligned with the Y axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapsuleY {
    center: Vec3,
    half_height: f32,
    y0: f32,
    y1: f32,
    radius: f32,
}

impl CapsuleY {
    /// Creates a capsule centred on `center`.
    ///
    /// `height` is the length of the core segment, excluding the two
    /// hemispherical caps.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidRadius`] unless `radius` is finite and
    /// positive, and [`ConfigError::InvalidHeight`] unless `height` is finite
    /// and non-negative.
    pub fn new(center: Vec3, height: f32, radius: f32) -> Result<Self, ConfigError> {
        check_dimensions(height, radius)?;
        let half_height = height * 0.5;
        Ok(Self {
            center,
            half_height,
            y0: center.y - half_height,
            y1: center.y + half_height,
            radius,
        })
    }

    /// Moves the capsule so its centre is `center`.
    pub const fn set_position(&mut self, center: Vec3) {
        self.center = center;
        self.y0 = center.y - self.half_height;
        self.y1 = center.y + self.half_height;
    }

    /// Moves the capsule by `offset`.
    pub fn translate(&mut self, offset: Vec3) {
        self.set_position(self.center + offset);
    }

    /// Centre of the core segment.
    #[must_use]
    pub const fn center(&self) -> Vec3 {
        self.center
    }

    /// Half the core segment length.
    #[must_use]
    pub const fn half_height(&self) -> f32 {
        self.half_height
    }

    /// Radius of the swept sphere.
    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Lower end of the core segment.
    #[must_use]
    pub const fn y0(&self) -> f32 {
        self.y0
    }

    /// Upper end of the core segment.
    #[must_use]
    pub const fn y1(&self) -> f32 {
        self.y1
    }

    /// Writes the capsule's exact bounding box into `bounds`.
    pub fn update_aabb(&self, bounds: &mut Aabb) {
        let r = self.radius;
        bounds.min = Vec3::new(self.center.x - r, self.y0 - r, self.center.z - r);
        bounds.max = Vec3::new(self.center.x + r, self.y1 + r, self.center.z + r);
    }

    /// Returns the capsule's exact bounding box.
    #[must_use]
    pub fn aabb(&self) -> Aabb {
        let mut bounds = Aabb::default();
        self.update_aabb(&mut bounds);
        bounds
    }

    /// Separation vector from the capsule's core segment to the nearest
    /// feature of `bounds`. Zero when the segment touches the box.
    #[must_use]
    pub fn separation(&self, bounds: &Aabb) -> Vec3 {
        let (x0, x1) = bounds.x_range();
        let (y0, y1) = bounds.y_range();
        let (z0, z1) = bounds.z_range();
        Vec3::new(
            clip_point(x0, x1, self.center.x),
            clip_segment(y0, y1, self.y0, self.y1),
            clip_point(z0, z1, self.center.z),
        )
    }

    /// Whether the core segment itself touches `bounds`.
    #[must_use]
    pub fn is_buried_in(&self, bounds: &Aabb) -> bool {
        self.separation(bounds) == Vec3::ZERO
    }

    /// Axis-aligned move through `face` that leaves the capsule just touching
    /// that face of `bounds` from outside.
    #[must_use]
    pub fn exit_translation(&self, bounds: &Aabb, face: Face) -> Vec3 {
        let r = self.radius;
        let c = self.center;
        match face {
            Face::NegX => Vec3::new(bounds.min.x - r - c.x, 0.0, 0.0),
            Face::PosX => Vec3::new(bounds.max.x + r - c.x, 0.0, 0.0),
            Face::NegY => Vec3::new(0.0, bounds.min.y - r - self.y1, 0.0),
            Face::PosY => Vec3::new(0.0, bounds.max.y + r - self.y0, 0.0),
            Face::NegZ => Vec3::new(0.0, 0.0, bounds.min.z - r - c.z),
            Face::PosZ => Vec3::new(0.0, 0.0, bounds.max.z + r - c.z),
        }
    }

    /// Tests the capsule against a box.
    ///
    /// Returns `None` when the nearest box feature is at least `radius` away,
    /// so a capsule resting exactly on a face does not register a contact.
    /// When the core segment itself lies inside the box the nearest feature
    /// has no direction; the capsule is then pushed out through the face that
    /// needs the shortest move.
    ///
    /// # Examples
    /// ```
    /// use glam::Vec3;
    /// use voxel_body::{Aabb, CapsuleY};
    /// let capsule = CapsuleY::new(Vec3::new(1.3, 0.5, 0.5), 0.0, 0.5).unwrap();
    /// let cell = Aabb::new(Vec3::ZERO, Vec3::ONE);
    /// let contact = capsule.collide_box(&cell).unwrap();
    /// assert!((contact.penetration - 0.2).abs() < 1e-6);
    /// assert!((contact.resolution.x - 0.2).abs() < 1e-6);
    /// ```
    #[must_use]
    pub fn collide_box(&self, bounds: &Aabb) -> Option<Contact> {
        let gap = self.separation(bounds);
        let d2 = gap.length_squared();
        if d2 >= self.radius * self.radius {
            return None;
        }
        if d2 > 0.0 {
            let d = d2.sqrt();
            let penetration = self.radius - d;
            return Some(Contact {
                resolution: -gap / d * penetration,
                penetration,
            });
        }
        Some(self.escape_contact(bounds))
    }

    /// Shortest axis-aligned move that leaves the capsule just touching
    /// `bounds`, used when the core segment is buried in the box.
    fn escape_contact(&self, bounds: &Aabb) -> Contact {
        let resolution = Face::ALL
            .into_iter()
            .map(|face| self.exit_translation(bounds, face))
            .min_by(|a, b| a.length_squared().total_cmp(&b.length_squared()))
            .unwrap_or(Vec3::ZERO);
        trace!("capsule core buried in {bounds:?}; escaping by {resolution:?}");
        Contact {
            resolution,
            penetration: resolution.length(),
        }
    }
}
