//! Axis-aligned boxes and one-dimensional clipping helpers.
//!
//! The clipping functions return the signed gap between a point or interval
//! and a reference interval. A result of `0.0` means the two overlap on that
//! axis; otherwise the magnitude is the true separation and the sign points
//! from the probe towards the reference interval.

use glam::{IVec3, Vec3};

use crate::numeric::{ceil_to_i32, floor_to_i32};

/// Axis-aligned bounding box in world units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Creates a box from its two corners.
    #[must_use]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Bounds of the grid cell at lattice coordinate `index`.
    ///
    /// # Examples
    /// ```
    /// use glam::{IVec3, Vec3};
    /// use voxel_body::Aabb;
    /// let cell = Aabb::cell(IVec3::new(1, -1, 0), 2.0);
    /// assert_eq!(cell.min, Vec3::new(2.0, -2.0, 0.0));
    /// assert_eq!(cell.max, Vec3::new(4.0, 0.0, 2.0));
    /// ```
    #[must_use]
    pub fn cell(index: IVec3, scale: f32) -> Self {
        let min = index.as_vec3() * scale;
        Self {
            min,
            max: min + Vec3::splat(scale),
        }
    }

    /// Extent on the X axis as `(min, max)`.
    #[must_use]
    pub const fn x_range(&self) -> (f32, f32) {
        (self.min.x, self.max.x)
    }

    /// Extent on the Y axis as `(min, max)`.
    #[must_use]
    pub const fn y_range(&self) -> (f32, f32) {
        (self.min.y, self.max.y)
    }

    /// Extent on the Z axis as `(min, max)`.
    #[must_use]
    pub const fn z_range(&self) -> (f32, f32) {
        (self.min.z, self.max.z)
    }

    /// Lattice span covering this box: inclusive lower index, exclusive
    /// upper index.
    ///
    /// The minimum is floored and the maximum ceiled, so every cell the box
    /// could touch lies inside the span.
    #[must_use]
    pub fn cell_span(&self, scale: f32) -> (IVec3, IVec3) {
        let lo = self.min / scale;
        let hi = self.max / scale;
        (
            IVec3::new(floor_to_i32(lo.x), floor_to_i32(lo.y), floor_to_i32(lo.z)),
            IVec3::new(ceil_to_i32(hi.x), ceil_to_i32(hi.y), ceil_to_i32(hi.z)),
        )
    }

    /// Returns this box padded outwards to the enclosing multiples of `scale`.
    ///
    /// # Examples
    /// ```
    /// use glam::Vec3;
    /// use voxel_body::Aabb;
    /// let padded = Aabb::new(Vec3::new(-0.5, 1.2, 0.0), Vec3::new(0.5, 2.8, 1.0))
    ///     .snapped_to_grid(1.0);
    /// assert_eq!(padded.min, Vec3::new(-1.0, 1.0, 0.0));
    /// assert_eq!(padded.max, Vec3::new(1.0, 3.0, 1.0));
    /// ```
    #[must_use]
    pub fn snapped_to_grid(&self, scale: f32) -> Self {
        let (lo, hi) = self.cell_span(scale);
        Self {
            min: lo.as_vec3() * scale,
            max: hi.as_vec3() * scale,
        }
    }
}

/// Signed distance that brings the point `b0` into the interval `[a0, a1]`.
///
/// Returns `a0 - b0` when the point lies below the interval, `a1 - b0` when it
/// lies above, and `0.0` when it is inside.
///
/// # Examples
/// ```
/// use voxel_body::clip_point;
/// assert_eq!(clip_point(0.0, 1.0, -2.0), 2.0);
/// assert_eq!(clip_point(0.0, 1.0, 3.0), -2.0);
/// assert_eq!(clip_point(0.0, 1.0, 0.5), 0.0);
/// ```
#[must_use]
pub const fn clip_point(a0: f32, a1: f32, b0: f32) -> f32 {
    if b0 < a0 {
        a0 - b0
    } else if b0 > a1 {
        a1 - b0
    } else {
        0.0
    }
}

/// Signed gap between the interval `[b0, b1]` and the interval `[a0, a1]`.
///
/// Positive when `b` lies entirely before `a`, negative when it lies entirely
/// after, and exactly `0.0` whenever the intervals overlap.
///
/// # Examples
/// ```
/// use voxel_body::clip_segment;
/// assert_eq!(clip_segment(2.0, 3.0, 0.0, 1.0), 1.0);
/// assert_eq!(clip_segment(0.0, 1.0, 1.5, 4.0), -0.5);
/// assert_eq!(clip_segment(0.0, 1.0, 0.5, 4.0), 0.0);
/// ```
#[must_use]
pub const fn clip_segment(a0: f32, a1: f32, b0: f32, b1: f32) -> f32 {
    if b1 < a0 {
        a0 - b1
    } else if b0 > a1 {
        a1 - b0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_of_aligned_box_is_exact() {
        let bounds = Aabb::new(Vec3::ZERO, Vec3::splat(2.0));
        assert_eq!(bounds.cell_span(1.0), (IVec3::ZERO, IVec3::splat(2)));
    }

    #[test]
    fn span_pads_fractional_bounds_outwards() {
        let bounds = Aabb::new(Vec3::new(-1.25, 0.1, 3.9), Vec3::new(-0.75, 0.2, 4.1));
        let (lo, hi) = bounds.cell_span(0.5);
        assert_eq!(lo, IVec3::new(-3, 0, 7));
        assert_eq!(hi, IVec3::new(-1, 1, 9));
    }
}
