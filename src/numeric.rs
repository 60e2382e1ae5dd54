//! Numeric conversion helpers used by the grid code.
//!
//! World-space coordinates are `f32` while the voxel lattice is indexed with
//! `i32`. These helpers keep the float-to-integer casts in one place and make
//! the clamping behaviour explicit.

use glam::{IVec3, Vec3};

/// Floor the value and clamp it into the `i32` domain.
///
/// Non-finite input maps to `0`.
#[expect(
    clippy::cast_possible_truncation,
    reason = "The value is clamped to the i32 bounds before casting."
)]
#[must_use]
pub fn floor_to_i32(value: f32) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    let clamped = f64::from(value.floor()).clamp(f64::from(i32::MIN), f64::from(i32::MAX));
    clamped as i32
}

/// Ceil the value and clamp it into the `i32` domain.
///
/// Non-finite input maps to `0`.
#[expect(
    clippy::cast_possible_truncation,
    reason = "The value is clamped to the i32 bounds before casting."
)]
#[must_use]
pub fn ceil_to_i32(value: f32) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    let clamped = f64::from(value.ceil()).clamp(f64::from(i32::MIN), f64::from(i32::MAX));
    clamped as i32
}

/// Round the value to the nearest integer and clamp it into the `i32` domain.
#[expect(
    clippy::cast_possible_truncation,
    reason = "The value is clamped to the i32 bounds before casting."
)]
#[must_use]
pub fn round_to_i32(value: f32) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    let clamped = f64::from(value.round()).clamp(f64::from(i32::MIN), f64::from(i32::MAX));
    clamped as i32
}

/// Maps the minimum corner of a grid cell back to its lattice index.
///
/// Corners are multiples of `scale`, so rounding absorbs the float error
/// accumulated by `index * scale`.
///
/// # Examples
/// ```
/// use glam::{IVec3, Vec3};
/// use voxel_body::numeric::cell_index;
/// assert_eq!(cell_index(Vec3::new(-0.5, 1.0, 1.5), 0.5), IVec3::new(-1, 2, 3));
/// ```
#[must_use]
pub fn cell_index(corner: Vec3, scale: f32) -> IVec3 {
    let scaled = corner / scale;
    IVec3::new(
        round_to_i32(scaled.x),
        round_to_i32(scaled.y),
        round_to_i32(scaled.z),
    )
}

/// Returns the world-space minimum corner of the cell at `index`.
#[must_use]
pub fn cell_corner(index: IVec3, scale: f32) -> Vec3 {
    index.as_vec3() * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_and_ceil_bracket_negative_values() {
        assert_eq!(floor_to_i32(-0.5), -1);
        assert_eq!(ceil_to_i32(-0.5), 0);
        assert_eq!(floor_to_i32(2.0), 2);
        assert_eq!(ceil_to_i32(2.0), 2);
    }

    #[test]
    fn non_finite_values_map_to_zero() {
        assert_eq!(floor_to_i32(f32::NAN), 0);
        assert_eq!(ceil_to_i32(f32::INFINITY), 0);
        assert_eq!(round_to_i32(f32::NEG_INFINITY), 0);
    }

    #[test]
    fn huge_values_clamp_to_bounds() {
        assert_eq!(floor_to_i32(1e20), i32::MAX);
        assert_eq!(ceil_to_i32(-1e20), i32::MIN);
    }

    #[test]
    fn corner_round_trips_through_index() {
        let index = IVec3::new(-3, 7, 11);
        assert_eq!(cell_index(cell_corner(index, 0.1), 0.1), index);
    }
}
