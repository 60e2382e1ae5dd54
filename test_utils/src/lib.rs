//! Utility helpers for tests.
//!
//! World fixtures and vector assertions shared by the integration suites.
pub mod physics;

use approx::abs_diff_eq;
use glam::Vec3;

/// Assert that two vectors agree component-wise within `epsilon`.
///
/// # Panics
/// Panics with both vectors in the message when any component differs by
/// more than `epsilon`.
pub fn assert_vec3_near(actual: Vec3, expected: Vec3, epsilon: f32) {
    let close = abs_diff_eq!(actual.x, expected.x, epsilon = epsilon)
        && abs_diff_eq!(actual.y, expected.y, epsilon = epsilon)
        && abs_diff_eq!(actual.z, expected.z, epsilon = epsilon);
    assert!(close, "expected {expected:?} within {epsilon}, got {actual:?}");
}

/// Assert that every component of `value` is finite.
///
/// # Panics
/// Panics when a component is NaN or infinite.
pub fn assert_finite(value: Vec3) {
    assert!(value.is_finite(), "expected finite vector, got {value:?}");
}
