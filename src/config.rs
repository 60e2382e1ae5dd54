//! Body configuration.
//!
//! Defaults match the stock player capsule: one unit tall, one unit radius,
//! with the standard resolver cap. Configurations can be read from JSON so a
//! game can keep per-entity tuning next to its other assets.

use serde::{Deserialize, Serialize};

use crate::capsule::check_dimensions;
use crate::constants::{DEFAULT_CAPSULE_HEIGHT, DEFAULT_CAPSULE_RADIUS, MAX_RESOLVE_ITERATIONS};
use crate::error::ConfigError;

/// How the positional correction applied by the resolver feeds back into
/// velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VelocityCorrection {
    /// Add the correction vector to velocity unchanged.
    #[default]
    Displacement,
    /// Add the correction divided by the step duration, cancelling the
    /// velocity that drove the body into the obstacle.
    Rate,
}

/// Shape and solver settings for a [`crate::Body`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BodyConfig {
    /// Length of the capsule's core segment.
    pub height: f32,
    /// Radius of the capsule.
    pub radius: f32,
    /// Resolver pass cap per step.
    pub max_iterations: u32,
    /// Velocity feedback policy.
    pub velocity_correction: VelocityCorrection,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_CAPSULE_HEIGHT,
            radius: DEFAULT_CAPSULE_RADIUS,
            max_iterations: MAX_RESOLVE_ITERATIONS,
            velocity_correction: VelocityCorrection::Displacement,
        }
    }
}

impl BodyConfig {
    /// Convenience constructor for a capsule of the given size with default
    /// solver settings.
    #[must_use]
    pub fn capsule(height: f32, radius: f32) -> Self {
        Self {
            height,
            radius,
            ..Self::default()
        }
    }

    /// Returns a copy using `mode` for velocity feedback.
    #[must_use]
    pub const fn with_velocity_correction(mut self, mode: VelocityCorrection) -> Self {
        self.velocity_correction = mode;
        self
    }

    /// Returns a copy with a different resolver cap.
    #[must_use]
    pub const fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Parses and validates a JSON configuration. Missing fields take their
    /// defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed JSON and the matching
    /// validation error for out-of-range values.
    ///
    /// # Examples
    /// ```
    /// use voxel_body::BodyConfig;
    /// let config = BodyConfig::from_json_str(r#"{ "radius": 0.4 }"#).unwrap();
    /// assert_eq!(config.radius, 0.4);
    /// assert_eq!(config.max_iterations, 100);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the settings describe a usable capsule and solver.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidRadius`], [`ConfigError::InvalidHeight`]
    /// or [`ConfigError::ZeroIterations`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_dimensions(self.height, self.radius)?;
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        Ok(())
    }
}
