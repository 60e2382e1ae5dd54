//! Error types surfaced by body construction and stepping.
//!
//! Numeric edge cases inside the solver are handled in place; only invalid
//! configuration and invalid step input reach callers as errors.

use thiserror::Error;

/// Configuration that would invalidate the collision geometry.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Capsule radius must be positive and finite.
    #[error("capsule radius must be positive and finite, got {0}")]
    InvalidRadius(f32),
    /// Capsule height must be non-negative and finite.
    #[error("capsule height must be non-negative and finite, got {0}")]
    InvalidHeight(f32),
    /// Grid cell edge length must be positive and finite.
    #[error("grid scale must be positive and finite, got {0}")]
    InvalidScale(f32),
    /// The resolver needs at least one pass.
    #[error("resolver iteration cap must be at least 1")]
    ZeroIterations,
    /// A serialised configuration could not be decoded.
    #[error("invalid body configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Input rejected by [`crate::Body::step`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StepError {
    /// Elapsed time was negative or not finite.
    #[error("time step must be finite and non-negative, got {0}")]
    InvalidTimeStep(f32),
}
