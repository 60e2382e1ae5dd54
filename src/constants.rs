//! Tuning constants shared by the collision and integration code.

/// Upper bound on resolver passes per step.
///
/// Each pass resolves the single deepest contact; geometry that cannot be
/// cleared within this many passes is left with residual penetration.
pub const MAX_RESOLVE_ITERATIONS: u32 = 100;

/// Capsule height used when a configuration omits it.
pub const DEFAULT_CAPSULE_HEIGHT: f32 = 1.0;

/// Capsule radius used when a configuration omits it.
pub const DEFAULT_CAPSULE_RADIUS: f32 = 1.0;


/// Cells scanned past a buried cell, per direction, when looking for open
/// space to push a capsule into.
pub const MAX_ESCAPE_SCAN_CELLS: i32 = 16;
