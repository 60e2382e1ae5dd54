//! Greedy penetration resolver.
//!
//! Each pass tests every candidate box, keeps the single deepest contact and
//! moves the capsule out of it. Passes repeat until nothing overlaps or the
//! iteration cap is reached, in which case the residual overlap is left for
//! the next frame.
//!
//! A capsule whose core segment ends up inside a cell has no contact normal.
//! Given a world, the resolver pushes it through the nearest face backed by
//! open space and gathers candidates afresh around where it lands.

use log::{debug, warn};

use crate::broadphase::solid_cells_into;
use crate::capsule::{CapsuleY, Contact, Face};
use crate::constants::{MAX_ESCAPE_SCAN_CELLS, MAX_RESOLVE_ITERATIONS};
use crate::geometry::Aabb;
use crate::numeric::{cell_corner, cell_index};
use crate::world::VoxelWorld;

/// Outcome of a [`Resolver::resolve`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// Number of corrective translations applied.
    pub iterations: u32,
    /// Whether a pass found no contact at all.
    pub converged: bool,
    /// Deepest penetration left when the cap was hit, `0.0` on convergence.
    pub residual_penetration: f32,
}

/// Iterative deepest-contact-first resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolver {
    max_iterations: u32,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(MAX_RESOLVE_ITERATIONS)
    }
}

impl Resolver {
    /// Creates a resolver that applies at most `max_iterations` corrections.
    /// A cap of zero is raised to one.
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self {
            max_iterations: max_iterations.max(1),
        }
    }

    /// Configured iteration cap.
    #[must_use]
    pub const fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Moves `capsule` out of `candidates`, one deepest contact at a time.
    ///
    /// Only the listed boxes are considered, so a buried capsule leaves
    /// through the nearest face of its box whatever lies beyond it. Use
    /// [`Resolver::resolve_in`] when the world is at hand.
    pub fn resolve(&self, capsule: &mut CapsuleY, candidates: &[Aabb]) -> Resolution {
        for iteration in 0..self.max_iterations {
            let Some(contact) = deepest_contact(capsule, candidates) else {
                return converged(iteration);
            };
            debug!(
                "resolver pass {iteration}: penetration {} resolved by {:?}",
                contact.penetration, contact.resolution
            );
            capsule.translate(contact.resolution);
        }
        self.exhausted(capsule, candidates)
    }

    /// Moves `capsule` out of the solid cells of `world`.
    ///
    /// `candidates` holds the broadphase result for the capsule's current
    /// bounds and is refreshed whenever a buried capsule is moved, so the
    /// returned [`Resolution`] always describes the capsule's final
    /// surroundings.
    pub fn resolve_in<W>(
        &self,
        world: &W,
        capsule: &mut CapsuleY,
        candidates: &mut Vec<Aabb>,
    ) -> Resolution
    where
        W: VoxelWorld + ?Sized,
    {
        for iteration in 0..self.max_iterations {
            let Some((cell, contact)) = deepest_hit(capsule, candidates) else {
                return converged(iteration);
            };
            if capsule.is_buried_in(&cell) {
                let escape = open_face_escape(world, capsule, &cell).unwrap_or(contact);
                debug!(
                    "resolver pass {iteration}: core buried in {cell:?}, escaping by {:?}",
                    escape.resolution
                );
                capsule.translate(escape.resolution);
                solid_cells_into(world, &capsule.aabb(), candidates);
            } else {
                debug!(
                    "resolver pass {iteration}: penetration {} resolved by {:?}",
                    contact.penetration, contact.resolution
                );
                capsule.translate(contact.resolution);
            }
        }
        self.exhausted(capsule, candidates)
    }

    fn exhausted(&self, capsule: &CapsuleY, candidates: &[Aabb]) -> Resolution {
        let residual = deepest_contact(capsule, candidates);
        let residual_penetration = residual.map_or(0.0, |contact| contact.penetration);
        if residual.is_some() {
            warn!(
                "resolver hit its cap of {} passes with {residual_penetration} penetration left",
                self.max_iterations
            );
        }
        Resolution {
            iterations: self.max_iterations,
            converged: residual.is_none(),
            residual_penetration,
        }
    }
}

const fn converged(iterations: u32) -> Resolution {
    Resolution {
        iterations,
        converged: true,
        residual_penetration: 0.0,
    }
}

/// Deepest contact between `capsule` and `candidates`. Ties keep the first
/// box in slice order.
#[must_use]
pub fn deepest_contact(capsule: &CapsuleY, candidates: &[Aabb]) -> Option<Contact> {
    deepest_hit(capsule, candidates).map(|(_, contact)| contact)
}

fn deepest_hit(capsule: &CapsuleY, candidates: &[Aabb]) -> Option<(Aabb, Contact)> {
    candidates
        .iter()
        .filter_map(|cell| capsule.collide_box(cell).map(|contact| (*cell, contact)))
        .fold(None, |best: Option<(Aabb, Contact)>, hit| match best {
            Some(current) if hit.1.penetration <= current.1.penetration => Some(current),
            _ => Some(hit),
        })
}

/// Shortest escape for a capsule buried in `cell`, treating each run of solid
/// cells beyond a face as part of the box. Faces backed by more than
/// [`MAX_ESCAPE_SCAN_CELLS`] solid cells are skipped.
fn open_face_escape<W>(world: &W, capsule: &CapsuleY, cell: &Aabb) -> Option<Contact>
where
    W: VoxelWorld + ?Sized,
{
    let scale = world.scale();
    let origin = cell_index(cell.min, scale);
    Face::ALL
        .into_iter()
        .filter_map(|face| {
            let step = face.normal();
            let depth = (1..=MAX_ESCAPE_SCAN_CELLS)
                .find(|&k| !world.is_solid(cell_corner(origin + step * k, scale)))?;
            let last = Aabb::cell(origin + step * (depth - 1), scale);
            let run = Aabb::new(cell.min.min(last.min), cell.max.max(last.max));
            Some(capsule.exit_translation(&run, face))
        })
        .min_by(|a, b| a.length_squared().total_cmp(&b.length_squared()))
        .map(|resolution| Contact {
            resolution,
            penetration: resolution.length(),
        })
}
