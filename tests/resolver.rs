//! Resolver tests: convergence, termination and contact ordering.
use approx::assert_relative_eq;
use glam::Vec3;
use rstest::rstest;
use test_utils::physics::unit_cell;
use voxel_body::{deepest_contact, Aabb, CapsuleY, Resolver, MAX_RESOLVE_ITERATIONS};

#[test]
fn default_cap_matches_constant() {
    assert_eq!(Resolver::default().max_iterations(), MAX_RESOLVE_ITERATIONS);
    assert_eq!(MAX_RESOLVE_ITERATIONS, 100);
}

#[test]
fn no_candidates_converge_immediately() {
    let mut capsule = CapsuleY::new(Vec3::new(0.0, 3.0, 0.0), 1.0, 0.5).expect("valid capsule");
    let outcome = Resolver::default().resolve(&mut capsule, &[]);
    assert!(outcome.converged);
    assert_eq!(outcome.iterations, 0);
    assert_eq!(capsule.center(), Vec3::new(0.0, 3.0, 0.0));
}

#[test]
fn floor_contact_lifts_capsule_onto_surface() {
    let floor = [
        unit_cell(-1, 0, -1),
        unit_cell(-1, 0, 0),
        unit_cell(0, 0, -1),
        unit_cell(0, 0, 0),
    ];
    let mut capsule = CapsuleY::new(Vec3::new(0.0, 2.3, 0.0), 2.0, 0.5).expect("valid capsule");
    let outcome = Resolver::default().resolve(&mut capsule, &floor);
    assert!(outcome.converged);
    assert!(outcome.iterations >= 1);
    assert_relative_eq!(capsule.center().y, 2.5, epsilon = 1e-5);
    assert_relative_eq!(capsule.center().x, 0.0);
    assert_relative_eq!(capsule.center().z, 0.0);
}

#[test]
fn deepest_contact_is_resolved_first() {
    let floor = unit_cell(0, -1, 0);
    let wall = unit_cell(1, 0, 0);
    // Axis 0.4 above the floor cell and 0.1 short of the wall cell.
    let capsule = CapsuleY::new(Vec3::new(0.9, 0.4, 0.5), 0.0, 0.5).expect("valid capsule");
    let contact = deepest_contact(&capsule, &[floor, wall]).expect("both overlap");
    assert_relative_eq!(contact.penetration, 0.4, epsilon = 1e-6);
    assert!(contact.resolution.x < 0.0);
}

#[test]
fn corner_pocket_resolves_both_walls() {
    let walls = [unit_cell(1, 0, 0), unit_cell(0, 0, 1), unit_cell(0, -1, 0)];
    let mut capsule = CapsuleY::new(Vec3::new(0.8, 0.3, 0.7), 0.0, 0.5).expect("valid capsule");
    let outcome = Resolver::default().resolve(&mut capsule, &walls);
    assert!(outcome.converged);
    assert!(deepest_contact(&capsule, &walls).is_none());
    assert!(capsule.center().x <= 0.5 + 1e-5);
    assert!(capsule.center().z <= 0.5 + 1e-5);
    assert!(capsule.center().y >= 0.5 - 1e-5);
}

#[rstest]
#[case::single_pass(1)]
#[case::few_passes(3)]
#[case::default_cap(MAX_RESOLVE_ITERATIONS)]
fn wedged_capsule_terminates_within_cap(#[case] cap: u32) {
    // Two walls one unit apart squeeze a capsule 1.5 units wide; each pass
    // pushes it into the opposite wall.
    let mut cells: Vec<Aabb> = Vec::new();
    for y in -1..=1 {
        for z in -1..=1 {
            cells.push(unit_cell(-1, y, z));
            cells.push(unit_cell(1, y, z));
        }
    }
    let mut capsule = CapsuleY::new(Vec3::new(0.5, 0.5, 0.5), 0.0, 0.75).expect("valid capsule");
    let outcome = Resolver::new(cap).resolve(&mut capsule, &cells);
    assert!(!outcome.converged);
    assert_eq!(outcome.iterations, cap);
    assert!(outcome.residual_penetration > 0.0);
    assert!(capsule.center().is_finite());
}
