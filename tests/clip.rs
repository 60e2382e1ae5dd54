//! Unit tests for the one-dimensional clipping helpers.
//! Each helper returns zero exactly when the shapes overlap on the axis.
use approx::assert_relative_eq;
use rstest::rstest;
use voxel_body::{clip_point, clip_segment};

#[rstest]
#[case::below(0.0, 1.0, -0.25, 0.25)]
#[case::above(0.0, 1.0, 1.5, -0.5)]
#[case::inside(0.0, 1.0, 0.5, 0.0)]
#[case::on_lower_edge(0.0, 1.0, 0.0, 0.0)]
#[case::on_upper_edge(0.0, 1.0, 1.0, 0.0)]
#[case::negative_interval(-3.0, -2.0, 0.0, -2.0)]
fn point_cases(#[case] a0: f32, #[case] a1: f32, #[case] b0: f32, #[case] expected: f32) {
    assert_relative_eq!(clip_point(a0, a1, b0), expected);
}

#[rstest]
#[case::entirely_before(2.0, 3.0, 0.0, 1.5, 0.5)]
#[case::entirely_after(0.0, 1.0, 1.25, 3.0, -0.25)]
#[case::overlapping_low(0.0, 1.0, -1.0, 0.5, 0.0)]
#[case::overlapping_high(0.0, 1.0, 0.5, 2.0, 0.0)]
#[case::containing(0.0, 1.0, -5.0, 5.0, 0.0)]
#[case::contained(0.0, 1.0, 0.25, 0.75, 0.0)]
#[case::touching_below(1.0, 2.0, 0.0, 1.0, 0.0)]
#[case::touching_above(1.0, 2.0, 2.0, 3.0, 0.0)]
fn segment_cases(
    #[case] a0: f32,
    #[case] a1: f32,
    #[case] b0: f32,
    #[case] b1: f32,
    #[case] expected: f32,
) {
    assert_relative_eq!(clip_segment(a0, a1, b0, b1), expected);
}

#[test]
fn degenerate_segment_matches_point_clip() {
    for probe in [-2.0_f32, -0.5, 0.0, 0.3, 1.0, 1.7] {
        assert_relative_eq!(clip_segment(0.0, 1.0, probe, probe), clip_point(0.0, 1.0, probe));
    }
}
