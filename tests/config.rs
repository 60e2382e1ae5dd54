//! Tests for body configuration parsing and validation.
use rstest::rstest;
use voxel_body::{
    BodyConfig, ConfigError, VelocityCorrection, DEFAULT_CAPSULE_HEIGHT, DEFAULT_CAPSULE_RADIUS,
    MAX_RESOLVE_ITERATIONS,
};

#[test]
fn defaults_describe_stock_player() {
    let config = BodyConfig::default();
    assert_eq!(config.height, DEFAULT_CAPSULE_HEIGHT);
    assert_eq!(config.radius, DEFAULT_CAPSULE_RADIUS);
    assert_eq!(config.max_iterations, MAX_RESOLVE_ITERATIONS);
    assert_eq!(config.velocity_correction, VelocityCorrection::Displacement);
    assert!(config.validate().is_ok());
}

#[test]
fn json_fields_override_defaults() {
    let config = BodyConfig::from_json_str(
        r#"{ "height": 1.8, "radius": 0.3, "max_iterations": 12, "velocity_correction": "rate" }"#,
    )
    .expect("valid configuration");
    assert_eq!(
        config,
        BodyConfig {
            height: 1.8,
            radius: 0.3,
            max_iterations: 12,
            velocity_correction: VelocityCorrection::Rate,
        }
    );
}

#[test]
fn empty_object_yields_defaults() {
    let config = BodyConfig::from_json_str("{}").expect("valid configuration");
    assert_eq!(config, BodyConfig::default());
}

#[rstest]
#[case::malformed("{ radius: 1 }")]
#[case::unknown_field(r#"{ "mass": 70.0 }"#)]
#[case::wrong_type(r#"{ "radius": "wide" }"#)]
#[case::unknown_mode(r#"{ "velocity_correction": "bounce" }"#)]
fn undecodable_json_is_a_parse_error(#[case] json: &str) {
    let err = BodyConfig::from_json_str(json).expect_err("must not parse");
    assert!(matches!(err, ConfigError::Parse(_)), "got {err}");
}

#[rstest]
#[case::zero_radius(r#"{ "radius": 0.0 }"#)]
#[case::negative_radius(r#"{ "radius": -0.5 }"#)]
fn bad_radius_is_rejected(#[case] json: &str) {
    let err = BodyConfig::from_json_str(json).expect_err("must not validate");
    assert!(matches!(err, ConfigError::InvalidRadius(_)));
}

#[test]
fn negative_height_is_rejected() {
    let err = BodyConfig::from_json_str(r#"{ "height": -2.0 }"#).expect_err("must not validate");
    assert!(matches!(err, ConfigError::InvalidHeight(h) if h < 0.0));
}

#[test]
fn zero_height_sphere_is_allowed() {
    assert!(BodyConfig::capsule(0.0, 0.5).validate().is_ok());
}

#[test]
fn zero_iterations_is_rejected() {
    let err =
        BodyConfig::from_json_str(r#"{ "max_iterations": 0 }"#).expect_err("must not validate");
    assert!(matches!(err, ConfigError::ZeroIterations));
    assert_eq!(err.to_string(), "resolver iteration cap must be at least 1");
}

#[test]
fn config_round_trips_through_json() {
    let config = BodyConfig::capsule(1.5, 0.25).with_velocity_correction(VelocityCorrection::Rate);
    let json = serde_json::to_string(&config).expect("serialisable");
    assert_eq!(BodyConfig::from_json_str(&json).expect("parses"), config);
}
