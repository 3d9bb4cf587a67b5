use super::*;

#[test]
fn default_config_round_trips_through_json() {
    let cfg = EffectConfig::default();
    let json = cfg.to_json().unwrap();
    let back = EffectConfig::from_json(&json).unwrap();
    assert_eq!(cfg, back);
}

#[test]
fn partial_json_fills_in_defaults() {
    let json = serde_json::json!({ "mode": "radial", "max_displacement": 12.5 });
    let cfg = EffectConfig::from_json(&json).unwrap();
    assert_eq!(cfg.mode, "radial");
    assert_eq!(cfg.max_displacement, 12.5);
    assert_eq!(cfg.edge_policy, "wrap");
    assert_eq!(cfg.cycles, 1.0);
}

#[test]
fn validate_resolves_enums() {
    let cfg = EffectConfig {
        mode: "orbital".to_owned(),
        blend_mode: "additive".to_owned(),
        edge_policy: "transparent".to_owned(),
        interpolation: "nearest_round".to_owned(),
        alpha_policy: "max_of_channels".to_owned(),
        ..EffectConfig::default()
    };
    let p = cfg.validate().unwrap();
    assert_eq!(p.mode, DisplacementMode::Orbital);
    assert_eq!(p.blend, BlendMode::Additive);
    assert_eq!(p.edge, EdgePolicy::Transparent);
    assert_eq!(p.interp, InterpolationMode::NearestRound);
    assert_eq!(p.alpha, AlphaPolicy::MaxOfChannels);
}

#[test]
fn unknown_enum_strings_fall_back_to_defaults() {
    let cfg = EffectConfig {
        mode: "vortex9000".to_owned(),
        blend_mode: "hue".to_owned(),
        edge_policy: "mirror".to_owned(),
        interpolation: "bicubic".to_owned(),
        alpha_policy: "min".to_owned(),
        ..EffectConfig::default()
    };
    let p = cfg.validate().unwrap();
    assert_eq!(p.mode, DisplacementMode::Wave);
    assert_eq!(p.blend, BlendMode::Screen);
    assert_eq!(p.edge, EdgePolicy::Wrap);
    assert_eq!(p.interp, InterpolationMode::Bilinear);
    assert_eq!(p.alpha, AlphaPolicy::PreserveSource);
}

#[test]
fn out_of_range_numbers_are_clamped_not_rejected() {
    let cfg = EffectConfig {
        max_displacement: -5.0,
        intensity: 0.0,
        focal_x: 2.0,
        focal_y: -1.0,
        turbulence: 9.0,
        ..EffectConfig::default()
    };
    let p = cfg.validate().unwrap();
    assert_eq!(p.max_displacement, 0.0);
    assert_eq!(p.intensity, 0.1);
    assert_eq!(p.focal_x, 1.0);
    assert_eq!(p.focal_y, 0.0);
    assert_eq!(p.liquid.turbulence, 1.0);
}

#[test]
fn non_finite_numbers_are_degenerate() {
    let cfg = EffectConfig {
        cycles: f64::NAN,
        ..EffectConfig::default()
    };
    assert!(matches!(
        cfg.validate(),
        Err(DriftError::DegenerateGeometry(_))
    ));

    let cfg = EffectConfig {
        angle_deg: f64::INFINITY,
        ..EffectConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn angles_wrap_into_one_turn() {
    let cfg = EffectConfig {
        angle_deg: -90.0,
        ..EffectConfig::default()
    };
    let p = cfg.validate().unwrap();
    assert!((p.angle_rad - 270f64.to_radians()).abs() < 1e-12);
}
