use super::*;

#[test]
fn normal_blend_paints_over_unless_transparent() {
    // Regression pin: this is intentionally NOT conventional alpha-over.
    // A zero overlay channel keeps the base; anything else replaces it.
    assert_eq!(blend(90, 0, BlendMode::Normal), 90);
    assert_eq!(blend(90, 1, BlendMode::Normal), 1);
    assert_eq!(blend(0, 200, BlendMode::Normal), 200);
    assert_eq!(blend(255, 0, BlendMode::Normal), 255);
}

#[test]
fn screen_endpoints_and_symmetry() {
    assert_eq!(blend(0, 0, BlendMode::Screen), 0);
    assert_eq!(blend(255, 0, BlendMode::Screen), 255);
    assert_eq!(blend(0, 255, BlendMode::Screen), 255);
    assert_eq!(blend(255, 255, BlendMode::Screen), 255);
    // Screen is commutative.
    assert_eq!(blend(70, 180, BlendMode::Screen), blend(180, 70, BlendMode::Screen));
    // Screen never darkens either input.
    let v = blend(70, 180, BlendMode::Screen);
    assert!(v >= 180);
}

#[test]
fn additive_saturates_at_255() {
    assert_eq!(blend(100, 100, BlendMode::Additive), 200);
    assert_eq!(blend(200, 100, BlendMode::Additive), 255);
    assert_eq!(blend(255, 255, BlendMode::Additive), 255);
}

#[test]
fn overlay_splits_on_base_midpoint() {
    // Dark base multiplies, bright base screens.
    assert_eq!(blend(0, 200, BlendMode::Overlay), 0);
    assert_eq!(blend(255, 200, BlendMode::Overlay), 255);
    assert!(blend(64, 128, BlendMode::Overlay) < 128);
    assert!(blend(192, 128, BlendMode::Overlay) > 128);
}

#[test]
fn parse_defaults_unknown_to_screen() {
    assert_eq!(BlendMode::parse("normal"), BlendMode::Normal);
    assert_eq!(BlendMode::parse("ADD"), BlendMode::Additive);
    assert_eq!(BlendMode::parse("hue"), BlendMode::Screen);
}

#[test]
fn preserve_source_keeps_the_base_alpha() {
    let out = composite_channels(
        [10, 20, 30],
        [1, 2, 3, 77],
        [250, 251, 252],
        BlendMode::Normal,
        AlphaPolicy::PreserveSource,
    );
    assert_eq!(out, [10, 20, 30, 77]);
}

#[test]
fn max_of_channels_takes_the_largest_sampled_alpha() {
    let out = composite_channels(
        [10, 20, 30],
        [1, 2, 3, 77],
        [5, 200, 100],
        BlendMode::Normal,
        AlphaPolicy::MaxOfChannels,
    );
    assert_eq!(out[3], 200);
}
