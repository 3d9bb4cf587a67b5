use super::*;

const R: [u8; 4] = [255, 0, 0, 255];
const G: [u8; 4] = [0, 255, 0, 255];
const B: [u8; 4] = [0, 0, 255, 255];
const W: [u8; 4] = [255, 255, 255, 255];

/// 2x2 fixture: [[R, G], [B, W]].
fn rgbw() -> Raster {
    let mut r = Raster::new(2, 2).unwrap();
    r.put_pixel(0, 0, R);
    r.put_pixel(1, 0, G);
    r.put_pixel(0, 1, B);
    r.put_pixel(1, 1, W);
    r
}

#[test]
fn wrap_negative_one_equals_last_column() {
    let src = rgbw();
    for c in 0..4 {
        assert_eq!(
            sample(&src, -1.0, 0.0, c, EdgePolicy::Wrap, InterpolationMode::NearestFloor),
            sample(&src, 1.0, 0.0, c, EdgePolicy::Wrap, InterpolationMode::NearestFloor),
        );
    }
}

#[test]
fn wrap_nearest_at_negative_half_resolves_to_column_one() {
    let src = rgbw();
    // floor(-0.5) = -1, wrapped to column 1: the G / W column.
    assert_eq!(
        sample_pixel(&src, -0.5, 0.0, EdgePolicy::Wrap, InterpolationMode::NearestFloor),
        G
    );
    assert_eq!(
        sample_pixel(&src, -0.5, 1.0, EdgePolicy::Wrap, InterpolationMode::NearestFloor),
        W
    );
}

#[test]
fn clamp_negative_equals_first_column() {
    let src = rgbw();
    assert_eq!(
        sample_pixel(&src, -1.0, 0.0, EdgePolicy::Clamp, InterpolationMode::NearestFloor),
        R
    );
    assert_eq!(
        sample_pixel(&src, 5.0, 0.0, EdgePolicy::Clamp, InterpolationMode::NearestFloor),
        G
    );
}

#[test]
fn transparent_out_of_bounds_is_zero_for_every_channel() {
    let src = rgbw();
    for mode in [
        InterpolationMode::NearestFloor,
        InterpolationMode::NearestRound,
        InterpolationMode::Bilinear,
    ] {
        assert_eq!(
            sample_pixel(&src, -1.0, 0.0, EdgePolicy::Transparent, mode),
            [0, 0, 0, 0]
        );
        assert_eq!(
            sample_pixel(&src, 0.0, 2.0, EdgePolicy::Transparent, mode),
            [0, 0, 0, 0]
        );
    }
}

#[test]
fn bilinear_at_integer_coordinates_is_exact() {
    let src = rgbw();
    for (x, y, want) in [(0u32, 0u32, R), (1, 0, G), (0, 1, B), (1, 1, W)] {
        let got = sample_pixel(
            &src,
            f64::from(x),
            f64::from(y),
            EdgePolicy::Clamp,
            InterpolationMode::Bilinear,
        );
        assert_eq!(got, want);
    }
}

#[test]
fn bilinear_midpoint_averages_neighbors() {
    let src = rgbw();
    // Halfway between R and G on the top row.
    let px = sample_pixel(&src, 0.5, 0.0, EdgePolicy::Clamp, InterpolationMode::Bilinear);
    assert_eq!(px, [128, 128, 0, 255]);
}

#[test]
fn bilinear_blends_across_the_wrap_seam() {
    let src = rgbw();
    // x = 1.5 wraps its right neighbor back to column 0; this is intended.
    let px = sample_pixel(&src, 1.5, 0.0, EdgePolicy::Wrap, InterpolationMode::Bilinear);
    assert_eq!(px, [128, 128, 0, 255]);
}

#[test]
fn nearest_floor_and_round_disagree_at_half_pixels() {
    let src = rgbw();
    let floor = sample_pixel(&src, 0.5, 0.0, EdgePolicy::Clamp, InterpolationMode::NearestFloor);
    let round = sample_pixel(&src, 0.5, 0.0, EdgePolicy::Clamp, InterpolationMode::NearestRound);
    assert_eq!(floor, R);
    assert_eq!(round, G); // 0.5 rounds away from zero
}

#[test]
#[should_panic(expected = "channel index out of range")]
fn out_of_range_channel_is_fatal() {
    let src = rgbw();
    let _ = sample(&src, 0.0, 0.0, 4, EdgePolicy::Wrap, InterpolationMode::Bilinear);
}
