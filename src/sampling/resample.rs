use crate::foundation::core::{CHANNELS, Raster, Rgba8};

/// Rule for resolving an out-of-bounds sample coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum EdgePolicy {
    /// Wrap around the opposite edge (toroidal canvas).
    Wrap,
    /// Clamp to the nearest edge pixel.
    Clamp,
    /// Out-of-bounds reads are fully transparent black.
    Transparent,
}

impl EdgePolicy {
    /// Parse a configuration string, falling back to `Wrap` with a warning.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "wrap" => Self::Wrap,
            "clamp" => Self::Clamp,
            "transparent" => Self::Transparent,
            other => {
                tracing::warn!(policy = other, "unknown edge policy, using wrap");
                Self::Wrap
            }
        }
    }
}

impl Default for EdgePolicy {
    fn default() -> Self {
        Self::Wrap
    }
}

/// How a fractional sample coordinate is resolved to channel values.
///
/// The two nearest-neighbor variants exist because different effects
/// truncate and round respectively; the distinction is observable at
/// half-pixel coordinates, so it is explicit rather than implied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum InterpolationMode {
    /// Truncate the fractional coordinate toward negative infinity.
    NearestFloor,
    /// Round the fractional coordinate to the nearest integer.
    NearestRound,
    /// Weighted blend of the four nearest source pixels.
    Bilinear,
}

impl InterpolationMode {
    /// Parse a configuration string, falling back to `Bilinear` with a warning.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest_floor" | "nearestfloor" => Self::NearestFloor,
            "nearest_round" | "nearestround" | "nearest" => Self::NearestRound,
            "bilinear" => Self::Bilinear,
            other => {
                tracing::warn!(interpolation = other, "unknown interpolation, using bilinear");
                Self::Bilinear
            }
        }
    }
}

impl Default for InterpolationMode {
    fn default() -> Self {
        Self::Bilinear
    }
}

/// Sample one channel of `src` at a fractional coordinate.
///
/// Under `Bilinear`, the edge policy is applied to each of the four neighbor
/// taps independently; a sample near a wrapping edge therefore blends across
/// the wrap seam, which is intended. Under `Transparent` the *requested*
/// coordinate decides: if it is out of bounds the sample is 0 with no
/// interpolation against in-bounds neighbors.
///
/// `channel >= 4` is a programming error and panics.
pub fn sample(
    src: &Raster,
    x: f64,
    y: f64,
    channel: usize,
    policy: EdgePolicy,
    mode: InterpolationMode,
) -> u8 {
    assert!(channel < CHANNELS, "channel index out of range: {channel}");
    match mode {
        InterpolationMode::NearestFloor => {
            sample_int(src, x.floor() as i64, y.floor() as i64, channel, policy)
        }
        InterpolationMode::NearestRound => {
            sample_int(src, x.round() as i64, y.round() as i64, channel, policy)
        }
        InterpolationMode::Bilinear => sample_bilinear(src, x, y, channel, policy),
    }
}

/// Sample all four channels at one coordinate.
pub fn sample_pixel(
    src: &Raster,
    x: f64,
    y: f64,
    policy: EdgePolicy,
    mode: InterpolationMode,
) -> Rgba8 {
    [
        sample(src, x, y, 0, policy, mode),
        sample(src, x, y, 1, policy, mode),
        sample(src, x, y, 2, policy, mode),
        sample(src, x, y, 3, policy, mode),
    ]
}

fn sample_bilinear(src: &Raster, x: f64, y: f64, channel: usize, policy: EdgePolicy) -> u8 {
    if policy == EdgePolicy::Transparent && requested_out_of_bounds(src, x, y) {
        return 0;
    }

    let x0f = x.floor();
    let y0f = y.floor();
    let fx = x - x0f;
    let fy = y - y0f;
    let x0 = x0f as i64;
    let y0 = y0f as i64;

    let c00 = f64::from(sample_int(src, x0, y0, channel, policy));
    let c10 = f64::from(sample_int(src, x0 + 1, y0, channel, policy));
    let c01 = f64::from(sample_int(src, x0, y0 + 1, channel, policy));
    let c11 = f64::from(sample_int(src, x0 + 1, y0 + 1, channel, policy));

    let top = c00 * (1.0 - fx) + c10 * fx;
    let bottom = c01 * (1.0 - fx) + c11 * fx;
    let v = top * (1.0 - fy) + bottom * fy;
    v.round().clamp(0.0, 255.0) as u8
}

fn sample_int(src: &Raster, xi: i64, yi: i64, channel: usize, policy: EdgePolicy) -> u8 {
    let w = i64::from(src.width());
    let h = i64::from(src.height());
    let (xr, yr) = match policy {
        EdgePolicy::Wrap => (((xi % w) + w) % w, ((yi % h) + h) % h),
        EdgePolicy::Clamp => (xi.clamp(0, w - 1), yi.clamp(0, h - 1)),
        EdgePolicy::Transparent => {
            if xi < 0 || xi >= w || yi < 0 || yi >= h {
                return 0;
            }
            (xi, yi)
        }
    };
    src.channel_at(xr as u32, yr as u32, channel)
}

fn requested_out_of_bounds(src: &Raster, x: f64, y: f64) -> bool {
    x < 0.0 || y < 0.0 || x >= f64::from(src.width()) || y >= f64::from(src.height())
}

#[cfg(test)]
#[path = "../../tests/unit/sampling/resample.rs"]
mod tests;
