use std::f64::consts::TAU;

use crate::config::effect::EffectParams;
use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::{DriftError, DriftResult};
use crate::noise::hash::NoiseSource;
use crate::timing::phase::TimePhase;

/// Closed set of displacement field shapes.
///
/// Unknown configuration strings fall back to [`DisplacementMode::Wave`]
/// rather than erroring, matching the clamp-and-default validation policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum DisplacementMode {
    /// No displacement; noise jitter still applies.
    Static,
    /// Radial push/pull away from the focal point.
    Radial,
    /// Uniform directional wave.
    Wave,
    /// Tangential rotation around the focal point.
    Orbital,
    /// Directional wave with an exponential response curve.
    Pulse,
    /// Horizontal tracking-error offset driven by the row index.
    Scanline,
    /// Multi-frequency sine field with noise turbulence and animated flow.
    Liquid,
}

impl DisplacementMode {
    /// Parse a configuration string, falling back to `Wave` with a warning.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" => Self::Static,
            "radial" => Self::Radial,
            "wave" => Self::Wave,
            "orbital" => Self::Orbital,
            "pulse" => Self::Pulse,
            "scanline" => Self::Scanline,
            "liquid" => Self::Liquid,
            other => {
                tracing::warn!(mode = other, "unknown displacement mode, using wave");
                Self::Wave
            }
        }
    }
}

impl Default for DisplacementMode {
    fn default() -> Self {
        Self::Wave
    }
}

/// Parameters for the multi-frequency liquid field.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LiquidParams {
    /// Spatial frequency (cycles across the canvas width) of the first term.
    pub freq_x: f64,
    /// Spatial frequency (cycles across the canvas height) of the first term.
    pub freq_y: f64,
    /// Spatial frequency of the cross-axis secondary term.
    pub second_freq: f64,
    /// Noise turbulence amplitude mixed into the field, in `[0, 1]` of the
    /// displacement budget.
    pub turbulence: f64,
    /// Cycles per loop of the animated flow rotation.
    pub flow_cycles: f64,
}

impl Default for LiquidParams {
    fn default() -> Self {
        Self {
            freq_x: 3.0,
            freq_y: 2.0,
            second_freq: 5.0,
            turbulence: 0.0,
            flow_cycles: 1.0,
        }
    }
}

/// Per-frame context for evaluating the displacement field.
///
/// Built once per `invoke` from validated effect parameters; everything the
/// per-pixel function needs is precomputed here so the hot loop does no
/// validation and no allocation.
#[derive(Clone, Copy, Debug)]
pub struct FieldContext {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Loop phase for this frame.
    pub phase: TimePhase,
    /// Field shape.
    pub mode: DisplacementMode,
    /// Peak displacement in pixels.
    pub max_displacement: f64,
    /// Temporal cycles per loop.
    pub cycles: f64,
    /// Base direction / rotation offset in radians.
    pub angle_rad: f64,
    /// Pulse response exponent control; always >= 0.1 after validation.
    pub intensity: f64,
    /// Scanline spatial frequency in cycles across the canvas height.
    pub scan_frequency: f64,
    /// Liquid field parameters.
    pub liquid: LiquidParams,
    /// Seed for the deterministic noise field.
    pub noise_seed: i64,
    /// Amplitude in pixels of the additive noise jitter; 0 disables it.
    pub noise_amplitude: f64,

    focal_px: Point,
    half_diag: f64,
}

impl FieldContext {
    /// Build a per-frame context, validating geometry preconditions.
    ///
    /// A zero-area canvas is rejected with
    /// [`DriftError::DegenerateGeometry`]; nothing downstream divides by a
    /// canvas dimension after this check.
    pub fn new(
        width: u32,
        height: u32,
        phase: TimePhase,
        params: &EffectParams,
    ) -> DriftResult<Self> {
        if width == 0 || height == 0 {
            return Err(DriftError::geometry(format!(
                "cannot displace over a {width}x{height} canvas"
            )));
        }
        let w = f64::from(width);
        let h = f64::from(height);
        let focal_px = Point::new(params.focal_x * (w - 1.0), params.focal_y * (h - 1.0));
        let half_diag = (w * w + h * h).sqrt() / 2.0;

        Ok(Self {
            width,
            height,
            phase,
            mode: params.mode,
            max_displacement: params.max_displacement,
            cycles: params.cycles,
            angle_rad: params.angle_rad,
            intensity: params.intensity,
            scan_frequency: params.scan_frequency,
            liquid: params.liquid,
            noise_seed: params.noise_seed,
            noise_amplitude: params.noise_amplitude,
            focal_px,
            half_diag,
        })
    }

    /// Focal point in pixel coordinates.
    pub fn focal_px(&self) -> Point {
        self.focal_px
    }
}

/// Evaluate the displacement field at one pixel for one channel.
///
/// Pure function of its inputs: no state survives between calls, so the
/// per-pixel loop can run rows in parallel. `channel_angle_rad` is the
/// chromatic split applied to direction-bearing modes (0 when the effect is
/// achromatic).
///
/// A zero `max_displacement` or `Static` mode yields a zero base vector, but
/// the noise jitter is still added: some presets rely on noise-only motion.
pub fn displacement_at(
    x: u32,
    y: u32,
    ctx: &FieldContext,
    channel: i32,
    channel_angle_rad: f64,
) -> Vec2 {
    let p = Point::new(f64::from(x), f64::from(y));
    let mut d = match ctx.mode {
        DisplacementMode::Static => Vec2::ZERO,
        DisplacementMode::Radial => radial(p, ctx, channel_angle_rad),
        DisplacementMode::Wave => wave(ctx, channel_angle_rad),
        DisplacementMode::Orbital => orbital(p, ctx, channel_angle_rad),
        DisplacementMode::Pulse => pulse(ctx, channel_angle_rad),
        DisplacementMode::Scanline => scanline(y, ctx, channel_angle_rad),
        DisplacementMode::Liquid => liquid(x, y, ctx, channel, channel_angle_rad),
    };

    if ctx.noise_amplitude != 0.0 {
        let (nx, ny) =
            NoiseSource::sample(i64::from(x), i64::from(y), channel, ctx.noise_seed);
        d.x += nx * ctx.noise_amplitude;
        d.y += ny * ctx.noise_amplitude;
    }

    d
}

/// Magnitude follows `sin(2π·k·t)` scaled by the pixel's normalized distance
/// from the focal point; direction points from focus to pixel, rotated by the
/// configured angle plus the chromatic split.
fn radial(p: Point, ctx: &FieldContext, channel_angle: f64) -> Vec2 {
    let r = p - ctx.focal_px;
    let dist = r.hypot();
    if dist == 0.0 {
        return Vec2::ZERO;
    }
    let norm_dist = (dist / ctx.half_diag).min(1.0);
    let magnitude = ctx.phase.cycle_phase(ctx.cycles).sin() * norm_dist * ctx.max_displacement;
    let dir = rotate(r / dist, ctx.angle_rad + channel_angle);
    dir * magnitude
}

fn wave(ctx: &FieldContext, channel_angle: f64) -> Vec2 {
    let angle = ctx.angle_rad + channel_angle;
    let s = ctx.phase.cycle_phase(ctx.cycles).sin();
    Vec2::new(
        angle.cos() * ctx.max_displacement * s,
        angle.sin() * ctx.max_displacement * s,
    )
}

/// Chord of the radius vector rotated by the loop phase, normalized so the
/// displacement reaches the configured budget at the canvas edge. The
/// rotation angle closes over the loop, so frame 0 and frame N agree.
fn orbital(p: Point, ctx: &FieldContext, channel_angle: f64) -> Vec2 {
    let r = p - ctx.focal_px;
    let dist = r.hypot();
    if dist == 0.0 {
        return Vec2::ZERO;
    }
    let theta = ctx.phase.cycle_phase(ctx.cycles) + channel_angle;
    let chord = rotate(r, theta) - r;
    let norm_dist = (dist / ctx.half_diag).min(1.0);
    // |chord| <= 2*dist, so dividing by dist keeps the scale bounded.
    (chord / dist) * (norm_dist * ctx.max_displacement * 0.5)
}

/// Wave with an exponential response: `sign(sin)·|sin|^(1/intensity)` sharpens
/// the stroke into a snap as intensity grows.
fn pulse(ctx: &FieldContext, channel_angle: f64) -> Vec2 {
    let angle = ctx.angle_rad + channel_angle;
    let s = ctx.phase.cycle_phase(ctx.cycles).sin();
    let resp = s.signum() * s.abs().powf(1.0 / ctx.intensity);
    Vec2::new(
        angle.cos() * ctx.max_displacement * resp,
        angle.sin() * ctx.max_displacement * resp,
    )
}

/// Horizontal offset driven by the row index plus the temporal phase,
/// approximating tape tracking error. The chromatic split shifts the phase
/// per channel rather than the direction.
fn scanline(y: u32, ctx: &FieldContext, channel_angle: f64) -> Vec2 {
    let yn = f64::from(y) / f64::from(ctx.height);
    let spatial = TAU * ctx.scan_frequency * yn;
    let dx = (spatial + ctx.phase.cycle_phase(ctx.cycles) + channel_angle).sin()
        * ctx.max_displacement;
    Vec2::new(dx, 0.0)
}

/// Sum of sine terms at two spatial+temporal frequencies plus noise
/// turbulence, rotated by a flow angle that itself animates over the loop.
fn liquid(x: u32, y: u32, ctx: &FieldContext, channel: i32, channel_angle: f64) -> Vec2 {
    let xn = f64::from(x) / f64::from(ctx.width);
    let yn = f64::from(y) / f64::from(ctx.height);
    let p1 = ctx.phase.cycle_phase(ctx.cycles);
    let p2 = ctx.phase.cycle_phase(ctx.cycles * 2.0);

    let mut dx = (TAU * ctx.liquid.freq_x * xn + p1 + channel_angle).sin()
        + 0.5 * (TAU * ctx.liquid.second_freq * yn + p2).sin();
    let mut dy = (TAU * ctx.liquid.freq_y * yn + p1 + channel_angle).cos()
        + 0.5 * (TAU * ctx.liquid.second_freq * xn + p2).cos();

    if ctx.liquid.turbulence != 0.0 {
        let (nx, ny) =
            NoiseSource::sample(i64::from(x), i64::from(y), channel, ctx.noise_seed);
        dx += nx * ctx.liquid.turbulence;
        dy += ny * ctx.liquid.turbulence;
    }

    let flow = ctx.angle_rad + ctx.phase.cycle_phase(ctx.liquid.flow_cycles);
    // The two sine terms sum to at most 1.5 per axis; renormalize so
    // max_displacement stays the actual peak.
    rotate(Vec2::new(dx, dy), flow) * (ctx.max_displacement / 1.5)
}

fn rotate(v: Vec2, angle: f64) -> Vec2 {
    let (s, c) = angle.sin_cos();
    Vec2::new(v.x * c - v.y * s, v.x * s + v.y * c)
}

#[cfg(test)]
#[path = "../../tests/unit/field/displacement.rs"]
mod tests;
