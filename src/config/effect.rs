use crate::effects::blend::{AlphaPolicy, BlendMode};
use crate::field::displacement::{DisplacementMode, LiquidParams};
use crate::foundation::error::{DriftError, DriftResult};
use crate::foundation::math::wrap_degrees;
use crate::sampling::resample::{EdgePolicy, InterpolationMode};

/// Flat, serializable configuration surface for one effect instance.
///
/// Only primitive fields: numbers, booleans, and strings drawn from fixed
/// enumerations, so a config round-trips through JSON unchanged and renders
/// are reproducible from the serialized form alone.
///
/// All validation happens once in [`EffectConfig::validate`]; out-of-range
/// numbers are clamped and unknown enum strings fall back to documented
/// defaults with a warning, never an error.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EffectConfig {
    /// Displacement mode: `static`, `radial`, `wave`, `orbital`, `pulse`,
    /// `scanline`, or `liquid`.
    pub mode: String,
    /// Peak displacement in pixels; clamped to `[0, 10000]`.
    pub max_displacement: f64,
    /// Temporal cycles per loop; rounded to the nearest integer >= 1 at
    /// phase time.
    pub cycles: f64,
    /// Base direction / rotation in degrees; wrapped into `[0, 360)`.
    pub angle_deg: f64,
    /// Pulse response sharpness; clamped to `[0.1, 10]`.
    pub intensity: f64,
    /// Focal point x as a fraction of the canvas width; clamped to `[0, 1]`.
    pub focal_x: f64,
    /// Focal point y as a fraction of the canvas height; clamped to `[0, 1]`.
    pub focal_y: f64,
    /// Scanline spatial frequency in cycles across the canvas height;
    /// clamped to `[0, 1000]`.
    pub scan_frequency: f64,
    /// Liquid first-term spatial frequency across the width.
    pub liquid_freq_x: f64,
    /// Liquid first-term spatial frequency across the height.
    pub liquid_freq_y: f64,
    /// Liquid cross-axis secondary spatial frequency.
    pub liquid_second_freq: f64,
    /// Liquid flow rotation in cycles per loop.
    pub liquid_flow_cycles: f64,
    /// Liquid noise turbulence amplitude; clamped to `[0, 1]`.
    pub turbulence: f64,
    /// Seed for the deterministic noise field.
    pub noise_seed: i64,
    /// Additive noise jitter amplitude in pixels; clamped to `[0, 100]`.
    pub noise_amplitude: f64,
    /// Displace R/G/B independently with an angular split per channel.
    pub chromatic: bool,
    /// Angular split between adjacent channels in degrees, used when
    /// `chromatic` is set.
    pub channel_spread_deg: f64,
    /// Blend mode: `normal`, `screen`, `additive`, or `overlay`.
    pub blend_mode: String,
    /// Edge policy: `wrap`, `clamp`, or `transparent`.
    pub edge_policy: String,
    /// Interpolation: `nearest_floor`, `nearest_round`, or `bilinear`.
    pub interpolation: String,
    /// Alpha policy: `preserve_source` or `max_of_channels`.
    pub alpha_policy: String,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            mode: "wave".to_owned(),
            max_displacement: 8.0,
            cycles: 1.0,
            angle_deg: 0.0,
            intensity: 1.0,
            focal_x: 0.5,
            focal_y: 0.5,
            scan_frequency: 12.0,
            liquid_freq_x: 3.0,
            liquid_freq_y: 2.0,
            liquid_second_freq: 5.0,
            liquid_flow_cycles: 1.0,
            turbulence: 0.0,
            noise_seed: 0,
            noise_amplitude: 0.0,
            chromatic: false,
            channel_spread_deg: 15.0,
            blend_mode: "normal".to_owned(),
            edge_policy: "wrap".to_owned(),
            interpolation: "bilinear".to_owned(),
            alpha_policy: "preserve_source".to_owned(),
        }
    }
}

impl EffectConfig {
    /// Deserialize a config from a JSON value.
    pub fn from_json(value: &serde_json::Value) -> DriftResult<Self> {
        serde_json::from_value(value.clone())
            .map_err(|e| DriftError::serde(format!("invalid effect config: {e}")))
    }

    /// Serialize the config to a JSON value.
    pub fn to_json(&self) -> DriftResult<serde_json::Value> {
        serde_json::to_value(self)
            .map_err(|e| DriftError::serde(format!("cannot serialize effect config: {e}")))
    }

    /// Resolve the config into validated parameters.
    ///
    /// Clamps numeric fields into their documented ranges and resolves enum
    /// strings (unknown values warn and default). Non-finite numbers are
    /// rejected with [`DriftError::DegenerateGeometry`]: they would poison
    /// phase math with NaN rather than render anything usable.
    pub fn validate(&self) -> DriftResult<EffectParams> {
        for (name, v) in [
            ("max_displacement", self.max_displacement),
            ("cycles", self.cycles),
            ("angle_deg", self.angle_deg),
            ("intensity", self.intensity),
            ("focal_x", self.focal_x),
            ("focal_y", self.focal_y),
            ("scan_frequency", self.scan_frequency),
            ("liquid_freq_x", self.liquid_freq_x),
            ("liquid_freq_y", self.liquid_freq_y),
            ("liquid_second_freq", self.liquid_second_freq),
            ("liquid_flow_cycles", self.liquid_flow_cycles),
            ("turbulence", self.turbulence),
            ("noise_amplitude", self.noise_amplitude),
            ("channel_spread_deg", self.channel_spread_deg),
        ] {
            if !v.is_finite() {
                return Err(DriftError::geometry(format!("{name} must be finite, got {v}")));
            }
        }

        Ok(EffectParams {
            mode: DisplacementMode::parse(&self.mode),
            max_displacement: clamp_warn("max_displacement", self.max_displacement, 0.0, 10_000.0),
            cycles: self.cycles,
            angle_rad: wrap_degrees(self.angle_deg).to_radians(),
            intensity: clamp_warn("intensity", self.intensity, 0.1, 10.0),
            focal_x: clamp_warn("focal_x", self.focal_x, 0.0, 1.0),
            focal_y: clamp_warn("focal_y", self.focal_y, 0.0, 1.0),
            scan_frequency: clamp_warn("scan_frequency", self.scan_frequency, 0.0, 1_000.0),
            liquid: LiquidParams {
                freq_x: clamp_warn("liquid_freq_x", self.liquid_freq_x, 0.0, 1_000.0),
                freq_y: clamp_warn("liquid_freq_y", self.liquid_freq_y, 0.0, 1_000.0),
                second_freq: clamp_warn("liquid_second_freq", self.liquid_second_freq, 0.0, 1_000.0),
                turbulence: clamp_warn("turbulence", self.turbulence, 0.0, 1.0),
                flow_cycles: self.liquid_flow_cycles,
            },
            noise_seed: self.noise_seed,
            noise_amplitude: clamp_warn("noise_amplitude", self.noise_amplitude, 0.0, 100.0),
            chromatic: self.chromatic,
            channel_spread_rad: wrap_degrees(self.channel_spread_deg).to_radians(),
            blend: BlendMode::parse(&self.blend_mode),
            edge: EdgePolicy::parse(&self.edge_policy),
            interp: InterpolationMode::parse(&self.interpolation),
            alpha: AlphaPolicy::parse(&self.alpha_policy),
        })
    }
}

/// Validated, resolved effect parameters consumed by the pipeline.
///
/// Everything here is already clamped and enum-resolved; per-pixel code
/// never re-validates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectParams {
    /// Resolved displacement mode.
    pub mode: DisplacementMode,
    /// Peak displacement in pixels.
    pub max_displacement: f64,
    /// Temporal cycles per loop (rounded at phase time).
    pub cycles: f64,
    /// Base direction / rotation in radians.
    pub angle_rad: f64,
    /// Pulse response sharpness in `[0.1, 10]`.
    pub intensity: f64,
    /// Focal point x in `[0, 1]` of the canvas width.
    pub focal_x: f64,
    /// Focal point y in `[0, 1]` of the canvas height.
    pub focal_y: f64,
    /// Scanline spatial frequency.
    pub scan_frequency: f64,
    /// Liquid field parameters.
    pub liquid: LiquidParams,
    /// Noise field seed.
    pub noise_seed: i64,
    /// Additive noise jitter amplitude in pixels.
    pub noise_amplitude: f64,
    /// Whether channels are displaced independently.
    pub chromatic: bool,
    /// Angular split between adjacent channels in radians.
    pub channel_spread_rad: f64,
    /// Resolved blend mode.
    pub blend: BlendMode,
    /// Resolved edge policy.
    pub edge: EdgePolicy,
    /// Resolved interpolation mode.
    pub interp: InterpolationMode,
    /// Resolved alpha policy.
    pub alpha: AlphaPolicy,
}

fn clamp_warn(name: &str, v: f64, lo: f64, hi: f64) -> f64 {
    let c = v.clamp(lo, hi);
    if c != v {
        tracing::warn!(field = name, value = v, clamped = c, "config value out of range");
    }
    c
}

#[cfg(test)]
#[path = "../../tests/unit/config/effect.rs"]
mod tests;
