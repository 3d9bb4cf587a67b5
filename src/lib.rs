//! Pixeldrift is a deterministic per-pixel displacement-and-resample engine
//! for perfect-loop procedural animation effects.
//!
//! A host hands in an RGBA8 raster plus `(frame_number, total_frames)`; the
//! engine computes a displacement vector per pixel (per channel for chromatic
//! effects), resamples the source through an edge policy, blends the result
//! against the base pixel, and returns a fresh raster.
//!
//! # Pipeline overview
//!
//! 1. **Phase**: [`PhaseClock`] folds the frame counter into a loop-safe
//!    `t ∈ [0, 1)` and derives integer-rounded cycle phases
//! 2. **Displace**: [`displacement_at`] maps `(pixel, phase)` to an offset
//!    vector, per mode ([`DisplacementMode`]) and optionally per channel
//! 3. **Resample**: [`sample`](crate::sample) reads the source at the
//!    displaced fractional coordinate under an [`EdgePolicy`]
//! 4. **Composite**: [`blend`](crate::blend) merges sample and base,
//!    [`AlphaPolicy`] resolves the destination alpha
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: a frame is a pure function of
//!   `(source, frame_number, total_frames, config)`; there is no hidden RNG.
//! - **Perfect loop**: every cyclic parameter is integer-rounded via
//!   [`round_to_cycle`], so frame `N` is byte-identical to frame `0`.
//! - **No IO in the engine**: codecs live behind the narrow adapters in
//!   [`decode_raster`] / [`raster_to_image`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod effects;
mod field;
mod foundation;
mod noise;
mod raster;
mod render;
mod sampling;
mod timing;

pub use config::effect::{EffectConfig, EffectParams};
pub use effects::blend::{AlphaPolicy, BlendMode, blend, composite_channels};
pub use field::displacement::{DisplacementMode, FieldContext, LiquidParams, displacement_at};
pub use foundation::core::{CHANNELS, Point, Raster, Rgba8, Vec2};
pub use foundation::error::{DriftError, DriftResult};
pub use foundation::math::wrap_degrees;
pub use noise::hash::NoiseSource;
pub use raster::convert::{decode_raster, raster_from_image, raster_to_image};
pub use render::buffer_pool::{PoolOpts, PoolStats, RasterBufferPool};
pub use render::pipeline::{EffectPipeline, Threading};
pub use sampling::resample::{EdgePolicy, InterpolationMode, sample, sample_pixel};
pub use timing::phase::{PhaseClock, TimePhase, round_to_cycle};
