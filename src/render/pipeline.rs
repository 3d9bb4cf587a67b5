use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;

use crate::config::effect::EffectParams;
use crate::effects::blend::composite_channels;
use crate::field::displacement::{FieldContext, displacement_at};
use crate::foundation::core::{CHANNELS, Raster};
use crate::foundation::error::{DriftError, DriftResult};
use crate::render::buffer_pool::{PoolStats, RasterBufferPool};
use crate::sampling::resample;
use crate::timing::phase::PhaseClock;

/// Threading controls for the per-pixel loop.
///
/// The loop is embarrassingly parallel: every pixel is a pure function of the
/// read-only source raster and the frame phase, so row-chunked execution
/// produces byte-identical output to the serial path.
#[derive(Clone, Debug, Default)]
pub struct Threading {
    /// Run the pixel loop on a rayon pool when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

/// Frame orchestrator: phase -> displacement -> resample -> composite.
///
/// Owns a [`RasterBufferPool`] so repeated `invoke` calls reuse destination
/// buffers instead of allocating per frame. The pool is only touched outside
/// the parallel region; workers never share mutable state beyond disjoint
/// output rows.
pub struct EffectPipeline {
    params: EffectParams,
    threading: Threading,
    pool: RasterBufferPool,
}

impl EffectPipeline {
    /// Build a pipeline with default (serial) threading.
    pub fn new(params: EffectParams) -> Self {
        Self::with_threading(params, Threading::default())
    }

    /// Build a pipeline with explicit threading controls.
    pub fn with_threading(params: EffectParams, threading: Threading) -> Self {
        Self {
            params,
            threading,
            pool: RasterBufferPool::default(),
        }
    }

    /// The validated parameters this pipeline renders with.
    pub fn params(&self) -> &EffectParams {
        &self.params
    }

    /// Snapshot of the buffer pool counters.
    pub fn pool_stats(&self) -> PoolStats {
        self.pool.stats()
    }

    /// Return a previously rendered frame's buffer to the pool.
    ///
    /// Hosts rendering many frames should recycle each output raster once
    /// they are done with it; otherwise every frame pays a fresh allocation.
    pub fn recycle(&mut self, raster: Raster) {
        let (w, h) = (raster.width(), raster.height());
        self.pool.release(w, h, CHANNELS as u8, raster.into_vec());
    }

    /// Render one frame.
    ///
    /// Pure with respect to its arguments: calling twice with identical
    /// inputs yields byte-identical rasters, and frame `total_frames` equals
    /// frame `0` exactly (perfect loop). On any mid-frame non-finite
    /// displacement the whole frame fails with
    /// [`DriftError::DegenerateGeometry`]; a partially written buffer is
    /// never returned.
    #[tracing::instrument(skip(self, src), fields(w = src.width(), h = src.height()))]
    pub fn invoke(
        &mut self,
        src: &Raster,
        frame_number: u64,
        total_frames: u64,
    ) -> DriftResult<Raster> {
        let phase = PhaseClock::compute(frame_number, total_frames)?;
        let ctx = FieldContext::new(src.width(), src.height(), phase, &self.params)?;

        let (w, h) = (src.width(), src.height());
        let mut out = self.pool.acquire(w, h, CHANNELS as u8);
        // Pooled buffers keep the previous frame's bytes.
        out.fill(0);

        let params = self.params;
        let degenerate = AtomicBool::new(false);
        let row_len = (w as usize) * CHANNELS;

        if self.threading.parallel {
            let worker_pool = build_thread_pool(self.threading.threads)?;
            worker_pool.install(|| {
                out.par_chunks_mut(row_len).enumerate().for_each(|(y, row)| {
                    render_row(y as u32, row, src, &ctx, &params, &degenerate);
                });
            });
        } else {
            for (y, row) in out.chunks_mut(row_len).enumerate() {
                render_row(y as u32, row, src, &ctx, &params, &degenerate);
            }
        }

        if degenerate.load(Ordering::Relaxed) {
            self.pool.release(w, h, CHANNELS as u8, out);
            return Err(DriftError::geometry(
                "non-finite displacement encountered mid-frame",
            ));
        }

        Raster::from_vec(w, h, out)
    }
}

fn render_row(
    y: u32,
    row: &mut [u8],
    src: &Raster,
    ctx: &FieldContext,
    params: &EffectParams,
    degenerate: &AtomicBool,
) {
    for x in 0..src.width() {
        let base = src.pixel(x, y);
        let mut samples = [0u8; 3];
        let mut alphas = [0u8; 3];

        if params.chromatic {
            for c in 0..3usize {
                let d = displacement_at(x, y, ctx, c as i32, (c as f64) * params.channel_spread_rad);
                if !d.x.is_finite() || !d.y.is_finite() {
                    degenerate.store(true, Ordering::Relaxed);
                    return;
                }
                let sx = f64::from(x) + d.x;
                let sy = f64::from(y) + d.y;
                samples[c] = resample::sample(src, sx, sy, c, params.edge, params.interp);
                alphas[c] = resample::sample(src, sx, sy, 3, params.edge, params.interp);
            }
        } else {
            let d = displacement_at(x, y, ctx, 0, 0.0);
            if !d.x.is_finite() || !d.y.is_finite() {
                degenerate.store(true, Ordering::Relaxed);
                return;
            }
            let sx = f64::from(x) + d.x;
            let sy = f64::from(y) + d.y;
            let px = resample::sample_pixel(src, sx, sy, params.edge, params.interp);
            samples = [px[0], px[1], px[2]];
            alphas = [px[3]; 3];
        }

        let out_px = composite_channels(samples, base, alphas, params.blend, params.alpha);
        let i = (x as usize) * CHANNELS;
        row[i..i + CHANNELS].copy_from_slice(&out_px);
    }
}

fn build_thread_pool(threads: Option<usize>) -> DriftResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n.max(1));
    }
    builder
        .build()
        .map_err(|e| DriftError::validation(format!("failed to build worker pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
