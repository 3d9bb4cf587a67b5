use std::collections::HashMap;

/// Pool configuration for cached raster buffers.
#[derive(Debug, Clone, Copy)]
pub struct PoolOpts {
    /// Maximum bytes retained across all buckets.
    pub max_pool_bytes: usize,
    /// Maximum number of retained buffers per `(w, h, channels)` bucket.
    pub max_buffers_per_bucket: usize,
}

impl Default for PoolOpts {
    fn default() -> Self {
        Self {
            max_pool_bytes: 256 * 1024 * 1024,
            max_buffers_per_bucket: 8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct BufferKey {
    w: u32,
    h: u32,
    channels: u8,
}

impl BufferKey {
    fn byte_len(self) -> usize {
        (self.w as usize)
            .saturating_mul(self.h as usize)
            .saturating_mul(self.channels as usize)
    }
}

/// Counters describing pool behavior over its lifetime.
#[derive(Debug, Default, Clone)]
pub struct PoolStats {
    /// Buffers currently retained across all buckets.
    pub retained_buffers: usize,
    /// Bytes currently retained across all buckets.
    pub retained_bytes: usize,
    /// Fresh allocations served because no pooled buffer matched.
    pub alloc_buffers: u64,
    /// Bytes freshly allocated over the pool lifetime.
    pub alloc_bytes: u64,
    /// Buffers dropped at release because a cap was hit.
    pub dropped_on_release: u64,
}

struct Bucket {
    buffers: Vec<Vec<u8>>,
}

/// Bounded pooled allocator for flat raster buffers.
///
/// Keyed by `(width, height, channels)`. Acquire/release happen at frame
/// granularity, never per pixel. Buffers coming back out of the pool keep
/// whatever bytes the previous frame left in them; callers needing a clean
/// buffer must `fill(0)` explicitly.
///
/// Not thread-safe: one pipeline owns one pool and touches it only outside
/// the parallel pixel loop.
pub struct RasterBufferPool {
    opts: PoolOpts,
    stats: PoolStats,

    // Hash lookup is acceptable here: this is frame-level, not per-pixel.
    bucket_idx_by_key: HashMap<BufferKey, usize>,
    buckets: Vec<Bucket>,
}

impl RasterBufferPool {
    /// Create an empty pool with the given caps.
    pub fn new(opts: PoolOpts) -> Self {
        Self {
            opts,
            stats: PoolStats::default(),
            bucket_idx_by_key: HashMap::new(),
            buckets: Vec::new(),
        }
    }

    /// Snapshot of the pool counters.
    pub fn stats(&self) -> PoolStats {
        self.stats.clone()
    }

    /// Check out a buffer of exactly `w * h * channels` bytes.
    ///
    /// Contents are unspecified when the buffer was pooled.
    pub fn acquire(&mut self, w: u32, h: u32, channels: u8) -> Vec<u8> {
        let key = BufferKey { w, h, channels };
        if let Some(&bi) = self.bucket_idx_by_key.get(&key)
            && let Some(buf) = self.buckets[bi].buffers.pop()
        {
            self.stats.retained_buffers = self.stats.retained_buffers.saturating_sub(1);
            self.stats.retained_bytes = self.stats.retained_bytes.saturating_sub(key.byte_len());
            return buf;
        }

        self.stats.alloc_buffers = self.stats.alloc_buffers.saturating_add(1);
        self.stats.alloc_bytes = self.stats.alloc_bytes.saturating_add(key.byte_len() as u64);
        vec![0; key.byte_len()]
    }

    /// Return a buffer to the pool, subject to the caps. Buffers whose length
    /// no longer matches the key are dropped rather than pooled.
    pub fn release(&mut self, w: u32, h: u32, channels: u8, buf: Vec<u8>) {
        let key = BufferKey { w, h, channels };
        let bytes = key.byte_len();

        if buf.len() != bytes
            || self.opts.max_pool_bytes == 0
            || self.opts.max_buffers_per_bucket == 0
            || self.stats.retained_bytes.saturating_add(bytes) > self.opts.max_pool_bytes
        {
            self.stats.dropped_on_release = self.stats.dropped_on_release.saturating_add(1);
            return;
        }

        let bi = match self.bucket_idx_by_key.get(&key).copied() {
            Some(i) => i,
            None => {
                let i = self.buckets.len();
                self.buckets.push(Bucket {
                    buffers: Vec::new(),
                });
                self.bucket_idx_by_key.insert(key, i);
                i
            }
        };

        let bucket = &mut self.buckets[bi];
        if bucket.buffers.len() >= self.opts.max_buffers_per_bucket {
            self.stats.dropped_on_release = self.stats.dropped_on_release.saturating_add(1);
            return;
        }

        bucket.buffers.push(buf);
        self.stats.retained_buffers = self.stats.retained_buffers.saturating_add(1);
        self.stats.retained_bytes = self.stats.retained_bytes.saturating_add(bytes);
    }
}

impl Default for RasterBufferPool {
    fn default() -> Self {
        Self::new(PoolOpts::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/buffer_pool.rs"]
mod tests;
