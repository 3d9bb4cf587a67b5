use super::*;

#[test]
fn pool_honors_bucket_cap() {
    let mut p = RasterBufferPool::new(PoolOpts {
        max_pool_bytes: 1 << 30,
        max_buffers_per_bucket: 1,
    });

    let a = p.acquire(8, 8, 4);
    let b = p.acquire(8, 8, 4);
    p.release(8, 8, 4, a);
    p.release(8, 8, 4, b);

    let st = p.stats();
    assert_eq!(st.retained_buffers, 1);
    assert_eq!(st.dropped_on_release, 1);
}

#[test]
fn pool_honors_global_byte_cap() {
    let bytes_8x8 = 8 * 8 * 4;
    let mut p = RasterBufferPool::new(PoolOpts {
        max_pool_bytes: bytes_8x8,
        max_buffers_per_bucket: 8,
    });

    let a = p.acquire(8, 8, 4);
    let b = p.acquire(8, 8, 4);
    p.release(8, 8, 4, a);
    p.release(8, 8, 4, b);

    let st = p.stats();
    assert_eq!(st.retained_bytes, bytes_8x8);
    assert_eq!(st.retained_buffers, 1);
    assert!(st.dropped_on_release >= 1);
}

#[test]
fn acquire_reuses_released_buffers_without_clearing() {
    let mut p = RasterBufferPool::new(PoolOpts::default());
    let mut a = p.acquire(4, 4, 4);
    a.fill(0xAB);
    p.release(4, 4, 4, a);

    let b = p.acquire(4, 4, 4);
    // Pooled buffers come back dirty; callers must fill(0) themselves.
    assert!(b.iter().all(|&v| v == 0xAB));
    assert_eq!(p.stats().alloc_buffers, 1);
}

#[test]
fn mismatched_release_is_dropped() {
    let mut p = RasterBufferPool::new(PoolOpts::default());
    p.release(4, 4, 4, vec![0; 3]); // wrong length for the key
    let st = p.stats();
    assert_eq!(st.retained_buffers, 0);
    assert_eq!(st.dropped_on_release, 1);
}

#[test]
fn distinct_keys_use_distinct_buckets() {
    let mut p = RasterBufferPool::new(PoolOpts::default());
    let a = p.acquire(4, 4, 4);
    let b = p.acquire(8, 2, 4);
    p.release(4, 4, 4, a);
    p.release(8, 2, 4, b);
    assert_eq!(p.stats().retained_buffers, 2);

    let again = p.acquire(4, 4, 4);
    assert_eq!(again.len(), 4 * 4 * 4);
    assert_eq!(p.stats().retained_buffers, 1);
}
