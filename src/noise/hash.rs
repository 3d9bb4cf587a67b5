/// Deterministic seeded noise field, queried by coordinate and channel.
///
/// There is no internal state and no float math on the seed path: the two
/// outputs come from integer bit mixing with explicit wraparound, so results
/// are bit-identical across platforms and safe to query from any number of
/// threads. Identical inputs always yield identical outputs, which is what
/// the perfect-loop and reproducible-render guarantees rest on.
pub struct NoiseSource;

impl NoiseSource {
    /// Sample the field at an integer coordinate for one channel.
    ///
    /// Returns two independent values in `[-1, 1]`, each derived from a
    /// 31-bit hash.
    pub fn sample(x: i64, y: i64, channel: i32, seed: i64) -> (f64, f64) {
        let lane = i64::from(channel).wrapping_add(seed);
        let a = mix31(x, y, lane);
        let b = mix31(x, y, lane.wrapping_add(0x9E37_79B9));
        (normalize31(a), normalize31(b))
    }
}

/// 64-bit multiply/xor-shift mix folded down to 31 bits.
fn mix31(x: i64, y: i64, lane: i64) -> u32 {
    let mut h = (x as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ (y as u64).wrapping_mul(0xC2B2_AE3D_27D4_EB4F)
        ^ (lane as u64).wrapping_mul(0x1656_67B1_9E37_79F9);
    h ^= h >> 33;
    h = h.wrapping_mul(0xFF51_AFD7_ED55_8CCD);
    h ^= h >> 33;
    h = h.wrapping_mul(0xC4CE_B9FE_1A85_EC53);
    h ^= h >> 33;
    (h & 0x7FFF_FFFF) as u32
}

fn normalize31(v: u32) -> f64 {
    (f64::from(v) / f64::from(0x7FFF_FFFFu32)) * 2.0 - 1.0
}

#[cfg(test)]
#[path = "../../tests/unit/noise/hash.rs"]
mod tests;
