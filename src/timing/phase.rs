use std::f64::consts::TAU;

use crate::foundation::error::{DriftError, DriftResult};

/// Loop-safe normalized time for one frame of a perfect-loop animation.
///
/// Derived once per `invoke` from `(frame_number mod total_frames) /
/// total_frames`, so `t` stays in `[0, 1)` even when a caller passes a frame
/// number past the end of the loop, and frame `N` lands exactly on frame `0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimePhase {
    /// Normalized loop time in `[0, 1)`.
    pub t: f64,
    /// Frame number folded into the loop (`frame_number mod total_frames`).
    pub frame: u64,
    /// Total frames in the loop; always > 0.
    pub total_frames: u64,
}

impl TimePhase {
    /// Phase in `[0, 2π)` for a parameter expressed as cycles per loop.
    ///
    /// The cycle count is rounded through [`round_to_cycle`] before the
    /// multiply. Raw fractional cycle counts would leave frame 0 and frame N
    /// at different phases and break the loop, so every cyclic parameter in
    /// the engine must route through here.
    pub fn cycle_phase(self, cycles: f64) -> f64 {
        let k = round_to_cycle(cycles);
        (TAU * f64::from(k) * self.t) % TAU
    }
}

/// Stateless converter from frame counters to [`TimePhase`].
pub struct PhaseClock;

impl PhaseClock {
    /// Compute the loop phase for one frame.
    ///
    /// `total_frames == 0` is an [`DriftError::InvalidDuration`] error.
    pub fn compute(frame_number: u64, total_frames: u64) -> DriftResult<TimePhase> {
        if total_frames == 0 {
            return Err(DriftError::duration("total_frames must be > 0"));
        }
        let frame = frame_number % total_frames;
        Ok(TimePhase {
            t: (frame as f64) / (total_frames as f64),
            frame,
            total_frames,
        })
    }
}

/// Round a configured "cycles per loop" value to the nearest integer >= 1.
///
/// Non-finite input rounds to 1 and negative values use their magnitude.
pub fn round_to_cycle(value: f64) -> u32 {
    if !value.is_finite() {
        return 1;
    }
    let r = value.abs().round();
    if r < 1.0 {
        1
    } else if r >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        r as u32
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timing/phase.rs"]
mod tests;
