use crate::foundation::core::Rgba8;
use crate::foundation::math::mul_div255_u8;

/// Channel-wise blend function applied between the source pixel and the
/// displaced sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BlendMode {
    /// Paint the overlay unless it is zero.
    ///
    /// This is deliberately not conventional alpha-over: the behavior is
    /// `overlay if overlay > 0 else base`, preserved exactly because presets
    /// depend on it.
    Normal,
    /// `255 - (255-base)(255-overlay)/255`.
    Screen,
    /// Saturating add.
    Additive,
    /// Piecewise multiply/screen split at `base < 128`.
    Overlay,
}

impl BlendMode {
    /// Parse a configuration string, falling back to `Screen` with a warning.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Self::Normal,
            "screen" => Self::Screen,
            "additive" | "add" => Self::Additive,
            "overlay" => Self::Overlay,
            other => {
                tracing::warn!(blend = other, "unknown blend mode, using screen");
                Self::Screen
            }
        }
    }
}

impl Default for BlendMode {
    fn default() -> Self {
        Self::Screen
    }
}

/// How the destination alpha is chosen when channels were displaced
/// independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AlphaPolicy {
    /// Copy the source pixel's alpha unchanged.
    PreserveSource,
    /// Take the max alpha among the per-channel samples, for chromatic
    /// effects where each channel may have sampled a different source alpha.
    MaxOfChannels,
}

impl AlphaPolicy {
    /// Parse a configuration string, falling back to `PreserveSource` with a
    /// warning.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "preserve_source" | "preservesource" | "preserve" => Self::PreserveSource,
            "max_of_channels" | "maxofchannels" | "max" => Self::MaxOfChannels,
            other => {
                tracing::warn!(alpha = other, "unknown alpha policy, using preserve_source");
                Self::PreserveSource
            }
        }
    }
}

impl Default for AlphaPolicy {
    fn default() -> Self {
        Self::PreserveSource
    }
}

/// Blend one channel value. All intermediate math stays in integer space and
/// lands back in `[0, 255]`.
pub fn blend(base: u8, overlay: u8, mode: BlendMode) -> u8 {
    match mode {
        BlendMode::Normal => {
            if overlay > 0 {
                overlay
            } else {
                base
            }
        }
        BlendMode::Screen => {
            255 - mul_div255_u8(u16::from(255 - base), u16::from(255 - overlay))
        }
        BlendMode::Additive => base.saturating_add(overlay),
        BlendMode::Overlay => {
            if base < 128 {
                mul_div255_u8(2 * u16::from(base), u16::from(overlay))
            } else {
                255 - mul_div255_u8(2 * u16::from(255 - base), u16::from(255 - overlay))
            }
        }
    }
}

/// Merge the three displaced channel samples against the base pixel and
/// resolve the destination alpha.
pub fn composite_channels(
    samples: [u8; 3],
    base: Rgba8,
    sampled_alpha: [u8; 3],
    mode: BlendMode,
    alpha: AlphaPolicy,
) -> Rgba8 {
    let a = match alpha {
        AlphaPolicy::PreserveSource => base[3],
        AlphaPolicy::MaxOfChannels => sampled_alpha
            .iter()
            .copied()
            .max()
            .unwrap_or(base[3]),
    };
    [
        blend(base[0], samples[0], mode),
        blend(base[1], samples[1], mode),
        blend(base[2], samples[2], mode),
        a,
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/effects/blend.rs"]
mod tests;
