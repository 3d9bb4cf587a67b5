use crate::foundation::error::{DriftError, DriftResult};

pub use kurbo::{Point, Vec2};

/// Channels per pixel. Rasters are always interleaved RGBA8.
pub const CHANNELS: usize = 4;

/// One RGBA8 pixel value.
pub type Rgba8 = [u8; 4];

/// Flat RGBA8 raster, row-major, 4 bytes per pixel.
///
/// Invariant: `data.len() == width * height * 4`, enforced by every
/// constructor. The buffer is owned exclusively; stages hand rasters over by
/// value rather than aliasing each other's memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Raster {
    /// Allocate a zero-filled raster. Zero-area canvases are rejected.
    pub fn new(width: u32, height: u32) -> DriftResult<Self> {
        let len = byte_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Wrap an existing RGBA8 buffer, validating its length.
    pub fn from_vec(width: u32, height: u32, data: Vec<u8>) -> DriftResult<Self> {
        let len = byte_len(width, height)?;
        if data.len() != len {
            return Err(DriftError::validation(format!(
                "raster buffer length mismatch: expected {len} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Raster width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Raster height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total buffer length in bytes (`width * height * 4`).
    pub fn len_bytes(&self) -> usize {
        self.data.len()
    }

    /// Read one pixel. `x` and `y` must be in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        let i = self.index(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Write one pixel. `x` and `y` must be in bounds.
    pub fn put_pixel(&mut self, x: u32, y: u32, px: Rgba8) {
        let i = self.index(x, y);
        self.data[i..i + CHANNELS].copy_from_slice(&px);
    }

    /// Read a single channel of one pixel. Out-of-range channel indices are a
    /// programming error and panic.
    pub fn channel_at(&self, x: u32, y: u32, channel: usize) -> u8 {
        assert!(channel < CHANNELS, "channel index out of range: {channel}");
        self.data[self.index(x, y) + channel]
    }

    /// Borrow the raw interleaved buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutably borrow the raw interleaved buffer.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the raster and return its buffer.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        ((y as usize) * (self.width as usize) + (x as usize)) * CHANNELS
    }
}

fn byte_len(width: u32, height: u32) -> DriftResult<usize> {
    if width == 0 || height == 0 {
        return Err(DriftError::geometry(format!(
            "canvas must have non-zero area, got {width}x{height}"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|px| px.checked_mul(CHANNELS))
        .ok_or_else(|| DriftError::validation("raster byte length overflow"))
}
