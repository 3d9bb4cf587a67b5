use anyhow::Context;

use crate::foundation::core::Raster;
use crate::foundation::error::{DriftError, DriftResult};

/// Decode encoded image bytes (PNG, etc.) into an RGBA8 [`Raster`].
///
/// The engine itself never does file or codec work; this adapter is the
/// narrow ingestion boundary for hosts that hold encoded bytes.
pub fn decode_raster(bytes: &[u8]) -> DriftResult<Raster> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Raster::from_vec(width, height, rgba.into_raw())
}

/// Convert an already-decoded [`image::RgbaImage`] into a [`Raster`].
pub fn raster_from_image(img: &image::RgbaImage) -> DriftResult<Raster> {
    Raster::from_vec(img.width(), img.height(), img.as_raw().clone())
}

/// Convert a [`Raster`] into an [`image::RgbaImage`] for re-encoding by the
/// host.
pub fn raster_to_image(raster: &Raster) -> DriftResult<image::RgbaImage> {
    image::RgbaImage::from_raw(raster.width(), raster.height(), raster.as_bytes().to_vec())
        .ok_or_else(|| DriftError::validation("raster dimensions do not match buffer length"))
}

#[cfg(test)]
#[path = "../../tests/unit/raster/convert.rs"]
mod tests;
