//! Raster resize and crop.
//!
//! Images are decoded with `image`, edited in memory, re-encoded as PNG and
//! written through [`asset_fs::io::write_bytes`].

use std::io::Cursor;
use std::path::PathBuf;

use asset_fs::{NormalizedPath, io};
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};

use crate::error::{Error, Result};

/// Share of the height removed by [`crop_bottom`] when none is given.
pub const DEFAULT_CROP_FRACTION: f64 = 0.15;

/// Dimensions of an image after an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReport {
    pub source: NormalizedPath,
    pub destination: NormalizedPath,
    pub width: u32,
    pub height: u32,
}

fn load(path: &NormalizedPath) -> Result<DynamicImage> {
    let bytes = io::read_bytes(path)?;
    image::load_from_memory(&bytes).map_err(|e| Error::image(path.to_native(), e))
}

fn encode_png(img: &DynamicImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)
        .map_err(|e| Error::image(PathBuf::from("<memory>"), e))?;
    Ok(buf.into_inner())
}

fn resized(path: &NormalizedPath, width: u32, height: u32) -> Result<DynamicImage> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }
    let img = load(path)?;
    tracing::debug!(
        path = %path,
        from_width = img.width(),
        from_height = img.height(),
        width,
        height,
        "Resizing"
    );
    Ok(img.resize_exact(width, height, FilterType::Lanczos3))
}

/// Resize the image at `source` to exactly `width` x `height` (Lanczos3)
/// and write it as PNG to `destination`.
pub fn resize(
    source: &NormalizedPath,
    destination: &NormalizedPath,
    width: u32,
    height: u32,
) -> Result<ImageReport> {
    let img = resized(source, width, height)?;
    io::write_bytes(destination, &encode_png(&img)?)?;
    tracing::info!(path = %destination, width, height, "Wrote resized image");

    Ok(ImageReport {
        source: source.clone(),
        destination: destination.clone(),
        width,
        height,
    })
}

/// Resize the image at `source` and return the PNG bytes without writing.
pub fn resize_to_png_bytes(source: &NormalizedPath, width: u32, height: u32) -> Result<Vec<u8>> {
    encode_png(&resized(source, width, height)?)
}

/// Remove the bottom `fraction` of the image height.
///
/// The kept height is `floor(height * (1 - fraction))`. Writes to
/// `destination`, or back over `source` when none is given.
///
/// # Errors
/// `Error::InvalidCropFraction` unless `0 <= fraction < 1`;
/// `Error::InvalidDimensions` if nothing would be left.
pub fn crop_bottom(
    source: &NormalizedPath,
    destination: Option<&NormalizedPath>,
    fraction: f64,
) -> Result<ImageReport> {
    if !(0.0..1.0).contains(&fraction) {
        return Err(Error::InvalidCropFraction { fraction });
    }

    let img = load(source)?;
    let width = img.width();
    let height = (f64::from(img.height()) * (1.0 - fraction)) as u32;
    if height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }

    let cropped = img.crop_imm(0, 0, width, height);
    let destination = destination.cloned().unwrap_or_else(|| source.clone());
    io::write_bytes(&destination, &encode_png(&cropped)?)?;
    tracing::info!(path = %destination, width, height, "Wrote cropped image");

    Ok(ImageReport {
        source: source.clone(),
        destination,
        width,
        height,
    })
}
