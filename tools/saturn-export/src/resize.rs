//! Bitmap resizing
//!
//! Two modes: `Smooth` interpolates (delegated to the raster library) and
//! `Exact` picks nearest source pixels with half-pixel-center alignment,
//! which keeps hard pixel-art edges the way the target hardware shows
//! them. Both scale uniformly; the bounds describe a box to fit inside.

use std::borrow::Cow;

use saturn_common::TextureError;

use crate::bitmap::Bitmap;
use crate::generic;

/// Interpolation policy for [`resize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeMode {
    /// Bilinear interpolation; for previews and non-native output.
    Smooth,
    /// Nearest neighbor, no blending across source pixels.
    Exact,
}

/// Scale `bitmap` to fit within the given bounds, preserving aspect ratio.
///
/// With both bounds `None`, a computed scale of 1.0 or a degenerate scale
/// (<= 0), the input is returned as `Cow::Borrowed` without allocating.
/// When both bounds are set the smaller ratio wins so the result fits the
/// box. New dimensions truncate. `Smooth` output is always BGRA (it
/// round-trips through the raster library's RGBA surface); `Exact` keeps
/// the input format.
pub fn resize<'a>(
    bitmap: &'a Bitmap,
    max_width: Option<u32>,
    max_height: Option<u32>,
    mode: ResizeMode,
) -> Result<Cow<'a, Bitmap>, TextureError> {
    if bitmap.width() == 0 || bitmap.height() == 0 {
        return Ok(Cow::Borrowed(bitmap));
    }
    let scale = match (max_width, max_height) {
        (None, None) => return Ok(Cow::Borrowed(bitmap)),
        (Some(w), None) => w as f64 / bitmap.width() as f64,
        (None, Some(h)) => h as f64 / bitmap.height() as f64,
        (Some(w), Some(h)) => {
            let width_scale = w as f64 / bitmap.width() as f64;
            let height_scale = h as f64 / bitmap.height() as f64;
            width_scale.min(height_scale)
        }
    };
    if scale <= 0.0 || (scale - 1.0).abs() < f64::EPSILON {
        return Ok(Cow::Borrowed(bitmap));
    }

    let new_width = (bitmap.width() as f64 * scale) as u32;
    let new_height = (bitmap.height() as f64 * scale) as u32;
    if new_width == 0 || new_height == 0 {
        return Ok(Cow::Owned(Bitmap::new(new_width, new_height, bitmap.format())));
    }

    let resized = match mode {
        ResizeMode::Exact => resize_nearest(bitmap, new_width, new_height)?,
        ResizeMode::Smooth => generic::resample_triangle(bitmap, new_width, new_height)?,
    };
    Ok(Cow::Owned(resized))
}

/// Nearest-neighbor sampling at destination pixel centers:
/// `src = floor((dst + 0.5) * src_dim / dst_dim)`.
fn resize_nearest(
    bitmap: &Bitmap,
    new_width: u32,
    new_height: u32,
) -> Result<Bitmap, TextureError> {
    let out = Bitmap::new(new_width, new_height, bitmap.format());
    {
        let src = bitmap.lock()?;
        let mut dst = out.lock()?;
        let x_ratio = src.width() as f64 / new_width as f64;
        let y_ratio = src.height() as f64 / new_height as f64;
        for y in 0..new_height {
            let src_y = (((y as f64 + 0.5) * y_ratio) as u32).min(src.height() - 1);
            for x in 0..new_width {
                let src_x = (((x as f64 + 0.5) * x_ratio) as u32).min(src.width() - 1);
                dst.set(x, y, src.get(src_x, src_y)?)?;
            }
        }
    }
    Ok(out)
}
