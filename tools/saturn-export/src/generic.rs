//! Generic raster codec seam
//!
//! Everything the pipeline does with consumer image formats (PNG, JPEG,
//! GIF, BMP, TGA) goes through [`GenericCodec`], so the rest of the crate
//! never sees the backing library's types. [`ImageCodec`] is the `image`
//! crate implementation.

use saturn_common::{Rgba8, TextureError};

use crate::bitmap::{Bitmap, PixelFormat};

/// Raster formats the dispatch table recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
    Gif,
    Bmp,
    Tga,
}

impl ImageKind {
    /// Map a file extension (no dot, any case) to a kind.
    pub fn from_extension(ext: &str) -> Option<Self> {
        if ext.eq_ignore_ascii_case("png") {
            Some(ImageKind::Png)
        } else if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") {
            Some(ImageKind::Jpeg)
        } else if ext.eq_ignore_ascii_case("gif") {
            Some(ImageKind::Gif)
        } else if ext.eq_ignore_ascii_case("bmp") {
            Some(ImageKind::Bmp)
        } else if ext.eq_ignore_ascii_case("tga") {
            Some(ImageKind::Tga)
        } else {
            None
        }
    }
}

/// Decode/encode capability required from the external raster library.
pub trait GenericCodec {
    /// Decode `bytes` into a BGRA bitmap. With `kind: None` the format is
    /// sniffed from content, which cannot work for TGA (no magic bytes) -
    /// pass `Some(ImageKind::Tga)` for TGA input.
    fn decode(&self, bytes: &[u8], kind: Option<ImageKind>) -> Result<Bitmap, TextureError>;

    /// Encode a bitmap as PNG.
    fn encode_png(&self, bitmap: &Bitmap) -> Result<Vec<u8>, TextureError>;
}

/// [`GenericCodec`] backed by the `image` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageCodec;

impl ImageCodec {
    fn image_format(kind: ImageKind) -> image::ImageFormat {
        match kind {
            ImageKind::Png => image::ImageFormat::Png,
            ImageKind::Jpeg => image::ImageFormat::Jpeg,
            ImageKind::Gif => image::ImageFormat::Gif,
            ImageKind::Bmp => image::ImageFormat::Bmp,
            ImageKind::Tga => image::ImageFormat::Tga,
        }
    }
}

impl GenericCodec for ImageCodec {
    fn decode(&self, bytes: &[u8], kind: Option<ImageKind>) -> Result<Bitmap, TextureError> {
        let decoded = match kind {
            Some(kind) => image::load_from_memory_with_format(bytes, Self::image_format(kind)),
            None => image::load_from_memory(bytes),
        }
        .map_err(map_image_error)?;
        rgba_to_bitmap(&decoded.to_rgba8())
    }

    fn encode_png(&self, bitmap: &Bitmap) -> Result<Vec<u8>, TextureError> {
        let rgba = bitmap_to_rgba(bitmap)?;
        let mut out = std::io::Cursor::new(Vec::new());
        rgba.write_to(&mut out, image::ImageFormat::Png)
            .map_err(map_image_error)?;
        Ok(out.into_inner())
    }
}

pub(crate) fn rgba_to_bitmap(rgba: &image::RgbaImage) -> Result<Bitmap, TextureError> {
    let bitmap = Bitmap::new(rgba.width(), rgba.height(), PixelFormat::Bgra8);
    {
        let mut pixels = bitmap.lock()?;
        for (x, y, px) in rgba.enumerate_pixels() {
            pixels.set(x, y, Rgba8::new(px[0], px[1], px[2], px[3]))?;
        }
    }
    Ok(bitmap)
}

pub(crate) fn bitmap_to_rgba(bitmap: &Bitmap) -> Result<image::RgbaImage, TextureError> {
    let pixels = bitmap.lock()?;
    let mut rgba = image::RgbaImage::new(pixels.width(), pixels.height());
    for y in 0..pixels.height() {
        for x in 0..pixels.width() {
            let px = pixels.get(x, y)?;
            rgba.put_pixel(x, y, image::Rgba([px.r, px.g, px.b, px.a]));
        }
    }
    Ok(rgba)
}

/// Interpolating resample on the backing library's RGBA surface. Output is
/// always a BGRA bitmap.
pub(crate) fn resample_triangle(
    bitmap: &Bitmap,
    new_width: u32,
    new_height: u32,
) -> Result<Bitmap, TextureError> {
    let rgba = bitmap_to_rgba(bitmap)?;
    let resized = image::imageops::resize(
        &rgba,
        new_width,
        new_height,
        image::imageops::FilterType::Triangle,
    );
    rgba_to_bitmap(&resized)
}

fn map_image_error(err: image::ImageError) -> TextureError {
    match err {
        image::ImageError::IoError(io) => TextureError::Io(io),
        other => TextureError::UnsupportedFormat(other.to_string()),
    }
}
