//! Texture conversion (PNG/JPEG/TGA/BMP/GIF/.bin ⇄ Saturn textures)
//!
//! File loading dispatches on extension: `.bin` decodes natively, TGA goes
//! to the raster library with an explicit format (TGA has no magic bytes)
//! and anything unrecognized falls back to content sniffing. Serializers
//! write the Saturn `.bin` container, 24-bit TGA and PNG.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use saturn_common::formats::{BIN_TEXTURE_EXT, bin, tga::TgaHeader};
use saturn_common::{Rgba8, SaturnColor, SaturnTexture, TextureError};

use crate::bitmap::{Bitmap, PixelFormat};
use crate::colorkey;
use crate::generic::{GenericCodec, ImageCodec, ImageKind};

/// File extensions the loader recognizes (lowercase, no dot).
pub const VALID_EXTENSIONS: [&str; 6] = ["jpg", "png", "tga", "bmp", "gif", "bin"];

/// Pack a bitmap into a Saturn texture.
///
/// Pixels that are not fully opaque take the key's color when an opaque
/// `key` is given; otherwise the decoded color is packed as-is, its
/// non-255 alpha mapping to the transparent state.
pub fn to_texture(
    bitmap: &Bitmap,
    key: Option<SaturnColor>,
) -> Result<SaturnTexture, TextureError> {
    let pixels = bitmap.lock()?;
    let mut texture = SaturnTexture::new(pixels.width(), pixels.height());
    for y in 0..pixels.height() {
        for x in 0..pixels.width() {
            let mut color = pixels.get(x, y)?;
            if let Some(key) = key {
                if color.a != 255 && key.is_opaque() {
                    color = key.to_rgba8();
                }
            }
            texture.set(x, y, SaturnColor::from_rgba8(color))?;
        }
    }
    Ok(texture)
}

/// Expand a texture into a BGRA bitmap.
///
/// Texels equal to `key` (word comparison) come out fully transparent;
/// everything else keeps its expanded color. The texture itself stores
/// literal decoded colors and is never rewritten.
pub fn to_bitmap(
    texture: &SaturnTexture,
    key: Option<SaturnColor>,
) -> Result<Bitmap, TextureError> {
    let bitmap = Bitmap::new(texture.width(), texture.height(), PixelFormat::Bgra8);
    {
        let mut pixels = bitmap.lock()?;
        for y in 0..texture.height() {
            for x in 0..texture.width() {
                let color = texture.get(x, y)?;
                let px = match key {
                    Some(key) if color == key => Rgba8::TRANSPARENT,
                    _ => color.to_rgba8(),
                };
                pixels.set(x, y, px)?;
            }
        }
    }
    Ok(bitmap)
}

/// Load any recognized image file as a BGRA bitmap.
///
/// `.bin` decodes natively in its headered form; the key is never applied
/// to native input. Other known extensions decode through the raster
/// library, after which an opaque `key` marks matching pixels transparent.
/// Unknown extensions go to content sniffing and may fail with
/// [`TextureError::UnsupportedFormat`].
pub fn load_bitmap_from_file(
    path: impl AsRef<Path>,
    key: Option<SaturnColor>,
) -> Result<Bitmap, TextureError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    if ext.eq_ignore_ascii_case(BIN_TEXTURE_EXT) {
        let texture = bin::decode_bin(&bytes)?;
        tracing::debug!(
            "Loaded native texture: {:?} ({}x{})",
            path,
            texture.width(),
            texture.height()
        );
        return to_bitmap(&texture, None);
    }

    let bitmap = ImageCodec.decode(&bytes, ImageKind::from_extension(ext))?;
    if let Some(key) = key {
        colorkey::apply_import_key(&bitmap, key.to_rgba8())?;
    }
    tracing::debug!(
        "Loaded image: {:?} ({}x{})",
        path,
        bitmap.width(),
        bitmap.height()
    );
    Ok(bitmap)
}

/// Load an image file and pack it into a Saturn texture.
///
/// The key applies at packing time (non-opaque pixels take the key's
/// color), matching the export convention, rather than rewriting the
/// intermediate bitmap.
pub fn load_texture_from_file(
    path: impl AsRef<Path>,
    key: Option<SaturnColor>,
) -> Result<SaturnTexture, TextureError> {
    let bitmap = load_bitmap_from_file(path.as_ref(), None)?;
    to_texture(&bitmap, key)
}

/// Write a texture to a `.bin` file.
pub fn save_bin(
    path: impl AsRef<Path>,
    texture: &SaturnTexture,
    with_header: bool,
) -> Result<(), TextureError> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    bin::encode_bin(&mut writer, texture, with_header)?;
    writer.flush()?;

    tracing::info!(
        "Wrote .bin texture: {}x{}, {} bytes",
        texture.width(),
        texture.height(),
        texture.pixels().len() * 2 + if with_header { 4 } else { 0 }
    );
    Ok(())
}

/// Write a bitmap as 24-bit uncompressed TGA (bottom-to-top rows, B/G/R).
///
/// Pixels that are not fully opaque are written as the key's expanded
/// color when an opaque `key` is given. The substitution happens in the
/// output stream only; the bitmap is not touched.
pub fn write_tga<W: Write>(
    writer: &mut W,
    bitmap: &Bitmap,
    key: Option<SaturnColor>,
) -> Result<(), TextureError> {
    let pixels = bitmap.lock()?;
    let header = TgaHeader::from_u32(pixels.width(), pixels.height());
    writer.write_all(&header.to_bytes())?;

    let substitute = key.filter(|k| k.is_opaque()).map(SaturnColor::to_rgba8);
    for y in (0..pixels.height()).rev() {
        for x in 0..pixels.width() {
            let mut px = pixels.get(x, y)?;
            if px.a != 255 {
                if let Some(sub) = substitute {
                    px = sub;
                }
            }
            writer.write_all(&[px.b, px.g, px.r])?;
        }
    }
    Ok(())
}

/// Write a texture as 24-bit TGA. Transparent texels keep their stored
/// channels unless an opaque `key` substitutes for them.
pub fn texture_to_tga<W: Write>(
    writer: &mut W,
    texture: &SaturnTexture,
    key: Option<SaturnColor>,
) -> Result<(), TextureError> {
    let bitmap = to_bitmap(texture, None)?;
    write_tga(writer, &bitmap, key)
}

/// Write a bitmap to a `.tga` file.
pub fn save_tga(
    path: impl AsRef<Path>,
    bitmap: &Bitmap,
    key: Option<SaturnColor>,
) -> Result<(), TextureError> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_tga(&mut writer, bitmap, key)?;
    writer.flush()?;

    tracing::info!("Wrote TGA: {}x{}", bitmap.width(), bitmap.height());
    Ok(())
}

/// Encode a bitmap as PNG into `writer`.
pub fn write_png<W: Write>(writer: &mut W, bitmap: &Bitmap) -> Result<(), TextureError> {
    let bytes = ImageCodec.encode_png(bitmap)?;
    writer.write_all(&bytes)?;
    Ok(())
}

/// Encode a texture as PNG (texels equal to `key` become transparent).
pub fn png_from_texture<W: Write>(
    writer: &mut W,
    texture: &SaturnTexture,
    key: Option<SaturnColor>,
) -> Result<(), TextureError> {
    let bitmap = to_bitmap(texture, key)?;
    write_png(writer, &bitmap)
}

/// Write a bitmap to a `.png` file.
pub fn save_png(path: impl AsRef<Path>, bitmap: &Bitmap) -> Result<(), TextureError> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_png(&mut writer, bitmap)?;
    writer.flush()?;

    tracing::info!("Wrote PNG: {}x{}", bitmap.width(), bitmap.height());
    Ok(())
}
