//! Color-key transparency
//!
//! The key contract is asymmetric. Importing rewrites matching pixels to
//! alpha 0 in place, keeping their color channels. Exporting substitutes
//! the key into the serialized stream only and never touches the source;
//! that half lives at the serialization call sites in [`crate::texture`].

use saturn_common::{Rgba8, SaturnColor, TextureError};

use crate::bitmap::Bitmap;

/// Mark every pixel exactly equal to `key` transparent, in place.
///
/// Only fully opaque keys select anything; with `key.a != 255` this is a
/// no-op. Matching pixels get alpha 0 and keep their color channels.
pub fn apply_import_key(bitmap: &Bitmap, key: Rgba8) -> Result<(), TextureError> {
    if !key.is_opaque() {
        return Ok(());
    }
    let mut pixels = bitmap.lock()?;
    for y in 0..pixels.height() {
        for x in 0..pixels.width() {
            let px = pixels.get(x, y)?;
            if px == key {
                pixels.set(x, y, Rgba8::new(px.r, px.g, px.b, 0))?;
            }
        }
    }
    Ok(())
}

/// Replace every pixel exactly equal to `from` with `to`, in place.
pub fn replace_color(bitmap: &Bitmap, from: Rgba8, to: Rgba8) -> Result<(), TextureError> {
    let mut pixels = bitmap.lock()?;
    for y in 0..pixels.height() {
        for x in 0..pixels.width() {
            if pixels.get(x, y)? == from {
                pixels.set(x, y, to)?;
            }
        }
    }
    Ok(())
}

/// True when every pixel either has alpha 0 or packs to `key`'s word.
///
/// Pre-export check; nothing calls it automatically.
pub fn is_fully_transparent(bitmap: &Bitmap, key: SaturnColor) -> Result<bool, TextureError> {
    let pixels = bitmap.lock()?;
    for y in 0..pixels.height() {
        for x in 0..pixels.width() {
            let px = pixels.get(x, y)?;
            if px.a != 0 && SaturnColor::from_rgba8(px) != key {
                return Ok(false);
            }
        }
    }
    Ok(true)
}

/// True when any pixel equals `color` exactly, all four channels included.
pub fn contains_color(bitmap: &Bitmap, color: Rgba8) -> Result<bool, TextureError> {
    let pixels = bitmap.lock()?;
    for y in 0..pixels.height() {
        for x in 0..pixels.width() {
            if pixels.get(x, y)? == color {
                return Ok(true);
            }
        }
    }
    Ok(false)
}
