//! Raw Saturn texture container (.bin)
//!
//! The native interchange format: an optional 4-byte header followed by
//! width × height packed color words. POD format - no magic bytes, no
//! checksum, no trailing metadata.
//!
//! # Layout
//! ```text
//! 0x00: width u16 LE    (header, optional)
//! 0x02: height u16 LE
//! then: width × height color words, u16 LE, row-major top-to-bottom
//! ```
//!
//! Headerless payloads carry bare pixel words; the caller must supply
//! dimensions to decode them.

use std::io::Write;

use crate::color::SaturnColor;
use crate::error::TextureError;
use crate::texture::SaturnTexture;

/// Raw texture header (4 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinHeader {
    pub width: u16,
    pub height: u16,
}

impl BinHeader {
    pub const SIZE: usize = 4;

    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Create header from u32 dimensions (truncates to u16)
    pub fn from_u32(width: u32, height: u32) -> Self {
        Self {
            width: width as u16,
            height: height as u16,
        }
    }

    /// Pixel payload size in bytes (2 bytes per pixel)
    pub fn pixel_size(&self) -> usize {
        self.width as usize * self.height as usize * 2
    }

    /// Write header to bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..2].copy_from_slice(&self.width.to_le_bytes());
        bytes[2..4].copy_from_slice(&self.height.to_le_bytes());
        bytes
    }

    /// Read header from bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        Some(Self {
            width: u16::from_le_bytes([bytes[0], bytes[1]]),
            height: u16::from_le_bytes([bytes[2], bytes[3]]),
        })
    }
}

/// Serialize a texture: optional header, then every pixel word
/// little-endian, row-major top-to-bottom. Byte-for-byte deterministic.
pub fn encode_bin<W: Write>(
    writer: &mut W,
    texture: &SaturnTexture,
    with_header: bool,
) -> Result<(), TextureError> {
    if with_header {
        let header = BinHeader::from_u32(texture.width(), texture.height());
        writer.write_all(&header.to_bytes())?;
    }
    for color in texture.pixels() {
        writer.write_all(&color.to_word().to_le_bytes())?;
    }
    Ok(())
}

/// Decode a texture from a headered `.bin` payload. Trailing bytes past
/// the pixel data are ignored.
pub fn decode_bin(bytes: &[u8]) -> Result<SaturnTexture, TextureError> {
    let header = BinHeader::from_bytes(bytes).ok_or(TextureError::TruncatedInput {
        expected: BinHeader::SIZE,
        actual: bytes.len(),
    })?;
    let required = BinHeader::SIZE + header.pixel_size();
    if bytes.len() < required {
        return Err(TextureError::TruncatedInput {
            expected: required,
            actual: bytes.len(),
        });
    }
    Ok(decode_pixels(
        &bytes[BinHeader::SIZE..required],
        header.width as u32,
        header.height as u32,
    ))
}

/// Decode a headerless pixel payload with caller-supplied dimensions.
pub fn decode_bin_raw(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> Result<SaturnTexture, TextureError> {
    let required = width as usize * height as usize * 2;
    if bytes.len() < required {
        return Err(TextureError::TruncatedInput {
            expected: required,
            actual: bytes.len(),
        });
    }
    Ok(decode_pixels(&bytes[..required], width, height))
}

fn decode_pixels(bytes: &[u8], width: u32, height: u32) -> SaturnTexture {
    let pixels = bytes
        .chunks_exact(2)
        .map(|pair| SaturnColor::from_word(u16::from_le_bytes([pair[0], pair[1]])))
        .collect();
    SaturnTexture::from_pixels(width, height, pixels)
}
