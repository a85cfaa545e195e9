//! 24-bit TGA writer header
//!
//! Fixed-shape header for the uncompressed true-color TGA files the
//! exporter emits (type 2, 24 bpp, bottom-to-top rows, B/G/R byte order).
//! Reading arbitrary TGA files is delegated to the generic raster codec;
//! this struct only describes the files we write.
//!
//! # Layout
//! ```text
//! 0x00: id length       u8 = 0
//! 0x01: color map type  u8 = 0
//! 0x02: image type      u8 = 2 (uncompressed true-color)
//! 0x03: color map spec  [u8; 5] = 0
//! 0x08: x origin        u16 LE = 0
//! 0x0A: y origin        u16 LE = 0
//! 0x0C: width           u16 LE
//! 0x0E: height          u16 LE
//! 0x10: bits per pixel  u8 = 24
//! 0x11: descriptor      u8 = 0 (bottom-to-top row order)
//! ```

const IMAGE_TYPE_TRUE_COLOR: u8 = 2;
const BITS_PER_PIXEL: u8 = 24;

/// TGA file header (18 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TgaHeader {
    pub width: u16,
    pub height: u16,
}

impl TgaHeader {
    pub const SIZE: usize = 18;

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

    /// Pixel payload size in bytes (3 bytes per pixel)
    pub fn pixel_size(&self) -> usize {
        self.width as usize * self.height as usize * 3
    }

    /// Write header to bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[2] = IMAGE_TYPE_TRUE_COLOR;
        bytes[12..14].copy_from_slice(&self.width.to_le_bytes());
        bytes[14..16].copy_from_slice(&self.height.to_le_bytes());
        bytes[16] = BITS_PER_PIXEL;
        bytes
    }

    /// Read back a header in exactly the shape `to_bytes` emits. Returns
    /// `None` for anything else, other TGA variants included.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        if bytes[2] != IMAGE_TYPE_TRUE_COLOR || bytes[16] != BITS_PER_PIXEL {
            return None;
        }
        Some(Self {
            width: u16::from_le_bytes([bytes[12], bytes[13]]),
            height: u16::from_le_bytes([bytes[14], bytes[15]]),
        })
    }
}
