//! Saturn packed 16-bit color
//!
//! VDP color words are 15-bit RGB plus an MSB flag:
//!
//! ```text
//! bit 15     : RGB flag - set for an opaque color, clear for transparent
//! bits 14-10 : blue  (5 bits)
//! bits 9-5   : green (5 bits)
//! bits 4-0   : red   (5 bits)
//! ```
//!
//! Conversion from 8-bit RGBA truncates each channel to its top 5 bits and
//! folds alpha into the flag (only `a == 255` is opaque; the hardware has
//! no partial translucency at this level). The packed word itself
//! round-trips exactly for every 16-bit value, transparent words included.

/// 8-bit RGBA color used on the bitmap side of conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Color with alpha 255.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }
}

/// MSB flag marking a word as an opaque RGB color.
const RGB_FLAG: u16 = 0x8000;
/// 5-bit channel mask.
const CHANNEL_MASK: u16 = 0x1F;

/// Saturn packed 16-bit color word.
///
/// Wraps the literal on-disk/VRAM value; `0x0000` is the canonical
/// transparent word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SaturnColor(u16);

impl SaturnColor {
    /// The canonical transparent word.
    pub const TRANSPARENT: Self = Self(0x0000);

    /// Opaque color from 5-bit channels (values above 31 are masked).
    pub fn new(r5: u8, g5: u8, b5: u8) -> Self {
        let r = r5 as u16 & CHANNEL_MASK;
        let g = g5 as u16 & CHANNEL_MASK;
        let b = b5 as u16 & CHANNEL_MASK;
        Self(RGB_FLAG | (b << 10) | (g << 5) | r)
    }

    /// Wrap a raw packed word. Total: every 16-bit value is a valid color.
    #[inline]
    pub fn from_word(word: u16) -> Self {
        Self(word)
    }

    /// The literal packed word, exactly as stored on disk.
    #[inline]
    pub fn to_word(self) -> u16 {
        self.0
    }

    /// Quantize an 8-bit RGBA color. Channels truncate to their top 5 bits
    /// and the RGB flag is set only for fully opaque input. Channel bits
    /// are kept even for transparent input so the word stays invertible.
    pub fn from_rgba8(color: Rgba8) -> Self {
        let r = (color.r >> 3) as u16;
        let g = (color.g >> 3) as u16;
        let b = (color.b >> 3) as u16;
        let flag = if color.a == 255 { RGB_FLAG } else { 0 };
        Self(flag | (b << 10) | (g << 5) | r)
    }

    /// Expand to 8-bit RGBA: `c8 = c5 * 255 / 31` per channel, alpha 255
    /// for opaque words and 0 otherwise. Channels survive expansion even
    /// for transparent words.
    pub fn to_rgba8(self) -> Rgba8 {
        Rgba8 {
            r: expand5(self.r5()),
            g: expand5(self.g5()),
            b: expand5(self.b5()),
            a: if self.is_opaque() { 255 } else { 0 },
        }
    }

    #[inline]
    pub fn r5(self) -> u8 {
        (self.0 & CHANNEL_MASK) as u8
    }

    #[inline]
    pub fn g5(self) -> u8 {
        ((self.0 >> 5) & CHANNEL_MASK) as u8
    }

    #[inline]
    pub fn b5(self) -> u8 {
        ((self.0 >> 10) & CHANNEL_MASK) as u8
    }

    /// True when the RGB flag (bit 15) is set.
    #[inline]
    pub fn is_opaque(self) -> bool {
        self.0 & RGB_FLAG != 0
    }

    #[inline]
    pub fn is_transparent(self) -> bool {
        !self.is_opaque()
    }
}

/// Expand a 5-bit channel to 8 bits (exact at 0 and 31).
#[inline]
fn expand5(c5: u8) -> u8 {
    (c5 as u16 * 255 / 31) as u8
}
