//! In-memory Saturn texture
//!
//! A row-major (top-to-bottom) grid of packed 16-bit colors. Dimensions
//! are fixed at construction; zero-sized textures are legal.

use crate::color::SaturnColor;
use crate::error::TextureError;

/// Decoded Saturn texture holding pixels in the packed wire representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaturnTexture {
    width: u32,
    height: u32,
    pixels: Vec<SaturnColor>,
}

impl SaturnTexture {
    /// Transparent-filled texture.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![SaturnColor::TRANSPARENT; width as usize * height as usize],
        }
    }

    /// Build a texture from row-major pixels.
    ///
    /// # Panics
    /// Panics if `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<SaturnColor>) -> Self {
        assert_eq!(
            pixels.len(),
            width as usize * height as usize,
            "pixel count does not match dimensions"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major pixel slice (top-to-bottom).
    #[inline]
    pub fn pixels(&self) -> &[SaturnColor] {
        &self.pixels
    }

    pub fn get(&self, x: u32, y: u32) -> Result<SaturnColor, TextureError> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    pub fn set(&mut self, x: u32, y: u32, color: SaturnColor) -> Result<(), TextureError> {
        let i = self.index(x, y)?;
        self.pixels[i] = color;
        Ok(())
    }

    fn index(&self, x: u32, y: u32) -> Result<usize, TextureError> {
        if x >= self.width || y >= self.height {
            return Err(TextureError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width as usize + x as usize)
    }
}
