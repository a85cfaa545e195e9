//! Bitmap storage and the locked pixel view
//!
//! [`Bitmap`] owns decoded 8-bit pixel data laid out in rows of `stride`
//! bytes. All pixel access goes through a [`PixelBuffer`] obtained from
//! [`Bitmap::lock`]: an exclusive, bounds-checked view that releases the
//! bitmap when dropped. Byte order within a pixel is B, G, R, A for
//! 4-byte formats and B, G, R for 3-byte ones.

use std::cell::{RefCell, RefMut};

use saturn_common::{Rgba8, TextureError};

/// Pixel memory layout of a [`Bitmap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// 4 bytes per pixel: blue, green, red, alpha.
    Bgra8,
    /// 3 bytes per pixel: blue, green, red. Reads back fully opaque.
    Bgr8,
}

impl PixelFormat {
    #[inline]
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Bgra8 => 4,
            PixelFormat::Bgr8 => 3,
        }
    }
}

/// Row stride aligned up to a 4-byte boundary.
#[inline]
fn aligned_stride(width: u32, bytes_per_pixel: usize) -> usize {
    (width as usize * bytes_per_pixel + 3) & !3
}

/// Owned pixel storage with stride-aware rows.
///
/// The payload sits behind a runtime lock: call [`lock`](Bitmap::lock) for
/// the read/write view. A second lock while one is live fails with
/// [`TextureError::Lock`] rather than blocking.
#[derive(Debug, Clone)]
pub struct Bitmap {
    width: u32,
    height: u32,
    stride: usize,
    format: PixelFormat,
    data: RefCell<Vec<u8>>,
}

impl Bitmap {
    /// Allocate a zero-filled bitmap. Rows are padded to a 4-byte boundary.
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Self {
        let stride = aligned_stride(width, format.bytes_per_pixel());
        Self {
            width,
            height,
            stride,
            format,
            data: RefCell::new(vec![0; stride * height as usize]),
        }
    }

    /// Wrap existing pixel data with an explicit stride.
    ///
    /// Fails with [`TextureError::TruncatedInput`] when `data` holds fewer
    /// than `stride * height` bytes.
    ///
    /// # Panics
    /// Panics if `stride` cannot hold a full row of pixels.
    pub fn from_vec(
        data: Vec<u8>,
        width: u32,
        height: u32,
        stride: usize,
        format: PixelFormat,
    ) -> Result<Self, TextureError> {
        assert!(
            stride >= width as usize * format.bytes_per_pixel(),
            "stride too small for row"
        );
        let required = stride * height as usize;
        if data.len() < required {
            return Err(TextureError::TruncatedInput {
                expected: required,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            stride,
            format,
            data: RefCell::new(data),
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Acquire the exclusive pixel view.
    pub fn lock(&self) -> Result<PixelBuffer<'_>, TextureError> {
        let data = self
            .data
            .try_borrow_mut()
            .map_err(|_| TextureError::Lock)?;
        Ok(PixelBuffer {
            data,
            width: self.width,
            height: self.height,
            stride: self.stride,
            format: self.format,
        })
    }

    /// Consume the bitmap and return its raw bytes (stride layout).
    pub fn into_vec(self) -> Vec<u8> {
        self.data.into_inner()
    }

    /// Copy out a sub-rectangle.
    pub fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> Result<Bitmap, TextureError> {
        let inside = x.checked_add(width).is_some_and(|r| r <= self.width)
            && y.checked_add(height).is_some_and(|b| b <= self.height);
        if !inside {
            return Err(TextureError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        let out = Bitmap::new(width, height, self.format);
        {
            let src = self.lock()?;
            let mut dst = out.lock()?;
            for dy in 0..height {
                for dx in 0..width {
                    dst.set(dx, dy, src.get(x + dx, y + dy)?)?;
                }
            }
        }
        Ok(out)
    }

    /// New bitmap with R, G and B scaled by `factor`, clamped to 0..=255.
    /// Alpha is untouched.
    pub fn adjust_brightness(&self, factor: f32) -> Result<Bitmap, TextureError> {
        let out = Bitmap::new(self.width, self.height, self.format);
        {
            let src = self.lock()?;
            let mut dst = out.lock()?;
            for y in 0..self.height {
                for x in 0..self.width {
                    let px = src.get(x, y)?;
                    dst.set(
                        x,
                        y,
                        Rgba8::new(
                            scale_channel(px.r, factor),
                            scale_channel(px.g, factor),
                            scale_channel(px.b, factor),
                            px.a,
                        ),
                    )?;
                }
            }
        }
        Ok(out)
    }
}

#[inline]
fn scale_channel(channel: u8, factor: f32) -> u8 {
    (channel as f32 * factor).round().clamp(0.0, 255.0) as u8
}

/// Exclusive, bounds-checked view over a locked [`Bitmap`].
///
/// Dropping the view releases the lock; release runs on every exit path
/// and cannot happen twice.
#[derive(Debug)]
pub struct PixelBuffer<'a> {
    data: RefMut<'a, Vec<u8>>,
    width: u32,
    height: u32,
    stride: usize,
    format: PixelFormat,
}

impl PixelBuffer<'_> {
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row as laid out in memory. May exceed `width * bpp`; pixel
    /// addressing always goes through this value, never the width.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Read the pixel at (x, y). 3-byte formats read back `a = 255`.
    pub fn get(&self, x: u32, y: u32) -> Result<Rgba8, TextureError> {
        let i = self.offset(x, y)?;
        let data = &*self.data;
        Ok(match self.format {
            PixelFormat::Bgra8 => Rgba8::new(data[i + 2], data[i + 1], data[i], data[i + 3]),
            PixelFormat::Bgr8 => Rgba8::new(data[i + 2], data[i + 1], data[i], 255),
        })
    }

    /// Write the pixel at (x, y). 3-byte formats have no alpha byte, so
    /// the alpha component is discarded and the stored pixel stays opaque.
    pub fn set(&mut self, x: u32, y: u32, color: Rgba8) -> Result<(), TextureError> {
        let i = self.offset(x, y)?;
        let data = &mut *self.data;
        data[i] = color.b;
        data[i + 1] = color.g;
        data[i + 2] = color.r;
        if self.format == PixelFormat::Bgra8 {
            data[i + 3] = color.a;
        }
        Ok(())
    }

    fn offset(&self, x: u32, y: u32) -> Result<usize, TextureError> {
        if x >= self.width || y >= self.height {
            return Err(TextureError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.stride + x as usize * self.format.bytes_per_pixel())
    }
}
