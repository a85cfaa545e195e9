//! Error type shared across the Saturn texture pipeline.
//!
//! Bounds and lock violations are programming errors and surface
//! immediately; nothing here is retried or silently recovered. Partial
//! output written before a failure is the caller's to discard.

/// Error type for texture conversion and pixel access.
#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    #[error("Bitmap is already locked")]
    Lock,

    #[error("Pixel ({x}, {y}) out of range for {width}x{height} buffer")]
    OutOfRange { x: u32, y: u32, width: u32, height: u32 },

    #[error("Input truncated: expected {expected} bytes, got {actual}")]
    TruncatedInput { expected: usize, actual: usize },

    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
