//! Shared types and formats for the Sega Saturn texture pipeline
//!
//! This crate provides the Saturn-specific pieces shared between:
//! - `saturn-export` (conversion engine)
//! - anything else that needs to read or write Saturn texture data
//!
//! # Modules
//!
//! - [`color`] - packed 16-bit color codec (15-bit RGB + opacity flag)
//! - [`texture`] - in-memory row-major texture grid
//! - [`formats`] - byte-exact `.bin` container and TGA writer header
//! - [`error`] - shared error type

pub mod color;
pub mod error;
pub mod formats;
pub mod texture;

// Re-export the core value types
pub use color::{Rgba8, SaturnColor};
pub use error::TextureError;
pub use texture::SaturnTexture;

// Re-export commonly used format items
pub use formats::{BIN_TEXTURE_EXT, BinHeader, TgaHeader, decode_bin, decode_bin_raw, encode_bin};
