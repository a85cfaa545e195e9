//! Saturn binary texture formats
//!
//! POD formats - no magic bytes, no checksums. The raw `.bin` container is
//! the Saturn-native interchange format; the TGA header describes the
//! fixed 24-bit variant the exporter writes.

pub mod bin;
pub mod tga;

pub use bin::{BinHeader, decode_bin, decode_bin_raw, encode_bin};
pub use tga::TgaHeader;

/// File extension of the raw Saturn texture container.
pub const BIN_TEXTURE_EXT: &str = "bin";
