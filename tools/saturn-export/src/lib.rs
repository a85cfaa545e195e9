//! saturn-export library
//!
//! Conversion engine between consumer image formats and Sega Saturn
//! textures: raster decoding behind a codec seam, color-key transparency,
//! pixel-exact resizing and the `.bin`/TGA/PNG writers.

pub mod bitmap;
pub mod colorkey;
pub mod generic;
pub mod resize;
pub mod texture;

// Re-export the shared value and format types alongside the conversion
// entry points, so most callers only need this crate
pub use saturn_common::{
    BIN_TEXTURE_EXT, BinHeader, Rgba8, SaturnColor, SaturnTexture, TextureError, TgaHeader,
    decode_bin, decode_bin_raw, encode_bin,
};

pub use bitmap::{Bitmap, PixelBuffer, PixelFormat};
pub use colorkey::{apply_import_key, contains_color, is_fully_transparent, replace_color};
pub use generic::{GenericCodec, ImageCodec, ImageKind};
pub use resize::{ResizeMode, resize};
pub use texture::{
    VALID_EXTENSIONS, load_bitmap_from_file, load_texture_from_file, png_from_texture, save_bin,
    save_png, save_tga, texture_to_tga, to_bitmap, to_texture, write_png, write_tga,
};
