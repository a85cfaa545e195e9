//! Integration tests for saturn-export
//!
//! Full pipeline: generate source images -> convert -> verify output bytes


use saturn_export::{
    BinHeader, GenericCodec, ImageCodec, ImageKind, Rgba8, SaturnColor, TextureError, TgaHeader,
    decode_bin, decode_bin_raw, load_bitmap_from_file, load_texture_from_file, png_from_texture,
    save_bin, save_png, save_tga, to_bitmap, to_texture,
};
use tempfile::tempdir;

/// Test PNG -> SaturnTexture -> .bin conversion
#[test]
fn test_png_to_bin_roundtrip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let png_path = dir.path().join("checker.png");
    let bin_path = dir.path().join("checker.bin");

    generate_test_images::generate_checkerboard_png(&png_path).expect("Failed to generate PNG");

    let texture = load_texture_from_file(&png_path, None).expect("Failed to load texture");
    assert_eq!(texture.width(), 4);
    assert_eq!(texture.height(), 4);
    assert_eq!(texture.get(0, 0).unwrap(), SaturnColor::new(31, 0, 0));
    assert_eq!(texture.get(2, 0).unwrap(), SaturnColor::new(0, 0, 31));

    save_bin(&bin_path, &texture, true).expect("Failed to write .bin");

    // Verify the output file structure
    let data = std::fs::read(&bin_path).expect("Failed to read .bin");
    let header = BinHeader::from_bytes(&data).expect("Failed to parse header");
    assert_eq!(header.width, 4);
    assert_eq!(header.height, 4);
    assert_eq!(data.len(), BinHeader::SIZE + header.pixel_size());

    let decoded = decode_bin(&data).expect("Failed to decode .bin");
    assert_eq!(decoded, texture);
}

/// Test headerless .bin output
#[test]
fn test_headerless_bin() {
    let dir = tempdir().expect("Failed to create temp dir");
    let png_path = dir.path().join("checker.png");
    let bin_path = dir.path().join("checker.raw.bin");

    generate_test_images::generate_checkerboard_png(&png_path).expect("Failed to generate PNG");
    let texture = load_texture_from_file(&png_path, None).expect("Failed to load texture");

    save_bin(&bin_path, &texture, false).expect("Failed to write .bin");

    let data = std::fs::read(&bin_path).expect("Failed to read .bin");
    assert_eq!(data.len(), 4 * 4 * 2); // no header, two bytes per pixel

    let decoded = decode_bin_raw(&data, 4, 4).expect("Failed to decode raw .bin");
    assert_eq!(decoded, texture);
}

/// Test .bin files load back through the extension dispatch
#[test]
fn test_load_bin_file_as_bitmap() {
    let dir = tempdir().expect("Failed to create temp dir");
    let bin_path = dir.path().join("red.bin");

    let mut texture = saturn_export::SaturnTexture::new(2, 2);
    for y in 0..2 {
        for x in 0..2 {
            texture.set(x, y, SaturnColor::new(31, 0, 0)).unwrap();
        }
    }
    save_bin(&bin_path, &texture, true).expect("Failed to write .bin");

    let bitmap = load_bitmap_from_file(&bin_path, None).expect("Failed to load .bin");
    assert_eq!(bitmap.width(), 2);
    assert_eq!(
        bitmap.lock().unwrap().get(1, 1).unwrap(),
        Rgba8::opaque(255, 0, 0)
    );
}

/// Test SaturnTexture -> TGA file with byte-level verification
#[test]
fn test_tga_export() {
    let dir = tempdir().expect("Failed to create temp dir");
    let png_path = dir.path().join("checker.png");
    let tga_path = dir.path().join("checker.tga");

    generate_test_images::generate_checkerboard_png(&png_path).expect("Failed to generate PNG");
    let texture = load_texture_from_file(&png_path, None).expect("Failed to load texture");

    let bitmap = to_bitmap(&texture, None).expect("Failed to expand texture");
    save_tga(&tga_path, &bitmap, None).expect("Failed to write TGA");

    // Verify the output file structure
    let data = std::fs::read(&tga_path).expect("Failed to read TGA");
    let header = TgaHeader::from_bytes(&data).expect("Failed to parse TGA header");
    assert_eq!(header.width, 4);
    assert_eq!(header.height, 4);
    assert_eq!(data.len(), TgaHeader::SIZE + header.pixel_size());

    // The raster library reads our bottom-to-top file back top-down
    let decoded = ImageCodec
        .decode(&data, Some(ImageKind::Tga))
        .expect("Failed to decode TGA");
    let pixels = decoded.lock().unwrap();
    assert_eq!(pixels.get(0, 0).unwrap(), Rgba8::opaque(255, 0, 0));
    assert_eq!(pixels.get(2, 0).unwrap(), Rgba8::opaque(0, 0, 255));
}

/// Test the color-key pipeline end to end
#[test]
fn test_color_key_pipeline() {
    let dir = tempdir().expect("Failed to create temp dir");
    let png_path = dir.path().join("keyed.png");
    let out_path = dir.path().join("keyed_out.png");

    generate_test_images::generate_keyed_png(&png_path).expect("Failed to generate PNG");
    let key = SaturnColor::new(31, 0, 31); // magenta

    // Importing with the key marks the magenta corner transparent
    let bitmap = load_bitmap_from_file(&png_path, Some(key)).expect("Failed to load PNG");
    let pixels = bitmap.lock().unwrap();
    assert_eq!(pixels.get(0, 0).unwrap(), Rgba8::new(255, 0, 255, 0));
    assert_eq!(pixels.get(3, 3).unwrap(), Rgba8::opaque(255, 255, 255));
    drop(pixels);

    // Packing with the key stores the opaque key word for those pixels
    let texture = to_texture(&bitmap, Some(key)).expect("Failed to pack texture");
    assert_eq!(texture.get(0, 0).unwrap(), key);
    assert_eq!(texture.get(3, 3).unwrap(), SaturnColor::new(31, 31, 31));

    // Exporting PNG with the key turns them transparent again
    let mut png = Vec::new();
    png_from_texture(&mut png, &texture, Some(key)).expect("Failed to encode PNG");
    std::fs::write(&out_path, &png).expect("Failed to write PNG");

    let reloaded = load_bitmap_from_file(&out_path, None).expect("Failed to reload PNG");
    let pixels = reloaded.lock().unwrap();
    assert_eq!(pixels.get(0, 0).unwrap().a, 0);
    assert_eq!(pixels.get(3, 3).unwrap(), Rgba8::opaque(255, 255, 255));
}

/// Test save_png writes files the loader accepts
#[test]
fn test_png_save_and_reload() {
    let dir = tempdir().expect("Failed to create temp dir");
    let png_path = dir.path().join("checker.png");
    let copy_path = dir.path().join("copy.png");

    generate_test_images::generate_checkerboard_png(&png_path).expect("Failed to generate PNG");
    let bitmap = load_bitmap_from_file(&png_path, None).expect("Failed to load PNG");

    save_png(&copy_path, &bitmap).expect("Failed to save PNG");
    let reloaded = load_bitmap_from_file(&copy_path, None).expect("Failed to reload PNG");

    let a = bitmap.lock().unwrap();
    let b = reloaded.lock().unwrap();
    for y in 0..a.height() {
        for x in 0..a.width() {
            assert_eq!(a.get(x, y).unwrap(), b.get(x, y).unwrap());
        }
    }
}

/// Test extension dispatch is case-insensitive
#[test]
fn test_case_insensitive_extension() {
    let dir = tempdir().expect("Failed to create temp dir");
    let png_path = dir.path().join("SHIP.PNG");

    generate_test_images::generate_checkerboard_png(&png_path).expect("Failed to generate PNG");
    let bitmap = load_bitmap_from_file(&png_path, None).expect("Failed to load PNG");
    assert_eq!(bitmap.width(), 4);
}

/// Test unknown extensions fall back to sniffing and fail cleanly on garbage
#[test]
fn test_unknown_extension_garbage_fails() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("garbage.xyz");
    std::fs::write(&path, [0xDEu8, 0xAD, 0xBE, 0xEF]).expect("Failed to write file");

    let err = load_bitmap_from_file(&path, None).unwrap_err();
    assert!(matches!(err, TextureError::UnsupportedFormat(_)));
}

/// Test a PNG payload under an unknown extension still sniffs correctly
#[test]
fn test_unknown_extension_sniffs_content() {
    let dir = tempdir().expect("Failed to create temp dir");
    let png_path = dir.path().join("checker.png");
    let odd_path = dir.path().join("checker.dat");

    generate_test_images::generate_checkerboard_png(&png_path).expect("Failed to generate PNG");
    std::fs::copy(&png_path, &odd_path).expect("Failed to copy");

    let bitmap = load_bitmap_from_file(&odd_path, None).expect("Failed to sniff PNG");
    assert_eq!(bitmap.height(), 4);
}

/// Test a truncated .bin file fails with the typed error, not a panic
#[test]
fn test_truncated_bin_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let bin_path = dir.path().join("short.bin");

    // Header promises 4×4 but only one pixel follows
    let mut data = BinHeader::new(4, 4).to_bytes().to_vec();
    data.extend_from_slice(&[0x1F, 0x80]);
    std::fs::write(&bin_path, &data).expect("Failed to write file");

    let err = load_bitmap_from_file(&bin_path, None).unwrap_err();
    assert!(matches!(
        err,
        TextureError::TruncatedInput {
            expected: 36,
            actual: 6
        }
    ));
}

/// Test missing input surfaces as an I/O error
#[test]
fn test_missing_file_is_io_error() {
    let err = load_bitmap_from_file("/nonexistent/missing.png", None).unwrap_err();
    assert!(matches!(err, TextureError::Io(_)));
}
