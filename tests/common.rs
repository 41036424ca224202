use std::path::Path;

use image::RgbImage;

/// Writes a small decodable image; the format is inferred from the
/// extension, so this produces real PNG or JPEG files.
pub fn write_test_image(path: &Path) {
    let img: RgbImage = image::ImageBuffer::from_fn(32, 32, |x, y| {
        image::Rgb([(x * 8) as u8, (y * 8) as u8, 128])
    });
    img.save(path).unwrap();
}

/// Writes a file with an image extension but garbage contents, for
/// exercising per-file failure handling.
pub fn write_corrupt_image(path: &Path) {
    std::fs::write(path, b"definitely not pixel data").unwrap();
}
