use webp::Encoder;

use crate::error::Result;

/// Decodes `bytes` as an image and re-encodes the pixels as lossy WebP at
/// the given quality (0-100, lower is smaller). Pixels are normalized to
/// RGBA8 first so any decodable color type is accepted.
pub fn encode_webp(bytes: &[u8], quality: u8) -> Result<Vec<u8>> {
    let image = image::load_from_memory(bytes)?;
    let rgba = image.to_rgba8();
    let encoder = Encoder::from_rgba(&rgba, rgba.width(), rgba.height());
    Ok(encoder.encode(f32::from(quality)).to_vec())
}
