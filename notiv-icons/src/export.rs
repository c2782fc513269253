use std::path::Path;

use image::{
    ExtendedColorType, ImageEncoder, RgbaImage,
    codecs::png::{CompressionType, FilterType, PngEncoder},
};

use crate::error::Result;

/// Encodes `image` as an RGBA PNG, trading speed for file size.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let (width, height) = image.dimensions();

    let mut buf = Vec::new();
    let enc = PngEncoder::new_with_quality(&mut buf, CompressionType::Best, FilterType::Adaptive);
    enc.write_image(image.as_raw(), width, height, ExtendedColorType::Rgba8)?;

    Ok(buf)
}

pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let data = encode_png(image)?;
    std::fs::write(path, data)?;

    Ok(())
}
