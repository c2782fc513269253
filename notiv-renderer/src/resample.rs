use image::{
    RgbaImage,
    imageops::{self, FilterType},
};

/// Scales each color channel by its pixel's alpha.
pub fn premultiply(image: &mut RgbaImage) {
    for pixel in image.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        let scale = |c: u8| ((c as u16 * a as u16 + 127) / 255) as u8;
        pixel.0 = [scale(r), scale(g), scale(b), a];
    }
}

/// Inverse of [`premultiply`]. Colors that overshoot their alpha, as
/// Lanczos ringing can produce, clamp to 255.
pub fn unpremultiply(image: &mut RgbaImage) {
    for pixel in image.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        if a == 0 {
            pixel.0 = [0, 0, 0, 0];
            continue;
        }
        let a32 = a as u32;
        let scale = |c: u8| ((c as u32 * 255 + a32 / 2) / a32).min(255) as u8;
        pixel.0 = [scale(r), scale(g), scale(b), a];
    }
}

/// Resizes `canvas` to `size`x`size` with a Lanczos-3 filter.
///
/// Filtering happens on premultiplied colors so transparent pixels do not
/// darken the edges of colored shapes.
pub fn downsample(mut canvas: RgbaImage, size: u32) -> RgbaImage {
    premultiply(&mut canvas);
    let mut resized = imageops::resize(&canvas, size, size, FilterType::Lanczos3);
    unpremultiply(&mut resized);
    resized
}
