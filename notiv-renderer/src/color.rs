use image::Rgba;

/// Near-black used for the legs and the spine.
pub const INK: Rgba<u8> = Rgba([8, 12, 18, 255]);

/// Yellow used for the highlight stripe.
pub const ACCENT: Rgba<u8> = Rgba([246, 224, 0, 255]);

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
