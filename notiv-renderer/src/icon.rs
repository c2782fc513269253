use image::RgbaImage;
use tracing::instrument;

use crate::{
    color::{ACCENT, INK},
    draw::fill_rect,
    geometry::{PixelRect, Point},
    resample::downsample,
    stroke::{Stroke, draw_parallelogram},
};

/// Target sizes at or below this use [`Proportions::COMPACT`].
pub const COMPACT_THRESHOLD: u32 = 20;

/// Glyph placement as fractions of the canvas size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Proportions {
    pub x0: f32,
    pub x1: f32,
    pub y0: f32,
    pub y1: f32,
    pub stem: f32,
}

impl Proportions {
    pub const REGULAR: Proportions = Proportions {
        x0: 0.22,
        x1: 0.78,
        y0: 0.16,
        y1: 0.86,
        stem: 0.118,
    };

    /// Shorter legs and heavier stems, so the mark survives at favicon size.
    pub const COMPACT: Proportions = Proportions {
        x0: 0.22,
        x1: 0.78,
        y0: 0.18,
        y1: 0.86,
        stem: 0.15,
    };

    pub fn for_target(target_size: u32) -> Self {
        if target_size <= COMPACT_THRESHOLD {
            Self::COMPACT
        } else {
            Self::REGULAR
        }
    }
}

/// Resolved geometry of the icon on a canvas of a given size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconLayout {
    pub left_leg: PixelRect,
    pub right_leg: PixelRect,
    pub spine: Stroke,
}

impl IconLayout {
    pub fn new(size: u32, target_size: u32) -> Self {
        let s = size as f32;
        let p = Proportions::for_target(target_size);
        let (x0, x1, y0, y1) = (s * p.x0, s * p.x1, s * p.y0, s * p.y1);
        let stem = s * p.stem;

        let left_leg = PixelRect::from_edges(x0, y0, x0 + stem, y1);
        let right_leg = PixelRect::from_edges(x1 - stem, y0, x1, y1);

        // inner top of the left leg to inner bottom of the right leg
        let spine = Stroke::new(
            Point::new(x0 + stem * 0.96, y0 + stem * 0.10),
            Point::new(x1 - stem * 0.96, y1 - stem * 0.10),
            (stem * 0.92).max(1.0),
        );

        Self {
            left_leg,
            right_leg,
            spine,
        }
    }

    /// The accent stripe, parallel to the spine and shifted along `normal`.
    pub fn highlight(&self, normal: Point) -> Stroke {
        let width = (self.spine.width * 0.50).max(1.0);
        self.spine
            .translated(normal * (self.spine.width * 0.56), width)
    }
}

/// Draws the icon onto a new transparent `size`x`size` canvas.
///
/// `target_size` is the size the canvas will finally be shown at; it only
/// selects the [`Proportions`].
#[instrument(level = "debug")]
pub fn draw_icon(size: u32, target_size: u32) -> RgbaImage {
    let layout = IconLayout::new(size, target_size);
    let mut canvas = RgbaImage::new(size, size);

    fill_rect(&mut canvas, layout.left_leg, INK);
    fill_rect(&mut canvas, layout.right_leg, INK);

    let normal = draw_parallelogram(&mut canvas, &layout.spine, INK);
    draw_parallelogram(&mut canvas, &layout.highlight(normal), ACCENT);

    canvas
}

/// Draws the icon on a `canvas_size` canvas and downsamples it to
/// `target_size`.
#[instrument(level = "debug")]
pub fn render_icon(canvas_size: u32, target_size: u32) -> RgbaImage {
    downsample(draw_icon(canvas_size, target_size), target_size)
}
