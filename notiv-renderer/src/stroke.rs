use image::{Rgba, RgbaImage};

use crate::{draw::fill_polygon, geometry::Point};

/// A thick line segment with flat ends, rendered as a parallelogram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub start: Point,
    pub end: Point,
    pub width: f32,
}

impl Stroke {
    pub fn new(start: Point, end: Point, width: f32) -> Self {
        Self { start, end, width }
    }

    /// Unit normal `(dy, -dx) / length`. For the icon's down-right spine it
    /// points up and to the right. Zero when the segment has no length.
    pub fn normal(&self) -> Point {
        let direction = self.end - self.start;
        let mut length = direction.length();
        if length == 0.0 {
            length = 1.0;
        }
        Point::new(direction.y / length, -direction.x / length)
    }

    /// Corners in winding order: the two on the normal side from start to end,
    /// then the two opposite ones back.
    pub fn corners(&self) -> [Point; 4] {
        let offset = self.normal() * (self.width * 0.5);
        [
            self.start + offset,
            self.end + offset,
            self.end - offset,
            self.start - offset,
        ]
    }

    /// The same segment moved by `offset`, with a new width.
    pub fn translated(&self, offset: Point, width: f32) -> Self {
        Self::new(self.start + offset, self.end + offset, width)
    }
}

/// Paints `stroke` and returns its unit normal, so callers can lay out
/// parallel strokes at a fixed perpendicular distance.
pub fn draw_parallelogram(canvas: &mut RgbaImage, stroke: &Stroke, color: Rgba<u8>) -> Point {
    fill_polygon(canvas, &stroke.corners(), color);
    stroke.normal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{INK, TRANSPARENT};

    #[test]
    fn normal_is_perpendicular_unit_vector() {
        let stroke = Stroke::new(Point::new(5.0, 0.0), Point::new(5.0, 10.0), 2.0);
        assert_eq!(stroke.normal(), Point::new(1.0, -0.0));

        let stroke = Stroke::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0), 2.0);
        let normal = stroke.normal();
        assert!((normal.x - 0.8).abs() < 1e-6);
        assert!((normal.y + 0.6).abs() < 1e-6);
        assert!((normal.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn corners_are_offset_by_half_width() {
        let stroke = Stroke::new(Point::new(0.0, 0.0), Point::new(0.0, 10.0), 4.0);
        assert_eq!(
            stroke.corners(),
            [
                Point::new(2.0, 0.0),
                Point::new(2.0, 10.0),
                Point::new(-2.0, 10.0),
                Point::new(-2.0, 0.0),
            ]
        );
    }

    #[test]
    fn zero_length_stroke_does_not_panic() {
        let p = Point::new(6.0, 6.0);
        let stroke = Stroke::new(p, p, 10.0);
        let mut canvas = RgbaImage::new(12, 12);

        let normal = draw_parallelogram(&mut canvas, &stroke, INK);

        assert_eq!(normal.length(), 0.0);
        assert!(normal.x.is_finite() && normal.y.is_finite());
        assert_eq!(stroke.corners(), [p; 4]);
        assert_eq!(*canvas.get_pixel(6, 6), INK);
        assert_eq!(canvas.pixels().filter(|px| **px != TRANSPARENT).count(), 1);
    }

    #[test]
    fn diagonal_stroke_covers_its_axis() {
        let stroke = Stroke::new(Point::new(4.0, 4.0), Point::new(28.0, 28.0), 6.0);
        let mut canvas = RgbaImage::new(32, 32);
        draw_parallelogram(&mut canvas, &stroke, INK);

        for t in [4, 10, 16, 22, 28] {
            assert_eq!(*canvas.get_pixel(t, t), INK, "axis pixel {t}");
        }
        assert_eq!(*canvas.get_pixel(28, 4), TRANSPARENT);
        assert_eq!(*canvas.get_pixel(4, 28), TRANSPARENT);
    }

    #[test]
    fn translated_keeps_direction() {
        let stroke = Stroke::new(Point::new(1.0, 1.0), Point::new(4.0, 5.0), 3.0);
        let moved = stroke.translated(Point::new(2.0, -1.0), 1.0);
        assert_eq!(moved.start, Point::new(3.0, 0.0));
        assert_eq!(moved.end, Point::new(6.0, 4.0));
        assert_eq!(moved.width, 1.0);
        assert_eq!(moved.normal(), stroke.normal());
    }
}
