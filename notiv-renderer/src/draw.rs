//! Hard-edged fill primitives on an RGBA canvas.

use image::{Rgba, RgbaImage};
use imageproc::{
    drawing::{draw_filled_rect_mut, draw_line_segment_mut, draw_polygon_mut},
    point::Point as GridPoint,
    rect::Rect,
};

use crate::geometry::{PixelRect, Point};

/// Paints `rect` including its right and bottom edges. Parts outside the
/// canvas are clipped.
pub fn fill_rect(canvas: &mut RgbaImage, rect: PixelRect, color: Rgba<u8>) {
    let (width, height) = (rect.width(), rect.height());
    if width == 0 || height == 0 {
        return;
    }
    draw_filled_rect_mut(
        canvas,
        Rect::at(rect.left, rect.top).of_size(width, height),
        color,
    );
}

/// Fills the polygon through `vertices`, outline pixels included.
///
/// Vertices are snapped to the pixel grid first. Shapes that collapse to a
/// segment or a single pixel are still painted.
pub fn fill_polygon(canvas: &mut RgbaImage, vertices: &[Point], color: Rgba<u8>) {
    let mut grid: Vec<GridPoint<i32>> = Vec::with_capacity(vertices.len());
    for (x, y) in vertices.iter().map(|v| v.snap()) {
        let point = GridPoint::new(x, y);
        if grid.last() != Some(&point) {
            grid.push(point);
        }
    }
    // the polygon is implicitly closed
    while grid.len() > 1 && grid.first() == grid.last() {
        grid.pop();
    }

    match grid.as_slice() {
        [] => {}
        [p] => {
            if let (Ok(x), Ok(y)) = (u32::try_from(p.x), u32::try_from(p.y))
                && let Some(pixel) = canvas.get_pixel_mut_checked(x, y)
            {
                *pixel = color;
            }
        }
        [a, b] => draw_line_segment_mut(
            canvas,
            (a.x as f32, a.y as f32),
            (b.x as f32, b.y as f32),
            color,
        ),
        polygon => draw_polygon_mut(canvas, polygon, color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{INK, TRANSPARENT};

    fn painted(canvas: &RgbaImage) -> usize {
        canvas.pixels().filter(|p| **p != TRANSPARENT).count()
    }

    #[test]
    fn rect_includes_far_edges() {
        let mut canvas = RgbaImage::new(10, 10);
        fill_rect(
            &mut canvas,
            PixelRect {
                left: 2,
                top: 3,
                right: 4,
                bottom: 5,
            },
            INK,
        );
        assert_eq!(painted(&canvas), 9);
        assert_eq!(*canvas.get_pixel(4, 5), INK);
        assert_eq!(*canvas.get_pixel(5, 5), TRANSPARENT);
    }

    #[test]
    fn rect_is_clipped_to_canvas() {
        let mut canvas = RgbaImage::new(4, 4);
        fill_rect(
            &mut canvas,
            PixelRect {
                left: -2,
                top: -2,
                right: 1,
                bottom: 1,
            },
            INK,
        );
        assert_eq!(painted(&canvas), 4);
    }

    #[test]
    fn inverted_rect_paints_nothing() {
        let mut canvas = RgbaImage::new(4, 4);
        fill_rect(
            &mut canvas,
            PixelRect {
                left: 3,
                top: 0,
                right: 1,
                bottom: 3,
            },
            INK,
        );
        assert_eq!(painted(&canvas), 0);
    }

    #[test]
    fn polygon_collapsed_to_a_point() {
        let mut canvas = RgbaImage::new(8, 8);
        let p = Point::new(3.2, 4.7);
        fill_polygon(&mut canvas, &[p, p, p, p], INK);
        assert_eq!(painted(&canvas), 1);
        assert_eq!(*canvas.get_pixel(3, 5), INK);
    }

    #[test]
    fn polygon_collapsed_to_a_segment() {
        let mut canvas = RgbaImage::new(8, 8);
        let a = Point::new(1.0, 1.0);
        let b = Point::new(5.0, 1.0);
        fill_polygon(&mut canvas, &[a, b, b, a], INK);
        assert_eq!(*canvas.get_pixel(1, 1), INK);
        assert_eq!(*canvas.get_pixel(3, 1), INK);
        assert!(canvas.enumerate_pixels().all(|(_, y, p)| y == 1 || *p == TRANSPARENT));
    }

    #[test]
    fn polygon_outside_canvas_is_ignored() {
        let mut canvas = RgbaImage::new(8, 8);
        let p = Point::new(-3.0, 20.0);
        fill_polygon(&mut canvas, &[p], INK);
        assert_eq!(painted(&canvas), 0);
    }

    #[test]
    fn square_polygon_is_filled() {
        let mut canvas = RgbaImage::new(8, 8);
        let square = [
            Point::new(1.0, 1.0),
            Point::new(4.0, 1.0),
            Point::new(4.0, 4.0),
            Point::new(1.0, 4.0),
        ];
        fill_polygon(&mut canvas, &square, INK);
        assert_eq!(painted(&canvas), 16);
    }
}
