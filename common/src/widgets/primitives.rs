//! Shared drawing primitives for the monochrome widget canvas.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};

/// 1 px border around an area.
pub fn draw_border<D>(display: &mut D, top_left: Point, size: Size)
where
    D: DrawTarget<Color = BinaryColor>,
{
    Rectangle::new(top_left, size)
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(display)
        .ok();
}

/// Dotted horizontal gridline: one lit pixel every third column, so the grid
/// stays visually distinct from the graph line on a 1-bit display.
pub fn draw_dotted_gridline<D>(display: &mut D, x_start: i32, x_end: i32, y: i32)
where
    D: DrawTarget<Color = BinaryColor>,
{
    let pixels = (x_start..x_end)
        .step_by(3)
        .map(|x| Pixel(Point::new(x, y), BinaryColor::On));
    display.draw_iter(pixels).ok();
}

/// Connect consecutive points with 1 px line segments.
pub fn draw_polyline<D>(display: &mut D, points: &[Point])
where
    D: DrawTarget<Color = BinaryColor>,
{
    if points.len() < 2 {
        return;
    }

    let style = PrimitiveStyle::with_stroke(BinaryColor::On, 1);
    for pair in points.windows(2) {
        Line::new(pair[0], pair[1]).into_styled(style).draw(display).ok();
    }
}
