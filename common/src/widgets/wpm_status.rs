//! WPM status widget: scrolling graph plus max/avg/current readouts.
//!
//! Renders a projected [`GraphFrame`] onto a 128x32 monochrome canvas. The
//! left block is the graph (border, dotted gridlines at 25/50/75%, history
//! polyline); the right column shows `M<max>`, the large current value and
//! `A<avg>`.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use profont::{PROFONT_7_POINT, PROFONT_12_POINT};

use crate::config::{
    GRAPH_MARGIN_LEFT, GRAPH_WIDTH, TEXT_COLUMN_X, WIDGET_HEIGHT, WIDGET_WIDTH,
};
use crate::graph::GraphFrame;
use crate::widgets::primitives::{draw_border, draw_dotted_gridline, draw_polyline};

/// Draw the full widget for one statistics update.
///
/// Clears the canvas area first; each frame fully supersedes the previous
/// one, mirroring the at-most-once message flow that feeds it.
pub fn draw_wpm_status<D>(display: &mut D, frame: &GraphFrame)
where
    D: DrawTarget<Color = BinaryColor>,
{
    let canvas = Size::new(WIDGET_WIDTH, WIDGET_HEIGHT);

    Rectangle::new(Point::zero(), canvas)
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::Off))
        .draw(display)
        .ok();

    draw_border(display, Point::zero(), canvas);

    let grid_x_start = GRAPH_MARGIN_LEFT + 1;
    let grid_x_end = GRAPH_MARGIN_LEFT + GRAPH_WIDTH as i32 - 1;
    for &y in &frame.gridlines {
        draw_dotted_gridline(display, grid_x_start, grid_x_end, y);
    }

    draw_polyline(display, &frame.points);

    let label_style = MonoTextStyle::new(&PROFONT_7_POINT, BinaryColor::On);
    let value_style = MonoTextStyle::new(&PROFONT_12_POINT, BinaryColor::On);

    Text::with_baseline(
        &frame.max_label,
        Point::new(TEXT_COLUMN_X, 2),
        label_style,
        Baseline::Top,
    )
    .draw(display)
    .ok();

    Text::with_baseline(
        &frame.current_label,
        Point::new(TEXT_COLUMN_X + 2, WIDGET_HEIGHT as i32 / 2 - 7),
        value_style,
        Baseline::Top,
    )
    .draw(display)
    .ok();

    Text::with_baseline(
        &frame.avg_label,
        Point::new(TEXT_COLUMN_X, WIDGET_HEIGHT as i32 - 11),
        label_style,
        Baseline::Top,
    )
    .draw(display)
    .ok();
}
