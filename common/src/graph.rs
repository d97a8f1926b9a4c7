//! Graph projection: statistics snapshot -> render-ready geometry.
//!
//! [`project`] is a pure function so the exact pixel placement can be tested
//! on the host without a display. The widget code consumes the resulting
//! [`GraphFrame`] and only issues draw commands.

use core::fmt::Write;

use embedded_graphics::geometry::Point;
use heapless::{String, Vec};

use crate::config::{WPM_HISTORY_SIZE, WPM_SCALE_FLOOR, WPM_SCALE_HEADROOM};
use crate::stats::WpmStatistics;

/// Usable plot area and its offset inside the widget canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphGeometry {
    pub width: u32,
    pub height: u32,
    pub margin_left: i32,
    pub margin_top: i32,
}

/// Render-ready projection of one statistics snapshot.
///
/// `points` holds one entry per history slot, left to right in chronological
/// order. `gridlines` are the y rows at 25/50/75% of the usable height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphFrame {
    pub points: Vec<Point, WPM_HISTORY_SIZE>,
    pub gridlines: [i32; 3],
    pub scale_max: u16,
    pub max_label: String<8>,
    pub avg_label: String<8>,
    pub current_label: String<8>,
}

/// Project a chronological sample window into screen coordinates.
///
/// Precondition: `history.len() >= 2` (the x step divides by `len - 1`). The
/// history window has a fixed compile-time size, so this is asserted rather
/// than handled.
pub fn project(history: &[u8], stats: &WpmStatistics, geometry: &GraphGeometry) -> GraphFrame {
    debug_assert!(history.len() >= 2, "graph projection needs at least 2 points");

    let scale_max = u16::from(stats.max.max(WPM_SCALE_FLOOR)) + u16::from(WPM_SCALE_HEADROOM);

    let w = geometry.width as i32;
    let h = geometry.height as i32;
    let point_count = history.len().min(WPM_HISTORY_SIZE);
    let y_bottom = geometry.margin_top + h;

    let mut points: Vec<Point, WPM_HISTORY_SIZE> = Vec::new();
    for (i, &value) in history.iter().take(point_count).enumerate() {
        let x = geometry.margin_left + (i as i32 * (w - 1)) / (point_count as i32 - 1);
        let y = geometry.margin_top + h - (i32::from(value) * h) / i32::from(scale_max);
        let _ = points.push(Point::new(x, y.clamp(geometry.margin_top, y_bottom)));
    }

    let gridlines = [
        geometry.margin_top + h / 4,
        geometry.margin_top + h / 2,
        geometry.margin_top + (h * 3) / 4,
    ];

    let mut max_label: String<8> = String::new();
    let _ = write!(max_label, "M{}", stats.max);
    let mut avg_label: String<8> = String::new();
    let _ = write!(avg_label, "A{}", stats.average());
    let mut current_label: String<8> = String::new();
    let _ = write!(current_label, "{}", stats.current);

    GraphFrame {
        points,
        gridlines,
        scale_max,
        max_label,
        avg_label,
        current_label,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GRAPH_HEIGHT, GRAPH_MARGIN_LEFT, GRAPH_MARGIN_TOP, GRAPH_WIDTH};
    use crate::stats::{WpmSample, WpmStatsAggregator};

    fn geometry() -> GraphGeometry {
        GraphGeometry {
            width: GRAPH_WIDTH,
            height: GRAPH_HEIGHT,
            margin_left: GRAPH_MARGIN_LEFT,
            margin_top: GRAPH_MARGIN_TOP,
        }
    }

    fn stats_from(samples: &[u8]) -> (WpmStatsAggregator, WpmStatistics) {
        let mut agg = WpmStatsAggregator::new();
        let mut stats = WpmStatistics::default();
        for &v in samples {
            stats = agg.ingest(WpmSample::new(v));
        }
        (agg, stats)
    }

    #[test]
    fn test_projection_determinism() {
        let (agg, stats) = stats_from(&[3, 18, 44, 0, 91, 60]);
        let history = agg.history().chronological();

        let a = project(&history, &stats, &geometry());
        let b = project(&history, &stats, &geometry());
        assert_eq!(a, b);
    }

    #[test]
    fn test_one_point_per_history_slot() {
        let (agg, stats) = stats_from(&[10, 20, 30]);
        let history = agg.history().chronological();
        let frame = project(&history, &stats, &geometry());
        assert_eq!(frame.points.len(), history.len());
    }

    #[test]
    fn test_scale_floor() {
        // All samples <= 15: the scale must still be max(15, 20) + 5
        let (agg, stats) = stats_from(&[5, 12, 15, 3]);
        let history = agg.history().chronological();
        let frame = project(&history, &stats, &geometry());
        assert_eq!(frame.scale_max, 25);
    }

    #[test]
    fn test_scale_tracks_max_above_floor() {
        let (agg, stats) = stats_from(&[80]);
        let history = agg.history().chronological();
        let frame = project(&history, &stats, &geometry());
        assert_eq!(frame.scale_max, 85);
    }

    #[test]
    fn test_points_span_plot_width() {
        let (agg, stats) = stats_from(&[10, 20]);
        let history = agg.history().chronological();
        let frame = project(&history, &stats, &geometry());

        let first = frame.points.first().unwrap();
        let last = frame.points.last().unwrap();
        assert_eq!(first.x, GRAPH_MARGIN_LEFT);
        assert_eq!(last.x, GRAPH_MARGIN_LEFT + GRAPH_WIDTH as i32 - 1);
    }

    #[test]
    fn test_y_clamped_to_plot_area() {
        // History value above the statistics max (possible right after a
        // stats reset): y must clamp to the top margin, not go negative.
        let stats = WpmStatistics {
            current: 10,
            max: 10,
            positive_sum: 10,
            positive_count: 1,
        };
        let history = [255u8, 0];
        let frame = project(&history, &stats, &geometry());

        let top = GRAPH_MARGIN_TOP;
        let bottom = GRAPH_MARGIN_TOP + GRAPH_HEIGHT as i32;
        for p in &frame.points {
            assert!(p.y >= top && p.y <= bottom, "point {p:?} out of range");
        }
        assert_eq!(frame.points[0].y, top);
        assert_eq!(frame.points[1].y, bottom);
    }

    #[test]
    fn test_gridlines_at_quarter_heights() {
        let (agg, stats) = stats_from(&[10, 20]);
        let history = agg.history().chronological();
        let frame = project(&history, &stats, &geometry());

        let h = GRAPH_HEIGHT as i32;
        assert_eq!(frame.gridlines[0], GRAPH_MARGIN_TOP + h / 4);
        assert_eq!(frame.gridlines[1], GRAPH_MARGIN_TOP + h / 2);
        assert_eq!(frame.gridlines[2], GRAPH_MARGIN_TOP + h * 3 / 4);
    }

    #[test]
    fn test_labels() {
        let (agg, stats) = stats_from(&[0, 10, 0, 20, 42]);
        let history = agg.history().chronological();
        let frame = project(&history, &stats, &geometry());

        assert_eq!(frame.max_label.as_str(), "M42");
        // Average over positive samples only: (10 + 20 + 42) / 3 = 24
        assert_eq!(frame.avg_label.as_str(), "A24");
        assert_eq!(frame.current_label.as_str(), "42");
    }
}
