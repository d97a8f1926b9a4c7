//! Core configuration constants.
//!
//! Layout positions are pre-computed as `const` so the widget code never does
//! per-frame arithmetic beyond the per-point graph projection.

use core::time::Duration;

// =============================================================================
// WPM History
// =============================================================================

/// Number of WPM samples kept for the scrolling graph (one per update, so
/// roughly one minute of history at a 1 Hz WPM source).
pub const WPM_HISTORY_SIZE: usize = 60;

/// Minimum value the graph scale is computed from. Keeps the plot readable
/// when all observed speeds are low.
pub const WPM_SCALE_FLOOR: u8 = 20;

/// Headroom added on top of the observed maximum so the peak never touches
/// the top border.
pub const WPM_SCALE_HEADROOM: u8 = 5;

// =============================================================================
// Wire Protocol
// =============================================================================

/// Sentinel opcode identifying a WPM record on the shared split channel.
/// Other message types on the channel must use distinct first bytes.
pub const WPM_OPCODE: u8 = 0x57;

/// Total length of a WPM wire record: `[opcode, value]`.
pub const WPM_MESSAGE_LEN: usize = 2;

// =============================================================================
// Widget Layout (128x32 monochrome canvas)
// =============================================================================

/// Widget canvas width in pixels.
pub const WIDGET_WIDTH: u32 = 128;

/// Widget canvas height in pixels.
pub const WIDGET_HEIGHT: u32 = 32;

/// Usable plot width, leaving the right-hand column for the text block.
pub const GRAPH_WIDTH: u32 = 85;

/// Usable plot height inside the 1 px border.
pub const GRAPH_HEIGHT: u32 = WIDGET_HEIGHT - 2;

/// Plot x offset (inside the left border).
pub const GRAPH_MARGIN_LEFT: i32 = 1;

/// Plot y offset (inside the top border).
pub const GRAPH_MARGIN_TOP: i32 = 1;

/// X position of the max/avg/current text column.
pub const TEXT_COLUMN_X: i32 = GRAPH_MARGIN_LEFT + GRAPH_WIDTH as i32 + 3;

// =============================================================================
// Advertising (peripheral role)
// =============================================================================

/// Delay between a new connection and the advertising restart, letting the
/// fresh link stabilize before re-announcing.
pub const ADV_RESTART_SETTLE: Duration = Duration::from_secs(2);

/// Backoff between failed advertising start attempts.
pub const ADV_RETRY_BACKOFF: Duration = Duration::from_secs(5);

/// Minimum advertising interval while connected (slow interval: the RSSI
/// monitor only needs ~1 Hz beacons).
pub const ADV_INTERVAL_MIN: Duration = Duration::from_millis(1000);

/// Maximum advertising interval while connected.
pub const ADV_INTERVAL_MAX: Duration = Duration::from_millis(1200);
