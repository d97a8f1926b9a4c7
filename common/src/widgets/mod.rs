//! Display widgets for the WPM telemetry pipeline.

pub mod primitives;
pub mod wpm_status;

pub use wpm_status::draw_wpm_status;
