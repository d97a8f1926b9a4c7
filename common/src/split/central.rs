//! Central role: broadcast local WPM changes to the peripherals.

use log::{debug, warn};

use super::SplitLink;
use crate::codec;

/// Pushes each local WPM change over the split link.
///
/// Stateless by design: the channel is fire-and-forget. Send failures are
/// logged and not retried — the WPM source emits updates periodically, so
/// the next change supersedes a dropped frame. This is a load-shedding
/// policy, not an oversight.
#[derive(Default)]
pub struct CentralWpmPropagator;

impl CentralWpmPropagator {
    pub const fn new() -> Self {
        Self
    }

    /// Handle a local "WPM changed" notification: encode and broadcast.
    pub fn on_wpm_changed<L: SplitLink>(&self, wpm: u8, link: &mut L) {
        let frame = codec::encode(wpm);
        match link.send(&frame) {
            Ok(()) => debug!("broadcast WPM {wpm} to peripherals"),
            Err(err) => warn!("failed to send WPM to peripherals: {err}"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
