//! Peripheral role: ingest WPM records from the link and notify the display.

use log::{debug, warn};

use super::{EventBus, WpmStateChanged};
use crate::codec::{self, Decoded};
use crate::stats::WpmStatsAggregator;

/// Receives split-link payloads, feeds valid samples into the local
/// aggregator and republishes a [`WpmStateChanged`] snapshot so display
/// consumers can refresh without touching the transport.
pub struct PeripheralWpmPropagator {
    aggregator: WpmStatsAggregator,
}

impl PeripheralWpmPropagator {
    pub const fn new() -> Self {
        Self {
            aggregator: WpmStatsAggregator::new(),
        }
    }

    /// Handle one inbound payload from the split link.
    ///
    /// Frames for other message types pass through silently; malformed frames
    /// are logged and dropped. Neither propagates an error.
    pub fn on_link_payload<B: EventBus>(&mut self, payload: &[u8], bus: &mut B) {
        match codec::decode(payload) {
            Ok(Decoded::Sample(sample)) => {
                let stats = self.aggregator.ingest(sample);
                debug!("received WPM {} from central", sample.value);
                bus.publish(WpmStateChanged { stats });
            }
            Ok(Decoded::NotApplicable) => {}
            Err(err) => {
                warn!("dropping inbound split frame: {err}");
            }
        }
    }

    /// The peripheral-side aggregator, for projection and display.
    pub fn aggregator(&self) -> &WpmStatsAggregator {
        &self.aggregator
    }

    /// Reset history and statistics, e.g. on widget re-initialization.
    pub fn reset(&mut self) {
        self.aggregator.reset();
    }
}

impl Default for PeripheralWpmPropagator {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
