//! Event bus glue for the simulated peripheral.

use splitwpm_common::split::{EventBus, WpmStateChanged};

/// Single-subscriber bus: the main loop polls the latest snapshot after each
/// delivery round, which is all the display consumer needs (every update
/// fully supersedes the previous one).
pub struct SnapshotBus {
    latest: Option<WpmStateChanged>,
    published: u32,
}

impl SnapshotBus {
    pub fn new() -> Self {
        Self {
            latest: None,
            published: 0,
        }
    }

    /// Latest unconsumed notification, if any.
    pub fn take(&mut self) -> Option<WpmStateChanged> {
        self.latest.take()
    }

    pub fn published(&self) -> u32 {
        self.published
    }
}

impl EventBus for SnapshotBus {
    fn publish(&mut self, event: WpmStateChanged) {
        self.latest = Some(event);
        self.published += 1;
    }
}
