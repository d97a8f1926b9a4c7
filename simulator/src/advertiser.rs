//! Scripted advertiser driving the supervisor through its retry path.

use splitwpm_common::advertising::{AdvertiseError, Advertiser};

/// Fails a configurable number of start attempts, then reports
/// "already running" once advertising is up.
pub struct ScriptedAdvertiser {
    failures_left: u32,
    running: bool,
    pub attempts: u32,
}

impl ScriptedAdvertiser {
    pub fn failing(n: u32) -> Self {
        Self {
            failures_left: n,
            running: false,
            attempts: 0,
        }
    }

    /// The link layer stops advertising when a connection comes up.
    pub fn stop(&mut self) {
        self.running = false;
    }
}

impl Advertiser for ScriptedAdvertiser {
    fn start_advertising(&mut self) -> Result<(), AdvertiseError> {
        self.attempts += 1;
        if self.running {
            return Err(AdvertiseError::AlreadyActive);
        }
        if self.failures_left > 0 {
            self.failures_left -= 1;
            return Err(AdvertiseError::Failed);
        }
        self.running = true;
        Ok(())
    }
}
