//! Advertising restart supervisor for the peripheral role.
//!
//! A link layer stops advertising once a connection is up. The host-side RSSI
//! monitor needs the peripheral to stay discoverable *while connected*, so
//! this supervisor re-arms advertising shortly after every new connection and
//! retries with a fixed backoff when the platform refuses.
//!
//! Timing is externalized: transition methods return the [`Duration`] to
//! schedule and the platform glue owns the timer. At most one delay is
//! pending at a time; scheduling a new one supersedes the old.

use core::fmt;
use core::time::Duration;

use log::{debug, info, warn};

use crate::config::{ADV_RESTART_SETTLE, ADV_RETRY_BACKOFF};

/// Platform capability to (re)start connectable advertising.
pub trait Advertiser {
    fn start_advertising(&mut self) -> Result<(), AdvertiseError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvertiseError {
    /// Advertising was already running. Benign; treated as success.
    AlreadyActive,
    /// The platform could not start advertising.
    Failed,
}

impl fmt::Display for AdvertiseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyActive => write!(f, "advertising already running"),
            Self::Failed => write!(f, "advertising start failed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdvertisingPhase {
    #[default]
    Idle,
    Advertising,
    PendingRetry,
}

/// Retry/backoff state machine keeping the peripheral advertisable.
///
/// One instance per device. Transitions must be called from a single
/// cooperative context (or under an external lock).
pub struct AdvertisingSupervisor {
    phase: AdvertisingPhase,
    retry_count: u32,
    scheduled_delay: Option<Duration>,
}

impl AdvertisingSupervisor {
    pub const fn new() -> Self {
        Self {
            phase: AdvertisingPhase::Idle,
            retry_count: 0,
            scheduled_delay: None,
        }
    }

    /// A new connection was accepted.
    ///
    /// Returns the settle delay to schedule before the advertising restart
    /// attempt, letting the fresh link stabilize first. A connection accepted
    /// while still advertising moves straight to `PendingRetry`.
    pub fn on_connected(&mut self) -> Duration {
        if self.phase == AdvertisingPhase::Advertising {
            self.phase = AdvertisingPhase::PendingRetry;
        }
        debug!("peripheral connected, scheduling advertising restart");
        self.scheduled_delay = Some(ADV_RESTART_SETTLE);
        ADV_RESTART_SETTLE
    }

    /// The link dropped. The link layer resumes its own default advertising,
    /// so no restart is scheduled here.
    pub fn on_disconnected(&mut self) {
        self.phase = AdvertisingPhase::Idle;
        self.retry_count = 0;
        self.scheduled_delay = None;
    }

    /// The scheduled delay elapsed: attempt to start advertising.
    ///
    /// Returns `None` when advertising is (already) running, or the backoff
    /// to schedule before the next attempt. Retries are unbounded; the log
    /// line carries the attempt count so a persistent platform fault stays
    /// visible.
    pub fn on_timer_elapsed<A: Advertiser>(&mut self, advertiser: &mut A) -> Option<Duration> {
        self.scheduled_delay = None;
        match advertiser.start_advertising() {
            Ok(()) => {
                info!("restarted advertising for RSSI monitoring");
                self.phase = AdvertisingPhase::Advertising;
                self.retry_count = 0;
                None
            }
            Err(AdvertiseError::AlreadyActive) => {
                debug!("advertising already running");
                self.phase = AdvertisingPhase::Advertising;
                self.retry_count = 0;
                None
            }
            Err(err @ AdvertiseError::Failed) => {
                self.phase = AdvertisingPhase::PendingRetry;
                self.retry_count += 1;
                warn!("{err} (attempt {}), retrying", self.retry_count);
                self.scheduled_delay = Some(ADV_RETRY_BACKOFF);
                Some(ADV_RETRY_BACKOFF)
            }
        }
    }

    pub fn phase(&self) -> AdvertisingPhase {
        self.phase
    }

    pub fn retry_count(&self) -> u32 {
        self.retry_count
    }

    /// Delay currently pending on the platform timer, if any.
    pub fn scheduled_delay(&self) -> Option<Duration> {
        self.scheduled_delay
    }
}

impl Default for AdvertisingSupervisor {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Advertiser that fails a fixed number of times before succeeding.
    struct ScriptedAdvertiser {
        failures_left: u32,
        attempts: u32,
    }

    impl ScriptedAdvertiser {
        fn failing(n: u32) -> Self {
            Self { failures_left: n, attempts: 0 }
        }
    }

    impl Advertiser for ScriptedAdvertiser {
        fn start_advertising(&mut self) -> Result<(), AdvertiseError> {
            self.attempts += 1;
            if self.failures_left > 0 {
                self.failures_left -= 1;
                Err(AdvertiseError::Failed)
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_connect_schedules_settle_delay() {
        let mut sup = AdvertisingSupervisor::new();
        assert_eq!(sup.on_connected(), ADV_RESTART_SETTLE);
        assert_eq!(sup.scheduled_delay(), Some(ADV_RESTART_SETTLE));
        assert_eq!(sup.phase(), AdvertisingPhase::Idle);
    }

    #[test]
    fn test_successful_start() {
        let mut sup = AdvertisingSupervisor::new();
        let mut adv = ScriptedAdvertiser::failing(0);

        sup.on_connected();
        assert_eq!(sup.on_timer_elapsed(&mut adv), None);
        assert_eq!(sup.phase(), AdvertisingPhase::Advertising);
        assert_eq!(sup.retry_count(), 0);
        assert_eq!(sup.scheduled_delay(), None);
    }

    #[test]
    fn test_retry_scenario() {
        // Fails twice, then succeeds: exactly two backoff delays are issued
        // and the retry count resets on success.
        let mut sup = AdvertisingSupervisor::new();
        let mut adv = ScriptedAdvertiser::failing(2);

        sup.on_connected();

        assert_eq!(sup.on_timer_elapsed(&mut adv), Some(ADV_RETRY_BACKOFF));
        assert_eq!(sup.phase(), AdvertisingPhase::PendingRetry);
        assert_eq!(sup.retry_count(), 1);

        assert_eq!(sup.on_timer_elapsed(&mut adv), Some(ADV_RETRY_BACKOFF));
        assert_eq!(sup.retry_count(), 2);

        assert_eq!(sup.on_timer_elapsed(&mut adv), None);
        assert_eq!(sup.phase(), AdvertisingPhase::Advertising);
        assert_eq!(sup.retry_count(), 0);
        assert_eq!(adv.attempts, 3);
    }

    #[test]
    fn test_already_active_is_success() {
        struct AlreadyActive;
        impl Advertiser for AlreadyActive {
            fn start_advertising(&mut self) -> Result<(), AdvertiseError> {
                Err(AdvertiseError::AlreadyActive)
            }
        }

        let mut sup = AdvertisingSupervisor::new();
        sup.on_connected();
        assert_eq!(sup.on_timer_elapsed(&mut AlreadyActive), None);
        assert_eq!(sup.phase(), AdvertisingPhase::Advertising);
        assert_eq!(sup.retry_count(), 0);
    }

    #[test]
    fn test_connect_while_advertising_moves_to_pending_retry() {
        let mut sup = AdvertisingSupervisor::new();
        let mut adv = ScriptedAdvertiser::failing(0);

        sup.on_connected();
        sup.on_timer_elapsed(&mut adv);
        assert_eq!(sup.phase(), AdvertisingPhase::Advertising);

        // New link accepted while still broadcasting
        sup.on_connected();
        assert_eq!(sup.phase(), AdvertisingPhase::PendingRetry);
        assert_eq!(sup.scheduled_delay(), Some(ADV_RESTART_SETTLE));
    }

    #[test]
    fn test_disconnect_returns_to_idle() {
        let mut sup = AdvertisingSupervisor::new();
        let mut adv = ScriptedAdvertiser::failing(1);

        sup.on_connected();
        sup.on_timer_elapsed(&mut adv);
        assert_eq!(sup.phase(), AdvertisingPhase::PendingRetry);

        sup.on_disconnected();
        assert_eq!(sup.phase(), AdvertisingPhase::Idle);
        assert_eq!(sup.retry_count(), 0);
        assert_eq!(sup.scheduled_delay(), None);
    }
}
