//! Split-link propagation of WPM telemetry.
//!
//! The central half of the keyboard owns the input and computes WPM; the
//! peripheral half drives the display. [`central::CentralWpmPropagator`]
//! pushes each new value over the split link, [`peripheral::PeripheralWpmPropagator`]
//! ingests it on the other side and republishes a local notification for the
//! display widgets.
//!
//! The channel is best-effort and at-most-once: no acknowledgement, no
//! sequence numbers. Every record fully supersedes the previous value, so a
//! dropped frame self-heals on the next update.

pub mod central;
pub mod peripheral;

use core::fmt;

use crate::stats::WpmStatistics;

/// Transport capability connecting the two split roles.
///
/// `send` addresses all connected peripherals. A returned `Ok(())` means the
/// frame was handed to the transport, never that it was delivered.
pub trait SplitLink {
    fn send(&mut self, payload: &[u8]) -> Result<(), LinkError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkError {
    /// No peripheral is currently connected.
    NotConnected,
    /// The transport refused or dropped the frame.
    TransportFailure,
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotConnected => write!(f, "no peripheral connected"),
            Self::TransportFailure => write!(f, "transport failure"),
        }
    }
}

/// Local notification published on the peripheral after a fresh sample was
/// ingested, decoupling transport reception from rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WpmStateChanged {
    pub stats: WpmStatistics,
}

/// Signal-strength reading for one peripheral, produced by the host-side RSSI
/// monitor that the advertising supervisor keeps alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitPeripheralRssiChanged {
    /// Peripheral index (0, 1, ...).
    pub source: u8,
    /// Measured RSSI in dBm, typically -30..=-90.
    pub rssi: i8,
}

/// Notification dispatch capability. Subscription wiring lives in the
/// platform glue; the core only needs the publish seam.
pub trait EventBus {
    fn publish(&mut self, event: WpmStateChanged);
}

// =============================================================================
// End-to-end Tests
// =============================================================================
