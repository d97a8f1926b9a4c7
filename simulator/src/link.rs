//! In-process loopback implementation of the split link.

use std::collections::VecDeque;

use splitwpm_common::split::{LinkError, SplitLink};

/// Queues frames from the central side for the peripheral side to drain.
///
/// Best-effort like the real transport: while "disconnected" every send
/// fails and the frame is simply gone.
pub struct LoopbackLink {
    queue: VecDeque<Vec<u8>>,
    connected: bool,
}

impl LoopbackLink {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            connected: true,
        }
    }

    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    /// Frames pending delivery to the peripheral.
    pub fn drain(&mut self) -> impl Iterator<Item = Vec<u8>> + '_ {
        self.queue.drain(..)
    }
}

impl SplitLink for LoopbackLink {
    fn send(&mut self, payload: &[u8]) -> Result<(), LinkError> {
        if !self.connected {
            return Err(LinkError::NotConnected);
        }
        self.queue.push_back(payload.to_vec());
        Ok(())
    }
}
