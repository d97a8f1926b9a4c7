//! Wire codec for the split-link WPM record.
//!
//! The split channel is shared with other message types, so the first byte is
//! a sentinel opcode. A frame with a foreign opcode is not an error: it simply
//! belongs to someone else and decodes to [`Decoded::NotApplicable`].
//!
//! Record layout: `[WPM_OPCODE, value]` — no versioning, no checksum; the
//! transport below is already authenticated and per-message atomic.

use core::fmt;

pub use crate::config::WPM_OPCODE;
use crate::config::WPM_MESSAGE_LEN;
use crate::stats::WpmSample;

/// Outcome of decoding a well-formed frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded {
    /// The frame carried a WPM sample.
    Sample(WpmSample),
    /// The frame belongs to another message type on the shared channel.
    NotApplicable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Frame shorter than the fixed record length.
    MalformedMessage,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedMessage => write!(f, "malformed WPM message"),
        }
    }
}

/// Encode a WPM value into the 2-byte wire record.
pub fn encode(value: u8) -> [u8; WPM_MESSAGE_LEN] {
    [WPM_OPCODE, value]
}

/// Decode an inbound frame from the split channel.
pub fn decode(bytes: &[u8]) -> Result<Decoded, DecodeError> {
    if bytes.len() < WPM_MESSAGE_LEN {
        return Err(DecodeError::MalformedMessage);
    }
    if bytes[0] != WPM_OPCODE {
        return Ok(Decoded::NotApplicable);
    }
    Ok(Decoded::Sample(WpmSample::new(bytes[1])))
}

// =============================================================================
// Unit Tests
// =============================================================================
