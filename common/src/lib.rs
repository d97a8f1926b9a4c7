//! WPM telemetry core for split keyboards.
//!
//! This crate contains the platform-agnostic logic shared between the
//! simulator and a firmware target:
//!
//! - [`config`]: layout, timing and wire-protocol constants
//! - [`stats`]: WPM history and running statistics aggregation
//! - [`graph`]: pure projection of statistics into a render-ready frame
//! - [`codec`]: the 2-byte split-link wire record for WPM samples
//! - [`split`]: role-aware propagation (central broadcast, peripheral ingest)
//! - [`advertising`]: peripheral advertising restart supervisor
//! - [`widgets`]: the 128x32 monochrome WPM status widget
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` compatible and can be used on embedded targets.
//! Tests build with `std` enabled (via `cfg_attr`) so the standard test
//! harness runs on the host.
//!
//! # Concurrency
//!
//! Everything here assumes a single cooperative event-processing context per
//! device: state machines take `&mut self` and run to completion. A platform
//! that delivers events from multiple execution contexts must wrap the
//! aggregator and supervisor in its own mutual exclusion.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod advertising;
pub mod codec;
pub mod config;
pub mod graph;
pub mod split;
pub mod stats;
pub mod widgets;

// Re-export commonly used items
pub use codec::{Decoded, WPM_OPCODE};
pub use graph::{GraphFrame, GraphGeometry};
pub use stats::{WpmSample, WpmStatistics, WpmStatsAggregator};
