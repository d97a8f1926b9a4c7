//! Split-keyboard WPM telemetry simulator.
//!
//! Runs both split roles in one process, connected by a loopback link:
//!
//! - Central: fake typing signal -> stats aggregator -> WPM broadcast
//! - Peripheral: decode -> aggregator -> notification -> widget render
//!
//! The advertising supervisor runs alongside against a scripted advertiser
//! that fails its first attempts, exercising the backoff path. The display is
//! a headless `SimulatorDisplay`, inspected in memory at the end of the run.
//!
//! One simulation tick stands in for one second; the WPM source updates once
//! per tick like the firmware's periodic WPM notifications.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

mod advertiser;
mod bus;
mod link;

use std::time::Duration;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::SimulatorDisplay;
use log::{info, warn};
use splitwpm_common::advertising::{AdvertisingPhase, AdvertisingSupervisor};
use splitwpm_common::config::{
    GRAPH_HEIGHT, GRAPH_MARGIN_LEFT, GRAPH_MARGIN_TOP, GRAPH_WIDTH, WIDGET_HEIGHT, WIDGET_WIDTH,
};
use splitwpm_common::graph::{GraphGeometry, project};
use splitwpm_common::split::SplitPeripheralRssiChanged;
use splitwpm_common::split::central::CentralWpmPropagator;
use splitwpm_common::split::peripheral::PeripheralWpmPropagator;
use splitwpm_common::stats::{WpmSample, WpmStatsAggregator};
use splitwpm_common::widgets::draw_wpm_status;

use crate::advertiser::ScriptedAdvertiser;
use crate::bus::SnapshotBus;
use crate::link::LoopbackLink;

/// Simulated wall-clock per tick.
const TICK: Duration = Duration::from_secs(1);

/// Total simulated ticks (enough for a full history window plus the
/// advertising retry sequence).
const TICKS: u32 = 90;

/// Link outage window exercising the central's log-and-drop path.
const OUTAGE: std::ops::Range<u32> = 40..43;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Central side
    let mut central_agg = WpmStatsAggregator::new();
    let central = CentralWpmPropagator::new();
    let mut link = LoopbackLink::new();

    // Peripheral side
    let mut peripheral = PeripheralWpmPropagator::new();
    let mut bus = SnapshotBus::new();
    let mut display: SimulatorDisplay<BinaryColor> =
        SimulatorDisplay::new(Size::new(WIDGET_WIDTH, WIDGET_HEIGHT));
    let geometry = GraphGeometry {
        width: GRAPH_WIDTH,
        height: GRAPH_HEIGHT,
        margin_left: GRAPH_MARGIN_LEFT,
        margin_top: GRAPH_MARGIN_TOP,
    };

    // Advertising: first two restart attempts fail, then it sticks
    let mut supervisor = AdvertisingSupervisor::new();
    let mut advertiser = ScriptedAdvertiser::failing(2);
    let mut pending_ticks: Option<u64> = None;

    let mut frames_drawn = 0u32;

    for tick in 0..TICKS {
        // --- Central: new WPM reading, broadcast to the peripheral ---
        let wpm = typing_signal(tick);
        let stats = central_agg.ingest(WpmSample::new(wpm));
        central.on_wpm_changed(stats.current, &mut link);

        // --- Link outage window ---
        if tick == OUTAGE.start {
            warn!("tick {tick}: simulating link outage");
            link.set_connected(false);
        }
        if tick == OUTAGE.end {
            info!("tick {tick}: link restored");
            link.set_connected(true);
        }

        // --- Peripheral: drain the link, render on fresh snapshots ---
        let payloads: Vec<Vec<u8>> = link.drain().collect();
        for payload in payloads {
            peripheral.on_link_payload(&payload, &mut bus);
        }
        if let Some(event) = bus.take() {
            let history = peripheral.aggregator().history().chronological();
            let frame = project(&history, &event.stats, &geometry);
            draw_wpm_status(&mut display, &frame);
            frames_drawn += 1;

            if tick % 10 == 0 {
                info!(
                    "tick {tick}: wpm={} max={} avg={} scale={}",
                    event.stats.current,
                    event.stats.max,
                    event.stats.average(),
                    frame.scale_max
                );
            }
        }

        // --- Advertising supervisor, driven by the tick clock ---
        if tick == 3 {
            advertiser.stop();
            pending_ticks = Some(supervisor.on_connected().as_secs());
        }
        if tick == 60 {
            info!("tick {tick}: peripheral link dropped");
            supervisor.on_disconnected();
            pending_ticks = None;
        }
        if tick == 63 {
            advertiser.stop();
            pending_ticks = Some(supervisor.on_connected().as_secs());
        }
        if let Some(remaining) = pending_ticks.as_mut() {
            *remaining = remaining.saturating_sub(TICK.as_secs());
            if *remaining == 0 {
                pending_ticks = supervisor.on_timer_elapsed(&mut advertiser).map(|d| d.as_secs());
            }
        }

        // --- Host-side RSSI monitor, works only while the peripheral beacons ---
        if supervisor.phase() == AdvertisingPhase::Advertising && tick % 10 == 5 {
            let reading = SplitPeripheralRssiChanged {
                source: 0,
                rssi: rssi_signal(tick),
            };
            info!("tick {tick}: peripheral {} RSSI {} dBm", reading.source, reading.rssi);
        }
    }

    let lit = lit_pixels(&display);
    info!(
        "simulation done: {frames_drawn} frames drawn, {} notifications, {} advertising attempts, phase {:?}, {lit} lit pixels",
        bus.published(),
        advertiser.attempts,
        supervisor.phase()
    );

    assert!(frames_drawn > 0, "no frames rendered");
    assert!(lit > 0, "widget drew nothing");
    assert_eq!(supervisor.phase(), AdvertisingPhase::Advertising);
}

/// Fake typing cadence: bursts of activity with idle gaps, so the average
/// visibly excludes the zero samples.
fn typing_signal(tick: u32) -> u8 {
    if tick % 30 >= 24 {
        return 0;
    }
    let t = f64::from(tick);
    let normalized = (t * 0.35).sin().mul_add(0.5, 0.5);
    (25.0 + normalized * 70.0) as u8
}

/// Fake signal strength wandering between -40 and -70 dBm.
fn rssi_signal(tick: u32) -> i8 {
    let t = f64::from(tick);
    (-55.0 + (t * 0.2).sin() * 15.0) as i8
}

fn lit_pixels(display: &SimulatorDisplay<BinaryColor>) -> u32 {
    let mut lit = 0;
    for y in 0..WIDGET_HEIGHT as i32 {
        for x in 0..WIDGET_WIDTH as i32 {
            if display.get_pixel(Point::new(x, y)) == BinaryColor::On {
                lit += 1;
            }
        }
    }
    lit
}
