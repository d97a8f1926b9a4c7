//! WPM history and running statistics.
//!
//! One [`WpmStatsAggregator`] instance exists per device role: the central
//! feeds it from the local WPM source, the peripheral feeds it from decoded
//! split-link records. It is an owned struct (not module-level state) so each
//! role, and each test, gets an independent instance with an explicit
//! init/reset lifecycle.

use crate::config::WPM_HISTORY_SIZE;

/// One observed typing-speed reading. The full `u8` range is legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WpmSample {
    pub value: u8,
}

impl WpmSample {
    pub const fn new(value: u8) -> Self {
        Self { value }
    }
}

// =============================================================================
// History
// =============================================================================

/// Fixed-capacity circular buffer of WPM samples.
///
/// Slots are zero-initialized; until the buffer first wraps, the chronological
/// view contains leading zeros, matching a graph that starts flat and fills in
/// from the right.
pub struct WpmHistory {
    buffer: [u8; WPM_HISTORY_SIZE],
    write_index: usize,
    len: usize,
}

impl WpmHistory {
    pub const fn new() -> Self {
        Self {
            buffer: [0; WPM_HISTORY_SIZE],
            write_index: 0,
            len: 0,
        }
    }

    /// Append a sample, overwriting the oldest slot once full.
    pub fn push(&mut self, value: u8) {
        self.buffer[self.write_index] = value;
        self.write_index = (self.write_index + 1) % WPM_HISTORY_SIZE;
        if self.len < WPM_HISTORY_SIZE {
            self.len += 1;
        }
    }

    /// Number of samples ingested so far, capped at the capacity.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// All slots in chronological order, oldest first.
    ///
    /// Always returns the full window (zero-filled before wraparound) so the
    /// graph is drawn with a constant point count.
    pub fn chronological(&self) -> [u8; WPM_HISTORY_SIZE] {
        let mut out = [0; WPM_HISTORY_SIZE];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.buffer[(self.write_index + i) % WPM_HISTORY_SIZE];
        }
        out
    }

    pub fn reset(&mut self) {
        self.buffer = [0; WPM_HISTORY_SIZE];
        self.write_index = 0;
        self.len = 0;
    }
}

impl Default for WpmHistory {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Statistics
// =============================================================================

/// Running aggregates over the ingested samples.
///
/// `max` is monotone within a session (until [`WpmStatsAggregator::reset`]).
/// Zero samples are excluded from the average so idle periods do not drag it
/// toward zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WpmStatistics {
    pub current: u8,
    pub max: u8,
    pub positive_sum: u32,
    pub positive_count: u16,
}

impl WpmStatistics {
    /// Average over the positive samples, 0 when none were seen.
    pub fn average(&self) -> u8 {
        if self.positive_count > 0 {
            (self.positive_sum / u32::from(self.positive_count)) as u8
        } else {
            0
        }
    }
}

// =============================================================================
// Aggregator
// =============================================================================

/// Ingests raw WPM samples and maintains the history window plus running
/// max/average statistics.
///
/// Not reentrant: callers on platforms with concurrent event delivery must
/// serialize `ingest` externally.
pub struct WpmStatsAggregator {
    history: WpmHistory,
    stats: WpmStatistics,
}

impl WpmStatsAggregator {
    pub const fn new() -> Self {
        Self {
            history: WpmHistory::new(),
            stats: WpmStatistics {
                current: 0,
                max: 0,
                positive_sum: 0,
                positive_count: 0,
            },
        }
    }

    /// Record a sample and return the updated statistics snapshot.
    pub fn ingest(&mut self, sample: WpmSample) -> WpmStatistics {
        self.history.push(sample.value);

        self.stats.current = sample.value;
        if sample.value > self.stats.max {
            self.stats.max = sample.value;
        }
        // Stop accumulating once the counter is full: the average freezes
        // instead of wrapping after ~18 hours of continuous 1 Hz samples.
        if sample.value > 0 && self.stats.positive_count < u16::MAX {
            self.stats.positive_sum += u32::from(sample.value);
            self.stats.positive_count += 1;
        }

        self.stats
    }

    /// Latest statistics snapshot without ingesting anything.
    pub fn stats(&self) -> WpmStatistics {
        self.stats
    }

    /// Read-only view of the sample history.
    pub fn history(&self) -> &WpmHistory {
        &self.history
    }

    /// Clear history and statistics, e.g. on widget re-initialization.
    pub fn reset(&mut self) {
        self.history.reset();
        self.stats = WpmStatistics::default();
    }
}

impl Default for WpmStatsAggregator {
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

    #[test]
    fn test_new_aggregator() {
        let agg = WpmStatsAggregator::new();
        assert_eq!(agg.stats(), WpmStatistics::default());
        assert_eq!(agg.history().len(), 0);
        assert!(agg.history().is_empty());
    }

    #[test]
    fn test_ingest_updates_current() {
        let mut agg = WpmStatsAggregator::new();
        let stats = agg.ingest(WpmSample::new(42));
        assert_eq!(stats.current, 42);
        assert_eq!(stats.max, 42);
    }

    #[test]
    fn test_history_circularity() {
        let mut agg = WpmStatsAggregator::new();

        // One more sample than the window holds
        for i in 0..=WPM_HISTORY_SIZE {
            agg.ingest(WpmSample::new((i + 1) as u8));
        }

        assert_eq!(agg.history().len(), WPM_HISTORY_SIZE);

        // Oldest sample (value 1) evicted; order preserved for the rest
        let chron = agg.history().chronological();
        assert_eq!(chron[0], 2);
        assert_eq!(chron[WPM_HISTORY_SIZE - 1], (WPM_HISTORY_SIZE + 1) as u8);
        for pair in chron.windows(2) {
            assert_eq!(pair[1], pair[0] + 1);
        }
    }

    #[test]
    fn test_chronological_zero_filled_before_wrap() {
        let mut agg = WpmStatsAggregator::new();
        agg.ingest(WpmSample::new(10));
        agg.ingest(WpmSample::new(20));

        let chron = agg.history().chronological();
        // Two real samples at the tail, zeros elsewhere
        assert_eq!(chron[WPM_HISTORY_SIZE - 2], 10);
        assert_eq!(chron[WPM_HISTORY_SIZE - 1], 20);
        assert!(chron[..WPM_HISTORY_SIZE - 2].iter().all(|&v| v == 0));
        assert_eq!(agg.history().len(), 2);
    }

    #[test]
    fn test_average_excludes_zeros() {
        let mut agg = WpmStatsAggregator::new();
        for v in [0, 10, 0, 20] {
            agg.ingest(WpmSample::new(v));
        }

        let stats = agg.stats();
        assert_eq!(stats.positive_count, 2);
        assert_eq!(stats.positive_sum, 30);
        assert_eq!(stats.average(), 15);
    }

    #[test]
    fn test_average_zero_when_no_positive_samples() {
        let mut agg = WpmStatsAggregator::new();
        agg.ingest(WpmSample::new(0));
        agg.ingest(WpmSample::new(0));
        assert_eq!(agg.stats().average(), 0);
    }

    #[test]
    fn test_max_monotonicity() {
        let mut agg = WpmStatsAggregator::new();
        let samples = [5u8, 30, 12, 30, 7, 90, 45, 0, 91];

        let mut prev_max = 0u8;
        let mut true_max = 0u8;
        for v in samples {
            let stats = agg.ingest(WpmSample::new(v));
            true_max = true_max.max(v);
            assert!(stats.max >= prev_max);
            assert_eq!(stats.max, true_max);
            prev_max = stats.max;
        }
    }

    #[test]
    fn test_average_freezes_at_counter_capacity() {
        let mut agg = WpmStatsAggregator::new();

        // Run well past the u16 counter: no panic, no wraparound
        for _ in 0..70_000u32 {
            agg.ingest(WpmSample::new(1));
        }

        let stats = agg.stats();
        assert_eq!(stats.positive_count, u16::MAX);
        assert_eq!(stats.positive_sum, u32::from(u16::MAX));
        assert_eq!(stats.average(), 1);

        // Once full, later samples no longer move the average
        agg.ingest(WpmSample::new(200));
        assert_eq!(agg.stats().average(), 1);
        assert_eq!(agg.stats().current, 200);
    }

    #[test]
    fn test_reset() {
        let mut agg = WpmStatsAggregator::new();
        agg.ingest(WpmSample::new(80));
        agg.reset();

        assert_eq!(agg.stats(), WpmStatistics::default());
        assert_eq!(agg.history().len(), 0);
        assert!(agg.history().chronological().iter().all(|&v| v == 0));
    }
}
