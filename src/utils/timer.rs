//! Repeated timing of a single variant.
//!
//! A variant is run a fixed number of times back to back and the wall-clock
//! durations are averaged. No spread statistics are kept.

use std::time::Duration;

use super::bench::{elapsed, now, to_secs};

/// Running sum of elapsed durations over a fixed repetition count.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TimingAccumulator {
    total: Duration,
    samples: u32,
}

impl TimingAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one measurement
    pub fn record(&mut self, sample: Duration) {
        self.total = self.total.saturating_add(sample);
        self.samples += 1;
    }

    /// Number of recorded measurements
    pub fn samples(&self) -> u32 {
        self.samples
    }

    /// Sum of all recorded measurements
    pub fn total(&self) -> Duration {
        self.total
    }

    /// Mean in seconds, 0.0 when nothing was recorded
    pub fn average_secs(&self) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }
        to_secs(self.total) / f64::from(self.samples)
    }
}

/// Run `op` `runs` times and return the average wall-clock time in seconds
/// together with the value of the last run.
///
/// The first error aborts the loop.
pub fn time_runs<T, E, F>(runs: usize, mut op: F) -> Result<(f64, Option<T>), E>
where
    F: FnMut() -> Result<T, E>,
{
    let mut acc = TimingAccumulator::new();
    let mut last = None;

    for _ in 0..runs {
        let start = now();
        let value = std::hint::black_box(op()?);
        acc.record(elapsed(start));
        last = Some(value);
    }

    Ok((acc.average_secs(), last))
}
