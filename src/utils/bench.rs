//! Shared benchmark utilities.
//!
//! Measurements are wall-clock durations from a monotonic clock; the sweep
//! reports them in seconds.

use std::time::{Duration, Instant};

/// Read the current instant
#[inline(always)]
pub fn now() -> Instant {
    Instant::now()
}

/// Time elapsed since `start`
#[inline(always)]
pub fn elapsed(start: Instant) -> Duration {
    start.elapsed()
}

/// Convert a measurement to fractional seconds for display
pub fn to_secs(m: Duration) -> f64 {
    m.as_secs_f64()
}

/// Time a single expression, returning `(elapsed, value)`.
///
/// The value goes through `black_box` so the work is not optimised away.
#[macro_export]
macro_rules! measure {
    ($expr:expr) => {{
        let start = $crate::utils::bench::now();
        let value = ::std::hint::black_box($expr);
        ($crate::utils::bench::elapsed(start), value)
    }};
}
