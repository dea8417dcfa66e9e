//! Benchmark utilities for dot product.

use super::code::{available_variants, parallel_dot, Schedule};
use crate::error::Result;
use crate::utils::pool::WorkerPool;
use crate::utils::timer::time_runs;

/// Average timing of one variant at one pool size
#[derive(Clone, Debug)]
pub struct VariantTiming {
    pub name: &'static str,
    /// Mean wall-clock seconds per call
    pub avg_secs: f64,
    /// Value returned by the last timed call
    pub result_sample: Option<f64>,
}

/// Time `runs` back-to-back calls of one schedule and return the mean in seconds.
pub fn time_schedule(
    pool: &WorkerPool,
    schedule: Schedule,
    a: &[f64],
    b: &[f64],
    runs: usize,
) -> Result<(f64, Option<f64>)> {
    time_runs(runs, || parallel_dot(pool, schedule, a, b))
}

/// Time every variant in order: default first, static chunked second.
pub fn run_all_benchmarks(
    pool: &WorkerPool,
    a: &[f64],
    b: &[f64],
    runs: usize,
    chunk: usize,
) -> Result<Vec<VariantTiming>> {
    available_variants(chunk)
        .into_iter()
        .map(|v| {
            let (avg_secs, result_sample) = time_schedule(pool, v.schedule, a, b, runs)?;
            Ok(VariantTiming {
                name: v.name,
                avg_secs,
                result_sample,
            })
        })
        .collect()
}
