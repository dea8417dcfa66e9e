//! Sweep driver: sizes × thread counts × repeated runs.
//!
//! For every vector size the two operands are generated once. For every
//! thread count a pool of that size is built, both variants are timed, and
//! one record is written to the sink straight away.

use std::io::Write;

use tracing::{debug, info};

use crate::error::Result;
use crate::math::dot_product::bench::time_schedule;
use crate::math::dot_product::code::{Schedule, DEFAULT_CHUNK_SIZE};
use crate::random::prepare_vector;
use crate::utils::pool::WorkerPool;

/// Parameters of one sweep.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchConfig {
    /// Vector lengths, outer loop
    pub vector_sizes: Vec<usize>,
    /// Worker counts, inner loop
    pub thread_counts: Vec<usize>,
    /// Timed calls per variant per combination
    pub runs: usize,
    /// Chunk size of the static schedule
    pub chunk_size: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            vector_sizes: vec![
                1_000_000,
                10_000_000,
                100_000_000,
                500_000_000,
                1_000_000_000,
            ],
            thread_counts: vec![1, 2, 4, 8, 16, 24, 32, 64, 128, 256, 512, 1024],
            runs: 5,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl BenchConfig {
    /// Number of records a full sweep emits
    pub fn combinations(&self) -> usize {
        self.vector_sizes.len() * self.thread_counts.len()
    }
}

/// Outcome of one (size, threads) combination.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResultRecord {
    pub size: usize,
    pub threads: usize,
    /// Mean seconds of the default schedule
    pub avg_default: f64,
    /// Mean seconds of the static chunked schedule
    pub avg_static: f64,
}

impl ResultRecord {
    /// `avg_default - avg_static`
    pub fn time_diff(&self) -> f64 {
        self.avg_default - self.avg_static
    }
}

/// Time both variants on an existing pool.
pub fn run_combination(
    pool: &WorkerPool,
    a: &[f64],
    b: &[f64],
    runs: usize,
    chunk: usize,
) -> Result<ResultRecord> {
    let (avg_default, default_value) = time_schedule(pool, Schedule::Default, a, b, runs)?;
    let (avg_static, static_value) = time_schedule(pool, Schedule::Static { chunk }, a, b, runs)?;

    debug!(
        threads = pool.threads(),
        ?default_value,
        ?static_value,
        "reduction results"
    );

    Ok(ResultRecord {
        size: a.len(),
        threads: pool.threads(),
        avg_default,
        avg_static,
    })
}

/// Run the whole sweep, writing one line per combination to `out`.
///
/// Returns the number of records written.
pub fn run_sweep<W: Write>(config: &BenchConfig, out: &mut W) -> Result<usize> {
    let mut written = 0;

    for &size in &config.vector_sizes {
        info!(size, "generating input vectors");
        let a = prepare_vector(size);
        let b = prepare_vector(size);

        for &threads in &config.thread_counts {
            let pool = WorkerPool::new(threads)?;
            let record = run_combination(&pool, &a, &b, config.runs, config.chunk_size)?;

            debug!(
                size,
                threads,
                avg_default = record.avg_default,
                avg_static = record.avg_static,
                "combination finished"
            );

            writeln!(out, "{}", record)?;
            out.flush()?;
            written += 1;
        }
    }

    info!(records = written, "sweep complete");
    Ok(written)
}
