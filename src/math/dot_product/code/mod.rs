//! Dot product implementations.
//!
//! This module contains the sequential reference and both parallel
//! scheduling variants.

mod default_schedule;
mod original;
mod static_chunked;

pub use default_schedule::dot_product_default;
pub use original::dot_product_original;
pub use static_chunked::{dot_product_static_chunked, DEFAULT_CHUNK_SIZE};

use crate::error::{BenchError, Result};
use crate::utils::pool::WorkerPool;

/// How the index range is distributed over the pool's workers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Schedule {
    /// Runtime-chosen adaptive partitioning
    Default,
    /// Fixed-size contiguous chunks dealt round-robin to workers
    Static { chunk: usize },
}

/// Compute the dot product of `a` and `b` on `pool` using `schedule`.
pub fn parallel_dot(pool: &WorkerPool, schedule: Schedule, a: &[f64], b: &[f64]) -> Result<f64> {
    match schedule {
        Schedule::Default => dot_product_default(pool, a, b),
        Schedule::Static { chunk } => dot_product_static_chunked(pool, chunk, a, b),
    }
}

pub(crate) fn check_lengths(a: &[f64], b: &[f64]) -> Result<()> {
    if a.len() != b.len() {
        return Err(BenchError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

/// Information about a parallel variant.
#[derive(Clone, Copy, Debug)]
pub struct VariantInfo {
    /// Unique identifier for this variant (e.g., "default", "static_chunked")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Scheduling strategy the variant runs with
    pub schedule: Schedule,
}

/// The two parallel variants compared by the sweep, in output order.
pub fn available_variants(chunk: usize) -> Vec<VariantInfo> {
    vec![
        VariantInfo {
            name: "default",
            description: "Parallel reduction with default (adaptive) scheduling",
            schedule: Schedule::Default,
        },
        VariantInfo {
            name: "static_chunked",
            description: "Parallel reduction with static round-robin chunks",
            schedule: Schedule::Static { chunk },
        },
    ]
}
