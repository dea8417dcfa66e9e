//! Parallel dot product with the pool's default scheduling.
//!
//! The index range is split adaptively by rayon's work-stealing scheduler, so
//! partition sizes are chosen at runtime.

use rayon::prelude::*;

use crate::error::Result;
use crate::utils::pool::WorkerPool;

use super::check_lengths;

/// Compute the dot product on `pool` without a chunking hint.
///
/// Partial sums are combined in an unspecified order, so the result may
/// differ in the last bits between pool sizes.
pub fn dot_product_default(pool: &WorkerPool, a: &[f64], b: &[f64]) -> Result<f64> {
    check_lengths(a, b)?;

    Ok(pool.install(|| {
        a.par_iter()
            .zip(b.par_iter())
            .map(|(x, y)| x * y)
            .sum::<f64>()
    }))
}
