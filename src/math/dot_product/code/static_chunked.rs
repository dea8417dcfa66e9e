//! Parallel dot product with static round-robin chunking.
//!
//! The range is cut into contiguous chunks of `chunk` elements. Chunk `k`
//! belongs to worker `k % workers`; nothing is rebalanced at runtime. Each
//! worker keeps a private running sum over its chunks and the partials are
//! added together after the join.

use crate::error::{BenchError, Result};
use crate::utils::pool::WorkerPool;

use super::check_lengths;

/// Chunk size used by the sweep
pub const DEFAULT_CHUNK_SIZE: usize = 10;

/// Compute the dot product on `pool` with a static schedule of `chunk`-sized blocks.
///
/// # Errors
/// `LengthMismatch` for unequal operands, `ZeroChunk` if `chunk == 0`.
pub fn dot_product_static_chunked(
    pool: &WorkerPool,
    chunk: usize,
    a: &[f64],
    b: &[f64],
) -> Result<f64> {
    check_lengths(a, b)?;
    if chunk == 0 {
        return Err(BenchError::ZeroChunk);
    }

    let partials = pool.broadcast(|worker, workers| worker_partial(a, b, chunk, worker, workers));

    Ok(partials.into_iter().sum())
}

/// Sum of products over the chunks owned by `worker`.
fn worker_partial(a: &[f64], b: &[f64], chunk: usize, worker: usize, workers: usize) -> f64 {
    let mut sum = 0.0;

    for (ca, cb) in a
        .chunks(chunk)
        .zip(b.chunks(chunk))
        .skip(worker)
        .step_by(workers)
    {
        for (x, y) in ca.iter().zip(cb) {
            sum += x * y;
        }
    }

    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_robin_ownership() {
        // 25 elements, chunk 10 -> chunks [0..10), [10..20), [20..25)
        let a: Vec<f64> = (0..25).map(|i| i as f64).collect();
        let b = vec![1.0; 25];

        let w0 = worker_partial(&a, &b, 10, 0, 2);
        let w1 = worker_partial(&a, &b, 10, 1, 2);

        let first: f64 = (0..10).map(|i| i as f64).sum();
        let second: f64 = (10..20).map(|i| i as f64).sum();
        let third: f64 = (20..25).map(|i| i as f64).sum();

        assert_eq!(w0, first + third);
        assert_eq!(w1, second);
    }

    #[test]
    fn test_idle_workers_contribute_zero() {
        let a = [1.0, 2.0, 3.0];
        let b = [1.0, 1.0, 1.0];
        // one chunk, eight workers: only worker 0 has work
        assert_eq!(worker_partial(&a, &b, 10, 0, 8), 6.0);
        for w in 1..8 {
            assert_eq!(worker_partial(&a, &b, 10, w, 8), 0.0);
        }
    }
}
