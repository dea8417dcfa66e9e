//! # Dot Product Algorithm
//!
//! The dot product (also known as scalar product) computes the sum of products
//! of corresponding elements in two vectors:
//!
//! `dot(a, b) = Σ(a[i] * b[i])`
//!
//! ## Scheduling Strategies
//!
//! - **Default**: the pool's work-stealing scheduler picks partition sizes
//! - **Static chunked**: fixed 10-element chunks dealt round-robin to workers,
//!   never rebalanced
//!
//! Both strategies compute the same value up to floating-point summation order.

pub mod bench;
pub mod code;
#[cfg(test)]
mod test;

pub use code::*;

use crate::error::{BenchError, Result};
use crate::random::UniformVector;
use crate::utils::pool::WorkerPool;

/// Relative tolerance when comparing a parallel result to the sequential one
pub const RELATIVE_TOLERANCE: f64 = 1e-9;

/// Whether `actual` is within summation-order noise of `expected`.
pub fn approx_eq(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= RELATIVE_TOLERANCE * expected.abs().max(1.0)
}

/// Verify both parallel variants against the sequential reference on `pool`.
pub fn verify(pool: &WorkerPool, chunk: usize) -> Result<()> {
    // Use a size that is not a multiple of the chunk to hit the tail
    let size = 10_007;
    let mut generator = UniformVector::from_entropy();
    let a = generator.generate(size);
    let b = generator.generate(size);

    let expected = dot_product_original(&a, &b)?;

    for variant in available_variants(chunk) {
        let actual = parallel_dot(pool, variant.schedule, &a, &b)?;
        if !approx_eq(actual, expected) {
            return Err(BenchError::Verification {
                variant: variant.name,
                expected,
                actual,
            });
        }
    }

    Ok(())
}
