//! Original (reference) implementation of dot product.
//!
//! A single-threaded left-to-right sum that serves as the baseline for
//! checking the parallel variants.

use crate::error::Result;

use super::check_lengths;

/// Compute the dot product of two vectors sequentially.
///
/// # Errors
/// Returns `LengthMismatch` if the vectors have different lengths.
///
/// # Example
/// ```
/// use parallel_dot_bench::math::dot_product::dot_product_original;
///
/// let a = [1.0, 2.0, 3.0];
/// let b = [4.0, 5.0, 6.0];
/// let result = dot_product_original(&a, &b).unwrap();
/// assert!((result - 32.0).abs() < 1e-12);
/// ```
pub fn dot_product_original(a: &[f64], b: &[f64]) -> Result<f64> {
    check_lengths(a, b)?;

    Ok(a.iter().zip(b.iter()).map(|(x, y)| x * y).sum())
}
