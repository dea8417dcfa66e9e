//! Uniform input vectors for the dot product sweep.
//!
//! Values are drawn from the open interval `(LOW, HIGH)`. Samples that land
//! on either bound are redrawn so both ends stay excluded.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Exclusive lower bound of generated values
pub const LOW: f64 = 0.1;
/// Exclusive upper bound of generated values
pub const HIGH: f64 = 0.9;

/// Generator of uniformly distributed `f64` vectors.
pub struct UniformVector {
    rng: StdRng,
}

impl UniformVector {
    /// Seed a fresh engine from the operating system's entropy source.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible generator for tests and benches.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw one value strictly inside `(LOW, HIGH)`
    pub fn next_value(&mut self) -> f64 {
        loop {
            let v: f64 = self.rng.random_range(LOW..HIGH);
            if v > LOW && v < HIGH {
                return v;
            }
        }
    }

    /// Fill a freshly allocated vector of `len` values
    pub fn generate(&mut self, len: usize) -> Vec<f64> {
        (0..len).map(|_| self.next_value()).collect()
    }
}

/// Generate `len` values with a newly entropy-seeded engine.
///
/// Two calls yield independent sequences.
pub fn prepare_vector(len: usize) -> Vec<f64> {
    UniformVector::from_entropy().generate(len)
}
