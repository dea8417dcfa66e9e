//! # Parallel-Dot-Bench
//!
//! Benchmarks two parallel reduction strategies for the dot product of large
//! `f64` vectors: default (adaptive) scheduling and static round-robin
//! chunking. The sweep runs every combination of vector size and worker count
//! and reports mean wall-clock times.

pub mod error;
pub mod math;
pub mod random;
pub mod utils;

pub use error::{BenchError, Result};

/// Re-export tui from utils
pub use utils::tui;

/// Re-export run_sweep from utils::runner
pub use utils::runner::run_sweep;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::error::{BenchError, Result};
    pub use crate::math::dot_product;
    pub use crate::math::dot_product::{parallel_dot, Schedule};
    pub use crate::random::{prepare_vector, UniformVector};
    pub use crate::utils::{BenchConfig, ResultRecord, WorkerPool};
}
