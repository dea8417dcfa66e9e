//! Error types for the reduction benchmarks

use thiserror::Error;

/// Result type for benchmark operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur while reducing or running the sweep
#[derive(Debug, Error)]
pub enum BenchError {
    /// The two operands of a dot product have different lengths
    #[error("Length mismatch: left operand has {left} elements, right has {right}")]
    LengthMismatch {
        /// Length of the first operand
        left: usize,
        /// Length of the second operand
        right: usize,
    },

    /// A worker pool with no threads was requested
    #[error("Worker pool needs at least one thread")]
    ZeroThreads,

    /// A static schedule was requested with an empty chunk
    #[error("Static schedule chunk size must be at least 1")]
    ZeroChunk,

    /// The thread pool could not be started
    #[error("Failed to build worker pool: {0}")]
    PoolBuild(#[from] rayon::ThreadPoolBuildError),

    /// A variant disagreed with the sequential reference
    #[error("Variant '{variant}' failed verification. Expected {expected}, got {actual}")]
    Verification {
        /// Name of the failing variant
        variant: &'static str,
        /// Sequential reference value
        expected: f64,
        /// Value the variant produced
        actual: f64,
    },

    /// Writing a result record failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
