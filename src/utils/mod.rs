//! Utility modules for benchmarking and execution.

pub mod bench;
pub mod pool;
pub mod runner;
pub mod timer;
pub mod tui;

// Re-export commonly used items
pub use bench::{elapsed, now, to_secs};
pub use pool::WorkerPool;
pub use runner::{run_combination, run_sweep, BenchConfig, ResultRecord};
pub use timer::{time_runs, TimingAccumulator};
