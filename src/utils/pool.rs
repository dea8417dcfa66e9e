//! Explicit worker pool handed to every parallel reduction.
//!
//! Each pool owns exactly the number of worker threads it was built with, so
//! the degree of parallelism is part of the call rather than process-wide
//! state. The calling thread blocks until the forked work joins.

use crate::error::{BenchError, Result};
use rayon::{ThreadPool, ThreadPoolBuilder};

/// A fixed-size fork-join pool.
pub struct WorkerPool {
    pool: ThreadPool,
    threads: usize,
}

impl WorkerPool {
    /// Start a pool with exactly `threads` workers.
    pub fn new(threads: usize) -> Result<Self> {
        // rayon treats 0 as "pick for me"
        if threads == 0 {
            return Err(BenchError::ZeroThreads);
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("dot-worker-{}", i))
            .build()?;

        Ok(Self { pool, threads })
    }

    /// Number of worker threads in this pool
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Run `op` inside the pool so that rayon parallel iterators use its workers.
    pub fn install<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        self.pool.install(op)
    }

    /// Run `op` once on every worker and collect the results in worker order.
    ///
    /// `op` receives `(worker_index, worker_count)`.
    pub fn broadcast<OP, R>(&self, op: OP) -> Vec<R>
    where
        OP: Fn(usize, usize) -> R + Sync,
        R: Send,
    {
        self.pool.broadcast(|ctx| op(ctx.index(), ctx.num_threads()))
    }
}

impl std::fmt::Debug for WorkerPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerPool")
            .field("threads", &self.threads)
            .finish()
    }
}
