//! Runs the full reduction sweep.
//!
//! Usage:
//!   dot-sweep                 # records on stdout, header and logs on stderr
//!   dot-sweep > results.csv   # capture only the records
//!   RUST_LOG=debug dot-sweep  # per-combination log lines

use std::io;

use anyhow::Context;
use parallel_dot_bench::math::dot_product;
use parallel_dot_bench::utils::{BenchConfig, WorkerPool};
use parallel_dot_bench::{run_sweep, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = BenchConfig::default();
    tui::print_header(&config);

    // Cheap self-check before hours of timing
    let check_pool = WorkerPool::new(4).context("starting verification pool")?;
    dot_product::verify(&check_pool, config.chunk_size).context("variant self-check")?;
    drop(check_pool);
    info!("variants agree with the sequential reference");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let written = run_sweep(&config, &mut out).context("benchmark sweep failed")?;
    info!(records = written, expected = config.combinations(), "done");

    tui::wait_for_exit().context("reading stdin")?;
    Ok(())
}
