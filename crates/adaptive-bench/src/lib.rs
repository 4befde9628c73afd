//! Adaptive micro-benchmark harness
//!
//! This crate measures the steady-state cost of one call of a workload
//! without asking for an iteration count. It grows the batch size until the
//! per-iteration estimate stops moving, or until a time budget runs out.
//!
//! # Features
//!
//! - **Adaptive batch sizing**: batches start around 1ms and double each round
//! - **Robust statistics**: interpolated percentiles, winsorizing, median absolute deviation
//! - **Throughput**: workloads can report bytes processed per call
//! - **Multiple Output Formats**: Console and JSON reports
//!
//! # Example
//!
//! ```no_run
//! use adaptive_bench::{reporter::{OutputFormat, Reporter}, runner::AdaptiveBencher};
//!
//! # fn example() -> anyhow::Result<()> {
//! let bencher = AdaptiveBencher::new();
//! let report = bencher.run("sum", |b| {
//!     let data = [1u64; 256];
//!     b.set_bytes(std::mem::size_of_val(&data) as u64);
//!     std::hint::black_box(data.iter().sum::<u64>());
//! });
//!
//! Reporter::new(OutputFormat::Console).report(&[report])?;
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! The search can be tuned with a TOML file, see [`config::BenchConfig`]:
//!
//! ```toml
//! sample_count = 50
//! winsorize_pct = 5.0
//! max_total_ms = 3000
//! ```

pub mod bencher;
pub mod config;
pub mod error;
pub mod reporter;
pub mod runner;
pub mod stats;
pub mod throughput;

// Re-export main types for convenience
pub use bencher::{BatchRun, Bencher};
pub use config::BenchConfig;
pub use error::ConfigError;
pub use reporter::{OutputFormat, Reporter};
pub use runner::{benchmark, AdaptiveBencher, AutoBench, BenchReport};
pub use stats::{Deviation, Summary};
pub use throughput::BenchSamples;
