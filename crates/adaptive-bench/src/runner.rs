//! Adaptive benchmark execution
//!
//! The runner picks the batch size on its own. Starting from a rough
//! estimate of a ~1ms batch, every round times `sample_count` batches of `n`
//! calls and `sample_count` batches of `5n` calls, winsorizes both sample
//! sets and compares their summaries. When the two agree the larger batch
//! size is accepted; otherwise `n` doubles and the next round begins.
//!
//! ```text
//!   n = target / ns_per_iter(1 call)
//!   ┌──────────────────────────────────────────────┐
//!   │ 50 × batch(n)  → winsorize → summary_n       │
//!   │ 50 × batch(5n) → winsorize → summary_5n      │
//!   │ round > 100ms && stable?      → converged    │
//!   │ total > 3s?                   → deadline     │
//!   │ n *= 2                                       │
//!   └──────────────────────────────────────────────┘
//! ```
//!
//! The deadline is only checked between rounds, so one slow round can push
//! the total past the budget.
//!
//! # Example
//!
//! ```no_run
//! use adaptive_bench::runner::AdaptiveBencher;
//!
//! let bencher = AdaptiveBencher::new();
//! let samples = bencher.benchmark(|_| {
//!     std::hint::black_box((1..=20u64).product::<u64>());
//! });
//! println!("{:.0} ns/iter", samples.median_ns());
//! ```

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, trace, warn};

use crate::bencher::Bencher;
use crate::config::BenchConfig;
use crate::error::ConfigError;
use crate::stats::{winsorize, Summary};
use crate::throughput::BenchSamples;

/// Results of a named benchmark run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BenchReport {
    /// Name of the benchmark
    pub name: String,
    /// Timestamp when the benchmark started
    pub started_at: String,
    /// Total duration of the run, including the initial estimate
    pub total_duration_ms: u64,
    /// Number of measurement rounds
    pub rounds: u32,
    /// Batch size of the accepted summary
    pub final_batch_size: u64,
    /// Whether the estimate converged before the deadline
    pub converged: bool,
    /// Timing summary and throughput
    pub samples: BenchSamples,
}

/// Outcome of [`AdaptiveBencher::auto_bench`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoBench {
    /// Summary of the larger batch size of the last round
    pub summary: Summary,
    /// Bytes per call reported by the workload in the last batch
    pub bytes: u64,
    /// Number of measurement rounds
    pub rounds: u32,
    /// Batch size `summary` was measured with
    pub batch_size: u64,
    /// `false` when the deadline ended the search
    pub converged: bool,
    /// Wall-clock time spent, including the initial estimate
    pub elapsed: Duration,
}

/// Runs workloads with a self-tuning batch size
#[derive(Debug, Clone, Default)]
pub struct AdaptiveBencher {
    config: BenchConfig,
}

impl AdaptiveBencher {
    /// Bencher with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Bencher with custom tuning
    ///
    /// # Errors
    ///
    /// Returns the first value rejected by [`BenchConfig::validate`].
    pub fn with_config(config: BenchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Run `workload` under `name` and collect a report
    #[instrument(skip(self, workload))]
    pub fn run<F>(&self, name: &str, workload: F) -> BenchReport
    where
        F: FnMut(&mut Bencher),
    {
        let started_at = chrono::Utc::now().to_rfc3339();
        let outcome = self.auto_bench(workload);
        let samples = BenchSamples::new(outcome.summary, outcome.bytes);

        info!(
            "Benchmark '{}' finished: {:.1} ns/iter after {} rounds",
            name,
            samples.median_ns(),
            outcome.rounds
        );

        BenchReport {
            name: name.to_string(),
            started_at,
            total_duration_ms: outcome.elapsed.as_millis() as u64,
            rounds: outcome.rounds,
            final_batch_size: outcome.batch_size,
            converged: outcome.converged,
            samples,
        }
    }

    /// Run `workload` and combine its summary with its reported byte count
    pub fn benchmark<F>(&self, workload: F) -> BenchSamples
    where
        F: FnMut(&mut Bencher),
    {
        let outcome = self.auto_bench(workload);
        BenchSamples::new(outcome.summary, outcome.bytes)
    }

    /// Search for a stable per-iteration estimate of `workload`
    ///
    /// Never fails: when the deadline passes before the estimate settles,
    /// the latest summary is returned with `converged == false`.
    #[instrument(skip_all)]
    pub fn auto_bench<F>(&self, mut workload: F) -> AutoBench
    where
        F: FnMut(&mut Bencher),
    {
        let start = Instant::now();
        let mut bencher = Bencher::new();

        // ballpark figure from a single call
        bencher.bench_n(1, &mut workload);
        let mut n = self.initial_batch_size(bencher.ns_per_iter());
        debug!(
            first_call_ns = bencher.ns_per_iter(),
            batch_size = n,
            "Estimated initial batch size"
        );

        let mut samples = vec![0.0; self.config.sample_count];
        let mut total_run = Duration::ZERO;
        let mut rounds = 0u32;

        loop {
            rounds += 1;
            let round_start = Instant::now();

            let summary = self.sample_batches(&mut bencher, &mut workload, n, &mut samples);
            let wide_n = n.saturating_mul(self.config.batch_multiplier);
            let wide = self.sample_batches(&mut bencher, &mut workload, wide_n, &mut samples);

            let round_run = round_start.elapsed();
            debug!(
                round = rounds,
                batch_size = n,
                median = summary.median,
                wide_median = wide.median,
                mad_pct = summary.median_abs_dev_pct,
                round_ms = round_run.as_millis() as u64,
                "Measurement round complete"
            );

            let mut outcome = AutoBench {
                summary: wide,
                bytes: bencher.bytes(),
                rounds,
                batch_size: wide_n,
                converged: false,
                elapsed: Duration::ZERO,
            };

            if self.accepts_round(round_run, &summary, &wide) {
                outcome.converged = true;
                outcome.elapsed = start.elapsed();
                info!(
                    "Converged on {:.1} ns/iter at batch size {} after {} rounds",
                    wide.median, wide_n, rounds
                );
                return outcome;
            }

            total_run += round_run;
            if total_run > self.config.max_total {
                outcome.elapsed = start.elapsed();
                warn!(
                    "No stable estimate within {:?}; using {:.1} ns/iter from batch size {}",
                    self.config.max_total, wide.median, wide_n
                );
                return outcome;
            }

            n = n.saturating_mul(2);
        }
    }

    /// Batch size that should take roughly `target_batch`, never below 1
    fn initial_batch_size(&self, ns_per_iter: u64) -> u64 {
        let target = self.config.target_batch_ns();
        let n = if ns_per_iter == 0 {
            target
        } else {
            target / ns_per_iter.max(1)
        };
        n.max(1)
    }

    /// Fill `samples` with per-iteration times of batches of `n` calls and
    /// summarize them after winsorizing
    fn sample_batches<F>(
        &self,
        bencher: &mut Bencher,
        workload: &mut F,
        n: u64,
        samples: &mut [f64],
    ) -> Summary
    where
        F: FnMut(&mut Bencher),
    {
        for sample in samples.iter_mut() {
            *sample = bencher.bench_n(n, workload).ns_per_iter();
        }

        let clamped = winsorize(samples, self.config.winsorize_pct);
        trace!(batch_size = n, clamped, "Winsorized samples");

        Summary::with_deviation(samples, self.config.deviation)
    }

    /// A round settles the estimate once it ran longer than `min_round` and
    /// its two summaries agree
    fn accepts_round(&self, round_run: Duration, summary: &Summary, wide: &Summary) -> bool {
        round_run > self.config.min_round && self.is_converged(summary, wide)
    }

    /// The narrow summary is tight and the wide median lies within the wide
    /// MAD of it
    fn is_converged(&self, summary: &Summary, wide: &Summary) -> bool {
        summary.median_abs_dev_pct < self.config.max_mad_pct
            && (summary.median - wide.median).abs() < wide.median_abs_dev
    }
}

/// Benchmark `workload` with the default configuration
///
/// # Example
///
/// ```no_run
/// let samples = adaptive_bench::benchmark(|b| {
///     let buf = vec![0u8; 1024];
///     b.set_bytes(buf.len() as u64);
///     std::hint::black_box(buf);
/// });
/// assert!(samples.mb_s.is_some());
/// ```
pub fn benchmark<F>(workload: F) -> BenchSamples
where
    F: FnMut(&mut Bencher),
{
    AdaptiveBencher::new().benchmark(workload)
}
