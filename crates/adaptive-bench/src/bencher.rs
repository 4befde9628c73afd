//! Per-batch timing handle handed to workloads.
//!
//! A workload is any `FnMut(&mut Bencher)`. The harness calls it `n` times in
//! a row and attributes the wall-clock span of the whole batch to it; the
//! workload may record how many bytes one call processes with
//! [`Bencher::set_bytes`] so that throughput can be reported.

use std::hint::black_box;
use std::time::{Duration, Instant};

/// Counters for the batch currently being timed.
///
/// All counters are reset at the start of every batch.
#[derive(Debug, Default)]
pub struct Bencher {
    iterations: u64,
    elapsed: Duration,
    bytes: u64,
}

/// Outcome of one timed batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchRun {
    /// Number of workload calls in the batch
    pub iterations: u64,
    /// Wall-clock time of the whole batch
    pub elapsed: Duration,
    /// Bytes processed per call, as last reported by the workload
    pub bytes: u64,
}

impl BatchRun {
    /// Average time per call in nanoseconds, `0.0` for an empty batch.
    pub fn ns_per_iter(&self) -> f64 {
        if self.iterations == 0 {
            0.0
        } else {
            self.elapsed.as_nanos() as f64 / self.iterations as f64
        }
    }
}

impl Bencher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record how many bytes one call of the workload processes.
    ///
    /// Only the last value written during a batch is kept.
    pub fn set_bytes(&mut self, bytes: u64) {
        self.bytes = bytes;
    }

    pub fn bytes(&self) -> u64 {
        self.bytes
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Whole nanoseconds per call of the last batch, truncated.
    ///
    /// Returns 0 when no batch has run, or when the batch was too fast for
    /// the clock to register a full nanosecond per call.
    pub fn ns_per_iter(&self) -> u64 {
        if self.iterations == 0 {
            return 0;
        }
        let per_iter = self.elapsed.as_nanos() / u128::from(self.iterations);
        per_iter.min(u128::from(u64::MAX)) as u64
    }

    /// Time `iterations` consecutive calls of `workload`.
    pub fn bench_n<F>(&mut self, iterations: u64, workload: &mut F) -> BatchRun
    where
        F: FnMut(&mut Bencher),
    {
        self.iterations = iterations;
        self.elapsed = Duration::ZERO;
        self.bytes = 0;

        // black_box keeps an empty workload from collapsing the loop
        let start = Instant::now();
        for _ in 0..iterations {
            workload(black_box(&mut *self));
        }
        self.elapsed = start.elapsed();

        BatchRun {
            iterations: self.iterations,
            elapsed: self.elapsed,
            bytes: self.bytes,
        }
    }
}
