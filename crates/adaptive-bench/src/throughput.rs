//! Timing summary combined with byte throughput.

use serde::{Deserialize, Serialize};

use crate::stats::Summary;

/// Final result of a benchmark: the per-iteration timing summary and, when
/// the workload reported a byte count, its throughput.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BenchSamples {
    /// Nanoseconds-per-iteration summary
    pub ns_iter_summ: Summary,
    /// Throughput in megabytes (10^6 bytes) per second
    pub mb_s: Option<f64>,
}

impl BenchSamples {
    /// Combine a timing summary with the bytes processed per iteration.
    ///
    /// A zero byte count yields no throughput figure.
    ///
    /// # Examples
    ///
    /// ```
    /// use adaptive_bench::{stats::Summary, BenchSamples};
    ///
    /// // 1000 bytes every 500ns is 2 million iterations per second
    /// let summary = Summary::new(&[500.0]);
    /// let samples = BenchSamples::new(summary, 1000);
    /// assert_eq!(samples.mb_s, Some(2000.0));
    /// ```
    pub fn new(ns_iter_summ: Summary, bytes_per_iter: u64) -> Self {
        let mb_s = if bytes_per_iter == 0 {
            None
        } else {
            Some(bytes_per_iter as f64 * iterations_per_second(ns_iter_summ.median) / 1e6)
        };
        Self { ns_iter_summ, mb_s }
    }

    /// Median nanoseconds per iteration
    pub fn median_ns(&self) -> f64 {
        self.ns_iter_summ.median
    }

    /// `max - min` of the accepted samples, in nanoseconds
    pub fn spread_ns(&self) -> f64 {
        self.ns_iter_summ.spread()
    }
}

/// Iterations per second for a median per-iteration time, which is floored
/// at 1ns so sub-nanosecond and zero medians stay finite.
pub fn iterations_per_second(median_ns: f64) -> f64 {
    1e9 / median_ns.max(1.0)
}
