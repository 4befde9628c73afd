//! Statistical analysis of timing samples
//!
//! This module provides the robust statistics the bencher relies on:
//! interpolated percentiles, winsorizing, and the median/MAD summary.
//!
//! # Examples
//!
//! ```
//! use adaptive_bench::stats::{winsorize, Summary};
//!
//! // Per-iteration timings in nanoseconds, one of them disturbed by the scheduler
//! let mut samples = vec![101.0, 99.0, 100.0, 102.0, 98.0, 100.0, 450.0];
//!
//! winsorize(&mut samples, 5.0);
//! let summary = Summary::new(&samples);
//! println!("Median: {}ns, spread: {}ns", summary.median, summary.spread());
//! ```

pub mod outliers;
pub mod percentiles;
pub mod summary;

// Re-export main types and functions
pub use outliers::winsorize;
pub use percentiles::{percentile, percentile_of_sorted};
pub use summary::{Deviation, Summary, MAD_SCALE};
