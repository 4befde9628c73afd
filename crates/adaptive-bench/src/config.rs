//! Configuration for the adaptive bencher
//!
//! Every knob of the batch-size search can be tuned from a TOML file. All
//! fields are optional; missing ones fall back to the defaults below, which
//! reproduce the classic 50-sample / 5% winsorized / 3 second behaviour.
//!
//! ```toml
//! sample_count = 50
//! winsorize_pct = 5.0
//! target_batch_ns = 1000000
//! batch_multiplier = 5
//! min_round_ms = 100
//! max_total_ms = 3000
//! max_mad_pct = 1.0
//! deviation = "signed"
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;
use crate::stats::Deviation;

/// Tuning parameters for [`AdaptiveBencher`](crate::runner::AdaptiveBencher)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BenchConfig {
    /// Number of batches timed for each summary (default: 50)
    pub sample_count: usize,
    /// Winsorizing percentile applied to each sample set (default: 5.0)
    pub winsorize_pct: f64,
    /// Batch duration the first batch size estimate aims for (default: 1ms)
    #[serde(rename = "target_batch_ns", with = "duration_ns")]
    pub target_batch: Duration,
    /// Batch size factor of the second summary in a round (default: 5)
    pub batch_multiplier: u64,
    /// A round must last at least this long before it may converge (default: 100ms)
    #[serde(rename = "min_round_ms", with = "duration_ms")]
    pub min_round: Duration,
    /// Total measuring time after which the last estimate is accepted (default: 3s)
    #[serde(rename = "max_total_ms", with = "duration_ms")]
    pub max_total: Duration,
    /// Largest MAD, in percent of the median, considered stable (default: 1.0)
    pub max_mad_pct: f64,
    /// Deviation flavour used for the MAD (default: signed)
    pub deviation: Deviation,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sample_count: 50,
            winsorize_pct: 5.0,
            target_batch: Duration::from_millis(1),
            batch_multiplier: 5,
            min_round: Duration::from_millis(100),
            max_total: Duration::from_secs(3),
            max_mad_pct: 1.0,
            deviation: Deviation::Signed,
        }
    }
}

impl BenchConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML is malformed,
    /// or the values do not pass [`validate`](Self::validate).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use adaptive_bench::config::BenchConfig;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = BenchConfig::from_file("bench.toml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    ///
    /// # Example
    ///
    /// ```
    /// use adaptive_bench::config::BenchConfig;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = BenchConfig::from_str("sample_count = 20")?;
    /// assert_eq!(config.sample_count, 20);
    /// assert_eq!(config.batch_multiplier, 5);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(s).context("Failed to parse TOML configuration")?;
        config.validate().context("Invalid bencher configuration")?;
        Ok(config)
    }

    /// Check that every value keeps the bencher well defined
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_count == 0 {
            return Err(ConfigError::NoSamples);
        }
        if !(0.0..50.0).contains(&self.winsorize_pct) {
            return Err(ConfigError::WinsorizePct(self.winsorize_pct));
        }
        if self.batch_multiplier == 0 {
            return Err(ConfigError::BatchMultiplier);
        }
        if self.target_batch.is_zero() {
            return Err(ConfigError::ZeroDuration("target_batch_ns"));
        }
        if self.max_total.is_zero() {
            return Err(ConfigError::ZeroDuration("max_total_ms"));
        }
        if !self.max_mad_pct.is_finite() || self.max_mad_pct < 0.0 {
            return Err(ConfigError::MadThreshold(self.max_mad_pct));
        }
        Ok(())
    }

    /// Target batch duration in whole nanoseconds
    pub fn target_batch_ns(&self) -> u64 {
        self.target_batch.as_nanos().min(u64::MAX as u128) as u64
    }
}

/// Serde module for serializing/deserializing Duration as milliseconds
mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ms = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(ms))
    }
}

/// Same as `duration_ms`, in nanoseconds
mod duration_ns {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_nanos() as u64)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ns = u64::deserialize(deserializer)?;
        Ok(Duration::from_nanos(ns))
    }
}
