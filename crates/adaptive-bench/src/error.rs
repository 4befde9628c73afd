use thiserror::Error;

/// Rejected bencher tuning values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("sample_count must be at least 1")]
    NoSamples,

    #[error("winsorize_pct must be within [0, 50) (got {0})")]
    WinsorizePct(f64),

    #[error("batch_multiplier must be at least 1")]
    BatchMultiplier,

    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),

    #[error("max_mad_pct must be a finite, non-negative percentage (got {0})")]
    MadThreshold(f64),
}
