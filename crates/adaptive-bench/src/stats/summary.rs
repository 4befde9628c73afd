//! Descriptive statistics for a set of per-iteration timings.

use serde::{Deserialize, Serialize};

use super::percentiles::percentile;

/// Scale factor that makes the median absolute deviation a consistent
/// estimator of the standard deviation for normally distributed data.
pub const MAD_SCALE: f64 = 1.4826;

/// How deviations from the median are taken before their median is computed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Deviation {
    /// Median of the signed deviations `median - v`.
    ///
    /// This is the historical behaviour of the harness and drives its
    /// convergence check. For most sample sets it lands at (or very near)
    /// zero, and can be slightly negative through rounding.
    #[default]
    Signed,
    /// Median of `|median - v|`, the textbook median absolute deviation.
    Absolute,
}

/// Summary of a sample set, computed once at construction.
///
/// `median_abs_dev_pct` is left to IEEE-754 semantics when the median is
/// zero (NaN or infinity). JSON has no spelling for those, so they are
/// written as `null` and read back as NaN.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    /// Largest sample
    #[serde(deserialize_with = "nullable_f64::deserialize")]
    pub max: f64,
    /// Smallest sample
    #[serde(deserialize_with = "nullable_f64::deserialize")]
    pub min: f64,
    /// Median (interpolated 50th percentile)
    #[serde(deserialize_with = "nullable_f64::deserialize")]
    pub median: f64,
    /// Median absolute deviation, scaled by [`MAD_SCALE`]
    #[serde(deserialize_with = "nullable_f64::deserialize")]
    pub median_abs_dev: f64,
    /// `median_abs_dev` as a percentage of the median
    #[serde(deserialize_with = "nullable_f64::deserialize")]
    pub median_abs_dev_pct: f64,
}

impl Summary {
    /// Summarize `samples` using signed deviations.
    ///
    /// # Panics
    ///
    /// Panics if `samples` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use adaptive_bench::stats::Summary;
    ///
    /// let summary = Summary::new(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    /// assert_eq!(summary.median, 3.0);
    /// assert_eq!(summary.min, 1.0);
    /// assert_eq!(summary.max, 5.0);
    /// ```
    pub fn new(samples: &[f64]) -> Self {
        Self::with_deviation(samples, Deviation::Signed)
    }

    /// Summarize `samples`, taking deviations as described by `deviation`.
    ///
    /// # Panics
    ///
    /// Panics if `samples` is empty.
    pub fn with_deviation(samples: &[f64], deviation: Deviation) -> Self {
        assert!(!samples.is_empty(), "summary of an empty sample set");

        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let median = percentile(samples, 50.0);
        let median_abs_dev = median_abs_dev(samples, median, deviation);

        Summary {
            max,
            min,
            median,
            median_abs_dev,
            median_abs_dev_pct: 100.0 * median_abs_dev / median,
        }
    }

    /// Distance between the slowest and fastest sample.
    pub fn spread(&self) -> f64 {
        self.max - self.min
    }
}

fn median_abs_dev(samples: &[f64], median: f64, deviation: Deviation) -> f64 {
    let deviations: Vec<f64> = match deviation {
        Deviation::Signed => samples.iter().map(|&v| median - v).collect(),
        Deviation::Absolute => samples.iter().map(|&v| (median - v).abs()).collect(),
    };
    percentile(&deviations, 50.0) * MAD_SCALE
}

/// Serde helper accepting `null` for a float, as NaN
mod nullable_f64 {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<f64>::deserialize(deserializer)?;
        Ok(value.unwrap_or(f64::NAN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_basic() {
        let samples = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let summary = Summary::new(&samples);

        assert_eq!(summary.median, 3.0);
        assert_eq!(summary.max, 5.0);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.spread(), 4.0);
    }

    #[test]
    fn test_summary_constant_samples() {
        let samples = vec![12.5; 50];
        let summary = Summary::new(&samples);

        assert_eq!(summary.max, 12.5);
        assert_eq!(summary.min, 12.5);
        assert_eq!(summary.median, 12.5);
        assert_eq!(summary.median_abs_dev, 0.0);
        assert_eq!(summary.median_abs_dev_pct, 0.0);
    }

    #[test]
    fn test_summary_single_sample() {
        let summary = Summary::new(&[9.0]);

        assert_eq!(summary.max, 9.0);
        assert_eq!(summary.min, 9.0);
        assert_eq!(summary.median, 9.0);
        assert_eq!(summary.median_abs_dev, 0.0);
    }

    #[test]
    fn test_summary_does_not_reorder_input() {
        let samples = vec![10.0, 1.0, 5.0, 3.0, 8.0];
        let _ = Summary::new(&samples);

        assert_eq!(samples, vec![10.0, 1.0, 5.0, 3.0, 8.0]);
    }

    #[test]
    fn test_signed_deviation_cancels_out() {
        // deviations are [2, 1, 0, -1, -2]; their median is 0
        let summary = Summary::new(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(summary.median_abs_dev, 0.0);
    }

    #[test]
    fn test_absolute_deviation() {
        // |3 - v| = [2, 1, 0, 1, 2], median 1
        let summary = Summary::with_deviation(&[1.0, 2.0, 3.0, 4.0, 5.0], Deviation::Absolute);

        assert!((summary.median_abs_dev - MAD_SCALE).abs() < 1e-12);
        assert!((summary.median_abs_dev_pct - 100.0 * MAD_SCALE / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_absolute_deviation_ignores_outlier() {
        let summary = Summary::with_deviation(
            &[10.0, 10.0, 11.0, 11.0, 12.0, 1000.0],
            Deviation::Absolute,
        );

        assert_eq!(summary.median, 11.0);
        assert!(summary.median_abs_dev < 2.0);
    }

    #[test]
    fn test_zero_median_pct_is_not_finite() {
        let summary = Summary::with_deviation(&[-1.0, 0.0, 1.0], Deviation::Absolute);

        assert_eq!(summary.median, 0.0);
        assert!(!summary.median_abs_dev_pct.is_finite());
    }

    #[test]
    fn test_all_zero_samples_pct_is_nan() {
        let summary = Summary::new(&[0.0, 0.0, 0.0]);
        assert!(summary.median_abs_dev_pct.is_nan());
    }

    #[test]
    fn test_null_fields_read_as_nan() {
        let json = r#"{"max":0.0,"min":0.0,"median":0.0,"median_abs_dev":0.0,"median_abs_dev_pct":null}"#;
        let summary: Summary = serde_json::from_str(json).unwrap();

        assert_eq!(summary.median, 0.0);
        assert!(summary.median_abs_dev_pct.is_nan());
    }

    #[test]
    fn test_infinite_pct_written_as_null() {
        let summary = Summary::with_deviation(&[-1.0, 0.0, 1.0], Deviation::Absolute);
        let json = serde_json::to_string(&summary).unwrap();

        assert!(json.contains("\"median_abs_dev_pct\":null"));
        let parsed: Summary = serde_json::from_str(&json).unwrap();
        assert!(parsed.median_abs_dev_pct.is_nan());
        assert_eq!(parsed.median_abs_dev, summary.median_abs_dev);
    }

    #[test]
    #[should_panic(expected = "empty sample set")]
    fn test_summary_empty() {
        Summary::new(&[]);
    }

    #[test]
    fn test_deviation_default_is_signed() {
        assert_eq!(Deviation::default(), Deviation::Signed);
    }
}
