//! Outlier handling for timing samples.
//!
//! Timing data is winsorized rather than trimmed: values beyond the chosen
//! percentiles are clamped to those percentiles, so the sample count never
//! changes. See <http://en.wikipedia.org/wiki/Winsorising>.

use super::percentiles::{percentile_of_sorted, sort_samples};

/// Winsorize `samples` in place at percentile `pct`.
///
/// Sorts the slice, then clamps every value above the `100 - pct` percentile
/// down to it and every value below the `pct` percentile up to it. The
/// intended range for `pct` is `(0, 50)`.
///
/// Returns the number of samples that were clamped.
///
/// # Panics
///
/// Panics if `samples` is empty or `pct` is outside `0.0..=100.0`.
///
/// # Examples
///
/// ```
/// use adaptive_bench::stats::outliers::winsorize;
///
/// let mut data = vec![1.0, 2.0, 3.0, 4.0, 100.0];
/// winsorize(&mut data, 20.0);
/// assert!((data[0] - 1.8).abs() < 1e-10);
/// assert!((data[4] - 23.2).abs() < 1e-10);
/// ```
pub fn winsorize(samples: &mut [f64], pct: f64) -> usize {
    sort_samples(samples);
    let lo = percentile_of_sorted(samples, pct);
    let hi = percentile_of_sorted(samples, 100.0 - pct);

    let mut clamped = 0;
    for sample in samples.iter_mut() {
        if *sample > hi {
            *sample = hi;
            clamped += 1;
        } else if *sample < lo {
            *sample = lo;
            clamped += 1;
        }
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-10, "{:?} != {:?}", actual, expected);
        }
    }

    #[test]
    fn test_winsorize_clamps_both_tails() {
        let mut samples = vec![1.0, 2.0, 3.0, 4.0, 100.0];
        let clamped = winsorize(&mut samples, 20.0);

        assert_close(&samples, &[1.8, 2.0, 3.0, 4.0, 23.2]);
        assert_eq!(clamped, 2);
    }

    #[test]
    fn test_winsorize_unsorted_input() {
        let mut samples = vec![100.0, 3.0, 1.0, 4.0, 2.0];
        winsorize(&mut samples, 20.0);

        assert_close(&samples, &[1.8, 2.0, 3.0, 4.0, 23.2]);
    }

    #[test]
    fn test_winsorize_preserves_length() {
        let mut samples: Vec<f64> = (0..50).map(|i| (i * i) as f64).collect();
        winsorize(&mut samples, 5.0);

        assert_eq!(samples.len(), 50);
    }

    #[test]
    fn test_winsorize_constant_samples() {
        let mut samples = vec![7.0; 10];
        let clamped = winsorize(&mut samples, 5.0);

        assert_eq!(samples, vec![7.0; 10]);
        assert_eq!(clamped, 0);
    }

    #[test]
    fn test_winsorize_single_sample() {
        let mut samples = vec![3.5];
        winsorize(&mut samples, 5.0);

        assert_eq!(samples, vec![3.5]);
    }

    #[test]
    fn test_winsorize_zero_pct_is_noop() {
        let mut samples = vec![4.0, 1.0, 9.0];
        let clamped = winsorize(&mut samples, 0.0);

        // sorted, but no value changed
        assert_eq!(samples, vec![1.0, 4.0, 9.0]);
        assert_eq!(clamped, 0);
    }

    #[test]
    #[should_panic(expected = "empty sample set")]
    fn test_winsorize_empty() {
        winsorize(&mut [], 5.0);
    }
}
