//! Percentile calculations for timing samples.
//!
//! Percentiles are linearly interpolated between adjacent ranks (not
//! nearest-rank), so `p50` of an even-length set is the midpoint of the two
//! middle samples.

/// Value at percentile `p` of an already sorted slice.
///
/// Uses linear interpolation between the two closest ranks. The slice is not
/// checked for sortedness; unsorted input gives a meaningless value.
///
/// A single-element slice returns that element for every `p`, and `p == 100`
/// returns the last element exactly.
///
/// # Panics
///
/// Panics if `sorted` is empty or `p` is not within `0.0..=100.0`.
///
/// # Examples
///
/// ```
/// use adaptive_bench::stats::percentiles::percentile_of_sorted;
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(percentile_of_sorted(&data, 50.0), 3.0);
/// assert_eq!(percentile_of_sorted(&data, 100.0), 5.0);
/// ```
pub fn percentile_of_sorted(sorted: &[f64], p: f64) -> f64 {
    assert!(!sorted.is_empty(), "percentile of an empty sample set");
    if sorted.len() == 1 {
        return sorted[0];
    }
    assert!(
        (0.0..=100.0).contains(&p),
        "percentile must be within 0..=100 (got {})",
        p
    );
    if p == 100.0 {
        return sorted[sorted.len() - 1];
    }

    let rank = (p / 100.0) * (sorted.len() - 1) as f64;
    let lower_rank = rank.floor();
    let fraction = rank - lower_rank;
    let k = lower_rank as usize;

    let lower_value = sorted[k];
    let upper_value = sorted[k + 1];
    lower_value + (upper_value - lower_value) * fraction
}

/// Value at percentile `p` of an unsorted slice.
///
/// Sorts a copy of `samples`; the input order is left untouched.
///
/// # Panics
///
/// Same contract as [`percentile_of_sorted`].
///
/// # Examples
///
/// ```
/// use adaptive_bench::stats::percentiles::percentile;
///
/// let data = vec![5.0, 1.0, 3.0, 2.0, 4.0];
/// assert_eq!(percentile(&data, 50.0), 3.0);
/// ```
pub fn percentile(samples: &[f64], p: f64) -> f64 {
    let mut sorted = samples.to_vec();
    sort_samples(&mut sorted);
    percentile_of_sorted(&sorted, p)
}

/// Sort samples ascending. NaN compares equal to everything.
pub fn sort_samples(samples: &mut [f64]) {
    samples.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
}
