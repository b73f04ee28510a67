//! Summary and goodness-of-fit statistics
//!
//! Descriptive statistics for sample batches, plus the two goodness-of-fit
//! statistics the acceptance tests are built on: the Kolmogorov--Smirnov
//! statistic against an arbitrary CDF and Pearson's chi-square statistic
//! against expected counts.
//!
//! # Example
//!
//! ```
//! use variate::stats::ks_statistic;
//!
//! let mut xs = vec![0.1, 0.4, 0.2, 0.8, 0.6];
//! let d = ks_statistic(&mut xs, |x| x); // against U(0,1)
//! assert!(d < 1.0);
//! ```

/// Arithmetic mean of a sample
///
/// Returns NaN for an empty slice.
pub fn mean(xs: &[f64]) -> f64 {
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Unbiased sample variance (n − 1 denominator)
///
/// Returns NaN for slices with fewer than two elements.
pub fn variance(xs: &[f64]) -> f64 {
    let m = mean(xs);
    xs.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / (xs.len() as f64 - 1.0)
}

/// Minimum and maximum of a sample
///
/// Returns `None` for an empty slice. NaN elements are ignored by the
/// comparison, matching f64 total ordering on the values that matter.
pub fn extrema(xs: &[f64]) -> Option<(f64, f64)> {
    if xs.is_empty() {
        return None;
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &x in xs {
        if x < min {
            min = x;
        }
        if x > max {
            max = x;
        }
    }
    Some((min, max))
}

/// Kolmogorov--Smirnov statistic D against a theoretical CDF
///
/// Sorts the sample in place, then takes the maximum absolute gap between
/// the empirical distribution and `cdf`. For a correct model, D stays
/// below 1.628/sqrt(n) with probability about 0.99.
pub fn ks_statistic<F>(xs: &mut [f64], cdf: F) -> f64
where
    F: Fn(f64) -> f64,
{
    xs.sort_by(|a, b| a.total_cmp(b));

    let n = xs.len() as f64;
    let mut d: f64 = 0.0;
    for (i, &x) in xs.iter().enumerate() {
        d = d.max(((i as f64 + 1.0) / n - cdf(x)).abs());
    }
    d
}

/// Critical KS value at ~0.01 significance for a sample of size n
pub fn ks_critical(n: usize) -> f64 {
    1.628 / (n as f64).sqrt()
}

/// Pearson's chi-square statistic for observed vs expected counts
///
/// Bins with zero expected count are skipped.
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn chi_square_statistic(observed: &[u64], expected: &[f64]) -> f64 {
    assert_eq!(
        observed.len(),
        expected.len(),
        "Observed and expected bins must align"
    );

    observed
        .iter()
        .zip(expected.iter())
        .filter(|(_, &e)| e > 0.0)
        .map(|(&o, &e)| {
            let diff = o as f64 - e;
            diff * diff / e
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_and_variance() {
        let xs = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((mean(&xs) - 5.0).abs() < 1e-12);
        // Unbiased variance of this classic set is 32/7
        assert!((variance(&xs) - 32.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_extrema() {
        let xs = [3.0, -1.0, 7.0, 0.5];
        assert_eq!(extrema(&xs), Some((-1.0, 7.0)));
        assert_eq!(extrema(&[]), None);
    }

    #[test]
    fn test_ks_perfect_fit() {
        // Evenly spaced points against the uniform CDF give D = 1/n
        let mut xs: Vec<f64> = (1..=100).map(|i| i as f64 / 100.0).collect();
        let d = ks_statistic(&mut xs, |x| x);
        assert!(d <= 0.01 + 1e-12, "D = {}", d);
    }

    #[test]
    fn test_ks_detects_mismatch() {
        // Samples clumped at 0.9 are a terrible fit for U(0,1)
        let mut xs = vec![0.9; 1000];
        let d = ks_statistic(&mut xs, |x| x);
        assert!(d > 0.5);
    }

    #[test]
    fn test_ks_critical_shrinks() {
        assert!(ks_critical(1000000) < ks_critical(1000));
        assert!((ks_critical(1000000) - 0.001628).abs() < 1e-9);
    }

    #[test]
    fn test_chi_square_exact_match() {
        let observed = [25u64, 25, 25, 25];
        let expected = [25.0, 25.0, 25.0, 25.0];
        assert_eq!(chi_square_statistic(&observed, &expected), 0.0);
    }

    #[test]
    fn test_chi_square_mismatch_grows() {
        let observed = [40u64, 10, 25, 25];
        let expected = [25.0, 25.0, 25.0, 25.0];
        let chi2 = chi_square_statistic(&observed, &expected);
        assert!(chi2 > 17.9 && chi2 < 18.1); // 225/25 + 225/25 = 18
    }

    #[test]
    #[should_panic(expected = "Observed and expected bins must align")]
    fn test_chi_square_misaligned() {
        let _ = chi_square_statistic(&[1, 2], &[1.0]);
    }
}
