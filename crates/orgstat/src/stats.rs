//! Statistical kernels shared by the aggregation passes.
//!
//! All kernels return the raw (possibly NaN/infinite) value; callers apply
//! the edge policy via [`round4_or_zero`] so undefined statistics resolve to
//! `0` instead of propagating NaN/inf.

/// Arithmetic mean.
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Unbiased sample variance (n − 1 denominator).
fn sample_variance(values: &[f64], mean: f64) -> f64 {
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (values.len() as f64 - 1.0)
}

/// Independent two-sample t-statistic with pooled variance.
///
/// Equal-variance form: `t = (m1 − m2) / sqrt(sp² · (1/n1 + 1/n2))` with
/// `sp² = ((n1−1)·s1² + (n2−1)·s2²) / (n1 + n2 − 2)`.
///
/// Undefined comparisons (either sample empty, fewer than three values in
/// total, or zero pooled variance) produce NaN or ±inf; callers decide how to
/// resolve those.
pub fn t_test_ind(a: &[f64], b: &[f64]) -> f64 {
    let (n1, n2) = (a.len(), b.len());
    if n1 == 0 || n2 == 0 || n1 + n2 < 3 {
        return f64::NAN;
    }

    let (m1, m2) = (mean(a), mean(b));
    let v1 = if n1 > 1 { sample_variance(a, m1) } else { 0.0 };
    let v2 = if n2 > 1 { sample_variance(b, m2) } else { 0.0 };

    let df = (n1 + n2 - 2) as f64;
    let pooled = ((n1 as f64 - 1.0) * v1 + (n2 as f64 - 1.0) * v2) / df;
    let denom = (pooled * (1.0 / n1 as f64 + 1.0 / n2 as f64)).sqrt();

    (m1 - m2) / denom
}

/// Minkowski distance of the given order: `(Σ|x_i − y_i|^p)^(1/p)`.
///
/// Vectors are aligned positionally and must have equal length.
pub fn minkowski_distance(x: &[f64], y: &[f64], order: u32) -> f64 {
    debug_assert_eq!(x.len(), y.len());

    let p = order as f64;
    let sum: f64 = x
        .iter()
        .zip(y)
        .map(|(a, b)| (a - b).abs().powf(p))
        .sum();

    sum.powf(1.0 / p)
}

/// Round to 4 decimal places.
///
/// Magnitudes at or above 1e16 pass through unchanged: past 2^53 rounding to
/// 4 decimal places is the identity, and scaling by 1e4 could overflow a
/// large finite value to infinity.
pub fn round4(value: f64) -> f64 {
    if value.abs() >= 1e16 {
        return value;
    }
    (value * 1e4).round() / 1e4
}

/// The shared edge policy: finite values are rounded to 4 decimal places,
/// NaN and ±inf resolve to `0`.
pub fn round4_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        round4(value)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_t_test_basic() {
        // Two clearly separated samples.
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [10.0, 11.0, 12.0, 13.0];
        let t = t_test_ind(&a, &b);

        assert!((t - (-9.8590)).abs() < 1e-3, "t = {t}");
    }

    #[test]
    fn test_t_test_identical_samples_is_zero() {
        let a = [5.0, 7.0, 9.0];
        let t = t_test_ind(&a, &a);

        assert_eq!(t, 0.0);
    }

    #[test]
    fn test_t_test_single_samples_undefined() {
        assert!(t_test_ind(&[1.0], &[2.0]).is_nan());
        assert!(t_test_ind(&[], &[1.0]).is_nan());
    }

    #[test]
    fn test_t_test_zero_variance_equal_means_is_nan() {
        let a = [100.0, 100.0];
        let t = t_test_ind(&a, &a);

        assert!(t.is_nan());
    }

    #[test]
    fn test_t_test_zero_variance_different_means_is_infinite() {
        let t = t_test_ind(&[100.0, 100.0], &[50.0, 50.0]);

        assert!(t.is_infinite());
    }

    #[test]
    fn test_minkowski_order_3() {
        // (|1|^3 + |2|^3)^(1/3) = 9^(1/3)
        let d = minkowski_distance(&[2.0, 5.0], &[1.0, 3.0], 3);

        assert!((d - 9.0_f64.powf(1.0 / 3.0)).abs() < 1e-12);
    }

    #[test]
    fn test_minkowski_identical_vectors_is_zero() {
        let d = minkowski_distance(&[3.0, 3.0], &[3.0, 3.0], 3);

        assert_eq!(d, 0.0);
    }

    #[test]
    fn test_minkowski_single_pair() {
        let d = minkowski_distance(&[10.0], &[4.0], 3);

        assert!((d - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_round4() {
        assert_eq!(round4(1.23456), 1.2346);
        assert_eq!(round4(-1.23454), -1.2345);
        assert_eq!(round4(2.0), 2.0);
    }

    #[test]
    fn test_round4_large_magnitudes_stay_finite() {
        assert_eq!(round4(2.0e307), 2.0e307);
        assert_eq!(round4(-2.0e307), -2.0e307);
        assert_eq!(round4(1e16), 1e16);
    }

    #[test]
    fn test_round4_or_zero_keeps_large_finite_statistics() {
        // Zero variance in one sample and a huge mean gap produce a finite
        // but enormous statistic; it must stay finite, not overflow to inf.
        let t = t_test_ind(&[1.0e307, 1.0e307], &[0.0, 1.0]);

        assert!(t.is_finite());
        assert_eq!(round4_or_zero(t), t);
    }

    #[test]
    fn test_round4_or_zero_edge_policy() {
        assert_eq!(round4_or_zero(f64::NAN), 0.0);
        assert_eq!(round4_or_zero(f64::INFINITY), 0.0);
        assert_eq!(round4_or_zero(f64::NEG_INFINITY), 0.0);
        assert_eq!(round4_or_zero(1.23456789), 1.2346);
    }
}
