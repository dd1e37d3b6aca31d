#![forbid(unsafe_code)]

//! Shared assertion and error-measurement helpers for the cnm test suites.
//!
//! Tolerance checks use the combined absolute/relative form
//! `|actual - expected| <= atol + rtol * |expected|`.

/// Assert two f64 values are close within combined absolute and relative tolerance.
pub fn assert_close(actual: f64, expected: f64, atol: f64, rtol: f64) {
    let tol = atol + rtol * expected.abs();
    assert!(
        (actual - expected).abs() <= tol,
        "assert_close failed: actual={actual} expected={expected} diff={} tol={tol} (atol={atol}, rtol={rtol})",
        (actual - expected).abs()
    );
}

/// Assert two f64 slices are element-wise close within tolerance.
pub fn assert_close_slice(actual: &[f64], expected: &[f64], atol: f64, rtol: f64) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "assert_close_slice: length mismatch: actual={} expected={}",
        actual.len(),
        expected.len()
    );
    for (idx, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let tol = atol + rtol * e.abs();
        assert!(
            (a - e).abs() <= tol,
            "assert_close_slice[{idx}]: actual={a} expected={e} diff={} tol={tol} (atol={atol}, rtol={rtol})",
            (a - e).abs()
        );
    }
}

/// Check if a value is within tolerance of expected without panicking.
#[must_use]
pub fn within_tolerance(actual: f64, expected: f64, atol: f64, rtol: f64) -> bool {
    let tol = atol + rtol * expected.abs();
    (actual - expected).abs() <= tol
}

/// Mean absolute deviation between two equal-length sample sequences.
///
/// Panics on length mismatch; returns 0.0 for empty input.
#[must_use]
pub fn mean_abs_error(actual: &[f64], expected: &[f64]) -> f64 {
    assert_eq!(
        actual.len(),
        expected.len(),
        "mean_abs_error: length mismatch: actual={} expected={}",
        actual.len(),
        expected.len()
    );
    if actual.is_empty() {
        return 0.0;
    }
    let total: f64 = actual
        .iter()
        .zip(expected.iter())
        .map(|(a, e)| (a - e).abs())
        .sum();
    total / actual.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assert_close_exact() {
        assert_close(1.0, 1.0, 1e-12, 1e-12);
    }

    #[test]
    fn assert_close_within_atol() {
        assert_close(1.0 + 1e-13, 1.0, 1e-12, 0.0);
    }

    #[test]
    fn assert_close_within_rtol() {
        assert_close(100.0 + 1e-10, 100.0, 0.0, 1e-11);
    }

    #[test]
    #[should_panic(expected = "assert_close failed")]
    fn assert_close_rejects_far() {
        assert_close(1.0, 2.0, 1e-12, 1e-12);
    }

    #[test]
    fn assert_close_slice_ok() {
        assert_close_slice(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0], 1e-12, 1e-12);
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn assert_close_slice_length_mismatch() {
        assert_close_slice(&[1.0, 2.0], &[1.0], 1e-12, 1e-12);
    }

    #[test]
    fn within_tolerance_bounds() {
        assert!(within_tolerance(1.0, 1.0, 1e-12, 1e-12));
        assert!(!within_tolerance(1.0, 2.0, 1e-12, 1e-12));
    }

    #[test]
    fn mean_abs_error_basics() {
        assert_eq!(mean_abs_error(&[], &[]), 0.0);
        assert_eq!(mean_abs_error(&[1.0, 2.0], &[1.0, 2.0]), 0.0);
        assert_close(mean_abs_error(&[1.0, 3.0], &[0.0, 1.0]), 1.5, 1e-15, 0.0);
    }
}
