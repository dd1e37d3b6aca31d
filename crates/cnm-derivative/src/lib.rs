#![forbid(unsafe_code)]

//! Finite-difference derivative estimators.
//!
//! Four schemes approximate `f'(x)` from pointwise evaluations of `f`:
//!
//! | Scheme       | Formula                                    | Order  |
//! |--------------|--------------------------------------------|--------|
//! | `Backward`   | `(f(x) - f(x-h)) / h`                      | O(h)   |
//! | `Forward`    | `(f(x+h) - f(x)) / h`                      | O(h)   |
//! | `Central`    | `(f(x+h) - f(x-h)) / (2h)`                 | O(h²)  |
//! | `Richardson` | `(4·central(h/2) - central(h)) / 3`        | O(h⁴)  |
//!
//! All schemes are pure given `f`; none validates `h`. A zero step size
//! propagates ±inf/NaN per IEEE-754 rather than failing, so `h > 0` is a
//! caller precondition.

/// Finite-difference scheme selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffScheme {
    Backward,
    Forward,
    Central,
    Richardson,
}

impl DiffScheme {
    pub const ALL: [Self; 4] = [Self::Backward, Self::Forward, Self::Central, Self::Richardson];
}

/// Backward difference: `(f(x) - f(x-h)) / h`.
pub fn backward<F: Fn(f64) -> f64>(f: &F, x: f64, h: f64) -> f64 {
    (f(x) - f(x - h)) / h
}

/// Forward difference: `(f(x+h) - f(x)) / h`.
pub fn forward<F: Fn(f64) -> f64>(f: &F, x: f64, h: f64) -> f64 {
    (f(x + h) - f(x)) / h
}

/// Central difference: `(f(x+h) - f(x-h)) / (2h)`.
pub fn central<F: Fn(f64) -> f64>(f: &F, x: f64, h: f64) -> f64 {
    (f(x + h) - f(x - h)) / (2.0 * h)
}

/// Richardson extrapolation over two central differences.
///
/// Combines estimates at `h/2` and `h` to cancel the leading O(h²) error
/// term of the central difference.
pub fn richardson<F: Fn(f64) -> f64>(f: &F, x: f64, h: f64) -> f64 {
    (4.0 * central(f, x, h / 2.0) - central(f, x, h)) / 3.0
}

/// Evaluate one scheme at a single point.
pub fn estimate<F: Fn(f64) -> f64>(scheme: DiffScheme, f: &F, x: f64, h: f64) -> f64 {
    match scheme {
        DiffScheme::Backward => backward(f, x, h),
        DiffScheme::Forward => forward(f, x, h),
        DiffScheme::Central => central(f, x, h),
        DiffScheme::Richardson => richardson(f, x, h),
    }
}

/// Evaluate one scheme elementwise over a batch of points.
///
/// The output has the same length and ordering as `xs`.
#[must_use = "the estimates are the only output"]
pub fn estimate_slice<F: Fn(f64) -> f64>(
    scheme: DiffScheme,
    f: &F,
    xs: &[f64],
    h: f64,
) -> Vec<f64> {
    xs.iter().map(|&x| estimate(scheme, f, x, h)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cnm_testkit::{assert_close, assert_close_slice};

    fn square(x: f64) -> f64 {
        x * x
    }

    // 1. central is exact on a perfect square regardless of h
    #[test]
    fn test_central_exact_on_square() {
        for &x in &[-5.0, -0.3, 0.0, 1.7, 4.0] {
            for &h in &[0.5, 0.1, 2.0] {
                assert_close(central(&square, x, h), 2.0 * x, 1e-12, 1e-12);
            }
        }
    }

    // 2. backward on x² is exactly 2x - h
    #[test]
    fn test_backward_first_order_bias() {
        let h = 0.5;
        assert_close(backward(&square, 3.0, h), 2.0 * 3.0 - h, 1e-12, 1e-12);
    }

    // 3. forward on x² is exactly 2x + h
    #[test]
    fn test_forward_first_order_bias() {
        let h = 0.5;
        assert_close(forward(&square, 3.0, h), 2.0 * 3.0 + h, 1e-12, 1e-12);
    }

    // 4. richardson stays exact where central is already exact
    #[test]
    fn test_richardson_exact_on_square() {
        assert_close(richardson(&square, -2.5, 0.5), -5.0, 1e-12, 1e-12);
    }

    // 5. richardson cancels the central scheme's leading error term on sin
    #[test]
    fn test_richardson_beats_central_on_sin() {
        let f = |x: f64| x.sin();
        let x: f64 = 1.2;
        let h = 0.1;
        let exact = x.cos();
        let central_err = (central(&f, x, h) - exact).abs();
        let richardson_err = (richardson(&f, x, h) - exact).abs();
        assert!(
            richardson_err < central_err / 10.0,
            "richardson_err={richardson_err} should be well below central_err={central_err}"
        );
    }

    // 6. backward/forward converge to the true derivative as h -> 0
    #[test]
    fn test_one_sided_convergence() {
        let x = 2.0;
        let coarse = (backward(&square, x, 0.5) - 4.0).abs();
        let fine = (backward(&square, x, 0.05) - 4.0).abs();
        assert!(fine < coarse / 5.0, "fine={fine} coarse={coarse}");
        let coarse = (forward(&square, x, 0.5) - 4.0).abs();
        let fine = (forward(&square, x, 0.05) - 4.0).abs();
        assert!(fine < coarse / 5.0, "fine={fine} coarse={coarse}");
    }

    // 7. batch evaluation matches pointwise evaluation
    #[test]
    fn test_estimate_slice_matches_pointwise() {
        let xs: Vec<f64> = (0..50).map(|i| -5.0 + 0.2 * i as f64).collect();
        for scheme in DiffScheme::ALL {
            let batch = estimate_slice(scheme, &square, &xs, 0.5);
            let pointwise: Vec<f64> = xs.iter().map(|&x| estimate(scheme, &square, x, 0.5)).collect();
            assert_close_slice(&batch, &pointwise, 0.0, 0.0);
        }
    }

    // 8. batch output preserves length, including empty input
    #[test]
    fn test_estimate_slice_length() {
        assert!(estimate_slice(DiffScheme::Central, &square, &[], 0.1).is_empty());
        assert_eq!(estimate_slice(DiffScheme::Central, &square, &[1.0, 2.0], 0.1).len(), 2);
    }

    // 9. h = 0 propagates a non-finite value instead of panicking
    #[test]
    fn test_zero_step_is_not_guarded() {
        let v = central(&square, 1.0, 0.0);
        assert!(!v.is_finite(), "expected non-finite result, got {v}");
    }

    // 10. identical inputs produce bitwise-identical outputs
    #[test]
    fn test_estimate_is_deterministic() {
        let a = estimate(DiffScheme::Richardson, &square, 1.234, 0.37);
        let b = estimate(DiffScheme::Richardson, &square, 1.234, 0.37);
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
