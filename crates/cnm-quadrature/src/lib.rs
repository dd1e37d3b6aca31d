#![forbid(unsafe_code)]

//! Fixed-partition quadrature rules over `[a, b]`.
//!
//! All three rules share one shape: a uniform partition of width
//! `d = (b - a) / n` and a single O(n)-time, O(1)-space accumulator pass.
//! Node positions are computed from the integer index (`a + i·d`) rather
//! than by repeated addition, so every rule performs exactly the intended
//! number of evaluations regardless of floating-point rounding.
//!
//! `n = 0` is not validated: the partition width degenerates to ±inf and the
//! result is non-finite. Callers own that precondition, matching the rest of
//! the workspace.

use thiserror::Error;

/// Result alias for the quadrature routines that can fail.
pub type QuadratureResult<T> = Result<T, QuadratureError>;

/// Step-count validation failures for Simpson's rule.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QuadratureError {
    #[error("step count must be at least 2 for Simpson's rule (got {n})")]
    StepCountTooSmall { n: usize },
    #[error("step count must be even for Simpson's rule (got {n})")]
    StepCountOdd { n: usize },
}

/// Midpoint rule: `d · Σ f(a + (i + ½)·d)` over `i = 0..n`.
pub fn midpoint<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64, n: usize) -> f64 {
    let d = (b - a) / n as f64;
    let mut s = 0.0;
    for i in 0..n {
        s += f(a + (i as f64 + 0.5) * d);
    }
    d * s
}

/// Trapezoid rule: endpoints at half weight, interior nodes at full weight.
pub fn trapezoid<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64, n: usize) -> f64 {
    let d = (b - a) / n as f64;
    let mut s = (f(a) + f(b)) / 2.0;
    for i in 1..n {
        s += f(a + i as f64 * d);
    }
    d * s
}

/// Simpson's rule: endpoint weight 1, interior weights alternating 4, 2.
///
/// The alternation is driven by the zero-based interior-node counter, so the
/// first interior node always receives weight 4. Requires `n` even and
/// `n >= 2`; anything else is a [`QuadratureError`].
pub fn simpson<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64, n: usize) -> QuadratureResult<f64> {
    if n < 2 {
        return Err(QuadratureError::StepCountTooSmall { n });
    }
    if n % 2 != 0 {
        return Err(QuadratureError::StepCountOdd { n });
    }
    let d = (b - a) / n as f64;
    let mut s = f(a) + f(b);
    for i in 1..n {
        let weight = if (i - 1) % 2 == 0 { 4.0 } else { 2.0 };
        s += weight * f(a + i as f64 * d);
    }
    Ok(d / 3.0 * s)
}
