#![forbid(unsafe_code)]

//! Comparison drivers for the numeric crates.
//!
//! Each driver runs every method variant over one fixed test problem and
//! packages the results as a [`Figure`] (or a printable report) for a chart
//! sink. The test problems are the classical ones: `f(x) = x²` for
//! derivatives and quadrature, the unit-frequency harmonic oscillator for
//! the Runge-Kutta schemes.

use cnm_chart::{Figure, Series};
use cnm_derivative::{DiffScheme, estimate_slice};
use cnm_ode::{RkOrder, Trajectory, harmonic_exact, harmonic_oscillator, integrate};
use cnm_quadrature::{QuadratureResult, midpoint, simpson, trapezoid};
use std::fmt;

/// The shared scalar test function.
fn square(x: f64) -> f64 {
    x * x
}

/// Uniform sample grid over `[start, stop)` with the given spacing.
///
/// Matches arange semantics: values are `start + i·step` computed from the
/// integer index, so the grid has a fixed, drift-free length.
#[must_use]
pub fn sample_points(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let count = ((stop - start) / step).ceil().max(0.0) as usize;
    (0..count).map(|i| start + i as f64 * step).collect()
}

/// All four derivative estimators against the true slope of `x²`.
///
/// Grid: −5.0..5.0 step 0.1; the reference series is `2x`.
#[must_use]
pub fn derivative_figure(h: f64) -> Figure {
    let points = sample_points(-5.0, 5.0, 0.1);
    let truth: Vec<f64> = points.iter().map(|x| 2.0 * x).collect();

    let mut figure = Figure::new("numeric differentiation comparison", "x", "y");
    figure.push_series(Series::new("true derivative", "blue", points.clone(), truth));
    for (scheme, label, color) in [
        (DiffScheme::Backward, "backward difference", "purple"),
        (DiffScheme::Forward, "forward difference", "orange"),
        (DiffScheme::Central, "central difference", "green"),
        (DiffScheme::Richardson, "richardson extrapolation", "red"),
    ] {
        let values = estimate_slice(scheme, &square, &points, h);
        figure.push_series(Series::new(label, color, points.clone(), values));
    }
    figure
}

/// All three quadrature rules over one interval and step count.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadratureReport {
    pub a: f64,
    pub b: f64,
    pub n: usize,
    pub midpoint: f64,
    pub trapezoid: f64,
    pub simpson: QuadratureResult<f64>,
}

impl fmt::Display for QuadratureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Midpoint: {}", self.midpoint)?;
        writeln!(f, "Trapezoid: {}", self.trapezoid)?;
        match &self.simpson {
            Ok(value) => write!(f, "Simpson: {value}"),
            Err(err) => write!(f, "Simpson: {err}"),
        }
    }
}

/// Evaluate every quadrature rule for `∫ₐᵇ x² dx`.
#[must_use]
pub fn quadrature_report(a: f64, b: f64, n: usize) -> QuadratureReport {
    QuadratureReport {
        a,
        b,
        n,
        midpoint: midpoint(&square, a, b, n),
        trapezoid: trapezoid(&square, a, b, n),
        simpson: simpson(&square, a, b, n),
    }
}

/// Every Runge-Kutta scheme against the exact cosine for the oscillator.
///
/// Initial state `[1, 0]`; the exact reference shares the steppers' grid.
#[must_use]
pub fn rk_figure(t0: f64, h: f64, n: usize) -> Figure {
    let mut figure = Figure::new("runge-kutta accuracy comparison", "t", "y");

    let exact = harmonic_exact(t0, h, n);
    figure.push_series(Series::new("exact", "green", exact.t, exact.y));

    for (order, color) in RkOrder::ALL.iter().zip(["blue", "purple", "red", "orange"]) {
        let trajectory = integrate(*order, &mut harmonic_oscillator, &[1.0, 0.0], t0, h, n);
        figure.push_series(Series::new(order.label(), color, trajectory.t, trajectory.y));
    }
    figure
}

/// Mean absolute deviation of a trajectory from a reference function of t.
#[must_use]
pub fn trajectory_mae<F: Fn(f64) -> f64>(trajectory: &Trajectory, reference: F) -> f64 {
    if trajectory.is_empty() {
        return 0.0;
    }
    let total: f64 = trajectory
        .t
        .iter()
        .zip(trajectory.y.iter())
        .map(|(t, y)| (y - reference(*t)).abs())
        .sum();
    total / trajectory.len() as f64
}
