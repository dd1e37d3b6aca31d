#![forbid(unsafe_code)]

//! Simple harmonic oscillator test system, unit frequency.
//!
//! `y'' + y = 0` written as two first-order equations with state
//! `[position, velocity]`; with `y0 = [1, 0]` the position is `cos(t)`.

use crate::Trajectory;

/// Right-hand side: `d[y0, y1]/dt = [y1, -y0]`.
pub fn harmonic_oscillator(_t: f64, y: &[f64]) -> Vec<f64> {
    vec![y[1], -y[0]]
}

/// Closed-form reference trajectory for `y0 = [1, 0]`.
///
/// Samples `cos(t)` on the same grid a stepper produces: time advances by
/// `h` before each sample, so the first entry sits at `t0 + h`.
#[must_use = "the trajectory is the only output"]
pub fn harmonic_exact(t0: f64, h: f64, n: usize) -> Trajectory {
    let mut trajectory = Trajectory::with_capacity(n);
    let mut t = t0;
    for _ in 0..n {
        t += h;
        trajectory.t.push(t);
        trajectory.y.push(t.cos());
    }
    trajectory
}
