#![forbid(unsafe_code)]

//! Fixed-step Runge-Kutta state machine and trajectory driver.

use crate::Trajectory;
use crate::tableau::{ButcherTableau, RkOrder};

/// Perform a single explicit Runge-Kutta step, returning the new state.
///
/// `k` is filled with the stage derivatives (`k[0] = fun(t, y)`); stage
/// states are `y + h·Σ a[s][j]·k[j]` evaluated at `t + c[s]·h`.
fn rk_step<F>(
    fun: &mut F,
    t: f64,
    y: &[f64],
    h: f64,
    tableau: &ButcherTableau,
    k: &mut [Vec<f64>],
) -> Vec<f64>
where
    F: FnMut(f64, &[f64]) -> Vec<f64>,
{
    let n = y.len();
    k[0] = fun(t, y);

    for s in 1..tableau.n_stages {
        let a_row = tableau.a[s];
        let c_s = tableau.c[s];
        let mut dy = vec![0.0; n];
        for (j, &a_sj) in a_row.iter().enumerate() {
            if a_sj != 0.0 {
                for i in 0..n {
                    dy[i] += a_sj * k[j][i];
                }
            }
        }
        let y_stage: Vec<f64> = y
            .iter()
            .zip(dy.iter())
            .map(|(yi, di)| yi + h * di)
            .collect();
        k[s] = fun(t + c_s * h, &y_stage);
    }

    // y_new = y + h * sum(B[s] * K[s])
    let mut y_new = y.to_vec();
    for (s, &b_s) in tableau.b.iter().enumerate() {
        if b_s != 0.0 {
            for i in 0..n {
                y_new[i] += h * b_s * k[s][i];
            }
        }
    }
    y_new
}

/// A fixed-step explicit Runge-Kutta solver.
///
/// One state machine serves all four schemes via interchangeable Butcher
/// tableaux. Each [`step_with`](Self::step_with) replaces the state vector
/// wholesale and advances the time by exactly `h`; there is no adaptive
/// revision and no failure path.
pub struct FixedRkSolver {
    tableau: &'static ButcherTableau,
    t: f64,
    y: Vec<f64>,
    h: f64,
    // Stage derivative storage, reused across steps.
    k: Vec<Vec<f64>>,
    nfev: usize,
}

impl FixedRkSolver {
    #[must_use]
    pub fn new(order: RkOrder, y0: &[f64], t0: f64, h: f64) -> Self {
        let tableau = order.tableau();
        let k = vec![vec![0.0; y0.len()]; tableau.n_stages];
        Self {
            tableau,
            t: t0,
            y: y0.to_vec(),
            h,
            k,
            nfev: 0,
        }
    }

    /// Current time.
    #[must_use]
    pub fn t(&self) -> f64 {
        self.t
    }

    /// Current state vector.
    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Number of right-hand-side evaluations so far.
    #[must_use]
    pub fn nfev(&self) -> usize {
        self.nfev
    }

    /// Advance one step: `y` is replaced, `t` increases by `h`.
    pub fn step_with<F>(&mut self, fun: &mut F)
    where
        F: FnMut(f64, &[f64]) -> Vec<f64>,
    {
        let y_new = rk_step(fun, self.t, &self.y, self.h, self.tableau, &mut self.k);
        self.nfev += self.tableau.n_stages;
        self.y = y_new;
        self.t += self.h;
    }
}

/// Integrate an initial value problem over `n` fixed steps.
///
/// Records the post-step time and the first state component after every
/// step, so the first sample sits at `t0 + h`. `n = 0` yields an empty
/// trajectory. `y0` is expected to be non-empty; an empty state records
/// NaN samples rather than panicking.
#[must_use = "the trajectory is the only output"]
pub fn integrate<F>(order: RkOrder, fun: &mut F, y0: &[f64], t0: f64, h: f64, n: usize) -> Trajectory
where
    F: FnMut(f64, &[f64]) -> Vec<f64>,
{
    let mut solver = FixedRkSolver::new(order, y0, t0, h);
    let mut trajectory = Trajectory::with_capacity(n);
    for _ in 0..n {
        solver.step_with(fun);
        trajectory.t.push(solver.t());
        trajectory
            .y
            .push(solver.y().first().copied().unwrap_or(f64::NAN));
    }
    trajectory
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oscillator::harmonic_oscillator;
    use cnm_testkit::assert_close;

    fn exponential(_t: f64, y: &[f64]) -> Vec<f64> {
        vec![y[0]]
    }

    // 1. a single step of each scheme reproduces its truncated Taylor series
    //    on y' = y, y(0) = 1
    #[test]
    fn test_solver_single_step_taylor() {
        let h: f64 = 0.5;
        let expected = [
            1.0 + h,
            1.0 + h + h * h / 2.0,
            1.0 + h + h * h / 2.0 + h.powi(3) / 6.0,
            1.0 + h + h * h / 2.0 + h.powi(3) / 6.0 + h.powi(4) / 24.0,
        ];
        for (order, want) in RkOrder::ALL.iter().zip(expected.iter()) {
            let trajectory = integrate(*order, &mut exponential, &[1.0], 0.0, h, 1);
            assert_close(trajectory.y[0], *want, 1e-14, 1e-14);
        }
    }

    // 2. trajectory length is exactly n, first t is t0 + h, spacing is h
    #[test]
    fn test_solver_trajectory_shape() {
        let trajectory = integrate(RkOrder::Rk2, &mut exponential, &[1.0], 2.0, 0.25, 40);
        assert_eq!(trajectory.len(), 40);
        assert_close(trajectory.t[0], 2.25, 1e-12, 0.0);
        for pair in trajectory.t.windows(2) {
            assert_close(pair[1] - pair[0], 0.25, 1e-12, 0.0);
        }
    }

    // 3. n = 0 produces an empty trajectory, not an error
    #[test]
    fn test_solver_zero_steps_empty() {
        for order in RkOrder::ALL {
            let trajectory = integrate(order, &mut exponential, &[1.0], 0.0, 0.1, 0);
            assert!(trajectory.is_empty());
        }
    }

    // 4. RK4 tracks cos(t) closely over 100 steps of the oscillator
    #[test]
    fn test_solver_rk4_tracks_cosine() {
        let trajectory = integrate(
            RkOrder::Rk4,
            &mut harmonic_oscillator,
            &[1.0, 0.0],
            0.0,
            0.1,
            100,
        );
        for (t, y) in trajectory.t.iter().zip(trajectory.y.iter()) {
            assert_close(*y, t.cos(), 1e-5, 0.0);
        }
    }

    // 5. nfev counts n_stages evaluations per step
    #[test]
    fn test_solver_nfev_accounting() {
        for order in RkOrder::ALL {
            let mut solver = FixedRkSolver::new(order, &[1.0, 0.0], 0.0, 0.1);
            for _ in 0..7 {
                solver.step_with(&mut harmonic_oscillator);
            }
            assert_eq!(solver.nfev(), 7 * order.tableau().n_stages);
        }
    }

    // 6. stage times stay internal: recorded t never reflects c·h offsets
    #[test]
    fn test_solver_records_whole_steps_only() {
        let mut seen_times: Vec<f64> = Vec::new();
        let mut fun = |t: f64, y: &[f64]| {
            seen_times.push(t);
            vec![y[1], -y[0]]
        };
        let trajectory = integrate(RkOrder::Rk4, &mut fun, &[1.0, 0.0], 0.0, 0.1, 3);
        // RHS sees half-step times; the trajectory must not.
        assert!(seen_times.iter().any(|t| (t - 0.05).abs() < 1e-12));
        for (i, t) in trajectory.t.iter().enumerate() {
            assert_close(*t, 0.1 * (i as f64 + 1.0), 1e-12, 0.0);
        }
    }

    // 7. identical inputs produce bitwise-identical trajectories
    #[test]
    fn test_solver_is_deterministic() {
        let a = integrate(RkOrder::Rk3, &mut harmonic_oscillator, &[1.0, 0.0], 0.0, 0.1, 50);
        let b = integrate(RkOrder::Rk3, &mut harmonic_oscillator, &[1.0, 0.0], 0.0, 0.1, 50);
        assert_eq!(a, b);
        for (x, y) in a.y.iter().zip(b.y.iter()) {
            assert_eq!(x.to_bits(), y.to_bits());
        }
    }

    // 8. an empty state vector records NaN instead of panicking
    #[test]
    fn test_solver_empty_state_degenerate() {
        let trajectory = integrate(RkOrder::Rk1, &mut |_t, _y| vec![], &[], 0.0, 0.1, 3);
        assert_eq!(trajectory.len(), 3);
        assert!(trajectory.y.iter().all(|y| y.is_nan()));
    }
}
