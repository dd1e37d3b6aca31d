#![forbid(unsafe_code)]

//! Fixed-step explicit Runge-Kutta integrators for initial value problems.
//!
//! ## Module layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | `tableau`    | [`ButcherTableau`], the RK1..RK4 tableaux, [`RkOrder`] |
//! | `solver`     | [`FixedRkSolver`] state machine and [`integrate`]      |
//! | `oscillator` | Harmonic-oscillator test system and exact reference    |
//!
//! Every scheme advances the trajectory time by exactly `h` per step; stage
//! times `t + c·h` exist only inside right-hand-side evaluations. The
//! recorded trajectory keeps the post-step time and the first state
//! component, matching the position/velocity convention for second-order
//! systems written as two first-order equations.

pub mod oscillator;
pub mod solver;
pub mod tableau;

pub use oscillator::{harmonic_exact, harmonic_oscillator};
pub use solver::{FixedRkSolver, integrate};
pub use tableau::{
    ButcherTableau, RK1_TABLEAU, RK2_TABLEAU, RK3_TABLEAU, RK4_TABLEAU, RkOrder,
};

/// A computed trajectory: post-step times and the first state component.
///
/// Both fields always have equal length; index `i` holds the sample taken
/// after step `i + 1`, so `t[0] == t0 + h`. Allocated fresh per call and
/// never mutated after return.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trajectory {
    pub t: Vec<f64>,
    pub y: Vec<f64>,
}

impl Trajectory {
    #[must_use]
    pub fn with_capacity(n: usize) -> Self {
        Self {
            t: Vec::with_capacity(n),
            y: Vec::with_capacity(n),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.t.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trajectory_with_capacity_is_empty() {
        let trajectory = Trajectory::with_capacity(16);
        assert!(trajectory.is_empty());
        assert_eq!(trajectory.len(), 0);
    }
}
