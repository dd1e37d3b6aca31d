#![forbid(unsafe_code)]

//! Butcher tableaux for the four fixed-step explicit schemes.

/// Butcher tableau for an explicit Runge-Kutta method.
///
/// `a` is lower-triangular (row `s` has `s` entries), `b` the stage weights,
/// `c` the stage time increments. No embedded error estimator: these are
/// fixed-step schemes.
pub struct ButcherTableau {
    /// A coefficients (lower-triangular, row-major).
    pub a: &'static [&'static [f64]],
    /// B coefficients (weights for combining stages, length n_stages).
    pub b: &'static [f64],
    /// C coefficients (time increments, length n_stages).
    pub c: &'static [f64],
    /// Number of stages.
    pub n_stages: usize,
    /// Classical order of accuracy.
    pub order: usize,
}

// ═══════════════════════════════════════════════════════════════
// RK1: forward Euler
// ═══════════════════════════════════════════════════════════════

static RK1_A0: &[f64] = &[];
static RK1_A: &[&[f64]] = &[RK1_A0];

pub static RK1_TABLEAU: ButcherTableau = ButcherTableau {
    a: RK1_A,
    b: &[1.0],
    c: &[0.0],
    n_stages: 1,
    order: 1,
};

// ═══════════════════════════════════════════════════════════════
// RK2: two-stage, full-step predictor (Heun form)
// ═══════════════════════════════════════════════════════════════

static RK2_A0: &[f64] = &[];
static RK2_A1: &[f64] = &[1.0];
static RK2_A: &[&[f64]] = &[RK2_A0, RK2_A1];

pub static RK2_TABLEAU: ButcherTableau = ButcherTableau {
    a: RK2_A,
    b: &[0.5, 0.5],
    c: &[0.0, 1.0],
    n_stages: 2,
    order: 2,
};

// ═══════════════════════════════════════════════════════════════
// RK3: Kutta's third-order scheme
// ═══════════════════════════════════════════════════════════════

static RK3_A0: &[f64] = &[];
static RK3_A1: &[f64] = &[0.5];
static RK3_A2: &[f64] = &[-1.0, 2.0];
static RK3_A: &[&[f64]] = &[RK3_A0, RK3_A1, RK3_A2];

pub static RK3_TABLEAU: ButcherTableau = ButcherTableau {
    a: RK3_A,
    b: &[1.0 / 6.0, 4.0 / 6.0, 1.0 / 6.0],
    c: &[0.0, 0.5, 1.0],
    n_stages: 3,
    order: 3,
};

// ═══════════════════════════════════════════════════════════════
// RK4: the classical four-stage scheme
// ═══════════════════════════════════════════════════════════════

static RK4_A0: &[f64] = &[];
static RK4_A1: &[f64] = &[0.5];
static RK4_A2: &[f64] = &[0.0, 0.5];
static RK4_A3: &[f64] = &[0.0, 0.0, 1.0];
static RK4_A: &[&[f64]] = &[RK4_A0, RK4_A1, RK4_A2, RK4_A3];

pub static RK4_TABLEAU: ButcherTableau = ButcherTableau {
    a: RK4_A,
    b: &[1.0 / 6.0, 2.0 / 6.0, 2.0 / 6.0, 1.0 / 6.0],
    c: &[0.0, 0.5, 0.5, 1.0],
    n_stages: 4,
    order: 4,
};

/// Scheme selector for the four interchangeable stepping rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RkOrder {
    Rk1,
    Rk2,
    Rk3,
    Rk4,
}

impl RkOrder {
    pub const ALL: [Self; 4] = [Self::Rk1, Self::Rk2, Self::Rk3, Self::Rk4];

    #[must_use]
    pub fn tableau(self) -> &'static ButcherTableau {
        match self {
            Self::Rk1 => &RK1_TABLEAU,
            Self::Rk2 => &RK2_TABLEAU,
            Self::Rk3 => &RK3_TABLEAU,
            Self::Rk4 => &RK4_TABLEAU,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Rk1 => "rk1",
            Self::Rk2 => "rk2",
            Self::Rk3 => "rk3",
            Self::Rk4 => "rk4",
        }
    }
}
