//! The parameter box and its unconstrained reparameterization.
//!
//! The solver itself is an unconstrained quasi-Newton method; each bounded
//! parameter is searched through a scaled logistic map, so every iterate the
//! objective ever sees lies strictly inside its interval.

use ndarray::Array1;

use crate::domain::ParamVector;

/// Margin keeping iterates strictly inside the open parameter intervals.
pub const BOUND_MARGIN: f64 = 1e-6;

/// One parameter's search interval, shrunk by [`BOUND_MARGIN`] at both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    lo: f64,
    hi: f64,
}

impl Interval {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self {
            lo: lo + BOUND_MARGIN,
            hi: hi - BOUND_MARGIN,
        }
    }

    pub fn lo(&self) -> f64 {
        self.lo
    }

    pub fn hi(&self) -> f64 {
        self.hi
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.lo && v <= self.hi
    }

    /// Map a bounded value onto the unconstrained line (scaled logit).
    pub fn to_unconstrained(&self, v: f64) -> f64 {
        let u = ((v - self.lo) / (self.hi - self.lo)).clamp(f64::EPSILON, 1.0 - f64::EPSILON);
        (u / (1.0 - u)).ln()
    }

    /// Map an unconstrained coordinate back into the interval (scaled sigmoid).
    pub fn to_bounded(&self, z: f64) -> f64 {
        self.lo + (self.hi - self.lo) * sigmoid(z)
    }
}

/// Logistic function evaluated without overflow for any `z`.
fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

/// The fit's box constraints:
/// theta ∈ (0, 50) degrees, decay ∈ (−0.05, 0.05), offset ∈ (0, 100).
#[derive(Debug, Clone, Copy)]
pub struct ParamBounds {
    pub theta_deg: Interval,
    pub decay: Interval,
    pub offset: Interval,
}

impl Default for ParamBounds {
    fn default() -> Self {
        Self {
            theta_deg: Interval::new(0.0, 50.0),
            decay: Interval::new(-0.05, 0.05),
            offset: Interval::new(0.0, 100.0),
        }
    }
}

impl ParamBounds {
    /// Bounded parameters → unconstrained solver coordinates.
    pub fn to_unconstrained(&self, p: &ParamVector) -> Array1<f64> {
        Array1::from(vec![
            self.theta_deg.to_unconstrained(p.theta_deg),
            self.decay.to_unconstrained(p.decay),
            self.offset.to_unconstrained(p.offset),
        ])
    }

    /// Unconstrained solver coordinates → bounded parameters.
    pub fn to_bounded(&self, z: &Array1<f64>) -> ParamVector {
        ParamVector {
            theta_deg: self.theta_deg.to_bounded(z[0]),
            decay: self.decay.to_bounded(z[1]),
            offset: self.offset.to_bounded(z[2]),
        }
    }

    pub fn contains(&self, p: &ParamVector) -> bool {
        self.theta_deg.contains(p.theta_deg)
            && self.decay.contains(p.decay)
            && self.offset.contains(p.offset)
    }
}
