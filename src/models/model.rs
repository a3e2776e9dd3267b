//! The fixed parametric curve: a sinusoid with an exponential envelope,
//! rotated by `theta` and shifted by `X`.
//!
//! Double precision throughout; the exponential term is evaluated without
//! clamping, so extreme decay values may produce infinite predictions. The
//! loss layer is responsible for degrading those gracefully.

use ndarray::Array1;

use crate::domain::ParamVector;

/// Baseline level of the y-component at `t = 0`.
pub const Y_BASELINE: f64 = 42.0;

/// Angular frequency of the oscillatory term.
pub const WAVE_FREQ: f64 = 0.3;

/// x-component: `t·cosθ − exp(M·|t|)·sin(0.3·t)·sinθ + X`,
/// with `θ = theta_deg·π/180`.
pub fn x_equation(t: f64, theta_deg: f64, decay: f64, offset: f64) -> f64 {
    let theta = theta_deg.to_radians();
    let envelope = (decay * t.abs()).exp() * (WAVE_FREQ * t).sin();
    t * theta.cos() - envelope * theta.sin() + offset
}

/// y-component: `42 + t·sinθ + exp(M·|t|)·sin(0.3·t)·cosθ`,
/// with `θ = theta_deg·π/180`.
pub fn y_equation(t: f64, theta_deg: f64, decay: f64) -> f64 {
    let theta = theta_deg.to_radians();
    let envelope = (decay * t.abs()).exp() * (WAVE_FREQ * t).sin();
    Y_BASELINE + t * theta.sin() + envelope * theta.cos()
}

/// Predicted x-curve over an entire ordinate sequence.
pub fn x_curve(ts: &Array1<f64>, params: &ParamVector) -> Array1<f64> {
    ts.mapv(|t| x_equation(t, params.theta_deg, params.decay, params.offset))
}

/// Predicted y-curve over an entire ordinate sequence.
pub fn y_curve(ts: &Array1<f64>, params: &ParamVector) -> Array1<f64> {
    ts.mapv(|t| y_equation(t, params.theta_deg, params.decay))
}
