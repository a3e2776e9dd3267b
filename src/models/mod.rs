//! Parametric model evaluation.
//!
//! The fit relies on two primitive operations:
//! - predict x(t) and y(t) for a single ordinate value (scalar forms)
//! - predict whole curves over the ordinate sequence (vectorized forms)

pub mod model;

pub use model::*;
