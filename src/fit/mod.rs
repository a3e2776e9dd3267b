//! Bounded L1 curve fitting.
//!
//! Responsibilities:
//!
//! - the L1 objective over the captured dataset (`loss`)
//! - the parameter box and its unconstrained reparameterization (`bounds`)
//! - the L-BFGS driver that searches the box (`optimizer`)

pub mod bounds;
pub mod loss;
pub mod optimizer;

pub use bounds::*;
pub use loss::*;
pub use optimizer::*;
