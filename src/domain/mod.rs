//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - observed data points (`SamplePoint`) and the loaded `Dataset`
//! - the fitted parameter triple (`ParamVector`)
//! - run configuration (`FitConfig`) and fit outputs (`FitOutcome`)

pub mod types;

pub use types::*;
