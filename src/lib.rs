//! `xy-curves` library crate.
//!
//! The binary (`xyfit`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - output formatting stays localized (important for snapshot-style tests)
//! - the load/model/loss/optimizer stages stay individually reusable

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod models;
pub mod report;
