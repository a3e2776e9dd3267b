//! Command-line parsing for the L1 curve fitter.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! modeling/math code. There are no flags: the only argument is the optional
//! data path, which defaults to the conventional `xy_data.csv`.

use std::path::PathBuf;

use clap::Parser;

/// Fit the parametric curve to an x/y table and print the optimal parameters.
#[derive(Debug, Parser)]
#[command(name = "xyfit", version, about = "L1 parametric curve fitter")]
pub struct Cli {
    /// Path to the input CSV (must contain numeric `x` and `y` columns).
    #[arg(default_value = "xy_data.csv")]
    pub data: PathBuf,
}
