//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads the input table
//! - runs the bounded L1 fit
//! - prints the result report

use clap::Parser;

use crate::cli::Cli;
use crate::domain::FitConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `xyfit` binary.
///
/// Load-stage errors propagate to `main`, which prints one diagnostic line
/// and exits with the error's code. Optimizer non-convergence is reported
/// in the result block and the process still exits normally.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = FitConfig {
        csv_path: cli.data,
        ..FitConfig::default()
    };

    let ingest = pipeline::load_stage(&config)?;
    println!("{}", crate::report::format_loaded_line(ingest.stats.n_points));

    println!("{}", crate::report::format_start_line());
    let outcome = pipeline::fit_stage(&ingest.dataset, &config)?;

    println!("{}", crate::report::format_outcome(&outcome));
    Ok(())
}
