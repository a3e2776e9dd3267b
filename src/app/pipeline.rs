//! Shared fit-pipeline logic used by the CLI front-end and the tests.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! ingest -> loss capture -> bounded minimization
//!
//! The CLI front-end then focuses on printing between the stages.

use crate::domain::{Dataset, FitConfig, FitOutcome};
use crate::error::AppError;
use crate::fit::{L1Loss, minimize};
use crate::io::ingest::{IngestedData, load_dataset};

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub ingest: IngestedData,
    pub outcome: FitOutcome,
}

/// Load stage: read the table and derive the ordinate sequence.
pub fn load_stage(config: &FitConfig) -> Result<IngestedData, AppError> {
    load_dataset(&config.csv_path)
}

/// Fit stage: capture the loss and run the bounded minimizer.
pub fn fit_stage(dataset: &Dataset, config: &FitConfig) -> Result<FitOutcome, AppError> {
    let loss = L1Loss::new(dataset);
    minimize(&loss, config)
}

/// Execute the full pipeline and return the computed outputs.
pub fn run_fit(config: &FitConfig) -> Result<RunOutput, AppError> {
    let ingest = load_stage(config)?;
    let outcome = fit_stage(&ingest.dataset, config)?;
    Ok(RunOutput { ingest, outcome })
}
