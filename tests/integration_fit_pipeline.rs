//! Integration tests for the full fit pipeline.
//!
//! Coverage
//! --------
//! - `app::pipeline::run_fit`: ingest -> loss capture -> bounded
//!   minimization, on a zero-noise synthetic dataset generated from known
//!   parameters.
//! - Load-stage error paths: missing file, wrong columns, malformed values.
//!
//! Exclusions
//! ----------
//! - Fine-grained behavior of the model equations, the loss, and the bound
//!   transforms — covered by unit tests next to the code.
//! - Terminal output formatting — covered by the `report` unit tests.

use std::io::Write;
use std::path::PathBuf;

use xy_curves::app::pipeline::run_fit;
use xy_curves::domain::{FitConfig, ParamVector, ordinate_sequence};
use xy_curves::error::ErrorKind;
use xy_curves::models::{x_equation, y_equation};

const TRUTH: ParamVector = ParamVector {
    theta_deg: 20.0,
    decay: 0.01,
    offset: 40.0,
};

/// Write a zero-noise CSV generated exactly from `TRUTH`.
fn write_synthetic_csv(n: usize) -> tempfile::NamedTempFile {
    let ts = ordinate_sequence(n);
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "x,y").expect("header");
    for &t in ts.iter() {
        let x = x_equation(t, TRUTH.theta_deg, TRUTH.decay, TRUTH.offset);
        let y = y_equation(t, TRUTH.theta_deg, TRUTH.decay);
        writeln!(file, "{x:.12},{y:.12}").expect("row");
    }
    file
}

fn config_for(path: PathBuf) -> FitConfig {
    FitConfig {
        csv_path: path,
        ..FitConfig::default()
    }
}

#[test]
fn synthetic_dataset_round_trips_through_the_pipeline() {
    let file = write_synthetic_csv(10);
    let run = run_fit(&config_for(file.path().to_path_buf())).expect("pipeline should run");

    assert_eq!(run.ingest.stats.n_points, 10);
    assert_eq!(run.ingest.dataset.ts.len(), 10);

    // The minimizer must make real progress from the midpoint guess and
    // stay inside the parameter box.
    let p = run.outcome.params;
    assert!(p.theta_deg > 0.0 && p.theta_deg < 50.0);
    assert!(p.decay > -0.05 && p.decay < 0.05);
    assert!(p.offset > 0.0 && p.offset < 100.0);
    assert!(run.outcome.loss >= 0.0);
    assert!(!run.outcome.loss.is_nan());

    let initial_loss = {
        use xy_curves::fit::L1Loss;
        L1Loss::new(&run.ingest.dataset).evaluate(&ParamVector::INITIAL_GUESS)
    };
    assert!(
        run.outcome.loss < initial_loss,
        "no improvement over the initial guess: {} >= {}",
        run.outcome.loss,
        initial_loss
    );

    // Zero-noise data generated from known parameters must be recovered
    // within optimizer tolerance, with a near-zero final loss.
    assert!(run.outcome.converged, "termination: {}", run.outcome.termination);
    assert!((p.theta_deg - TRUTH.theta_deg).abs() < 0.5, "theta = {}", p.theta_deg);
    assert!((p.decay - TRUTH.decay).abs() < 0.01, "decay = {}", p.decay);
    assert!((p.offset - TRUTH.offset).abs() < 1.0, "offset = {}", p.offset);
    assert!(run.outcome.loss < 1e-3, "loss = {}", run.outcome.loss);
}

#[test]
fn pipeline_is_reproducible() {
    let file = write_synthetic_csv(10);
    let config = config_for(file.path().to_path_buf());

    let a = run_fit(&config).expect("first run");
    let b = run_fit(&config).expect("second run");

    assert_eq!(a.outcome.converged, b.outcome.converged);
    assert_eq!(a.outcome.loss, b.outcome.loss);
    assert_eq!(a.outcome.params.theta_deg, b.outcome.params.theta_deg);
    assert_eq!(a.outcome.params.decay, b.outcome.params.decay);
    assert_eq!(a.outcome.params.offset, b.outcome.params.offset);
}

#[test]
fn missing_file_halts_before_any_fit() {
    let err = run_fit(&config_for(PathBuf::from("definitely/not/here.csv"))).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FileNotFound);
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn wrong_columns_is_a_schema_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "a,b").expect("header");
    writeln!(file, "1.0,2.0").expect("row");

    let err = run_fit(&config_for(file.path().to_path_buf())).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Schema);
}

#[test]
fn malformed_row_is_a_load_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "x,y").expect("header");
    writeln!(file, "1.0,2.0").expect("row");
    writeln!(file, "oops,4.0").expect("bad row");

    let err = run_fit(&config_for(file.path().to_path_buf())).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Load);
}
