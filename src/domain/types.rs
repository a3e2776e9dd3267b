use std::path::PathBuf;

use ndarray::Array1;

/// First ordinate value of the derived sequence.
pub const T_START: f64 = 6.0;
/// Last ordinate value of the derived sequence.
pub const T_END: f64 = 60.0;

/// One observed data point. Immutable once loaded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
}

/// Loaded samples plus the derived ordinate sequence.
///
/// The ordinate values are evenly spaced over `[T_START, T_END]` with one
/// value per sample row. The file contents never influence them: uniform
/// sampling over the fixed t-range is a domain assumption of the data's
/// provenance, deliberately preserved.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub points: Vec<SamplePoint>,
    pub ts: Array1<f64>,
}

impl Dataset {
    /// Build a dataset from row-ordered points, deriving the ordinate
    /// sequence from the row count.
    pub fn from_points(points: Vec<SamplePoint>) -> Self {
        let ts = ordinate_sequence(points.len());
        Self { points, ts }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Observed x values in row order.
    pub fn xs(&self) -> Array1<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// Observed y values in row order.
    pub fn ys(&self) -> Array1<f64> {
        self.points.iter().map(|p| p.y).collect()
    }
}

/// Evenly spaced ordinate values over `[T_START, T_END]`.
///
/// `n == 1` yields just `[T_START]`; the endpoints are fixed for every
/// other `n`.
pub fn ordinate_sequence(n: usize) -> Array1<f64> {
    Array1::linspace(T_START, T_END, n)
}

/// The three parameters the fit searches over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamVector {
    /// Rotation angle in degrees.
    pub theta_deg: f64,
    /// Decay-rate coefficient of the exponential envelope.
    pub decay: f64,
    /// Horizontal offset.
    pub offset: f64,
}

impl ParamVector {
    /// Fixed starting point for the minimizer: the midpoints of the
    /// nominal parameter ranges.
    pub const INITIAL_GUESS: ParamVector = ParamVector {
        theta_deg: 25.0,
        decay: 0.0,
        offset: 50.0,
    };

    /// The angle converted to radians.
    pub fn theta_rad(&self) -> f64 {
        self.theta_deg.to_radians()
    }
}

/// Run configuration resolved from the CLI.
#[derive(Debug, Clone)]
pub struct FitConfig {
    pub csv_path: PathBuf,
    /// Function-value convergence tolerance.
    pub tol_cost: f64,
    /// Gradient-norm convergence tolerance.
    pub tol_grad: f64,
    /// Iteration budget for the minimizer.
    pub max_iters: u64,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from("xy_data.csv"),
            tol_cost: 1e-10,
            tol_grad: 1e-7,
            max_iters: 1000,
        }
    }
}

/// Summary stats about the loaded points, for diagnostics.
#[derive(Debug, Clone)]
pub struct DatasetStats {
    pub n_points: usize,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// Final result of one fit run. Created once, printed, discarded.
#[derive(Debug, Clone)]
pub struct FitOutcome {
    /// Whether the minimizer reported convergence.
    pub converged: bool,
    /// Best parameter vector found.
    pub params: ParamVector,
    /// L1 error at `params`.
    pub loss: f64,
    /// Solver iterations performed.
    pub iterations: u64,
    /// Solver termination reason, used verbatim in the failure report.
    pub termination: String,
}
