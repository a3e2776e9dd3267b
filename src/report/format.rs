//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized (important for future snapshot tests)
//!
//! The result block is all-or-nothing: either every parameter line is
//! printed, or only the failure message is.

use crate::domain::FitOutcome;

/// Diagnostic line emitted after a successful load.
pub fn format_loaded_line(n_points: usize) -> String {
    format!("Successfully loaded {n_points} data points.")
}

/// Line announcing the start of the optimization stage.
pub fn format_start_line() -> String {
    "\nStarting optimization...".to_string()
}

/// Format the final result block.
pub fn format_outcome(outcome: &FitOutcome) -> String {
    let mut out = String::new();
    out.push_str("\n--- Optimization Results ---\n");

    if outcome.converged {
        out.push_str(&format!(
            "Optimal Theta (θ): {:.8} degrees\n",
            outcome.params.theta_deg
        ));
        out.push_str(&format!("Optimal M:         {:.8}\n", outcome.params.decay));
        out.push_str(&format!("Optimal X:         {:.8}\n", outcome.params.offset));
        out.push_str(&format!("Final L1 Error:    {:.8}\n", outcome.loss));
        out.push_str(&format!(
            "Optimal Theta (rad): {:.8} radians\n",
            outcome.params.theta_rad()
        ));
    } else {
        out.push_str("\n--- Optimization Failed ---\n");
        out.push_str(&format!("Message: {}\n", outcome.termination));
        out.push_str(&format!("Iterations: {}\n", outcome.iterations));
    }

    out.push_str("----------------------------");
    out
}
