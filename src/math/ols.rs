//! Ordinary least squares solver.
//!
//! The trend fit is one small linear regression:
//!
//! ```text
//! minimize Σ (y_i - x_i^T β)^2
//! ```
//!
//! where each row `x_i = [1, index_i]` and `β = [intercept, slope]`.
//!
//! Implementation choices:
//! - We solve via SVD, which handles the tall design matrix (n rows, 2
//!   columns) and stays well-behaved for degenerate inputs such as a
//!   single-record history, where QR-based square solves would panic.
//! - The problem is tiny (2 columns), so SVD cost is irrelevant.

use nalgebra::{DMatrix, DVector};

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the system is too ill-conditioned to solve robustly.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = x.clone().svd(true, true);

    // Try progressively looser tolerances if the strict solve fails. The
    // index column and the intercept column are nearly collinear for very
    // short histories, so the strictest tolerance can reject a usable fit.
    for &tol in &[1e-10, 1e-8, 1e-6] {
        if let Ok(beta) = svd.solve(y, tol) {
            if beta.iter().all(|b| b.is_finite()) {
                return Some(beta);
            }
        }
    }

    None
}
