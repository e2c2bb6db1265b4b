//! Ordinary-least-squares line fit over the extracted observations.
//!
//! Given points `(i, y_i)` we solve the 2-parameter regression
//! `y = intercept + slope * i` by building the `[1, i]` design matrix and
//! delegating to the SVD solver. The fit is closed-form and deterministic:
//! no randomness, no iteration, no convergence concerns.

use nalgebra::{DMatrix, DVector};

use crate::domain::{FitQuality, FittedLine, SamplePoint};
use crate::error::AppError;
use crate::math::solve_least_squares;

/// Fit a line through the observations.
///
/// Requires at least one point; an empty history is rejected here so the
/// emitter can never see NaN coefficients.
pub fn fit_line(points: &[SamplePoint]) -> Result<(FittedLine, FitQuality), AppError> {
    if points.is_empty() {
        return Err(AppError::data("History is empty; nothing to fit."));
    }

    let n = points.len();
    let mut design = DMatrix::zeros(n, 2);
    let mut y = DVector::zeros(n);
    for (row, p) in points.iter().enumerate() {
        design[(row, 0)] = 1.0;
        design[(row, 1)] = p.index as f64;
        y[row] = p.value;
    }

    let beta = solve_least_squares(&design, &y)
        .ok_or_else(|| AppError::numerics("Least-squares solve failed on history data."))?;

    let line = FittedLine {
        slope: beta[1],
        intercept: beta[0],
    };

    let sse: f64 = points
        .iter()
        .map(|p| {
            let r = p.value - line.predict(p.index as f64);
            r * r
        })
        .sum();
    let quality = FitQuality {
        sse,
        rmse: (sse / n as f64).sqrt(),
        n,
    };

    Ok((line, quality))
}
