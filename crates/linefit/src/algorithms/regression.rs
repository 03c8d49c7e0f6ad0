//! Ordinary least squares line fitting.
//!
//! ## Purpose
//!
//! This module fits y = a·x + b through a validated sample set by
//! ordinary least squares with an intercept term, and evaluates the
//! fitted line at arbitrary x.
//!
//! ## Design notes
//!
//! * **Closed form**: Two accumulation passes (means, then deviation
//!   products) with no matrix machinery; the model has one predictor.
//! * **Explicit degeneracy**: A zero-variance x column makes the slope
//!   undefined. The fit fails with a distinct error instead of emitting
//!   an infinite or NaN slope.
//! * **Generics**: The fit is generic over `Float` types.
//!
//! ## Invariants
//!
//! * A returned model has finite slope and intercept for finite inputs.
//! * `predict` is pure: callers can redraw the fit line without
//!   re-fitting.
//!
//! ## Non-goals
//!
//! * This module does not clean or validate raw input (see
//!   `engine::validator`).
//! * This module does not compute fit-quality metrics (see
//!   `evaluation::diagnostics`).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::LineFitError;

/// Minimum samples for a two-parameter line fit.
const MIN_SAMPLES: usize = 2;

/// Relative tolerance for declaring the x-variance zero.
///
/// Compared against Σx² so that x columns identical up to rounding are
/// caught at any magnitude.
const DEGENERACY_RTOL: f64 = 1e-12;

// ============================================================================
// Line Model
// ============================================================================

/// Fitted line y = slope·x + intercept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineModel<T: Float> {
    /// Slope (a).
    pub slope: T,

    /// Intercept (b).
    pub intercept: T,

    /// Mean of the x-values used in the fit.
    pub x_mean: T,

    /// Mean of the y-values used in the fit.
    pub y_mean: T,
}

impl<T: Float> LineModel<T> {
    /// Predict the y-value for a given x using the model.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.intercept + self.slope * x
    }

    /// Fit an ordinary least squares line with intercept.
    ///
    /// # Errors
    ///
    /// * [`LineFitError::MismatchedInputs`] when `x` and `y` differ in length.
    /// * [`LineFitError::InsufficientData`] with fewer than 2 samples.
    /// * [`LineFitError::DegenerateXVariance`] when all x-values are identical.
    pub fn fit_ols(x: &[T], y: &[T]) -> Result<Self, LineFitError> {
        let n = x.len();
        if n != y.len() {
            return Err(LineFitError::MismatchedInputs {
                x_len: n,
                y_len: y.len(),
            });
        }
        if n < MIN_SAMPLES {
            return Err(LineFitError::InsufficientData {
                got: n,
                min: MIN_SAMPLES,
            });
        }

        let n_t = T::from(n).unwrap_or(T::one());

        let mut sum_x = T::zero();
        let mut sum_y = T::zero();

        for i in 0..n {
            sum_x = sum_x + x[i];
            sum_y = sum_y + y[i];
        }

        let x_mean = sum_x / n_t;
        let y_mean = sum_y / n_t;

        let mut variance = T::zero();
        let mut covariance = T::zero();
        let mut sum_xx = T::zero();

        for i in 0..n {
            let dx = x[i] - x_mean;
            let dy = y[i] - y_mean;
            variance = variance + dx * dx;
            covariance = covariance + dx * dy;
            sum_xx = sum_xx + x[i] * x[i];
        }

        // Σdx² vanishes relative to Σx² exactly when the x column is
        // constant up to rounding; the slope denominator is then zero.
        let tol = T::from(DEGENERACY_RTOL).unwrap_or(T::epsilon());
        if variance <= tol * sum_xx {
            return Err(LineFitError::DegenerateXVariance { n });
        }

        let slope = covariance / variance;
        let intercept = y_mean - slope * x_mean;

        Ok(Self {
            slope,
            intercept,
            x_mean,
            y_mean,
        })
    }
}
