//! Fit-quality metrics.
//!
//! ## Purpose
//!
//! This module computes goodness-of-fit metrics from the observed
//! y-values and the fitted line values: R², residuals, and RMSE.
//!
//! ## Design notes
//!
//! * **Residual-based**: Everything derives from y_i − ŷ_i and the mean
//!   of y.
//! * **Degenerate y pinned**: When the y-values carry no variance, R² is
//!   pinned to 1 (the flat line fits perfectly) or 0 (nothing to
//!   explain) instead of dividing by zero.
//!
//! ## Invariants
//!
//! * R² ≤ 1, and is never NaN for finite inputs.
//! * RMSE is non-negative.
//!
//! ## Non-goals
//!
//! * This module does not perform the fit itself.
//! * This module does not provide p-values or hypothesis tests.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Metrics
// ============================================================================

/// Compute the coefficient of determination (R²).
///
/// R² = 1 − SS_res / SS_tot, where SS_res is the residual sum of squares
/// and SS_tot the total sum of squares around the mean of `y`.
pub fn r_squared<T: Float>(y: &[T], fitted: &[T]) -> T {
    let n = y.len();
    if n == 0 {
        return T::zero();
    }

    let n_t = T::from(n).unwrap_or(T::one());
    let sum = y.iter().copied().fold(T::zero(), |acc, v| acc + v);
    let mean = sum / n_t;

    // SS_tot and SS_res in one pass
    let (ss_tot, ss_res) =
        y.iter()
            .zip(fitted.iter())
            .fold((T::zero(), T::zero()), |(tot, res), (&yi, &fi)| {
                let deviation = yi - mean;
                let residual = yi - fi;
                (tot + deviation * deviation, res + residual * residual)
            });

    if ss_tot == T::zero() {
        // All y values are identical
        if ss_res == T::zero() {
            T::one()
        } else {
            T::zero()
        }
    } else {
        T::one() - ss_res / ss_tot
    }
}

/// Compute residuals y_i − ŷ_i.
pub fn residuals<T: Float>(y: &[T], fitted: &[T]) -> Vec<T> {
    y.iter()
        .zip(fitted.iter())
        .map(|(&yi, &fi)| yi - fi)
        .collect()
}

/// Compute the root mean squared error of the fit.
pub fn rmse<T: Float>(y: &[T], fitted: &[T]) -> T {
    let n = y.len();
    if n == 0 {
        return T::zero();
    }

    let n_t = T::from(n).unwrap_or(T::one());
    let rss = y
        .iter()
        .zip(fitted.iter())
        .fold(T::zero(), |acc, (&yi, &fi)| {
            let r = yi - fi;
            acc + r * r
        });

    (rss / n_t).sqrt()
}
