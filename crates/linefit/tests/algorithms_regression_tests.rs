#![cfg(feature = "dev")]
//! Tests for the ordinary least squares line fit.
//!
//! These tests verify the closed-form fit against independent reference
//! computations, including:
//! - Exact recovery of collinear data
//! - Agreement with the closed-form normal equations on noisy data
//! - Explicit failure on degenerate (constant-x) input
//! - Precondition errors
//!
//! ## Test Organization
//!
//! 1. **Exact Fits** - Collinear data, negative slopes
//! 2. **Reference Agreement** - Noisy data vs. independent computation
//! 3. **Degenerate Input** - Constant x at several magnitudes
//! 4. **Preconditions** - Too few points, mismatched lengths
//! 5. **Prediction** - Line evaluation

use approx::assert_relative_eq;

use linefit::internals::algorithms::regression::LineModel;
use linefit::internals::primitives::errors::LineFitError;

// ============================================================================
// Helper Functions
// ============================================================================

/// Independent closed-form reference: (slope, intercept) from the normal
/// equations, computed directly from sums.
fn reference_fit(x: &[f64], y: &[f64]) -> (f64, f64) {
    let n = x.len() as f64;
    let sum_x: f64 = x.iter().sum();
    let sum_y: f64 = y.iter().sum();
    let sum_xy: f64 = x.iter().zip(y.iter()).map(|(a, b)| a * b).sum();
    let sum_xx: f64 = x.iter().map(|a| a * a).sum();

    let slope = (n * sum_xy - sum_x * sum_y) / (n * sum_xx - sum_x * sum_x);
    let intercept = (sum_y - slope * sum_x) / n;
    (slope, intercept)
}

// ============================================================================
// Exact Fit Tests
// ============================================================================

/// Test exact recovery of a collinear set.
///
/// Verifies that y = 2x + 1 data yields slope 2 and intercept 1.
#[test]
fn test_fit_collinear() {
    let x = [0.0f64, 1.0, 2.0];
    let y = [1.0f64, 3.0, 5.0];

    let model = LineModel::fit_ols(&x, &y).unwrap();
    assert_relative_eq!(model.slope, 2.0, epsilon = 1e-12);
    assert_relative_eq!(model.intercept, 1.0, epsilon = 1e-12);
    assert_relative_eq!(model.x_mean, 1.0, epsilon = 1e-12);
    assert_relative_eq!(model.y_mean, 3.0, epsilon = 1e-12);
}

/// Test a negative slope fits exactly.
///
/// Verifies sign handling in the covariance accumulation.
#[test]
fn test_fit_negative_slope() {
    let x = [0.0f64, 1.0, 2.0];
    let y = [5.0f64, 3.0, 1.0];

    let model = LineModel::fit_ols(&x, &y).unwrap();
    assert_relative_eq!(model.slope, -2.0, epsilon = 1e-12);
    assert_relative_eq!(model.intercept, 5.0, epsilon = 1e-12);
}

// ============================================================================
// Reference Agreement Tests
// ============================================================================

/// Test agreement with an independent closed-form computation.
///
/// Verifies slope and intercept match the normal-equation reference to
/// 1e-9 relative tolerance on noisy data.
#[test]
fn test_fit_matches_reference() {
    let x = [1.0f64, 2.0, 3.0, 4.0, 5.0];
    let y = [2.1f64, 4.0, 5.9, 8.1, 10.0];

    let model = LineModel::fit_ols(&x, &y).unwrap();
    let (slope_ref, intercept_ref) = reference_fit(&x, &y);

    // Hand-checked: slope 1.99, intercept 0.05
    assert_relative_eq!(model.slope, 1.99, max_relative = 1e-9);
    assert_relative_eq!(model.intercept, 0.05, max_relative = 1e-6);
    assert_relative_eq!(model.slope, slope_ref, max_relative = 1e-9);
    assert_relative_eq!(model.intercept, intercept_ref, max_relative = 1e-9);
}

/// Test agreement at large magnitudes.
///
/// Verifies the fit holds up away from unit scale.
#[test]
fn test_fit_large_magnitudes() {
    let x = [1.0e6f64, 2.0e6, 3.0e6, 4.0e6];
    let y = [2.5e6f64, 4.5e6, 6.5e6, 8.5e6];

    let model = LineModel::fit_ols(&x, &y).unwrap();
    assert_relative_eq!(model.slope, 2.0, max_relative = 1e-9);
    assert_relative_eq!(model.intercept, 0.5e6, max_relative = 1e-6);
}

// ============================================================================
// Degenerate Input Tests
// ============================================================================

/// Test constant x fails explicitly.
///
/// Verifies the undefined-slope case surfaces as a distinct error rather
/// than an infinite or NaN slope.
#[test]
fn test_fit_degenerate_zero_x() {
    let x = [0.0f64, 0.0];
    let y = [0.0f64, 5.0];

    let res = LineModel::fit_ols(&x, &y);
    assert!(
        matches!(res, Err(LineFitError::DegenerateXVariance { n: 2 })),
        "Constant x should be a degenerate fit"
    );
}

/// Test constant non-zero x fails explicitly.
///
/// Verifies degeneracy detection away from zero.
#[test]
fn test_fit_degenerate_nonzero_x() {
    let x = [2.5f64, 2.5, 2.5];
    let y = [1.0f64, 2.0, 3.0];

    let res = LineModel::fit_ols(&x, &y);
    assert!(matches!(
        res,
        Err(LineFitError::DegenerateXVariance { n: 3 })
    ));
}

/// Test x identical up to rounding fails explicitly.
///
/// Verifies the relative tolerance catches a column whose deviations are
/// pure floating-point noise.
#[test]
fn test_fit_degenerate_rounding_noise() {
    let x = [0.1f64 + 0.2, 0.3, 0.3];
    let y = [1.0f64, 2.0, 3.0];

    let res = LineModel::fit_ols(&x, &y);
    assert!(matches!(res, Err(LineFitError::DegenerateXVariance { .. })));
}

// ============================================================================
// Precondition Tests
// ============================================================================

/// Test a single sample is rejected.
///
/// Verifies the two-point minimum for a two-parameter line.
#[test]
fn test_fit_single_sample() {
    let res = LineModel::fit_ols(&[1.0f64], &[2.0f64]);
    assert!(matches!(
        res,
        Err(LineFitError::InsufficientData { got: 1, min: 2 })
    ));
}

/// Test empty input is rejected.
///
/// Verifies the minimum check fires before any arithmetic.
#[test]
fn test_fit_empty() {
    let empty: [f64; 0] = [];
    let res = LineModel::fit_ols(&empty, &empty);
    assert!(matches!(
        res,
        Err(LineFitError::InsufficientData { got: 0, min: 2 })
    ));
}

/// Test mismatched array lengths are rejected.
///
/// Verifies the parallel-array contract.
#[test]
fn test_fit_mismatched_lengths() {
    let res = LineModel::fit_ols(&[1.0f64, 2.0], &[1.0f64]);
    assert!(matches!(
        res,
        Err(LineFitError::MismatchedInputs { x_len: 2, y_len: 1 })
    ));
}

// ============================================================================
// Prediction Tests
// ============================================================================

/// Test line evaluation at arbitrary x.
///
/// Verifies `predict` is the pure function slope·x + intercept.
#[test]
fn test_predict() {
    let model = LineModel {
        slope: 2.0f64,
        intercept: 1.0,
        x_mean: 0.0,
        y_mean: 0.0,
    };

    assert_relative_eq!(model.predict(3.0), 7.0, epsilon = 1e-12);
    assert_relative_eq!(model.predict(-1.5), -2.0, epsilon = 1e-12);
    // Pure: repeated evaluation gives the same value
    assert_relative_eq!(model.predict(3.0), model.predict(3.0), epsilon = 0.0);
}
