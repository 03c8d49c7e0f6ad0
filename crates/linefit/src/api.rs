//! High-level API for line fitting and reporting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder for configuring how table cells are coerced and how the
//! report is rendered, and the reporter that runs the full
//! clean → fit → evaluate → package pipeline on each call.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all
//!   parameters.
//! * **Validated**: Configuration is validated when `build()` is called;
//!   duplicate parameter settings are rejected.
//! * **Stateless runs**: The reporter holds configuration only. Every
//!   `fit_rows` call rebuilds the sample set from the rows it is given
//!   and returns a fresh report; nothing survives between runs.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`LineFitBuilder`] via `LineFit::new()`.
//! 2. Chain configuration methods (`.coercion()`, `.precision()`, ...).
//! 3. Call `.build()` to obtain a [`LineFitReporter`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::str::FromStr;
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics;

// Publicly re-exported types
pub use crate::algorithms::regression::LineModel;
pub use crate::engine::output::FitReport;
pub use crate::math::render::Precision;
pub use crate::primitives::errors::LineFitError;
pub use crate::primitives::table::{CellCoercion, Column, RawCell, RawRow, SampleSet};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a [`LineFitReporter`].
#[derive(Debug, Clone, Default)]
pub struct LineFitBuilder {
    /// Cell coercion strategy.
    pub coercion: Option<CellCoercion>,

    /// Display precision for the report.
    pub precision: Option<Precision>,

    /// Whether to include residuals in the report.
    pub return_residuals: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl LineFitBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            coercion: None,
            precision: None,
            return_residuals: None,
            duplicate_param: None,
        }
    }

    /// Set the cell coercion strategy (default: [`CellCoercion::Numeric`]).
    pub fn coercion(mut self, coercion: CellCoercion) -> Self {
        if self.coercion.is_some() {
            self.duplicate_param = Some("coercion");
        }
        self.coercion = Some(coercion);
        self
    }

    /// Set the display precision (default: significant digits, 4/3).
    pub fn precision(mut self, precision: Precision) -> Self {
        if self.precision.is_some() {
            self.duplicate_param = Some("precision");
        }
        self.precision = Some(precision);
        self
    }

    /// Include residuals in the report.
    pub fn return_residuals(mut self) -> Self {
        self.return_residuals = Some(true);
        self
    }

    /// Build the reporter.
    ///
    /// # Errors
    ///
    /// * [`LineFitError::DuplicateParameter`] if a parameter was set twice.
    /// * [`LineFitError::InvalidPrecision`] for out-of-range digit or
    ///   place counts.
    pub fn build(self) -> Result<LineFitReporter, LineFitError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let precision = self.precision.unwrap_or_default();
        Validator::validate_precision(&precision)?;

        Ok(LineFitReporter {
            coercion: self.coercion.unwrap_or_default(),
            precision,
            return_residuals: self.return_residuals.unwrap_or(false),
        })
    }
}

// ============================================================================
// Reporter
// ============================================================================

/// Configured line-fit reporter.
pub struct LineFitReporter {
    coercion: CellCoercion,
    precision: Precision,
    return_residuals: bool,
}

impl LineFitReporter {
    /// Fit a line through the current table rows and build the report.
    ///
    /// Rows with blank (or mid-edit) cells are dropped; everything else
    /// is coerced under the configured strategy, fitted by ordinary
    /// least squares, and packaged with R² and the fitted line values.
    ///
    /// # Errors
    ///
    /// * [`LineFitError::NonNumericCell`] when a retained cell cannot be
    ///   coerced to a finite float.
    /// * [`LineFitError::InsufficientData`] when fewer than 2 valid rows
    ///   remain.
    /// * [`LineFitError::DegenerateXVariance`] when all x-values are
    ///   identical.
    pub fn fit_rows<T: Float + FromStr>(
        &self,
        rows: &[RawRow<T>],
    ) -> Result<FitReport<T>, LineFitError> {
        let samples = Validator::clean_rows(rows, self.coercion)?;
        self.package(samples)
    }

    /// Fit a line through parallel x/y arrays.
    ///
    /// Convenience entry for callers that already hold numeric arrays;
    /// equivalent to [`fit_rows`](Self::fit_rows) under
    /// [`CellCoercion::Numeric`]. Pairs containing a non-finite value
    /// are dropped like blank rows.
    ///
    /// # Errors
    ///
    /// * [`LineFitError::MismatchedInputs`] when the arrays differ in
    ///   length.
    /// * Otherwise as for [`fit_rows`](Self::fit_rows).
    pub fn fit<T: Float>(&self, x: &[T], y: &[T]) -> Result<FitReport<T>, LineFitError> {
        Validator::validate_parallel_inputs(x, y)?;

        let mut samples = SampleSet::with_capacity(x.len());
        for (&xi, &yi) in x.iter().zip(y.iter()) {
            if xi.is_finite() && yi.is_finite() {
                samples.push(xi, yi);
            } else {
                samples.dropped += 1;
            }
        }

        self.package(samples)
    }

    /// Run the fit and package the report from a cleaned sample set.
    fn package<T: Float>(&self, samples: SampleSet<T>) -> Result<FitReport<T>, LineFitError> {
        Validator::validate_sample_count(samples.len())?;

        let model = LineModel::fit_ols(&samples.x, &samples.y)?;

        let fitted: Vec<T> = samples.x.iter().map(|&xi| model.predict(xi)).collect();
        let r_squared = diagnostics::r_squared(&samples.y, &fitted);
        let rmse = diagnostics::rmse(&samples.y, &fitted);
        let residuals = if self.return_residuals {
            Some(diagnostics::residuals(&samples.y, &fitted))
        } else {
            None
        };

        Ok(FitReport {
            slope: model.slope,
            intercept: model.intercept,
            r_squared,
            rmse,
            rows_used: samples.len(),
            rows_dropped: samples.dropped,
            x: samples.x,
            y: samples.y,
            fitted,
            residuals,
            precision: self.precision,
        })
    }
}
