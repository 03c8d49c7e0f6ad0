//! The fit report returned to callers.
//!
//! ## Purpose
//!
//! This module defines the [`FitReport`] struct that packages a completed
//! run: fitted coefficients, R², the cleaned data, the fitted line values
//! a plotting caller needs, and the configured display precision.
//!
//! ## Design notes
//!
//! * **Plot hand-off**: The report keeps the cleaned (x, y) points and
//!   the fitted value at each x so a caller can draw scatter and line
//!   without recomputing anything; `predict` covers arbitrary x.
//! * **Ergonomics**: Implements `Display` for human-readable output, and
//!   per-field display strings rendered with the configured precision.
//! * **Generics**: Reports are generic over `Float` types.
//!
//! ## Invariants
//!
//! * `x`, `y`, and `fitted` have the same length, the count of rows used.
//! * `residuals`, when present, has that length too.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations beyond line evaluation;
//!   it only stores results.
//! * This module does not draw charts; it supplies the data for them.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::math::render::Precision;

// ============================================================================
// Report Structure
// ============================================================================

/// Structured result of one fit run.
#[derive(Debug, Clone, PartialEq)]
pub struct FitReport<T> {
    /// Fitted slope (a).
    pub slope: T,

    /// Fitted intercept (b).
    pub intercept: T,

    /// Coefficient of determination.
    pub r_squared: T,

    /// Root mean squared error of the fit.
    pub rmse: T,

    /// Cleaned x-values, in input order.
    pub x: Vec<T>,

    /// Cleaned y-values, matching `x`.
    pub y: Vec<T>,

    /// Fitted line value at each x (for drawing the fit line).
    pub fitted: Vec<T>,

    /// Residuals y_i − ŷ_i, when requested.
    pub residuals: Option<Vec<T>>,

    /// Number of rows used in the fit.
    pub rows_used: usize,

    /// Number of input rows dropped as blank or mid-edit.
    pub rows_dropped: usize,

    /// Display precision the report renders with.
    pub precision: Precision,
}

impl<T: Float> FitReport<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Predict the y-value for a given x using the fitted line.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.intercept + self.slope * x
    }

    /// The fitted line values, one per cleaned x (in input order).
    pub fn line(&self) -> &[T] {
        &self.fitted
    }

    /// The cleaned scatter points as (x, y) pairs.
    pub fn points(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Check if residuals were computed.
    pub fn has_residuals(&self) -> bool {
        self.residuals.is_some()
    }

    // ========================================================================
    // Rendered Fields
    // ========================================================================

    /// The slope rendered with the configured precision.
    pub fn slope_display(&self) -> String {
        self.precision.coefficient(self.slope)
    }

    /// The intercept rendered with the configured precision.
    pub fn intercept_display(&self) -> String {
        self.precision.coefficient(self.intercept)
    }

    /// R² rendered with the configured precision.
    pub fn r_squared_display(&self) -> String {
        self.precision.r_squared(self.r_squared)
    }

    /// The fitted line as an equation string, `Y = a × X + b`.
    pub fn equation(&self) -> String {
        format!(
            "Y = {} × X + {}",
            self.slope_display(),
            self.intercept_display()
        )
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for FitReport<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Linear Fit Summary:")?;
        writeln!(f, "  Rows used:     {}", self.rows_used)?;
        if self.rows_dropped > 0 {
            writeln!(f, "  Rows dropped:  {}", self.rows_dropped)?;
        }
        writeln!(f, "  Slope (a):     {}", self.slope_display())?;
        writeln!(f, "  Intercept (b): {}", self.intercept_display())?;
        writeln!(f, "  R²:            {}", self.r_squared_display())?;
        writeln!(f, "  RMSE:          {:.6}", self.rmse)?;
        writeln!(f, "  Equation:      {}", self.equation())?;
        writeln!(f)?;

        let has_resid = self.residuals.is_some();

        // Build header
        write!(f, "{:>8} {:>12} {:>12}", "X", "Y", "Fit")?;
        if has_resid {
            write!(f, " {:>12}", "Residual")?;
        }
        writeln!(f)?;

        // Separator line
        let line_width = 34 + if has_resid { 13 } else { 0 };
        writeln!(f, "{:-<width$}", "", width = line_width)?;

        // Data rows (show first 10 and last 10 if more than 20 points)
        let n = self.x.len();
        let show_all = n <= 20;
        let rows_to_show: Vec<usize> = if show_all {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            // Add ellipsis if we skipped rows
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            write!(
                f,
                "{:>8.2} {:>12.6} {:>12.6}",
                self.x[idx], self.y[idx], self.fitted[idx]
            )?;

            if let Some(residuals) = &self.residuals {
                write!(f, " {:>12.6}", residuals[idx])?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
