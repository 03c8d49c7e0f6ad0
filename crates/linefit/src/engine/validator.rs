//! Input validation and table cleaning.
//!
//! ## Purpose
//!
//! This module provides the validation functions for raw table rows,
//! reporter configuration, and sample counts. It implements the cleaning
//! pass that turns the widget's rows into a [`SampleSet`].
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Drop before coerce**: A row with a blank cell is skipped before
//!   either of its cells is interpreted, so an incomplete row never
//!   raises a parse error.
//! * **No partial output**: A non-numeric retained cell fails the whole
//!   cleaning pass; no partial sample set escapes.
//! * **Generics**: Cleaning is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Blank vs invalid**: Blank cells (and mid-edit NaN values from
//!   numeric widgets) are expected and skipped; text that fails to parse
//!   is an input error the user must fix.
//! * **Coercion strategy**: One entry point serves both widget variants;
//!   [`CellCoercion`] selects the interpretation.
//!
//! ## Invariants
//!
//! * A returned [`SampleSet`] contains only finite values.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not fit anything.
//! * This module does not correct invalid input.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::string::String;

// External dependencies
use core::str::FromStr;
use num_traits::Float;

// Internal dependencies
use crate::math::parse::{parse_cell, ParsedCell};
use crate::math::render::Precision;
use crate::primitives::errors::LineFitError;
use crate::primitives::table::{CellCoercion, Column, RawCell, RawRow, SampleSet};

/// Minimum valid rows for a line fit.
pub const MIN_ROWS: usize = 2;

/// Largest digit or place count a `f64` rendering can honor.
const MAX_PRECISION: usize = 17;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for reporter configuration and table input.
///
/// Provides static methods that return `Result<(), LineFitError>` (or the
/// cleaned sample set) and fail fast upon the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Table Cleaning
    // ========================================================================

    /// Clean raw rows into a validated sample set.
    ///
    /// Rows with a blank cell (or, under [`CellCoercion::Numeric`], a
    /// non-finite value) are dropped and counted. Any retained cell that
    /// cannot be coerced to a finite float fails the whole pass with
    /// [`LineFitError::NonNumericCell`].
    pub fn clean_rows<T: Float + FromStr>(
        rows: &[RawRow<T>],
        coercion: CellCoercion,
    ) -> Result<SampleSet<T>, LineFitError> {
        let mut samples = SampleSet::with_capacity(rows.len());

        for (index, row) in rows.iter().enumerate() {
            let cx = Self::coerce_cell(&row.x, coercion);
            let cy = Self::coerce_cell(&row.y, coercion);

            // A blank cell drops the row before its sibling is judged.
            if cx == ParsedCell::Blank || cy == ParsedCell::Blank {
                samples.dropped += 1;
                continue;
            }

            if cx == ParsedCell::Invalid {
                return Err(Self::non_numeric(index, Column::X, &row.x));
            }
            if cy == ParsedCell::Invalid {
                return Err(Self::non_numeric(index, Column::Y, &row.y));
            }

            if let (ParsedCell::Value(x), ParsedCell::Value(y)) = (cx, cy) {
                samples.push(x, y);
            }
        }

        Ok(samples)
    }

    /// Interpret one cell under the configured coercion strategy.
    fn coerce_cell<T: Float + FromStr>(cell: &RawCell<T>, coercion: CellCoercion) -> ParsedCell<T> {
        match cell {
            RawCell::Empty => ParsedCell::Blank,
            // Numeric widgets report NaN for cells in an invalid
            // intermediate state; treat those rows as incomplete.
            RawCell::Number(value) => {
                if value.is_finite() {
                    ParsedCell::Value(*value)
                } else {
                    ParsedCell::Blank
                }
            }
            RawCell::Text(text) => match coercion {
                // A text cell from a numeric widget violates the widget
                // contract; surface it instead of silently dropping data.
                CellCoercion::Numeric => ParsedCell::Invalid,
                CellCoercion::Text => parse_cell(text),
            },
        }
    }

    /// Build the non-numeric-cell error with the offending content.
    fn non_numeric<T: Float>(row: usize, column: Column, cell: &RawCell<T>) -> LineFitError {
        let cell = match cell {
            RawCell::Text(text) => text.clone(),
            RawCell::Number(value) => format!("{}", value.to_f64().unwrap_or(f64::NAN)),
            RawCell::Empty => String::new(),
        };
        LineFitError::NonNumericCell { row, column, cell }
    }

    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate that enough rows survived cleaning for a line fit.
    pub fn validate_sample_count(got: usize) -> Result<(), LineFitError> {
        if got < MIN_ROWS {
            return Err(LineFitError::InsufficientData { got, min: MIN_ROWS });
        }
        Ok(())
    }

    /// Validate parallel x/y arrays supplied directly by a caller.
    pub fn validate_parallel_inputs<T: Float>(x: &[T], y: &[T]) -> Result<(), LineFitError> {
        if x.len() != y.len() {
            return Err(LineFitError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Ok(())
    }

    // ========================================================================
    // Configuration Validation
    // ========================================================================

    /// Validate a precision mode's digit and place counts.
    pub fn validate_precision(precision: &Precision) -> Result<(), LineFitError> {
        match *precision {
            Precision::Significant {
                coefficient_digits,
                r_squared_digits,
            } => {
                Self::validate_digits("coefficient_digits", coefficient_digits)?;
                Self::validate_digits("r_squared_digits", r_squared_digits)?;
            }
            Precision::Fixed {
                coefficient_places,
                r_squared_places,
            } => {
                Self::validate_places("coefficient_places", coefficient_places)?;
                Self::validate_places("r_squared_places", r_squared_places)?;
            }
        }
        Ok(())
    }

    /// Significant digits must be in `1..=17`.
    fn validate_digits(parameter: &'static str, got: usize) -> Result<(), LineFitError> {
        if got == 0 || got > MAX_PRECISION {
            return Err(LineFitError::InvalidPrecision { parameter, got });
        }
        Ok(())
    }

    /// Decimal places must be at most 17.
    fn validate_places(parameter: &'static str, got: usize) -> Result<(), LineFitError> {
        if got > MAX_PRECISION {
            return Err(LineFitError::InvalidPrecision { parameter, got });
        }
        Ok(())
    }

    /// Validate that no parameter was set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), LineFitError> {
        if let Some(parameter) = duplicate_param {
            return Err(LineFitError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
