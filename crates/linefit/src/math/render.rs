//! Number rendering for report display.
//!
//! ## Purpose
//!
//! This module implements the two display policies a report can be
//! rendered with: shortest-unambiguous significant digits (the compact
//! on-screen style) and fixed decimal places (the long verbatim style).
//!
//! ## Design notes
//!
//! * **Significant mode** mirrors printf `%#.Ng`: trailing zeros are kept
//!   so the digit count is visible, and very large or very small
//!   magnitudes switch to exponential form.
//! * **Fixed mode** is a plain `{:.N}` rendering.
//! * Rendering is pure; values are converted to `f64` once and formatted
//!   from there.
//!
//! ## Invariants
//!
//! * Significant rendering always shows exactly `digits` significant
//!   digits for finite non-zero values.
//! * Re-parsing a rendered value recovers the original to the displayed
//!   precision.
//!
//! ## Non-goals
//!
//! * This module does not choose which policy applies to which report
//!   field; the [`Precision`] mode carries that decision.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::string::String;

// External dependencies
use num_traits::Float;

// ============================================================================
// Precision Mode
// ============================================================================

/// Display policy for the numbers in a fit report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// Significant-digit rendering (compact).
    Significant {
        /// Digits applied to slope and intercept.
        coefficient_digits: usize,
        /// Digits applied to R².
        r_squared_digits: usize,
    },

    /// Fixed-decimal rendering (long).
    Fixed {
        /// Decimal places applied to slope and intercept.
        coefficient_places: usize,
        /// Decimal places applied to R².
        r_squared_places: usize,
    },
}

impl Precision {
    /// Default digit count for slope and intercept in significant mode.
    pub const DEFAULT_COEFFICIENT_DIGITS: usize = 4;

    /// Default digit count for R² in significant mode.
    pub const DEFAULT_R_SQUARED_DIGITS: usize = 3;

    /// Default decimal places for slope and intercept in fixed mode.
    pub const DEFAULT_COEFFICIENT_PLACES: usize = 10;

    /// Default decimal places for R² in fixed mode.
    pub const DEFAULT_R_SQUARED_PLACES: usize = 6;

    /// Significant-digit mode with the default 4/3 digit counts.
    pub fn significant() -> Self {
        Self::Significant {
            coefficient_digits: Self::DEFAULT_COEFFICIENT_DIGITS,
            r_squared_digits: Self::DEFAULT_R_SQUARED_DIGITS,
        }
    }

    /// Fixed-decimal mode with the default 10/6 place counts.
    pub fn fixed() -> Self {
        Self::Fixed {
            coefficient_places: Self::DEFAULT_COEFFICIENT_PLACES,
            r_squared_places: Self::DEFAULT_R_SQUARED_PLACES,
        }
    }

    /// Render a slope or intercept with this mode.
    pub fn coefficient<T: Float>(&self, value: T) -> String {
        match *self {
            Self::Significant {
                coefficient_digits, ..
            } => significant(value, coefficient_digits),
            Self::Fixed {
                coefficient_places, ..
            } => fixed(value, coefficient_places),
        }
    }

    /// Render an R² value with this mode.
    pub fn r_squared<T: Float>(&self, value: T) -> String {
        match *self {
            Self::Significant {
                r_squared_digits, ..
            } => significant(value, r_squared_digits),
            Self::Fixed {
                r_squared_places, ..
            } => fixed(value, r_squared_places),
        }
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::significant()
    }
}

// ============================================================================
// Rendering Functions
// ============================================================================

/// Render a value with the given number of significant digits.
///
/// Matches printf `%#.Ng`: decimal form with trailing zeros kept while the
/// magnitude allows, exponential form otherwise.
pub fn significant<T: Float>(value: T, digits: usize) -> String {
    let digits = digits.max(1);
    let v = value.to_f64().unwrap_or(f64::NAN);

    if !v.is_finite() {
        return format!("{v}");
    }
    if v == 0.0 {
        return format!("{:.*}", digits - 1, 0.0);
    }

    // Round to the requested digit count first, so values sitting on a
    // power-of-ten boundary pick the correct form after rounding
    // (0.99996 at 4 digits must render as "1.000", not "1.0000").
    let exp10 = v.abs().log10().floor() as i32;
    let scale = 10.0f64.powi(digits as i32 - 1 - exp10);
    let rounded = if scale.is_finite() && (v * scale).is_finite() {
        (v * scale).round() / scale
    } else {
        v
    };
    let exp10 = rounded.abs().log10().floor() as i32;

    if exp10 < -4 || exp10 >= digits as i32 {
        format!("{:.*e}", digits - 1, rounded)
    } else {
        let places = (digits as i32 - 1 - exp10).max(0) as usize;
        format!("{:.*}", places, rounded)
    }
}

/// Render a value with a fixed number of decimal places.
pub fn fixed<T: Float>(value: T, places: usize) -> String {
    let v = value.to_f64().unwrap_or(f64::NAN);
    format!("{:.*}", places, v)
}
