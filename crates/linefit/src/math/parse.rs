//! Cell text parsing.
//!
//! ## Purpose
//!
//! This module turns the text content of a table cell into a float,
//! distinguishing blank cells (skippable) from genuinely non-numeric ones
//! (a reportable input error).
//!
//! ## Design notes
//!
//! * **Tolerant of whitespace**: Cells are trimmed before interpretation,
//!   so `" 2.5 "` parses.
//! * **Exponential notation**: Anything the float grammar accepts parses,
//!   including `1.2e12` and `3.4e-5`.
//! * **Finite only**: Text that parses to NaN or an infinity (`"nan"`,
//!   `"inf"`) is classified invalid, never silently carried into a fit.
//!
//! ## Non-goals
//!
//! * This module does not decide what happens to blank or invalid cells;
//!   that is validation policy (see `engine::validator`).

// External dependencies
use core::str::FromStr;
use num_traits::Float;

// ============================================================================
// Parse Outcome
// ============================================================================

/// Classification of one cell's text content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedCell<T> {
    /// The cell is empty (or whitespace only).
    Blank,

    /// The cell parsed to a finite float.
    Value(T),

    /// The cell is neither blank nor a finite float.
    Invalid,
}

// ============================================================================
// Parsing
// ============================================================================

/// Parse one cell's text as a float.
///
/// Accepts decimal and exponential notation with surrounding whitespace.
pub fn parse_cell<T: Float + FromStr>(text: &str) -> ParsedCell<T> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return ParsedCell::Blank;
    }

    match trimmed.parse::<T>() {
        Ok(value) if value.is_finite() => ParsedCell::Value(value),
        _ => ParsedCell::Invalid,
    }
}
