//! # linefit — Ordinary Least Squares Line Fitting for Hand-Entered Tables
//!
//! A small, focused library for the classic lab-notebook workflow: a user
//! types or pastes (X, Y) pairs into an editable two-column table, presses
//! a button, and reads off the fitted line y = a·x + b, the coefficient of
//! determination R², and a scatter-plus-line plot.
//!
//! `linefit` implements everything between the table widget and the
//! screen: cleaning the raw rows (blank and mid-edit cells are skipped,
//! free text is parsed with exponential-notation support), the closed-form
//! ordinary least squares fit, R² and residuals, and a report carrying the
//! data a plotting caller needs, rendered at a configurable precision.
//!
//! ## Quick Start
//!
//! ### Numeric-widget tables
//!
//! Spinner-style widgets hand over floats directly:
//!
//! ```rust
//! use linefit::prelude::*;
//!
//! let rows = vec![
//!     RawRow::numeric(0.0, 1.0),
//!     RawRow::numeric(1.0, 3.0),
//!     RawRow::numeric(2.0, 5.0),
//! ];
//!
//! let reporter = LineFit::new().build()?;
//! let report = reporter.fit_rows(&rows)?;
//!
//! assert_eq!(report.equation(), "Y = 2.000 × X + 1.000");
//! assert_eq!(report.r_squared_display(), "1.00");
//! # Result::<(), LineFitError>::Ok(())
//! ```
//!
//! ### Free-text tables
//!
//! Plain entry fields hand over strings; select the `Text` coercion and
//! anything the float grammar accepts parses, including exponential
//! notation. Incomplete rows are skipped, not errors:
//!
//! ```rust
//! use linefit::prelude::*;
//!
//! let rows: Vec<RawRow<f64>> = vec![
//!     RawRow::text("1.0", "2.0"),
//!     RawRow::text("", "3.0"),
//!     RawRow::text("2.0e0", "3.9"),
//!     RawRow::text("3.0", "6.1"),
//! ];
//!
//! let reporter = LineFit::new()
//!     .coercion(Text)
//!     .precision(Precision::fixed())
//!     .return_residuals()
//!     .build()?;
//!
//! let report = reporter.fit_rows(&rows)?;
//!
//! assert_eq!(report.rows_used, 3);
//! assert_eq!(report.rows_dropped, 1);
//! assert!(report.has_residuals());
//! # Result::<(), LineFitError>::Ok(())
//! ```
//!
//! ### Rendering
//!
//! The report implements `Display` for a quick tabular rendering, and
//! exposes the fitted values and `predict` for drawing the fit line:
//!
//! ```rust
//! use linefit::prelude::*;
//!
//! let reporter = LineFit::new().build()?;
//! let report = reporter.fit(&[1.0, 2.0, 3.0, 4.0], &[2.2, 3.9, 6.1, 7.8])?;
//!
//! println!("{}", report);
//!
//! // Scatter points and fit line for the chart:
//! let points: Vec<(f64, f64)> = report.points().collect();
//! assert_eq!(points.len(), 4);
//! let _line = report.line();
//! let _extrapolated = report.predict(5.0);
//! # Result::<(), LineFitError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Every failure is a value for the caller to render as a warning; a fit
//! over a hand-edited table must never take the session down:
//!
//! ```rust
//! use linefit::prelude::*;
//!
//! let reporter = LineFit::new().build()?;
//!
//! match reporter.fit(&[1.0, 1.0], &[2.0, 5.0]) {
//!     Ok(report) => println!("{}", report.equation()),
//!     Err(LineFitError::DegenerateXVariance { .. }) => {
//!         eprintln!("enter at least two distinct X values");
//!     }
//!     Err(e) => eprintln!("fit failed: {e}"),
//! }
//! # Result::<(), LineFitError>::Ok(())
//! ```
//!
//! - `LineFitError::InsufficientData`: fewer than 2 valid rows; ask the
//!   user for more data.
//! - `LineFitError::NonNumericCell`: a retained cell is not a number;
//!   the error names the row, column, and content.
//! - `LineFitError::DegenerateXVariance`: all x-values identical, so the
//!   slope is undefined; reported explicitly instead of as NaN.
//!
//! ## Minimal Usage (no_std)
//!
//! The crate supports `no_std` environments (alloc required). Disable
//! default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! linefit = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - table types and errors.
mod primitives;

// Layer 2: Math - pure parsing and rendering functions.
mod math;

// Layer 3: Algorithms - the ordinary least squares fit.
mod algorithms;

// Layer 4: Evaluation - fit-quality metrics.
mod evaluation;

// Layer 5: Engine - validation and report packaging.
mod engine;

// High-level fluent API for fitting and reporting.
mod api;

// Standard linefit prelude.
pub mod prelude {
    pub use crate::api::{
        CellCoercion,
        CellCoercion::{Numeric, Text},
        Column, FitReport, LineFitBuilder as LineFit, LineFitError, LineFitReporter, LineModel,
        Precision, RawCell, RawRow, SampleSet,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
