//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer calculates fit-quality metrics from the fitted line and the
//! observed data: the coefficient of determination, residuals, and the
//! root mean squared error.

/// Fit-quality metrics.
pub mod diagnostics;
