//! Layer 3: Algorithms
//!
//! This layer implements the core numerical logic: the closed-form
//! ordinary least squares line fit. It is orchestrated by the engine and
//! API layers.

// Ordinary least squares line fitting.
pub mod regression;
