//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure functions with no algorithm-specific logic:
//! - Cell text parsing (decimal and exponential notation)
//! - Number rendering policies for the report (significant digits, fixed
//!   decimal places)
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Cell text to float parsing.
pub mod parse;

/// Number rendering for report display.
pub mod render;
