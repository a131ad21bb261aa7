//! # Config Crate
//!
//! Centralized configuration constants for the stringing-test generator.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{RADIUS_BOTTOM, RADIUS_TOP, EPSILON};
//!
//! // The test cylinders taper from bottom to top
//! assert!(RADIUS_TOP < RADIUS_BOTTOM);
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Deterministic Output**: No environment-dependent values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
