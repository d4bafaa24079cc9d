//! # Config Crate
//!
//! Centralized configuration constants for the road generation pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, ROAD_SEGMENT_LENGTH, DEFAULT_LANE_WIDTH};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! let is_zero = value.abs() < EPSILON;
//! assert!(is_zero);
//!
//! // One repeatable road tile is always this long
//! let tiles = (10.0_f64 / ROAD_SEGMENT_LENGTH).round() as usize;
//! assert_eq!(tiles, 5);
//! assert_eq!(DEFAULT_LANE_WIDTH, 3.7);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Host-Agnostic**: No platform-specific values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
