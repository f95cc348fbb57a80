//! Strata Core
//!
//! Shared utilities for the Strata crates: logging setup, conversion
//! configuration and math re-exports.

pub mod config;
pub mod geometry;
pub mod logging;
pub mod math;
