//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, limits, table widths)
//! - CLI option types and parsing
//! - The library `Config` built from CLI options or programmatically

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, Opt};
