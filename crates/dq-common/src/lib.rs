//! Shared utilities for the dq crates.
//!
//! This crate provides the value-level helpers used across the workspace:
//! Polars `AnyValue` conversions, the missing-cell predicate, and the
//! descriptive-statistics primitives behind profiling and winsorization.

pub mod freq;
pub mod polars;
pub mod stats;

// Re-export commonly used functions at crate root for convenience
pub use freq::{frequency_table, mode_value};
pub use polars::{
    any_to_f64, any_to_string, column_f64_values, column_string_values, format_numeric,
    is_missing_value, is_numeric_dtype, parse_f64,
};
pub use stats::{IqrBounds, iqr_bounds, mean, median, population_std, quantile_linear};
