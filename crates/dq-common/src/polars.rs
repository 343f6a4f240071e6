//! Polars `AnyValue` utility functions.
//!
//! Helper functions for working with Polars `AnyValue` cells: string
//! rendering, numeric coercion, and the shared missing-cell predicate.

use polars::prelude::{AnyValue, Column, DataType};

/// Converts a Polars `AnyValue` to a `String` representation.
///
/// Returns an empty string for `Null`, and formats floats without
/// unnecessary trailing zeros so that `25` and `25.0` render identically.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use dq_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Int32(42)), "42");
/// assert_eq!(any_to_string(AnyValue::Float64(1.50)), "1.5");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => if b { "true" } else { "false" }.to_string(),
        other => other.to_string(),
    }
}

/// Formats a floating-point number without trailing zeros.
///
/// NaN renders as an empty string; NaN cells count as missing everywhere
/// else in the workspace, so they must not leak a textual "NaN".
pub fn format_numeric(v: f64) -> String {
    if v.is_nan() {
        return String::new();
    }
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Converts an `AnyValue` to `f64`, returning `None` for missing or
/// non-coercible values. String cells are parsed, so a text column holding
/// numbers still coerces.
pub fn any_to_f64(value: &AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(f64::from(*v)),
        AnyValue::Int16(v) => Some(f64::from(*v)),
        AnyValue::Int32(v) => Some(f64::from(*v)),
        AnyValue::Int64(v) => Some(*v as f64),
        AnyValue::UInt8(v) => Some(f64::from(*v)),
        AnyValue::UInt16(v) => Some(f64::from(*v)),
        AnyValue::UInt32(v) => Some(f64::from(*v)),
        AnyValue::UInt64(v) => Some(*v as f64),
        AnyValue::Float32(v) => {
            let v = f64::from(*v);
            if v.is_nan() { None } else { Some(v) }
        }
        AnyValue::Float64(v) => {
            if v.is_nan() {
                None
            } else {
                Some(*v)
            }
        }
        AnyValue::String(s) => parse_f64(s),
        AnyValue::StringOwned(s) => parse_f64(s),
        _ => None,
    }
}

/// Parses a string as `f64`, returning `None` for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// The shared missing-cell predicate: null, a floating NaN, or a string
/// that trims to empty.
pub fn is_missing_value(value: &AnyValue<'_>) -> bool {
    match value {
        AnyValue::Null => true,
        AnyValue::Float32(v) => v.is_nan(),
        AnyValue::Float64(v) => v.is_nan(),
        AnyValue::String(s) => s.trim().is_empty(),
        AnyValue::StringOwned(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Whether a dtype is one of the primitive numeric Polars dtypes.
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Reads a column cell-by-cell as coerced `f64` values, `None` where the
/// cell is missing or non-coercible. One consistent interpretation per call.
pub fn column_f64_values(column: &Column) -> Vec<Option<f64>> {
    (0..column.len())
        .map(|idx| {
            let value = column.get(idx).unwrap_or(AnyValue::Null);
            any_to_f64(&value)
        })
        .collect()
}

/// Reads a column cell-by-cell as rendered strings, `None` where the cell
/// is missing.
pub fn column_string_values(column: &Column) -> Vec<Option<String>> {
    (0..column.len())
        .map(|idx| {
            let value = column.get(idx).unwrap_or(AnyValue::Null);
            if is_missing_value(&value) {
                None
            } else {
                Some(any_to_string(value))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_to_string_formats_floats_without_trailing_zeros() {
        assert_eq!(any_to_string(AnyValue::Float64(25.0)), "25");
        assert_eq!(any_to_string(AnyValue::Float64(1.50)), "1.5");
        assert_eq!(any_to_string(AnyValue::Int64(25)), "25");
    }

    #[test]
    fn nan_renders_empty_and_counts_as_missing() {
        assert_eq!(any_to_string(AnyValue::Float64(f64::NAN)), "");
        assert!(is_missing_value(&AnyValue::Float64(f64::NAN)));
        assert_eq!(any_to_f64(&AnyValue::Float64(f64::NAN)), None);
    }

    #[test]
    fn blank_strings_are_missing() {
        assert!(is_missing_value(&AnyValue::String("")));
        assert!(is_missing_value(&AnyValue::String("   ")));
        assert!(!is_missing_value(&AnyValue::String("x")));
    }

    #[test]
    fn string_cells_coerce_to_f64() {
        assert_eq!(any_to_f64(&AnyValue::String(" 2.5 ")), Some(2.5));
        assert_eq!(any_to_f64(&AnyValue::String("abc")), None);
    }
}
