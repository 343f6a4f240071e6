//! Frame-level helpers shared by the repair operations.

use polars::prelude::{AnyValue, Column, DataFrame};

use dq_common::is_missing_value;

/// Separator for composite row/group keys; the unit separator avoids
/// collisions with ordinary cell data.
pub(crate) const KEY_SEPARATOR: char = '\u{1f}';

pub(crate) fn count_missing(column: &Column) -> usize {
    (0..column.len())
        .filter(|&idx| {
            let value = column.get(idx).unwrap_or(AnyValue::Null);
            is_missing_value(&value)
        })
        .count()
}

pub(crate) fn cell_is_missing(column: &Column, idx: usize) -> bool {
    let value = column.get(idx).unwrap_or(AnyValue::Null);
    is_missing_value(&value)
}

/// Composite key over the named columns for one row, `None` when any
/// component is missing.
pub(crate) fn group_key(df: &DataFrame, by: &[String], idx: usize) -> Option<String> {
    let mut key = String::new();
    for (pos, name) in by.iter().enumerate() {
        let column = df.column(name).ok()?;
        let value = column.get(idx).unwrap_or(AnyValue::Null);
        if is_missing_value(&value) {
            return None;
        }
        if pos > 0 {
            key.push(KEY_SEPARATOR);
        }
        key.push_str(&dq_common::any_to_string(value));
    }
    Some(key)
}
