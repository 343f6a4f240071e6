//! The conservative, fully automatic repair bundle.

use std::collections::HashSet;

use anyhow::Result;
use polars::prelude::{AnyValue, BooleanChunked, DataFrame, NamedFrom, NewChunkedArray, Series};
use tracing::debug;

use dq_common::{
    any_to_string, column_f64_values, column_string_values, is_numeric_dtype, median, mode_value,
};
use dq_model::ChangelogEntry;

use crate::frame::{KEY_SEPARATOR, count_missing};

/// Applies the safe automatic repairs: drop exact duplicate rows keeping
/// the first occurrence, then fill missing cells per column (median for
/// numeric columns, mode otherwise).
///
/// Returns a new frame and the changelog of what was done; the input is
/// never mutated. Running it a second time on its own output is a no-op.
pub fn auto_repair(df: &DataFrame) -> Result<(DataFrame, Vec<ChangelogEntry>)> {
    let mut changelog = Vec::new();
    let mut cleaned = drop_duplicate_rows(df, &mut changelog)?;

    let names: Vec<String> = cleaned
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    for name in names {
        impute_column(&mut cleaned, &name, &mut changelog)?;
    }
    debug!(operations = changelog.len(), "auto repair finished");
    Ok((cleaned, changelog))
}

fn drop_duplicate_rows(
    df: &DataFrame,
    changelog: &mut Vec<ChangelogEntry>,
) -> Result<DataFrame> {
    let rows = df.height();
    let mut seen = HashSet::new();
    let mut keep = Vec::with_capacity(rows);
    for idx in 0..rows {
        let mut key = String::new();
        for (pos, column) in df.get_columns().iter().enumerate() {
            if pos > 0 {
                key.push(KEY_SEPARATOR);
            }
            let value = column.get(idx).unwrap_or(AnyValue::Null);
            key.push_str(&any_to_string(value));
        }
        keep.push(seen.insert(key));
    }
    let removed = keep.iter().filter(|&&kept| !kept).count();
    if removed == 0 {
        return Ok(df.clone());
    }
    let mask = BooleanChunked::from_slice("dedupe".into(), &keep);
    let cleaned = df.filter(&mask)?;
    changelog.push(ChangelogEntry::DropDuplicates {
        rows_removed: removed,
    });
    Ok(cleaned)
}

fn impute_column(
    df: &mut DataFrame,
    name: &str,
    changelog: &mut Vec<ChangelogEntry>,
) -> Result<()> {
    let column = df.column(name)?.clone();
    let missing = count_missing(&column);
    if missing == 0 {
        return Ok(());
    }

    if is_numeric_dtype(column.dtype()) {
        let values = column_f64_values(&column);
        let mut present: Vec<f64> = values.iter().flatten().copied().collect();
        present.sort_by(f64::total_cmp);
        // An all-missing numeric column has no median; leave it untouched.
        let Some(fill) = median(&present) else {
            return Ok(());
        };
        let filled: Vec<f64> = values.into_iter().map(|v| v.unwrap_or(fill)).collect();
        df.with_column(Series::new(name.into(), filled))?;
        changelog.push(ChangelogEntry::ImputeMedian {
            column: name.to_string(),
            missing_filled: missing,
            value: fill,
        });
        return Ok(());
    }

    let values = column_string_values(&column);
    match mode_value(values.iter().flatten()) {
        Some(fill) => {
            let filled: Vec<String> = values
                .into_iter()
                .map(|v| v.unwrap_or_else(|| fill.clone()))
                .collect();
            df.with_column(Series::new(name.into(), filled))?;
            changelog.push(ChangelogEntry::ImputeMode {
                column: name.to_string(),
                missing_filled: missing,
                value: fill,
            });
        }
        None => {
            changelog.push(ChangelogEntry::ImputeModeSkipped {
                column: name.to_string(),
                missing_unfilled: missing,
            });
        }
    }
    Ok(())
}
