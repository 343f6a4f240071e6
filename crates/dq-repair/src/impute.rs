//! User-directed imputation recipes.

use std::collections::BTreeMap;

use anyhow::Result;
use polars::prelude::{DataFrame, NamedFrom, Series};
use tracing::debug;

use dq_common::{
    column_f64_values, column_string_values, is_numeric_dtype, median, mode_value, parse_f64,
};
use dq_model::ChangelogEntry;

use crate::frame::{count_missing, group_key};

/// Fills missing cells in the named columns with each column's most
/// frequent non-missing value.
///
/// Columns that are absent or already complete are skipped; one changelog
/// entry is emitted per column actually modified.
pub fn impute_mode(
    df: &DataFrame,
    columns: &[String],
) -> Result<(DataFrame, Vec<ChangelogEntry>)> {
    let mut fixed = df.clone();
    let mut changelog = Vec::new();
    for name in columns {
        let Ok(column) = fixed.column(name) else {
            continue;
        };
        let column = column.clone();
        let missing = count_missing(&column);
        if missing == 0 {
            continue;
        }
        let values = column_string_values(&column);
        let Some(fill) = mode_value(values.iter().flatten()) else {
            continue;
        };
        // Numeric columns keep their numeric representation when filled.
        if is_numeric_dtype(column.dtype())
            && let Some(fill_num) = parse_f64(&fill)
        {
            let filled: Vec<Option<f64>> = column_f64_values(&column)
                .into_iter()
                .map(|v| v.or(Some(fill_num)))
                .collect();
            fixed.with_column(Series::new(name.as_str().into(), filled))?;
        } else {
            let filled: Vec<String> = values
                .into_iter()
                .map(|v| v.unwrap_or_else(|| fill.clone()))
                .collect();
            fixed.with_column(Series::new(name.as_str().into(), filled))?;
        }
        changelog.push(ChangelogEntry::ImputeMode {
            column: name.clone(),
            missing_filled: missing,
            value: fill,
        });
    }
    Ok((fixed, changelog))
}

/// Fills missing values of a numeric target column with the median of its
/// group, where groups are the distinct combinations of the `by` columns.
///
/// The target is coerced to numeric first. Rows whose exact group key was
/// never observed among non-missing rows stay missing, as do rows whose
/// group key itself has a missing component. At most one changelog entry
/// is emitted, and only when something was filled.
pub fn impute_group_median(
    df: &DataFrame,
    target: &str,
    by: &[String],
) -> Result<(DataFrame, Vec<ChangelogEntry>)> {
    if df.column(target).is_err() || by.iter().any(|name| df.column(name).is_err()) {
        return Ok((df.clone(), Vec::new()));
    }
    let values = column_f64_values(df.column(target)?);
    let missing_before = values.iter().filter(|v| v.is_none()).count();
    if missing_before == 0 || by.is_empty() {
        return Ok((df.clone(), Vec::new()));
    }

    let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for (idx, value) in values.iter().enumerate() {
        if let (Some(value), Some(key)) = (value, group_key(df, by, idx)) {
            groups.entry(key).or_default().push(*value);
        }
    }
    let medians: BTreeMap<String, f64> = groups
        .into_iter()
        .filter_map(|(key, mut members)| {
            members.sort_by(f64::total_cmp);
            median(&members).map(|m| (key, m))
        })
        .collect();

    let mut filled = 0;
    let patched: Vec<Option<f64>> = values
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            if value.is_some() {
                return *value;
            }
            let fill = group_key(df, by, idx).and_then(|key| medians.get(&key).copied());
            if fill.is_some() {
                filled += 1;
            }
            fill
        })
        .collect();

    let mut fixed = df.clone();
    fixed.with_column(Series::new(target.into(), patched))?;
    let mut changelog = Vec::new();
    if filled > 0 {
        debug!(target, filled, "group median imputation filled cells");
        changelog.push(ChangelogEntry::ImputeGroupMedian {
            column: target.to_string(),
            by: by.to_vec(),
            missing_filled: filled,
        });
    }
    Ok((fixed, changelog))
}
