//! Presence-indicator creation for sparse columns.

use anyhow::Result;
use polars::prelude::{DataFrame, NamedFrom, Series};

use dq_model::ChangelogEntry;

use crate::frame::cell_is_missing;

/// Adds an integer column valued 1 where the source column is present and
/// 0 where it is missing.
///
/// The indicator is named `<column>Known` unless an explicit name is
/// given. With `drop_original` the source column is removed afterwards and
/// a second changelog entry records the drop. An absent source column is a
/// silent no-op.
pub fn add_known_indicator(
    df: &DataFrame,
    column: &str,
    indicator_name: Option<&str>,
    drop_original: bool,
) -> Result<(DataFrame, Vec<ChangelogEntry>)> {
    let Ok(source) = df.column(column) else {
        return Ok((df.clone(), Vec::new()));
    };
    let indicator = indicator_name
        .map(ToString::to_string)
        .unwrap_or_else(|| format!("{column}Known"));
    let flags: Vec<i64> = (0..source.len())
        .map(|idx| i64::from(!cell_is_missing(source, idx)))
        .collect();

    let mut fixed = df.clone();
    fixed.with_column(Series::new(indicator.as_str().into(), flags))?;
    let mut changelog = vec![ChangelogEntry::AddIndicator {
        source: column.to_string(),
        indicator,
    }];
    if drop_original {
        fixed = fixed.drop(column)?;
        changelog.push(ChangelogEntry::DropColumn {
            column: column.to_string(),
        });
    }
    Ok((fixed, changelog))
}
