//! IQR winsorization: cap extremes into a new column, keep the original.

use anyhow::Result;
use polars::prelude::{DataFrame, NamedFrom, Series};
use tracing::debug;

use dq_common::{column_f64_values, iqr_bounds};
use dq_model::ChangelogEntry;

/// Default IQR multiplier for the capping bounds.
pub const DEFAULT_IQR_FACTOR: f64 = 1.5;

/// Default suffix for the capped companion column.
pub const DEFAULT_WINSOR_SUFFIX: &str = "_w";

/// Caps each named column's values into `[q1 - factor*iqr, q3 + factor*iqr]`,
/// writing the result to a new `<column><suffix>` column and leaving the
/// original untouched.
///
/// One changelog entry is emitted per present column, even when nothing was
/// capped; bounds are `None` when the column has no coercible values.
pub fn winsorize_iqr(
    df: &DataFrame,
    columns: &[String],
    factor: f64,
    suffix: &str,
) -> Result<(DataFrame, Vec<ChangelogEntry>)> {
    let mut fixed = df.clone();
    let mut changelog = Vec::new();
    for name in columns {
        let Ok(column) = fixed.column(name) else {
            continue;
        };
        let values = column_f64_values(column);
        let mut present: Vec<f64> = values.iter().flatten().copied().collect();
        present.sort_by(f64::total_cmp);
        let bounds = iqr_bounds(&present, factor);
        let new_column = format!("{name}{suffix}");

        let (capped_count, capped_values) = match bounds {
            Some(b) => {
                let outside = present
                    .iter()
                    .filter(|&&v| v < b.lower || v > b.upper)
                    .count();
                let clipped: Vec<Option<f64>> = values
                    .iter()
                    .map(|v| v.map(|v| v.clamp(b.lower, b.upper)))
                    .collect();
                (outside, clipped)
            }
            None => (0, values.clone()),
        };

        fixed.with_column(Series::new(new_column.as_str().into(), capped_values))?;
        debug!(column = %name, capped = capped_count, "winsorized column");
        changelog.push(ChangelogEntry::WinsorizeIqr {
            column: name.clone(),
            lower: bounds.map(|b| b.lower),
            upper: bounds.map(|b| b.upper),
            iqr: bounds.map(|b| b.iqr),
            outliers_capped: capped_count,
            new_column,
        });
    }
    Ok((fixed, changelog))
}
