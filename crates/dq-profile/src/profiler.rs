//! Per-column and whole-table descriptive statistics.
//!
//! `profile` is pure and recomputes everything from the frame it is handed;
//! there is no caching keyed by content. Each column's kind (numeric,
//! temporal, categorical) is decided once per pass and the matching summary
//! is computed by dedicated logic.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime};
use polars::prelude::{AnyValue, Column, DataFrame};
use tracing::debug;

use dq_common::{
    any_to_string, column_f64_values, column_string_values, frequency_table, iqr_bounds,
    is_missing_value, is_numeric_dtype, mean, population_std, quantile_linear,
};
use dq_model::{
    CategoricalStats, ColumnStats, ColumnSummary, NumericStats, Profile, TemporalStats, ValueCount,
};

/// Multiplier on the IQR when flagging potential outliers.
pub const OUTLIER_IQR_FACTOR: f64 = 1.5;

const TOP_VALUE_LIMIT: usize = 5;

/// Separator used when rendering a row into a duplicate-detection key.
/// The unit separator is vanishingly unlikely to occur in cell data.
const ROW_KEY_SEPARATOR: char = '\u{1f}';

/// Computes the descriptive-statistics snapshot of a frame.
pub fn profile(df: &DataFrame) -> Profile {
    let rows = df.height();
    let duplicate_rows = count_duplicate_rows(df);
    let columns = df
        .get_columns()
        .iter()
        .map(|column| summarize_column(column, rows))
        .collect();
    debug!(
        rows,
        cols = df.width(),
        duplicate_rows,
        "profiled dataset"
    );
    Profile {
        rows,
        cols: df.width(),
        duplicate_rows,
        columns,
    }
}

/// Per-column missing counts in column order, the data contract behind a
/// missingness chart.
pub fn missing_counts(df: &DataFrame) -> Vec<(String, usize)> {
    df.get_columns()
        .iter()
        .map(|column| (column.name().to_string(), count_missing(column)))
        .collect()
}

/// Rows identical to an earlier row across all columns.
fn count_duplicate_rows(df: &DataFrame) -> usize {
    let mut seen = HashSet::new();
    let mut duplicates = 0;
    for idx in 0..df.height() {
        if !seen.insert(row_key(df, idx)) {
            duplicates += 1;
        }
    }
    duplicates
}

pub(crate) fn row_key(df: &DataFrame, idx: usize) -> String {
    let mut key = String::new();
    for (pos, column) in df.get_columns().iter().enumerate() {
        if pos > 0 {
            key.push(ROW_KEY_SEPARATOR);
        }
        let value = column.get(idx).unwrap_or(AnyValue::Null);
        key.push_str(&any_to_string(value));
    }
    key
}

fn count_missing(column: &Column) -> usize {
    (0..column.len())
        .filter(|&idx| {
            let value = column.get(idx).unwrap_or(AnyValue::Null);
            is_missing_value(&value)
        })
        .count()
}

fn summarize_column(column: &Column, rows: usize) -> ColumnSummary {
    let missing = count_missing(column);
    let missing_pct = if rows == 0 {
        0.0
    } else {
        missing as f64 / rows as f64 * 100.0
    };
    let values = column_string_values(column);
    let unique = values
        .iter()
        .flatten()
        .collect::<HashSet<_>>()
        .len();

    let stats = if is_numeric_dtype(column.dtype()) {
        ColumnStats::Numeric(numeric_stats(column))
    } else if let Some(stats) = temporal_stats(&values) {
        ColumnStats::Temporal(stats)
    } else {
        ColumnStats::Categorical(categorical_stats(&values))
    };

    ColumnSummary {
        name: column.name().to_string(),
        dtype: column.dtype().to_string(),
        missing,
        missing_pct,
        unique,
        stats,
    }
}

fn numeric_stats(column: &Column) -> NumericStats {
    let mut present: Vec<f64> = column_f64_values(column).into_iter().flatten().collect();
    if present.is_empty() {
        // Zero coercible values: every statistic is undefined, not zero.
        return NumericStats {
            min: None,
            max: None,
            mean: None,
            std: None,
            p05: None,
            p95: None,
            outliers_iqr: 0,
        };
    }
    let mean = mean(&present);
    let std = population_std(&present);
    present.sort_by(f64::total_cmp);
    let outliers_iqr = match iqr_bounds(&present, OUTLIER_IQR_FACTOR) {
        Some(bounds) if bounds.iqr > 0.0 => present
            .iter()
            .filter(|&&v| v < bounds.lower || v > bounds.upper)
            .count(),
        _ => 0,
    };
    NumericStats {
        min: present.first().copied(),
        max: present.last().copied(),
        mean,
        std,
        p05: quantile_linear(&present, 0.05),
        p95: quantile_linear(&present, 0.95),
        outliers_iqr,
    }
}

/// A parsed temporal cell, remembering whether the source carried a time
/// component so min/max render the way they arrived.
#[derive(Debug, Clone, Copy, PartialEq)]
struct TemporalValue {
    datetime: NaiveDateTime,
    has_time: bool,
}

impl TemporalValue {
    fn render(self) -> String {
        if self.has_time {
            self.datetime.format("%Y-%m-%d %H:%M:%S").to_string()
        } else {
            self.datetime.format("%Y-%m-%d").to_string()
        }
    }
}

fn parse_temporal(value: &str) -> Option<TemporalValue> {
    let trimmed = value.trim();
    for format in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(TemporalValue {
                datetime: date.and_hms_opt(0, 0, 0)?,
                has_time: false,
            });
        }
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(TemporalValue {
                datetime,
                has_time: true,
            });
        }
    }
    None
}

/// Temporal summary when every non-missing value coerces to a date;
/// `None` sends the column down the categorical branch.
fn temporal_stats(values: &[Option<String>]) -> Option<TemporalStats> {
    let mut parsed = Vec::new();
    for value in values.iter().flatten() {
        parsed.push(parse_temporal(value)?);
    }
    if parsed.is_empty() {
        return None;
    }
    let min = parsed
        .iter()
        .copied()
        .min_by_key(|v| v.datetime)?;
    let max = parsed
        .iter()
        .copied()
        .max_by_key(|v| v.datetime)?;
    Some(TemporalStats {
        min_date: Some(min.render()),
        max_date: Some(max.render()),
    })
}

fn categorical_stats(values: &[Option<String>]) -> CategoricalStats {
    let top_values = frequency_table(values.iter().flatten())
        .into_iter()
        .take(TOP_VALUE_LIMIT)
        .map(|(value, count)| ValueCount { value, count })
        .collect();
    CategoricalStats { top_values }
}
