use serde::{Deserialize, Serialize};

use crate::issue::Issue;

/// Computed descriptive-statistics snapshot of a dataset.
///
/// Immutable after creation; recomputed on demand from the current
/// in-memory frame rather than cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub rows: usize,
    pub cols: usize,
    /// Rows identical to an earlier row across all columns; a value
    /// appearing k times contributes k-1.
    pub duplicate_rows: usize,
    pub columns: Vec<ColumnSummary>,
}

impl Profile {
    /// Sum of all columns' missing counts.
    pub fn total_missing_cells(&self) -> usize {
        self.columns.iter().map(|c| c.missing).sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub name: String,
    /// Polars dtype the column arrived with, rendered for display.
    pub dtype: String,
    pub missing: usize,
    /// `missing / rows * 100`; defined as 0 when the table has no rows.
    pub missing_pct: f64,
    /// Distinct non-missing values.
    pub unique: usize,
    #[serde(flatten)]
    pub stats: ColumnStats,
}

/// Type-specific summary, decided once per column per profiling pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnStats {
    Numeric(NumericStats),
    Temporal(TemporalStats),
    Categorical(CategoricalStats),
}

impl ColumnStats {
    pub fn as_numeric(&self) -> Option<&NumericStats> {
        match self {
            ColumnStats::Numeric(stats) => Some(stats),
            _ => None,
        }
    }
}

/// All fields are `None` when the column has no coercible non-missing
/// value; missing cells are excluded from every statistic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericStats {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    /// Population standard deviation (divide by n).
    pub std: Option<f64>,
    pub p05: Option<f64>,
    pub p95: Option<f64>,
    /// Values strictly outside `[q1 - 1.5*iqr, q3 + 1.5*iqr]`; 0 when the
    /// IQR is zero or undefined.
    pub outliers_iqr: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemporalStats {
    pub min_date: Option<String>,
    pub max_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoricalStats {
    /// Top 5 non-missing values by descending count, ties broken by first
    /// encounter.
    pub top_values: Vec<ValueCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// The unit returned by the check pipeline: a profile and the issues
/// derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub profile: Profile,
    pub issues: Vec<Issue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(name: &str, missing: usize, stats: ColumnStats) -> ColumnSummary {
        ColumnSummary {
            name: name.to_string(),
            dtype: "str".to_string(),
            missing,
            missing_pct: 0.0,
            unique: 0,
            stats,
        }
    }

    #[test]
    fn total_missing_cells_sums_columns() {
        let profile = Profile {
            rows: 10,
            cols: 2,
            duplicate_rows: 0,
            columns: vec![
                summary(
                    "a",
                    3,
                    ColumnStats::Categorical(CategoricalStats { top_values: vec![] }),
                ),
                summary(
                    "b",
                    2,
                    ColumnStats::Categorical(CategoricalStats { top_values: vec![] }),
                ),
            ],
        };
        assert_eq!(profile.total_missing_cells(), 5);
    }

    #[test]
    fn column_stats_tag_serializes() {
        let stats = ColumnStats::Temporal(TemporalStats {
            min_date: Some("2024-01-01".to_string()),
            max_date: None,
        });
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["kind"], "temporal");
        assert_eq!(json["min_date"], "2024-01-01");
    }
}
