//! Turns a profile into ordered, severity-tagged issues.
//!
//! Pure function of the profile: the duplicates issue comes first if
//! present, then per column in profile order a missing-values issue
//! followed by an outliers issue. No issue looks at more than one column's
//! summary, and detection never recomputes statistics.

use dq_model::{Issue, IssueKind, Profile, Severity};

/// Missing percentage above which a missing-values issue escalates from
/// warning to error.
const MISSING_ERROR_PCT: f64 = 20.0;

pub fn detect(profile: &Profile) -> Vec<Issue> {
    let mut issues = Vec::new();

    if profile.duplicate_rows > 0 {
        issues.push(Issue {
            kind: IssueKind::Duplicates,
            column: None,
            severity: Severity::Warning,
            message: format!("{} duplicate rows detected", profile.duplicate_rows),
            suggestion: "Drop exact duplicates".to_string(),
        });
    }

    for column in &profile.columns {
        if column.missing > 0 {
            let severity = if column.missing_pct > MISSING_ERROR_PCT {
                Severity::Error
            } else {
                Severity::Warning
            };
            issues.push(Issue {
                kind: IssueKind::MissingValues,
                column: Some(column.name.clone()),
                severity,
                message: format!(
                    "{} missing values in {} ({:.1} percent)",
                    column.missing, column.name, column.missing_pct
                ),
                suggestion: "Impute with median for numeric, mode for categorical, or flag rows"
                    .to_string(),
            });
        }
        if let Some(stats) = column.stats.as_numeric()
            && stats.outliers_iqr > 0
        {
            issues.push(Issue {
                kind: IssueKind::Outliers,
                column: Some(column.name.clone()),
                severity: Severity::Info,
                message: format!(
                    "{} potential outliers in {} by IQR rule",
                    stats.outliers_iqr, column.name
                ),
                suggestion: "Review distribution and cap or winsorize if needed".to_string(),
            });
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use dq_model::{CategoricalStats, ColumnStats, ColumnSummary, NumericStats};

    fn numeric_summary(name: &str, missing: usize, missing_pct: f64, outliers: usize) -> ColumnSummary {
        ColumnSummary {
            name: name.to_string(),
            dtype: "f64".to_string(),
            missing,
            missing_pct,
            unique: 0,
            stats: ColumnStats::Numeric(NumericStats {
                min: None,
                max: None,
                mean: None,
                std: None,
                p05: None,
                p95: None,
                outliers_iqr: outliers,
            }),
        }
    }

    fn text_summary(name: &str, missing: usize, missing_pct: f64) -> ColumnSummary {
        ColumnSummary {
            name: name.to_string(),
            dtype: "str".to_string(),
            missing,
            missing_pct,
            unique: 0,
            stats: ColumnStats::Categorical(CategoricalStats { top_values: vec![] }),
        }
    }

    #[test]
    fn duplicates_issue_comes_first() {
        let profile = Profile {
            rows: 10,
            cols: 1,
            duplicate_rows: 2,
            columns: vec![numeric_summary("x", 1, 10.0, 1)],
        };
        let issues = detect(&profile);
        assert_eq!(issues.len(), 3);
        assert_eq!(issues[0].kind, IssueKind::Duplicates);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[1].kind, IssueKind::MissingValues);
        assert_eq!(issues[2].kind, IssueKind::Outliers);
        assert_eq!(issues[2].severity, Severity::Info);
    }

    #[test]
    fn missing_over_twenty_percent_is_an_error() {
        let profile = Profile {
            rows: 10,
            cols: 2,
            duplicate_rows: 0,
            columns: vec![
                text_summary("a", 3, 30.0),
                text_summary("b", 1, 10.0),
            ],
        };
        let issues = detect(&profile);
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[0].message, "3 missing values in a (30.0 percent)");
        assert_eq!(issues[1].severity, Severity::Warning);
    }

    #[test]
    fn clean_profile_produces_no_issues() {
        let profile = Profile {
            rows: 5,
            cols: 1,
            duplicate_rows: 0,
            columns: vec![text_summary("a", 0, 0.0)],
        };
        assert!(detect(&profile).is_empty());
    }
}
