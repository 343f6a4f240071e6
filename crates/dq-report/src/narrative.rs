//! Deterministic natural-language summary of a report and changelog.
//!
//! Identical inputs always produce the identical string; the text is part
//! of the export contract, so every sentence is assembled from stable
//! orderings (profile column order, alphabetical op names).

use std::collections::BTreeSet;

use dq_model::{ChangelogEntry, Report};

/// How many outlier column names the narrative lists at most.
const OUTLIER_NAME_LIMIT: usize = 3;

pub fn narrate(report: &Report, changelog: &[ChangelogEntry]) -> String {
    let profile = &report.profile;
    let mut sentences = Vec::new();

    sentences.push(format!(
        "The file has {} rows and {} columns, with {} duplicate rows and {} total missing cells.",
        profile.rows,
        profile.cols,
        profile.duplicate_rows,
        profile.total_missing_cells()
    ));

    // The single worst column by missing count; stable sort keeps profile
    // order among ties.
    let mut by_missing: Vec<_> = profile.columns.iter().collect();
    by_missing.sort_by(|a, b| b.missing.cmp(&a.missing));
    if let Some(worst) = by_missing.first().filter(|c| c.missing > 0) {
        sentences.push(format!(
            "Column {} has {} missing values which is {:.1} percent.",
            worst.name, worst.missing, worst.missing_pct
        ));
    }

    let outlier_columns: Vec<&str> = profile
        .columns
        .iter()
        .filter(|c| c.stats.as_numeric().is_some_and(|s| s.outliers_iqr > 0))
        .map(|c| c.name.as_str())
        .take(OUTLIER_NAME_LIMIT)
        .collect();
    if !outlier_columns.is_empty() {
        sentences.push(format!(
            "Potential outliers identified by IQR in: {}.",
            outlier_columns.join(", ")
        ));
    }

    if changelog.is_empty() {
        sentences.push("No automatic repairs were applied.".to_string());
    } else {
        let ops: BTreeSet<&str> = changelog.iter().map(ChangelogEntry::op_name).collect();
        sentences.push(format!(
            "Applied repairs: {}.",
            ops.into_iter().collect::<Vec<_>>().join(", ")
        ));
        if let Some(removed) = changelog.iter().find_map(|e| match e {
            ChangelogEntry::DropDuplicates { rows_removed } => Some(*rows_removed),
            _ => None,
        }) {
            sentences.push(format!("Removed {removed} duplicate rows."));
        }
        let impute_entries: Vec<&ChangelogEntry> =
            changelog.iter().filter(|e| e.is_impute()).collect();
        if !impute_entries.is_empty() {
            let filled: usize = impute_entries
                .iter()
                .filter_map(|e| e.missing_filled())
                .sum();
            sentences.push(format!(
                "Filled {filled} missing values using median for numeric and mode for categorical columns."
            ));
        }
    }

    sentences.push(
        "Next steps: validate business rules for key columns, review outliers, and consider \
         stricter expectations for future uploads."
            .to_string(),
    );

    sentences.join(" ")
}
