//! Changelog serialization: key-value text lines and CSV records.
//!
//! The export renders each entry faithfully with the `op` field first,
//! matching exhaustively over the closed entry set rather than probing a
//! generic record.

use std::path::Path;

use anyhow::{Context, Result};

use dq_common::format_numeric;
use dq_model::ChangelogEntry;

fn optional_numeric(value: Option<f64>) -> String {
    value.map_or_else(|| "null".to_string(), format_numeric)
}

/// Flat `(key, value)` field list for one entry, `op` first.
pub fn entry_fields(entry: &ChangelogEntry) -> Vec<(&'static str, String)> {
    let mut fields = vec![("op", entry.op_name().to_string())];
    match entry {
        ChangelogEntry::DropDuplicates { rows_removed } => {
            fields.push(("rows_removed", rows_removed.to_string()));
        }
        ChangelogEntry::ImputeMedian {
            column,
            missing_filled,
            value,
        } => {
            fields.push(("column", column.clone()));
            fields.push(("missing_filled", missing_filled.to_string()));
            fields.push(("value", format_numeric(*value)));
        }
        ChangelogEntry::ImputeMode {
            column,
            missing_filled,
            value,
        } => {
            fields.push(("column", column.clone()));
            fields.push(("missing_filled", missing_filled.to_string()));
            fields.push(("value", value.clone()));
        }
        ChangelogEntry::ImputeModeSkipped {
            column,
            missing_unfilled,
        } => {
            fields.push(("column", column.clone()));
            fields.push(("missing_unfilled", missing_unfilled.to_string()));
        }
        ChangelogEntry::ImputeGroupMedian {
            column,
            by,
            missing_filled,
        } => {
            fields.push(("column", column.clone()));
            fields.push(("by", by.join("|")));
            fields.push(("missing_filled", missing_filled.to_string()));
        }
        ChangelogEntry::AddIndicator { source, indicator } => {
            fields.push(("source", source.clone()));
            fields.push(("indicator", indicator.clone()));
        }
        ChangelogEntry::DropColumn { column } => {
            fields.push(("column", column.clone()));
        }
        ChangelogEntry::WinsorizeIqr {
            column,
            lower,
            upper,
            iqr,
            outliers_capped,
            new_column,
        } => {
            fields.push(("column", column.clone()));
            fields.push(("lower", optional_numeric(*lower)));
            fields.push(("upper", optional_numeric(*upper)));
            fields.push(("iqr", optional_numeric(*iqr)));
            fields.push(("outliers_capped", outliers_capped.to_string()));
            fields.push(("new_column", new_column.clone()));
        }
    }
    fields
}

/// Renders the changelog as one `key=value` line per entry.
pub fn changelog_to_text(changelog: &[ChangelogEntry]) -> String {
    changelog
        .iter()
        .map(|entry| {
            entry_fields(entry)
                .into_iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes the changelog as CSV with `op` and `details` columns.
pub fn write_changelog_csv(changelog: &[ChangelogEntry], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create changelog file {}", path.display()))?;
    writer.write_record(["op", "details"])?;
    for entry in changelog {
        let details = entry_fields(entry)
            .into_iter()
            .skip(1)
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("; ");
        writer.write_record([entry.op_name(), details.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_op_first() {
        let text = changelog_to_text(&[
            ChangelogEntry::DropDuplicates { rows_removed: 3 },
            ChangelogEntry::ImputeMedian {
                column: "age".to_string(),
                missing_filled: 1,
                value: 25.0,
            },
        ]);
        assert_eq!(
            text,
            "op=drop_duplicates rows_removed=3\n\
             op=impute_median column=age missing_filled=1 value=25"
        );
    }

    #[test]
    fn undefined_bounds_render_as_null() {
        let text = changelog_to_text(&[ChangelogEntry::WinsorizeIqr {
            column: "x".to_string(),
            lower: None,
            upper: None,
            iqr: None,
            outliers_capped: 0,
            new_column: "x_w".to_string(),
        }]);
        assert!(text.contains("lower=null upper=null iqr=null"));
    }

    #[test]
    fn empty_changelog_renders_empty() {
        assert_eq!(changelog_to_text(&[]), "");
    }
}
