use serde::{Deserialize, Serialize};

/// One repair action, tagged by operation.
///
/// Entries accumulate in the order operations were applied; a single repair
/// call may emit zero, one, or several entries. The closed set keeps the
/// narrator's interpretation exhaustive instead of key-probing generic
/// records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ChangelogEntry {
    DropDuplicates {
        rows_removed: usize,
    },
    ImputeMedian {
        column: String,
        missing_filled: usize,
        value: f64,
    },
    ImputeMode {
        column: String,
        missing_filled: usize,
        value: String,
    },
    /// A column had missing cells but no non-missing value to use as a
    /// mode; nothing was filled, processing continued.
    ImputeModeSkipped {
        column: String,
        missing_unfilled: usize,
    },
    ImputeGroupMedian {
        column: String,
        by: Vec<String>,
        missing_filled: usize,
    },
    AddIndicator {
        source: String,
        indicator: String,
    },
    DropColumn {
        column: String,
    },
    WinsorizeIqr {
        column: String,
        /// `None` when the bounds are undefined (all-missing column).
        lower: Option<f64>,
        upper: Option<f64>,
        iqr: Option<f64>,
        outliers_capped: usize,
        new_column: String,
    },
}

impl ChangelogEntry {
    /// Snake-case operation name matching the serialized `op` tag.
    pub fn op_name(&self) -> &'static str {
        match self {
            ChangelogEntry::DropDuplicates { .. } => "drop_duplicates",
            ChangelogEntry::ImputeMedian { .. } => "impute_median",
            ChangelogEntry::ImputeMode { .. } => "impute_mode",
            ChangelogEntry::ImputeModeSkipped { .. } => "impute_mode_skipped",
            ChangelogEntry::ImputeGroupMedian { .. } => "impute_group_median",
            ChangelogEntry::AddIndicator { .. } => "add_indicator",
            ChangelogEntry::DropColumn { .. } => "drop_column",
            ChangelogEntry::WinsorizeIqr { .. } => "winsorize_iqr",
        }
    }

    /// Cells filled by this entry, for the imputation variants that fill.
    pub fn missing_filled(&self) -> Option<usize> {
        match self {
            ChangelogEntry::ImputeMedian { missing_filled, .. }
            | ChangelogEntry::ImputeMode { missing_filled, .. }
            | ChangelogEntry::ImputeGroupMedian { missing_filled, .. } => Some(*missing_filled),
            _ => None,
        }
    }

    /// Whether this entry belongs to the imputation family, including the
    /// skipped marker.
    pub fn is_impute(&self) -> bool {
        self.op_name().starts_with("impute_")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn op_tag_matches_op_name() {
        let entry = ChangelogEntry::DropDuplicates { rows_removed: 3 };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["op"], entry.op_name());
        assert_eq!(json["rows_removed"], 3);
    }

    #[test]
    fn skipped_impute_fills_nothing() {
        let entry = ChangelogEntry::ImputeModeSkipped {
            column: "city".to_string(),
            missing_unfilled: 2,
        };
        assert!(entry.is_impute());
        assert_eq!(entry.missing_filled(), None);
    }

    #[test]
    fn winsorize_bounds_serialize_null_when_undefined() {
        let entry = ChangelogEntry::WinsorizeIqr {
            column: "x".to_string(),
            lower: None,
            upper: None,
            iqr: None,
            outliers_capped: 0,
            new_column: "x_w".to_string(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json["lower"].is_null());
        assert_eq!(json["op"], "winsorize_iqr");
    }
}
