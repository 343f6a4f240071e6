//! Schema-tagged JSON serialization of the quality report.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use dq_model::{ChangelogEntry, Issue, Profile, Report};

const REPORT_SCHEMA: &str = "dq.quality-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct QualityReportPayload<'a> {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub profile: &'a Profile,
    pub issues: &'a [Issue],
    pub changelog: &'a [ChangelogEntry],
}

/// Writes the report and changelog as pretty-printed JSON, returning the
/// path written.
pub fn write_report_json(
    output_path: &Path,
    report: &Report,
    changelog: &[ChangelogEntry],
) -> Result<PathBuf> {
    let payload = QualityReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        profile: &report.profile,
        issues: &report.issues,
        changelog,
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(output_path, format!("{json}\n"))?;
    Ok(output_path.to_path_buf())
}
