//! Check and repair pipelines.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::info;

use dq_model::{ChangelogEntry, Report, Severity};
use dq_repair::DEFAULT_WINSOR_SUFFIX;

use crate::cli::{CheckArgs, RepairArgs};

pub struct CheckResult {
    pub report: Report,
    pub summary: String,
    pub has_errors: bool,
}

pub struct RepairResult {
    pub report: Report,
    pub changelog: Vec<ChangelogEntry>,
    pub summary: String,
    pub output_path: PathBuf,
    pub rows_before: usize,
    pub rows_after: usize,
}

pub fn run_check(args: &CheckArgs) -> Result<CheckResult> {
    let df = dq_ingest::read_csv_path(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    info!(rows = df.height(), cols = df.width(), "loaded dataset");

    let report = dq_profile::run_checks(&df);
    let summary = dq_report::narrate(&report, &[]);

    if let Some(path) = &args.report_json {
        dq_report::write_report_json(path, &report, &[])?;
        info!(path = %path.display(), "wrote JSON report");
    }
    if let Some(path) = &args.summary {
        dq_report::write_summary_text(path, &summary)?;
    }

    let has_errors = report
        .issues
        .iter()
        .any(|issue| issue.severity == Severity::Error);
    Ok(CheckResult {
        report,
        summary,
        has_errors,
    })
}

pub fn run_repair(args: &RepairArgs) -> Result<RepairResult> {
    let df = dq_ingest::read_csv_path(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let rows_before = df.height();
    info!(rows = rows_before, cols = df.width(), "loaded dataset");

    let (repaired, changelog) = apply_repairs(&df, args)?;
    let rows_after = repaired.height();

    let report = dq_profile::run_checks(&df);
    let summary = dq_report::narrate(&report, &changelog);

    let output_path = args
        .out
        .clone()
        .unwrap_or_else(|| default_output_path(&args.file));
    dq_ingest::write_csv_path(&repaired, &output_path)
        .with_context(|| format!("failed to write {}", output_path.display()))?;
    info!(path = %output_path.display(), rows = rows_after, "wrote repaired dataset");

    if let Some(path) = &args.changelog {
        dq_report::write_changelog_csv(&changelog, path)?;
        info!(path = %path.display(), entries = changelog.len(), "wrote changelog");
    }
    if let Some(path) = &args.summary {
        dq_report::write_summary_text(path, &summary)?;
    }

    Ok(RepairResult {
        report,
        changelog,
        summary,
        output_path,
        rows_before,
        rows_after,
    })
}

/// Threads the frame through the requested operations in a fixed order;
/// each step consumes the previous step's output.
fn apply_repairs(df: &DataFrame, args: &RepairArgs) -> Result<(DataFrame, Vec<ChangelogEntry>)> {
    let mut work = df.clone();
    let mut changelog = Vec::new();

    if !args.no_auto {
        let (fixed, log) = dq_repair::auto_repair(&work)?;
        work = fixed;
        changelog.extend(log);
    }
    if !args.impute_mode.is_empty() {
        let (fixed, log) = dq_repair::impute_mode(&work, &args.impute_mode)?;
        work = fixed;
        changelog.extend(log);
    }
    if let Some(target) = &args.group_median {
        let (fixed, log) = dq_repair::impute_group_median(&work, target, &args.by)?;
        work = fixed;
        changelog.extend(log);
    }
    if let Some(column) = &args.indicator {
        let (fixed, log) =
            dq_repair::add_known_indicator(&work, column, None, args.drop_original)?;
        work = fixed;
        changelog.extend(log);
    }
    if !args.winsorize.is_empty() {
        let (fixed, log) =
            dq_repair::winsorize_iqr(&work, &args.winsorize, args.factor, DEFAULT_WINSOR_SUFFIX)?;
        work = fixed;
        changelog.extend(log);
    }

    Ok((work, changelog))
}

fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{stem}_repaired.csv"))
}
