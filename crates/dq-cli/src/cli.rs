//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dq",
    version,
    about = "Data quality checks and reversible repairs for CSV files",
    long_about = "Profile a CSV file, surface data-quality issues with severities,\n\
                  apply reversible repairs (deduplication, imputation, indicators,\n\
                  winsorization), and produce a narrative summary."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Profile a CSV file and report data-quality issues.
    Check(CheckArgs),

    /// Apply repairs to a CSV file and write the result.
    Repair(RepairArgs),
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the CSV file to analyze.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Write the full report (profile, issues) as JSON.
    #[arg(long = "report-json", value_name = "PATH")]
    pub report_json: Option<PathBuf>,

    /// Write the narrative summary as plain text.
    #[arg(long = "summary", value_name = "PATH")]
    pub summary: Option<PathBuf>,
}

#[derive(Parser)]
pub struct RepairArgs {
    /// Path to the CSV file to repair.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output path for the repaired CSV (default: <FILE stem>_repaired.csv).
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Write the changelog as CSV records.
    #[arg(long = "changelog", value_name = "PATH")]
    pub changelog: Option<PathBuf>,

    /// Write the narrative summary as plain text.
    #[arg(long = "summary", value_name = "PATH")]
    pub summary: Option<PathBuf>,

    /// Skip the automatic repair bundle (dedupe + median/mode fill).
    #[arg(long = "no-auto")]
    pub no_auto: bool,

    /// Columns to fill with their most frequent value.
    #[arg(long = "impute-mode", value_name = "COL", num_args = 1..)]
    pub impute_mode: Vec<String>,

    /// Numeric column to fill with per-group medians (requires --by).
    #[arg(long = "group-median", value_name = "COL", requires = "by")]
    pub group_median: Option<String>,

    /// Grouping columns for --group-median.
    #[arg(long = "by", value_name = "COL", num_args = 1..)]
    pub by: Vec<String>,

    /// Column to derive a presence indicator from.
    #[arg(long = "indicator", value_name = "COL")]
    pub indicator: Option<String>,

    /// Drop the source column after creating its indicator.
    #[arg(long = "drop-original", requires = "indicator")]
    pub drop_original: bool,

    /// Numeric columns to winsorize by IQR into new capped columns.
    #[arg(long = "winsorize", value_name = "COL", num_args = 1..)]
    pub winsorize: Vec<String>,

    /// IQR multiplier for --winsorize bounds.
    #[arg(long = "factor", value_name = "F", default_value_t = dq_repair::DEFAULT_IQR_FACTOR)]
    pub factor: f64,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
