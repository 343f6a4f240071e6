//! Dataset profiling and quality-issue detection.
//!
//! The check pipeline is two pure stages: `profile` computes descriptive
//! statistics from a frame, `detect` derives severity-tagged issues from
//! the profile. `run_checks` composes them into a `Report`.

pub mod issues;
pub mod profiler;

pub use issues::detect;
pub use profiler::{OUTLIER_IQR_FACTOR, missing_counts, profile};

use dq_model::Report;
use polars::prelude::DataFrame;

/// Profiles a frame and derives its issues.
pub fn run_checks(df: &DataFrame) -> Report {
    let profile = profile(df);
    let issues = detect(&profile);
    Report { profile, issues }
}
