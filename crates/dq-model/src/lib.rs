//! Plain data types shared across the dq workspace.
//!
//! Everything here is serializable and free of polars types: profiles,
//! issues, reports, and the closed changelog union. The profiling and
//! repair crates produce these records; the report and CLI crates consume
//! them.

pub mod changelog;
pub mod issue;
pub mod profile;

pub use changelog::ChangelogEntry;
pub use issue::{Issue, IssueKind, Severity};
pub use profile::{
    CategoricalStats, ColumnStats, ColumnSummary, NumericStats, Profile, Report, TemporalStats,
    ValueCount,
};
