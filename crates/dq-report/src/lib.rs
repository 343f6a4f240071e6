//! Report outputs: the narrative summary, the JSON quality report, and the
//! changelog exports.

pub mod changelog;
pub mod json;
pub mod narrative;

pub use changelog::{changelog_to_text, entry_fields, write_changelog_csv};
pub use json::write_report_json;
pub use narrative::narrate;

use std::path::Path;

use anyhow::{Context, Result};

/// Writes the narrative summary as plain text with a trailing newline.
pub fn write_summary_text(path: &Path, summary: &str) -> Result<()> {
    std::fs::write(path, format!("{summary}\n"))
        .with_context(|| format!("failed to write summary {}", path.display()))
}
