//! Reversible dataset repairs.
//!
//! Every operation takes a frame by reference and returns a fresh frame
//! plus the changelog entries describing what it did. The caller's copy
//! is never mutated, and an empty changelog is a valid "nothing to do"
//! result. Unknown column names are silently skipped; expected data
//! conditions (no mode available, unseen group keys) surface as result
//! states, never as errors.

mod auto;
mod frame;
mod impute;
mod indicator;
mod winsorize;

pub use auto::auto_repair;
pub use impute::{impute_group_median, impute_mode};
pub use indicator::add_known_indicator;
pub use winsorize::{DEFAULT_IQR_FACTOR, DEFAULT_WINSOR_SUFFIX, winsorize_iqr};
