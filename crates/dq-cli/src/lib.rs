//! CLI library components for the dq tool.

pub mod logging;
