//! Dataset ingestion and export.
//!
//! The quality core operates on in-memory Polars frames; this crate owns
//! the file-format boundary around it: reading CSV bytes with an encoding
//! fallback, and serializing a (possibly repaired) frame back out.

pub mod error;
pub mod read;
pub mod write;

pub use error::IngestError;
pub use read::{read_csv_bytes, read_csv_path};
pub use write::write_csv_path;
