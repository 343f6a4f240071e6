//! CSV reading with encoding fallback.
//!
//! Raw bytes are decoded as UTF-8 first, then Latin-1 (which is total over
//! all byte sequences), so a read failure is surfaced before the core ever
//! sees data. Parsing goes through Polars with ordinary schema inference;
//! empty cells arrive as nulls.

use std::io::Cursor;
use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};
use tracing::debug;

use crate::error::IngestError;

/// Reads a CSV file into a `DataFrame`, trying UTF-8 then Latin-1.
pub fn read_csv_path(path: &Path) -> Result<DataFrame, IngestError> {
    let raw = std::fs::read(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    read_csv_bytes(&raw)
}

/// Reads CSV from an in-memory byte buffer, trying UTF-8 then Latin-1.
pub fn read_csv_bytes(raw: &[u8]) -> Result<DataFrame, IngestError> {
    let text = decode_with_fallback(raw);
    if text.trim().is_empty() {
        return Err(IngestError::EmptyCsv);
    }
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .into_reader_with_file_handle(Cursor::new(text.into_bytes()))
        .finish()
        .map_err(|e| IngestError::CsvParse {
            message: e.to_string(),
        })?;
    debug!(rows = df.height(), cols = df.width(), "parsed CSV input");
    Ok(df)
}

/// Decodes bytes as UTF-8, falling back to Latin-1.
///
/// Latin-1 maps every byte to the Unicode code point of the same value, so
/// the fallback never fails and garbled text is the worst outcome.
fn decode_with_fallback(raw: &[u8]) -> String {
    match std::str::from_utf8(raw) {
        Ok(text) => text.to_string(),
        Err(_) => {
            debug!("input is not valid UTF-8, decoding as Latin-1");
            raw.iter().map(|&b| char::from(b)).collect()
        }
    }
}
