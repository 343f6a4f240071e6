//! Dataset export as delimited text.

use std::fs::File;
use std::path::Path;

use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::debug;

use crate::error::IngestError;

/// Writes a `DataFrame` to a CSV file with a header row.
///
/// The frame is cloned before writing; the caller's copy is untouched.
pub fn write_csv_path(df: &DataFrame, path: &Path) -> Result<(), IngestError> {
    let file = File::create(path).map_err(|source| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    let mut out = df.clone();
    CsvWriter::new(file)
        .finish(&mut out)
        .map_err(|e| IngestError::CsvWrite {
            message: e.to_string(),
        })?;
    debug!(rows = df.height(), path = %path.display(), "wrote CSV export");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::read::read_csv_bytes;

    #[test]
    fn round_trips_through_a_temp_file() {
        let df = read_csv_bytes(b"a,b\n1,x\n2,y\n").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv_path(&df, &path).unwrap();
        let back = read_csv_bytes(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(back.height(), 2);
        assert_eq!(back.width(), 2);
    }
}
