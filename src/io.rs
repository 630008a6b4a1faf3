//! Loading the raw table and persisting the cleaned one.

use crate::error::{EtlError, Result};
use polars::prelude::*;
use std::path::Path;
use tracing::info;

/// Field values read as missing.
pub const NULL_TOKENS: [&str; 11] = [
    "", "NA", "N/A", "n/a", "NaN", "nan", "null", "NULL", "None", "#N/A", "<NA>",
];

/// Read a CSV file with a header row. Every column is loaded as text so that
/// type coercion stays with the pipeline.
///
/// # Errors
///
/// [`EtlError::InputMissing`] if `path` is not a file, [`EtlError::InputRead`]
/// if polars cannot parse it.
pub fn load_table(path: &Path) -> Result<DataFrame> {
    if !path.is_file() {
        return Err(EtlError::InputMissing {
            path: path.to_path_buf(),
        });
    }

    let null_values = NullValues::AllColumns(NULL_TOKENS.iter().map(|t| (*t).into()).collect());
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .with_null_values(Some(null_values))
        .finish()
        .and_then(LazyFrame::collect)
        .map_err(|source| EtlError::InputRead {
            path: path.to_path_buf(),
            source,
        })?;

    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "Loaded input table"
    );
    Ok(df)
}

/// Write `df` as CSV with a header row, creating the parent directory.
///
/// # Errors
///
/// [`EtlError::OutputFile`] for file-system failures, [`EtlError::OutputWrite`]
/// if serialisation fails.
pub fn save_table(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file_err = |source| EtlError::OutputFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(file_err)?;
    }

    let file = std::fs::File::create(path).map_err(file_err)?;
    CsvWriter::new(file)
        .include_header(true)
        .finish(df)
        .map_err(|source| EtlError::OutputWrite {
            path: path.to_path_buf(),
            source,
        })?;

    info!(path = %path.display(), rows = df.height(), "Saved cleaned table");
    Ok(())
}
