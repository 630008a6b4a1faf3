//! Error handling for the ETL run.
//!
//! Only failures that abort a run live here. Values that fail to parse or
//! fall outside their plausible range are not errors: the stages turn them
//! into nulls and carry on.
//!
//! ```
//! use sleep_etl::error::EtlError;
//! use std::path::PathBuf;
//!
//! let err = EtlError::InputMissing {
//!     path: PathBuf::from("missing.csv"),
//! };
//! assert_eq!(err.to_string(), "Input file not found: missing.csv");
//! ```

use polars::error::PolarsError;
use std::path::PathBuf;

/// Main error type for ETL operations.
#[derive(Debug, thiserror::Error)]
pub enum EtlError {
    /// The input table does not exist.
    #[error("Input file not found: {}", .path.display())]
    InputMissing { path: PathBuf },

    /// The input table exists but could not be read as CSV.
    #[error("Failed to read input table {}: {source}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    /// The output file or its directory could not be created.
    #[error("Failed to create output file {}: {source}", .path.display())]
    OutputFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The cleaned table could not be serialised.
    #[error("Failed to write cleaned table {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    /// Configuration file could not be read.
    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration JSON is malformed.
    #[error("Configuration error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// A built-in pattern failed to compile.
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// I/O outside the table reader and writer (summary file, log directory).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other failure raised by polars inside a stage.
    #[error("Data processing error: {0}")]
    Polars(#[from] PolarsError),
}

/// Result type alias for ETL operations.
pub type Result<T> = std::result::Result<T, EtlError>;
