//! Error types for the data module.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for data operations.
pub type DataResult<T> = Result<T, DataError>;

/// Errors that can occur while resolving or normalizing a data source.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Declared data type must be one of: yaml, json, xml, csv, or regex (got '{0}')")]
    UnrecognizedType(String),

    #[error("Data file extension must be one of: .yml, .json, .xml, or .csv, or else the type must be declared in the config ({0})")]
    UnknownExtension(String),

    #[error("A regex pattern is required with free-form data file {0}")]
    MissingPattern(PathBuf),

    #[error("There was a problem with the data file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Could not read free-form data file {path}: {source}")]
    FreeformRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid free-form pattern '{pattern}': {message}")]
    BadPattern { pattern: String, message: String },
}

impl DataError {
    /// Whether the orchestrator may log this error and carry on with an
    /// empty data context instead of abandoning the build.
    ///
    /// Only parse failures are recoverable. Unknown types or extensions,
    /// missing patterns, and unreadable free-form files abandon the
    /// current compile job.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, DataError::Parse { .. })
    }
}
