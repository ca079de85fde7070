//! Error types for fl-core

use thiserror::Error;

/// Analysis error type.
///
/// Column problems are never errors; they are collected as diagnostics.
/// These variants cover conditions that abort analysis of a single file.
#[derive(Error, Debug)]
pub enum CheckError {
    /// Source failed to parse
    #[error(transparent)]
    Python(#[from] fl_python::PythonError),

    /// Source file could not be read
    #[error("Cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for CheckError
pub type CheckResult<T> = Result<T, CheckError>;
