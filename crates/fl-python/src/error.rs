//! Error types for fl-python

use thiserror::Error;

/// Python parsing errors
#[derive(Error, Debug)]
pub enum PythonError {
    /// Source failed to parse
    #[error("Python parse error at line {row}, column {col}: {message}")]
    Parse { message: String, row: u32, col: u32 },
}

/// Result type alias for PythonError
pub type PythonResult<T> = Result<T, PythonError>;
