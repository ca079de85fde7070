//! fl-python - Python parsing layer for Framelint
//!
//! This crate wraps rustpython-parser and maps its byte-offset ranges
//! onto the row/column source regions used by diagnostics.

pub mod error;
pub mod location;
pub mod parser;

pub use error::{PythonError, PythonResult};
pub use location::{LineIndex, SourcePosition, SourceRegion};
pub use parser::{parse_expression, parse_module, ParsedModule};
