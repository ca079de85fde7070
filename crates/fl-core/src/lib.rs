//! fl-core: column-flow analysis for pandas DataFrames
//!
//! This crate walks Python ASTs and validates DataFrame column reads and
//! writes against the set of columns each frame variable is known to carry.
//! It tracks frame creation through a constructor registry, column-set
//! evolution through a method registry and subscript writes, and reports
//! missing columns with near-miss name suggestions.

pub mod checker;
pub mod diagnostic;
pub mod error;
pub mod extract;
pub mod refs;
pub mod registry;
pub mod similarity;
pub mod tracker;
pub mod value;

pub use checker::{check, check_file, check_module, Checker, CheckerResult};
pub use diagnostic::{Diagnostic, Severity};
pub use error::{CheckError, CheckResult};
pub use refs::ColumnRef;
pub use tracker::{FrameTracker, TrackerMode};
pub use value::Value;
