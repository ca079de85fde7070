//! Extractors for column references in expressions
//!
//! Each extractor recognizes one expression pattern and maps it to
//! [`ColumnRef`]s. Extractors run in priority order; the first to produce
//! a result wins, and a produced result is never empty. An expression
//! containing any operand that is not a recognized column reference
//! yields `None`.

mod binop;
mod column;

use fl_python::LineIndex;
use rustpython_ast as ast;

use crate::refs::ColumnRef;

pub use column::subscript_ref;

/// An extractor maps an expression to the column references it contains,
/// or `None` when the pattern is not recognized
pub type ExtractorFn = fn(&ast::Expr, &LineIndex) -> Option<Vec<ColumnRef>>;

/// Registered extractors in priority order. New patterns are added here.
const EXTRACTORS: &[(&str, ExtractorFn)] = &[
    ("column_ref", column::extract_column_ref),
    ("binop", binop::extract_binop_refs),
];

/// Extract column references from any recognized expression pattern
pub fn extract(expr: &ast::Expr, index: &LineIndex) -> Option<Vec<ColumnRef>> {
    EXTRACTORS.iter().find_map(|(_, f)| f(expr, index))
}

/// Extract a single column reference from a subscript expression
pub fn extract_single(expr: &ast::Expr, index: &LineIndex) -> Option<ColumnRef> {
    match expr {
        ast::Expr::Subscript(sub) => column::subscript_ref(sub, index),
        _ => None,
    }
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
