//! Extractor for binary-operation trees of column references
//!
//! Matches expressions like `df['A'] + df['B']` or
//! `(df['A'] + df['B']) * df['C']`. Every leaf operand must itself be a
//! column reference; a single constant or variable leaf collapses the
//! whole expression to `None`.

use fl_python::LineIndex;
use rustpython_ast as ast;

use crate::refs::ColumnRef;

use super::column::subscript_ref;

/// Collect all column references from a binary-operation tree.
///
/// Traversal is iterative depth-first, left to right. Returns `None`
/// when the node is not a `BinOp` or any operand is not a recognized
/// column reference.
pub fn extract_binop_refs(expr: &ast::Expr, index: &LineIndex) -> Option<Vec<ColumnRef>> {
    let ast::Expr::BinOp(binop) = expr else {
        return None;
    };

    let mut refs = Vec::new();
    let mut stack: Vec<&ast::Expr> = vec![&binop.right, &binop.left];

    while let Some(node) = stack.pop() {
        match node {
            ast::Expr::BinOp(inner) => {
                stack.push(&inner.right);
                stack.push(&inner.left);
            }
            ast::Expr::Subscript(sub) => match subscript_ref(sub, index) {
                Some(r) => refs.push(r),
                None => return None,
            },
            _ => return None,
        }
    }

    if refs.is_empty() {
        None
    } else {
        Some(refs)
    }
}
