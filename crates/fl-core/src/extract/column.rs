//! Extractor for subscript column references
//!
//! Matches `name['col']` and `name[['a', 'b', ...]]`. Integer indexes,
//! variable slices, nested subscripts, and tuple forms do not match.

use fl_python::LineIndex;
use rustpython_ast as ast;

use crate::refs::ColumnRef;

/// Extract a column reference from a subscript node.
///
/// Single-column form requires a string constant slice; multi-column form
/// requires a non-empty list of string constants. Any other slice shape
/// returns `None`.
pub fn subscript_ref(sub: &ast::ExprSubscript, index: &LineIndex) -> Option<ColumnRef> {
    let ast::Expr::Name(name) = sub.value.as_ref() else {
        return None;
    };

    let columns = match sub.slice.as_ref() {
        ast::Expr::Constant(c) => match &c.value {
            ast::Constant::Str(s) => vec![s.clone()],
            _ => return None,
        },
        ast::Expr::List(list) => {
            let mut columns = Vec::with_capacity(list.elts.len());
            for elt in &list.elts {
                match elt {
                    ast::Expr::Constant(c) => match &c.value {
                        ast::Constant::Str(s) => columns.push(s.clone()),
                        _ => return None,
                    },
                    _ => return None,
                }
            }
            if columns.is_empty() {
                return None;
            }
            columns
        }
        _ => return None,
    };

    Some(ColumnRef {
        region: index.region(sub.range),
        frame_region: index.region(name.range),
        frame: name.id.to_string(),
        columns,
    })
}

/// Extractor wrapper over [`subscript_ref`] for the registry
pub fn extract_column_ref(expr: &ast::Expr, index: &LineIndex) -> Option<Vec<ColumnRef>> {
    match expr {
        ast::Expr::Subscript(sub) => subscript_ref(sub, index).map(|r| vec![r]),
        _ => None,
    }
}
