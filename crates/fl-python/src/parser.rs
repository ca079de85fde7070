//! Python parser wrapper

use rustpython_parser::{ast, Parse};

use crate::error::{PythonError, PythonResult};
use crate::location::LineIndex;

/// A parsed Python module together with the line index of its source
#[derive(Debug)]
pub struct ParsedModule {
    /// Top-level statements in source order
    pub body: ast::Suite,
    /// Offset-to-position index for the same source
    pub index: LineIndex,
}

/// Parse Python source into top-level statements plus a line index.
///
/// Empty source parses to an empty statement list.
pub fn parse_module(source: &str, source_path: &str) -> PythonResult<ParsedModule> {
    let index = LineIndex::new(source);
    match ast::Suite::parse(source, source_path) {
        Ok(body) => Ok(ParsedModule { body, index }),
        Err(err) => {
            let pos = index.position(err.offset);
            Err(PythonError::Parse {
                message: err.error.to_string(),
                row: pos.row,
                col: pos.col,
            })
        }
    }
}

/// Parse a single Python expression
pub fn parse_expression(source: &str, source_path: &str) -> PythonResult<ast::Expr> {
    let index = LineIndex::new(source);
    ast::Expr::parse(source, source_path).map_err(|err| {
        let pos = index.position(err.offset);
        PythonError::Parse {
            message: err.error.to_string(),
            row: pos.row,
            col: pos.col,
        }
    })
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod tests;
