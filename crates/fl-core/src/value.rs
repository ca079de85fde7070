//! Shallow value abstraction for statically-known expressions
//!
//! Only a closed set of literal shapes is represented; everything else
//! collapses to [`Value::Unknown`] so that opaque sources can never
//! fabricate schema.

use std::collections::BTreeSet;

use rustpython_ast as ast;

/// A statically-known value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A string constant
    Str(String),
    /// A list literal; elements may individually be `Unknown`
    List(Vec<Value>),
    /// A dict literal with string keys, in source order
    Dict(Vec<(String, Value)>),
    /// A data-frame state: the set of known column names
    Frame(BTreeSet<String>),
    /// Anything not statically representable
    Unknown,
}

impl Value {
    /// The string payload, if this is a string constant
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// True when nothing is known about this value
    pub fn is_unknown(&self) -> bool {
        matches!(self, Value::Unknown)
    }
}

/// Shallowly evaluate an expression to a [`Value`].
///
/// Only string constants, list literals, and dict literals with string
/// keys are evaluated. A dict with any non-string key collapses to
/// `Unknown` as a whole; list elements degrade individually.
pub fn shallow_value(expr: &ast::Expr) -> Value {
    match expr {
        ast::Expr::Constant(c) => match &c.value {
            ast::Constant::Str(s) => Value::Str(s.clone()),
            _ => Value::Unknown,
        },
        ast::Expr::List(list) => Value::List(list.elts.iter().map(shallow_value).collect()),
        ast::Expr::Dict(dict) => {
            let mut entries = Vec::with_capacity(dict.values.len());
            for (key, value) in dict.keys.iter().zip(&dict.values) {
                // A `None` key is a `**mapping` unpacking entry
                let Some(key) = key else { continue };
                match key {
                    ast::Expr::Constant(c) => match &c.value {
                        ast::Constant::Str(s) => entries.push((s.clone(), shallow_value(value))),
                        _ => return Value::Unknown,
                    },
                    _ => return Value::Unknown,
                }
            }
            Value::Dict(entries)
        }
        _ => Value::Unknown,
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
