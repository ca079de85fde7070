//! Handlers for module-level frame constructors

use std::collections::{BTreeSet, HashMap};

use crate::value::Value;

use super::CallArgs;

/// Handler for a `module.func(...)` constructor call.
///
/// Returns the column set of the created frame, or `None` when the call
/// cannot be resolved to a schema (in which case no frame is registered).
pub type ConstructorFn = fn(&CallArgs) -> Option<BTreeSet<String>>;

/// Named table of constructor handlers
pub struct ConstructorRegistry {
    handlers: HashMap<&'static str, ConstructorFn>,
}

impl ConstructorRegistry {
    /// Registry with the built-in pandas constructors
    pub fn builtin() -> Self {
        let mut handlers: HashMap<&'static str, ConstructorFn> = HashMap::new();
        handlers.insert("DataFrame", dataframe);
        handlers.insert("read_csv", read_csv);
        Self { handlers }
    }

    /// Look up a handler by function name
    pub fn get(&self, name: &str) -> Option<ConstructorFn> {
        self.handlers.get(name).copied()
    }
}

/// `DataFrame(data=...)`: dict data yields its string keys; a list of
/// dicts yields the union of keys across entries
fn dataframe(args: &CallArgs) -> Option<BTreeSet<String>> {
    match args.arg_or_kw(0, "data") {
        Value::Dict(entries) => Some(entries.iter().map(|(key, _)| key.clone()).collect()),
        Value::List(items) => {
            let mut columns = BTreeSet::new();
            for item in items {
                match item {
                    Value::Dict(entries) => {
                        columns.extend(entries.iter().map(|(key, _)| key.clone()));
                    }
                    _ => return None,
                }
            }
            Some(columns)
        }
        _ => None,
    }
}

/// `read_csv(..., usecols=...)`: a list of string constants or a single
/// string yields those columns. Positional column indexes or any
/// unresolved element leave the call unresolved.
fn read_csv(args: &CallArgs) -> Option<BTreeSet<String>> {
    match args.kw("usecols")? {
        Value::Str(column) => Some(BTreeSet::from([column.clone()])),
        Value::List(items) => {
            let mut columns = BTreeSet::new();
            for item in items {
                match item {
                    Value::Str(column) => {
                        columns.insert(column.clone());
                    }
                    _ => return None,
                }
            }
            Some(columns)
        }
        _ => None,
    }
}
