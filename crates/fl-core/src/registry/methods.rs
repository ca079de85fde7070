//! Handlers for frame methods

use std::collections::{BTreeSet, HashMap};

use crate::value::Value;

use super::CallArgs;

/// Result of applying a frame method
#[derive(Debug, Clone)]
pub struct MethodOutcome {
    /// New state of the receiver
    pub updated: BTreeSet<String>,
    /// Schema of the returned frame, when the method returns one
    pub returned: Option<BTreeSet<String>>,
}

/// Handler for a `frame.method(...)` call, given the receiver's current
/// column set and the call's arguments
pub type MethodFn = fn(&BTreeSet<String>, &CallArgs) -> MethodOutcome;

/// Named table of frame-method handlers
pub struct MethodRegistry {
    handlers: HashMap<&'static str, MethodFn>,
}

impl MethodRegistry {
    /// Registry with the built-in DataFrame methods
    pub fn builtin() -> Self {
        let mut handlers: HashMap<&'static str, MethodFn> = HashMap::new();
        handlers.insert("assign", assign);
        handlers.insert("insert", insert);
        Self { handlers }
    }

    /// Look up a handler by method name
    pub fn get(&self, name: &str) -> Option<MethodFn> {
        self.handlers.get(name).copied()
    }
}

/// `assign(**kwargs)`: receiver unchanged; returns receiver plus the
/// keyword names
fn assign(columns: &BTreeSet<String>, args: &CallArgs) -> MethodOutcome {
    let mut returned = columns.clone();
    returned.extend(args.keyword.iter().map(|(name, _)| name.clone()));
    MethodOutcome {
        updated: columns.clone(),
        returned: Some(returned),
    }
}

/// `insert(loc, column, value, ...)`: receiver gains `column` when that
/// argument is a string constant; nothing is returned
fn insert(columns: &BTreeSet<String>, args: &CallArgs) -> MethodOutcome {
    let mut updated = columns.clone();
    if let Value::Str(column) = args.arg_or_kw(1, "column") {
        updated.insert(column.clone());
    }
    MethodOutcome {
        updated,
        returned: None,
    }
}
