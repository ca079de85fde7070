//! Constructor and method registries
//!
//! Two disjoint handler tables drive schema changes: module-level
//! constructors (`pd.DataFrame`, `pd.read_csv`) produce a new frame, and
//! frame methods (`df.assign`, `df.insert`) update or return one. The
//! tables are the analyzer's extension point; precision on real codebases
//! grows by adding handlers here, not by changing the checker.

mod constructors;
mod methods;

use crate::value::Value;

pub use constructors::{ConstructorFn, ConstructorRegistry};
pub use methods::{MethodFn, MethodOutcome, MethodRegistry};

/// Shallowly-evaluated arguments of one call site
#[derive(Debug, Clone, Default)]
pub struct CallArgs {
    /// Positional arguments in order
    pub positional: Vec<Value>,
    /// Keyword arguments in source order
    pub keyword: Vec<(String, Value)>,
}

impl CallArgs {
    /// Look up an argument by position, falling back to a keyword name.
    /// Returns `Unknown` when neither is present.
    pub fn arg_or_kw(&self, idx: usize, key: &str) -> &Value {
        if let Some(value) = self.positional.get(idx) {
            return value;
        }
        self.kw(key).unwrap_or(&Value::Unknown)
    }

    /// Look up a keyword argument
    pub fn kw(&self, key: &str) -> Option<&Value> {
        self.keyword
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
