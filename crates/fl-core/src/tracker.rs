//! Per-frame column tracker
//!
//! Each DataFrame-typed variable gets one tracker holding the set of
//! columns it is known to carry and, for derived columns, the columns
//! they were computed from. Ordered maps keep diagnostics deterministic
//! across runs.

use std::collections::{BTreeMap, BTreeSet};

use fl_python::SourceRegion;
use serde::Serialize;

/// Tracker policy on missing columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackerMode {
    /// Missing lookups and dependencies are reported
    Strict,
    /// Missing lookups and dependencies are materialized on demand
    Relaxed,
}

/// Tracks the known columns of one frame variable and their declared
/// dependencies
#[derive(Debug, Clone, Serialize)]
pub struct FrameTracker {
    /// Name of the tracked frame variable
    pub id: String,
    /// Lookup policy
    pub mode: TrackerMode,
    /// Known columns mapped to the columns they were derived from
    pub columns: BTreeMap<String, BTreeSet<String>>,
    /// Region of the statement that bound the frame, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_at: Option<SourceRegion>,
    /// Region where the constructor's data argument was defined, when the
    /// frame was built from a variable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<SourceRegion>,
}

impl FrameTracker {
    /// Create a strict tracker seeded with the given columns, each with
    /// empty dependencies
    pub fn new_strict(id: impl Into<String>, columns: impl IntoIterator<Item = String>) -> Self {
        Self {
            id: id.into(),
            mode: TrackerMode::Strict,
            columns: columns.into_iter().map(|c| (c, BTreeSet::new())).collect(),
            defined_at: None,
            data_source: None,
        }
    }

    /// Create an empty relaxed tracker; entries appear on first touch
    pub fn new_relaxed(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            mode: TrackerMode::Relaxed,
            columns: BTreeMap::new(),
            defined_at: None,
            data_source: None,
        }
    }

    /// Validate a column read.
    ///
    /// Returns the missing column name in strict mode; in relaxed mode a
    /// missing column is materialized with no dependencies and `None` is
    /// returned.
    pub fn try_get(&mut self, column: &str) -> Option<String> {
        if self.columns.contains_key(column) {
            return None;
        }
        match self.mode {
            TrackerMode::Strict => Some(column.to_string()),
            TrackerMode::Relaxed => {
                self.columns.insert(column.to_string(), BTreeSet::new());
                None
            }
        }
    }

    /// Add a column, optionally derived from `deps`.
    ///
    /// Returns the dependencies that do not exist (empty on success). In
    /// strict mode either every dependency exists, in which case the
    /// column is inserted and its dependency set unioned, or nothing is
    /// inserted and the missing names are returned. An empty `deps` always
    /// succeeds. Relaxed mode materializes missing dependencies instead.
    pub fn try_add(&mut self, column: &str, deps: &[String]) -> Vec<String> {
        if deps.is_empty() {
            self.columns.entry(column.to_string()).or_default();
            return Vec::new();
        }

        if self.mode == TrackerMode::Strict {
            let missing: Vec<String> = deps
                .iter()
                .filter(|dep| !self.columns.contains_key(dep.as_str()))
                .cloned()
                .collect();
            if !missing.is_empty() {
                return missing;
            }
        } else {
            for dep in deps {
                self.columns.entry(dep.clone()).or_default();
            }
        }

        self.columns
            .entry(column.to_string())
            .or_default()
            .extend(deps.iter().cloned());
        Vec::new()
    }

    /// Columns with no recorded dependencies
    pub fn independent(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|(_, deps)| deps.is_empty())
            .map(|(col, _)| col.clone())
            .collect()
    }

    /// True when the column is known
    pub fn contains(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    /// Known column names in sorted order
    pub fn column_names(&self) -> Vec<String> {
        self.columns.keys().cloned().collect()
    }
}

#[cfg(test)]
#[path = "tracker_test.rs"]
mod tests;
