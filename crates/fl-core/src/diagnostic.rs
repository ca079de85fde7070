//! Diagnostic records and message builders
//!
//! Each builder produces one error shape with a stable message form. The
//! message is preformatted for plain reporters; rich renderers use the
//! structured fields (`hint`, `name_suggestion`, regions) instead of
//! re-parsing the text.

use fl_python::SourceRegion;
use serde::Serialize;

use crate::similarity::suggest_column;
use crate::tracker::FrameTracker;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational nudge
    Hint,
    /// Potential issue worth reviewing
    Warning,
    /// Likely bug
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Hint => write!(f, "hint"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A diagnostic produced by the checker
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    /// Severity level
    pub severity: Severity,
    /// Region of the offending expression
    pub region: SourceRegion,
    /// Preformatted message; may span multiple lines
    pub message: String,
    /// Extra lines for rich renderers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<Vec<String>>,
    /// Closest existing column name, when one is similar enough
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_suggestion: Option<String>,
    /// Region where the frame variable was first bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition_region: Option<SourceRegion>,
    /// Region where the frame's data argument was defined
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_region: Option<SourceRegion>,
}

/// Reference to a frame variable that was never declared
pub fn undeclared_frame(frame: &str, region: SourceRegion) -> Diagnostic {
    Diagnostic {
        severity: Severity::Error,
        region,
        message: format!("DataFrame '{frame}' is not declared."),
        hint: None,
        name_suggestion: None,
        definition_region: None,
        data_source_region: None,
    }
}

/// Read of a column that does not exist on the frame
pub fn missing_column_read(
    column: &str,
    region: SourceRegion,
    tracker: &FrameTracker,
) -> Diagnostic {
    let available = tracker.column_names();
    let suggestion = suggest_column(column, &available);

    let mut lines = vec![format!(
        "Column '{column}' does not exist on DataFrame '{}'.",
        tracker.id
    )];
    if let Some(similar) = &suggestion {
        lines.push(format!("  Did you mean: '{similar}'?"));
    }
    if !available.is_empty() {
        lines.push(format!(
            "  Available columns: {}",
            format_columns(&available)
        ));
    }

    Diagnostic {
        severity: Severity::Error,
        region,
        message: lines.join("\n"),
        hint: creation_hint(tracker),
        name_suggestion: suggestion,
        definition_region: tracker.defined_at,
        data_source_region: tracker.data_source,
    }
}

/// Assignment whose right-hand side references columns that do not exist
pub fn invalid_assignment(
    write_columns: &[String],
    missing: &[String],
    region: SourceRegion,
    tracker: &FrameTracker,
) -> Diagnostic {
    let available = tracker.column_names();
    let target = format!("{}['{}']", tracker.id, write_columns.join("', '"));

    let mut lines = Vec::new();
    if let [only] = missing {
        lines.push(format!(
            "Cannot assign to {target}: column '{only}' does not exist."
        ));
    } else {
        let formatted = missing
            .iter()
            .map(|col| format!("'{col}'"))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!(
            "Cannot assign to {target}: columns {formatted} do not exist."
        ));
    }

    let suggestions: Vec<String> = missing
        .iter()
        .filter_map(|col| {
            suggest_column(col, &available).map(|similar| format!("'{col}' -> '{similar}'"))
        })
        .collect();
    if !suggestions.is_empty() {
        lines.push(format!("  Did you mean: {}?", suggestions.join(", ")));
    }
    if !available.is_empty() {
        lines.push(format!(
            "  Available columns: {}",
            format_columns(&available)
        ));
    }

    let name_suggestion = match missing {
        [only] => suggest_column(only, &available),
        _ => None,
    };

    Diagnostic {
        severity: Severity::Error,
        region,
        message: lines.join("\n"),
        hint: creation_hint(tracker),
        name_suggestion,
        definition_region: tracker.defined_at,
        data_source_region: tracker.data_source,
    }
}

/// Format sorted column names for display.
///
/// Short lists print in full; longer lists show the first 3 and last 2
/// with a count of what was omitted.
fn format_columns(columns: &[String]) -> String {
    const MAX_DISPLAY: usize = 8;

    if columns.len() <= MAX_DISPLAY {
        return columns
            .iter()
            .map(|col| format!("'{col}'"))
            .collect::<Vec<_>>()
            .join(", ");
    }

    let first = columns[..3]
        .iter()
        .map(|col| format!("'{col}'"))
        .collect::<Vec<_>>()
        .join(", ");
    let last = columns[columns.len() - 2..]
        .iter()
        .map(|col| format!("'{col}'"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{first}, ...+{} more..., {last}", columns.len() - 5)
}

/// Hint block describing where the frame came from and what it carries
fn creation_hint(tracker: &FrameTracker) -> Option<Vec<String>> {
    let defined_at = tracker.defined_at?;
    let mut header = format!(
        "DataFrame '{}' created at line {}",
        tracker.id, defined_at.start.row
    );
    if let Some(data_source) = tracker.data_source {
        header.push_str(&format!(
            " from data defined at line {}",
            data_source.start.row
        ));
    }
    header.push_str(" with columns:");

    let mut lines = vec![header];
    lines.extend(tracker.column_names().iter().map(|col| format!("  - {col}")));
    Some(lines)
}

#[cfg(test)]
#[path = "diagnostic_test.rs"]
mod tests;
