//! Diagnostic formatting for terminal output
//!
//! The plain format prints the preformatted message with a location
//! prefix. The rich format rebuilds a compiler-style block: colored
//! header, gutter, the offending source line, and a caret underline.

use fl_core::{Diagnostic, Severity};

// Terminal colors and formatting
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const RESET: &str = "\x1b[0m";

const GUTTER_CHAR: char = '|';
const CARET: char = '^';

/// `file:row:col: message` with the full preformatted message
pub fn format_plain(diag: &Diagnostic, file: &str) -> String {
    let start = diag.region.start;
    format!("{file}:{}:{}: {}", start.row, start.col, diag.message)
}

/// Rich block with source context and caret underline
pub fn format_rich(diag: &Diagnostic, file: &str, source: &str, color: bool) -> String {
    let start = diag.region.start;
    let mut lines: Vec<String> = Vec::new();

    let main = diag
        .message
        .lines()
        .next()
        .unwrap_or_default()
        .trim_end_matches('.');
    let header_msg = match &diag.name_suggestion {
        Some(suggestion) => format!("{main}. Did you mean '{suggestion}'?"),
        None => format!("{main}."),
    };
    let mut header = format!("{file}:{}:{}: {header_msg}", start.row, start.col + 1);
    if color {
        let diag_color = match diag.severity {
            Severity::Error => RED,
            Severity::Warning | Severity::Hint => YELLOW,
        };
        header = format!("{BOLD}{diag_color}{header}{RESET}");
    }
    lines.push(header);

    let gutter_width = start.row.to_string().len();
    let pad = " ".repeat(gutter_width);
    lines.push(format!("{pad} {GUTTER_CHAR}"));

    if let Some(code_line) = source.lines().nth(start.row as usize - 1) {
        let (stripped, relative_col) = strip_indent(code_line, start.col as usize);
        lines.push(format!("{} {GUTTER_CHAR} {stripped}", start.row));

        let underline_len = diag.region.col_span().max(1) as usize;
        let mut caret_line = format!(
            "{}{}",
            " ".repeat(relative_col),
            CARET.to_string().repeat(underline_len)
        );
        if color {
            caret_line = format!("{YELLOW}{caret_line}{RESET}");
        }
        lines.push(format!("{pad} {GUTTER_CHAR} {caret_line}"));
    }

    lines.push(format!("{pad} {GUTTER_CHAR}"));

    if let Some(available) = available_columns_note(&diag.message) {
        let mut note = format!("= available: {available}");
        if color {
            note = format!("{BLUE}{note}{RESET}");
        }
        lines.push(format!("{pad} {note}"));
    }

    lines.join("\n")
}

/// Pull the available-columns list out of a preformatted message
fn available_columns_note(message: &str) -> Option<String> {
    message
        .lines()
        .find_map(|line| line.trim_start().strip_prefix("Available columns:"))
        .map(|cols| cols.trim().replace('\'', ""))
}

/// Strip leading whitespace and shift the column accordingly
fn strip_indent(line: &str, col: usize) -> (&str, usize) {
    let stripped = line.trim_start();
    let indent = line.len() - stripped.len();
    (stripped, col.saturating_sub(indent))
}

#[cfg(test)]
#[path = "format_test.rs"]
mod tests;
