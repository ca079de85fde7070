//! Source positions, regions, and the byte-offset line index
//!
//! The parser reports node locations as byte ranges into the source text.
//! Diagnostics want rows and columns, so each checked file builds a
//! [`LineIndex`] once and converts ranges through it.

use rustpython_parser::text_size::{TextRange, TextSize};
use serde::{Deserialize, Serialize};

/// A point in source code.
///
/// Rows are 1-based; columns are 0-based byte offsets within the line,
/// matching the column convention of the CPython AST.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct SourcePosition {
    /// 1-based row
    pub row: u32,
    /// 0-based column
    pub col: u32,
}

impl SourcePosition {
    /// Create a new position
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Convert to the zero-based (line, character) pair used by language servers
    pub fn as_lsp_position(&self) -> (u32, u32) {
        (self.row.saturating_sub(1), self.col)
    }
}

impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

/// A contiguous span of source bounded by a start and an exclusive end position
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct SourceRegion {
    /// Start position (inclusive)
    pub start: SourcePosition,
    /// End position (exclusive)
    pub end: SourcePosition,
}

impl SourceRegion {
    /// Create a region from two positions. `end` must not be before `start`.
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        debug_assert!(start <= end, "region end must not be before start");
        Self { start, end }
    }

    /// Shorthand to build a region from (row, col) tuples
    pub fn from_tuples(start: (u32, u32), end: (u32, u32)) -> Self {
        Self::new(
            SourcePosition::new(start.0, start.1),
            SourcePosition::new(end.0, end.1),
        )
    }

    /// Number of rows spanned; 0 when the region lies on a single row
    pub fn row_span(&self) -> u32 {
        self.end.row - self.start.row
    }

    /// Number of columns spanned on the start row
    pub fn col_span(&self) -> u32 {
        self.end.col.saturating_sub(self.start.col)
    }

    /// True when the whole region lies on one row
    pub fn is_single_row(&self) -> bool {
        self.start.row == self.end.row
    }
}

impl std::fmt::Display for SourceRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Maps byte offsets produced by the parser to row/column positions
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offset of the start of each line, always beginning with 0
    line_starts: Vec<u32>,
}

impl LineIndex {
    /// Build the index for a source text
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0u32];
        for (i, b) in source.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i as u32 + 1);
            }
        }
        Self { line_starts }
    }

    /// Convert a byte offset to a position
    pub fn position(&self, offset: TextSize) -> SourcePosition {
        let off = u32::from(offset);
        let line = self
            .line_starts
            .partition_point(|&start| start <= off)
            .saturating_sub(1);
        SourcePosition::new(line as u32 + 1, off - self.line_starts[line])
    }

    /// Convert a byte range to a region
    pub fn region(&self, range: TextRange) -> SourceRegion {
        SourceRegion::new(self.position(range.start()), self.position(range.end()))
    }
}

#[cfg(test)]
#[path = "location_test.rs"]
mod tests;
