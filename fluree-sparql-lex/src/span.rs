//! Source positions for tokens and lexical errors.
//!
//! Tokens carry a byte-offset `SourceSpan` for slicing plus the 1-based
//! `LineCol` of their first character. `LineIndex` maps offsets back to
//! lines when rendering diagnostics.

use serde::{Deserialize, Serialize};

/// A span in the source text, identified by byte offsets.
///
/// Spans are inclusive of start and exclusive of end: `[start, end)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceSpan {
    /// Byte offset of the start (inclusive)
    pub start: usize,
    /// Byte offset of the end (exclusive)
    pub end: usize,
}

impl SourceSpan {
    /// Create a new span from start to end byte offsets.
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The length of this span in bytes.
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Extract the covered text, clamping both ends to the source length.
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        let len = source.len();
        let start = self.start.min(len);
        let end = self.end.min(len);
        source.get(start..end).unwrap_or("")
    }
}

/// A line/column position in source text.
///
/// Both are 1-based. Columns count characters, not bytes, so a
/// non-ASCII prefix on the line advances the column by one per code point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

impl LineCol {
    pub const fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

impl Default for LineCol {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl std::fmt::Display for LineCol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Mapping from byte offsets to line/column positions.
#[derive(Debug)]
pub struct LineIndex {
    /// Byte offsets of line starts (including offset 0 for line 1)
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, c) in source.char_indices() {
            if c == '\n' {
                line_starts.push(i + 1);
            }
        }
        Self { line_starts }
    }

    /// Convert a byte offset to a line/column position.
    pub fn line_col(&self, source: &str, offset: usize) -> LineCol {
        let offset = offset.min(source.len());
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let line_start = self.line_starts.get(line).copied().unwrap_or(0);
        let col = source
            .get(line_start..offset)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(offset - line_start);
        LineCol::new(line as u32 + 1, col as u32 + 1)
    }

    /// Text of a 1-based line, without its line terminator.
    pub fn line_text<'a>(&self, source: &'a str, line: u32) -> &'a str {
        let idx = line.saturating_sub(1) as usize;
        let Some(&start) = self.line_starts.get(idx) else {
            return "";
        };
        let end = self
            .line_starts
            .get(idx + 1)
            .copied()
            .unwrap_or(source.len());
        source
            .get(start..end)
            .unwrap_or("")
            .trim_end_matches(['\n', '\r'])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_basics() {
        let span = SourceSpan::new(5, 10);
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
        assert!(SourceSpan::new(5, 5).is_empty());
    }

    #[test]
    fn test_span_slice_clamps() {
        let source = "hello";
        assert_eq!(SourceSpan::new(1, 3).slice(source), "el");
        assert_eq!(SourceSpan::new(3, 100).slice(source), "lo");
        assert_eq!(SourceSpan::new(100, 105).slice(source), "");
        assert_eq!(SourceSpan::new(4, 2).slice(source), "");
    }

    #[test]
    fn test_line_index() {
        let source = "line1\nline2\nline3";
        let index = LineIndex::new(source);

        assert_eq!(index.line_col(source, 0), LineCol::new(1, 1));
        assert_eq!(index.line_col(source, 3), LineCol::new(1, 4));
        assert_eq!(index.line_col(source, 6), LineCol::new(2, 1));
        assert_eq!(index.line_col(source, 14), LineCol::new(3, 3));
        assert_eq!(index.line_text(source, 2), "line2");
        assert_eq!(index.line_text(source, 9), "");
    }

    #[test]
    fn test_columns_count_characters() {
        let source = "\"é\" ?x";
        let index = LineIndex::new(source);
        // 'é' is two bytes but one column
        assert_eq!(index.line_col(source, 5), LineCol::new(1, 5));
    }
}
