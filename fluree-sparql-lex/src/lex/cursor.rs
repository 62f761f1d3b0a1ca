use crate::span::LineCol;

/// Lexer position: byte offset plus the 1-based line/column it maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> LineCol {
        LineCol::new(self.line, self.column)
    }

    /// Move past `text`, which must be the source slice starting at the
    /// current offset.
    pub fn advance(&mut self, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.offset += text.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_counts_lines_and_chars() {
        let mut cursor = Cursor::new();
        cursor.advance("ab");
        assert_eq!((cursor.offset, cursor.line, cursor.column), (2, 1, 3));

        cursor.advance("\n\n x");
        assert_eq!((cursor.offset, cursor.line, cursor.column), (6, 3, 3));

        cursor.advance("é");
        assert_eq!(cursor.offset, 8);
        assert_eq!(cursor.position(), LineCol::new(3, 4));
    }

    #[test]
    fn test_carriage_return_is_a_column() {
        let mut cursor = Cursor::new();
        cursor.advance("a\r\nb");
        assert_eq!(cursor.position(), LineCol::new(2, 2));
    }
}
