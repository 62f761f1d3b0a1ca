//! Lexer configuration.

use serde::{Deserialize, Serialize};

/// Options recognised by [`tokenize`](crate::tokenize).
///
/// Deserialises from camelCase keys (`emitWhitespace`, `stopOnFirstError`,
/// ...); missing keys take their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LexOptions {
    /// Emit whitespace and comment tokens instead of skipping them
    pub emit_whitespace: bool,
    /// Stop after the first lexical error
    pub stop_on_first_error: bool,
    /// Recognise `#` line comments
    pub comments: bool,
    /// Characters of context kept either side of an error in its snippet
    pub snippet_radius: usize,
}

impl Default for LexOptions {
    fn default() -> Self {
        Self {
            emit_whitespace: false,
            stop_on_first_error: true,
            comments: true,
            snippet_radius: 24,
        }
    }
}

impl LexOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_emit_whitespace(mut self, emit: bool) -> Self {
        self.emit_whitespace = emit;
        self
    }

    pub fn with_stop_on_first_error(mut self, stop: bool) -> Self {
        self.stop_on_first_error = stop;
        self
    }

    pub fn with_comments(mut self, comments: bool) -> Self {
        self.comments = comments;
        self
    }

    pub fn with_snippet_radius(mut self, radius: usize) -> Self {
        self.snippet_radius = radius;
        self
    }
}
