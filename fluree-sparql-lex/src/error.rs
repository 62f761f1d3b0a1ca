//! Error types for the terminal table and the lexer.

use serde::{Deserialize, Serialize};

/// Crate-level error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `check` or `Matcher::match_at` was given a name the table doesn't define
    #[error("unknown terminal rule: {0}")]
    UnknownRule(String),

    /// Rule definitions are inconsistent (duplicate, dangling reference, cycle)
    #[error("malformed grammar: {0}")]
    MalformedGrammar(String),

    /// A fully expanded rule pattern was rejected by the regex engine
    #[error("invalid pattern for rule {rule}: {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    #[error(transparent)]
    Lex(#[from] LexError),
}

/// Result type for table and lexer operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedGrammar(message.into())
    }
}

/// Classification of a lexical failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LexErrorKind {
    /// No terminal rule matches at the current offset
    #[serde(rename = "L001")]
    NoMatchAtPosition,

    /// A string, long string or IRI opener has no closer before end of input
    #[serde(rename = "L002")]
    UnterminatedLiteral,

    /// A backslash escape with a character the grammar doesn't allow
    #[serde(rename = "L003")]
    InvalidEscape,
}

impl LexErrorKind {
    /// Stable code (e.g. "L002").
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoMatchAtPosition => "L001",
            Self::UnterminatedLiteral => "L002",
            Self::InvalidEscape => "L003",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::NoMatchAtPosition => "no terminal matches at this position",
            Self::UnterminatedLiteral => "unterminated literal",
            Self::InvalidEscape => "invalid escape sequence",
        }
    }
}

impl std::fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// A lexical failure at a specific position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{kind} at line {line}, column {column} (offset {offset}): `{snippet}`")]
pub struct LexError {
    pub kind: LexErrorKind,
    /// Byte offset of the failure
    pub offset: usize,
    /// 1-based line
    pub line: u32,
    /// 1-based column, in characters
    pub column: u32,
    /// Bounded context from the offending line
    pub snippet: String,
}

impl LexError {
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }
}
