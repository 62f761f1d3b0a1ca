//! The lexer driver.

use super::classify::{self, Failure};
use super::cursor::Cursor;
use super::token::{Token, TokenKind};
use crate::disambiguate::{Candidate, Disambiguator};
use crate::error::{LexError, LexErrorKind};
use crate::options::LexOptions;
use crate::rules::RuleTable;
use crate::span::SourceSpan;

const COMMENT: &str = "COMMENT";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Scanning,
    Done,
}

/// Streaming tokenizer over a source string.
///
/// Yields `Ok(Token)` for each token and `Err(LexError)` for each failure.
/// With `stop_on_first_error` (the default) the first error ends the stream;
/// otherwise scanning resumes one character past the reported failure (or
/// past the token start, whichever is later), and later items may be
/// spurious.
pub struct Lexer<'a> {
    source: &'a str,
    options: LexOptions,
    disambiguator: Disambiguator<'a>,
    cursor: Cursor,
    state: State,
}

impl<'a> Lexer<'a> {
    /// Lexer over the built-in rule table.
    pub fn new(source: &'a str, options: LexOptions) -> Self {
        Self::with_table(source, RuleTable::global(), options)
    }

    pub fn with_table(source: &'a str, table: &'a RuleTable, options: LexOptions) -> Self {
        Self {
            source,
            options,
            disambiguator: Disambiguator::new(table),
            cursor: Cursor::new(),
            state: State::Scanning,
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn options(&self) -> &LexOptions {
        &self.options
    }

    /// Current position (the start of the next token).
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn is_done(&self) -> bool {
        self.state == State::Done
    }

    /// Rewind to the start of the source.
    pub fn restart(&mut self) {
        self.cursor = Cursor::new();
        self.state = State::Scanning;
    }

    fn select(&self, offset: usize) -> Option<Candidate<'a>> {
        let comments = self.options.comments;
        self.disambiguator
            .select_where(self.source, offset, |c| comments || c.name() != COMMENT)
    }

    /// Cut one token at the cursor, or describe why none fits.
    fn scan_token(&self) -> std::result::Result<Token, Failure> {
        let offset = self.cursor.offset;
        let candidate = self
            .select(offset)
            .ok_or_else(|| classify::classify(self.source, offset))?;

        if let Some(failure) =
            classify::reject_partial_opener(self.source, offset, candidate.name())
        {
            return Err(failure);
        }

        let end = offset + candidate.len;
        let lexeme = &self.source[offset..end];
        let kind = TokenKind::from_rule(candidate.name(), lexeme).ok_or(Failure {
            kind: LexErrorKind::NoMatchAtPosition,
            offset,
        })?;

        Ok(Token::new(
            kind,
            candidate.name(),
            lexeme,
            SourceSpan::new(offset, end),
            self.cursor.position(),
        ))
    }

    fn make_error(&self, failure: Failure) -> LexError {
        let mut at = self.cursor;
        if let Some(between) = self.source.get(at.offset..failure.offset) {
            at.advance(between);
        }
        LexError {
            kind: failure.kind,
            offset: failure.offset,
            line: at.line,
            column: at.column,
            snippet: classify::snippet(self.source, failure.offset, self.options.snippet_radius),
        }
    }

    /// Move the cursor one character past both its own position and the
    /// reported failure, so the same failure is not found twice.
    fn skip_past(&mut self, failure_offset: usize) {
        let from = self.cursor.offset.max(failure_offset);
        let width = self
            .source
            .get(from..)
            .and_then(|rest| rest.chars().next())
            .map(char::len_utf8)
            .unwrap_or(0);
        let to = (from + width).min(self.source.len());
        if let Some(skipped) = self.source.get(self.cursor.offset..to) {
            self.cursor.advance(skipped);
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = std::result::Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.state == State::Done {
                return None;
            }
            if self.cursor.offset >= self.source.len() {
                self.state = State::Done;
                return None;
            }

            match self.scan_token() {
                Ok(token) => {
                    self.cursor.advance(&token.lexeme);
                    if token.is_trivia() && !self.options.emit_whitespace {
                        continue;
                    }
                    tracing::trace!(
                        rule = token.rule,
                        start = token.span.start,
                        end = token.span.end,
                        "token"
                    );
                    return Some(Ok(token));
                }
                Err(failure) => {
                    let failure_offset = failure.offset;
                    let err = self.make_error(failure);
                    tracing::debug!(
                        code = err.code(),
                        offset = err.offset,
                        line = err.line,
                        column = err.column,
                        "lexical error"
                    );
                    if self.options.stop_on_first_error {
                        self.state = State::Done;
                    } else {
                        self.skip_past(failure_offset);
                    }
                    return Some(Err(err));
                }
            }
        }
    }
}

/// Lex `text` with the given options.
pub fn tokenize(text: &str, options: LexOptions) -> Lexer<'_> {
    Lexer::new(text, options)
}

/// Lex `text` with default options, failing on the first error.
pub fn tokenize_all(text: &str) -> std::result::Result<Vec<Token>, LexError> {
    tokenize(text, LexOptions::default()).collect()
}
