//! Classification of lexical failures.
//!
//! The rule regexes only say "no match"; these scanners re-read the text at
//! the failure point to tell an unterminated literal or a bad escape apart
//! from a plain unexpected character, and to find the offset to blame.

use winnow::combinator::opt;
use winnow::stream::Location;
use winnow::token::{any, one_of, take_till, take_while};
use winnow::{LocatingSlice, ModalResult, Parser};

use crate::error::LexErrorKind;

type Input<'a> = LocatingSlice<&'a str>;

/// Characters allowed after a backslash inside a string (`ECHAR`).
const ECHAR_CHARS: [char; 8] = ['t', 'b', 'n', 'r', 'f', '\\', '"', '\''];

/// Characters allowed after a backslash in a local name (`PN_LOCAL_ESC`).
const PN_LOCAL_ESC_CHARS: [char; 20] = [
    '_', '~', '.', '-', '!', '$', '&', '\'', '(', ')', '*', '+', ',', ';', '=', '/', '?', '#',
    '@', '%',
];

/// Where a failure is reported and what kind it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Failure {
    pub kind: LexErrorKind,
    /// Byte offset in the full source
    pub offset: usize,
}

impl Failure {
    fn new(kind: LexErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Outcome {
    Closed,
    Unterminated,
    /// Relative offset of the offending backslash
    BadEscape(usize),
}

/// Classify a position where no token rule matches.
pub(crate) fn classify(source: &str, offset: usize) -> Failure {
    let rest = source.get(offset..).unwrap_or("");
    let outcome = if rest.starts_with("\"\"\"") || rest.starts_with("'''") {
        run(rest, scan_long)
    } else if rest.starts_with('"') || rest.starts_with('\'') {
        run(rest, scan_short)
    } else if rest.starts_with('\\') {
        return if run(rest, bad_local_escape).unwrap_or(false) {
            Failure::new(LexErrorKind::InvalidEscape, offset)
        } else {
            Failure::new(LexErrorKind::NoMatchAtPosition, offset)
        };
    } else {
        None
    };

    match outcome {
        Some(Outcome::Unterminated) => Failure::new(LexErrorKind::UnterminatedLiteral, offset),
        Some(Outcome::BadEscape(at)) => Failure::new(LexErrorKind::InvalidEscape, offset + at),
        Some(Outcome::Closed) | None => Failure::new(LexErrorKind::NoMatchAtPosition, offset),
    }
}

/// Reject a candidate that only matched part of an opener.
///
/// A triple quote that did not come out as a long string is a long string
/// that never closed (a short-string rule would otherwise take the first two
/// quotes as `""`). A `<` that runs to end of input over IRI characters,
/// and contains a `:`, is an IRI that never closed rather than a
/// less-than operator.
pub(crate) fn reject_partial_opener(source: &str, offset: usize, rule: &str) -> Option<Failure> {
    let rest = source.get(offset..)?;
    if (rest.starts_with("\"\"\"") && rule != "STRING_LITERAL_LONG2")
        || (rest.starts_with("'''") && rule != "STRING_LITERAL_LONG1")
    {
        return match run(rest, scan_long)? {
            Outcome::Unterminated => Some(Failure::new(LexErrorKind::UnterminatedLiteral, offset)),
            Outcome::BadEscape(at) => Some(Failure::new(LexErrorKind::InvalidEscape, offset + at)),
            Outcome::Closed => None,
        };
    }
    if rest.starts_with('<') && rule == "PUNCT" && run(rest, open_iri).unwrap_or(false) {
        return Some(Failure::new(LexErrorKind::UnterminatedLiteral, offset));
    }
    None
}

/// The source line around `offset`, clipped to `radius` characters either
/// side of it.
pub(crate) fn snippet(source: &str, offset: usize, radius: usize) -> String {
    let offset = offset.min(source.len());
    let line_start = source[..offset].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line_end = source[offset..]
        .find(['\n', '\r'])
        .map(|i| offset + i)
        .unwrap_or(source.len());
    let line = &source[line_start..line_end];
    let col = source[line_start..offset].chars().count();

    let from = col.saturating_sub(radius);
    let to = col.saturating_add(radius);
    line.chars().skip(from).take(to - from).collect()
}

fn run<O>(text: &str, mut parser: impl FnMut(&mut Input<'_>) -> ModalResult<O>) -> Option<O> {
    let mut input = LocatingSlice::new(text);
    parser(&mut input).ok()
}

// =============================================================================
// Scanners
// =============================================================================

fn scan_short(input: &mut Input<'_>) -> ModalResult<Outcome> {
    let quote: char = one_of(['"', '\'']).parse_next(input)?;
    loop {
        let _: &str = take_till(0.., |c| c == quote || c == '\\' || c == '\n' || c == '\r')
            .parse_next(input)?;

        if input.is_empty() || input.starts_with('\n') || input.starts_with('\r') {
            return Ok(Outcome::Unterminated);
        }
        if input.starts_with(quote) {
            return Ok(Outcome::Closed);
        }
        if let Some(outcome) = escape(input)? {
            return Ok(outcome);
        }
    }
}

fn scan_long(input: &mut Input<'_>) -> ModalResult<Outcome> {
    let quote: char = one_of(['"', '\'']).parse_next(input)?;
    let delimiter = if quote == '"' { "\"\"\"" } else { "'''" };
    let _: &str = take_while(2..=2, quote).parse_next(input)?;
    loop {
        let _: &str = take_till(0.., |c| c == quote || c == '\\').parse_next(input)?;

        if input.is_empty() {
            return Ok(Outcome::Unterminated);
        }
        if input.starts_with(delimiter) {
            return Ok(Outcome::Closed);
        }
        if input.starts_with(quote) {
            let _: char = any.parse_next(input)?;
            continue;
        }
        if let Some(outcome) = escape(input)? {
            return Ok(outcome);
        }
    }
}

/// Consume a backslash escape; `Some` ends the scan.
fn escape(input: &mut Input<'_>) -> ModalResult<Option<Outcome>> {
    let at = input.current_token_start();
    '\\'.parse_next(input)?;
    if input.is_empty() {
        return Ok(Some(Outcome::Unterminated));
    }
    match opt(one_of(ECHAR_CHARS)).parse_next(input)? {
        Some(_) => Ok(None),
        None => Ok(Some(Outcome::BadEscape(at))),
    }
}

fn bad_local_escape(input: &mut Input<'_>) -> ModalResult<bool> {
    '\\'.parse_next(input)?;
    let next: Option<char> = opt(one_of(PN_LOCAL_ESC_CHARS)).parse_next(input)?;
    Ok(next.is_none())
}

fn open_iri(input: &mut Input<'_>) -> ModalResult<bool> {
    '<'.parse_next(input)?;
    let body: &str = take_while(0.., is_iri_char).parse_next(input)?;
    Ok(input.is_empty() && body.contains(':'))
}

fn is_iri_char(c: char) -> bool {
    !matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\' | '\x00'..='\x20')
}
