//! Typed values decoded from token lexemes.
//!
//! Tokens store their raw text; decoding strips delimiters and sigils,
//! applies escapes and parses numbers. It never fails for a lexeme the
//! corresponding rule accepted, except that a `DOUBLE` the float parser
//! rejects yields `None`.

use std::sync::Arc;

use serde::Serialize;
use winnow::combinator::{alt, preceded, repeat};
use winnow::error::ContextError;
use winnow::token::{any, take_till};
use winnow::{ModalResult, Parser};

use crate::lex::{canonical_keyword, TokenKind};

/// The value carried by a token.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum TokenValue {
    /// IRI text between the angle brackets
    Iri(Arc<str>),
    /// `prefix:local`, with local-name escapes removed
    PrefixedName { prefix: Arc<str>, local: Arc<str> },
    /// Variable name without `?`/`$`
    Var(Arc<str>),
    /// Language tag without `@`
    LangTag(Arc<str>),
    /// Blank node label without `_:`
    BlankNode(Arc<str>),
    /// String content with escapes applied
    String(Arc<str>),
    Integer(i64),
    /// Integer lexeme that doesn't fit in an `i64`
    BigInteger(Arc<str>),
    /// Decimal lexeme, kept as text to avoid rounding
    Decimal(Arc<str>),
    Double(f64),
    Boolean(bool),
    /// Canonical (upper-case) keyword, or `a`
    Keyword(&'static str),
    Identifier(Arc<str>),
}

/// Decode `lexeme` as a token of `kind`.
///
/// Punctuation, `NIL`, `ANON`, whitespace and comments carry no value.
pub fn decode(kind: TokenKind, lexeme: &str) -> Option<TokenValue> {
    let value = match kind {
        TokenKind::IriRef => TokenValue::Iri(Arc::from(strip(lexeme, 1, 1)?)),
        TokenKind::PnameLn | TokenKind::PnameNs => {
            let (prefix, local) = lexeme.split_once(':')?;
            TokenValue::PrefixedName {
                prefix: Arc::from(prefix),
                local: Arc::from(unescape_local(local)?),
            }
        }
        TokenKind::Var1 | TokenKind::Var2 | TokenKind::LangTag => {
            let body = strip(lexeme, 1, 0)?;
            if kind == TokenKind::LangTag {
                TokenValue::LangTag(Arc::from(body))
            } else {
                TokenValue::Var(Arc::from(body))
            }
        }
        TokenKind::BlankNodeLabel => TokenValue::BlankNode(Arc::from(lexeme.strip_prefix("_:")?)),
        TokenKind::StringLiteral1 | TokenKind::StringLiteral2 => {
            TokenValue::String(Arc::from(unescape_string(strip(lexeme, 1, 1)?)?))
        }
        TokenKind::StringLiteralLong1 | TokenKind::StringLiteralLong2 => {
            TokenValue::String(Arc::from(unescape_string(strip(lexeme, 3, 3)?)?))
        }
        TokenKind::Integer | TokenKind::IntegerPositive | TokenKind::IntegerNegative => {
            match lexeme.parse::<i64>() {
                Ok(n) => TokenValue::Integer(n),
                Err(_) => TokenValue::BigInteger(Arc::from(lexeme)),
            }
        }
        TokenKind::Decimal | TokenKind::DecimalPositive | TokenKind::DecimalNegative => {
            TokenValue::Decimal(Arc::from(lexeme))
        }
        TokenKind::Double | TokenKind::DoublePositive | TokenKind::DoubleNegative => {
            TokenValue::Double(lexeme.parse::<f64>().ok()?)
        }
        TokenKind::BooleanLiteral => TokenValue::Boolean(lexeme == "true"),
        TokenKind::Keyword => TokenValue::Keyword(canonical_keyword(lexeme)?),
        TokenKind::Identifier => TokenValue::Identifier(Arc::from(lexeme)),
        TokenKind::Nil
        | TokenKind::Anon
        | TokenKind::Punctuation(_)
        | TokenKind::Whitespace
        | TokenKind::Comment => return None,
    };
    Some(value)
}

/// Drop `head` leading and `tail` trailing bytes (ASCII delimiters).
fn strip(lexeme: &str, head: usize, tail: usize) -> Option<&str> {
    lexeme.get(head..lexeme.len().checked_sub(tail)?)
}

/// Apply `ECHAR` escapes.
pub fn unescape_string(body: &str) -> Option<String> {
    let mut input = body;
    string_content.parse_next(&mut input).ok()
}

/// Remove `PN_LOCAL_ESC` backslashes; percent escapes stay as written.
pub fn unescape_local(local: &str) -> Option<String> {
    let mut input = local;
    local_content.parse_next(&mut input).ok()
}

fn string_content(input: &mut &str) -> ModalResult<String> {
    let mut result = String::new();

    loop {
        let chunk: &str = take_till(0.., '\\').parse_next(input)?;
        result.push_str(chunk);

        if input.is_empty() {
            break;
        }

        '\\'.parse_next(input)?;
        let escaped = escape_char(input)?;
        result.push(escaped);
    }

    Ok(result)
}

fn escape_char(input: &mut &str) -> ModalResult<char> {
    let c: char = any.parse_next(input)?;
    match c {
        't' => Ok('\t'),
        'b' => Ok('\x08'),
        'n' => Ok('\n'),
        'r' => Ok('\r'),
        'f' => Ok('\x0C'),
        '"' => Ok('"'),
        '\'' => Ok('\''),
        '\\' => Ok('\\'),
        _ => Err(winnow::error::ErrMode::Backtrack(ContextError::new())),
    }
}

enum Piece<'a> {
    Text(&'a str),
    Escaped(char),
}

fn local_content(input: &mut &str) -> ModalResult<String> {
    repeat(
        0..,
        alt((
            preceded('\\', any).map(Piece::Escaped),
            take_till(1.., '\\').map(Piece::Text),
        )),
    )
    .fold(String::new, |mut acc, piece| {
        match piece {
            Piece::Text(text) => acc.push_str(text),
            Piece::Escaped(c) => acc.push(c),
        }
        acc
    })
    .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(kind: TokenKind, lexeme: &str) -> TokenValue {
        decode(kind, lexeme).unwrap()
    }

    #[test]
    fn test_names() {
        assert_eq!(
            value(TokenKind::IriRef, "<http://ex.org/a>"),
            TokenValue::Iri(Arc::from("http://ex.org/a"))
        );
        assert_eq!(value(TokenKind::IriRef, "<>"), TokenValue::Iri(Arc::from("")));
        assert_eq!(
            value(TokenKind::PnameLn, r"ex:a\.b%20c"),
            TokenValue::PrefixedName {
                prefix: Arc::from("ex"),
                local: Arc::from("a.b%20c"),
            }
        );
        assert_eq!(
            value(TokenKind::PnameNs, ":"),
            TokenValue::PrefixedName {
                prefix: Arc::from(""),
                local: Arc::from(""),
            }
        );
        assert_eq!(value(TokenKind::Var2, "$v"), TokenValue::Var(Arc::from("v")));
        assert_eq!(value(TokenKind::LangTag, "@en-GB"), TokenValue::LangTag(Arc::from("en-GB")));
        assert_eq!(
            value(TokenKind::BlankNodeLabel, "_:b0"),
            TokenValue::BlankNode(Arc::from("b0"))
        );
    }

    #[test]
    fn test_strings() {
        assert_eq!(
            value(TokenKind::StringLiteral2, r#""a\tb\"c""#),
            TokenValue::String(Arc::from("a\tb\"c"))
        );
        assert_eq!(
            value(TokenKind::StringLiteralLong1, "'''x\n''y'''"),
            TokenValue::String(Arc::from("x\n''y"))
        );
        assert_eq!(value(TokenKind::StringLiteral1, "''"), TokenValue::String(Arc::from("")));
        assert_eq!(unescape_string(r"bad\q"), None);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(value(TokenKind::IntegerPositive, "+42"), TokenValue::Integer(42));
        assert_eq!(value(TokenKind::IntegerNegative, "-7"), TokenValue::Integer(-7));
        assert_eq!(
            value(TokenKind::Integer, "99999999999999999999"),
            TokenValue::BigInteger(Arc::from("99999999999999999999"))
        );
        assert_eq!(value(TokenKind::Decimal, ".50"), TokenValue::Decimal(Arc::from(".50")));
        assert_eq!(value(TokenKind::Double, "1.0e10"), TokenValue::Double(1.0e10));
        assert_eq!(value(TokenKind::DoubleNegative, "-.5E-3"), TokenValue::Double(-0.0005));
    }

    #[test]
    fn test_words_and_valueless_tokens() {
        assert_eq!(value(TokenKind::BooleanLiteral, "false"), TokenValue::Boolean(false));
        assert_eq!(value(TokenKind::Keyword, "select"), TokenValue::Keyword("SELECT"));
        assert_eq!(value(TokenKind::Keyword, "a"), TokenValue::Keyword("a"));
        assert_eq!(decode(TokenKind::Nil, "()"), None);
        assert_eq!(decode(TokenKind::Comment, "# x"), None);
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_string(&TokenValue::Integer(3)).unwrap();
        assert_eq!(json, r#"{"type":"integer","value":3}"#);
    }
}
