//! Token types.
//!
//! Tokens keep the exact lexeme they were cut from so a token stream can be
//! turned back into its source text; typed values are decoded on demand
//! with [`Token::value`].

use std::sync::Arc;

use serde::Serialize;

use super::keywords::is_keyword;
use crate::decode::{self, TokenValue};
use crate::span::{LineCol, SourceSpan};

/// A token with its source position.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Name of the terminal rule that matched
    pub rule: &'static str,
    /// The matched text, unnormalised
    pub lexeme: Arc<str>,
    pub span: SourceSpan,
    /// Position of the first character
    pub start: LineCol,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        rule: &'static str,
        lexeme: &str,
        span: SourceSpan,
        start: LineCol,
    ) -> Self {
        Self {
            kind,
            rule,
            lexeme: Arc::from(lexeme),
            span,
            start,
        }
    }

    pub fn line(&self) -> u32 {
        self.start.line
    }

    pub fn column(&self) -> u32 {
        self.start.col
    }

    /// Whitespace and comments.
    pub fn is_trivia(&self) -> bool {
        matches!(self.kind, TokenKind::Whitespace | TokenKind::Comment)
    }

    /// Decode the lexeme into a typed value (`None` for punctuation and
    /// trivia).
    pub fn value(&self) -> Option<TokenValue> {
        decode::decode(self.kind, &self.lexeme)
    }
}

/// Token categories.
///
/// Most variants correspond one-to-one with a terminal rule; `Keyword` and
/// `Identifier` both come from the bare-word rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // =========================================================================
    // IRIs and names
    // =========================================================================
    /// `<http://example.org/>`
    IriRef,
    /// `prefix:local`
    PnameLn,
    /// `prefix:`
    PnameNs,
    /// `_:label`
    BlankNodeLabel,
    /// `?name`
    Var1,
    /// `$name`
    Var2,
    /// `@en-GB`
    LangTag,

    // =========================================================================
    // Numbers
    // =========================================================================
    Integer,
    Decimal,
    Double,
    IntegerPositive,
    DecimalPositive,
    DoublePositive,
    IntegerNegative,
    DecimalNegative,
    DoubleNegative,

    // =========================================================================
    // Strings
    // =========================================================================
    /// `'...'`
    StringLiteral1,
    /// `"..."`
    StringLiteral2,
    /// `'''...'''`
    StringLiteralLong1,
    /// `"""..."""`
    StringLiteralLong2,

    // =========================================================================
    // Other literals
    // =========================================================================
    /// `()` with optional interior whitespace
    Nil,
    /// `[]` with optional interior whitespace
    Anon,
    /// `true` / `false`
    BooleanLiteral,

    // =========================================================================
    // Bare words, punctuation, trivia
    // =========================================================================
    Keyword,
    Identifier,
    Punctuation(Punct),
    Whitespace,
    /// `#` to end of line
    Comment,
}

impl TokenKind {
    /// Map a matched token rule (and its lexeme) to a kind.
    pub fn from_rule(rule: &str, lexeme: &str) -> Option<Self> {
        let kind = match rule {
            "IRIREF" => Self::IriRef,
            "PNAME_LN" => Self::PnameLn,
            "PNAME_NS" => Self::PnameNs,
            "BLANK_NODE_LABEL" => Self::BlankNodeLabel,
            "VAR1" => Self::Var1,
            "VAR2" => Self::Var2,
            "LANGTAG" => Self::LangTag,
            "INTEGER" => Self::Integer,
            "DECIMAL" => Self::Decimal,
            "DOUBLE" => Self::Double,
            "INTEGER_POSITIVE" => Self::IntegerPositive,
            "DECIMAL_POSITIVE" => Self::DecimalPositive,
            "DOUBLE_POSITIVE" => Self::DoublePositive,
            "INTEGER_NEGATIVE" => Self::IntegerNegative,
            "DECIMAL_NEGATIVE" => Self::DecimalNegative,
            "DOUBLE_NEGATIVE" => Self::DoubleNegative,
            "STRING_LITERAL1" => Self::StringLiteral1,
            "STRING_LITERAL2" => Self::StringLiteral2,
            "STRING_LITERAL_LONG1" => Self::StringLiteralLong1,
            "STRING_LITERAL_LONG2" => Self::StringLiteralLong2,
            "NIL" => Self::Nil,
            "ANON" => Self::Anon,
            "BooleanLiteral" => Self::BooleanLiteral,
            "IDENT" if is_keyword(lexeme) => Self::Keyword,
            "IDENT" => Self::Identifier,
            "PUNCT" => Self::Punctuation(Punct::from_lexeme(lexeme)?),
            "WHITESPACE" => Self::Whitespace,
            "COMMENT" => Self::Comment,
            _ => return None,
        };
        Some(kind)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Integer
                | Self::Decimal
                | Self::Double
                | Self::IntegerPositive
                | Self::DecimalPositive
                | Self::DoublePositive
                | Self::IntegerNegative
                | Self::DecimalNegative
                | Self::DoubleNegative
        )
    }

    pub fn is_string(&self) -> bool {
        matches!(
            self,
            Self::StringLiteral1
                | Self::StringLiteral2
                | Self::StringLiteralLong1
                | Self::StringLiteralLong2
        )
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Punctuation(p) => write!(f, "'{}'", p),
            Self::Keyword => f.write_str("keyword"),
            Self::Identifier => f.write_str("identifier"),
            Self::Whitespace => f.write_str("whitespace"),
            Self::Comment => f.write_str("comment"),
            other => write!(f, "{:?}", other),
        }
    }
}

/// Operators and delimiters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Punct {
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `.`
    Dot,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `^^`
    DoubleCaret,
    /// `||`
    Or,
    /// `&&`
    And,
    /// `=`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    Le,
    /// `>=`
    Ge,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `!`
    Bang,
    /// `?`
    Question,
    /// `|`
    Pipe,
    /// `^`
    Caret,
}

impl Punct {
    pub fn from_lexeme(s: &str) -> Option<Self> {
        let p = match s {
            "{" => Self::LBrace,
            "}" => Self::RBrace,
            "(" => Self::LParen,
            ")" => Self::RParen,
            "[" => Self::LBracket,
            "]" => Self::RBracket,
            "." => Self::Dot,
            "," => Self::Comma,
            ";" => Self::Semicolon,
            "^^" => Self::DoubleCaret,
            "||" => Self::Or,
            "&&" => Self::And,
            "=" => Self::Eq,
            "!=" => Self::Ne,
            "<" => Self::Lt,
            ">" => Self::Gt,
            "<=" => Self::Le,
            ">=" => Self::Ge,
            "+" => Self::Plus,
            "-" => Self::Minus,
            "*" => Self::Star,
            "/" => Self::Slash,
            "!" => Self::Bang,
            "?" => Self::Question,
            "|" => Self::Pipe,
            "^" => Self::Caret,
            _ => return None,
        };
        Some(p)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Dot => ".",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::DoubleCaret => "^^",
            Self::Or => "||",
            Self::And => "&&",
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Le => "<=",
            Self::Ge => ">=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Bang => "!",
            Self::Question => "?",
            Self::Pipe => "|",
            Self::Caret => "^",
        }
    }
}

impl std::fmt::Display for Punct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_rule() {
        assert_eq!(TokenKind::from_rule("PNAME_LN", "ex:a"), Some(TokenKind::PnameLn));
        assert_eq!(TokenKind::from_rule("IDENT", "Select"), Some(TokenKind::Keyword));
        assert_eq!(TokenKind::from_rule("IDENT", "trueX"), Some(TokenKind::Identifier));
        assert_eq!(
            TokenKind::from_rule("PUNCT", "<="),
            Some(TokenKind::Punctuation(Punct::Le))
        );
        assert_eq!(TokenKind::from_rule("PN_CHARS", "a"), None);
    }

    #[test]
    fn test_punct_round_trip() {
        for s in ["{", "^^", "||", "!=", ">=", "^"] {
            assert_eq!(Punct::from_lexeme(s).unwrap().as_str(), s);
        }
        assert_eq!(Punct::from_lexeme("<<"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(TokenKind::Punctuation(Punct::LBrace).to_string(), "'{'");
        assert_eq!(TokenKind::PnameLn.to_string(), "PnameLn");
        assert_eq!(TokenKind::Keyword.to_string(), "keyword");
    }
}
