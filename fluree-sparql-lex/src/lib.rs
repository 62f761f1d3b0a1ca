//! # Fluree SPARQL Lexer
//!
//! The SPARQL 1.1 terminal productions as a table of named, composable
//! regular expressions, and a tokenizer built on them:
//!
//! - **Rule table** ([`rules`]): terminal definitions that reference each
//!   other by name, resolved into a DAG and compiled once per process.
//! - **Matcher** ([`matcher`]): anchored matching of one rule at an offset.
//! - **Disambiguator** ([`disambiguate`]): longest match, then a fixed
//!   priority order, then the boolean-literal lookahead.
//! - **Lexer** ([`lex`]): a lazy token stream with line/column tracking and
//!   classified errors.
//!
//! ## Quick Start
//!
//! ```
//! use fluree_sparql_lex::{check, tokenize_all, TokenKind};
//!
//! assert!(check("<http://example.org/>", "IRIREF").unwrap());
//! assert!(!check("", "IRIREF").unwrap());
//!
//! let tokens = tokenize_all("SELECT ?x WHERE { ?x ex:name \"Alice\"@en }").unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//! assert_eq!(tokens[6].rule, "STRING_LITERAL2");
//! ```

pub mod decode;
pub mod diag;
pub mod disambiguate;
pub mod error;
pub mod lex;
pub mod matcher;
pub mod options;
pub mod rules;
pub mod span;

// Re-exports
pub use decode::TokenValue;
pub use diag::{render_lex_error, render_lex_errors};
pub use disambiguate::{Candidate, Disambiguator};
pub use error::{Error, LexError, LexErrorKind, Result};
pub use lex::{tokenize, tokenize_all, Lexer, Punct, Token, TokenKind};
pub use matcher::Matcher;
pub use options::LexOptions;
pub use rules::{RuleDef, RuleTable, TerminalRule};
pub use span::{LineCol, LineIndex, SourceSpan};

/// Whether the whole of `text` matches the named terminal rule.
///
/// Fails with [`Error::UnknownRule`] if `rule` isn't in the table.
pub fn check(text: &str, rule: &str) -> Result<bool> {
    RuleTable::global().check(text, rule)
}

/// Every rule name: token rules in priority order, then the rest.
pub fn list_rules() -> Vec<&'static str> {
    RuleTable::global().list_rules()
}
