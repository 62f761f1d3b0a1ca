//! SPARQL lexical analysis.
//!
//! The lexer is a thin driver over the rule table: at each offset it asks
//! the [`Disambiguator`](crate::disambiguate::Disambiguator) for the winning
//! token rule, cuts the lexeme, and advances a line/column cursor. There is
//! no hand-written scanner per token type; the only hand-written scanning
//! is in error classification, where a failed match is re-read to find out
//! whether a literal was left open or an escape was bad.
//!
//! ## Usage
//!
//! ```
//! use fluree_sparql_lex::lex::{tokenize, TokenKind};
//! use fluree_sparql_lex::LexOptions;
//!
//! let tokens: Vec<_> = tokenize("SELECT ?x WHERE { ?x a ex:Person }", LexOptions::default())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//! assert_eq!(tokens[6].rule, "PNAME_LN");
//! ```

mod classify;
mod cursor;
mod keywords;
mod lexer;
mod token;

pub use cursor::Cursor;
pub use keywords::{canonical_keyword, is_keyword};
pub use lexer::{tokenize, tokenize_all, Lexer};
pub use token::{Punct, Token, TokenKind};
