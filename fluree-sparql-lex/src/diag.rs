//! Human-readable rendering of lexical errors.
//!
//! Output follows the Rust compiler's layout:
//!
//! ```text
//! error[L002]: unterminated literal
//!   --> query.rq:2:9
//!   |
//! 2 | WHERE { "abc
//!   |         ^^^^ literal starts here
//!   |
//!   = help: close the literal with `"`
//! ```

use crate::error::{LexError, LexErrorKind};
use crate::span::LineIndex;

/// Render one error against the source it came from.
pub fn render_lex_error(err: &LexError, source: &str, filename: Option<&str>) -> String {
    let index = LineIndex::new(source);
    let mut output = String::new();

    output.push_str(&format!("error[{}]: {}\n", err.code(), err.kind));

    // Position from the offset, so errors carried apart from their lexer
    // still point at the right place in `source`
    let pos = index.line_col(source, err.offset);
    let file = filename.unwrap_or("<input>");
    output.push_str(&format!("  --> {}:{}\n", file, pos));

    let line_text = index.line_text(source, pos.line);
    let gutter_width = pos.line.to_string().len();
    let rest_of_line: Vec<char> = line_text
        .chars()
        .skip(pos.col.saturating_sub(1) as usize)
        .collect();

    let (underline_len, label) = match err.kind {
        LexErrorKind::NoMatchAtPosition => (1, "unexpected character"),
        LexErrorKind::UnterminatedLiteral => (rest_of_line.len(), "literal starts here"),
        LexErrorKind::InvalidEscape => (2, "invalid escape"),
    };
    let underline_len = underline_len.min(rest_of_line.len()).max(1);

    output.push_str(&format!("{:>width$} |\n", "", width = gutter_width));
    output.push_str(&format!(
        "{:>width$} | {}\n",
        pos.line,
        line_text,
        width = gutter_width
    ));
    output.push_str(&format!(
        "{:>width$} | {}{} {}\n",
        "",
        " ".repeat(pos.col.saturating_sub(1) as usize),
        "^".repeat(underline_len),
        label,
        width = gutter_width
    ));
    output.push_str(&format!("{:>width$} |\n", "", width = gutter_width));

    if let Some(help) = help(err.kind, &rest_of_line) {
        output.push_str(&format!("{:>width$} = help: {}\n", "", help, width = gutter_width));
    }

    output
}

/// Render several errors, separated by blank lines.
pub fn render_lex_errors(errors: &[LexError], source: &str, filename: Option<&str>) -> String {
    errors
        .iter()
        .map(|e| render_lex_error(e, source, filename))
        .collect::<Vec<_>>()
        .join("\n")
}

fn help(kind: LexErrorKind, at: &[char]) -> Option<String> {
    let first = at.first().copied();
    match kind {
        LexErrorKind::NoMatchAtPosition => {
            let c = first?;
            if c.is_ascii_graphic() {
                Some(format!("no SPARQL token starts with `{c}`"))
            } else {
                Some(format!(
                    "no SPARQL token starts with U+{:04X} ({})",
                    c as u32,
                    c.escape_unicode()
                ))
            }
        }
        LexErrorKind::UnterminatedLiteral => {
            let closer = match first? {
                '<' => ">".to_string(),
                quote if at.len() >= 3 && at[1] == quote && at[2] == quote => {
                    quote.to_string().repeat(3)
                }
                quote => quote.to_string(),
            };
            Some(format!("close the literal with `{closer}`"))
        }
        LexErrorKind::InvalidEscape => Some(
            r#"valid escapes are \t \b \n \r \f \" \' \\ in strings, and \ before one of _~.-!$&'()*+,;=/?#@% in local names"#
                .to_string(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lex::tokenize_all;

    #[test]
    fn test_render_unterminated() {
        let source = "SELECT *\nWHERE { \"abc";
        let err = tokenize_all(source).unwrap_err();
        let rendered = render_lex_error(&err, source, Some("query.rq"));

        assert!(rendered.starts_with("error[L002]: unterminated literal\n"));
        assert!(rendered.contains("  --> query.rq:2:9\n"));
        assert!(rendered.contains("2 | WHERE { \"abc\n"));
        assert!(rendered.contains(&format!("\n  |{}^^^^ literal starts here\n", " ".repeat(9))));
        assert!(rendered.contains("= help: close the literal with `\"`"));
    }

    #[test]
    fn test_render_position_from_offset() {
        let source = "?a\n  ?b é ~";
        let mut err = tokenize_all(source).unwrap_err();
        assert_eq!((err.line, err.column), (2, 8));
        err.line = 1;
        err.column = 1;
        let rendered = render_lex_error(&err, source, None);
        assert!(rendered.contains("<input>:2:8"));
        assert!(rendered.contains("2 |   ?b é ~\n"));
        assert!(rendered.contains(&format!("  |{}^ unexpected character", " ".repeat(8))));
    }

    #[test]
    fn test_render_no_match_and_escape() {
        let source = "?x ~";
        let err = tokenize_all(source).unwrap_err();
        let rendered = render_lex_error(&err, source, None);
        assert!(rendered.contains("<input>:1:4"));
        assert!(rendered.contains("^ unexpected character"));
        assert!(rendered.contains("no SPARQL token starts with `~`"));

        let source = r#""a\qb""#;
        let err = tokenize_all(source).unwrap_err();
        let rendered = render_lex_error(&err, source, None);
        assert!(rendered.contains("error[L003]"));
        assert!(rendered.contains("  ^^ invalid escape"));
    }

    #[test]
    fn test_render_many() {
        let source = "~ `";
        let opts = crate::LexOptions::default().with_stop_on_first_error(false);
        let errors: Vec<LexError> = crate::tokenize(source, opts).filter_map(|r| r.err()).collect();
        assert_eq!(errors.len(), 2);
        let rendered = render_lex_errors(&errors, source, None);
        assert_eq!(rendered.matches("error[L001]").count(), 2);
    }
}
