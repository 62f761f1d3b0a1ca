use crate::cli::TokenFormat;
use crate::error::{CliError, CliResult};
use crate::input::{self, InputSource};
use crate::output;
use fluree_sparql_lex::{diag, tokenize, LexError, LexOptions, Token};
use std::path::Path;

/// Flag overrides applied on top of `--options`.
pub struct TokenizeOpts<'a> {
    pub options_file: Option<&'a Path>,
    pub emit_whitespace: bool,
    pub keep_going: bool,
    pub no_comments: bool,
    pub format: TokenFormat,
}

impl TokenizeOpts<'_> {
    fn lex_options(&self) -> CliResult<LexOptions> {
        let mut options = input::load_options(self.options_file)?;
        if self.emit_whitespace {
            options.emit_whitespace = true;
        }
        if self.keep_going {
            options.stop_on_first_error = false;
        }
        if self.no_comments {
            options.comments = false;
        }
        Ok(options)
    }
}

pub fn run(source: &InputSource, opts: &TokenizeOpts<'_>, quiet: bool) -> CliResult<()> {
    let text = input::read_input(source)?;
    let options = opts.lex_options()?;

    let mut tokens: Vec<Token> = Vec::new();
    let mut errors: Vec<LexError> = Vec::new();
    for item in tokenize(&text, options) {
        match item {
            Ok(token) => tokens.push(token),
            Err(err) => errors.push(err),
        }
    }
    tracing::debug!(tokens = tokens.len(), errors = errors.len(), "tokenized input");

    print!("{}", output::format_tokens(&tokens, opts.format)?);
    if opts.format != TokenFormat::Text {
        println!();
    }

    if errors.is_empty() {
        return Ok(());
    }
    if !quiet {
        let name = source.display_name();
        eprint!("{}", diag::render_lex_errors(&errors, &text, Some(&name)));
    }
    Err(CliError::LexicalErrors(errors.len()))
}
