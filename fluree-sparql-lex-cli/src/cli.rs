use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sparql-lex", about = "SPARQL tokenizer and terminal checker", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output (honours RUST_LOG)
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a query into tokens
    Tokenize {
        /// Query file; `-` or omitted reads stdin
        file: Option<PathBuf>,

        /// Inline query text
        #[arg(short = 'e', long = "expr", conflicts_with = "file")]
        expr: Option<String>,

        /// Emit whitespace and comment tokens
        #[arg(long)]
        emit_whitespace: bool,

        /// Report every error instead of stopping at the first
        #[arg(long)]
        keep_going: bool,

        /// Treat `#` as an ordinary character instead of a comment
        #[arg(long)]
        no_comments: bool,

        /// JSON file of lexer options (camelCase keys); flags override it
        #[arg(long, value_name = "JSON")]
        options: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = TokenFormat::Text)]
        format: TokenFormat,
    },

    /// Test whether a whole string matches a terminal rule
    Check {
        /// Rule name, e.g. IRIREF or PNAME_LN
        rule: String,

        /// Text to test
        text: String,
    },

    /// List terminal rule names
    Rules,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TokenFormat {
    /// One token per line: position, rule, lexeme
    Text,
    /// JSON array of token objects
    Json,
    /// Bordered table
    Table,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_tokenize_flags() {
        let cli = Cli::parse_from([
            "sparql-lex",
            "tokenize",
            "query.rq",
            "--keep-going",
            "--format",
            "json",
        ]);
        match cli.command {
            Commands::Tokenize {
                file,
                keep_going,
                emit_whitespace,
                format,
                ..
            } => {
                assert_eq!(file, Some(PathBuf::from("query.rq")));
                assert!(keep_going);
                assert!(!emit_whitespace);
                assert_eq!(format, TokenFormat::Json);
            }
            _ => panic!("expected tokenize"),
        }
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["sparql-lex", "-v", "-q", "rules"]).is_err());
    }
}
