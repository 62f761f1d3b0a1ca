use colored::Colorize;
use std::fmt;
use std::process;

/// Exit codes for the CLI.
pub const EXIT_ERROR: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

/// Unified error type for CLI operations.
pub enum CliError {
    /// Rule table or option errors from the library.
    Lex(fluree_sparql_lex::Error),
    /// Bad file path, unreadable input, unparseable options.
    Input(String),
    /// Argument / usage errors.
    Usage(String),
    /// The input had lexical errors; they have already been rendered.
    LexicalErrors(usize),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Lex(e) => write!(f, "{} {e}", "error:".red().bold()),
            CliError::Input(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::Usage(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::LexicalErrors(n) => write!(
                f,
                "{} input has {n} lexical error{}",
                "error:".red().bold(),
                if *n == 1 { "" } else { "s" }
            ),
        }
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<fluree_sparql_lex::Error> for CliError {
    fn from(e: fluree_sparql_lex::Error) -> Self {
        match e {
            fluree_sparql_lex::Error::UnknownRule(name) => CliError::Usage(format!(
                "unknown terminal rule `{name}`\n  {} run 'sparql-lex rules' to list rule names",
                "help:".cyan().bold(),
            )),
            other => CliError::Lex(other),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Input(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Input(format!("JSON parse error: {e}"))
    }
}

/// Print error and exit with the appropriate code.
pub fn exit_with_error(err: CliError) -> ! {
    eprintln!("{err}");
    let code = match &err {
        CliError::Usage(_) => EXIT_USAGE,
        _ => EXIT_ERROR,
    };
    process::exit(code)
}

pub type CliResult<T> = std::result::Result<T, CliError>;
