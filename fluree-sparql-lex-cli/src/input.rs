use crate::error::{CliError, CliResult};
use fluree_sparql_lex::LexOptions;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

/// Where the query text comes from.
pub enum InputSource {
    /// From a file on disk.
    File(PathBuf),
    /// From the `-e` inline expression.
    Inline(String),
    /// From stdin (piped, or `-`).
    Stdin,
}

impl InputSource {
    /// Name used in diagnostics.
    pub fn display_name(&self) -> String {
        match self {
            InputSource::File(path) => path.display().to_string(),
            InputSource::Inline(_) => "<expr>".to_string(),
            InputSource::Stdin => "<stdin>".to_string(),
        }
    }
}

/// Resolve the input source with priority: `-e` > file > stdin.
pub fn resolve_input(expr: Option<&str>, file: Option<&Path>) -> CliResult<InputSource> {
    if let Some(e) = expr {
        return Ok(InputSource::Inline(e.to_string()));
    }
    match file {
        Some(path) if path == Path::new("-") => return Ok(InputSource::Stdin),
        Some(path) => return Ok(InputSource::File(path.to_path_buf())),
        None => {}
    }
    if !io::stdin().is_terminal() {
        return Ok(InputSource::Stdin);
    }
    Err(CliError::Input(format!(
        "no input provided\n  {} pass a file, use -e for inline text, or pipe via stdin",
        colored::Colorize::bold(colored::Colorize::cyan("help:"))
    )))
}

/// Read content from the resolved input source.
pub fn read_input(source: &InputSource) -> CliResult<String> {
    match source {
        InputSource::File(path) => std::fs::read_to_string(path)
            .map_err(|e| CliError::Input(format!("failed to read {}: {e}", path.display()))),
        InputSource::Inline(s) => Ok(s.clone()),
        InputSource::Stdin => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Load lexer options from a JSON file, or defaults when none is given.
pub fn load_options(path: Option<&Path>) -> CliResult<LexOptions> {
    let Some(path) = path else {
        return Ok(LexOptions::default());
    };
    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::Input(format!("failed to read {}: {e}", path.display())))?;
    let options: LexOptions = serde_json::from_str(&text)?;
    tracing::debug!(path = %path.display(), ?options, "loaded lexer options");
    Ok(options)
}
