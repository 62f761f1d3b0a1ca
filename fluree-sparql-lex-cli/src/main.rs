mod cli;
mod commands;
mod error;
mod input;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use error::exit_with_error;

fn init_tracing(cli: &Cli) {
    // --quiet forces logging off; --verbose honours RUST_LOG (default
    // "debug" for the lexer crates); otherwise logging stays off so token
    // output isn't interleaved with log lines.
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "fluree_sparql_lex=debug,sparql_lex=debug".into())
    } else {
        tracing_subscriber::EnvFilter::new("off")
    };

    let ansi = !(cli.no_color || std::env::var_os("NO_COLOR").is_some());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    // Errors go to stderr, so piping stdout doesn't disable color
    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    init_tracing(&cli);

    if let Err(e) = run(cli) {
        exit_with_error(e);
    }
}

fn run(cli: Cli) -> error::CliResult<()> {
    match cli.command {
        Commands::Tokenize {
            file,
            expr,
            emit_whitespace,
            keep_going,
            no_comments,
            options,
            format,
        } => {
            let source = input::resolve_input(expr.as_deref(), file.as_deref())?;
            let opts = commands::tokenize::TokenizeOpts {
                options_file: options.as_deref(),
                emit_whitespace,
                keep_going,
                no_comments,
                format,
            };
            commands::tokenize::run(&source, &opts, cli.quiet)
        }

        Commands::Check { rule, text } => commands::check::run(&rule, &text),

        Commands::Rules => commands::rules::run(),
    }
}
