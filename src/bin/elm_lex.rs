//! Token-dump CLI: run the Elm lexer over a file and print the stream.
//!
//! Debugging aid for the layout pass. `elm-lex Main.elm` prints the layout
//! token stream, one token per line; `elm-lex --raw Main.elm` prints the
//! primitive stream without layout processing.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use elm_syntax::diagnostics::ToolError;
use elm_syntax::lexer;

#[derive(Parser, Debug)]
#[command(name = "elm-lex")]
#[command(version)]
#[command(about = "Dump the token stream of an Elm source file", long_about = None)]
struct Cli {
    /// Elm source file to tokenize
    file: PathBuf,

    /// Print the primitive token stream, without layout processing
    #[arg(long)]
    raw: bool,
}

fn main() -> miette::Result<()> {
    // Initialize structured logging with env-based filter, defaulting to info
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    let cli = Cli::parse();
    let source = fs::read_to_string(&cli.file).map_err(|source| ToolError::ReadSource {
        path: cli.file.clone(),
        source,
    })?;

    let tokens = if cli.raw {
        lexer::lex_raw(&source)
    } else {
        lexer::lex(&source)
    };
    print!("{}", lexer::render_tokens(&tokens, &source));
    Ok(())
}
