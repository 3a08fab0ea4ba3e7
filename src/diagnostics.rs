//! Error surface for the tooling entry points.
//!
//! Lexing itself never fails: any buffer, malformed indentation included,
//! produces a well-defined token stream, and diagnosing nonsense layout
//! belongs to the parser. The errors here cover the surrounding tooling,
//! such as the `elm-lex` binary loading a source file.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors produced by tooling built on the lexer.
#[derive(Debug, Error, Diagnostic)]
pub enum ToolError {
    /// The source file could not be loaded.
    #[error("failed to read `{}`", .path.display())]
    #[diagnostic(
        code(elm_syntax::read_source),
        help("check that the path exists and is readable")
    )]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
