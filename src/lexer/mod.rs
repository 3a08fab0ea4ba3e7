//! Lexer for the Elm programming language.
//!
//! Lexing runs in two passes:
//! - the **raw** pass scans characters into primitive tokens (identifiers,
//!   keywords, literals, operators, comments, trivia);
//! - the **layout** pass wraps the raw stream and applies Elm's offside rule,
//!   synthesizing virtual end-of-declaration / end-of-section tokens so block
//!   structure becomes explicit for an indentation-agnostic parser.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (`TokenKind`, `Token`, `Span`)
//! - `keywords` - Reserved-word registry (`KeywordId`)
//! - `raw` - Character-level tokenizer
//! - `layout` - Offside-rule transducer

pub mod keywords;
mod layout;
mod raw;
pub mod tokens;

pub use layout::{LayoutLexer, TAB_STOP};
pub use raw::RawLexer;
pub use tokens::{Span, Token, TokenKind, keyword_id};

/// Pull-based token source.
///
/// Both lexer passes expose this interface: the source is always parked on a
/// current token spanning `[current_start, current_end)`, and `advance` moves
/// to the next one. [`TokenKind::Eof`] is the explicit end-of-stream sentinel;
/// advancing past it must leave the source parked on `Eof`.
pub trait TokenSource {
    fn advance(&mut self);
    fn current_kind(&self) -> TokenKind;
    fn current_start(&self) -> usize;
    fn current_end(&self) -> usize;

    /// The current token as a value.
    fn current(&self) -> Token {
        Token::new(
            self.current_kind(),
            Span::new(self.current_start(), self.current_end()),
        )
    }
}

/// Run the full layout pass over `source` and collect the stream.
///
/// The stream ends with an `Eof` token; it never fails, malformed indentation
/// included (diagnosing that is the parser's job).
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Vec<Token> {
    collect(LayoutLexer::new(RawLexer::new(source)))
}

/// Tokenize `source` without layout processing.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex_raw(source: &str) -> Vec<Token> {
    collect(RawLexer::new(source))
}

fn collect(mut source: impl TokenSource) -> Vec<Token> {
    let mut tokens = Vec::new();
    loop {
        let token = source.current();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return tokens;
        }
        source.advance();
    }
}

/// Render a token stream one line per token, `kind start..end` plus the
/// source slice for content-bearing tokens. Shared by the `elm-lex` binary
/// and the golden tests.
pub fn render_tokens(tokens: &[Token], source: &str) -> String {
    let mut out = String::new();
    for token in tokens {
        let Span { start, end } = token.span;
        let name = token.kind.name();
        if token.kind.is_trivia() || token.kind.is_virtual() || token.kind == TokenKind::Eof {
            out.push_str(&format!("{name} {start}..{end}\n"));
        } else {
            out.push_str(&format!("{name} {start}..{end} {:?}\n", &source[start..end]));
        }
    }
    out
}
