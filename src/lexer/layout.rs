//! Layout-sensitive lexing: Elm's offside rule made explicit.
//!
//! Elm implies block structure by column position instead of braces: the first
//! token after `let` or `of` fixes the *offside column* of the new section,
//! each later line starting exactly at that column begins a sibling
//! declaration, and a line starting left of it closes the section.
//! [`LayoutLexer`] wraps a primitive [`TokenSource`] and rewrites its stream
//! so those boundaries become tokens an indentation-agnostic parser can
//! consume: zero-width [`TokenKind::VirtualEndDecl`] between siblings and
//! [`TokenKind::VirtualEndSection`] where a section closes (on dedent, on a
//! same-line `in`, and once per still-open context at the end of the buffer).
//!
//! The transducer is a whole-buffer pass: it must start at offset 0 and is
//! re-run in full after every edit. Each `advance` pulls at most one primitive
//! token and produces exactly one output token; when a layout boundary fires,
//! the real token that triggered it is carried in [`State::PendingReturn`] and
//! re-examined on the next call, which is how a multi-level dedent unwinds one
//! context per call.

use crate::lexer::TokenSource;
use crate::lexer::keywords::KeywordId;
use crate::lexer::tokens::{Span, Token, TokenKind};

/// Tab stop used when expanding tabs at the beginning of a line.
pub const TAB_STOP: u32 = 8;

/// Transducer state. The buffered token lives only in `PendingReturn`, so
/// "buffered token while in steady state" cannot be represented.
enum State {
    /// Steady state: offside checks apply to the first solid token of a line.
    Normal,
    /// A section-opening keyword was just emitted; the next solid token's
    /// column becomes the new indentation context.
    AwaitingSectionStart,
    /// A virtual token was just emitted; the carried token is returned (and
    /// re-checked against the stack) on the next call.
    PendingReturn(Token),
}

/// Offside-rule transducer over a primitive token stream.
///
/// Construction resets all state and pre-fetches one token, so the lexer is
/// always parked on a well-defined current token and `current_*` never race
/// ahead of `advance`.
pub struct LayoutLexer<S> {
    inner: S,
    state: State,
    /// Columns of the open indentation contexts, innermost last. The bottom
    /// entry is the top-level context at column 1; it is only popped at the
    /// end of the buffer.
    indent_stack: Vec<u32>,
    /// Most recently emitted token; `None` only during the initial pre-fetch.
    current: Option<Token>,
    /// Offset just past the most recent line break.
    line_start: usize,
    /// Extra columns contributed by leading tabs on the current line.
    tab_correction: u32,
    begin_of_line: bool,
}

impl<S: TokenSource> LayoutLexer<S> {
    /// Wrap a primitive token source, parked on the first output token.
    pub fn new(inner: S) -> Self {
        Self::with_start_offset(inner, 0)
    }

    /// Like [`LayoutLexer::new`] with an explicit start offset.
    ///
    /// The offside rule needs the column of every line's first token, so a
    /// pass must cover the whole buffer: a non-zero `start_offset` is a
    /// caller bug and panics.
    pub fn with_start_offset(inner: S, start_offset: usize) -> Self {
        assert_eq!(
            start_offset, 0,
            "incremental lexing is not supported: start_offset must be 0"
        );
        let mut lexer = Self {
            inner,
            state: State::Normal,
            // Top-level context: the first column of each line.
            indent_stack: vec![1],
            current: None,
            line_start: 0,
            tab_correction: 0,
            begin_of_line: true,
        };
        lexer.advance();
        lexer
    }

    /// Pull one primitive token and keep the line/tab bookkeeping current.
    fn fetch(&mut self) -> Token {
        let token = self.inner.current();
        self.inner.advance();
        match token.kind {
            TokenKind::Newline => {
                self.line_start = token.span.end;
                self.tab_correction = 0;
                self.begin_of_line = true;
            }
            TokenKind::Tab if self.begin_of_line => {
                // One raw token per tab character: each leading tab rounds the
                // running column up to the next tab stop.
                let column = self.column_of(&token);
                self.tab_correction += TAB_STOP - (column - 1) % TAB_STOP - 1;
            }
            _ => {}
        }
        token
    }

    fn column_of(&self, token: &Token) -> u32 {
        (token.span.start - self.line_start) as u32 + 1 + self.tab_correction
    }

    /// Decide the output token for `token`. `fresh` is false when the token
    /// was buffered by a previous call and is being re-examined.
    fn step(&mut self, token: Token, fresh: bool) -> Token {
        if token.kind == TokenKind::Eof {
            // End of the buffer: close one still-open context per call, then
            // surface the end-of-stream marker itself.
            return match self.indent_stack.pop() {
                Some(_) => Token::new(TokenKind::VirtualEndSection, token.span),
                None => token,
            };
        }

        match self.state {
            State::Normal => self.offside_check(token, fresh),
            State::AwaitingSectionStart => {
                if token.kind.is_trivia() {
                    token
                } else {
                    // First solid token of the section fixes its offside
                    // column, whether or not it starts a line.
                    let column = self.column_of(&token);
                    self.indent_stack.push(column);
                    self.state = State::Normal;
                    token
                }
            }
            State::PendingReturn(_) => unreachable!("pending token taken before stepping"),
        }
    }

    fn offside_check(&mut self, token: Token, fresh: bool) -> Token {
        if self.begin_of_line && !token.kind.is_trivia() && self.current.is_some() {
            let column = self.column_of(&token);
            if let Some(&top) = self.indent_stack.last() {
                // Equal column means a sibling declaration; strictly smaller
                // closes the section. A buffered token that has already
                // popped down to the top-level context stops there without a
                // declaration marker.
                if column == top && (fresh || self.indent_stack.len() > 1) {
                    self.state = State::PendingReturn(token);
                    return synthetic(TokenKind::VirtualEndDecl, token.span.start);
                }
                if column < top {
                    self.indent_stack.pop();
                    self.state = State::PendingReturn(token);
                    return synthetic(TokenKind::VirtualEndSection, token.span.start);
                }
            }
        } else if !self.begin_of_line
            && token.kind.is_keyword(KeywordId::In)
            && !self.just_closed_section()
        {
            // `let ... in` written on one line: `in` closes the binding group
            // even though it does not start a line.
            self.indent_stack.pop();
            self.state = State::PendingReturn(token);
            return synthetic(TokenKind::VirtualEndSection, token.span.start);
        }

        if token.kind.keyword_id().is_some_and(KeywordId::opens_section) {
            self.state = State::AwaitingSectionStart;
        }
        token
    }

    fn just_closed_section(&self) -> bool {
        matches!(
            self.current,
            Some(Token {
                kind: TokenKind::VirtualEndSection,
                ..
            })
        )
    }

    fn current_token(&self) -> Token {
        self.current
            .unwrap_or_else(|| unreachable!("layout lexer read before the initial pre-fetch"))
    }
}

impl<S: TokenSource> TokenSource for LayoutLexer<S> {
    fn advance(&mut self) {
        let token = match std::mem::replace(&mut self.state, State::Normal) {
            // Return the buffered token, re-checking it against the stack:
            // a multi-level dedent pops one context per call this way.
            State::PendingReturn(token) => self.step(token, false),
            state => {
                self.state = state;
                let token = self.fetch();
                self.step(token, true)
            }
        };

        // A zero-width end-section keeps the line start alive so the buffered
        // token is re-examined next call; any other solid token (including an
        // end-decl) consumes it.
        let keeps_line_start = token.kind.is_trivia()
            || (token.kind == TokenKind::VirtualEndSection && token.span.is_empty());
        if !keeps_line_start {
            self.begin_of_line = false;
        }

        self.current = Some(token);
    }

    fn current_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    fn current_start(&self) -> usize {
        self.current_token().span.start
    }

    fn current_end(&self) -> usize {
        self.current_token().span.end
    }
}

fn synthetic(kind: TokenKind, offset: usize) -> Token {
    Token::new(kind, Span::empty(offset))
}

// ============================================================================
// TESTS
// ============================================================================
