//! Token types for the Elm lexer.
//!
//! Tokens carry a [`TokenKind`] and a byte-offset [`Span`] into the source
//! buffer; they never own text. Keywords are ID-based via
//! [`KeywordId`](crate::lexer::keywords::KeywordId) so the layout pass and any
//! downstream parser can classify them without string comparisons.
//!
//! The two `Virtual*` kinds are produced only by the layout pass: they are
//! zero-width structural markers standing in for the block delimiters Elm's
//! offside rule leaves implicit.

use crate::lexer::keywords::{self, KeywordId};

/// Source location span (byte offsets). `start == end` is legal and marks a
/// zero-width virtual token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A zero-width span anchored at `offset`.
    pub fn empty(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // ========== Identifiers and literals ==========
    /// `foo`, `viewHeader` - value names, record fields, type variables
    LowerIdent,
    /// `Maybe`, `Html` - module names, type and constructor names
    UpperIdent,
    /// Integer, float, or hex literal
    Number,
    /// `"…"` or `"""…"""`
    StringLit,
    /// `'…'`
    CharLit,

    // ========== Keywords and operators ==========
    Keyword(KeywordId),
    /// Any operator symbol run without reserved meaning (`+`, `|>`, `==`, …)
    Operator,

    // ========== Punctuation ==========
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Equals,
    Arrow,
    Pipe,
    Colon,
    Backslash,
    Dot,
    DotDot,
    Underscore,

    // ========== Trivia ==========
    /// A run of space characters
    Whitespace,
    /// A single tab character; emitted one per tab so leading tabs can be
    /// expanded to tab stops individually
    Tab,
    /// `\n` or `\r\n`
    Newline,
    /// `-- …`
    LineComment,
    /// `{- … -}`, nested, including doc comments `{-| … -}`
    BlockComment,

    // ========== Error recovery ==========
    /// An unexpected character; never a hard failure
    Error,

    // ========== Virtual (layout pass only) ==========
    /// Boundary between two sibling declarations at the same offside column
    VirtualEndDecl,
    /// Close of an indentation-delimited section (`let` block, `case` branches)
    VirtualEndSection,

    /// End-of-stream sentinel
    Eof,
}

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return `true` for tokens the layout pass treats as transparent:
    /// whitespace, tabs, line breaks, and comments.
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace
                | TokenKind::Tab
                | TokenKind::Newline
                | TokenKind::LineComment
                | TokenKind::BlockComment
        )
    }

    /// Return `true` for tokens synthesized by the layout pass.
    pub fn is_virtual(&self) -> bool {
        matches!(self, TokenKind::VirtualEndDecl | TokenKind::VirtualEndSection)
    }

    /// Short display name, used by the token-dump CLI and golden tests.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::LowerIdent => "lower_ident",
            TokenKind::UpperIdent => "upper_ident",
            TokenKind::Number => "number",
            TokenKind::StringLit => "string",
            TokenKind::CharLit => "char",
            TokenKind::Keyword(id) => keywords::as_str(*id),
            TokenKind::Operator => "operator",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Equals => "=",
            TokenKind::Arrow => "->",
            TokenKind::Pipe => "|",
            TokenKind::Colon => ":",
            TokenKind::Backslash => "\\",
            TokenKind::Dot => ".",
            TokenKind::DotDot => "..",
            TokenKind::Underscore => "_",
            TokenKind::Whitespace => "ws",
            TokenKind::Tab => "tab",
            TokenKind::Newline => "newline",
            TokenKind::LineComment => "line_comment",
            TokenKind::BlockComment => "block_comment",
            TokenKind::Error => "error",
            TokenKind::VirtualEndDecl => "virtual_end_decl",
            TokenKind::VirtualEndSection => "virtual_end_section",
            TokenKind::Eof => "eof",
        }
    }
}

/// A token with its kind and source span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
