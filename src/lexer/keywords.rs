//! Reserved keyword vocabulary for the Elm language.
//!
//! This module is the single source of truth for reserved words: a stable
//! identifier ([`KeywordId`]) plus a const spelling table ([`KEYWORDS`]).
//!
//! ## Notes
//! - Lookup via [`from_str`] is case-sensitive; `Let` and `let` are different.
//! - The layout pass cares about a three-keyword subset: `let` and `of` open
//!   an indentation section, `in` closes a single-line `let` block.
//!
//! ## Examples
//! ```rust
//! use elm_syntax::lexer::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("let"), Some(KeywordId::Let));
//! assert_eq!(keywords::as_str(KeywordId::Let), "let");
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Module header
    Module,
    Import,
    Exposing,
    As,
    Port,

    // Type declarations
    Type,
    Alias,

    // Expressions
    If,
    Then,
    Else,
    Case,
    Of,
    Let,
    In,

    // Operator declarations
    Infix,
}

/// Canonical spelling table, one entry per [`KeywordId`].
pub const KEYWORDS: &[(KeywordId, &str)] = &[
    (KeywordId::Module, "module"),
    (KeywordId::Import, "import"),
    (KeywordId::Exposing, "exposing"),
    (KeywordId::As, "as"),
    (KeywordId::Port, "port"),
    (KeywordId::Type, "type"),
    (KeywordId::Alias, "alias"),
    (KeywordId::If, "if"),
    (KeywordId::Then, "then"),
    (KeywordId::Else, "else"),
    (KeywordId::Case, "case"),
    (KeywordId::Of, "of"),
    (KeywordId::Let, "let"),
    (KeywordId::In, "in"),
    (KeywordId::Infix, "infix"),
];

/// Resolve a spelling to its keyword id, if reserved.
pub fn from_str(name: &str) -> Option<KeywordId> {
    KEYWORDS
        .iter()
        .find(|(_, spelling)| *spelling == name)
        .map(|(id, _)| *id)
}

/// The canonical spelling of a keyword.
pub fn as_str(id: KeywordId) -> &'static str {
    KEYWORDS
        .iter()
        .find(|(candidate, _)| *candidate == id)
        .map(|(_, spelling)| *spelling)
        .unwrap_or_else(|| unreachable!("keyword {id:?} missing from the spelling table"))
}

impl KeywordId {
    /// Return `true` if this keyword introduces an indentation section.
    ///
    /// The first token after `let` or `of` establishes the offside column of
    /// the new section.
    pub fn opens_section(self) -> bool {
        matches!(self, KeywordId::Let | KeywordId::Of)
    }
}
