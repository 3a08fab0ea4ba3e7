//! Syntax frontend for Elm tooling: a layout-sensitive lexer.
//!
//! Elm follows the offside rule: `let` bindings and `case ... of` branches
//! are delimited by column position, not braces. This crate tokenizes Elm
//! source and rewrites the stream with zero-width virtual tokens that make
//! that block structure explicit, so an ordinary indentation-agnostic parser
//! can consume it.
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": no name resolution, type
//!   checking, or editor integration.
//! - Lexing never fails. Malformed indentation still yields a well-defined
//!   token stream; rejecting nonsense layout is the parser's job.
//!
//! ## Examples
//! ```rust
//! use elm_syntax::lexer::{self, TokenKind};
//!
//! let tokens = lexer::lex("let x = 1 in x");
//! let sections = tokens
//!     .iter()
//!     .filter(|t| t.kind == TokenKind::VirtualEndSection)
//!     .count();
//! assert_eq!(sections, 2); // the let block, then the top level at Eof
//! ```

pub mod diagnostics;
pub mod lexer;
