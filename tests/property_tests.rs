//! Property-based tests for the Elm layout lexer.
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use elm_syntax::lexer::{self, TokenKind};
use proptest::prelude::*;

/// Small source fragments the generator glues together. Deliberately skewed
/// towards layout-significant material: section keywords, line breaks,
/// leading tabs, comments, and dedents.
fn fragment_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "let", "of", "in", "case", "if", "x", "foo", "Main", "= 1", "-> y", "+", "(", ")", " ",
        "  ", "\t", "\n", "\r\n", "-- c\n", "{- b -}", "\"s\"", "'c'", "3.14",
    ])
}

fn source_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment_strategy(), 0..40).prop_map(|parts| parts.concat())
}

proptest! {
    /// Property: lexing is deterministic.
    #[test]
    fn lexing_is_deterministic(source in source_strategy()) {
        prop_assert_eq!(lexer::lex(&source), lexer::lex(&source));
    }

    /// Property: concatenating every real token's source slice, in order,
    /// reproduces the buffer exactly; virtual tokens carry no content.
    #[test]
    fn real_tokens_round_trip(source in source_strategy()) {
        let rebuilt: String = lexer::lex(&source)
            .iter()
            .filter(|t| !t.kind.is_virtual() && t.kind != TokenKind::Eof)
            .map(|t| &source[t.span.start..t.span.end])
            .collect();
        prop_assert_eq!(rebuilt, source);
    }

    /// Property: offsets never run backwards, and every span is well-formed.
    #[test]
    fn offsets_are_monotonic(source in source_strategy()) {
        let tokens = lexer::lex(&source);
        for token in &tokens {
            prop_assert!(token.span.start <= token.span.end);
            prop_assert!(token.span.end <= source.len());
        }
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].span.start <= pair[1].span.start);
            prop_assert!(pair[0].span.end <= pair[1].span.end);
        }
    }

    /// Property: the stream terminates in exactly one Eof token.
    #[test]
    fn stream_ends_in_single_eof(source in source_strategy()) {
        let tokens = lexer::lex(&source);
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        prop_assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(), 1);
    }

    /// Property: virtual tokens are always zero-width.
    #[test]
    fn virtual_tokens_are_zero_width(source in source_strategy()) {
        for token in lexer::lex(&source) {
            if token.kind.is_virtual() {
                prop_assert_eq!(token.span.start, token.span.end);
            }
        }
    }

    /// Property: the raw pass covers the buffer with gap-free, contiguous
    /// tokens.
    #[test]
    fn raw_tokens_are_contiguous(source in source_strategy()) {
        let tokens = lexer::lex_raw(&source);
        let mut offset = 0;
        for token in &tokens {
            prop_assert_eq!(token.span.start, offset);
            offset = token.span.end;
        }
        prop_assert_eq!(offset, source.len());
    }
}
