//! Primitive tokenizer for Elm source text.
//!
//! Scans raw characters into primitive tokens: identifiers, literals,
//! operators, comments, punctuation, and trivia. It knows nothing about the
//! offside rule; the layout pass wraps it and relies on three properties:
//!
//! - line breaks are their own tokens (`\n` and `\r\n` each one [`TokenKind::Newline`]),
//! - each tab character is its own [`TokenKind::Tab`] token, so leading tabs
//!   can be expanded to tab stops one at a time,
//! - unexpected characters become [`TokenKind::Error`] tokens instead of
//!   failing, so every buffer tokenizes to completion.

use crate::lexer::TokenSource;
use crate::lexer::keywords;
use crate::lexer::tokens::TokenKind;

/// Character-level lexer over a source buffer.
///
/// Pull-based: the lexer is always parked on its current token, which spans
/// `[current_start, current_end)`; `advance` scans the next one. At the end of
/// the buffer it stays parked on a zero-width [`TokenKind::Eof`] token.
pub struct RawLexer<'src> {
    source: &'src str,
    /// Start offset of the current token
    token_start: usize,
    /// End offset of the current token, and scan position for the next one
    pos: usize,
    kind: TokenKind,
}

impl<'src> RawLexer<'src> {
    /// Create a lexer over `source`, parked on the first token.
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Self {
            source,
            token_start: 0,
            pos: 0,
            kind: TokenKind::Eof,
        };
        lexer.scan_next();
        lexer
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        let mut chars = self.source[self.pos..].chars();
        chars.next();
        chars.next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn bump_if(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn bump_while(&mut self, keep: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if keep(c) {
                self.bump();
            } else {
                break;
            }
        }
    }

    // ========================================================================
    // Scanning dispatch
    // ========================================================================

    fn scan_next(&mut self) {
        self.token_start = self.pos;
        self.kind = self.scan_kind();
    }

    fn scan_kind(&mut self) -> TokenKind {
        let Some(c) = self.bump() else {
            return TokenKind::Eof;
        };

        match c {
            '\n' => TokenKind::Newline,
            '\r' => {
                self.bump_if('\n');
                TokenKind::Newline
            }
            // One token per tab: the layout pass expands leading tabs to tab
            // stops individually.
            '\t' => TokenKind::Tab,
            ' ' => {
                self.bump_while(|c| c == ' ');
                TokenKind::Whitespace
            }

            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            ',' => TokenKind::Comma,
            '}' => TokenKind::RBrace,
            '{' => {
                if self.peek() == Some('-') {
                    self.block_comment()
                } else {
                    TokenKind::LBrace
                }
            }
            '-' => {
                if self.peek() == Some('-') {
                    self.line_comment()
                } else {
                    self.operator()
                }
            }
            '\\' => TokenKind::Backslash,
            '"' => self.string(),
            '\'' => self.char_literal(),
            '_' => {
                if self.peek().is_some_and(is_ident_continue) {
                    self.bump_while(is_ident_continue);
                    TokenKind::LowerIdent
                } else {
                    TokenKind::Underscore
                }
            }
            '0'..='9' => self.number(c),
            c if c.is_ascii_lowercase() => self.lower_ident(),
            c if c.is_ascii_uppercase() => {
                self.bump_while(is_ident_continue);
                TokenKind::UpperIdent
            }
            c if is_operator_char(c) => self.operator(),
            _ => TokenKind::Error,
        }
    }

    // ========================================================================
    // Token scanners
    // ========================================================================

    /// `-- …`; the terminating line break is left for the next token.
    fn line_comment(&mut self) -> TokenKind {
        self.bump_while(|c| c != '\n' && c != '\r');
        TokenKind::LineComment
    }

    /// `{- … -}` with nesting, also doc comments `{-| … -}`. An unterminated
    /// comment runs to the end of the buffer.
    fn block_comment(&mut self) -> TokenKind {
        self.bump(); // the '-' after '{'
        let mut depth = 1u32;
        while let Some(c) = self.bump() {
            match c {
                '{' if self.peek() == Some('-') => {
                    self.bump();
                    depth += 1;
                }
                '-' if self.peek() == Some('}') => {
                    self.bump();
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                _ => {}
            }
        }
        TokenKind::BlockComment
    }

    /// `"…"` or `"""…"""`. A single-line string stops before an unescaped
    /// line break so the break still reaches the layout pass as its own
    /// token; a triple-quoted string may span lines.
    fn string(&mut self) -> TokenKind {
        if self.peek() == Some('"') && self.peek_second() == Some('"') {
            self.bump();
            self.bump();
            while let Some(c) = self.bump() {
                match c {
                    '\\' => {
                        self.bump();
                    }
                    '"' if self.peek() == Some('"') && self.peek_second() == Some('"') => {
                        self.bump();
                        self.bump();
                        break;
                    }
                    _ => {}
                }
            }
        } else {
            while let Some(c) = self.peek() {
                match c {
                    '\n' | '\r' => break,
                    '\\' => {
                        self.bump();
                        self.bump();
                    }
                    '"' => {
                        self.bump();
                        break;
                    }
                    _ => {
                        self.bump();
                    }
                }
            }
        }
        TokenKind::StringLit
    }

    /// `'…'` with escapes; stops before a line break if unterminated.
    fn char_literal(&mut self) -> TokenKind {
        while let Some(c) = self.peek() {
            match c {
                '\n' | '\r' => break,
                '\\' => {
                    self.bump();
                    self.bump();
                }
                '\'' => {
                    self.bump();
                    break;
                }
                _ => {
                    self.bump();
                }
            }
        }
        TokenKind::CharLit
    }

    /// Decimal, float with optional exponent, or `0x` hex.
    fn number(&mut self, first: char) -> TokenKind {
        if first == '0' && (self.peek() == Some('x') || self.peek() == Some('X')) {
            self.bump();
            self.bump_while(|c| c.is_ascii_hexdigit());
            return TokenKind::Number;
        }
        self.bump_while(|c| c.is_ascii_digit());
        // A dot only belongs to the number if a digit follows; `1..2` stays
        // number / dotdot / number.
        if self.peek() == Some('.') && self.peek_second().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
            self.bump_while(|c| c.is_ascii_digit());
        }
        if self.peek() == Some('e') || self.peek() == Some('E') {
            let checkpoint = self.pos;
            self.bump();
            self.bump_if('+');
            self.bump_if('-');
            if self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.bump_while(|c| c.is_ascii_digit());
            } else {
                self.pos = checkpoint;
            }
        }
        TokenKind::Number
    }

    fn lower_ident(&mut self) -> TokenKind {
        self.bump_while(is_ident_continue);
        let spelling = &self.source[self.token_start..self.pos];
        match keywords::from_str(spelling) {
            Some(id) => TokenKind::Keyword(id),
            None => TokenKind::LowerIdent,
        }
    }

    /// Maximal run of operator characters; exact matches for the reserved
    /// punctuation spellings, everything else is an opaque operator.
    fn operator(&mut self) -> TokenKind {
        self.bump_while(is_operator_char);
        match &self.source[self.token_start..self.pos] {
            "=" => TokenKind::Equals,
            "->" => TokenKind::Arrow,
            "|" => TokenKind::Pipe,
            ":" => TokenKind::Colon,
            "." => TokenKind::Dot,
            ".." => TokenKind::DotDot,
            _ => TokenKind::Operator,
        }
    }
}

impl TokenSource for RawLexer<'_> {
    fn advance(&mut self) {
        self.scan_next();
    }

    fn current_kind(&self) -> TokenKind {
        self.kind
    }

    fn current_start(&self) -> usize {
        self.token_start
    }

    fn current_end(&self) -> usize {
        self.pos
    }
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_operator_char(c: char) -> bool {
    matches!(
        c,
        '+' | '-' | '*' | '/' | '=' | '.' | '<' | '>' | ':' | '&' | '|' | '^' | '?' | '%' | '!'
    )
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::keywords::KEYWORDS;
    use crate::lexer::lex_raw;
    use crate::lexer::tokens::Token;

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_raw(source).iter().map(|t| t.kind).collect()
    }

    fn solid_kinds(source: &str) -> Vec<TokenKind> {
        lex_raw(source)
            .iter()
            .map(|t| t.kind)
            .filter(|k| !k.is_trivia() && *k != TokenKind::Eof)
            .collect()
    }

    #[test]
    fn test_keyword_registry_parity() {
        for (id, spelling) in KEYWORDS {
            let tokens = lex_raw(spelling);
            assert_eq!(
                tokens[0].kind,
                TokenKind::Keyword(*id),
                "expected {spelling:?} to lex as keyword {id:?}"
            );
            assert_eq!(tokens[1].kind, TokenKind::Eof);
        }
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        assert_eq!(kinds("letter")[0], TokenKind::LowerIdent);
        assert_eq!(kinds("input")[0], TokenKind::LowerIdent);
        assert_eq!(kinds("often")[0], TokenKind::LowerIdent);
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(
            solid_kinds("viewHeader Html msg_1 Maybe"),
            vec![
                TokenKind::LowerIdent,
                TokenKind::UpperIdent,
                TokenKind::LowerIdent,
                TokenKind::UpperIdent,
            ]
        );
    }

    #[test]
    fn test_reserved_punctuation_vs_operators() {
        assert_eq!(solid_kinds("=")[0], TokenKind::Equals);
        assert_eq!(solid_kinds("==")[0], TokenKind::Operator);
        assert_eq!(solid_kinds("->")[0], TokenKind::Arrow);
        assert_eq!(solid_kinds("|")[0], TokenKind::Pipe);
        assert_eq!(solid_kinds("|>")[0], TokenKind::Operator);
        assert_eq!(solid_kinds(":")[0], TokenKind::Colon);
        assert_eq!(solid_kinds("::")[0], TokenKind::Operator);
        assert_eq!(solid_kinds(".")[0], TokenKind::Dot);
        assert_eq!(solid_kinds("..")[0], TokenKind::DotDot);
        assert_eq!(solid_kinds("++")[0], TokenKind::Operator);
    }

    #[test]
    fn test_line_comment_stops_at_newline() {
        let tokens = lex_raw("x -- note\ny");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::LowerIdent,
                TokenKind::Whitespace,
                TokenKind::LineComment,
                TokenKind::Newline,
                TokenKind::LowerIdent,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_nested_block_comment_is_one_token() {
        let source = "{- a {- b -} c -}";
        let tokens = lex_raw(source);
        assert_eq!(tokens[0].kind, TokenKind::BlockComment);
        assert_eq!(tokens[0].span.end, source.len());
        assert_eq!(tokens[1].kind, TokenKind::Eof);
    }

    #[test]
    fn test_doc_comment() {
        assert_eq!(kinds("{-| docs -}")[0], TokenKind::BlockComment);
    }

    #[test]
    fn test_strings() {
        assert_eq!(solid_kinds(r#""hello""#), vec![TokenKind::StringLit]);
        assert_eq!(solid_kinds(r#""a\"b""#), vec![TokenKind::StringLit]);
        assert_eq!(solid_kinds(r#""""#), vec![TokenKind::StringLit]);
    }

    #[test]
    fn test_triple_quoted_string_spans_lines() {
        let source = "\"\"\"one\ntwo\"\"\"";
        let tokens = lex_raw(source);
        assert_eq!(tokens[0].kind, TokenKind::StringLit);
        assert_eq!(tokens[0].span.end, source.len());
    }

    #[test]
    fn test_unterminated_string_stops_before_newline() {
        let tokens = lex_raw("\"open\nx");
        assert_eq!(tokens[0].kind, TokenKind::StringLit);
        assert_eq!(tokens[0].span.end, 5);
        assert_eq!(tokens[1].kind, TokenKind::Newline);
    }

    #[test]
    fn test_char_literals() {
        assert_eq!(solid_kinds("'a'"), vec![TokenKind::CharLit]);
        assert_eq!(solid_kinds(r"'\n'"), vec![TokenKind::CharLit]);
        assert_eq!(solid_kinds(r"'\''"), vec![TokenKind::CharLit]);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            solid_kinds("42 3.14 6.02e23 1e-9 0xFF"),
            vec![TokenKind::Number; 5]
        );
    }

    #[test]
    fn test_number_followed_by_dots() {
        assert_eq!(
            solid_kinds("1..2"),
            vec![TokenKind::Number, TokenKind::DotDot, TokenKind::Number]
        );
        assert_eq!(solid_kinds("1."), vec![TokenKind::Number, TokenKind::Dot]);
    }

    #[test]
    fn test_tabs_are_individual_tokens() {
        assert_eq!(
            kinds("\t\tx"),
            vec![
                TokenKind::Tab,
                TokenKind::Tab,
                TokenKind::LowerIdent,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_crlf_is_one_newline() {
        let tokens = lex_raw("a\r\nb");
        assert_eq!(tokens[1].kind, TokenKind::Newline);
        assert_eq!((tokens[1].span.start, tokens[1].span.end), (1, 3));
    }

    #[test]
    fn test_unexpected_character_recovers() {
        assert_eq!(
            solid_kinds("a # b"),
            vec![TokenKind::LowerIdent, TokenKind::Error, TokenKind::LowerIdent]
        );
    }

    #[test]
    fn test_underscore() {
        assert_eq!(solid_kinds("_")[0], TokenKind::Underscore);
        assert_eq!(solid_kinds("_x")[0], TokenKind::LowerIdent);
    }

    #[test]
    fn test_round_trip() {
        let source = "module Main exposing (..)\n\nview = text \"hi\" -- done\n";
        let tokens: Vec<Token> = lex_raw(source);
        let rebuilt: String = tokens
            .iter()
            .map(|t| &source[t.span.start..t.span.end])
            .collect();
        assert_eq!(rebuilt, source);
    }
}
