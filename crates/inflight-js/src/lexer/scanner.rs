//! The lexer that produces tokens from raw script bytes.

use super::state::{
    LexState, Predicate, is_identifier_start, is_line_separator, is_number_start, is_space,
};
use super::{Span, Token, TokenKind};
use crate::keywords;

/// A permissive JavaScript lexer.
///
/// It does not reject every illegal program, but it accepts every legal one,
/// and the tokens it emits cover the input byte for byte. Nothing is decoded.
///
/// A lexer is reusable: each call to [`lex`](Self::lex) discards all state
/// from the previous scan.
#[derive(Debug, Clone, Default)]
pub struct JsLexer<'a> {
    input: &'a [u8],
    state: LexState,
}

impl<'a> JsLexer<'a> {
    /// Creates a lexer with no input bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a lexer already bound to `input`.
    pub fn with_input(input: &'a [u8]) -> Self {
        let mut lexer = Self::new();
        lexer.lex(input);
        lexer
    }

    /// Binds a new input buffer and resets all scan state.
    pub fn lex(&mut self, input: &'a [u8]) {
        self.input = input;
        self.state.reset();
    }

    /// Returns true if any token since the last [`lex`](Self::lex) call
    /// ended on a malformed construct.
    pub fn has_error(&self) -> bool {
        self.state.error
    }

    /// Returns the offset of the next unread byte.
    pub fn position(&self) -> usize {
        self.state.index
    }

    /// Returns the next token.
    ///
    /// Once the input is exhausted, or after an error, this keeps returning
    /// an empty [`TokenKind::EndOfInput`] token without scanning.
    pub fn next_token(&mut self) -> Token<'a> {
        let start = self.state.index;
        if start >= self.input.len() || self.state.error {
            return self.end_of_input();
        }

        let ch = self.input[start];
        self.state.token_start = ch;
        self.state.backslash = false;

        let kind = if is_space(ch) {
            self.consume(Predicate::Space);
            TokenKind::Whitespace
        } else if is_line_separator(ch) {
            self.consume(Predicate::LineSeparator);
            TokenKind::LineSeparator
        } else if is_number_start(ch) {
            self.scan_number_or_dot(ch)
        } else if ch == b'/' {
            self.scan_slash()
        } else if ch == b'"' || ch == b'\'' {
            self.consume(Predicate::String);
            self.state.may_end_value = true;
            TokenKind::StringLiteral
        } else if is_identifier_start(ch) {
            self.scan_identifier_or_keyword(ch)
        } else if self.input[start..].starts_with(b"<!--") {
            self.consume(Predicate::LineComment);
            TokenKind::Comment
        } else {
            self.scan_operator(ch)
        };

        let end = self.state.index;
        if self.state.error {
            tracing::debug!(offset = start, kind = %kind, "malformed javascript token");
        }
        Token::new(kind, Span::new(start, end), &self.input[start..end])
    }

    fn end_of_input(&self) -> Token<'a> {
        let at = self.state.index.min(self.input.len());
        Token::new(TokenKind::EndOfInput, Span::new(at, at), &self.input[at..at])
    }

    /// Consumes the byte at the current index plus every following byte the
    /// predicate accepts, and returns the span covered.
    fn consume(&mut self, predicate: Predicate) -> Span {
        let input = self.input;
        let start = self.state.index;
        self.state.prev = input[start];

        let mut pos = start + 1;
        while pos < input.len() && self.state.accepts(predicate, input[pos]) {
            self.state.prev = input[pos];
            pos += 1;
        }

        let mut end = pos;
        if pos == input.len() {
            if !predicate.allows_eof() {
                self.state.error = true;
            }
        } else if predicate.includes_terminator() {
            end += 1;
        }

        self.state.index = end;
        Span::new(start, end)
    }

    fn scan_number_or_dot(&mut self, first: u8) -> TokenKind {
        self.state.seen_dot = first == b'.';
        let span = self.consume(Predicate::Number);
        self.state.seen_dot = false;

        if span.len() == 1 && first == b'.' {
            self.state.may_end_value = false;
            return TokenKind::Operator;
        }
        debug_assert!(
            self.input[span.start..span.end]
                .iter()
                .filter(|&&b| b == b'.')
                .count()
                <= 1
        );
        self.state.may_end_value = true;
        TokenKind::Number
    }

    fn scan_identifier_or_keyword(&mut self, first: u8) -> TokenKind {
        self.state.backslash = first == b'\\';
        let span = self.consume(Predicate::Identifier);

        match keywords::lookup(&self.input[span.start..span.end]) {
            Some(entry) => {
                self.state.may_end_value = entry.keyword.is_value();
                TokenKind::Keyword(entry.keyword)
            }
            None => {
                self.state.may_end_value = true;
                TokenKind::Identifier
            }
        }
    }

    /// A slash may start a line comment, a block comment, a regex literal or
    /// a division operator. Telling division from a regex needs a parser, so
    /// the previous token decides.
    fn scan_slash(&mut self) -> TokenKind {
        if let Some(&next) = self.input.get(self.state.index + 1) {
            match next {
                b'/' => {
                    self.consume(Predicate::LineComment);
                    return TokenKind::Comment;
                }
                b'*' => {
                    self.consume(Predicate::BlockComment);
                    return TokenKind::Comment;
                }
                _ if !self.state.may_end_value => {
                    self.state.within_brackets = false;
                    self.consume(Predicate::Regex);
                    return TokenKind::Regex;
                }
                _ => {}
            }
        }

        self.consume(Predicate::Operator);
        self.state.may_end_value = false;
        TokenKind::Operator
    }

    fn scan_operator(&mut self, first: u8) -> TokenKind {
        self.consume(Predicate::Operator);
        self.state.may_end_value = matches!(first, b')' | b']' | b'}');
        TokenKind::Operator
    }
}

impl<'a> Iterator for JsLexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_end() { None } else { Some(token) }
    }
}
