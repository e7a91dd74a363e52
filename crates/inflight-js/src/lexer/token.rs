//! Token definitions for the JavaScript lexer.

use crate::keywords::Keyword;
use std::fmt;

/// A span in the source buffer, representing a range of bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if this span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// The different kinds of tokens produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Run of spaces, tabs and form feeds
    Whitespace,
    /// Run of `\n` and `\r` bytes
    LineSeparator,
    /// Decimal numeric literal
    Number,
    /// Single or double quoted string, quotes included
    StringLiteral,
    /// Regular expression literal, slashes included
    Regex,
    /// `//`, `/* */` or `<!--` comment
    Comment,
    /// Identifier that is not a keyword
    Identifier,
    /// Reserved word
    Keyword(Keyword),
    /// Punctuation or operator
    Operator,
    /// No more tokens; also returned after an error
    EndOfInput,
}

impl TokenKind {
    /// Returns true for tokens that carry no program meaning.
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::LineSeparator | TokenKind::Comment
        )
    }

    /// Returns a short lowercase name for display.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::LineSeparator => "line-separator",
            TokenKind::Number => "number",
            TokenKind::StringLiteral => "string",
            TokenKind::Regex => "regex",
            TokenKind::Comment => "comment",
            TokenKind::Identifier => "identifier",
            TokenKind::Keyword(_) => "keyword",
            TokenKind::Operator => "operator",
            TokenKind::EndOfInput => "end-of-input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(keyword) => write!(f, "keyword({})", keyword),
            other => f.write_str(other.name()),
        }
    }
}

/// A token produced by the lexer.
///
/// `text` borrows from the buffer passed to [`JsLexer::lex`](super::JsLexer::lex);
/// no bytes are copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The kind of token
    pub kind: TokenKind,
    /// The span in the source buffer
    pub span: Span,
    /// The bytes covered by `span`
    pub text: &'a [u8],
}

impl<'a> Token<'a> {
    /// Creates a new token.
    pub fn new(kind: TokenKind, span: Span, text: &'a [u8]) -> Self {
        Self { kind, span, text }
    }

    /// Returns true if this is the end-of-input marker.
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}
