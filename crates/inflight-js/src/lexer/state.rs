//! Per-scan lexer state and the character-class predicates that drive it.

/// The "consume while" predicate selected for the token being scanned.
///
/// Each variant decides, one byte at a time, whether the current token
/// continues. Some of them read or update [`LexState`] as they go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Predicate {
    Space,
    LineSeparator,
    Number,
    Identifier,
    String,
    Regex,
    BlockComment,
    LineComment,
    Operator,
}

impl Predicate {
    /// Whether reaching the end of the buffer inside this token is acceptable.
    pub(crate) fn allows_eof(self) -> bool {
        !matches!(
            self,
            Predicate::String | Predicate::Regex | Predicate::BlockComment
        )
    }

    /// Whether the byte that stops the scan belongs to the token.
    pub(crate) fn includes_terminator(self) -> bool {
        matches!(
            self,
            Predicate::String | Predicate::Regex | Predicate::BlockComment
        )
    }
}

/// Mutable context for one lexing pass.
#[derive(Debug, Clone, Default)]
pub(crate) struct LexState {
    /// Offset of the next unread byte
    pub(crate) index: usize,
    /// Byte before the one currently being tested
    pub(crate) prev: u8,
    /// First byte of the current token (the quote for strings)
    pub(crate) token_start: u8,
    /// The previous byte was an unconsumed backslash
    pub(crate) backslash: bool,
    /// Inside a `[...]` class of a regex literal
    pub(crate) within_brackets: bool,
    /// Sticky; set by any malformed token
    pub(crate) error: bool,
    /// The last significant token could end a value expression
    pub(crate) may_end_value: bool,
    /// The current numeric token already contains a `.`
    pub(crate) seen_dot: bool,
}

impl LexState {
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns true if `ch` continues the current token.
    pub(crate) fn accepts(&mut self, predicate: Predicate, ch: u8) -> bool {
        match predicate {
            Predicate::Space => is_space(ch),
            Predicate::LineSeparator => is_line_separator(ch),
            Predicate::Number => self.in_number(ch),
            Predicate::Identifier => self.in_identifier(ch),
            Predicate::String => self.process_backslash(ch) || ch != self.token_start,
            Predicate::Regex => self.in_regex(ch),
            // `prev` starts as the opening '/', so "/*/" closes itself.
            Predicate::BlockComment => !(self.prev == b'*' && ch == b'/'),
            Predicate::LineComment => !is_line_separator(ch),
            Predicate::Operator => self.in_operator(ch),
        }
    }

    /// Consumes the byte after a backslash unconditionally.
    fn process_backslash(&mut self, ch: u8) -> bool {
        if self.backslash {
            self.backslash = false;
            return true;
        }
        if ch == b'\\' {
            self.backslash = true;
            return true;
        }
        false
    }

    fn in_number(&mut self, ch: u8) -> bool {
        if ch == b'.' {
            if self.seen_dot {
                return false;
            }
            self.seen_dot = true;
            return true;
        }
        ch.is_ascii_digit()
    }

    fn in_identifier(&mut self, ch: u8) -> bool {
        // Escapes such as `\u03c0` stay in the identifier undecoded.
        self.process_backslash(ch) || is_identifier_start(ch) || ch.is_ascii_digit()
    }

    fn in_regex(&mut self, ch: u8) -> bool {
        if self.process_backslash(ch) {
            return true;
        }
        match ch {
            b'/' => self.within_brackets,
            b'[' => {
                self.within_brackets = true;
                true
            }
            b']' => {
                self.within_brackets = false;
                true
            }
            b'\n' => {
                self.error = true;
                false
            }
            _ => true,
        }
    }

    fn in_operator(&mut self, ch: u8) -> bool {
        let start = self.token_start;
        let doubled = matches!(start, b'+' | b'-') && ch == start;
        let compound = ch == b'=' && matches!(start, b'+' | b'-' | b'*' | b'/');
        if doubled || compound {
            // No third byte: "+++" is "++" then "+".
            self.token_start = 0;
            return true;
        }
        false
    }
}

pub(crate) fn is_space(ch: u8) -> bool {
    matches!(ch, b' ' | b'\t' | 0x0c)
}

pub(crate) fn is_line_separator(ch: u8) -> bool {
    matches!(ch, b'\n' | b'\r')
}

pub(crate) fn is_number_start(ch: u8) -> bool {
    ch.is_ascii_digit() || ch == b'.'
}

/// Errs on the side of accepting: every non-ASCII byte may start an identifier.
pub(crate) fn is_identifier_start(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || matches!(ch, b'_' | b'$' | b'\\') || ch >= 127
}
