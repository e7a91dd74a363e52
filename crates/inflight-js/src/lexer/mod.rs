//! Lexical analysis (tokenization) for JavaScript source bytes.
//!
//! The lexer turns script bytes into a stream of classified tokens without
//! building a syntax tree. Whitespace, line separators and comments are
//! tokens too, so concatenating the emitted token text gives back the input.
//!
//! ## Structure
//!
//! - `scanner.rs` - `JsLexer`, dispatch on the first byte of each token
//! - `state.rs` - `LexState` and the per-kind "consume while" predicates
//! - `token.rs` - `Token`, `TokenKind` and `Span`
//!
//! ## Division or regex?
//!
//! A `/` that does not start a comment is division when the previous
//! significant token could end a value (an identifier, number, string,
//! value keyword, or one of `)`, `]`, `}`), and a regex otherwise:
//!
//! ```text
//! a / b        -> division
//! x = /b+/g    -> regex
//! (a) / 2      -> division
//! return /x/   -> regex
//! ```
//!
//! ## Errors
//!
//! Unterminated strings, block comments and regex literals, and a newline
//! inside a regex, set a sticky error flag. The truncated token is still
//! returned; every later call returns [`TokenKind::EndOfInput`].
//!
//! ## Usage
//!
//! ```rust
//! use inflight_js::lexer::{JsLexer, TokenKind};
//!
//! let mut lexer = JsLexer::new();
//! lexer.lex(b"let x = 42;");
//!
//! loop {
//!     let token = lexer.next_token();
//!     if token.kind == TokenKind::EndOfInput {
//!         break;
//!     }
//!     println!("{} {:?}", token.kind, token.text);
//! }
//! assert!(!lexer.has_error());
//! ```

mod scanner;
mod state;
mod token;

pub use scanner::JsLexer;
pub use token::{Span, Token, TokenKind};
