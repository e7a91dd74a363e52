// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # inflight-js
//!
//! A permissive, lossless JavaScript lexer for rewriting scripts in flight.
//!
//! ## Overview
//!
//! This crate provides:
//! - A process-wide keyword table ([`keywords`])
//! - A byte-oriented lexer that classifies every byte of its input
//!   ([`lexer::JsLexer`])
//! - Convenience helpers to tokenize a whole buffer, or many buffers in
//!   parallel
//!
//! The lexer performs no I/O and never fails hard: malformed input is
//! reported through [`JsLexer::has_error`](lexer::JsLexer::has_error).
//!
//! ## Quick Start
//!
//! ```rust
//! use inflight_js::{tokenize, TokenKind};
//!
//! let script = b"if (a) { b = a / 2; } // halve";
//! let result = tokenize(script);
//!
//! assert!(!result.error);
//! assert_eq!(result.reconstruct(), script.to_vec());
//! assert!(result.tokens.iter().any(|t| t.kind == TokenKind::Comment));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod keywords;
pub mod lexer;

pub use keywords::{Keyword, KeywordFlag};
pub use lexer::{JsLexer, Span, Token, TokenKind};

/// The complete token stream for one buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenized<'a> {
    /// Every token emitted before end-of-input
    pub tokens: Vec<Token<'a>>,
    /// Whether the lexer stopped on a malformed construct
    pub error: bool,
}

impl<'a> Tokenized<'a> {
    /// Concatenates the token text back into bytes.
    ///
    /// Equal to the input when `error` is false; otherwise a prefix of it.
    pub fn reconstruct(&self) -> Vec<u8> {
        let len = self.tokens.iter().map(|t| t.span.len()).sum();
        let mut out = Vec::with_capacity(len);
        for token in &self.tokens {
            out.extend_from_slice(token.text);
        }
        out
    }

    /// Iterates the tokens that are not whitespace, line breaks or comments.
    pub fn significant(&self) -> impl Iterator<Item = &Token<'a>> {
        self.tokens.iter().filter(|t| !t.kind.is_trivia())
    }
}

/// Tokenizes `input` to the end, or up to the first malformed token.
pub fn tokenize(input: &[u8]) -> Tokenized<'_> {
    let mut lexer = JsLexer::with_input(input);
    let tokens = lexer.by_ref().collect();
    Tokenized {
        tokens,
        error: lexer.has_error(),
    }
}

/// Tokenizes independent buffers on the rayon thread pool.
///
/// Results are returned in input order. Each buffer gets its own lexer; only
/// the keyword table is shared.
#[cfg(feature = "parallel")]
pub fn tokenize_batch<I>(inputs: &[I]) -> Vec<Tokenized<'_>>
where
    I: AsRef<[u8]> + Sync,
{
    use rayon::prelude::*;

    inputs
        .par_iter()
        .map(|input| tokenize(input.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_round_trip() {
        let script = b"function f(a, b) {\n  return a /* sum */ + b;\n}\n";
        let result = tokenize(script);
        assert!(!result.error);
        assert_eq!(result.reconstruct(), script.to_vec());
    }

    #[test]
    fn test_tokenize_reports_error() {
        let result = tokenize(b"var s = 'unterminated");
        assert!(result.error);
        assert_eq!(result.reconstruct(), b"var s = 'unterminated".to_vec());
    }

    #[test]
    fn test_significant_skips_trivia() {
        let result = tokenize(b"a /* c */ + // d\n b");
        let texts: Vec<_> = result.significant().map(|t| t.text).collect();
        assert_eq!(texts, vec![&b"a"[..], &b"+"[..], &b"b"[..]]);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_tokenize_batch_preserves_order() {
        let inputs = vec!["a = 1;".to_string(), "'open".to_string(), "b/2".to_string()];
        let results = tokenize_batch(&inputs);
        assert_eq!(results.len(), 3);
        assert!(!results[0].error);
        assert!(results[1].error);
        assert_eq!(results[2].reconstruct(), b"b/2".to_vec());
    }
}
