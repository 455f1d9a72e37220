//! Lexer for Command Lines
//!
//! Splits one line of text into whitespace-delimited tokens. Space, tab,
//! newline and carriage return separate tokens and are never retained.
//! There is no quoting, escaping or expansion.

use regex_lite::Regex;
use serde::Serialize;
use tracing::trace;

lazy_static::lazy_static! {
    static ref WORD: Regex = Regex::new(r"[^ \t\r\n]+").unwrap();
}

/// A maximal run of non-blank characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub value: String,
    /// Byte offset of the token in the input line.
    pub offset: usize,
}

impl Token {
    pub fn new(value: impl Into<String>, offset: usize) -> Self {
        Self {
            value: value.into(),
            offset,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

/// Tokenize a line. Empty or all-blank input yields no tokens.
pub fn tokenize(input: &str) -> Vec<Token> {
    let tokens: Vec<Token> = WORD
        .find_iter(input)
        .map(|m| Token::new(m.as_str(), m.start()))
        .collect();
    trace!(target: "tokenize", count = tokens.len(), "tokenized input");
    tokens
}
