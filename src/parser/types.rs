//! Parser Types and Constants
//!
//! Error type, resource limits and the internal attempt outcome shared by
//! the option matcher, operand allocation, predicate parser and dispatcher.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Parser limits to bound pathological inputs
pub const DEFAULT_MAX_TOKENS: usize = 4096;
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Ceilings applied to every parse call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserLimits {
    /// Maximum number of tokens in one line.
    pub max_tokens: usize,
    /// Maximum nesting of `(` and `!` in a `find` expression.
    pub max_depth: usize,
}

impl Default for ParserLimits {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Why a line could not be recognized. `position` is a token index; it
/// equals the token count when the input ended too early.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command line")]
    EmptyInput,

    #[error("{name}: command not recognized")]
    UnknownCommand { name: String, position: usize },

    #[error("{command}: no form matches at token {position} (tried {})", .forms.join(", "))]
    NoMatchingForm {
        command: String,
        forms: Vec<String>,
        position: usize,
        token: Option<String>,
    },

    #[error("missing argument to `{flag}': expected {expected}, found {found}")]
    MissingPayload {
        flag: String,
        expected: usize,
        found: usize,
        position: usize,
    },

    #[error("find: {message}")]
    InvalidExpression { message: String, position: usize },

    #[error("input too complex: {what} exceeds limit of {limit}")]
    TooComplex {
        what: String,
        limit: usize,
        position: usize,
    },
}

impl ParseError {
    /// Token index the failure refers to.
    pub fn position(&self) -> usize {
        match self {
            ParseError::EmptyInput => 0,
            ParseError::UnknownCommand { position, .. }
            | ParseError::NoMatchingForm { position, .. }
            | ParseError::MissingPayload { position, .. }
            | ParseError::InvalidExpression { position, .. }
            | ParseError::TooComplex { position, .. } => *position,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ParseError::EmptyInput => "empty-input",
            ParseError::UnknownCommand { .. } => "unknown-command",
            ParseError::NoMatchingForm { .. } => "no-matching-form",
            ParseError::MissingPayload { .. } => "missing-payload",
            ParseError::InvalidExpression { .. } => "invalid-expression",
            ParseError::TooComplex { .. } => "too-complex",
        }
    }

    pub(crate) fn invalid_expression(message: impl Into<String>, position: usize) -> Self {
        ParseError::InvalidExpression {
            message: message.into(),
            position,
        }
    }

    pub(crate) fn missing_payload(flag: &str, expected: usize, found: usize, position: usize) -> Self {
        ParseError::MissingPayload {
            flag: flag.to_string(),
            expected,
            found,
            position,
        }
    }
}

/// Outcome of one failed form attempt.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Stop {
    /// The form ran out of grammar (or input) at this token index.
    Short(usize),
    /// A hard failure that surfaces as-is if it is the farthest.
    Failed(ParseError),
}

impl Stop {
    pub(crate) fn position(&self) -> usize {
        match self {
            Stop::Short(position) => *position,
            Stop::Failed(err) => err.position(),
        }
    }
}

impl From<ParseError> for Stop {
    fn from(err: ParseError) -> Self {
        Stop::Failed(err)
    }
}
