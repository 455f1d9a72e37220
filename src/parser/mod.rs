//! Recognition engine
//!
//! Splits a line into words, then matches the words against the grammar
//! registry: option rules, operand slots and the `find` predicate language.

pub mod lexer;
pub mod operands;
pub mod options;
pub mod parser;
pub mod types;

// Re-exports
pub use lexer::{tokenize, Token};
pub use parser::{parse, Recognizer};
pub use types::{ParseError, ParserLimits, DEFAULT_MAX_DEPTH, DEFAULT_MAX_TOKENS};
