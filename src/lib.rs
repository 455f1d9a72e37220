//! cmd-recognizer - structured recognition of Unix utility command lines
//!
//! Given one line such as `find . -name *.rs -o -type d`, this library works
//! out which utility was invoked, which of its usage forms matched, the flags
//! and their arguments, the positional operands and, for `find`, the boolean
//! predicate tree. Nothing is executed.

pub mod ast;
pub mod commands;
pub mod config;
pub mod parser;

pub use ast::types::*;
pub use commands::{registry, GrammarRegistry};
pub use config::{load_limits, ConfigError};
pub use parser::{parse, tokenize, ParseError, ParserLimits, Recognizer, Token};
