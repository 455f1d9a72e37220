//! Abstract Syntax Tree (AST) Types for Recognized Commands
//!
//! This module defines the structure handed to downstream consumers.
//!
//! Architecture:
//!   Input → Lexer → Dispatcher → (Option Matcher, Operands, Predicate) → AST

pub mod render;
pub mod types;

pub use types::*;
