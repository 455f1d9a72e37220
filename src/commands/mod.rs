// src/commands/mod.rs
//! The command catalogue: one `CommandSpec` per supported utility, grouped
//! by family, plus the registry that indexes them.

pub mod archive;
pub mod file_ops;
pub mod find;
pub mod registry;
pub mod shell;
pub mod text;
pub mod types;

pub use registry::{registry, GrammarRegistry};
pub use types::{Arity, CommandForm, CommandSpec, OperandSlot, OptionRule, PayloadKind, Segment};
