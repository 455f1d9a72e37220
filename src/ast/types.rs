//! Abstract Syntax Tree (AST) Types for Recognized Command Lines
//!
//! A successful recognition produces one [`CommandAst`]: which utility was
//! invoked, which of its forms matched, the captured options and operands
//! and, for `find`, the predicate expression tree.

use serde::Serialize;
use std::fmt;

use crate::commands::types::PayloadKind;

// =============================================================================
// COMMAND KINDS
// =============================================================================

macro_rules! command_kinds {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// Every utility the grammar registry knows about.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        #[serde(rename_all = "lowercase")]
        pub enum CommandKind {
            $($variant),+
        }

        impl CommandKind {
            pub const ALL: &'static [CommandKind] = &[$(CommandKind::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(CommandKind::$variant => $name),+
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(CommandKind::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

command_kinds! {
    Awk => "awk",
    Basename => "basename",
    Cat => "cat",
    Cd => "cd",
    Chmod => "chmod",
    Chown => "chown",
    Comm => "comm",
    Cp => "cp",
    Cut => "cut",
    Diff => "diff",
    Dirname => "dirname",
    Du => "du",
    Echo => "echo",
    Egrep => "egrep",
    Fgrep => "fgrep",
    Find => "find",
    Grep => "grep",
    Gzip => "gzip",
    Head => "head",
    Ln => "ln",
    Ls => "ls",
    Mkdir => "mkdir",
    Mv => "mv",
    Readlink => "readlink",
    Rm => "rm",
    Rmdir => "rmdir",
    Sed => "sed",
    Seq => "seq",
    Sh => "sh",
    Sort => "sort",
    Tail => "tail",
    Tar => "tar",
    Tee => "tee",
    Touch => "touch",
    Uniq => "uniq",
    Unlink => "unlink",
    Unzip => "unzip",
    Wc => "wc",
    Xargs => "xargs",
    Zip => "zip",
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// COMMAND AST
// =============================================================================

/// A flag captured by the option matcher, with its payload tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CapturedOption {
    pub flag: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub payload: Vec<String>,
    /// Captures of the rule's nested options, e.g. `-H` after `-R`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nested: Vec<CapturedOption>,
    /// Payload was glued to the flag (`--exclude=*.o`).
    #[serde(skip)]
    pub joined: bool,
}

impl CapturedOption {
    /// Tokens this capture consumed from the input.
    pub fn token_count(&self) -> usize {
        let own = if self.joined { 1 } else { 1 + self.payload.len() };
        own + self.nested.iter().map(|n| n.token_count()).sum::<usize>()
    }
}

/// A positional value bound to a named operand slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Operand {
    pub slot: String,
    pub kind: PayloadKind,
    pub value: String,
}

/// Result of recognizing one command line.
#[derive(Debug, Clone, Serialize)]
pub struct CommandAst {
    pub command: CommandKind,
    /// Name of the matching form, e.g. `mv2`.
    pub form: String,
    pub options: Vec<CapturedOption>,
    pub operands: Vec<Operand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicate: Option<PredicateNode>,
    /// Tokens consumed by the predicate, explicit `-and` included.
    #[serde(skip)]
    pub predicate_tokens: usize,
}

impl CommandAst {
    /// Total tokens this AST accounts for, command literal included.
    pub fn token_count(&self) -> usize {
        1 + self.options.iter().map(|o| o.token_count()).sum::<usize>()
            + self.operands.len()
            + self.predicate_tokens
    }

    /// Values of every operand bound to `slot`, in order.
    pub fn operand_values(&self, slot: &str) -> Vec<&str> {
        self.operands
            .iter()
            .filter(|o| o.slot == slot)
            .map(|o| o.value.as_str())
            .collect()
    }

    pub fn option(&self, flag: &str) -> Option<&CapturedOption> {
        self.options.iter().find(|o| o.flag == flag)
    }
}

// `-a` and juxtaposition build the same tree, so the token tally stays out.
impl PartialEq for CommandAst {
    fn eq(&self, other: &Self) -> bool {
        self.command == other.command
            && self.form == other.form
            && self.options == other.options
            && self.operands == other.operands
            && self.predicate == other.predicate
    }
}

impl Eq for CommandAst {}

// =============================================================================
// FIND PREDICATES
// =============================================================================

/// One node of `find`'s boolean expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PredicateNode {
    Primitive { name: String, args: Vec<String> },
    Not { child: Box<PredicateNode> },
    And { left: Box<PredicateNode>, right: Box<PredicateNode> },
    Or { left: Box<PredicateNode>, right: Box<PredicateNode> },
    Paren { child: Box<PredicateNode> },
    True,
    False,
}

impl PredicateNode {
    pub fn primitive(name: impl Into<String>, args: Vec<String>) -> Self {
        PredicateNode::Primitive {
            name: name.into(),
            args,
        }
    }

    pub fn not(child: PredicateNode) -> Self {
        PredicateNode::Not {
            child: Box::new(child),
        }
    }

    pub fn and(left: PredicateNode, right: PredicateNode) -> Self {
        PredicateNode::And {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn or(left: PredicateNode, right: PredicateNode) -> Self {
        PredicateNode::Or {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn paren(child: PredicateNode) -> Self {
        PredicateNode::Paren {
            child: Box::new(child),
        }
    }

    /// Depth of the tree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            PredicateNode::Primitive { .. } | PredicateNode::True | PredicateNode::False => 1,
            PredicateNode::Not { child } | PredicateNode::Paren { child } => 1 + child.depth(),
            PredicateNode::And { left, right } | PredicateNode::Or { left, right } => {
                1 + left.depth().max(right.depth())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_kind_names_round_trip() {
        for kind in CommandKind::ALL {
            assert_eq!(CommandKind::from_name(kind.as_str()), Some(*kind));
        }
        assert_eq!(CommandKind::from_name("frobnicate"), None);
        assert_eq!(CommandKind::ALL.len(), 40);
    }

    #[test]
    fn test_captured_option_token_count() {
        let opt = CapturedOption {
            flag: "-R".to_string(),
            payload: vec![],
            nested: vec![CapturedOption {
                flag: "-H".to_string(),
                payload: vec![],
                nested: vec![],
                joined: false,
            }],
            joined: false,
        };
        assert_eq!(opt.token_count(), 2);

        let joined = CapturedOption {
            flag: "--exclude=".to_string(),
            payload: vec!["*.o".to_string()],
            nested: vec![],
            joined: true,
        };
        assert_eq!(joined.token_count(), 1);
    }

    #[test]
    fn test_predicate_depth() {
        let leaf = PredicateNode::primitive("-print", vec![]);
        let tree = PredicateNode::or(
            PredicateNode::True,
            PredicateNode::paren(PredicateNode::not(leaf)),
        );
        assert_eq!(tree.depth(), 4);
    }

    #[test]
    fn test_predicate_serializes_with_type_tag() {
        let node = PredicateNode::primitive("-name", vec!["*.rs".to_string()]);
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(json, r#"{"type":"primitive","name":"-name","args":["*.rs"]}"#);
    }
}
