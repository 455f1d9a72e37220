// src/commands/types.rs
//! Grammar data model
//!
//! A command is described by one or more [`CommandForm`]s. Each form is a
//! sequence of [`Segment`]s: mandatory flags, order-free option loops,
//! positional operands and (for `find`) a trailing predicate expression.

use serde::Serialize;
use std::fmt;

use crate::ast::CommandKind;

/// Lexical role of a payload or operand token.
///
/// Every payload is a plain string at parse time; the kind only documents
/// what the downstream consumer should expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadKind {
    String,
    File,
    Number,
    Size,
    Time,
    Date,
    Permission,
}

impl PayloadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayloadKind::String => "string",
            PayloadKind::File => "file",
            PayloadKind::Number => "number",
            PayloadKind::Size => "size",
            PayloadKind::Time => "time",
            PayloadKind::Date => "date",
            PayloadKind::Permission => "permission",
        }
    }
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One syntactic alternative for a flag.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionRule {
    pub flag: &'static str,
    pub payload: Vec<PayloadKind>,
    /// Rules that may follow this flag directly, e.g. `-R [-H | -L | -P]`.
    pub nested: Vec<OptionRule>,
    /// At most one capture of this rule per form attempt.
    pub once: bool,
    /// The payload is glued to the flag in the same token (`--exclude=PAT`).
    pub joined: bool,
}

impl OptionRule {
    pub fn flag(flag: &'static str) -> Self {
        Self {
            flag,
            payload: Vec::new(),
            nested: Vec::new(),
            once: false,
            joined: false,
        }
    }

    pub fn with(flag: &'static str, payload: &[PayloadKind]) -> Self {
        Self {
            payload: payload.to_vec(),
            ..Self::flag(flag)
        }
    }

    /// A `--name=value` rule. `flag` includes the trailing `=`.
    pub fn joined(flag: &'static str, kind: PayloadKind) -> Self {
        Self {
            payload: vec![kind],
            joined: true,
            ..Self::flag(flag)
        }
    }

    pub fn nesting(mut self, rules: Vec<OptionRule>) -> Self {
        self.nested = rules;
        self
    }

    pub fn once(mut self) -> Self {
        self.once = true;
        self
    }

    /// Number of tokens consumed by the payload.
    pub fn arity(&self) -> usize {
        if self.joined {
            0
        } else {
            self.payload.len()
        }
    }

    fn synopsis(&self) -> String {
        let mut out = String::from(self.flag);
        for kind in &self.payload {
            if !self.joined {
                out.push(' ');
            }
            out.push_str(kind.as_str());
        }
        if !self.nested.is_empty() {
            let inner: Vec<String> = self.nested.iter().map(|r| r.synopsis()).collect();
            out.push_str(&format!(" [{}]", inner.join(" | ")));
        }
        out
    }
}

/// Convenience for a list of zero-payload flags.
pub fn flags(list: &[&'static str]) -> Vec<OptionRule> {
    list.iter().map(|&f| OptionRule::flag(f)).collect()
}

/// How many tokens an operand slot accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    One,
    Optional,
    ZeroOrMore,
    OneOrMore,
}

impl Arity {
    pub fn min(&self) -> usize {
        match self {
            Arity::One | Arity::OneOrMore => 1,
            Arity::Optional | Arity::ZeroOrMore => 0,
        }
    }

    pub fn max(&self) -> Option<usize> {
        match self {
            Arity::One | Arity::Optional => Some(1),
            Arity::ZeroOrMore | Arity::OneOrMore => None,
        }
    }
}

/// A positional capture.
#[derive(Debug, Clone, PartialEq)]
pub struct OperandSlot {
    pub name: &'static str,
    pub kind: PayloadKind,
    pub arity: Arity,
    /// Accept flag-looking tokens (`xargs rm -rf`).
    pub verbatim: bool,
    /// Only fill once the slot before it has taken a token.
    pub trailing: bool,
}

impl OperandSlot {
    pub fn new(name: &'static str, kind: PayloadKind, arity: Arity) -> Self {
        Self {
            name,
            kind,
            arity,
            verbatim: false,
            trailing: false,
        }
    }

    pub fn verbatim(mut self) -> Self {
        self.verbatim = true;
        self
    }

    /// `utility [argument ...]`: no arguments without a utility.
    pub fn trailing(mut self) -> Self {
        self.trailing = true;
        self
    }

    fn synopsis(&self) -> String {
        match self.arity {
            Arity::One => self.name.to_string(),
            Arity::Optional => format!("[{}]", self.name),
            Arity::ZeroOrMore => format!("[{} ...]", self.name),
            Arity::OneOrMore => format!("{} ...", self.name),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Exactly one of these rules, at this point.
    Required(Vec<OptionRule>),
    /// Zero or more of these rules, any order.
    Repeat(Vec<OptionRule>),
    Operands(Vec<OperandSlot>),
    /// `find`'s trailing boolean expression.
    Predicate,
}

/// One top-level alternative for a command.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandForm {
    pub name: &'static str,
    pub literal: &'static str,
    pub segments: Vec<Segment>,
}

impl CommandForm {
    pub fn new(name: &'static str, literal: &'static str) -> Self {
        Self {
            name,
            literal,
            segments: Vec::new(),
        }
    }

    pub fn required(mut self, rules: Vec<OptionRule>) -> Self {
        self.segments.push(Segment::Required(rules));
        self
    }

    pub fn repeat(mut self, rules: Vec<OptionRule>) -> Self {
        self.segments.push(Segment::Repeat(rules));
        self
    }

    pub fn operands(mut self, slots: Vec<OperandSlot>) -> Self {
        self.segments.push(Segment::Operands(slots));
        self
    }

    pub fn predicate(mut self) -> Self {
        self.segments.push(Segment::Predicate);
        self
    }

    /// Every option rule reachable in this form, nested rules included.
    pub fn rules(&self) -> Vec<&OptionRule> {
        fn walk<'a>(rules: &'a [OptionRule], out: &mut Vec<&'a OptionRule>) {
            for rule in rules {
                out.push(rule);
                walk(&rule.nested, out);
            }
        }
        let mut out = Vec::new();
        for segment in &self.segments {
            if let Segment::Required(rules) | Segment::Repeat(rules) = segment {
                walk(rules, &mut out);
            }
        }
        out
    }

    pub fn operand_slots(&self) -> impl Iterator<Item = &OperandSlot> {
        self.segments.iter().flat_map(|segment| match segment {
            Segment::Operands(slots) => slots.as_slice(),
            _ => &[][..],
        })
    }

    /// A man-page style usage line, e.g. `mv [-f | -i | -n | -v] source target`.
    pub fn synopsis(&self) -> String {
        let mut parts = vec![self.literal.to_string()];
        for segment in &self.segments {
            match segment {
                Segment::Required(rules) => {
                    let alts: Vec<String> = rules.iter().map(|r| r.synopsis()).collect();
                    if alts.len() == 1 {
                        parts.push(alts.join(""));
                    } else {
                        parts.push(format!("{{{}}}", alts.join(" | ")));
                    }
                }
                Segment::Repeat(rules) if !rules.is_empty() => {
                    let alts: Vec<String> = rules.iter().map(|r| r.synopsis()).collect();
                    parts.push(format!("[{}]", alts.join(" | ")));
                }
                Segment::Repeat(_) => {}
                Segment::Operands(slots) => {
                    parts.extend(slots.iter().map(|s| s.synopsis()));
                }
                Segment::Predicate => parts.push("[expression]".to_string()),
            }
        }
        parts.join(" ")
    }
}

/// All forms sharing a command literal, tried in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandSpec {
    pub kind: CommandKind,
    pub forms: Vec<CommandForm>,
}

impl CommandSpec {
    pub fn new(kind: CommandKind) -> Self {
        Self {
            kind,
            forms: Vec::new(),
        }
    }

    pub fn form(mut self, form: CommandForm) -> Self {
        self.forms.push(form);
        self
    }

    pub fn literal(&self) -> &'static str {
        self.kind.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PayloadKind::*;

    #[test]
    fn test_arity_bounds() {
        assert_eq!(Arity::One.min(), 1);
        assert_eq!(Arity::One.max(), Some(1));
        assert_eq!(Arity::Optional.min(), 0);
        assert_eq!(Arity::OneOrMore.max(), None);
    }

    #[test]
    fn test_joined_rule_takes_no_extra_tokens() {
        let rule = OptionRule::joined("--exclude=", String);
        assert_eq!(rule.arity(), 0);
        assert_eq!(OptionRule::with("-n", &[Number]).arity(), 1);
    }

    #[test]
    fn test_synopsis() {
        let form = CommandForm::new("mv1", "mv")
            .repeat(flags(&["-f", "-i"]))
            .operands(vec![
                OperandSlot::new("source", File, Arity::One),
                OperandSlot::new("target", File, Arity::One),
            ]);
        assert_eq!(form.synopsis(), "mv [-f | -i] source target");
    }

    #[test]
    fn test_nested_synopsis_and_rules() {
        let form = CommandForm::new("cp1", "cp").repeat(vec![
            OptionRule::flag("-R").nesting(flags(&["-H", "-L"])),
            OptionRule::with("-t", &[Date]),
        ]);
        assert_eq!(form.synopsis(), "cp [-R [-H | -L] | -t date]");
        let names: Vec<&str> = form.rules().iter().map(|r| r.flag).collect();
        assert_eq!(names, vec!["-R", "-H", "-L", "-t"]);
    }
}
