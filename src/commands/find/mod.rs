//! `find`: path operands followed by a boolean expression over primitives.

pub mod parser;
pub mod types;

use crate::ast::CommandKind;
use crate::commands::types::{flags, Arity, CommandForm, CommandSpec, OperandSlot, OptionRule, PayloadKind};

fn base_options() -> Vec<OptionRule> {
    flags(&["-H", "-L", "-P", "-E", "-X", "-d", "-s", "-x"])
}

/// `find [-H | -L | -P] [-EXdsx] [-f path] path ... [expression]`
/// `find [-H | -L | -P] [-EXdsx] -f path [path ...] [expression]`
pub fn spec() -> CommandSpec {
    let starting_point = OptionRule::with("-f", &[PayloadKind::File]);

    let mut with_f = base_options();
    with_f.push(starting_point.clone());

    CommandSpec::new(CommandKind::Find)
        .form(
            CommandForm::new("find1", "find")
                .repeat(with_f)
                .operands(vec![OperandSlot::new("path", PayloadKind::File, Arity::OneOrMore)])
                .predicate(),
        )
        .form(
            CommandForm::new("find2", "find")
                .repeat(base_options())
                .required(vec![starting_point])
                .operands(vec![OperandSlot::new("path", PayloadKind::File, Arity::ZeroOrMore)])
                .predicate(),
        )
}
