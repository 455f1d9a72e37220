// src/commands/file_ops.rs
//! Utilities that create, move, link, remove or re-permission files.

use crate::ast::CommandKind;
use crate::commands::types::{flags, Arity, CommandForm, CommandSpec, OperandSlot, OptionRule, PayloadKind};
use Arity::*;
use PayloadKind::*;

/// `-R [-H | -L | -P]`
fn recursive() -> OptionRule {
    OptionRule::flag("-R").nesting(flags(&["-H", "-L", "-P"]))
}

fn slot(name: &'static str, kind: PayloadKind, arity: Arity) -> OperandSlot {
    OperandSlot::new(name, kind, arity)
}

/// `mv [-f | -i | -n] [-v] source target`
/// `mv [-f | -i | -n] [-v] source ... directory`
pub fn mv() -> CommandSpec {
    let options = flags(&["-f", "-i", "-n", "-v"]);
    CommandSpec::new(CommandKind::Mv)
        .form(
            CommandForm::new("mv1", "mv")
                .repeat(options.clone())
                .operands(vec![slot("source", File, One), slot("target", File, One)]),
        )
        .form(
            CommandForm::new("mv2", "mv")
                .repeat(options)
                .operands(vec![slot("source", File, OneOrMore), slot("directory", File, One)]),
        )
}

/// `cp [-R [-H | -L | -P]] [-fi | -n] [-apvX] source_file target_file`
/// `cp [-R [-H | -L | -P]] [-fi | -n] [-apvX] source_file ... target_directory`
pub fn cp() -> CommandSpec {
    let mut options = vec![recursive()];
    options.extend(flags(&["-f", "-i", "-n", "-a", "-p", "-v", "-X", "-r"]));
    CommandSpec::new(CommandKind::Cp)
        .form(
            CommandForm::new("cp1", "cp")
                .repeat(options.clone())
                .operands(vec![slot("source_file", File, One), slot("target_file", File, One)]),
        )
        .form(
            CommandForm::new("cp2", "cp")
                .repeat(options)
                .operands(vec![
                    slot("source_file", File, OneOrMore),
                    slot("target_directory", File, One),
                ]),
        )
}

/// `ln [-Ffhinsv] source_file [target_file]`
/// `ln [-Ffhinsv] source_file ... target_dir`
pub fn ln() -> CommandSpec {
    let options = flags(&["-F", "-f", "-h", "-i", "-n", "-s", "-v"]);
    CommandSpec::new(CommandKind::Ln)
        .form(
            CommandForm::new("ln1", "ln")
                .repeat(options.clone())
                .operands(vec![slot("source_file", File, One), slot("target_file", File, Optional)]),
        )
        .form(
            CommandForm::new("ln2", "ln")
                .repeat(options)
                .operands(vec![slot("source_file", File, OneOrMore), slot("target_dir", File, One)]),
        )
}

/// `rm [-f | -i] [-dIPRrvW] file ...`
pub fn rm() -> CommandSpec {
    CommandSpec::new(CommandKind::Rm).form(
        CommandForm::new("rm", "rm")
            .repeat(flags(&["-f", "-i", "-d", "-I", "-P", "-R", "-r", "-v", "-W"]))
            .operands(vec![slot("file", File, OneOrMore)]),
    )
}

/// `unlink file`
pub fn unlink() -> CommandSpec {
    CommandSpec::new(CommandKind::Unlink)
        .form(CommandForm::new("unlink", "unlink").operands(vec![slot("file", File, One)]))
}

/// `mkdir [-pv] [-m mode] directory_name ...`
pub fn mkdir() -> CommandSpec {
    let mut options = flags(&["-p", "-v"]);
    options.push(OptionRule::with("-m", &[Permission]));
    CommandSpec::new(CommandKind::Mkdir).form(
        CommandForm::new("mkdir", "mkdir")
            .repeat(options)
            .operands(vec![slot("directory_name", File, OneOrMore)]),
    )
}

/// `rmdir [-p] directory ...`
pub fn rmdir() -> CommandSpec {
    CommandSpec::new(CommandKind::Rmdir).form(
        CommandForm::new("rmdir", "rmdir")
            .repeat(flags(&["-p"]))
            .operands(vec![slot("directory", File, OneOrMore)]),
    )
}

/// `touch [-A [-][[hh]mm]SS] [-acfhm] [-r file] [-t [[CC]YY]MMDDhhmm[.SS]] [-d date] file ...`
pub fn touch() -> CommandSpec {
    let mut options = vec![OptionRule::with("-A", &[Time])];
    options.extend(flags(&["-a", "-c", "-f", "-h", "-m"]));
    options.push(OptionRule::with("-r", &[File]));
    options.push(OptionRule::with("-t", &[Date]));
    options.push(OptionRule::with("-d", &[Date]));
    CommandSpec::new(CommandKind::Touch).form(
        CommandForm::new("touch", "touch")
            .repeat(options)
            .operands(vec![slot("file", File, OneOrMore)]),
    )
}

/// The ACL-gated forms come before the plain mode form: under first-match
/// the mode form would otherwise take `-E`, `+a`, ... as its mode operand.
///
/// `chmod [-fhv] [-R [-H | -L | -P]] [-a | +a | =a] ACE file ...`
/// `chmod [-fhv] [-R [-H | -L | -P]] -E file ...`
/// `chmod [-fhv] [-R [-H | -L | -P]] -C file ...`
/// `chmod [-fhv] [-R [-H | -L | -P]] -N file ...`
/// `chmod [-fhv] [-R [-H | -L | -P]] mode file ...`
pub fn chmod() -> CommandSpec {
    let mut base = flags(&["-f", "-h", "-v"]);
    base.push(recursive());
    let files = || vec![slot("file", File, OneOrMore)];

    let acl = vec![
        OptionRule::with("-a", &[String]),
        OptionRule::with("+a", &[String]),
        OptionRule::with("=a", &[String]),
    ];

    CommandSpec::new(CommandKind::Chmod)
        .form(
            CommandForm::new("chmod1", "chmod")
                .repeat(base.clone())
                .required(acl)
                .operands(files()),
        )
        .form(
            CommandForm::new("chmod2", "chmod")
                .repeat(base.clone())
                .required(flags(&["-E"]))
                .operands(files()),
        )
        .form(
            CommandForm::new("chmod3", "chmod")
                .repeat(base.clone())
                .required(flags(&["-C"]))
                .operands(files()),
        )
        .form(
            CommandForm::new("chmod4", "chmod")
                .repeat(base.clone())
                .required(flags(&["-N"]))
                .operands(files()),
        )
        .form(
            CommandForm::new("chmod5", "chmod")
                .repeat(base)
                .operands(vec![slot("mode", Permission, One), slot("file", File, OneOrMore)]),
        )
}

/// `chown [-fhnv] [-R [-H | -L | -P]] owner[:group] file ...`
pub fn chown() -> CommandSpec {
    let mut options = flags(&["-f", "-h", "-n", "-v"]);
    options.push(recursive());
    CommandSpec::new(CommandKind::Chown).form(
        CommandForm::new("chown", "chown")
            .repeat(options)
            .operands(vec![slot("owner", String, One), slot("file", File, OneOrMore)]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_two_form_precedes_variadic() {
        for spec in [mv(), cp(), ln()] {
            let names: Vec<&str> = spec.forms.iter().map(|f| f.name).collect();
            assert_eq!(names.len(), 2);
            assert!(names[0].ends_with('1'), "{:?}", names);
        }
    }

    #[test]
    fn test_chmod_has_five_forms_mode_last() {
        let spec = chmod();
        assert_eq!(spec.forms.len(), 5);
        assert_eq!(
            spec.forms[4].synopsis(),
            "chmod [-f | -h | -v | -R [-H | -L | -P]] mode file ..."
        );
    }
}
