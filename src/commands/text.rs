// src/commands/text.rs
//! Line- and field-oriented text utilities.

use crate::ast::CommandKind;
use crate::commands::types::{flags, Arity, CommandForm, CommandSpec, OperandSlot, OptionRule, PayloadKind};
use Arity::*;
use PayloadKind::*;

fn files() -> Vec<OperandSlot> {
    vec![OperandSlot::new("file", File, ZeroOrMore)]
}

/// `sort [-bcCdfghiRMmnrsuVz] [-k field1[,field2]] [-S memsize] [-T dir] [-t char] [-o output] [file ...]`
pub fn sort() -> CommandSpec {
    let mut options = flags(&[
        "-b", "-c", "-C", "-d", "-f", "-g", "-h", "-i", "-R", "-M", "-m", "-n", "-r", "-s", "-u", "-V",
        "-z",
    ]);
    options.extend([
        OptionRule::with("-k", &[String]),
        OptionRule::with("-S", &[Size]),
        OptionRule::with("-T", &[File]),
        OptionRule::with("-t", &[String]),
        OptionRule::with("-o", &[File]).once(),
        OptionRule::joined("--parallel=", Number),
        OptionRule::joined("--buffer-size=", Size),
        OptionRule::joined("--field-separator=", String),
        OptionRule::joined("--key=", String),
    ]);
    CommandSpec::new(CommandKind::Sort).form(CommandForm::new("sort", "sort").repeat(options).operands(files()))
}

fn grep_switches() -> Vec<OptionRule> {
    let mut options = flags(&[
        "-a", "-b", "-c", "-E", "-F", "-G", "-H", "-h", "-I", "-i", "-J", "-L", "-l", "-n", "-O", "-o",
        "-p", "-q", "-R", "-r", "-S", "-s", "-U", "-V", "-v", "-w", "-x", "-Z", "-z", "--null",
        "--line-buffered", "--color", "--colour",
    ]);
    options.extend([
        OptionRule::with("-A", &[Number]),
        OptionRule::with("-B", &[Number]),
        OptionRule::with("-C", &[Number]),
        OptionRule::with("-D", &[String]),
        OptionRule::with("-d", &[String]),
        OptionRule::with("-m", &[Number]),
        OptionRule::with("--label", &[String]),
        OptionRule::joined("--binary-files=", String),
        OptionRule::joined("--color=", String),
        OptionRule::joined("--colour=", String),
        OptionRule::joined("--context=", Number),
        OptionRule::joined("--include=", String),
        OptionRule::joined("--exclude=", String),
        OptionRule::joined("--exclude-dir=", String),
    ]);
    options
}

fn grep_patterns() -> Vec<OptionRule> {
    vec![
        OptionRule::with("-e", &[String]),
        OptionRule::with("-f", &[File]),
    ]
}

/// Shared by grep, egrep and fgrep; the pattern either comes from `-e`/`-f`
/// or is the first operand.
fn grep_family(kind: CommandKind, literal: &'static str, names: [&'static str; 2]) -> CommandSpec {
    let mut all = grep_switches();
    all.extend(grep_patterns());

    CommandSpec::new(kind)
        .form(
            CommandForm::new(names[0], literal)
                .repeat(grep_switches())
                .required(grep_patterns())
                .repeat(all)
                .operands(files()),
        )
        .form(
            CommandForm::new(names[1], literal)
                .repeat(grep_switches())
                .operands(vec![
                    OperandSlot::new("pattern", String, One),
                    OperandSlot::new("file", File, ZeroOrMore),
                ]),
        )
}

/// `grep [-abcdDEFGHhIiJLlmnOopqRSsUVvwxZ] [-A num] [-B num] [-C num] [-e pattern] [-f file] [pattern] [file ...]`
pub fn grep() -> CommandSpec {
    grep_family(CommandKind::Grep, "grep", ["grep1", "grep2"])
}

pub fn egrep() -> CommandSpec {
    grep_family(CommandKind::Egrep, "egrep", ["egrep1", "egrep2"])
}

pub fn fgrep() -> CommandSpec {
    grep_family(CommandKind::Fgrep, "fgrep", ["fgrep1", "fgrep2"])
}

/// `sed [-Ealnru] -e command [-e command] ... [-f command_file] [-i] [file ...]`
/// `sed [-Ealnru] [-i] command [file ...]`
pub fn sed() -> CommandSpec {
    let switches = || {
        let mut options = flags(&["-E", "-a", "-l", "-n", "-r", "-u", "-i", "-s", "-z"]);
        options.push(OptionRule::joined("--in-place=", String));
        options
    };
    let scripts = || {
        vec![
            OptionRule::with("-e", &[String]),
            OptionRule::with("-f", &[File]),
        ]
    };
    let mut all = switches();
    all.extend(scripts());

    CommandSpec::new(CommandKind::Sed)
        .form(
            CommandForm::new("sed1", "sed")
                .repeat(switches())
                .required(scripts())
                .repeat(all)
                .operands(files()),
        )
        .form(
            CommandForm::new("sed2", "sed")
                .repeat(switches())
                .operands(vec![
                    OperandSlot::new("command", String, One),
                    OperandSlot::new("file", File, ZeroOrMore),
                ]),
        )
}

/// `awk [-F fs] [-v var=value] -f progfile [file ...]`
/// `awk [-F fs] [-v var=value] 'prog' [file ...]`
pub fn awk() -> CommandSpec {
    let settings = || {
        vec![
            OptionRule::with("-F", &[String]),
            OptionRule::with("-v", &[String]),
        ]
    };
    let progfile = OptionRule::with("-f", &[File]);
    let mut all = settings();
    all.push(progfile.clone());

    CommandSpec::new(CommandKind::Awk)
        .form(
            CommandForm::new("awk1", "awk")
                .repeat(settings())
                .required(vec![progfile])
                .repeat(all)
                .operands(files()),
        )
        .form(
            CommandForm::new("awk2", "awk")
                .repeat(settings())
                .operands(vec![
                    OperandSlot::new("program", String, One),
                    OperandSlot::new("file", File, ZeroOrMore),
                ]),
        )
}

/// `wc [-clmw] [file ...]`
pub fn wc() -> CommandSpec {
    CommandSpec::new(CommandKind::Wc)
        .form(CommandForm::new("wc", "wc").repeat(flags(&["-c", "-l", "-m", "-w", "-L"])).operands(files()))
}

/// `head [-n count | -c bytes] [file ...]`
pub fn head() -> CommandSpec {
    CommandSpec::new(CommandKind::Head).form(
        CommandForm::new("head", "head")
            .repeat(vec![
                OptionRule::with("-n", &[Number]),
                OptionRule::with("-c", &[Size]),
                OptionRule::flag("-q"),
                OptionRule::flag("-v"),
            ])
            .operands(files()),
    )
}

/// `tail [-F | -f | -r] [-q] [-b number | -c number | -n number] [file ...]`
pub fn tail() -> CommandSpec {
    let mut options = flags(&["-F", "-f", "-r", "-q"]);
    options.extend([
        OptionRule::with("-b", &[Number]),
        OptionRule::with("-c", &[Number]),
        OptionRule::with("-n", &[Number]),
    ]);
    CommandSpec::new(CommandKind::Tail).form(CommandForm::new("tail", "tail").repeat(options).operands(files()))
}

/// `cat [-benstuv] [file ...]`
pub fn cat() -> CommandSpec {
    CommandSpec::new(CommandKind::Cat).form(
        CommandForm::new("cat", "cat")
            .repeat(flags(&["-b", "-e", "-n", "-s", "-t", "-u", "-v", "-A", "-E", "-T"]))
            .operands(files()),
    )
}

/// `cut -b list [-n] [file ...]`
/// `cut -c list [file ...]`
/// `cut -f list [-w | -d delim] [-s] [file ...]`
pub fn cut() -> CommandSpec {
    let bytes = flags(&["-n"]);
    let fields = || {
        vec![
            OptionRule::flag("-w"),
            OptionRule::with("-d", &[String]),
            OptionRule::flag("-s"),
        ]
    };
    CommandSpec::new(CommandKind::Cut)
        .form(
            CommandForm::new("cut1", "cut")
                .repeat(bytes.clone())
                .required(vec![OptionRule::with("-b", &[String])])
                .repeat(bytes)
                .operands(files()),
        )
        .form(
            CommandForm::new("cut2", "cut")
                .required(vec![OptionRule::with("-c", &[String])])
                .operands(files()),
        )
        .form(
            CommandForm::new("cut3", "cut")
                .repeat(fields())
                .required(vec![OptionRule::with("-f", &[String])])
                .repeat(fields())
                .operands(files()),
        )
}

/// `uniq [-c | -d | -D | -u] [-i] [-f num] [-s chars] [input_file [output_file]]`
pub fn uniq() -> CommandSpec {
    let mut options = flags(&["-c", "-d", "-D", "-u", "-i"]);
    options.extend([
        OptionRule::with("-f", &[Number]),
        OptionRule::with("-s", &[Number]),
    ]);
    CommandSpec::new(CommandKind::Uniq).form(
        CommandForm::new("uniq", "uniq").repeat(options).operands(vec![
            OperandSlot::new("input_file", File, Optional),
            OperandSlot::new("output_file", File, Optional),
        ]),
    )
}

/// `tee [-ai] [file ...]`
pub fn tee() -> CommandSpec {
    CommandSpec::new(CommandKind::Tee)
        .form(CommandForm::new("tee", "tee").repeat(flags(&["-a", "-i"])).operands(files()))
}

/// `diff [-aBbdipTtw] [-c | -e | -f | -n | -q | -u | -y] [-I pattern] [-L label] [-x pattern] [-X file] [-r] [-N] [-S name] file1 file2`
pub fn diff() -> CommandSpec {
    let mut options = flags(&[
        "-a", "-B", "-b", "-d", "-i", "-p", "-T", "-t", "-w", "-c", "-e", "-f", "-n", "-q", "-u", "-y", "-r",
        "-N", "-s", "--brief",
    ]);
    options.extend([
        OptionRule::with("-C", &[Number]),
        OptionRule::with("-U", &[Number]),
        OptionRule::with("-D", &[String]),
        OptionRule::with("-I", &[String]),
        OptionRule::with("-L", &[String]),
        OptionRule::with("-x", &[String]),
        OptionRule::with("-X", &[File]),
        OptionRule::with("-S", &[File]),
        OptionRule::joined("--exclude=", String),
    ]);
    CommandSpec::new(CommandKind::Diff).form(CommandForm::new("diff", "diff").repeat(options).operands(vec![
        OperandSlot::new("file1", File, One),
        OperandSlot::new("file2", File, One),
    ]))
}

/// `comm [-123i] file1 file2`
pub fn comm() -> CommandSpec {
    CommandSpec::new(CommandKind::Comm).form(
        CommandForm::new("comm", "comm")
            .repeat(flags(&["-1", "-2", "-3", "-i"]))
            .operands(vec![
                OperandSlot::new("file1", File, One),
                OperandSlot::new("file2", File, One),
            ]),
    )
}
