// src/commands/shell.rs
//! Listing, navigation, path and process-launching utilities.

use crate::ast::CommandKind;
use crate::commands::types::{flags, Arity, CommandForm, CommandSpec, OperandSlot, OptionRule, PayloadKind};
use Arity::*;
use PayloadKind::*;

/// `ls [-ABCFGHLOPRSTUW@abcdefghiklmnopqrstuwx1%] [file ...]`
pub fn ls() -> CommandSpec {
    let mut options = flags(&[
        "-A", "-B", "-C", "-F", "-G", "-H", "-L", "-O", "-P", "-R", "-S", "-T", "-U", "-W", "-@", "-a",
        "-b", "-c", "-d", "-e", "-f", "-g", "-h", "-i", "-k", "-l", "-m", "-n", "-o", "-p", "-q", "-r",
        "-s", "-t", "-u", "-w", "-x", "-1", "-%", "--all", "--human-readable", "--color",
    ]);
    options.extend([
        OptionRule::with("-D", &[String]),
        OptionRule::joined("--color=", String),
        OptionRule::joined("--sort=", String),
        OptionRule::joined("--time-style=", String),
    ]);
    CommandSpec::new(CommandKind::Ls).form(
        CommandForm::new("ls", "ls")
            .repeat(options)
            .operands(vec![OperandSlot::new("file", File, ZeroOrMore)]),
    )
}

/// `du [-H | -L | -P] [-a | -s | -d depth] [-c] [-h | -k | -m | -g] [-x] [-I mask] [file ...]`
pub fn du() -> CommandSpec {
    let mut options = flags(&[
        "-H", "-L", "-P", "-a", "-s", "-c", "-h", "-k", "-m", "-g", "-x", "-A", "-n", "-r",
    ]);
    options.extend([
        OptionRule::with("-d", &[Number]),
        OptionRule::with("-I", &[String]),
        OptionRule::with("-B", &[Size]),
        OptionRule::with("-t", &[Size]),
        OptionRule::joined("--max-depth=", Number),
        OptionRule::joined("--exclude=", String),
        OptionRule::joined("--threshold=", Size),
    ]);
    CommandSpec::new(CommandKind::Du).form(
        CommandForm::new("du", "du")
            .repeat(options)
            .operands(vec![OperandSlot::new("file", File, ZeroOrMore)]),
    )
}

/// `cd [-L | -P] [directory]`, where `directory` may be `-`.
pub fn cd() -> CommandSpec {
    CommandSpec::new(CommandKind::Cd).form(
        CommandForm::new("cd", "cd")
            .repeat(flags(&["-L", "-P", "-e", "-@"]))
            .operands(vec![OperandSlot::new("directory", File, Optional)]),
    )
}

/// `sh [-abCEefhimnuvx] [-o option] [-c string] [script [arg ...]]`
pub fn sh() -> CommandSpec {
    let mut options = flags(&[
        "-a", "-b", "-C", "-E", "-e", "-f", "-h", "-i", "-l", "-m", "-n", "-s", "-u", "-v", "-x",
    ]);
    options.extend([
        OptionRule::with("-o", &[String]),
        OptionRule::with("-c", &[String]),
    ]);
    CommandSpec::new(CommandKind::Sh).form(CommandForm::new("sh", "sh").repeat(options).operands(vec![
        OperandSlot::new("script", File, Optional),
        OperandSlot::new("arg", String, ZeroOrMore).verbatim().trailing(),
    ]))
}

/// `echo [-neE] [string ...]`
pub fn echo() -> CommandSpec {
    CommandSpec::new(CommandKind::Echo).form(
        CommandForm::new("echo", "echo")
            .repeat(flags(&["-n", "-e", "-E"]))
            .operands(vec![OperandSlot::new("string", String, ZeroOrMore).verbatim()]),
    )
}

/// `seq [-w] [-f format] [-s string] [-t string] [first [incr]] last`
pub fn seq() -> CommandSpec {
    let mut options = flags(&["-w"]);
    options.extend([
        OptionRule::with("-f", &[String]),
        OptionRule::with("-s", &[String]),
        OptionRule::with("-t", &[String]),
    ]);
    CommandSpec::new(CommandKind::Seq).form(CommandForm::new("seq", "seq").repeat(options).operands(vec![
        OperandSlot::new("first", Number, Optional),
        OperandSlot::new("incr", Number, Optional),
        OperandSlot::new("last", Number, One),
    ]))
}

/// `xargs [-0opt] [-E eofstr] [-I replstr [-R replacements]] [-J replstr] [-L number] [-n number [-x]] [-P maxprocs] [-s size] [utility [argument ...]]`
pub fn xargs() -> CommandSpec {
    let mut options = flags(&["-0", "-o", "-p", "-t", "-r"]);
    options.extend([
        OptionRule::with("-E", &[String]),
        OptionRule::with("-I", &[String]).nesting(vec![OptionRule::with("-R", &[Number])]),
        OptionRule::with("-J", &[String]),
        OptionRule::with("-L", &[Number]),
        OptionRule::with("-n", &[Number]).nesting(flags(&["-x"])),
        OptionRule::with("-P", &[Number]),
        OptionRule::with("-s", &[Size]),
        OptionRule::with("-d", &[String]),
    ]);
    CommandSpec::new(CommandKind::Xargs).form(
        CommandForm::new("xargs", "xargs").repeat(options).operands(vec![
            OperandSlot::new("utility", String, Optional),
            OperandSlot::new("argument", String, ZeroOrMore).verbatim().trailing(),
        ]),
    )
}

/// `basename string [suffix]`
/// `basename [-a] [-s suffix] string [...]`
pub fn basename() -> CommandSpec {
    CommandSpec::new(CommandKind::Basename)
        .form(CommandForm::new("basename1", "basename").operands(vec![
            OperandSlot::new("string", String, One),
            OperandSlot::new("suffix", String, Optional),
        ]))
        .form(
            CommandForm::new("basename2", "basename")
                .repeat(vec![OptionRule::flag("-a"), OptionRule::with("-s", &[String])])
                .operands(vec![OperandSlot::new("string", String, OneOrMore)]),
        )
}

/// `dirname string [...]`
pub fn dirname() -> CommandSpec {
    CommandSpec::new(CommandKind::Dirname).form(
        CommandForm::new("dirname", "dirname").operands(vec![OperandSlot::new("string", String, OneOrMore)]),
    )
}

/// `readlink [-efmnqsvz] [file ...]`
pub fn readlink() -> CommandSpec {
    CommandSpec::new(CommandKind::Readlink).form(
        CommandForm::new("readlink", "readlink")
            .repeat(flags(&["-e", "-f", "-m", "-n", "-q", "-s", "-v", "-z"]))
            .operands(vec![OperandSlot::new("file", File, ZeroOrMore)]),
    )
}
