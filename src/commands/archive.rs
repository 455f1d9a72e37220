// src/commands/archive.rs
//! Archive and compression utilities.

use crate::ast::CommandKind;
use crate::commands::types::{flags, Arity, CommandForm, CommandSpec, OperandSlot, OptionRule, PayloadKind};
use Arity::*;
use PayloadKind::*;

/// Options shared by every tar mode.
fn tar_options() -> Vec<OptionRule> {
    let mut options = flags(&[
        "-j", "-J", "-k", "-L", "-l", "-m", "-n", "-O", "-o", "-P", "-p", "-q", "-S", "-U", "-v", "-w",
        "-y", "-z", "-Z", "--gzip", "--bzip2", "--xz", "--verbose", "--totals", "--same-owner",
        "--no-same-owner", "--numeric-owner", "--keep-old-files", "--to-stdout", "--wildcards",
    ]);
    options.extend([
        OptionRule::with("-b", &[Number]),
        OptionRule::with("-C", &[File]),
        OptionRule::with("-f", &[File]).once(),
        OptionRule::with("-I", &[File]),
        OptionRule::with("-T", &[File]),
        OptionRule::with("-X", &[File]),
        OptionRule::with("-s", &[String]),
        OptionRule::with("--exclude", &[String]),
        OptionRule::with("--include", &[String]),
        OptionRule::with("--format", &[String]),
        OptionRule::with("--newer", &[Date]),
        OptionRule::with("--newer-mtime", &[Date]),
        OptionRule::with("--strip-components", &[Number]),
        OptionRule::joined("--exclude=", String),
        OptionRule::joined("--include=", String),
        OptionRule::joined("--format=", String),
        OptionRule::joined("--newer=", Date),
        OptionRule::joined("--newer-mtime=", Date),
        OptionRule::joined("--strip-components=", Number),
        OptionRule::joined("--file=", File),
        OptionRule::joined("--directory=", File),
    ]);
    options
}

/// `tar -c [options] [files | directories]`
/// `tar -r -f archive-file [options] [files | directories]`
/// `tar -u -f archive-file [options] [files | directories]`
/// `tar -t [options] [patterns]`
/// `tar -x [options] [patterns]`
///
/// The mode flag must come first. Every option list overlaps, so the mode
/// is what picks the form.
pub fn tar() -> CommandSpec {
    let archive = || vec![OptionRule::with("-f", &[File])];
    let members = |name: &'static str| vec![OperandSlot::new(name, File, ZeroOrMore)];

    CommandSpec::new(CommandKind::Tar)
        .form(
            CommandForm::new("tar1", "tar")
                .required(flags(&["-c", "--create"]))
                .repeat(tar_options())
                .operands(members("file")),
        )
        .form(
            CommandForm::new("tar2", "tar")
                .required(flags(&["-r", "--append"]))
                .required(archive())
                .repeat(tar_options())
                .operands(members("file")),
        )
        .form(
            CommandForm::new("tar3", "tar")
                .required(flags(&["-u", "--update"]))
                .required(archive())
                .repeat(tar_options())
                .operands(members("file")),
        )
        .form(
            CommandForm::new("tar4", "tar")
                .required(flags(&["-t", "--list"]))
                .repeat(tar_options())
                .operands(members("pattern")),
        )
        .form(
            CommandForm::new("tar5", "tar")
                .required(flags(&["-x", "--extract"]))
                .repeat(tar_options())
                .operands(members("pattern")),
        )
}

/// `zip [-aABcdDeEfFghjklLmoqrRSTuvVwXyz!@$] [-b path] [-n suffixes] [-t date] [-tt date] [zipfile [file ...]] [-xi list]`
pub fn zip() -> CommandSpec {
    let mut options = flags(&[
        "-a", "-A", "-B", "-c", "-d", "-D", "-e", "-E", "-f", "-F", "-FF", "-g", "-h", "-j", "-k", "-l",
        "-L", "-m", "-o", "-q", "-r", "-R", "-S", "-T", "-u", "-v", "-V", "-w", "-X", "-y", "-z", "-0",
        "-1", "-2", "-3", "-4", "-5", "-6", "-7", "-8", "-9", "-@", "-$", "--recurse-paths", "--quiet",
    ]);
    options.extend([
        OptionRule::with("-b", &[File]),
        OptionRule::with("-n", &[String]),
        OptionRule::with("-t", &[Date]),
        OptionRule::with("-tt", &[Date]),
        OptionRule::with("-P", &[String]),
        OptionRule::with("-x", &[String]),
        OptionRule::with("-i", &[String]),
    ]);
    CommandSpec::new(CommandKind::Zip).form(
        CommandForm::new("zip", "zip").repeat(options).operands(vec![
            OperandSlot::new("zipfile", File, Optional),
            OperandSlot::new("file", File, ZeroOrMore),
        ]),
    )
}

/// `unzip [-Z] [-cflptTuvz[abjnoqsCDKLMUVWX$/:^]] file[.zip] [file(s) ...] [-x xfile(s) ...] [-d exdir]`
pub fn unzip() -> CommandSpec {
    let mut options = flags(&[
        "-Z", "-c", "-f", "-l", "-p", "-t", "-T", "-u", "-v", "-z", "-a", "-b", "-j", "-n", "-o", "-q",
        "-qq", "-s", "-C", "-D", "-K", "-L", "-M", "-U", "-V", "-W", "-X",
    ]);
    options.extend([
        OptionRule::with("-d", &[File]),
        OptionRule::with("-x", &[File]),
        OptionRule::with("-P", &[String]),
    ]);
    CommandSpec::new(CommandKind::Unzip).form(
        CommandForm::new("unzip", "unzip").repeat(options).operands(vec![
            OperandSlot::new("zipfile", File, One),
            OperandSlot::new("file", File, ZeroOrMore),
        ]),
    )
}

/// `gzip [-cdfhkLNnqrtVv] [-S suffix] [-#] [file ...]`
pub fn gzip() -> CommandSpec {
    let mut options = flags(&[
        "-c", "-d", "-f", "-h", "-k", "-L", "-N", "-n", "-q", "-r", "-t", "-V", "-v", "-l", "-1", "-2",
        "-3", "-4", "-5", "-6", "-7", "-8", "-9", "--best", "--fast",
    ]);
    options.push(OptionRule::with("-S", &[String]));
    CommandSpec::new(CommandKind::Gzip).form(
        CommandForm::new("gzip", "gzip")
            .repeat(options)
            .operands(vec![OperandSlot::new("file", File, ZeroOrMore)]),
    )
}
