use regex_lite::Regex;

use crate::commands::types::PayloadKind;
use PayloadKind::*;

/// Payload shape of a `find` primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveArgs {
    Fixed(&'static [PayloadKind]),
    /// `utility [argument ...] ;` or `utility [argument ...] {} +`
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Primitive {
    pub name: &'static str,
    pub args: PrimitiveArgs,
}

const fn fixed(name: &'static str, args: &'static [PayloadKind]) -> Primitive {
    Primitive {
        name,
        args: PrimitiveArgs::Fixed(args),
    }
}

const fn command(name: &'static str) -> Primitive {
    Primitive {
        name,
        args: PrimitiveArgs::Command,
    }
}

/// Leaf tests, actions and positional options of the expression language.
pub const PRIMITIVES: &[Primitive] = &[
    fixed("-Bmin", &[Time]),
    fixed("-Bnewer", &[File]),
    fixed("-Btime", &[Time]),
    fixed("-amin", &[Time]),
    fixed("-anewer", &[File]),
    fixed("-atime", &[Time]),
    fixed("-cmin", &[Time]),
    fixed("-cnewer", &[File]),
    fixed("-ctime", &[Time]),
    fixed("-d", &[]),
    fixed("-delete", &[]),
    fixed("-depth", &[]),
    fixed("-empty", &[]),
    command("-exec"),
    command("-execdir"),
    fixed("-false", &[]),
    fixed("-flags", &[String]),
    fixed("-fstype", &[String]),
    fixed("-gid", &[Number]),
    fixed("-group", &[String]),
    fixed("-ignore_readdir_race", &[]),
    fixed("-ilname", &[String]),
    fixed("-iname", &[String]),
    fixed("-inum", &[Number]),
    fixed("-ipath", &[String]),
    fixed("-iregex", &[String]),
    fixed("-iwholename", &[String]),
    fixed("-links", &[Number]),
    fixed("-lname", &[String]),
    fixed("-ls", &[]),
    fixed("-maxdepth", &[Number]),
    fixed("-mindepth", &[Number]),
    fixed("-mmin", &[Time]),
    fixed("-mnewer", &[File]),
    fixed("-mount", &[]),
    fixed("-mtime", &[Time]),
    fixed("-name", &[String]),
    fixed("-newer", &[File]),
    fixed("-nogroup", &[]),
    fixed("-noignore_readdir_race", &[]),
    fixed("-noleaf", &[]),
    fixed("-nouser", &[]),
    command("-ok"),
    command("-okdir"),
    fixed("-path", &[String]),
    fixed("-perm", &[Permission]),
    fixed("-print", &[]),
    fixed("-print0", &[]),
    fixed("-prune", &[]),
    fixed("-quit", &[]),
    fixed("-regex", &[String]),
    fixed("-samefile", &[File]),
    fixed("-size", &[Size]),
    fixed("-true", &[]),
    fixed("-type", &[String]),
    fixed("-uid", &[Number]),
    fixed("-user", &[String]),
    fixed("-wholename", &[String]),
    fixed("-xattr", &[]),
    fixed("-xattrname", &[String]),
    fixed("-xdev", &[]),
];

lazy_static::lazy_static! {
    /// `-newerXY`: X and Y pick access, birth, change or modification time;
    /// Y may also be `t` for a literal date.
    static ref NEWER_XY: Regex = Regex::new(r"^-newer[aBcm][aBcmt]$").unwrap();
}

/// Payload shape of the primitive spelled `name`, if there is one.
pub fn primitive_args(name: &str) -> Option<PrimitiveArgs> {
    if let Some(primitive) = PRIMITIVES.iter().find(|p| p.name == name) {
        return Some(primitive.args);
    }
    if NEWER_XY.is_match(name) {
        let reference: &'static [PayloadKind] = if name.ends_with('t') { &[Date] } else { &[File] };
        return Some(PrimitiveArgs::Fixed(reference));
    }
    None
}

/// Operator spellings.
pub fn is_not(word: &str) -> bool {
    matches!(word, "!" | "-not")
}

pub fn is_and(word: &str) -> bool {
    matches!(word, "-a" | "-and")
}

pub fn is_or(word: &str) -> bool {
    matches!(word, "-o" | "-or")
}

pub fn is_open(word: &str) -> bool {
    matches!(word, "(" | "\\(")
}

pub fn is_close(word: &str) -> bool {
    matches!(word, ")" | "\\)")
}

/// Whether `word` ends `find`'s path operands and starts the expression.
pub fn begins_expression(word: &str) -> bool {
    word.starts_with('-') || is_open(word) || is_close(word) || is_not(word)
}
