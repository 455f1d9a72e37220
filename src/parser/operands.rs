//! Positional operand allocation
//!
//! Slots are filled left to right. Each slot takes as many tokens as it may
//! while leaving enough for the minimum of the slots after it, so
//! `source ... target` binds every token but the last to `source`.

use regex_lite::Regex;

use crate::ast::Operand;
use crate::commands::types::{OperandSlot, PayloadKind};
use crate::parser::lexer::Token;
use crate::parser::types::Stop;

lazy_static::lazy_static! {
    // `u+x`, `-w`, `go=rx,a-t`
    static ref SYMBOLIC_MODE: Regex =
        Regex::new(r"^[ugoa]*([-+=][rwxXstugo]*)+(,[ugoa]*([-+=][rwxXstugo]*)+)*$").unwrap();
}

/// True for tokens that read as a flag: `-x`, `--long`, but not `-`, `-5`.
pub fn is_flag_like(word: &str) -> bool {
    match word.strip_prefix('-') {
        Some(rest) => !rest.is_empty() && !rest.starts_with(|c: char| c.is_ascii_digit()),
        None => false,
    }
}

/// A symbolic permission clause such as `-x` or `a-w,u+s`.
pub fn is_symbolic_mode(word: &str) -> bool {
    SYMBOLIC_MODE.is_match(word)
}

/// Whether `slot` may take `word`. Flag-looking words need a verbatim slot,
/// except symbolic modes in a permission slot.
fn admits(slot: &OperandSlot, word: &str) -> bool {
    slot.verbatim
        || !is_flag_like(word)
        || (slot.kind == PayloadKind::Permission && is_symbolic_mode(word))
}

/// Bind `tokens[start..end]` to `slots`; every token in the range must be used.
pub(crate) fn allocate(
    slots: &[OperandSlot],
    tokens: &[Token],
    start: usize,
    end: usize,
) -> Result<Vec<Operand>, Stop> {
    let needed: usize = slots.iter().map(|s| s.arity.min()).sum();
    if end - start < needed {
        return Err(Stop::Short(end));
    }

    let mut operands = Vec::new();
    let mut pos = start;
    let mut previous_took = true;

    for (i, slot) in slots.iter().enumerate() {
        let reserved: usize = slots[i + 1..].iter().map(|s| s.arity.min()).sum();
        let room = (end - pos).saturating_sub(reserved);
        let mut limit = slot.arity.max().map_or(room, |max| max.min(room));
        if slot.trailing && !previous_took {
            limit = 0;
        }

        let mut take = 0;
        while take < limit && admits(slot, tokens[pos + take].as_str()) {
            take += 1;
        }
        if take < slot.arity.min() {
            return Err(Stop::Short(pos + take));
        }

        operands.extend(tokens[pos..pos + take].iter().map(|t| Operand {
            slot: slot.name.to_string(),
            kind: slot.kind,
            value: t.value.clone(),
        }));
        pos += take;
        previous_took = take > 0;
    }

    if pos < end {
        return Err(Stop::Short(pos));
    }
    Ok(operands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::{Arity, PayloadKind};
    use crate::parser::lexer::tokenize;

    fn slot(name: &'static str, arity: Arity) -> OperandSlot {
        OperandSlot::new(name, PayloadKind::File, arity)
    }

    fn bound(operands: &[Operand]) -> Vec<(String, String)> {
        operands
            .iter()
            .map(|o| (o.slot.clone(), o.value.clone()))
            .collect()
    }

    fn pairs(list: &[(&str, &str)]) -> Vec<(String, String)> {
        list.iter().map(|(a, b)| (a.to_string(), b.to_string())).collect()
    }

    #[test]
    fn test_flag_like() {
        assert!(is_flag_like("-l"));
        assert!(is_flag_like("--color"));
        assert!(!is_flag_like("-"));
        assert!(!is_flag_like("-5"));
        assert!(!is_flag_like("+a"));
        assert!(!is_flag_like("file"));
    }

    #[test]
    fn test_last_token_is_destination() {
        let slots = vec![slot("source", Arity::OneOrMore), slot("directory", Arity::One)];
        let tokens = tokenize("a b c");
        let operands = allocate(&slots, &tokens, 0, 3).unwrap();
        assert_eq!(
            bound(&operands),
            pairs(&[("source", "a"), ("source", "b"), ("directory", "c")])
        );
    }

    #[test]
    fn test_exact_two_rejects_three() {
        let slots = vec![slot("source", Arity::One), slot("target", Arity::One)];
        let tokens = tokenize("a b c");
        assert_eq!(allocate(&slots, &tokens, 0, 3), Err(Stop::Short(2)));
        assert_eq!(allocate(&slots, &tokens, 0, 1), Err(Stop::Short(1)));
    }

    #[test]
    fn test_optional_slots_fill_right_to_left_by_reservation() {
        let slots = vec![
            slot("first", Arity::Optional),
            slot("incr", Arity::Optional),
            slot("last", Arity::One),
        ];
        let tokens = tokenize("1 10");
        let operands = allocate(&slots, &tokens, 0, 2).unwrap();
        assert_eq!(bound(&operands), pairs(&[("first", "1"), ("last", "10")]));
    }

    #[test]
    fn test_flag_like_tokens_need_verbatim_slot() {
        let slots = vec![slot("file", Arity::OneOrMore)];
        let tokens = tokenize("-x");
        assert_eq!(allocate(&slots, &tokens, 0, 1), Err(Stop::Short(0)));

        let slots = vec![
            OperandSlot::new("utility", PayloadKind::String, Arity::Optional),
            OperandSlot::new("argument", PayloadKind::String, Arity::ZeroOrMore).verbatim(),
        ];
        let tokens = tokenize("rm -rf");
        let operands = allocate(&slots, &tokens, 0, 2).unwrap();
        assert_eq!(bound(&operands), pairs(&[("utility", "rm"), ("argument", "-rf")]));
    }

    #[test]
    fn test_trailing_slot_needs_its_predecessor() {
        let slots = vec![
            OperandSlot::new("utility", PayloadKind::String, Arity::Optional),
            OperandSlot::new("argument", PayloadKind::String, Arity::ZeroOrMore)
                .verbatim()
                .trailing(),
        ];
        let tokens = tokenize("-Q rm");
        assert_eq!(allocate(&slots, &tokens, 0, 2), Err(Stop::Short(0)));

        let tokens = tokenize("rm -Q");
        let operands = allocate(&slots, &tokens, 0, 2).unwrap();
        assert_eq!(bound(&operands), pairs(&[("utility", "rm"), ("argument", "-Q")]));
    }

    #[test]
    fn test_symbolic_modes() {
        for mode in ["-x", "-w", "u+x", "go=rx", "a-w,u+s", "=", "+t"] {
            assert!(is_symbolic_mode(mode), "{}", mode);
        }
        for word in ["-R", "-E", "-f", "-h", "-v", "755", "file"] {
            assert!(!is_symbolic_mode(word), "{}", word);
        }

        let slots = vec![
            OperandSlot::new("mode", PayloadKind::Permission, Arity::One),
            slot("file", Arity::OneOrMore),
        ];
        let tokens = tokenize("-x script.sh");
        let operands = allocate(&slots, &tokens, 0, 2).unwrap();
        assert_eq!(bound(&operands), pairs(&[("mode", "-x"), ("file", "script.sh")]));

        // only permission slots get the exemption
        let tokens = tokenize("-x");
        assert_eq!(allocate(&[slot("file", Arity::One)], &tokens, 0, 1), Err(Stop::Short(0)));
    }

    #[test]
    fn test_empty_range() {
        let slots = vec![slot("file", Arity::ZeroOrMore)];
        assert_eq!(allocate(&slots, &[], 0, 0), Ok(vec![]));
    }
}
