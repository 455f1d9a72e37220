//! Option matcher and repetition engine
//!
//! The matcher consumes one flag plus its fixed payload from a candidate
//! rule set. The repetition engine drives it until nothing matches, which
//! gives the "any of these options, any order, any count" loops used by
//! almost every command.

use tracing::trace;

use crate::ast::CapturedOption;
use crate::commands::types::OptionRule;
use crate::parser::lexer::Token;
use crate::parser::types::ParseError;

/// Try `rules` in declaration order at `pos`.
///
/// Returns the capture and the cursor after it, or `None` when no rule's
/// literal matches. A matching literal without enough payload tokens is a
/// hard [`ParseError::MissingPayload`].
pub fn match_option(
    rules: &[OptionRule],
    tokens: &[Token],
    pos: usize,
    captured: &[CapturedOption],
) -> Result<Option<(CapturedOption, usize)>, ParseError> {
    let Some(token) = tokens.get(pos) else {
        return Ok(None);
    };
    let word = token.as_str();

    for rule in rules {
        if rule.once && captured.iter().any(|c| c.flag == rule.flag) {
            continue;
        }

        if rule.joined {
            let Some(value) = word.strip_prefix(rule.flag) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            let capture = CapturedOption {
                flag: rule.flag.to_string(),
                payload: vec![value.to_string()],
                nested: Vec::new(),
                joined: true,
            };
            trace!(target: "parse", flag = rule.flag, pos, "matched joined option");
            return Ok(Some((capture, pos + 1)));
        }

        if word != rule.flag {
            continue;
        }

        let start = pos + 1;
        let end = start + rule.arity();
        if end > tokens.len() {
            return Err(ParseError::missing_payload(
                rule.flag,
                rule.arity(),
                tokens.len() - start,
                pos,
            ));
        }
        let payload: Vec<String> = tokens[start..end].iter().map(|t| t.value.clone()).collect();

        let mut nested = Vec::new();
        let next = repeat_options(&rule.nested, tokens, end, &mut nested)?;
        trace!(target: "parse", flag = rule.flag, pos, next, "matched option");
        return Ok(Some((
            CapturedOption {
                flag: rule.flag.to_string(),
                payload,
                nested,
                joined: false,
            },
            next,
        )));
    }

    Ok(None)
}

/// Match `rules` zero or more times from `pos`, appending to `captured` in
/// encounter order. Returns the cursor after the last capture.
pub fn repeat_options(
    rules: &[OptionRule],
    tokens: &[Token],
    mut pos: usize,
    captured: &mut Vec<CapturedOption>,
) -> Result<usize, ParseError> {
    if rules.is_empty() {
        return Ok(pos);
    }
    while let Some((capture, next)) = match_option(rules, tokens, pos, captured)? {
        // every rule consumes at least its literal
        debug_assert!(next > pos);
        captured.push(capture);
        pos = next;
    }
    Ok(pos)
}
