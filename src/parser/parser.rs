//! Command Dispatcher
//!
//! Looks up the first token in the grammar registry, then tries each of the
//! command's forms in declaration order. The first form that consumes every
//! token wins. When none does, the failure that got farthest is reported.
//!
//! Form shape:
//!   form     ::= literal segment*
//!   segment  ::= required | repeat | operands | predicate
//!   required ::= one rule from a set, at this point
//!   repeat   ::= (rule from a set)*
//!   operands ::= slot* (greedy, reserving each later slot's minimum)

use tracing::{debug, trace};

use crate::ast::CommandAst;
use crate::commands::find::parser::parse_predicate;
use crate::commands::find::types::begins_expression;
use crate::commands::registry::{registry, GrammarRegistry};
use crate::commands::types::{CommandForm, CommandSpec, Segment};
use crate::parser::lexer::{tokenize, Token};
use crate::parser::operands::allocate;
use crate::parser::options::{match_option, repeat_options};
use crate::parser::types::{ParseError, ParserLimits, Stop};

/// Recognize one line with the built-in grammar and default limits.
pub fn parse(line: &str) -> Result<CommandAst, ParseError> {
    Recognizer::default().parse(line)
}

/// A recognizer bound to a grammar registry and a set of limits.
///
/// Holds no per-call state, so one instance can serve any number of
/// threads.
#[derive(Clone, Copy)]
pub struct Recognizer<'r> {
    registry: &'r GrammarRegistry,
    limits: ParserLimits,
}

impl Recognizer<'static> {
    pub fn new(limits: ParserLimits) -> Self {
        Self {
            registry: registry(),
            limits,
        }
    }
}

impl Default for Recognizer<'static> {
    fn default() -> Self {
        Self::new(ParserLimits::default())
    }
}

impl<'r> Recognizer<'r> {
    pub fn with_registry(registry: &'r GrammarRegistry, limits: ParserLimits) -> Self {
        Self { registry, limits }
    }

    pub fn limits(&self) -> ParserLimits {
        self.limits
    }

    pub fn parse(&self, line: &str) -> Result<CommandAst, ParseError> {
        let tokens = tokenize(line);
        self.parse_tokens(&tokens)
    }

    pub fn parse_tokens(&self, tokens: &[Token]) -> Result<CommandAst, ParseError> {
        let Some(first) = tokens.first() else {
            return Err(ParseError::EmptyInput);
        };
        if tokens.len() > self.limits.max_tokens {
            return Err(ParseError::TooComplex {
                what: "token count".to_string(),
                limit: self.limits.max_tokens,
                position: self.limits.max_tokens,
            });
        }

        let spec = self
            .registry
            .get(first.as_str())
            .ok_or_else(|| ParseError::UnknownCommand {
                name: first.value.clone(),
                position: 0,
            })?;

        let mut farthest: Option<Stop> = None;
        for form in &spec.forms {
            match self.try_form(spec, form, tokens) {
                Ok(ast) => {
                    debug!(target: "parse", command = spec.literal(), form = form.name, "recognized");
                    return Ok(ast);
                }
                Err(Stop::Failed(err @ ParseError::TooComplex { .. })) => return Err(err),
                Err(stop) => {
                    trace!(target: "parse", form = form.name, position = stop.position(), "form rejected");
                    if farthest.as_ref().map_or(true, |best| reaches_past(&stop, best)) {
                        farthest = Some(stop);
                    }
                }
            }
        }

        Err(match farthest {
            Some(Stop::Failed(err)) => err,
            Some(Stop::Short(position)) => self.no_matching_form(spec, tokens, position),
            None => self.no_matching_form(spec, tokens, 1),
        })
    }

    fn no_matching_form(&self, spec: &CommandSpec, tokens: &[Token], position: usize) -> ParseError {
        ParseError::NoMatchingForm {
            command: spec.literal().to_string(),
            forms: spec.forms.iter().map(|f| f.name.to_string()).collect(),
            position,
            token: tokens.get(position).map(|t| t.value.clone()),
        }
    }

    /// Run one form against the whole token stream.
    fn try_form(&self, spec: &CommandSpec, form: &CommandForm, tokens: &[Token]) -> Result<CommandAst, Stop> {
        let mut pos = 1;
        let mut options = Vec::new();
        let mut operands = Vec::new();
        let mut predicate = None;
        let mut predicate_tokens = 0;

        for (i, segment) in form.segments.iter().enumerate() {
            match segment {
                Segment::Required(rules) => match match_option(rules, tokens, pos, &options)? {
                    Some((capture, next)) => {
                        options.push(capture);
                        pos = next;
                    }
                    None => return Err(Stop::Short(pos)),
                },
                Segment::Repeat(rules) => {
                    pos = repeat_options(rules, tokens, pos, &mut options)?;
                }
                Segment::Operands(slots) => {
                    let end = if matches!(form.segments.get(i + 1), Some(Segment::Predicate)) {
                        expression_start(tokens, pos)
                    } else {
                        tokens.len()
                    };
                    operands.extend(allocate(slots, tokens, pos, end)?);
                    pos = end;
                }
                Segment::Predicate => {
                    predicate = parse_predicate(tokens, pos, self.limits.max_depth)?;
                    predicate_tokens = tokens.len() - pos;
                    pos = tokens.len();
                }
            }
        }

        if pos < tokens.len() {
            return Err(Stop::Short(pos));
        }

        Ok(CommandAst {
            command: spec.kind,
            form: form.name.to_string(),
            options,
            operands,
            predicate,
            predicate_tokens,
        })
    }
}

/// First token at or after `pos` that starts a `find` expression.
fn expression_start(tokens: &[Token], pos: usize) -> usize {
    tokens[pos..]
        .iter()
        .position(|t| begins_expression(t.as_str()))
        .map_or(tokens.len(), |offset| pos + offset)
}

/// Farther wins; on a tie a hard failure beats running out of grammar.
fn reaches_past(candidate: &Stop, best: &Stop) -> bool {
    match candidate.position().cmp(&best.position()) {
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Less => false,
        std::cmp::Ordering::Equal => matches!((candidate, best), (Stop::Failed(_), Stop::Short(_))),
    }
}
