use tracing::debug;

use super::types::*;
use crate::ast::PredicateNode;
use crate::parser::lexer::Token;
use crate::parser::types::ParseError;

/// Parse `tokens[start..]` as a `find` expression.
///
/// An empty tail yields `None`. Anything left over after a complete
/// expression, or any token that is neither an operator nor a primitive
/// where one is expected, fails the whole expression.
///
/// Operator precedence (highest to lowest):
/// 1. Parentheses `(` ... `)` and NOT: `!` or `-not`
/// 2. AND: `-and` or `-a` (implicit between adjacent expressions)
/// 3. OR: `-or` or `-o`
pub fn parse_predicate(
    tokens: &[Token],
    start: usize,
    max_depth: usize,
) -> Result<Option<PredicateNode>, ParseError> {
    if start >= tokens.len() {
        return Ok(None);
    }

    let mut parser = PredicateParser {
        tokens,
        pos: start,
        depth: 0,
        max_depth,
    };
    let root = parser.parse_or()?;

    if let Some(word) = parser.peek() {
        let message = if is_close(word) {
            format!("unexpected `{}'", word)
        } else {
            format!("unexpected `{}' after expression", word)
        };
        return Err(ParseError::invalid_expression(message, parser.pos));
    }

    debug!(target: "parse::predicate", depth = root.depth(), tokens = tokens.len() - start, "parsed expression");
    Ok(Some(root))
}

struct PredicateParser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> PredicateParser<'a> {
    fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.pos).map(|t| t.as_str())
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(ParseError::TooComplex {
                what: "expression nesting".to_string(),
                limit: self.max_depth,
                position: self.pos,
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Parse OR expressions (lowest precedence).
    fn parse_or(&mut self) -> Result<PredicateNode, ParseError> {
        let mut left = self.parse_and()?;
        while self.peek().is_some_and(is_or) {
            self.pos += 1;
            let right = self.parse_and()?;
            left = PredicateNode::or(left, right);
        }
        Ok(left)
    }

    /// Parse AND expressions (implicit or explicit `-a`).
    fn parse_and(&mut self) -> Result<PredicateNode, ParseError> {
        let mut left = self.parse_unary()?;
        while let Some(word) = self.peek() {
            if is_or(word) || is_close(word) {
                break;
            }
            if is_and(word) {
                self.pos += 1;
            }
            let right = self.parse_unary()?;
            left = PredicateNode::and(left, right);
        }
        Ok(left)
    }

    /// Parse NOT (unary) expressions.
    fn parse_unary(&mut self) -> Result<PredicateNode, ParseError> {
        if self.peek().is_some_and(is_not) {
            self.enter()?;
            self.pos += 1;
            // NOT can chain: ! ! expr
            let child = self.parse_unary()?;
            self.leave();
            return Ok(PredicateNode::not(child));
        }
        self.parse_primary()
    }

    /// Parse primary expressions (primitives and parenthesized groups).
    fn parse_primary(&mut self) -> Result<PredicateNode, ParseError> {
        let Some(word) = self.peek() else {
            return Err(ParseError::invalid_expression("expression expected", self.pos));
        };

        if is_open(word) {
            self.enter()?;
            self.pos += 1;
            let inner = self.parse_or()?;
            if !self.peek().is_some_and(is_close) {
                return Err(ParseError::invalid_expression("missing `)'", self.pos));
            }
            self.pos += 1;
            self.leave();
            return Ok(PredicateNode::paren(inner));
        }
        if is_close(word) {
            return Err(ParseError::invalid_expression(
                format!("unexpected `{}'", word),
                self.pos,
            ));
        }
        if is_and(word) || is_or(word) {
            return Err(ParseError::invalid_expression(
                format!("expression expected before `{}'", word),
                self.pos,
            ));
        }

        match word {
            "-true" => {
                self.pos += 1;
                return Ok(PredicateNode::True);
            }
            "-false" => {
                self.pos += 1;
                return Ok(PredicateNode::False);
            }
            _ => {}
        }

        match primitive_args(word) {
            Some(PrimitiveArgs::Fixed(kinds)) => self.parse_fixed(word, kinds.len()),
            Some(PrimitiveArgs::Command) => self.parse_command(word),
            None => Err(ParseError::invalid_expression(
                format!("unknown predicate `{}'", word),
                self.pos,
            )),
        }
    }

    fn parse_fixed(&mut self, name: &str, arity: usize) -> Result<PredicateNode, ParseError> {
        let start = self.pos + 1;
        let end = start + arity;
        if end > self.tokens.len() {
            return Err(ParseError::missing_payload(
                name,
                arity,
                self.tokens.len() - start,
                self.pos,
            ));
        }
        let args = self.tokens[start..end].iter().map(|t| t.value.clone()).collect();
        self.pos = end;
        Ok(PredicateNode::primitive(name, args))
    }

    /// `-exec utility [argument ...] ;` and the `{} +` batch form. The
    /// terminator is kept as the last argument.
    fn parse_command(&mut self, name: &str) -> Result<PredicateNode, ParseError> {
        let at = self.pos;
        let mut args: Vec<String> = Vec::new();
        let mut i = at + 1;
        while let Some(token) = self.tokens.get(i) {
            let word = token.as_str();
            let terminates = matches!(word, ";" | "\\;")
                || (word == "+" && args.last().is_some_and(|a| a == "{}"));
            if terminates {
                if args.is_empty() {
                    return Err(ParseError::missing_payload(name, 1, 0, at));
                }
                args.push(word.to_string());
                self.pos = i + 1;
                return Ok(PredicateNode::primitive(name, args));
            }
            args.push(word.to_string());
            i += 1;
        }
        // ran out before `;` or `{} +`
        Err(ParseError::missing_payload(name, args.len() + 1, args.len(), at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::tokenize;

    fn parse(line: &str) -> Result<Option<PredicateNode>, ParseError> {
        parse_predicate(&tokenize(line), 0, 16)
    }

    fn leaf(name: &str, arg: &str) -> PredicateNode {
        PredicateNode::primitive(name, vec![arg.to_string()])
    }

    #[test]
    fn test_empty_tail() {
        assert_eq!(parse("").unwrap(), None);
    }

    #[test]
    fn test_parse_name() {
        assert_eq!(parse("-name *.txt").unwrap(), Some(leaf("-name", "*.txt")));
    }

    #[test]
    fn test_parse_implicit_and() {
        let expr = parse("-name *.rs -type f").unwrap().unwrap();
        assert_eq!(expr, PredicateNode::and(leaf("-name", "*.rs"), leaf("-type", "f")));
    }

    #[test]
    fn test_and_binds_tighter_than_or() {
        let expr = parse("-name a -or -name b -and -type f").unwrap().unwrap();
        assert_eq!(
            expr,
            PredicateNode::or(
                leaf("-name", "a"),
                PredicateNode::and(leaf("-name", "b"), leaf("-type", "f"))
            )
        );
    }

    #[test]
    fn test_left_associative() {
        let expr = parse("-name a -o -name b -o -name c").unwrap().unwrap();
        assert_eq!(
            expr,
            PredicateNode::or(
                PredicateNode::or(leaf("-name", "a"), leaf("-name", "b")),
                leaf("-name", "c")
            )
        );
    }

    #[test]
    fn test_parse_not() {
        let expr = parse("! -name *.tmp").unwrap().unwrap();
        assert_eq!(expr, PredicateNode::not(leaf("-name", "*.tmp")));
        let expr = parse("-not -not -empty").unwrap().unwrap();
        assert_eq!(
            expr,
            PredicateNode::not(PredicateNode::not(PredicateNode::primitive("-empty", vec![])))
        );
    }

    #[test]
    fn test_parenthesized_group() {
        let expr = parse("\\( -name *.rs -o -name *.toml \\) -type f").unwrap().unwrap();
        assert_eq!(
            expr,
            PredicateNode::and(
                PredicateNode::paren(PredicateNode::or(
                    leaf("-name", "*.rs"),
                    leaf("-name", "*.toml")
                )),
                leaf("-type", "f")
            )
        );
    }

    #[test]
    fn test_true_false() {
        let expr = parse("-true -o -false").unwrap().unwrap();
        assert_eq!(expr, PredicateNode::or(PredicateNode::True, PredicateNode::False));
    }

    #[test]
    fn test_exec_semicolon() {
        let expr = parse("-exec grep -l TODO {} ;").unwrap().unwrap();
        match expr {
            PredicateNode::Primitive { name, args } => {
                assert_eq!(name, "-exec");
                assert_eq!(args, vec!["grep", "-l", "TODO", "{}", ";"]);
            }
            _ => panic!("Expected exec primitive, got {:?}", expr),
        }
    }

    #[test]
    fn test_exec_batch_then_more() {
        let expr = parse("-exec rm {} + -print").unwrap().unwrap();
        match expr {
            PredicateNode::And { left, right } => {
                assert_eq!(
                    *left,
                    PredicateNode::primitive(
                        "-exec",
                        vec!["rm".to_string(), "{}".to_string(), "+".to_string()]
                    )
                );
                assert_eq!(*right, PredicateNode::primitive("-print", vec![]));
            }
            _ => panic!("Expected And, got {:?}", expr),
        }
    }

    #[test]
    fn test_plus_without_placeholder_is_an_argument() {
        let expr = parse("-exec expr 1 + 2 \\;").unwrap().unwrap();
        assert!(matches!(expr, PredicateNode::Primitive { ref args, .. } if args.len() == 5));
    }

    #[test]
    fn test_exec_unterminated() {
        let err = parse("-exec rm {}").unwrap_err();
        assert!(matches!(err, ParseError::MissingPayload { ref flag, position: 0, .. } if flag == "-exec"));
        let err = parse("-okdir ;").unwrap_err();
        assert!(matches!(err, ParseError::MissingPayload { .. }));
    }

    #[test]
    fn test_missing_payload() {
        let err = parse("-name a -type").unwrap_err();
        assert_eq!(err, ParseError::missing_payload("-type", 1, 0, 2));
    }

    #[test]
    fn test_invalid_expressions() {
        assert!(matches!(parse("-bogus"), Err(ParseError::InvalidExpression { position: 0, .. })));
        assert!(matches!(parse("-name a )"), Err(ParseError::InvalidExpression { position: 2, .. })));
        assert!(matches!(parse("( -name a"), Err(ParseError::InvalidExpression { position: 3, .. })));
        assert!(matches!(parse("( )"), Err(ParseError::InvalidExpression { position: 1, .. })));
        assert!(matches!(parse("-name a -or"), Err(ParseError::InvalidExpression { position: 3, .. })));
        assert!(matches!(parse("-and -print"), Err(ParseError::InvalidExpression { position: 0, .. })));
        assert!(matches!(parse("-print foo"), Err(ParseError::InvalidExpression { position: 1, .. })));
    }

    #[test]
    fn test_depth_ceiling() {
        let line = format!("{} -print {}", "( ".repeat(20), ") ".repeat(20));
        let err = parse(&line).unwrap_err();
        assert!(matches!(err, ParseError::TooComplex { limit: 16, .. }));

        let line = format!("{}-print", "! ".repeat(17));
        assert!(matches!(parse(&line), Err(ParseError::TooComplex { .. })));
        let line = format!("{}-print", "! ".repeat(16));
        assert!(parse(&line).is_ok());
    }
}
