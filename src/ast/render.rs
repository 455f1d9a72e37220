//! Rendering ASTs back to tokens
//!
//! The output re-parses to an equal AST. `-and` is rendered as juxtaposition
//! since both spellings produce the same tree.

use super::types::{CapturedOption, CommandAst, PredicateNode};

impl CommandAst {
    pub fn render(&self) -> Vec<String> {
        let mut out = vec![self.command.as_str().to_string()];
        for option in &self.options {
            render_option(option, &mut out);
        }
        out.extend(self.operands.iter().map(|o| o.value.clone()));
        if let Some(predicate) = &self.predicate {
            predicate.render_into(&mut out);
        }
        out
    }

    /// The rendered tokens joined by single spaces.
    pub fn to_line(&self) -> String {
        self.render().join(" ")
    }
}

fn render_option(option: &CapturedOption, out: &mut Vec<String>) {
    if option.joined {
        out.push(format!("{}{}", option.flag, option.payload.concat()));
    } else {
        out.push(option.flag.clone());
        out.extend(option.payload.iter().cloned());
    }
    for nested in &option.nested {
        render_option(nested, out);
    }
}

impl PredicateNode {
    pub fn render(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut Vec<String>) {
        match self {
            PredicateNode::Primitive { name, args } => {
                out.push(name.clone());
                out.extend(args.iter().cloned());
            }
            PredicateNode::Not { child } => {
                out.push("!".to_string());
                child.render_into(out);
            }
            PredicateNode::And { left, right } => {
                left.render_into(out);
                right.render_into(out);
            }
            PredicateNode::Or { left, right } => {
                left.render_into(out);
                out.push("-or".to_string());
                right.render_into(out);
            }
            PredicateNode::Paren { child } => {
                out.push("(".to_string());
                child.render_into(out);
                out.push(")".to_string());
            }
            PredicateNode::True => out.push("-true".to_string()),
            PredicateNode::False => out.push("-false".to_string()),
        }
    }
}
