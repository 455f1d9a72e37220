// src/commands/registry.rs
use indexmap::IndexMap;

use super::types::{CommandForm, CommandSpec, OperandSlot, PayloadKind};
use super::{archive, file_ops, find, shell, text};

/// Read-only catalogue of every command's forms, keyed by command literal.
pub struct GrammarRegistry {
    commands: IndexMap<&'static str, CommandSpec>,
}

impl GrammarRegistry {
    pub fn new() -> Self {
        Self {
            commands: IndexMap::new(),
        }
    }

    pub fn register(&mut self, spec: CommandSpec) {
        self.commands.insert(spec.literal(), spec);
    }

    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.get(name)
    }

    /// Command literals in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.commands.keys().copied().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn forms(&self, name: &str) -> &[CommandForm] {
        self.get(name).map(|spec| spec.forms.as_slice()).unwrap_or_default()
    }

    /// Payload kinds taken by `flag` of `command`, from the first form that
    /// declares it. `Some(&[])` means a bare flag.
    pub fn payload_of(&self, command: &str, flag: &str) -> Option<&[PayloadKind]> {
        self.forms(command)
            .iter()
            .flat_map(|form| form.rules())
            .find(|rule| rule.flag == flag)
            .map(|rule| rule.payload.as_slice())
    }

    /// Distinct operand slots across all forms of `command`, first
    /// declaration wins.
    pub fn operand_kinds(&self, command: &str) -> Vec<&OperandSlot> {
        let mut out: Vec<&OperandSlot> = Vec::new();
        for slot in self.forms(command).iter().flat_map(|form| form.operand_slots()) {
            if !out.iter().any(|s| s.name == slot.name) {
                out.push(slot);
            }
        }
        out
    }

    /// Usage lines for every form of `command`.
    pub fn synopsis(&self, command: &str) -> Vec<String> {
        self.forms(command).iter().map(|form| form.synopsis()).collect()
    }
}

impl Default for GrammarRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Register every supported utility.
pub fn register_builtin(registry: &mut GrammarRegistry) {
    registry.register(find::spec());
    registry.register(file_ops::mv());
    registry.register(text::sort());
    registry.register(text::grep());
    registry.register(text::egrep());
    registry.register(text::fgrep());
    registry.register(file_ops::cp());
    registry.register(shell::ls());
    registry.register(archive::tar());
    registry.register(shell::xargs());
    registry.register(text::sed());
    registry.register(text::awk());
    registry.register(file_ops::rm());
    registry.register(shell::cd());
    registry.register(text::wc());
    registry.register(file_ops::chmod());
    registry.register(file_ops::chown());
    registry.register(text::head());
    registry.register(text::tail());
    registry.register(shell::seq());
    registry.register(file_ops::unlink());
    registry.register(text::cat());
    registry.register(archive::zip());
    registry.register(archive::unzip());
    registry.register(shell::du());
    registry.register(shell::echo());
    registry.register(text::diff());
    registry.register(text::comm());
    registry.register(shell::sh());
    registry.register(file_ops::mkdir());
    registry.register(file_ops::rmdir());
    registry.register(file_ops::touch());
    registry.register(file_ops::ln());
    registry.register(shell::basename());
    registry.register(shell::dirname());
    registry.register(shell::readlink());
    registry.register(text::uniq());
    registry.register(text::cut());
    registry.register(text::tee());
    registry.register(archive::gzip());
}

/// Create a registry holding every supported utility.
pub fn create_builtin_registry() -> GrammarRegistry {
    let mut registry = GrammarRegistry::new();
    register_builtin(&mut registry);
    registry
}

lazy_static::lazy_static! {
    static ref BUILTIN: GrammarRegistry = create_builtin_registry();
}

/// The process-wide registry. Built on first use, never mutated.
pub fn registry() -> &'static GrammarRegistry {
    &BUILTIN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::CommandKind;

    #[test]
    fn test_every_kind_registered() {
        let reg = registry();
        assert_eq!(reg.len(), CommandKind::ALL.len());
        for kind in CommandKind::ALL {
            let spec = reg.get(kind.as_str()).unwrap();
            assert_eq!(spec.kind, *kind);
            assert!(!spec.forms.is_empty());
        }
    }

    #[test]
    fn test_form_literals_match_command() {
        for name in registry().names() {
            for form in registry().forms(name) {
                assert_eq!(form.literal, name, "form {}", form.name);
            }
        }
    }

    #[test]
    fn test_form_names_unique_within_command() {
        for name in registry().names() {
            let forms = registry().forms(name);
            for (i, form) in forms.iter().enumerate() {
                assert!(forms[i + 1..].iter().all(|f| f.name != form.name));
            }
        }
    }

    #[test]
    fn test_payload_lookup_is_per_command() {
        let reg = registry();
        assert_eq!(reg.payload_of("mv", "-f"), Some(&[][..]));
        assert_eq!(reg.payload_of("tar", "-f"), Some(&[PayloadKind::File][..]));
        assert_eq!(reg.payload_of("sed", "-f"), Some(&[PayloadKind::File][..]));
        assert_eq!(reg.payload_of("head", "-n"), Some(&[PayloadKind::Number][..]));
        assert_eq!(reg.payload_of("head", "-z"), None);
        assert_eq!(reg.payload_of("frobnicate", "-f"), None);
        // nested rules are visible too
        assert_eq!(reg.payload_of("cp", "-L"), Some(&[][..]));
    }

    #[test]
    fn test_operand_kinds() {
        let slots = registry().operand_kinds("mv");
        let names: Vec<&str> = slots.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["source", "target", "directory"]);
        assert!(registry().operand_kinds("frobnicate").is_empty());
    }

    #[test]
    fn test_synopsis() {
        assert_eq!(
            registry().synopsis("unlink"),
            vec!["unlink file".to_string()]
        );
        assert_eq!(registry().synopsis("find").len(), 2);
    }
}
