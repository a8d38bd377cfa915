//!
//! Rule metadata registry. Maps rule names to the metadata the settings
//! normalizer needs. Rule implementations are out of scope here: callers
//! register the rules they know about and pass the registry in explicitly.

use std::collections::{BTreeMap, BTreeSet};

/// Normalizes rule name keys to lowercase kebab-case.
pub fn normalize_key(key: &str) -> String {
    key.trim().replace('_', "-").to_ascii_lowercase()
}

/// Metadata for a single rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleMeta {
    /// Whether the rule's primary option may itself be an array.
    pub primary_option_array: bool,
}

impl RuleMeta {
    pub fn new(primary_option_array: bool) -> Self {
        Self { primary_option_array }
    }
}

/// Registry of known rules and their metadata, keyed by normalized rule name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleRegistry {
    rules: BTreeMap<String, RuleMeta>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule under its normalized name. Re-registering a rule
    /// replaces the previous metadata.
    pub fn register(&mut self, name: &str, meta: RuleMeta) {
        self.rules.insert(normalize_key(name), meta);
    }

    /// Look up a rule's metadata. Absence of an entry is not an error.
    pub fn lookup(&self, name: &str) -> Option<&RuleMeta> {
        self.rules.get(&normalize_key(name))
    }

    /// Effective primary-option-array flag for a rule. Unknown rules and
    /// rules without the flag count as `false`.
    pub fn primary_option_array(&self, name: &str) -> bool {
        self.lookup(name).map(|meta| meta.primary_option_array).unwrap_or(false)
    }

    /// All registered rule names, normalized.
    pub fn rule_names(&self) -> BTreeSet<String> {
        self.rules.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<(S, RuleMeta)> for RuleRegistry {
    fn from_iter<T: IntoIterator<Item = (S, RuleMeta)>>(iter: T) -> Self {
        let mut registry = RuleRegistry::new();
        for (name, meta) in iter {
            registry.register(name.as_ref(), meta);
        }
        registry
    }
}
