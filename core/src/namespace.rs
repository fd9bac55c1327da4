//! Namespace table: registered prefixes plus the default-namespace slot.
//!
//! One table belongs to one conversion. It is populated by the prefix
//! loader before any row is mapped and read by the resolver afterwards.

use std::collections::BTreeMap;

use crate::model::{canonical_name, Namespace};
use crate::vocab;

/// Registered namespaces, keyed by canonical upper-case name.
#[derive(Debug, Clone)]
pub struct NamespaceTable {
    registered: BTreeMap<String, Namespace>,
    default: Namespace,
}

impl NamespaceTable {
    /// Creates an empty table whose default is the built-in fallback
    /// ([`vocab::DEFAULT_NAMESPACE`]).
    #[must_use]
    pub fn new() -> Self {
        Self {
            registered: BTreeMap::new(),
            default: Namespace::new(vocab::DEFAULT_NAMESPACE, vocab::RDFS),
        }
    }

    /// Registers `name` → `base`, replacing any earlier binding of the same
    /// name. Returns the stored namespace.
    pub fn register(&mut self, name: &str, base: impl Into<String>) -> Namespace {
        let ns = Namespace::new(name, base);
        self.registered.insert(ns.name.clone(), ns.clone());
        ns
    }

    /// Makes `ns` the namespace for unqualified tokens.
    pub fn set_default(&mut self, ns: Namespace) {
        self.default = ns;
    }

    /// The namespace currently used for unqualified tokens.
    #[must_use]
    pub fn default_namespace(&self) -> &Namespace {
        &self.default
    }

    /// Resolves a namespace name to its base IRI: the registered table
    /// first, then the well-known registry.
    #[must_use]
    pub fn base_of(&self, name: &str) -> Option<&str> {
        let canonical = canonical_name(name);
        match self.registered.get(&canonical) {
            Some(ns) => Some(ns.base.as_str()),
            None => vocab::well_known_base(&canonical),
        }
    }

    /// Number of registered namespaces (well-known ones are not counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.registered.len()
    }

    /// Returns true if no namespace has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }

    /// Prefix → base IRI pairs to declare in serialized output.
    ///
    /// Always includes the standard bindings (`owl`, `rdf`, `rdfs`, `skos`,
    /// `xsd`); registered namespaces override them by name.
    #[must_use]
    pub fn bindings(&self) -> BTreeMap<String, String> {
        let mut out = BTreeMap::new();
        for name in vocab::STANDARD_BINDINGS {
            if let Some(base) = vocab::well_known_base(name) {
                out.insert(name.to_lowercase(), base.to_owned());
            }
        }
        for ns in self.registered.values() {
            out.insert(ns.prefix(), ns.base.clone());
        }
        out
    }
}

impl Default for NamespaceTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_builtin_default() {
        let table = NamespaceTable::new();
        assert!(table.is_empty());
        assert_eq!(table.default_namespace().name, "RDFS");
        assert_eq!(table.default_namespace().base, vocab::RDFS);
    }

    #[test]
    fn register_is_case_insensitive_and_last_write_wins() {
        let mut table = NamespaceTable::new();
        table.register("ex", "http://example.org/a#");
        table.register("EX", "http://example.org/b#");
        assert_eq!(table.len(), 1);
        assert_eq!(table.base_of("Ex"), Some("http://example.org/b#"));
    }

    #[test]
    fn falls_back_to_well_known() {
        let table = NamespaceTable::new();
        assert_eq!(table.base_of("owl"), Some(vocab::OWL));
        assert_eq!(table.base_of("unknown"), None);
    }

    #[test]
    fn registered_shadows_well_known() {
        let mut table = NamespaceTable::new();
        table.register("skos", "http://example.org/my-skos#");
        assert_eq!(table.base_of("skos"), Some("http://example.org/my-skos#"));
        assert_eq!(
            table.bindings().get("skos").map(String::as_str),
            Some("http://example.org/my-skos#")
        );
    }

    #[test]
    fn bindings_include_standard_prefixes() {
        let mut table = NamespaceTable::new();
        table.register("ex", "http://example.org/");
        let bindings = table.bindings();
        for prefix in ["owl", "rdf", "rdfs", "skos", "xsd", "ex"] {
            assert!(bindings.contains_key(prefix), "missing {prefix}");
        }
    }
}
