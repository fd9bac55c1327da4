//! Core graph model types.
//!
//! These types represent the ontology graph produced from the input tables:
//! namespaces, identifiers, literals, and the triples that relate them.
//! The top-level entry point is [`convert`](crate::convert).

use std::fmt;

/// Returns the canonical form of a namespace name (trimmed, upper-case).
///
/// Namespace names are case-insensitive: `ex`, `Ex`, and `EX` all refer to
/// the same namespace.
#[must_use]
pub fn canonical_name(name: &str) -> String {
    name.trim().to_uppercase()
}

/// A namespace bound to a base IRI (e.g., `RDFS` → `http://www.w3.org/2000/01/rdf-schema#`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    /// Canonical upper-case name (e.g., `"RDFS"`).
    pub name: String,
    /// Base IRI that local names are appended to.
    pub base: String,
}

impl Namespace {
    /// Creates a namespace, canonicalizing `name` to upper case.
    #[must_use]
    pub fn new(name: &str, base: impl Into<String>) -> Self {
        Self {
            name: canonical_name(name),
            base: base.into(),
        }
    }

    /// Returns the identifier `base + local`.
    #[must_use]
    pub fn term(&self, local: &str) -> Identifier {
        Identifier::new(self.base.clone(), local)
    }

    /// Returns the prefix used in serialized documents (lower-case name).
    #[must_use]
    pub fn prefix(&self) -> String {
        self.name.to_lowercase()
    }
}

/// A fully-qualified reference: namespace base IRI plus local name.
///
/// Two identifiers are equal iff their (base, local name) pairs are equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier {
    base: String,
    local: String,
}

impl Identifier {
    /// Creates an identifier from a base IRI and a local name.
    #[must_use]
    pub fn new(base: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            local: local.into(),
        }
    }

    /// Base IRI of the namespace this identifier belongs to.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Local name appended to the base.
    #[must_use]
    pub fn local_name(&self) -> &str {
        &self.local
    }

    /// Full IRI (`base + local`).
    #[must_use]
    pub fn iri(&self) -> String {
        format!("{}{}", self.base, self.local)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base, self.local)
    }
}

/// A text value, optionally tagged with a language code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    /// Lexical value.
    pub value: String,
    /// Language tag (e.g., `"en"`), if the source column carried one.
    pub language: Option<String>,
}

impl Literal {
    /// Creates an untagged literal.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: None,
        }
    }

    /// Creates a literal with an optional language tag.
    #[must_use]
    pub fn with_language(value: impl Into<String>, language: Option<&str>) -> Self {
        Self {
            value: value.into(),
            language: language.map(str::to_owned),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.language {
            Some(lang) => write!(f, "{:?}@{}", self.value, lang),
            None => write!(f, "{:?}", self.value),
        }
    }
}

/// The object position of a triple: either an identifier or a literal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    /// A reference to another resource.
    Identifier(Identifier),
    /// A text value.
    Literal(Literal),
}

impl Term {
    /// Returns the identifier, if this term is one.
    #[must_use]
    pub fn as_identifier(&self) -> Option<&Identifier> {
        match self {
            Term::Identifier(id) => Some(id),
            Term::Literal(_) => None,
        }
    }
}

impl From<Identifier> for Term {
    fn from(id: Identifier) -> Self {
        Term::Identifier(id)
    }
}

impl From<Literal> for Term {
    fn from(lit: Literal) -> Self {
        Term::Literal(lit)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Identifier(id) => write!(f, "<{id}>"),
            Term::Literal(lit) => lit.fmt(f),
        }
    }
}

/// A (subject, predicate, object) fact.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triple {
    /// Subject; always an identifier.
    pub subject: Identifier,
    /// Predicate; always an identifier.
    pub predicate: Identifier,
    /// Object; an identifier or a literal.
    pub object: Term,
}

impl Triple {
    /// Creates a triple.
    #[must_use]
    pub fn new(subject: Identifier, predicate: Identifier, object: impl Into<Term>) -> Self {
        Self {
            subject,
            predicate,
            object: object.into(),
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}> <{}> {}", self.subject, self.predicate, self.object)
    }
}
