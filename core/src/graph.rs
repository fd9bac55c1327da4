//! Triple accumulator with set semantics.

use std::collections::btree_set::{self, BTreeSet};

use crate::model::{Identifier, Term, Triple};

/// The set of triples produced by a conversion.
///
/// Adding a triple that is already present is a no-op. Iteration order is
/// (subject, predicate, object) and carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    triples: BTreeSet<Triple>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a triple. Returns false if it was already present.
    pub fn insert(&mut self, triple: Triple) -> bool {
        self.triples.insert(triple)
    }

    /// Inserts `(subject, predicate, object)`. Returns false if it was
    /// already present.
    pub fn add(
        &mut self,
        subject: Identifier,
        predicate: Identifier,
        object: impl Into<Term>,
    ) -> bool {
        self.insert(Triple::new(subject, predicate, object))
    }

    /// Returns true if the graph holds `triple`.
    #[must_use]
    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// Number of distinct triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns true if the graph holds no triples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterates over the triples.
    pub fn iter(&self) -> btree_set::Iter<'_, Triple> {
        self.triples.iter()
    }

    /// Iterates over the triples grouped by subject, in subject order.
    pub fn by_subject(&self) -> impl Iterator<Item = (&Identifier, Vec<&Triple>)> {
        let mut groups: Vec<(&Identifier, Vec<&Triple>)> = Vec::new();
        for triple in &self.triples {
            let same_subject = groups
                .last()
                .is_some_and(|(subject, _)| *subject == &triple.subject);
            if !same_subject {
                groups.push((&triple.subject, Vec::new()));
            }
            if let Some((_, group)) = groups.last_mut() {
                group.push(triple);
            }
        }
        groups.into_iter()
    }

    /// Consumes the graph, returning the underlying triple set.
    #[must_use]
    pub fn into_triples(self) -> BTreeSet<Triple> {
        self.triples
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = btree_set::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        Self {
            triples: iter.into_iter().collect(),
        }
    }
}
