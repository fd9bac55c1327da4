//! Serializers for converted graphs.
//!
//! Four formats are supported:
//! - **JSON-LD** ([`jsonld`]) — the default output of the command-line tool
//! - **Turtle** ([`turtle`]) — for RDF tooling
//! - **N-Triples** ([`ntriples`]) — one triple per line, absolute IRIs
//! - **RDF/XML** ([`rdfxml`]) — for ontology editors that expect XML
//!
//! The byte layout of each format is not stable; only the triples are.

pub mod jsonld;
pub mod ntriples;
pub mod rdfxml;
pub mod turtle;

use std::fmt;
use std::str::FromStr;

use crate::error::{ConvertError, Result};
use crate::graph::Graph;
use crate::model::Identifier;
use crate::namespace::NamespaceTable;

/// Output document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// JSON-LD 1.1 with a compacting `@context`.
    #[default]
    JsonLd,
    /// Turtle 1.1.
    Turtle,
    /// N-Triples.
    NTriples,
    /// RDF/XML.
    RdfXml,
}

impl Format {
    /// Every supported format.
    pub const ALL: [Format; 4] = [
        Format::JsonLd,
        Format::Turtle,
        Format::NTriples,
        Format::RdfXml,
    ];

    /// Canonical name accepted by [`Format::from_str`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Format::JsonLd => "json-ld",
            Format::Turtle => "turtle",
            Format::NTriples => "ntriples",
            Format::RdfXml => "xml",
        }
    }

    /// Conventional file extension.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Format::JsonLd => "jsonld",
            Format::Turtle => "ttl",
            Format::NTriples => "nt",
            Format::RdfXml => "rdf",
        }
    }

    /// Renders `graph` in this format, declaring the prefixes bound in
    /// `namespaces`.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Json`] if JSON-LD rendering fails, or
    /// [`ConvertError::Serialization`] if a predicate cannot be written as
    /// an RDF/XML element name.
    pub fn serialize(self, graph: &Graph, namespaces: &NamespaceTable) -> Result<String> {
        match self {
            Format::JsonLd => {
                let value = jsonld::to_json_ld(graph, namespaces);
                Ok(serde_json::to_string_pretty(&value)?)
            }
            Format::Turtle => Ok(turtle::to_turtle(graph, namespaces)),
            Format::NTriples => Ok(ntriples::to_ntriples(graph)),
            Format::RdfXml => rdfxml::to_rdf_xml(graph, namespaces),
        }
    }
}

impl FromStr for Format {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json-ld" | "jsonld" => Ok(Format::JsonLd),
            "turtle" | "ttl" => Ok(Format::Turtle),
            "ntriples" | "nt" | "n-triples" => Ok(Format::NTriples),
            "xml" | "rdf-xml" | "rdfxml" | "pretty-xml" => Ok(Format::RdfXml),
            _ => Err(ConvertError::UnknownFormat(s.to_owned())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Prefix bindings used to abbreviate IRIs, sorted by prefix.
pub(crate) struct PrefixMap {
    bindings: Vec<(String, String)>,
}

impl PrefixMap {
    /// Collects the table's bindings, dropping prefixes that are not valid
    /// prefix names in Turtle or XML.
    pub(crate) fn new(namespaces: &NamespaceTable) -> Self {
        let bindings = namespaces
            .bindings()
            .into_iter()
            .filter(|(prefix, _)| is_prefix_name(prefix))
            .collect();
        Self { bindings }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings.iter().map(|(p, b)| (p.as_str(), b.as_str()))
    }

    /// Returns `prefix:local` for the longest binding whose base starts
    /// `id` and leaves a plain word as the local part.
    pub(crate) fn compact(&self, id: &Identifier) -> Option<String> {
        let iri = id.iri();
        self.iter()
            .filter_map(|(prefix, base)| {
                iri.strip_prefix(base)
                    .filter(|local| is_word(local))
                    .map(|local| (base.len(), format!("{prefix}:{local}")))
            })
            .max_by_key(|(len, _)| *len)
            .map(|(_, compact)| compact)
    }
}

/// Non-empty and made only of ASCII letters, digits, and underscores.
pub(crate) fn is_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_prefix_name(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Escapes characters that may not appear inside `<...>` in Turtle and
/// N-Triples.
pub(crate) fn escape_iri(iri: &str) -> String {
    let mut out = String::with_capacity(iri.len());
    for c in iri.chars() {
        match c {
            '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\' => {
                out.push_str(&format!("\\u{:04X}", u32::from(c)));
            }
            c if c <= ' ' => out.push_str(&format!("\\u{:04X}", u32::from(c))),
            c => out.push(c),
        }
    }
    out
}

/// Escapes a string for a double-quoted Turtle / N-Triples literal.
pub(crate) fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
