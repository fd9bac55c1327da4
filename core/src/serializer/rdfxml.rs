//! RDF/XML serializer.
//!
//! Writes one `rdf:Description` per subject. Every predicate must be
//! expressible as a qualified XML element name; predicates outside the bound
//! namespaces get generated `nsN` prefixes.

use std::collections::BTreeMap;

use crate::error::{ConvertError, Result};
use crate::graph::Graph;
use crate::model::{Identifier, Term};
use crate::namespace::NamespaceTable;
use crate::vocab;

use super::PrefixMap;

/// Serializes `graph` to an RDF/XML string.
///
/// # Errors
///
/// Returns [`ConvertError::Serialization`] if a predicate IRI has no
/// suffix usable as an XML local name.
pub fn to_rdf_xml(graph: &Graph, namespaces: &NamespaceTable) -> Result<String> {
    let mut xmlns = XmlNamespaces::new(&PrefixMap::new(namespaces));
    let mut qnames: BTreeMap<&Identifier, String> = BTreeMap::new();
    for triple in graph {
        if !qnames.contains_key(&triple.predicate) {
            let qname = xmlns.qname(&triple.predicate)?;
            qnames.insert(&triple.predicate, qname);
        }
    }

    let mut out = String::with_capacity(graph.len() * 96 + 512);
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<rdf:RDF");
    for (prefix, base) in &xmlns.declared {
        out.push_str(&format!("\n  xmlns:{}=\"{}\"", prefix, escape_xml(base)));
    }
    out.push_str("\n>\n");

    for (subject, triples) in graph.by_subject() {
        out.push_str(&format!(
            "  <rdf:Description rdf:about=\"{}\">\n",
            escape_xml(&subject.iri())
        ));
        for t in triples {
            let Some(qname) = qnames.get(&t.predicate) else {
                continue;
            };
            match &t.object {
                Term::Identifier(id) => out.push_str(&format!(
                    "    <{} rdf:resource=\"{}\"/>\n",
                    qname,
                    escape_xml(&id.iri())
                )),
                Term::Literal(lit) => {
                    let lang = lit
                        .language
                        .as_deref()
                        .map(|l| format!(" xml:lang=\"{}\"", escape_xml(l)))
                        .unwrap_or_default();
                    out.push_str(&format!(
                        "    <{}{}>{}</{}>\n",
                        qname,
                        lang,
                        escape_xml(&lit.value),
                        qname
                    ));
                }
            }
        }
        out.push_str("  </rdf:Description>\n");
    }

    out.push_str("</rdf:RDF>\n");
    Ok(out)
}

/// Namespace declarations for the root element, grown on demand.
struct XmlNamespaces {
    declared: BTreeMap<String, String>,
    generated: usize,
}

impl XmlNamespaces {
    fn new(prefixes: &PrefixMap) -> Self {
        let mut declared: BTreeMap<String, String> = prefixes
            .iter()
            .filter(|(prefix, _)| *prefix != "rdf")
            .map(|(prefix, base)| (prefix.to_owned(), base.to_owned()))
            .collect();
        declared.insert("rdf".to_owned(), vocab::RDF.to_owned());
        Self {
            declared,
            generated: 0,
        }
    }

    /// Returns `prefix:local` for `id`, declaring a new prefix if no bound
    /// namespace yields a valid local name.
    fn qname(&mut self, id: &Identifier) -> Result<String> {
        let iri = id.iri();
        let bound = self
            .declared
            .iter()
            .filter_map(|(prefix, base)| {
                iri.strip_prefix(base.as_str())
                    .filter(|local| is_ncname(local))
                    .map(|local| (base.len(), format!("{prefix}:{local}")))
            })
            .max_by_key(|(len, _)| *len)
            .map(|(_, qname)| qname);
        if let Some(qname) = bound {
            return Ok(qname);
        }

        let split = iri.rfind(['#', '/']).map(|idx| idx + 1).unwrap_or(0);
        let (base, local) = iri.split_at(split);
        if base.is_empty() || !is_ncname(local) {
            return Err(ConvertError::Serialization(format!(
                "predicate <{iri}> has no XML-compatible local name"
            )));
        }
        let prefix = loop {
            self.generated += 1;
            let candidate = format!("ns{}", self.generated);
            if !self.declared.contains_key(&candidate) {
                break candidate;
            }
        };
        self.declared.insert(prefix.clone(), base.to_owned());
        Ok(format!("{prefix}:{local}"))
    }
}

fn is_ncname(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
