//! Turtle 1.1 serializer.
//!
//! Declares every bound prefix, then writes one block per subject with its
//! `rdf:type` statements first.

use crate::graph::Graph;
use crate::model::{Identifier, Term};
use crate::namespace::NamespaceTable;
use crate::vocab;

use super::{escape_iri, escape_string, PrefixMap};

/// Serializes `graph` to a Turtle string.
#[must_use]
pub fn to_turtle(graph: &Graph, namespaces: &NamespaceTable) -> String {
    let prefixes = PrefixMap::new(namespaces);
    let mut out = String::with_capacity(graph.len() * 64 + 512);

    for (prefix, base) in prefixes.iter() {
        out.push_str(&format!("@prefix {}: <{}> .\n", prefix, escape_iri(base)));
    }
    out.push('\n');

    let rdf_type = vocab::rdf_type();
    for (subject, triples) in graph.by_subject() {
        let (types, others): (Vec<_>, Vec<_>) =
            triples.into_iter().partition(|t| t.predicate == rdf_type);

        let mut statements: Vec<String> = Vec::new();
        if !types.is_empty() {
            let objects: Vec<String> = types
                .iter()
                .map(|t| term(&t.object, &prefixes))
                .collect();
            statements.push(format!("a {}", objects.join(" , ")));
        }
        for t in others {
            statements.push(format!(
                "{} {}",
                name(&t.predicate, &prefixes),
                term(&t.object, &prefixes)
            ));
        }

        out.push_str(&format!(
            "{}\n  {} .\n\n",
            name(subject, &prefixes),
            statements.join(" ;\n  ")
        ));
    }

    out
}

fn name(id: &Identifier, prefixes: &PrefixMap) -> String {
    prefixes
        .compact(id)
        .unwrap_or_else(|| format!("<{}>", escape_iri(&id.iri())))
}

fn term(term: &Term, prefixes: &PrefixMap) -> String {
    match term {
        Term::Identifier(id) => name(id, prefixes),
        Term::Literal(lit) => match &lit.language {
            Some(lang) => format!("\"{}\"@{}", escape_string(&lit.value), lang),
            None => format!("\"{}\"", escape_string(&lit.value)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Literal;

    fn sample() -> (Graph, NamespaceTable) {
        let mut namespaces = NamespaceTable::new();
        namespaces.register("ex", "http://example.org/");
        let cat = Identifier::new("http://example.org/", "Cat");
        let mut graph = Graph::new();
        graph.add(cat.clone(), vocab::rdf_type(), vocab::owl_class());
        graph.add(cat.clone(), vocab::rdfs_sub_class_of(), Identifier::new("http://example.org/", "Animal"));
        graph.add(cat, vocab::rdfs_label(), Literal::with_language("A cat", Some("en")));
        (graph, namespaces)
    }

    #[test]
    fn declares_bound_prefixes() {
        let (graph, namespaces) = sample();
        let turtle = to_turtle(&graph, &namespaces);
        for prefix in ["ex", "owl", "rdf", "rdfs", "skos", "xsd"] {
            assert!(
                turtle.contains(&format!("@prefix {prefix}:")),
                "Missing prefix declaration for '{prefix}'"
            );
        }
    }

    #[test]
    fn groups_statements_by_subject() {
        let (graph, namespaces) = sample();
        let turtle = to_turtle(&graph, &namespaces);
        assert!(turtle.contains(
            "ex:Cat\n  a owl:Class ;\n  rdfs:label \"A cat\"@en ;\n  rdfs:subClassOf ex:Animal .\n"
        ));
    }

    #[test]
    fn falls_back_to_full_iris() {
        let mut graph = Graph::new();
        graph.add(
            Identifier::new("http://other.example/", "a-b"),
            vocab::rdf_type(),
            vocab::owl_class(),
        );
        let turtle = to_turtle(&graph, &NamespaceTable::new());
        assert!(turtle.contains("<http://other.example/a-b>\n  a owl:Class .\n"));
    }
}
