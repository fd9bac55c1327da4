//! N-Triples serializer.
//!
//! Produces one triple per line with absolute IRIs. Suitable for streaming,
//! bulk loading, and diff-friendly storage.

use crate::graph::Graph;
use crate::model::{Identifier, Term};

use super::{escape_iri, escape_string};

/// Serializes `graph` to an N-Triples string.
#[must_use]
pub fn to_ntriples(graph: &Graph) -> String {
    let mut out = String::with_capacity(graph.len() * 128);
    for triple in graph {
        out.push_str(&iri(&triple.subject));
        out.push(' ');
        out.push_str(&iri(&triple.predicate));
        out.push(' ');
        out.push_str(&object(&triple.object));
        out.push_str(" .\n");
    }
    out
}

fn iri(id: &Identifier) -> String {
    format!("<{}>", escape_iri(&id.iri()))
}

fn object(term: &Term) -> String {
    match term {
        Term::Identifier(id) => iri(id),
        Term::Literal(lit) => match &lit.language {
            Some(lang) => format!("\"{}\"@{}", escape_string(&lit.value), lang),
            None => format!("\"{}\"", escape_string(&lit.value)),
        },
    }
}
