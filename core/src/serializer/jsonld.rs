//! JSON-LD 1.1 serializer.
//!
//! Produces a single document with an `@context` of prefix bindings and an
//! `@graph` array holding one node per subject.

use serde_json::{json, Map, Value};

use crate::graph::Graph;
use crate::model::{Identifier, Term};
use crate::namespace::NamespaceTable;
use crate::vocab;

use super::PrefixMap;

/// Serializes `graph` to a JSON-LD `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
#[must_use]
pub fn to_json_ld(graph: &Graph, namespaces: &NamespaceTable) -> Value {
    let prefixes = PrefixMap::new(namespaces);
    let context: Map<String, Value> = prefixes
        .iter()
        .map(|(prefix, base)| (prefix.to_owned(), json!(base)))
        .collect();

    let rdf_type = vocab::rdf_type();
    let nodes: Vec<Value> = graph
        .by_subject()
        .map(|(subject, triples)| {
            let mut node = Map::new();
            node.insert("@id".to_owned(), json!(name(subject, &prefixes)));
            for t in triples {
                if t.predicate == rdf_type {
                    if let Term::Identifier(class) = &t.object {
                        push_value(&mut node, "@type".to_owned(), json!(name(class, &prefixes)));
                        continue;
                    }
                }
                push_value(
                    &mut node,
                    name(&t.predicate, &prefixes),
                    object(&t.object, &prefixes),
                );
            }
            Value::Object(node)
        })
        .collect();

    json!({
        "@context": context,
        "@graph": nodes
    })
}

fn name(id: &Identifier, prefixes: &PrefixMap) -> String {
    prefixes.compact(id).unwrap_or_else(|| id.iri())
}

fn object(term: &Term, prefixes: &PrefixMap) -> Value {
    match term {
        Term::Identifier(id) => json!({ "@id": name(id, prefixes) }),
        Term::Literal(lit) => match &lit.language {
            Some(lang) => json!({ "@value": lit.value, "@language": lang }),
            None => json!(lit.value),
        },
    }
}

/// Inserts `value` under `key`, promoting to an array when the key is
/// already present rather than overwriting.
fn push_value(node: &mut Map<String, Value>, key: String, value: Value) {
    if let Some(existing) = node.get_mut(&key) {
        let prev = std::mem::replace(existing, Value::Null);
        *existing = match prev {
            Value::Array(mut arr) => {
                arr.push(value);
                Value::Array(arr)
            }
            other => json!([other, value]),
        };
    } else {
        node.insert(key, value);
    }
}
