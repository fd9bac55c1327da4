//! Well-known namespaces and the vocabulary terms the mapper emits.
//!
//! A token whose namespace is not in the loaded prefix table is looked up
//! here by canonical upper-case name before it is rejected.

use crate::model::Identifier;

/// OWL namespace.
pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
/// RDF namespace.
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
/// RDFS namespace.
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
/// XSD namespace.
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
/// SKOS namespace.
pub const SKOS: &str = "http://www.w3.org/2004/02/skos/core#";

/// Namespace that qualifies bare tokens when no prefix row is marked default.
pub const DEFAULT_NAMESPACE: &str = "RDFS";

/// Namespaces bound in every serialized document, in output order.
pub const STANDARD_BINDINGS: &[&str] = &["OWL", "RDF", "RDFS", "SKOS", "XSD"];

/// Canonical name → base IRI for the built-in namespaces.
const WELL_KNOWN: &[(&str, &str)] = &[
    ("BRICK", "https://brickschema.org/schema/Brick#"),
    ("CSVW", "http://www.w3.org/ns/csvw#"),
    ("DC", "http://purl.org/dc/elements/1.1/"),
    ("DCAT", "http://www.w3.org/ns/dcat#"),
    ("DCMITYPE", "http://purl.org/dc/dcmitype/"),
    ("DCTERMS", "http://purl.org/dc/terms/"),
    ("DOAP", "http://usefulinc.com/ns/doap#"),
    ("FOAF", "http://xmlns.com/foaf/0.1/"),
    ("GEO", "http://www.opengis.net/ont/geosparql#"),
    ("ODRL2", "http://www.w3.org/ns/odrl/2/"),
    ("ORG", "http://www.w3.org/ns/org#"),
    ("OWL", OWL),
    ("PROF", "http://www.w3.org/ns/dx/prof/"),
    ("PROV", "http://www.w3.org/ns/prov#"),
    ("QB", "http://purl.org/linked-data/cube#"),
    ("RDF", RDF),
    ("RDFS", RDFS),
    ("SCHEMA", "https://schema.org/"),
    ("SH", "http://www.w3.org/ns/shacl#"),
    ("SKOS", SKOS),
    ("SOSA", "http://www.w3.org/ns/sosa/"),
    ("SSN", "http://www.w3.org/ns/ssn/"),
    ("TIME", "http://www.w3.org/2006/time#"),
    ("VANN", "http://purl.org/vocab/vann/"),
    ("VOID", "http://rdfs.org/ns/void#"),
    ("XSD", XSD),
];

/// Looks up a well-known namespace by canonical (upper-case) name.
#[must_use]
pub fn well_known_base(name: &str) -> Option<&'static str> {
    WELL_KNOWN
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, base)| *base)
}

/// `rdf:type`.
#[must_use]
pub fn rdf_type() -> Identifier {
    Identifier::new(RDF, "type")
}

/// `owl:Class`.
#[must_use]
pub fn owl_class() -> Identifier {
    Identifier::new(OWL, "Class")
}

/// `owl:ObjectProperty`.
#[must_use]
pub fn owl_object_property() -> Identifier {
    Identifier::new(OWL, "ObjectProperty")
}

/// `rdfs:subClassOf`.
#[must_use]
pub fn rdfs_sub_class_of() -> Identifier {
    Identifier::new(RDFS, "subClassOf")
}

/// `rdfs:subPropertyOf`.
#[must_use]
pub fn rdfs_sub_property_of() -> Identifier {
    Identifier::new(RDFS, "subPropertyOf")
}

/// `rdfs:label`.
#[must_use]
pub fn rdfs_label() -> Identifier {
    Identifier::new(RDFS, "label")
}
