//! Spreadsheet-to-ontology mapping engine.
//!
//! The `csv2owl` crate turns two tables (classes and properties) and an
//! optional prefix table into an OWL graph. Each class row becomes an
//! `owl:Class`, each property row an `owl:ObjectProperty`, and the other
//! cells become labels, comments, hierarchy links, or arbitrary annotations
//! depending on their column header.
//!
//! # Entry Point
//!
//! ```
//! let classes = "name,superClass,label@en\nex:Cat,ex:Animal,A cat\n";
//! let properties = "name,superProperties\nex:hasOwner,ex:hasRelation\n";
//! let prefixes = "default,ex,http://example.org/\n";
//!
//! let conversion = csv2owl::convert(
//!     classes.as_bytes(),
//!     properties.as_bytes(),
//!     Some(prefixes.as_bytes()),
//!     None,
//! )?;
//! assert_eq!(conversion.graph.len(), 5);
//! # Ok::<(), csv2owl::ConvertError>(())
//! ```
//!
//! # Serialization
//!
//! ```
//! # let conversion = csv2owl::convert(
//! #     "name\nex:Cat\n".as_bytes(), "name\n".as_bytes(),
//! #     Some(",ex,http://example.org/\n".as_bytes()), None)?;
//! use csv2owl::serializer::Format;
//!
//! let turtle = Format::Turtle.serialize(&conversion.graph, &conversion.namespaces)?;
//! assert!(turtle.contains("ex:Cat"));
//! # Ok::<(), csv2owl::ConvertError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod graph;
pub mod mapper;
pub mod model;
pub mod namespace;
pub mod prefixes;
pub mod resolver;
pub mod serializer;
pub mod table;
pub mod vocab;

use std::io::Read;

pub use error::{ConvertError, Result};
pub use graph::Graph;
pub use mapper::{map_table, TableKind};
pub use model::{Identifier, Literal, Namespace, Term, Triple};
pub use namespace::NamespaceTable;
pub use prefixes::load_prefixes;
pub use resolver::{Resolution, Resolver};
pub use table::Table;

/// The result of a conversion: the graph plus the namespaces it was
/// resolved against (needed to write prefix declarations).
#[derive(Debug, Clone)]
pub struct Conversion {
    /// All triples produced from the classes and properties tables.
    pub graph: Graph,
    /// The namespace table after loading the prefix table.
    pub namespaces: NamespaceTable,
}

/// Reads the three inputs and converts them.
///
/// `delimiter` applies to every input; when `None` it is sniffed per input.
///
/// # Errors
///
/// Returns an error if an input cannot be read as delimited text, or any
/// error of [`convert_tables`].
pub fn convert<C, P, X>(
    classes: C,
    properties: P,
    prefixes: Option<X>,
    delimiter: Option<u8>,
) -> Result<Conversion>
where
    C: Read,
    P: Read,
    X: Read,
{
    let prefixes = prefixes
        .map(|reader| Table::read_headerless(reader, delimiter))
        .transpose()?;
    let classes = Table::read(classes, delimiter)?;
    let properties = Table::read(properties, delimiter)?;
    convert_tables(&classes, &properties, prefixes.as_ref())
}

/// Converts already-read tables.
///
/// The prefix table is loaded completely before any row is mapped; then the
/// classes table is mapped, then the properties table.
///
/// # Errors
///
/// Returns the first structural error: a malformed prefix row, a header or
/// cell naming an unknown namespace, a subject that is not an identifier, or
/// free text in a hierarchy column.
pub fn convert_tables(
    classes: &Table,
    properties: &Table,
    prefixes: Option<&Table>,
) -> Result<Conversion> {
    let mut namespaces = NamespaceTable::new();
    if let Some(prefixes) = prefixes {
        let loaded = load_prefixes(prefixes, &mut namespaces)?;
        tracing::info!(
            prefixes = loaded,
            default = %namespaces.default_namespace().name,
            "loaded prefix table"
        );
    }

    let mut graph = Graph::new();
    {
        let resolver = Resolver::new(&namespaces);
        map_table(classes, TableKind::Classes, &resolver, &mut graph)?;
        map_table(properties, TableKind::Properties, &resolver, &mut graph)?;
    }
    tracing::info!(triples = graph.len(), "conversion complete");

    Ok(Conversion { graph, namespaces })
}
