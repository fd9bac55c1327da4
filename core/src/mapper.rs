//! Row mapper: turns table rows into triples.
//!
//! The first column of every row is the subject. Each other column header
//! is resolved once into a field type that fixes the column's predicate,
//! its language tag, and whether its values are forced to identifiers.

use crate::error::{ConvertError, Result};
use crate::graph::Graph;
use crate::model::{Identifier, Literal, Term};
use crate::resolver::{Resolution, Resolver};
use crate::table::Table;
use crate::vocab;

/// Field types whose values are resolved without forcing.
const LITERAL_FIELDS: [&str; 2] = ["label", "comment"];

/// Which input table is being mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// Rows declare `owl:Class` subjects.
    Classes,
    /// Rows declare `owl:ObjectProperty` subjects.
    Properties,
}

impl TableKind {
    /// Name used in log output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TableKind::Classes => "classes",
            TableKind::Properties => "properties",
        }
    }

    /// The `rdf:type` object declared for every subject of this table.
    #[must_use]
    pub fn declared_type(self) -> Identifier {
        match self {
            TableKind::Classes => vocab::owl_class(),
            TableKind::Properties => vocab::owl_object_property(),
        }
    }

    /// Field-type local name of the hierarchy column.
    #[must_use]
    pub fn hierarchy_field(self) -> &'static str {
        match self {
            TableKind::Classes => "superClass",
            TableKind::Properties => "superProperties",
        }
    }

    /// Predicate emitted for hierarchy column values.
    #[must_use]
    pub fn hierarchy_predicate(self) -> Identifier {
        match self {
            TableKind::Classes => vocab::rdfs_sub_class_of(),
            TableKind::Properties => vocab::rdfs_sub_property_of(),
        }
    }
}

/// Splits a trailing `@xx` language tag off a column header.
///
/// The tag is recognised only when `@` is exactly the third character from
/// the end and the two characters after it are ASCII letters.
#[must_use]
pub fn split_language_tag(header: &str) -> (&str, Option<&str>) {
    match header.char_indices().rev().nth(2) {
        Some((at, '@')) => {
            let tag = &header[at + 1..];
            if tag.chars().all(|c| c.is_ascii_alphabetic()) {
                (&header[..at], Some(tag))
            } else {
                (header, None)
            }
        }
        _ => (header, None),
    }
}

#[derive(Debug, Clone)]
struct Column {
    predicate: Identifier,
    language: Option<String>,
    force: bool,
    hierarchy: bool,
}

impl Column {
    fn parse(header: &str, kind: TableKind, resolver: &Resolver<'_>) -> Result<Self> {
        let (name, language) = split_language_tag(header.trim());
        if name.trim().is_empty() {
            return Err(ConvertError::MalformedToken(header.to_owned()));
        }
        let field_type = resolver
            .resolve(name, true)?
            .into_identifier()
            .ok_or_else(|| ConvertError::MalformedToken(header.to_owned()))?;

        let local = field_type.local_name();
        let force = !LITERAL_FIELDS.contains(&local);
        let hierarchy = local == kind.hierarchy_field();
        let predicate = if hierarchy {
            kind.hierarchy_predicate()
        } else {
            field_type
        };

        Ok(Self {
            predicate,
            language: language.map(str::to_owned),
            force,
            hierarchy,
        })
    }

    fn object(&self, value: &str, resolver: &Resolver<'_>) -> Result<Term> {
        match resolver.resolve(value, self.force)? {
            Resolution::Identifier(id) => Ok(id.into()),
            // Hierarchy objects are always identifiers, even for free text.
            Resolution::NotIdentifier if self.hierarchy => {
                Ok(resolver.namespaces().default_namespace().term(value).into())
            }
            Resolution::NotIdentifier => {
                Ok(Literal::with_language(value, self.language.as_deref()).into())
            }
        }
    }
}

/// Maps every row of `table` into `graph`. Returns the number of rows
/// mapped (blank rows are not counted).
///
/// # Errors
///
/// - [`ConvertError::MalformedToken`] or [`ConvertError::UnknownNamespace`]
///   for a header that does not resolve.
/// - [`ConvertError::InvalidSubject`] for a first cell that is not
///   identifier-valued.
/// - [`ConvertError::UnknownNamespace`] for a forced cell naming an
///   unknown namespace.
pub fn map_table(
    table: &Table,
    kind: TableKind,
    resolver: &Resolver<'_>,
    graph: &mut Graph,
) -> Result<usize> {
    let columns = table
        .headers
        .iter()
        .skip(1)
        .map(|header| Column::parse(header, kind, resolver))
        .collect::<Result<Vec<_>>>()?;

    let mut mapped = 0;
    for (index, row) in table.rows.iter().enumerate() {
        let Some(first) = row.first() else {
            continue;
        };
        if first.trim().is_empty() {
            continue;
        }

        let subject = resolver
            .resolve(first, true)?
            .into_identifier()
            .ok_or_else(|| ConvertError::InvalidSubject(first.clone()))?;
        graph.add(subject.clone(), vocab::rdf_type(), kind.declared_type());

        for (position, cell) in row.iter().enumerate().skip(1) {
            let value = cell.trim();
            if value.is_empty() {
                continue;
            }
            let Some(column) = columns.get(position - 1) else {
                tracing::warn!(
                    table = kind.as_str(),
                    row = index + 2,
                    column = position + 1,
                    "ignoring cell beyond the header"
                );
                continue;
            };
            let object = column.object(value, resolver)?;
            graph.add(subject.clone(), column.predicate.clone(), object);
        }

        tracing::debug!(table = kind.as_str(), subject = %subject, "mapped row");
        mapped += 1;
    }

    tracing::info!(table = kind.as_str(), rows = mapped, "mapped table");
    Ok(mapped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Triple;
    use crate::namespace::NamespaceTable;

    const EX: &str = "http://example.org/";

    fn namespaces() -> NamespaceTable {
        let mut namespaces = NamespaceTable::new();
        namespaces.register("ex", EX);
        namespaces
    }

    fn map(kind: TableKind, text: &str, namespaces: &NamespaceTable) -> Result<Graph> {
        let table = Table::read(text.as_bytes(), Some(b','))?;
        let mut graph = Graph::new();
        map_table(&table, kind, &Resolver::new(namespaces), &mut graph)?;
        Ok(graph)
    }

    fn ex(local: &str) -> Identifier {
        Identifier::new(EX, local)
    }

    #[test]
    fn splits_language_tag_at_fixed_offset() {
        assert_eq!(split_language_tag("label@en"), ("label", Some("en")));
        assert_eq!(split_language_tag("rdfs:comment@fr"), ("rdfs:comment", Some("fr")));
        assert_eq!(split_language_tag("label"), ("label", None));
        assert_eq!(split_language_tag("label@e"), ("label@e", None));
        assert_eq!(split_language_tag("label@eng"), ("label@eng", None));
        assert_eq!(split_language_tag("@en"), ("", Some("en")));
    }

    #[test]
    fn language_tag_must_be_letters() {
        assert_eq!(split_language_tag("label@1x"), ("label@1x", None));
        assert_eq!(split_language_tag("label@e-"), ("label@e-", None));
        assert_eq!(split_language_tag("label@EN"), ("label", Some("EN")));
    }

    #[test]
    fn class_row_with_hierarchy_and_tagged_label() {
        let graph = map(
            TableKind::Classes,
            "name,superClass,label@en\nex:Cat,ex:Animal,A cat\n",
            &namespaces(),
        )
        .ok();
        let expected: Graph = [
            Triple::new(ex("Cat"), vocab::rdf_type(), vocab::owl_class()),
            Triple::new(ex("Cat"), vocab::rdfs_sub_class_of(), ex("Animal")),
            Triple::new(
                ex("Cat"),
                vocab::rdfs_label(),
                Literal::with_language("A cat", Some("en")),
            ),
        ]
        .into_iter()
        .collect();
        assert_eq!(graph, Some(expected));
    }

    #[test]
    fn property_row_with_hierarchy() {
        let graph = map(
            TableKind::Properties,
            "name,superProperties\nex:hasOwner,ex:hasRelation\n",
            &namespaces(),
        )
        .unwrap_or_default();
        assert_eq!(graph.len(), 2);
        assert!(graph.contains(&Triple::new(
            ex("hasOwner"),
            vocab::rdf_type(),
            vocab::owl_object_property()
        )));
        assert!(graph.contains(&Triple::new(
            ex("hasOwner"),
            vocab::rdfs_sub_property_of(),
            ex("hasRelation")
        )));
    }

    #[test]
    fn blank_first_cell_skips_row() {
        let graph = map(
            TableKind::Classes,
            "name,superClass\n,ex:Animal\n   ,ex:Animal\n",
            &namespaces(),
        )
        .ok();
        assert_eq!(graph, Some(Graph::new()));
    }

    #[test]
    fn empty_cells_emit_nothing() {
        let graph = map(TableKind::Classes, "name,superClass,label\nex:Cat,,\n", &namespaces())
            .unwrap_or_default();
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn subject_with_whitespace_is_rejected() {
        let result = map(TableKind::Classes, "name\nBig Cat\n", &namespaces());
        assert!(matches!(result, Err(ConvertError::InvalidSubject(s)) if s == "Big Cat"));
    }

    #[test]
    fn unknown_namespace_in_subject_is_rejected() {
        let result = map(TableKind::Classes, "name\nzz:Cat\n", &namespaces());
        assert!(matches!(result, Err(ConvertError::UnknownNamespace(t)) if t == "zz:Cat"));
    }

    #[test]
    fn unknown_namespace_in_header_aborts() {
        let result = map(TableKind::Classes, "name,zz:color\n", &namespaces());
        assert!(matches!(result, Err(ConvertError::UnknownNamespace(t)) if t == "zz:color"));
    }

    #[test]
    fn header_with_whitespace_is_malformed() {
        let result = map(TableKind::Classes, "name,my field\nex:Cat,x\n", &namespaces());
        assert!(matches!(result, Err(ConvertError::MalformedToken(h)) if h == "my field"));
    }

    #[test]
    fn unknown_namespace_in_forced_cell_aborts() {
        let result = map(TableKind::Classes, "name,ex:seeAlso\nex:Cat,zz:Dog\n", &namespaces());
        assert!(matches!(result, Err(ConvertError::UnknownNamespace(t)) if t == "zz:Dog"));
    }

    #[test]
    fn label_cells_fall_back_to_literals() {
        let graph = map(
            TableKind::Classes,
            "name,rdfs:label,rdfs:comment\nex:Cat,Cat,zz:notes\n",
            &namespaces(),
        )
        .unwrap_or_default();
        assert!(graph.contains(&Triple::new(ex("Cat"), vocab::rdfs_label(), Literal::new("Cat"))));
        assert!(graph.contains(&Triple::new(
            ex("Cat"),
            Identifier::new(vocab::RDFS, "comment"),
            Literal::new("zz:notes")
        )));
    }

    #[test]
    fn forced_columns_qualify_bare_values() {
        let graph = map(TableKind::Classes, "name,ex:color\nex:Cat,Black\n", &namespaces())
            .unwrap_or_default();
        assert!(graph.contains(&Triple::new(
            ex("Cat"),
            ex("color"),
            Identifier::new(vocab::RDFS, "Black")
        )));
    }

    #[test]
    fn free_text_in_forced_column_is_literal() {
        let graph = map(
            TableKind::Classes,
            "name,ex:note@de\nex:Cat,eine Katze\n",
            &namespaces(),
        )
        .unwrap_or_default();
        assert!(graph.contains(&Triple::new(
            ex("Cat"),
            ex("note"),
            Literal::with_language("eine Katze", Some("de"))
        )));
    }

    #[test]
    fn language_tag_is_dropped_for_identifiers() {
        let graph = map(TableKind::Classes, "name,ex:related@en\nex:Cat,ex:Dog\n", &namespaces())
            .unwrap_or_default();
        assert!(graph.contains(&Triple::new(ex("Cat"), ex("related"), ex("Dog"))));
    }

    #[test]
    fn hierarchy_free_text_becomes_default_namespace_identifier() {
        let graph = map(
            TableKind::Classes,
            "name,superClass\nex:Cat,small animal\n",
            &namespaces(),
        )
        .unwrap_or_default();
        assert!(graph.contains(&Triple::new(
            ex("Cat"),
            vocab::rdfs_sub_class_of(),
            Identifier::new(vocab::RDFS, "small animal")
        )));
    }

    #[test]
    fn hierarchy_free_text_follows_loaded_default() {
        let mut namespaces = namespaces();
        let default = namespaces.register("base", "http://example.org/base#");
        namespaces.set_default(default);
        let graph = map(
            TableKind::Properties,
            "name,superProperties\nex:hasOwner,related to\n",
            &namespaces,
        )
        .unwrap_or_default();
        assert!(graph.contains(&Triple::new(
            ex("hasOwner"),
            vocab::rdfs_sub_property_of(),
            Identifier::new("http://example.org/base#", "related to")
        )));
    }

    #[test]
    fn hierarchy_field_depends_on_table_kind() {
        let graph = map(TableKind::Properties, "name,superClass\nex:hasOwner,ex:Thing\n", &namespaces())
            .unwrap_or_default();
        assert!(graph.contains(&Triple::new(
            ex("hasOwner"),
            Identifier::new(vocab::RDFS, "superClass"),
            ex("Thing")
        )));
    }

    #[test]
    fn cells_beyond_header_are_ignored() {
        let graph = map(TableKind::Classes, "name,superClass\nex:Cat,ex:Animal,extra\n", &namespaces())
            .unwrap_or_default();
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn repeated_subjects_are_typed_once() {
        let graph = map(
            TableKind::Classes,
            "name,superClass\nex:Cat,ex:Animal\nex:Cat,ex:Pet\n",
            &namespaces(),
        )
        .unwrap_or_default();
        let type_triples = graph
            .iter()
            .filter(|t| t.predicate == vocab::rdf_type())
            .count();
        assert_eq!(type_triples, 1);
        assert_eq!(graph.len(), 3);
    }
}
