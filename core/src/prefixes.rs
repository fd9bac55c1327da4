//! Prefix table loader.
//!
//! A prefix table has no header. Each row is `marker, prefix, base IRI`;
//! a marker containing `default` makes that row's namespace the default
//! for unqualified tokens.

use crate::error::{ConvertError, Result};
use crate::namespace::NamespaceTable;
use crate::table::Table;

/// Substring of the marker cell that selects the default namespace.
const DEFAULT_MARKER: &str = "default";

/// Registers every prefix row of `table` in `namespaces`.
///
/// Later rows overwrite earlier rows with the same (case-insensitive) name,
/// and the last row marked default wins. Blank rows are skipped. Returns the
/// number of rows registered.
///
/// # Errors
///
/// Returns [`ConvertError::MalformedPrefixRow`] for a non-blank row that
/// lacks a prefix name or a base IRI.
pub fn load_prefixes(table: &Table, namespaces: &mut NamespaceTable) -> Result<usize> {
    let mut loaded = 0;
    for (index, row) in table.rows.iter().enumerate() {
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let (marker, name, base) = match row.as_slice() {
            [marker, name, base, ..] if !name.trim().is_empty() && !base.trim().is_empty() => {
                (marker.trim(), name.trim(), base.trim())
            }
            _ => return Err(ConvertError::MalformedPrefixRow { row: index + 1 }),
        };

        let ns = namespaces.register(name, base);
        tracing::debug!(prefix = %ns.name, base = %ns.base, "registered namespace");
        if marker.contains(DEFAULT_MARKER) {
            tracing::debug!(prefix = %ns.name, "default namespace");
            namespaces.set_default(ns);
        }
        loaded += 1;
    }
    Ok(loaded)
}
