//! Error type shared by every stage of a conversion.

use thiserror::Error;

/// Errors that abort a conversion.
///
/// There is no partial-result mode: the first structural error ends the run.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A token expected to read as `namespace:value` does not, and no
    /// default-namespace fallback applies.
    #[error("{0:?} does not match namespace:value")]
    MalformedToken(String),

    /// A namespace prefix is neither registered nor well-known.
    #[error("unknown namespace in {0:?}")]
    UnknownNamespace(String),

    /// A row's first cell cannot be used as an identifier.
    #[error("row subject {0:?} is not a valid identifier")]
    InvalidSubject(String),

    /// A prefix table row is missing its name or base IRI.
    #[error("prefix row {row} must have a marker, a prefix name, and a base IRI")]
    MalformedPrefixRow {
        /// 1-based row number.
        row: usize,
    },

    /// An output format name is not recognised.
    #[error("unknown output format {0:?} (expected json-ld, turtle, ntriples, or xml)")]
    UnknownFormat(String),

    /// The graph cannot be expressed in the requested format.
    #[error("cannot serialize graph: {0}")]
    Serialization(String),

    /// The tabular reader rejected the input.
    #[error("malformed table: {0}")]
    Csv(#[from] csv::Error),

    /// Reading an input failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// JSON-LD rendering failed.
    #[error("failed to render JSON-LD: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ConvertError>;
