//! Identifier resolution: `namespace:value` tokens to full identifiers.
//!
//! Resolution runs in one of two modes. In force mode a token must become
//! an identifier: a bare token is qualified with the default namespace and
//! an unknown namespace is an error. In non-forcing mode any failure just
//! means "not an identifier", which the row mapper turns into a literal.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ConvertError, Result};
use crate::model::Identifier;
use crate::namespace::NamespaceTable;

#[allow(clippy::expect_used)]
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<namespace>[^:]+):(?P<value>\w+)").expect("token pattern is valid")
});

/// Outcome of resolving a single token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The token names a resource.
    Identifier(Identifier),
    /// The token is not identifier-valued (free text, or an unresolvable
    /// token in non-forcing mode).
    NotIdentifier,
}

impl Resolution {
    /// Returns the identifier, if resolution produced one.
    #[must_use]
    pub fn into_identifier(self) -> Option<Identifier> {
        match self {
            Resolution::Identifier(id) => Some(id),
            Resolution::NotIdentifier => None,
        }
    }
}

/// Splits `token` into its `(namespace, value)` parts.
///
/// The value is the run of word characters after the first colon; anything
/// after it is ignored.
///
/// # Errors
///
/// Returns [`ConvertError::MalformedToken`] if the token has no
/// `namespace:value` part.
pub fn split_token(token: &str) -> Result<(&str, &str)> {
    let caps = TOKEN_PATTERN
        .captures(token)
        .ok_or_else(|| ConvertError::MalformedToken(token.to_owned()))?;
    match (caps.name("namespace"), caps.name("value")) {
        (Some(ns), Some(value)) => Ok((ns.as_str(), value.as_str())),
        _ => Err(ConvertError::MalformedToken(token.to_owned())),
    }
}

/// Resolves tokens against a [`NamespaceTable`].
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    namespaces: &'a NamespaceTable,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver over a fully loaded namespace table.
    #[must_use]
    pub fn new(namespaces: &'a NamespaceTable) -> Self {
        Self { namespaces }
    }

    /// The table this resolver reads from.
    #[must_use]
    pub fn namespaces(&self) -> &'a NamespaceTable {
        self.namespaces
    }

    /// Resolves `token` to an identifier.
    ///
    /// A token containing whitespace after trimming is never an identifier.
    /// A token without a `namespace:` part resolves against the default
    /// namespace in force mode and is not an identifier otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::UnknownNamespace`] in force mode when the
    /// token's namespace is neither registered nor well-known.
    pub fn resolve(&self, token: &str, force: bool) -> Result<Resolution> {
        let token = token.trim();
        if token.chars().any(char::is_whitespace) {
            return Ok(Resolution::NotIdentifier);
        }

        let (namespace, value) = match split_token(token) {
            Ok(parts) => parts,
            Err(_) if force => {
                return Ok(Resolution::Identifier(
                    self.namespaces.default_namespace().term(token),
                ));
            }
            Err(_) => return Ok(Resolution::NotIdentifier),
        };

        match self.namespaces.base_of(namespace) {
            Some(base) => Ok(Resolution::Identifier(Identifier::new(base, value))),
            None if force => Err(ConvertError::UnknownNamespace(token.to_owned())),
            None => Ok(Resolution::NotIdentifier),
        }
    }
}
