//! Error types for stencil registration and application.
//!
//! This module provides [`StencilError`], the error type returned by every
//! fallible registry and apply operation. Unknown color names are never
//! reported through it: they degrade to uncolored output instead.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// The namespace a stencil id lives in.
///
/// Template and table stencils are stored separately, so the same id may be
/// registered once in each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StencilKind {
    Template,
    Table,
}

impl fmt::Display for StencilKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StencilKind::Template => write!(f, "template"),
            StencilKind::Table => write!(f, "table"),
        }
    }
}

/// Error type for stencil operations.
#[derive(Debug, Error)]
pub enum StencilError {
    /// Registration attempted with an empty id.
    #[error("{kind} stencil id must not be empty")]
    EmptyId { kind: StencilKind },

    /// Registration attempted with an id already present in that namespace.
    #[error("{kind} stencil with id '{id}' already exists")]
    DuplicateId { kind: StencilKind, id: String },

    /// Lookup or apply requested for an id with no matching record.
    #[error("unable to find {kind} stencil with id '{id}'")]
    NotFound { kind: StencilKind, id: String },

    /// The template source could not be parsed or rendered.
    #[error("template error: {0}")]
    Template(String),
}

impl StencilError {
    /// Returns the stencil namespace the error refers to, if any.
    pub fn kind(&self) -> Option<StencilKind> {
        match self {
            StencilError::EmptyId { kind }
            | StencilError::DuplicateId { kind, .. }
            | StencilError::NotFound { kind, .. } => Some(*kind),
            StencilError::Template(_) => None,
        }
    }
}

// Every engine failure (syntax, unknown filter, bad escape...) is a problem
// with the template source itself.
impl From<minijinja::Error> for StencilError {
    fn from(err: minijinja::Error) -> Self {
        StencilError::Template(err.to_string())
    }
}

/// Result type for stencil operations.
pub type Result<T> = std::result::Result<T, StencilError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StencilError::NotFound {
            kind: StencilKind::Table,
            id: "foo".to_string(),
        };
        assert_eq!(err.to_string(), "unable to find table stencil with id 'foo'");
    }

    #[test]
    fn test_duplicate_display_names_namespace() {
        let err = StencilError::DuplicateId {
            kind: StencilKind::Template,
            id: "greet".to_string(),
        };
        assert!(err.to_string().contains("template stencil"));
        assert!(err.to_string().contains("greet"));
    }

    #[test]
    fn test_kind_accessor() {
        let err = StencilError::EmptyId {
            kind: StencilKind::Table,
        };
        assert_eq!(err.kind(), Some(StencilKind::Table));
        assert_eq!(StencilError::Template("x".into()).kind(), None);
    }

    #[test]
    fn test_from_minijinja_error() {
        let mj_err = minijinja::Error::new(minijinja::ErrorKind::SyntaxError, "unexpected end");
        let err: StencilError = mj_err.into();
        assert!(matches!(err, StencilError::Template(_)));
        assert!(err.to_string().starts_with("template error:"));
    }
}
