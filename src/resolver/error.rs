//! Reference resolution errors

use thiserror::Error;
use crate::error::ErrorKind;
use crate::token::TokenTypeError;

/// Errors that can occur while resolving a token to schema objects
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    #[error(transparent)]
    TokenType(#[from] TokenTypeError),

    /// Zero or several sub-tokens matched where exactly one was required,
    /// or several where at most one may
    #[error("Expected one {what} for token '{token}', found {count}")]
    Cardinality {
        token: String,
        what: &'static str,
        count: usize,
    },

    #[error("Token '{token}' carries no reference position")]
    MissingReference { token: String },

    #[error("Token '{token}' references position {position}, but the variant has {len} tokens")]
    IndexOutOfBounds { token: String, position: i64, len: usize },

    #[error("Token '{token}' references '{found}' at position {position}, expected '{expected}'")]
    ReferenceMismatch {
        token: String,
        position: usize,
        expected: String,
        found: String,
    },

    #[error("Token '{token}' names unknown table '{table}'")]
    UnknownTable { token: String, table: String },

    #[error("Token '{token}' names unknown column '{table}.{column}'")]
    UnknownColumn {
        token: String,
        table: String,
        column: String,
    },
}

impl ResolveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResolveError::TokenType(_) => ErrorKind::TokenType,
            ResolveError::Cardinality { .. } => ErrorKind::Cardinality,
            ResolveError::MissingReference { .. }
            | ResolveError::IndexOutOfBounds { .. }
            | ResolveError::ReferenceMismatch { .. }
            | ResolveError::UnknownTable { .. }
            | ResolveError::UnknownColumn { .. } => ErrorKind::Reference,
        }
    }
}
