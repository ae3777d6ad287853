//! Error types shared across the crate

use thiserror::Error;

/// Errors that can occur while loading a model description
#[derive(Debug, Error)]
pub enum ParseError {
    /// IO error reading file
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// YAML deserialization error
    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Metadata value that has no typed representation
    #[error("Invalid metadata '{key}' on '{owner}': {message}")]
    InvalidMetadata {
        owner: String,
        key: String,
        message: String,
    },
}

/// Broad category of a schema or extraction failure
///
/// Lets callers tell "found the wrong kind" from "found too much" from
/// "found nothing" without matching on every error variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A token's identifier, group or metadata type is not what the operation requires
    TokenType,
    /// Zero or several matches where exactly one was required
    Cardinality,
    /// An index-linked reference or a named table/column could not be followed
    Reference,
    /// The schema description is inconsistent
    Schema,
    /// A composite rule found nothing to apply to, or a condition is malformed
    Extraction,
}
