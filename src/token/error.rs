//! Token type errors

use thiserror::Error;

/// A token does not have the shape an operation requires
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TokenTypeError {
    #[error("Token '{found}' used where '{expected}' is required")]
    UnexpectedId { expected: String, found: String },

    #[error("Token '{token}' is not in group '{group}'")]
    MissingGroup { token: String, group: String },

    #[error("Token '{token}' has no metadata '{key}'")]
    MissingMetadata { token: String, key: String },

    #[error("Metadata '{key}' of token '{token}' is {found}, expected {expected}")]
    MetadataType {
        token: String,
        key: String,
        expected: &'static str,
        found: &'static str,
    },
}
