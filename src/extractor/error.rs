//! Extraction errors

use thiserror::Error;
use crate::error::ErrorKind;
use crate::resolver::ResolveError;
use crate::token::TokenTypeError;

/// Errors that can occur while extracting a condition
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtractError {
    #[error(transparent)]
    Resolve(ResolveError),

    #[error(transparent)]
    TokenType(#[from] TokenTypeError),

    /// A reference rule found no column or table to apply to
    #[error("Cannot extract {what} from token '{token}': {reason}")]
    Extraction {
        token: String,
        what: &'static str,
        reason: &'static str,
    },

    /// The token's metadata does not describe a well-formed condition
    #[error("Invalid {what} token '{token}': {reason}")]
    InvalidCondition {
        token: String,
        what: &'static str,
        reason: String,
    },
}

impl From<ResolveError> for ExtractError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::TokenType(e) => ExtractError::TokenType(e),
            other => ExtractError::Resolve(other),
        }
    }
}

impl ExtractError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExtractError::Resolve(e) => e.kind(),
            ExtractError::TokenType(_) => ErrorKind::TokenType,
            ExtractError::Extraction { .. } | ExtractError::InvalidCondition { .. } => ErrorKind::Extraction,
        }
    }
}
