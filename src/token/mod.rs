//! Parsed-token types (nouns)
//!
//! Tokens are produced upstream by the language-understanding pipeline.
//! This crate only reads them: identifiers, group tags, typed metadata and
//! constituent part tokens.

mod error;
pub mod keys;
mod types;
mod value;

pub use error::TokenTypeError;
pub use types::{Token, Variant};
pub use value::{MetaType, MetaValue};
