//! Condition extractor module
//!
//! The public contract of the crate: turns concrete tokens of a variant into
//! schema objects and typed conditions.

mod error;
mod extract;

pub use error::ExtractError;
pub use extract::Extractor;
