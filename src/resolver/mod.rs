//! Reference resolver module
//!
//! Follows index-linked references between tokens of a variant and reduces
//! a token, with its parts, to the single column or table it denotes.

mod error;
mod resolve;

pub use error::ResolveError;
pub use resolve::{
    collect_tokens_with_group,
    lookup_column,
    lookup_table,
    resolve_linked_token,
    resolve_reference_column,
    resolve_single_column,
    resolve_single_table,
};
