//! Declarative model description types (nouns)
//!
//! The flat element list and join declarations a schema is built from.

mod description;

pub use description::{JoinDeclaration, ModelDescription, ModelElement};
