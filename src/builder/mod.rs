//! Schema builder module
//!
//! Builds the typed schema from a model description's table and column
//! elements and its join declarations.

mod build;
mod error;

pub use build::{build_model_schema, build_schema};
pub use error::SchemaError;
