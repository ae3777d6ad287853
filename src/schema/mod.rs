//! Relational schema types (nouns)
//!
//! These types represent the schema built from a model description.
//! They are immutable once built and safe to share across extraction calls.

mod column;
mod join;
mod relational;
mod table;
mod types;

pub use column::SchemaColumn;
pub use join::{JoinType, ParseJoinTypeError, SchemaJoin};
pub use relational::Schema;
pub use table::SchemaTable;
pub use types::{DataType, ParseDataTypeError};
