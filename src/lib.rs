//! semsql - Translate resolved natural-language parses into SQL query fragments
//!
//! This library provides:
//! - Schema types (Schema, SchemaTable, SchemaColumn, SchemaJoin)
//! - Model description parsing from YAML
//! - Schema construction from model elements and join declarations
//! - Reference resolution between tokens of a parse variant
//! - Extraction of typed conditions (comparisons, IN lists, sort, limit, aggregates)
//!
//! Rendering the extracted values into SQL text is left to the caller.
//!
//! # Architecture
//!
//! **Noun modules** (data structures):
//! - `token/` - parsed input (Token, Variant, MetaValue)
//! - `model/` - declarative model description (ModelElement, JoinDeclaration)
//! - `schema/` - relational schema (Schema, SchemaTable, SchemaColumn, SchemaJoin)
//! - `condition/` - extraction results (SimpleCondition, InCondition, Sort, Limit, Aggregate)
//!
//! **Verb modules** (transformations):
//! - `parser/` - YAML → ModelDescription
//! - `builder/` - ModelDescription → Schema
//! - `resolver/` - Token + Variant → referenced token, column or table
//! - `extractor/` - Schema + Variant + Tokens → conditions
//!
//! # Example
//!
//! ```ignore
//! use semsql::{parser, build_model_schema, Extractor, Variant};
//!
//! let model = parser::parse_file("model.yaml")?;
//! let schema = build_model_schema(&model)?;
//! let variant = Variant::new(tokens);
//! let extractor = Extractor::new(&schema, &variant);
//! let limit = extractor.extract_limit(&variant.tokens[2])?;
//! ```

pub mod token;
pub mod model;
pub mod schema;
pub mod condition;
pub mod parser;
pub mod builder;
pub mod resolver;
pub mod extractor;
pub mod error;

// Re-export commonly used types
pub use token::{Token, Variant, MetaValue, MetaType, TokenTypeError};
pub use model::{ModelDescription, ModelElement, JoinDeclaration};
pub use schema::{Schema, SchemaTable, SchemaColumn, SchemaJoin, JoinType, DataType};
pub use condition::{SimpleCondition, Operator, ConditionValue, InCondition, Sort, Limit, DateRange, Aggregate, AggregateSelect, AggregateFunction};
pub use builder::{build_schema, build_model_schema, SchemaError};
pub use resolver::ResolveError;
pub use extractor::{Extractor, ExtractError};
pub use error::{ErrorKind, ParseError};
