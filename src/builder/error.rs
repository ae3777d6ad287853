//! Schema builder errors

use thiserror::Error;
use crate::error::ErrorKind;
use crate::schema::ParseDataTypeError;

/// The model description is internally inconsistent
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error("Model '{model}' was not produced by the SQL model generator (missing '{key}' metadata)")]
    MissingModelMarker { model: String, key: &'static str },

    #[error("Element '{element}' has no metadata '{key}'")]
    MissingMetadata { element: String, key: &'static str },

    #[error("Metadata '{key}' of element '{element}' is {found}, expected {expected}")]
    InvalidMetadata {
        element: String,
        key: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Column element '{element}': {source}")]
    InvalidDataType {
        element: String,
        #[source]
        source: ParseDataTypeError,
    },

    #[error("Column element '{element}' references unknown table '{table}'")]
    UnknownTable { element: String, table: String },

    #[error("Table '{0}' is declared more than once")]
    DuplicateTable(String),

    #[error("Column '{table}.{column}' is declared more than once")]
    DuplicateColumn { table: String, column: String },

    #[error("Invalid default sort '{value}' for table '{table}': {reason}")]
    InvalidDefaultSort {
        table: String,
        value: String,
        reason: &'static str,
    },

    #[error("Invalid default date '{value}' for table '{table}': {reason}")]
    InvalidDefaultDate {
        table: String,
        value: String,
        reason: &'static str,
    },

    #[error("Default {usage} of table '{table}' refers to unknown column '{reference}'")]
    UnknownColumn {
        table: String,
        reference: String,
        usage: &'static str,
    },

    #[error("Invalid join type '{join_type}' in join {from_table} -> {to_table}")]
    UnknownJoinType {
        from_table: String,
        to_table: String,
        join_type: String,
    },

    #[error("Join {from_table} -> {to_table} refers to unknown table '{table}'")]
    UnknownJoinTable {
        from_table: String,
        to_table: String,
        table: String,
    },

    #[error("Join {from_table} -> {to_table} refers to unknown column '{table}.{column}'")]
    UnknownJoinColumn {
        from_table: String,
        to_table: String,
        table: String,
        column: String,
    },

    #[error("Join {from_table} -> {to_table} pairs {from_count} columns with {to_count}")]
    JoinColumnCount {
        from_table: String,
        to_table: String,
        from_count: usize,
        to_count: usize,
    },
}

impl SchemaError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Schema
    }
}
