//! Column definitions

use serde::Serialize;
use super::types::DataType;

/// A column of a schema table
///
/// Identity is `(table, name)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaColumn {
    pub table: String,
    pub name: String,
    pub data_type: DataType,
    pub is_pk: bool,
    pub is_nullable: bool,
}

impl SchemaColumn {
    /// Fully qualified name: table.column
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.table, self.name)
    }

    /// Key used to pick a table's representative column: primary keys first, then by name
    pub fn sort_key(&self) -> (u8, &str) {
        (if self.is_pk { 0 } else { 1 }, self.name.as_str())
    }

    pub fn is_same(&self, table: &str, name: &str) -> bool {
        self.table == table && self.name == name
    }
}
