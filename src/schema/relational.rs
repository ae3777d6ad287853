//! Root schema definition

use serde::Serialize;
use super::column::SchemaColumn;
use super::join::SchemaJoin;
use super::table::SchemaTable;

/// The relational schema: tables in declaration order plus joins
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Schema {
    pub tables: Vec<SchemaTable>,
    pub joins: Vec<SchemaJoin>,
}

impl Schema {
    /// Get a table by name
    pub fn get_table(&self, name: &str) -> Option<&SchemaTable> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Get a column by table and column name
    pub fn get_column(&self, table: &str, name: &str) -> Option<&SchemaColumn> {
        self.get_table(table)?.get_column(name)
    }

    /// Table names in declaration order
    pub fn table_names(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.name.as_str()).collect()
    }

    /// All joins with `table` on either side
    pub fn joins_for(&self, table: &str) -> Vec<&SchemaJoin> {
        self.joins.iter().filter(|j| j.touches(table)).collect()
    }

    /// The first join connecting two tables, in either direction
    pub fn find_join(&self, a: &str, b: &str) -> Option<&SchemaJoin> {
        self.joins.iter().find(|j| j.connects(a, b))
    }
}
