//! Table definitions

use serde::Serialize;
use super::column::SchemaColumn;
use crate::condition::Sort;

/// A table of the schema
///
/// Columns are ordered primary keys first, then by name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaTable {
    pub name: String,
    pub columns: Vec<SchemaColumn>,
    pub default_sort: Option<Sort>,
    /// Column names projected when a query names only the table
    pub default_select: Vec<String>,
    /// Related tables pulled in alongside this one
    pub extra_tables: Vec<String>,
    pub default_date: Option<SchemaColumn>,
}

impl SchemaTable {
    /// Get a column by name
    pub fn get_column(&self, name: &str) -> Option<&SchemaColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Primary-key columns in table order
    pub fn primary_keys(&self) -> Vec<&SchemaColumn> {
        self.columns.iter().filter(|c| c.is_pk).collect()
    }

    /// The column that stands in for the whole table
    ///
    /// The first primary-key column by name, or the first column when the
    /// table has no primary key. `None` only for a table without columns.
    pub fn representative_column(&self) -> Option<&SchemaColumn> {
        self.columns.iter().min_by(|a, b| a.sort_key().cmp(&b.sort_key()))
    }

    /// Columns a group-by over the whole table uses: all primary keys, else the first column
    pub fn grouping_columns(&self) -> Vec<&SchemaColumn> {
        let pks = self.primary_keys();
        if pks.is_empty() {
            self.columns.first().into_iter().collect()
        } else {
            pks
        }
    }
}
