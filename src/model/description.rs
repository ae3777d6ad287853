//! Model description: elements, joins and model-level metadata

use indexmap::IndexMap;
use serde::Deserialize;
use crate::token::MetaValue;

/// A parsed model description
#[derive(Debug, Clone, Default)]
pub struct ModelDescription {
    pub id: String,
    pub metadata: IndexMap<String, MetaValue>,
    pub elements: Vec<ModelElement>,
    pub joins: Vec<JoinDeclaration>,
}

/// A declared model element (a table or a column)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelElement {
    pub id: String,
    pub groups: Vec<String>,
    pub metadata: IndexMap<String, MetaValue>,
}

impl ModelElement {
    pub fn new(id: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            groups: vec![group.into()],
            metadata: IndexMap::new(),
        }
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<MetaValue>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn is_member_of(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g == group)
    }
}

/// A join as written in the model description
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JoinDeclaration {
    #[serde(rename = "fromtable")]
    pub from_table: String,
    #[serde(rename = "totable")]
    pub to_table: String,
    #[serde(rename = "fromcolumns")]
    pub from_columns: Vec<String>,
    #[serde(rename = "tocolumns")]
    pub to_columns: Vec<String>,
    #[serde(rename = "jointype")]
    pub join_type: String,
}
