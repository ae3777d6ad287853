//! Aggregate select functions and group-by specifications

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use crate::schema::SchemaColumn;

/// Aggregate functions a select column may be wrapped in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateFunction {
    Sum,
    Avg,
    Count,
    Min,
    Max,
}

impl fmt::Display for AggregateFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregateFunction::Sum => write!(f, "sum"),
            AggregateFunction::Avg => write!(f, "avg"),
            AggregateFunction::Count => write!(f, "count"),
            AggregateFunction::Min => write!(f, "min"),
            AggregateFunction::Max => write!(f, "max"),
        }
    }
}

/// Error when parsing an aggregate function tag
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown aggregate function '{input}'. Valid options: sum, avg, count, min, max")]
pub struct ParseAggregateFunctionError {
    pub input: String,
}

impl FromStr for AggregateFunction {
    type Err = ParseAggregateFunctionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sum" => Ok(AggregateFunction::Sum),
            "avg" | "average" => Ok(AggregateFunction::Avg),
            "count" => Ok(AggregateFunction::Count),
            "min" | "minimum" => Ok(AggregateFunction::Min),
            "max" | "maximum" => Ok(AggregateFunction::Max),
            _ => Err(ParseAggregateFunctionError { input: s.to_string() }),
        }
    }
}

impl Serialize for AggregateFunction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// `function(column)` in the select list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateSelect {
    pub column: SchemaColumn,
    pub function: AggregateFunction,
}

/// Aggregate selection plus group-by columns
///
/// Either list may be empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Aggregate {
    pub select: Vec<AggregateSelect>,
    pub group_by: Vec<SchemaColumn>,
}

impl Aggregate {
    pub fn is_empty(&self) -> bool {
        self.select.is_empty() && self.group_by.is_empty()
    }
}
