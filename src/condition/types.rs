//! Comparison, membership, sort, limit and date-range conditions

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;
use crate::schema::SchemaColumn;

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Eq,
    NotEq,
    GtEq,
    Gt,
    LtEq,
    Lt,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::NotEq => "<>",
            Operator::GtEq => ">=",
            Operator::Gt => ">",
            Operator::LtEq => "<=",
            Operator::Lt => "<",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Operator {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Right-hand side of a simple condition
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConditionValue {
    Number(f64),
    Timestamp(DateTime<Utc>),
}

impl fmt::Display for ConditionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionValue::Number(n) => write!(f, "{}", n),
            ConditionValue::Timestamp(ts) => write!(f, "{}", ts.to_rfc3339()),
        }
    }
}

impl From<f64> for ConditionValue {
    fn from(value: f64) -> Self {
        ConditionValue::Number(value)
    }
}

impl From<DateTime<Utc>> for ConditionValue {
    fn from(value: DateTime<Utc>) -> Self {
        ConditionValue::Timestamp(value)
    }
}

/// `column <op> value`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimpleCondition {
    pub column: SchemaColumn,
    pub operator: Operator,
    pub value: ConditionValue,
}

impl SimpleCondition {
    pub fn new(column: &SchemaColumn, operator: Operator, value: impl Into<ConditionValue>) -> Self {
        Self {
            column: column.clone(),
            operator,
            value: value.into(),
        }
    }
}

impl fmt::Display for SimpleCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.column.qualified_name(), self.operator, self.value)
    }
}

/// `column IN (values)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InCondition {
    pub column: SchemaColumn,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sort {
    pub column: SchemaColumn,
    pub ascending: bool,
}

/// Row limit along a column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Limit {
    pub column: SchemaColumn,
    pub limit: i64,
    pub ascending: bool,
}

/// Inclusive timestamp range
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DateRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl DateRange {
    /// `column >= from` and `column <= to`
    pub fn to_conditions(&self, column: &SchemaColumn) -> Vec<SimpleCondition> {
        vec![
            SimpleCondition::new(column, Operator::GtEq, self.from),
            SimpleCondition::new(column, Operator::LtEq, self.to),
        ]
    }
}
