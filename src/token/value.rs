//! Typed metadata values

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A metadata value attached to a token or model element
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetaValue {
    String(String),
    Int(i64),
    Double(f64),
    Bool(bool),
    Timestamp(DateTime<Utc>),
    StringList(Vec<String>),
    IntList(Vec<i64>),
}

impl MetaValue {
    /// Name of the value's type, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            MetaValue::String(_) => "string",
            MetaValue::Int(_) => "integer",
            MetaValue::Double(_) => "double",
            MetaValue::Bool(_) => "boolean",
            MetaValue::Timestamp(_) => "timestamp",
            MetaValue::StringList(_) => "string list",
            MetaValue::IntList(_) => "integer list",
        }
    }
}

/// A Rust type that can be read out of a [`MetaValue`]
///
/// Reads never coerce: a `Double` is not an `i64` and an `Int` is not an `f64`.
pub trait MetaType: Sized {
    const NAME: &'static str;

    fn from_meta(value: &MetaValue) -> Option<Self>;
}

impl MetaType for String {
    const NAME: &'static str = "string";

    fn from_meta(value: &MetaValue) -> Option<Self> {
        match value {
            MetaValue::String(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl MetaType for i64 {
    const NAME: &'static str = "integer";

    fn from_meta(value: &MetaValue) -> Option<Self> {
        match value {
            MetaValue::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl MetaType for f64 {
    const NAME: &'static str = "double";

    fn from_meta(value: &MetaValue) -> Option<Self> {
        match value {
            MetaValue::Double(d) => Some(*d),
            _ => None,
        }
    }
}

impl MetaType for bool {
    const NAME: &'static str = "boolean";

    fn from_meta(value: &MetaValue) -> Option<Self> {
        match value {
            MetaValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl MetaType for DateTime<Utc> {
    const NAME: &'static str = "timestamp";

    fn from_meta(value: &MetaValue) -> Option<Self> {
        match value {
            MetaValue::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }
}

impl MetaType for Vec<String> {
    const NAME: &'static str = "string list";

    fn from_meta(value: &MetaValue) -> Option<Self> {
        match value {
            MetaValue::StringList(list) => Some(list.clone()),
            _ => None,
        }
    }
}

impl MetaType for Vec<i64> {
    const NAME: &'static str = "integer list";

    fn from_meta(value: &MetaValue) -> Option<Self> {
        match value {
            MetaValue::IntList(list) => Some(list.clone()),
            _ => None,
        }
    }
}

impl From<&str> for MetaValue {
    fn from(value: &str) -> Self {
        MetaValue::String(value.to_string())
    }
}

impl From<String> for MetaValue {
    fn from(value: String) -> Self {
        MetaValue::String(value)
    }
}

impl From<i64> for MetaValue {
    fn from(value: i64) -> Self {
        MetaValue::Int(value)
    }
}

impl From<f64> for MetaValue {
    fn from(value: f64) -> Self {
        MetaValue::Double(value)
    }
}

impl From<bool> for MetaValue {
    fn from(value: bool) -> Self {
        MetaValue::Bool(value)
    }
}

impl From<DateTime<Utc>> for MetaValue {
    fn from(value: DateTime<Utc>) -> Self {
        MetaValue::Timestamp(value)
    }
}

impl From<Vec<String>> for MetaValue {
    fn from(value: Vec<String>) -> Self {
        MetaValue::StringList(value)
    }
}

impl From<Vec<&str>> for MetaValue {
    fn from(value: Vec<&str>) -> Self {
        MetaValue::StringList(value.into_iter().map(String::from).collect())
    }
}

impl From<Vec<i64>> for MetaValue {
    fn from(value: Vec<i64>) -> Self {
        MetaValue::IntList(value)
    }
}
