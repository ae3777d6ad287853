//! SQL data type tags declared for schema columns

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Data type declared by a column's `sql:datatype` metadata
#[derive(Debug, Clone, PartialEq)]
pub enum DataType {
    SmallInt,
    Integer,
    BigInt,
    Real,
    Double,
    /// Fixed-point numeric with precision and scale
    Decimal { precision: u8, scale: u8 },
    Boolean,
    Char,
    Varchar,
    Text,
    Date,
    Time,
    Timestamp,
    Binary,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::SmallInt => write!(f, "smallint"),
            DataType::Integer => write!(f, "integer"),
            DataType::BigInt => write!(f, "bigint"),
            DataType::Real => write!(f, "real"),
            DataType::Double => write!(f, "double"),
            DataType::Decimal { precision, scale } => write!(f, "decimal({}, {})", precision, scale),
            DataType::Boolean => write!(f, "boolean"),
            DataType::Char => write!(f, "char"),
            DataType::Varchar => write!(f, "varchar"),
            DataType::Text => write!(f, "text"),
            DataType::Date => write!(f, "date"),
            DataType::Time => write!(f, "time"),
            DataType::Timestamp => write!(f, "timestamp"),
            DataType::Binary => write!(f, "binary"),
        }
    }
}

/// Error when parsing a data type string
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Invalid data type '{input}': {message}")]
pub struct ParseDataTypeError {
    pub input: String,
    pub message: String,
}

impl FromStr for DataType {
    type Err = ParseDataTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();

        for prefix in ["decimal(", "numeric("] {
            if let Some(inner) = lower.strip_prefix(prefix).and_then(|r| r.strip_suffix(')')) {
                return parse_decimal(s, inner);
            }
        }

        match lower.as_str() {
            "smallint" | "tinyint" | "int2" => Ok(DataType::SmallInt),
            "integer" | "int" | "int4" | "serial" => Ok(DataType::Integer),
            "bigint" | "int8" | "bigserial" => Ok(DataType::BigInt),
            "real" | "float" | "float4" => Ok(DataType::Real),
            "double" | "double precision" | "float8" => Ok(DataType::Double),
            "decimal" | "numeric" => Ok(DataType::Decimal { precision: 38, scale: 0 }),
            "boolean" | "bool" | "bit" => Ok(DataType::Boolean),
            "char" | "character" | "bpchar" => Ok(DataType::Char),
            "varchar" | "character varying" | "nvarchar" => Ok(DataType::Varchar),
            "text" | "clob" | "string" => Ok(DataType::Text),
            "date" => Ok(DataType::Date),
            "time" => Ok(DataType::Time),
            "timestamp" | "datetime" | "timestamptz" => Ok(DataType::Timestamp),
            "binary" | "varbinary" | "blob" | "bytea" => Ok(DataType::Binary),
            _ => Err(ParseDataTypeError {
                input: s.to_string(),
                message: "unknown type".to_string(),
            }),
        }
    }
}

fn parse_decimal(input: &str, inner: &str) -> Result<DataType, ParseDataTypeError> {
    let invalid = |message: &str| ParseDataTypeError {
        input: input.to_string(),
        message: message.to_string(),
    };

    let parts: Vec<&str> = inner.split(',').map(|p| p.trim()).collect();
    let (precision, scale) = match parts.as_slice() {
        [p] => (p.parse::<u8>().map_err(|_| invalid("invalid precision"))?, 0),
        [p, s] => (
            p.parse::<u8>().map_err(|_| invalid("invalid precision"))?,
            s.parse::<u8>().map_err(|_| invalid("invalid scale"))?,
        ),
        _ => return Err(invalid("expected decimal(precision) or decimal(precision, scale)")),
    };

    if precision == 0 || precision > 38 {
        return Err(invalid("precision must be between 1 and 38"));
    }
    if scale > precision {
        return Err(invalid("scale cannot exceed precision"));
    }

    Ok(DataType::Decimal { precision, scale })
}

impl Serialize for DataType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
