//! Join definitions between schema tables

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Kind of join between two tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinType {
    Inner,
    Left,
    Right,
    Full,
}

impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinType::Inner => write!(f, "inner"),
            JoinType::Left => write!(f, "left"),
            JoinType::Right => write!(f, "right"),
            JoinType::Full => write!(f, "full"),
        }
    }
}

/// Error when parsing a join kind string
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown join type '{input}'. Valid options: inner, left, right, full")]
pub struct ParseJoinTypeError {
    pub input: String,
}

impl FromStr for JoinType {
    type Err = ParseJoinTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inner" => Ok(JoinType::Inner),
            "left" => Ok(JoinType::Left),
            "right" => Ok(JoinType::Right),
            "full" => Ok(JoinType::Full),
            _ => Err(ParseJoinTypeError { input: s.to_string() }),
        }
    }
}

/// A join from one table's columns to another's
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaJoin {
    pub from_table: String,
    pub to_table: String,
    pub from_columns: Vec<String>,
    pub to_columns: Vec<String>,
    pub join_type: JoinType,
}

impl SchemaJoin {
    /// Check if the join connects `table` on either side
    pub fn touches(&self, table: &str) -> bool {
        self.from_table == table || self.to_table == table
    }

    /// Check if the join connects `a` and `b`, in either direction
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.from_table == a && self.to_table == b) || (self.from_table == b && self.to_table == a)
    }

    /// Column pairs `(from, to)` in declaration order
    pub fn column_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.from_columns
            .iter()
            .zip(self.to_columns.iter())
            .map(|(f, t)| (f.as_str(), t.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_join_type_case_insensitive() {
        assert_eq!("INNER".parse::<JoinType>().unwrap(), JoinType::Inner);
        assert_eq!("Left".parse::<JoinType>().unwrap(), JoinType::Left);
        assert_eq!("right".parse::<JoinType>().unwrap(), JoinType::Right);
        assert_eq!("full".parse::<JoinType>().unwrap(), JoinType::Full);
    }

    #[test]
    fn test_parse_join_type_unknown() {
        assert!("cross".parse::<JoinType>().is_err());
        assert!("".parse::<JoinType>().is_err());
    }

    #[test]
    fn test_connects_either_direction() {
        let join = SchemaJoin {
            from_table: "orders".to_string(),
            to_table: "customers".to_string(),
            from_columns: vec!["customer_id".to_string()],
            to_columns: vec!["id".to_string()],
            join_type: JoinType::Inner,
        };
        assert!(join.connects("customers", "orders"));
        assert!(join.touches("orders"));
        assert!(!join.touches("products"));
        assert_eq!(join.column_pairs().collect::<Vec<_>>(), vec![("customer_id", "id")]);
    }
}
