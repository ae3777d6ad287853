//! Shared test utilities for integration tests

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use semsql::token::keys;
use semsql::{build_model_schema, parser, Schema, Token};

/// Load a model description from the test_data directory and build its schema
pub fn load_schema(name: &str) -> Schema {
    let path = format!("test_data/{}", name);
    let model = parser::parse_file(&path)
        .unwrap_or_else(|e| panic!("Failed to load test data {}: {}", name, e));
    build_model_schema(&model)
        .unwrap_or_else(|e| panic!("Failed to build schema for {}: {}", name, e))
}

// =============================================================================
// Token builders
// =============================================================================

pub fn table_token(name: &str) -> Token {
    Token::new(format!("tbl:{}", name))
        .with_group(keys::GROUP_TABLE)
        .with_meta(keys::SQL_NAME, name)
}

pub fn column_token(table: &str, name: &str) -> Token {
    Token::new(format!("col:{}_{}", table, name))
        .with_group(keys::GROUP_COLUMN)
        .with_meta(keys::SQL_TABLE_NAME, table)
        .with_meta(keys::SQL_NAME, name)
}

/// A column token whose match carried a literal value
pub fn value_token(table: &str, name: &str, value: &str) -> Token {
    column_token(table, name).with_value(value)
}

/// A token of identifier `id` referencing position `position`, whose token must be `note`
pub fn reference_token(id: &str, position: i64, note: &str) -> Token {
    Token::new(id)
        .with_meta(keys::indexes_key(id), vec![position])
        .with_meta(keys::note_key(id), note)
}

pub fn sort_token(position: i64, note: &str, ascending: bool) -> Token {
    reference_token(keys::SORT_ID, position, note).with_meta(keys::SORT_ASC, ascending)
}

pub fn limit_token(position: i64, note: &str, limit: f64, ascending: bool) -> Token {
    reference_token(keys::LIMIT_ID, position, note)
        .with_meta(keys::LIMIT_LIMIT, limit)
        .with_meta(keys::LIMIT_ASC, ascending)
}

pub fn function_token(position: i64, note: &str, function: &str) -> Token {
    reference_token(keys::AGGREGATION_ID, position, note).with_meta(keys::AGGREGATION_TYPE, function)
}

pub fn group_token(position: i64, note: &str) -> Token {
    reference_token(keys::GROUP_BY_ID, position, note)
}

pub fn date_token(from: &str, to: &str) -> Token {
    Token::new(keys::DATE_ID)
        .with_meta(keys::DATE_FROM, timestamp(from))
        .with_meta(keys::DATE_TO, timestamp(to))
}

pub fn num_token() -> Token {
    Token::new(keys::NUM_ID)
}

pub fn timestamp(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .unwrap_or_else(|e| panic!("Bad timestamp {}: {}", s, e))
        .with_timezone(&Utc)
}
