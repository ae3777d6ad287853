//! Integration tests for condition extraction
//!
//! Tokens are built by hand the way the upstream parser would emit them and
//! run against the schema of test_data/orders.yaml.

mod common;

use common::*;
use semsql::token::keys;
use semsql::{
    AggregateFunction, ConditionValue, ErrorKind, ExtractError, Extractor, Operator, ResolveError, Token,
    TokenTypeError, Variant,
};

fn bounds(conditions: &[semsql::SimpleCondition]) -> Vec<(String, Operator, ConditionValue)> {
    conditions
        .iter()
        .map(|c| (c.column.qualified_name(), c.operator, c.value.clone()))
        .collect()
}

// =============================================================================
// Tables and columns
// =============================================================================

#[test]
fn test_extract_table_and_column() {
    let schema = load_schema("orders.yaml");
    let variant = Variant::default();
    let extractor = Extractor::new(&schema, &variant);

    assert_eq!(extractor.extract_table(&table_token("customers")).unwrap().name, "customers");
    assert_eq!(
        extractor.extract_column(&column_token("orders", "amount")).unwrap().qualified_name(),
        "orders.amount"
    );
}

#[test]
fn test_extract_requires_group() {
    let schema = load_schema("orders.yaml");
    let variant = Variant::default();
    let extractor = Extractor::new(&schema, &variant);

    let err = extractor.extract_table(&column_token("orders", "id")).unwrap_err();
    assert!(matches!(err, ExtractError::TokenType(TokenTypeError::MissingGroup { .. })));

    let err = extractor.extract_column(&table_token("orders")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TokenType);

    let err = extractor
        .extract_date_range_conditions(&table_token("orders"), &date_token("2021-01-01T00:00:00Z", "2021-01-02T00:00:00Z"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TokenType);

    let err = extractor
        .extract_values_conditions(&[table_token("orders").with_value("x")])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TokenType);
}

#[test]
fn test_extract_unknown_column() {
    let schema = load_schema("orders.yaml");
    let variant = Variant::default();
    let extractor = Extractor::new(&schema, &variant);

    let err = extractor.extract_column(&column_token("orders", "missing")).unwrap_err();
    assert!(matches!(err, ExtractError::Resolve(ResolveError::UnknownColumn { .. })));
    assert_eq!(err.kind(), ErrorKind::Reference);
}

// =============================================================================
// Dates
// =============================================================================

#[test]
fn test_date_range_conditions() {
    let schema = load_schema("orders.yaml");
    let variant = Variant::default();
    let extractor = Extractor::new(&schema, &variant);

    let conditions = extractor
        .extract_date_range_conditions(
            &column_token("orders", "created_at"),
            &date_token("2021-01-01T00:00:00Z", "2021-01-31T23:59:59Z"),
        )
        .unwrap();

    assert_eq!(
        bounds(&conditions),
        vec![
            (
                "orders.created_at".to_string(),
                Operator::GtEq,
                ConditionValue::Timestamp(timestamp("2021-01-01T00:00:00Z"))
            ),
            (
                "orders.created_at".to_string(),
                Operator::LtEq,
                ConditionValue::Timestamp(timestamp("2021-01-31T23:59:59Z"))
            ),
        ]
    );
}

#[test]
fn test_date_token_identifier_checked() {
    let schema = load_schema("orders.yaml");
    let variant = Variant::default();
    let extractor = Extractor::new(&schema, &variant);

    let err = extractor.extract_date_range(&num_token()).unwrap_err();
    assert!(matches!(err, ExtractError::TokenType(TokenTypeError::UnexpectedId { .. })));
}

#[test]
fn test_date_bounds_must_be_timestamps() {
    let schema = load_schema("orders.yaml");
    let variant = Variant::default();
    let extractor = Extractor::new(&schema, &variant);

    let token = Token::new(keys::DATE_ID)
        .with_meta(keys::DATE_FROM, 1609459200000i64)
        .with_meta(keys::DATE_TO, 1612137599000i64);
    let err = extractor.extract_date_range(&token).unwrap_err();
    assert!(matches!(err, ExtractError::TokenType(TokenTypeError::MetadataType { .. })));
}

// =============================================================================
// Numbers
// =============================================================================

#[test]
fn test_num_equal() {
    let schema = load_schema("orders.yaml");
    let variant = Variant::default();
    let extractor = Extractor::new(&schema, &variant);

    let num = num_token()
        .with_meta(keys::NUM_IS_EQUAL, true)
        .with_meta(keys::NUM_FROM, 42.0);
    let conditions = extractor
        .extract_num_conditions(&column_token("orders", "amount"), &num)
        .unwrap();

    assert_eq!(
        bounds(&conditions),
        vec![("orders.amount".to_string(), Operator::Eq, ConditionValue::Number(42.0))]
    );
}

#[test]
fn test_num_not_equal() {
    let schema = load_schema("orders.yaml");
    let variant = Variant::default();
    let extractor = Extractor::new(&schema, &variant);

    let num = num_token()
        .with_meta(keys::NUM_IS_NOT_EQUAL, true)
        .with_meta(keys::NUM_FROM, 7.0);
    let conditions = extractor
        .extract_num_conditions(&column_token("orders", "amount"), &num)
        .unwrap();

    assert_eq!(conditions.len(), 1);
    assert_eq!(conditions[0].operator, Operator::NotEq);
}

#[test]
fn test_num_range_open_low() {
    let schema = load_schema("orders.yaml");
    let variant = Variant::default();
    let extractor = Extractor::new(&schema, &variant);

    for (inclusive, op) in [(true, Operator::LtEq), (false, Operator::Lt)] {
        let num = num_token()
            .with_meta(keys::NUM_IS_RANGE, true)
            .with_meta(keys::NUM_FROM_NEG_INF, true)
            .with_meta(keys::NUM_TO, 100.0)
            .with_meta(keys::NUM_TO_INCL, inclusive);
        let conditions = extractor
            .extract_num_conditions(&column_token("orders", "amount"), &num)
            .unwrap();
        assert_eq!(
            bounds(&conditions),
            vec![("orders.amount".to_string(), op, ConditionValue::Number(100.0))]
        );
    }
}

#[test]
fn test_num_range_open_high() {
    let schema = load_schema("orders.yaml");
    let variant = Variant::default();
    let extractor = Extractor::new(&schema, &variant);

    for (inclusive, op) in [(true, Operator::GtEq), (false, Operator::Gt)] {
        let num = num_token()
            .with_meta(keys::NUM_IS_RANGE, true)
            .with_meta(keys::NUM_TO_POS_INF, true)
            .with_meta(keys::NUM_FROM, 5.0)
            .with_meta(keys::NUM_FROM_INCL, inclusive);
        let conditions = extractor
            .extract_num_conditions(&column_token("orders", "amount"), &num)
            .unwrap();
        assert_eq!(
            bounds(&conditions),
            vec![("orders.amount".to_string(), op, ConditionValue::Number(5.0))]
        );
    }
}

#[test]
fn test_num_range_closed() {
    let schema = load_schema("orders.yaml");
    let variant = Variant::default();
    let extractor = Extractor::new(&schema, &variant);

    let num = num_token()
        .with_meta(keys::NUM_IS_RANGE, true)
        .with_meta(keys::NUM_FROM, 10.0)
        .with_meta(keys::NUM_FROM_INCL, false)
        .with_meta(keys::NUM_TO, 20.0)
        .with_meta(keys::NUM_TO_INCL, true);
    let conditions = extractor
        .extract_num_conditions(&column_token("orders", "amount"), &num)
        .unwrap();

    assert_eq!(
        bounds(&conditions),
        vec![
            ("orders.amount".to_string(), Operator::Gt, ConditionValue::Number(10.0)),
            ("orders.amount".to_string(), Operator::LtEq, ConditionValue::Number(20.0)),
        ]
    );
}

#[test]
fn test_num_flags_must_be_exclusive() {
    let schema = load_schema("orders.yaml");
    let variant = Variant::default();
    let extractor = Extractor::new(&schema, &variant);
    let column = column_token("orders", "amount");

    let none_set = num_token().with_meta(keys::NUM_FROM, 1.0);
    let both_set = num_token()
        .with_meta(keys::NUM_IS_EQUAL, true)
        .with_meta(keys::NUM_IS_RANGE, true)
        .with_meta(keys::NUM_FROM, 1.0);
    let open_both_ends = num_token()
        .with_meta(keys::NUM_IS_RANGE, true)
        .with_meta(keys::NUM_FROM_NEG_INF, true)
        .with_meta(keys::NUM_TO_POS_INF, true);

    for num in [none_set, both_set, open_both_ends] {
        let err = extractor.extract_num_conditions(&column, &num).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidCondition { .. }), "got {:?}", err);
        assert_eq!(err.kind(), ErrorKind::Extraction);
    }
}

#[test]
fn test_num_flag_wrong_type() {
    let schema = load_schema("orders.yaml");
    let variant = Variant::default();
    let extractor = Extractor::new(&schema, &variant);

    let num = num_token()
        .with_meta(keys::NUM_IS_EQUAL, "true")
        .with_meta(keys::NUM_FROM, 1.0);
    let err = extractor
        .extract_num_conditions(&column_token("orders", "amount"), &num)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TokenType);
}

// =============================================================================
// Sort and limit
// =============================================================================

#[test]
fn test_limit_on_table_uses_primary_key() {
    let schema = load_schema("orders.yaml");
    let variant = Variant::new(vec![
        table_token("orders"),
        limit_token(0, "tbl:orders", 10.9, false),
    ]);
    let extractor = Extractor::new(&schema, &variant);

    let limit = extractor.extract_limit(&variant.tokens[1]).unwrap();
    assert_eq!(limit.column.qualified_name(), "orders.id");
    assert_eq!(limit.limit, 10);
    assert!(!limit.ascending);
}

#[test]
fn test_limit_on_column() {
    let schema = load_schema("orders.yaml");
    let variant = Variant::new(vec![
        limit_token(1, "col:orders_amount", 3.0, true),
        column_token("orders", "amount"),
    ]);
    let extractor = Extractor::new(&schema, &variant);

    let limit = extractor.extract_limit(&variant.tokens[0]).unwrap();
    assert_eq!(limit.column.qualified_name(), "orders.amount");
    assert_eq!(limit.limit, 3);
    assert!(limit.ascending);
}

#[test]
fn test_limit_rejects_negative() {
    let schema = load_schema("orders.yaml");
    let variant = Variant::new(vec![table_token("orders")]);
    let extractor = Extractor::new(&schema, &variant);

    let err = extractor
        .extract_limit(&limit_token(0, "tbl:orders", -1.0, true))
        .unwrap_err();
    assert!(matches!(err, ExtractError::InvalidCondition { what: "limit", .. }));
}

#[test]
fn test_sort_on_table_without_primary_key() {
    let schema = load_schema("orders.yaml");
    let variant = Variant::new(vec![table_token("events")]);
    let extractor = Extractor::new(&schema, &variant);

    let sort = extractor.extract_sort(&sort_token(0, "tbl:events", true)).unwrap();
    assert_eq!(sort.column.qualified_name(), "events.happened_at");
    assert!(sort.ascending);
}

#[test]
fn test_sort_on_column_part() {
    let schema = load_schema("orders.yaml");
    // The referenced token wraps the column it matched
    let variant = Variant::new(vec![
        Token::new("ref:by").with_part(column_token("customers", "city")),
    ]);
    let extractor = Extractor::new(&schema, &variant);

    let sort = extractor.extract_sort(&sort_token(0, "ref:by", false)).unwrap();
    assert_eq!(sort.column.qualified_name(), "customers.city");
    assert!(!sort.ascending);
}

#[test]
fn test_sort_reference_resolves_nothing() {
    let schema = load_schema("orders.yaml");
    let variant = Variant::new(vec![num_token()]);
    let extractor = Extractor::new(&schema, &variant);

    let err = extractor
        .extract_sort(&sort_token(0, keys::NUM_ID, true))
        .unwrap_err();
    assert!(matches!(err, ExtractError::Extraction { what: "sort", .. }));
    assert_eq!(err.kind(), ErrorKind::Extraction);
}

#[test]
fn test_sort_reference_errors() {
    let schema = load_schema("orders.yaml");
    let variant = Variant::new(vec![table_token("orders")]);
    let extractor = Extractor::new(&schema, &variant);

    let err = extractor.extract_sort(&sort_token(3, "tbl:orders", true)).unwrap_err();
    assert!(matches!(err, ExtractError::Resolve(ResolveError::IndexOutOfBounds { .. })));

    let err = extractor.extract_sort(&sort_token(0, "tbl:customers", true)).unwrap_err();
    assert!(matches!(err, ExtractError::Resolve(ResolveError::ReferenceMismatch { .. })));
    assert_eq!(err.kind(), ErrorKind::Reference);

    let err = extractor
        .extract_sort(&limit_token(0, "tbl:orders", 1.0, true))
        .unwrap_err();
    assert!(matches!(err, ExtractError::TokenType(TokenTypeError::UnexpectedId { .. })));
}

#[test]
fn test_sort_ambiguous_reference() {
    let schema = load_schema("orders.yaml");
    let variant = Variant::new(vec![
        column_token("orders", "amount").with_part(column_token("orders", "id")),
    ]);
    let extractor = Extractor::new(&schema, &variant);

    let err = extractor
        .extract_sort(&sort_token(0, "col:orders_amount", true))
        .unwrap_err();
    assert!(matches!(err, ExtractError::Resolve(ResolveError::Cardinality { .. })));
    assert_eq!(err.kind(), ErrorKind::Cardinality);
}

// =============================================================================
// Aggregates
// =============================================================================

#[test]
fn test_aggregate_empty() {
    let schema = load_schema("orders.yaml");
    let variant = Variant::default();
    let extractor = Extractor::new(&schema, &variant);

    let aggregate = extractor.extract_aggregate(None, None).unwrap();
    assert!(aggregate.select.is_empty());
    assert!(aggregate.group_by.is_empty());
}

#[test]
fn test_aggregate_function_and_group_by_column() {
    let schema = load_schema("orders.yaml");
    let variant = Variant::new(vec![
        column_token("orders", "amount"),
        column_token("customers", "city"),
    ]);
    let extractor = Extractor::new(&schema, &variant);

    let function = function_token(0, "col:orders_amount", "SUM");
    let group = group_token(1, "col:customers_city");
    let aggregate = extractor.extract_aggregate(Some(&function), Some(&group)).unwrap();

    assert_eq!(aggregate.select.len(), 1);
    assert_eq!(aggregate.select[0].column.qualified_name(), "orders.amount");
    assert_eq!(aggregate.select[0].function, AggregateFunction::Sum);
    let group_by: Vec<String> = aggregate.group_by.iter().map(|c| c.qualified_name()).collect();
    assert_eq!(group_by, vec!["customers.city"]);
}

#[test]
fn test_aggregate_group_by_table_primary_keys() {
    let schema = load_schema("orders.yaml");
    let variant = Variant::new(vec![table_token("customers")]);
    let extractor = Extractor::new(&schema, &variant);

    let aggregate = extractor
        .extract_aggregate(None, Some(&group_token(0, "tbl:customers")))
        .unwrap();
    let group_by: Vec<String> = aggregate.group_by.iter().map(|c| c.qualified_name()).collect();
    assert_eq!(group_by, vec!["customers.id"]);
}

#[test]
fn test_aggregate_group_by_table_without_primary_key() {
    let schema = load_schema("orders.yaml");
    let variant = Variant::new(vec![table_token("events")]);
    let extractor = Extractor::new(&schema, &variant);

    let aggregate = extractor
        .extract_aggregate(None, Some(&group_token(0, "tbl:events")))
        .unwrap();
    let group_by: Vec<String> = aggregate.group_by.iter().map(|c| c.qualified_name()).collect();
    assert_eq!(group_by, vec!["events.happened_at"]);
}

#[test]
fn test_aggregate_function_needs_column() {
    let schema = load_schema("orders.yaml");
    let variant = Variant::new(vec![table_token("orders")]);
    let extractor = Extractor::new(&schema, &variant);

    let function = function_token(0, "tbl:orders", "count");
    let err = extractor.extract_aggregate(Some(&function), None).unwrap_err();
    assert!(matches!(err, ExtractError::Extraction { what: "aggregate function", .. }));
}

#[test]
fn test_aggregate_unknown_function() {
    let schema = load_schema("orders.yaml");
    let variant = Variant::new(vec![column_token("orders", "amount")]);
    let extractor = Extractor::new(&schema, &variant);

    let function = function_token(0, "col:orders_amount", "median");
    let err = extractor.extract_aggregate(Some(&function), None).unwrap_err();
    assert!(matches!(err, ExtractError::InvalidCondition { .. }));
}

#[test]
fn test_aggregate_group_by_nothing() {
    let schema = load_schema("orders.yaml");
    let variant = Variant::new(vec![num_token()]);
    let extractor = Extractor::new(&schema, &variant);

    let err = extractor
        .extract_aggregate(None, Some(&group_token(0, keys::NUM_ID)))
        .unwrap_err();
    assert!(matches!(err, ExtractError::Extraction { what: "group by", .. }));
}

// =============================================================================
// IN conditions
// =============================================================================

#[test]
fn test_values_merged_per_column() {
    let schema = load_schema("orders.yaml");
    let variant = Variant::default();
    let extractor = Extractor::new(&schema, &variant);

    let tokens = vec![
        value_token("customers", "city", "Paris"),
        Token::new("ref:status").with_part(value_token("customers", "name", "Acme")),
        value_token("customers", "city", "Berlin"),
        value_token("customers", "city", "Paris"),
    ];
    let conditions = extractor.extract_values_conditions(&tokens).unwrap();

    assert_eq!(conditions.len(), 2);
    assert_eq!(conditions[0].column.qualified_name(), "customers.city");
    assert_eq!(conditions[0].values, vec!["Paris", "Berlin"]);
    assert_eq!(conditions[1].column.qualified_name(), "customers.name");
    assert_eq!(conditions[1].values, vec!["Acme"]);
}

#[test]
fn test_values_require_exactly_one_value() {
    let schema = load_schema("orders.yaml");
    let variant = Variant::default();
    let extractor = Extractor::new(&schema, &variant);

    let none = column_token("customers", "city");
    let err = extractor.extract_values_conditions(&[none]).unwrap_err();
    assert!(matches!(
        err,
        ExtractError::Resolve(ResolveError::Cardinality { what: "value", count: 0, .. })
    ));

    let two = value_token("customers", "city", "Paris").with_part(value_token("customers", "name", "Acme"));
    let err = extractor.extract_values_conditions(&[two]).unwrap_err();
    assert!(matches!(
        err,
        ExtractError::Resolve(ResolveError::Cardinality { what: "value", count: 2, .. })
    ));
    assert_eq!(err.kind(), ErrorKind::Cardinality);
}

#[test]
fn test_values_empty_input() {
    let schema = load_schema("orders.yaml");
    let variant = Variant::default();
    let extractor = Extractor::new(&schema, &variant);

    assert!(extractor.extract_values_conditions(&[]).unwrap().is_empty());
}

#[test]
fn test_conditions_serialize() {
    let schema = load_schema("orders.yaml");
    let variant = Variant::new(vec![table_token("orders")]);
    let extractor = Extractor::new(&schema, &variant);

    let limit = extractor
        .extract_limit(&limit_token(0, "tbl:orders", 5.0, true))
        .unwrap();
    let json = serde_json::to_value(&limit).unwrap();
    assert_eq!(json["limit"], 5);
    assert_eq!(json["column"]["name"], "id");
}
