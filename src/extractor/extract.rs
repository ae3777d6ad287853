//! Condition extraction
//!
//! Each operation checks the identifier or group of its input tokens before
//! reading them, and either returns a complete result or an error.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use crate::condition::{
    Aggregate, AggregateFunction, AggregateSelect, DateRange, InCondition, Limit, Operator,
    SimpleCondition, Sort,
};
use crate::resolver::{self, ResolveError};
use crate::schema::{Schema, SchemaColumn, SchemaTable};
use crate::token::{keys, Token, TokenTypeError, Variant};
use super::error::ExtractError;

/// Extracts conditions from the tokens of one variant against a schema
///
/// Holds only shared references; any number of extractors may use the same
/// schema concurrently.
#[derive(Debug, Clone, Copy)]
pub struct Extractor<'a> {
    schema: &'a Schema,
    variant: &'a Variant,
}

impl<'a> Extractor<'a> {
    pub fn new(schema: &'a Schema, variant: &'a Variant) -> Self {
        Self { schema, variant }
    }

    /// The table named by a `table` token
    pub fn extract_table(&self, token: &Token) -> Result<&'a SchemaTable, ExtractError> {
        token.expect_group(keys::GROUP_TABLE)?;
        Ok(resolver::lookup_table(self.schema, token)?)
    }

    /// The column named by a `column` token
    pub fn extract_column(&self, token: &Token) -> Result<&'a SchemaColumn, ExtractError> {
        token.expect_group(keys::GROUP_COLUMN)?;
        Ok(resolver::lookup_column(self.schema, token)?)
    }

    /// The inclusive range of a date token
    pub fn extract_date_range(&self, date_token: &Token) -> Result<DateRange, ExtractError> {
        date_token.expect_id(keys::DATE_ID)?;

        Ok(DateRange {
            from: date_token.meta::<DateTime<Utc>>(keys::DATE_FROM)?,
            to: date_token.meta::<DateTime<Utc>>(keys::DATE_TO)?,
        })
    }

    /// `column >= from` and `column <= to` for a date token
    pub fn extract_date_range_conditions(
        &self,
        column_token: &Token,
        date_token: &Token,
    ) -> Result<Vec<SimpleCondition>, ExtractError> {
        let column = self.extract_column(column_token)?;
        let range = self.extract_date_range(date_token)?;

        let conditions = range.to_conditions(column);
        tracing::debug!("Extracted date range on '{}': {} .. {}", column.qualified_name(), range.from, range.to);

        Ok(conditions)
    }

    /// Comparison conditions for a numeric token
    ///
    /// Exactly one of the equal, not-equal and range flags must be set. A range
    /// open on the low end yields only an upper bound, a range open on the high
    /// end only a lower bound, a closed range both.
    pub fn extract_num_conditions(
        &self,
        column_token: &Token,
        num_token: &Token,
    ) -> Result<Vec<SimpleCondition>, ExtractError> {
        let column = self.extract_column(column_token)?;
        num_token.expect_id(keys::NUM_ID)?;

        let is_equal = flag(num_token, keys::NUM_IS_EQUAL)?;
        let is_not_equal = flag(num_token, keys::NUM_IS_NOT_EQUAL)?;
        let is_range = flag(num_token, keys::NUM_IS_RANGE)?;

        let conditions = match (is_equal, is_not_equal, is_range) {
            (true, false, false) => {
                let from: f64 = num_token.meta(keys::NUM_FROM)?;
                vec![SimpleCondition::new(column, Operator::Eq, from)]
            }
            (false, true, false) => {
                let from: f64 = num_token.meta(keys::NUM_FROM)?;
                vec![SimpleCondition::new(column, Operator::NotEq, from)]
            }
            (false, false, true) => range_conditions(column, num_token)?,
            _ => {
                return Err(ExtractError::InvalidCondition {
                    token: num_token.id.clone(),
                    what: "numeric",
                    reason: format!(
                        "exactly one of equal ({}), not-equal ({}) and range ({}) must be set",
                        is_equal, is_not_equal, is_range
                    ),
                });
            }
        };

        tracing::debug!(
            "Extracted numeric condition(s): {}",
            conditions.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" AND ")
        );

        Ok(conditions)
    }

    /// Sort along the column or table a sort token references
    pub fn extract_sort(&self, token: &Token) -> Result<Sort, ExtractError> {
        token.expect_id(keys::SORT_ID)?;

        let column = self.reference_column(token, "sort")?;
        let ascending: bool = token.meta(keys::SORT_ASC)?;

        tracing::debug!("Extracted sort on '{}' (ascending: {})", column.qualified_name(), ascending);

        Ok(Sort {
            column: column.clone(),
            ascending,
        })
    }

    /// Limit along the column or table a limit token references
    ///
    /// The numeric limit is truncated toward zero.
    pub fn extract_limit(&self, token: &Token) -> Result<Limit, ExtractError> {
        token.expect_id(keys::LIMIT_ID)?;

        let column = self.reference_column(token, "limit")?;
        let value: f64 = token.meta(keys::LIMIT_LIMIT)?;
        let ascending: bool = token.meta(keys::LIMIT_ASC)?;

        if !value.is_finite() || value < 0.0 {
            return Err(ExtractError::InvalidCondition {
                token: token.id.clone(),
                what: "limit",
                reason: format!("limit must be a non-negative number, got {}", value),
            });
        }

        tracing::debug!("Extracted limit {} on '{}'", value.trunc(), column.qualified_name());

        Ok(Limit {
            column: column.clone(),
            limit: value.trunc() as i64,
            ascending,
        })
    }

    /// Aggregate selection and grouping
    ///
    /// A function token selects `function(column)` over the single column its
    /// reference denotes. A group token groups by the referenced column, or by
    /// the referenced table's primary keys (its first column when it has none).
    pub fn extract_aggregate(
        &self,
        function_token: Option<&Token>,
        group_token: Option<&Token>,
    ) -> Result<Aggregate, ExtractError> {
        let select = match function_token {
            Some(token) => vec![self.aggregate_select(token)?],
            None => Vec::new(),
        };

        let group_by = match group_token {
            Some(token) => self.group_by_columns(token)?,
            None => Vec::new(),
        };

        tracing::debug!(
            "Extracted aggregate with {} select and {} group-by column(s)",
            select.len(),
            group_by.len()
        );

        Ok(Aggregate { select, group_by })
    }

    /// One IN condition per column, merging the values of all tokens on that column
    ///
    /// Every token must hold exactly one valued token among itself and its
    /// parts. Columns keep first-seen order; repeated values are dropped.
    pub fn extract_values_conditions(&self, tokens: &[Token]) -> Result<Vec<InCondition>, ExtractError> {
        let mut by_column: IndexMap<(&str, &str), InCondition> = IndexMap::new();

        for token in tokens {
            let valued: Vec<(&Token, &str)> = token
                .self_and_parts()
                .filter_map(|t| t.value.as_deref().map(|v| (t, v)))
                .collect();

            let (value_token, value) = match valued.as_slice() {
                [single] => *single,
                _ => {
                    return Err(ResolveError::Cardinality {
                        token: token.id.clone(),
                        what: "value",
                        count: valued.len(),
                    }
                    .into());
                }
            };

            let column = self.extract_column(value_token)?;
            let condition = by_column
                .entry((column.table.as_str(), column.name.as_str()))
                .or_insert_with(|| InCondition {
                    column: column.clone(),
                    values: Vec::new(),
                });

            if !condition.values.iter().any(|v| v == value) {
                condition.values.push(value.to_string());
            }
        }

        let conditions: Vec<InCondition> = by_column.into_values().collect();
        for condition in &conditions {
            tracing::debug!(
                "Extracted IN condition on '{}' with {} value(s)",
                condition.column.qualified_name(),
                condition.values.len()
            );
        }

        Ok(conditions)
    }

    fn reference_column(&self, token: &Token, what: &'static str) -> Result<&'a SchemaColumn, ExtractError> {
        resolver::resolve_reference_column(self.schema, self.variant, token)?.ok_or_else(|| {
            ExtractError::Extraction {
                token: token.id.clone(),
                what,
                reason: "reference denotes neither a column nor a table",
            }
        })
    }

    fn aggregate_select(&self, token: &Token) -> Result<AggregateSelect, ExtractError> {
        token.expect_id(keys::AGGREGATION_ID)?;

        let linked = resolver::resolve_linked_token(self.variant, token)?;
        let column_token = resolver::resolve_single_column(linked)?.ok_or_else(|| ExtractError::Extraction {
            token: token.id.clone(),
            what: "aggregate function",
            reason: "reference denotes no column",
        })?;
        let column = resolver::lookup_column(self.schema, column_token)?;

        let tag: String = token.meta(keys::AGGREGATION_TYPE)?;
        let function = tag
            .parse::<AggregateFunction>()
            .map_err(|e| ExtractError::InvalidCondition {
                token: token.id.clone(),
                what: "aggregate function",
                reason: e.to_string(),
            })?;

        Ok(AggregateSelect {
            column: column.clone(),
            function,
        })
    }

    fn group_by_columns(&self, token: &Token) -> Result<Vec<SchemaColumn>, ExtractError> {
        token.expect_id(keys::GROUP_BY_ID)?;

        let linked = resolver::resolve_linked_token(self.variant, token)?;

        if let Some(column_token) = resolver::resolve_single_column(linked)? {
            let column = resolver::lookup_column(self.schema, column_token)?;
            return Ok(vec![column.clone()]);
        }

        let columns = resolver::resolve_single_table(self.schema, linked)?
            .map(|table| table.grouping_columns())
            .unwrap_or_default();

        if columns.is_empty() {
            return Err(ExtractError::Extraction {
                token: token.id.clone(),
                what: "group by",
                reason: "reference denotes neither a column nor a table with columns",
            });
        }

        Ok(columns.into_iter().cloned().collect())
    }
}

/// Read a boolean flag; an absent flag is unset
fn flag(token: &Token, key: &str) -> Result<bool, TokenTypeError> {
    Ok(token.meta_opt::<bool>(key)?.unwrap_or(false))
}

fn range_conditions(column: &SchemaColumn, token: &Token) -> Result<Vec<SimpleCondition>, ExtractError> {
    let open_low = flag(token, keys::NUM_FROM_NEG_INF)?;
    let open_high = flag(token, keys::NUM_TO_POS_INF)?;

    let lower = || -> Result<SimpleCondition, ExtractError> {
        let from: f64 = token.meta(keys::NUM_FROM)?;
        let op = if token.meta::<bool>(keys::NUM_FROM_INCL)? { Operator::GtEq } else { Operator::Gt };
        Ok(SimpleCondition::new(column, op, from))
    };
    let upper = || -> Result<SimpleCondition, ExtractError> {
        let to: f64 = token.meta(keys::NUM_TO)?;
        let op = if token.meta::<bool>(keys::NUM_TO_INCL)? { Operator::LtEq } else { Operator::Lt };
        Ok(SimpleCondition::new(column, op, to))
    };

    match (open_low, open_high) {
        (true, false) => Ok(vec![upper()?]),
        (false, true) => Ok(vec![lower()?]),
        (false, false) => Ok(vec![lower()?, upper()?]),
        (true, true) => Err(ExtractError::InvalidCondition {
            token: token.id.clone(),
            what: "numeric",
            reason: "range is open on both ends".to_string(),
        }),
    }
}
