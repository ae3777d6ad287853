//! Query condition types (nouns)
//!
//! Values produced by the extractor and handed to a downstream SQL renderer.
//! They own copies of the schema columns they name and are never mutated.

mod aggregate;
mod types;

pub use aggregate::{Aggregate, AggregateFunction, AggregateSelect, ParseAggregateFunctionError};
pub use types::{ConditionValue, DateRange, InCondition, Limit, Operator, SimpleCondition, Sort};
