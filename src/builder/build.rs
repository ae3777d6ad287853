//! Schema construction
//!
//! Turns the flat element list of a model description into tables with
//! ordered columns, default sort/date/select settings and joins.

use indexmap::IndexMap;
use crate::condition::Sort;
use crate::model::{JoinDeclaration, ModelDescription, ModelElement};
use crate::schema::{DataType, JoinType, Schema, SchemaColumn, SchemaJoin, SchemaTable};
use crate::token::{keys, MetaType};
use super::error::SchemaError;

/// Build the schema of a model description
///
/// Fails fast when the description lacks the `sql:version` marker written by
/// the SQL model generator.
pub fn build_model_schema(model: &ModelDescription) -> Result<Schema, SchemaError> {
    if !model.metadata.contains_key(keys::SQL_VERSION) {
        return Err(SchemaError::MissingModelMarker {
            model: model.id.clone(),
            key: keys::SQL_VERSION,
        });
    }

    build_schema(&model.elements, &model.joins)
}

/// Build a schema from table/column elements and join declarations
///
/// Tables keep declaration order. Within a table, primary-key columns come
/// first, then the remaining columns, each part ordered by name.
pub fn build_schema(
    elements: &[ModelElement],
    joins: &[JoinDeclaration],
) -> Result<Schema, SchemaError> {
    let table_elements: Vec<&ModelElement> = elements
        .iter()
        .filter(|e| e.is_member_of(keys::GROUP_TABLE))
        .collect();
    let column_elements: Vec<&ModelElement> = elements
        .iter()
        .filter(|e| e.is_member_of(keys::GROUP_COLUMN) && !e.is_member_of(keys::GROUP_TABLE))
        .collect();

    // Table name -> (element, columns), in declaration order
    let mut grouped: IndexMap<String, (&ModelElement, Vec<SchemaColumn>)> = IndexMap::new();

    for element in table_elements {
        let name: String = required(element, keys::SQL_NAME)?;
        if grouped.contains_key(&name) {
            return Err(SchemaError::DuplicateTable(name));
        }
        grouped.insert(name, (element, Vec::new()));
    }

    for element in column_elements {
        let column = build_column(element)?;
        let Some((_, columns)) = grouped.get_mut(&column.table) else {
            return Err(SchemaError::UnknownTable {
                element: element.id.clone(),
                table: column.table,
            });
        };
        if columns.iter().any(|c| c.name == column.name) {
            return Err(SchemaError::DuplicateColumn {
                table: column.table,
                column: column.name,
            });
        }
        columns.push(column);
    }

    let tables = grouped
        .into_iter()
        .map(|(name, (element, columns))| build_table(name, element, columns))
        .collect::<Result<Vec<_>, _>>()?;

    let joins = joins
        .iter()
        .map(|decl| build_join(&tables, decl))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Schema { tables, joins })
}

fn build_column(element: &ModelElement) -> Result<SchemaColumn, SchemaError> {
    let type_name: String = required(element, keys::SQL_DATA_TYPE)?;
    let data_type = type_name
        .parse::<DataType>()
        .map_err(|source| SchemaError::InvalidDataType {
            element: element.id.clone(),
            source,
        })?;

    Ok(SchemaColumn {
        table: required(element, keys::SQL_TABLE_NAME)?,
        name: required(element, keys::SQL_NAME)?,
        data_type,
        is_pk: required(element, keys::SQL_IS_PK)?,
        is_nullable: required(element, keys::SQL_IS_NULLABLE)?,
    })
}

fn build_table(
    name: String,
    element: &ModelElement,
    mut columns: Vec<SchemaColumn>,
) -> Result<SchemaTable, SchemaError> {
    columns.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

    let default_sort = optional::<String>(element, keys::SQL_DEFAULT_ORDER)?
        .map(|value| parse_default_sort(&name, &columns, &value))
        .transpose()?;

    let default_date = optional::<String>(element, keys::SQL_DEFAULT_DATE)?
        .map(|value| parse_default_date(&name, &columns, &value))
        .transpose()?;

    let default_select = optional::<Vec<String>>(element, keys::SQL_DEFAULT_SELECT)?.unwrap_or_default();
    let extra_tables = optional::<Vec<String>>(element, keys::SQL_EXTRA_TABLES)?.unwrap_or_default();

    tracing::debug!(
        "Built table '{}' with {} columns (default sort: {}, default date: {})",
        name,
        columns.len(),
        default_sort.is_some(),
        default_date.is_some()
    );

    Ok(SchemaTable {
        name,
        columns,
        default_sort,
        default_select,
        extra_tables,
        default_date,
    })
}

/// Parse `table.column#direction` or `column#direction`
///
/// A bare column name belongs to the table being built.
fn parse_default_sort(
    table: &str,
    columns: &[SchemaColumn],
    value: &str,
) -> Result<Sort, SchemaError> {
    let invalid = |reason| SchemaError::InvalidDefaultSort {
        table: table.to_string(),
        value: value.to_string(),
        reason,
    };

    let parts: Vec<&str> = value.split('#').map(|p| p.trim()).collect();
    let [column_ref, direction] = parts.as_slice() else {
        return Err(invalid("expected 'column#asc' or 'table.column#desc'"));
    };

    let ascending = match direction.to_lowercase().as_str() {
        "asc" => true,
        "desc" => false,
        _ => return Err(invalid("direction must be 'asc' or 'desc'")),
    };

    let ref_parts: Vec<&str> = column_ref.split('.').collect();
    let (ref_table, ref_column) = match ref_parts.as_slice() {
        [column] if !column.is_empty() => (table, *column),
        [t, column] if !t.is_empty() && !column.is_empty() => (*t, *column),
        _ => return Err(invalid("column must be 'column' or 'table.column'")),
    };

    let column = find_own_column(table, columns, ref_table, ref_column, "sort")?;

    Ok(Sort {
        column: column.clone(),
        ascending,
    })
}

/// Parse `table.column`
fn parse_default_date(
    table: &str,
    columns: &[SchemaColumn],
    value: &str,
) -> Result<SchemaColumn, SchemaError> {
    let parts: Vec<&str> = value.trim().split('.').collect();
    let [ref_table, ref_column] = parts.as_slice() else {
        return Err(SchemaError::InvalidDefaultDate {
            table: table.to_string(),
            value: value.to_string(),
            reason: "expected 'table.column'",
        });
    };

    find_own_column(table, columns, ref_table, ref_column, "date").cloned()
}

/// Default sort and date columns must belong to the table itself
fn find_own_column<'a>(
    table: &str,
    columns: &'a [SchemaColumn],
    ref_table: &str,
    ref_column: &str,
    usage: &'static str,
) -> Result<&'a SchemaColumn, SchemaError> {
    columns
        .iter()
        .find(|c| c.is_same(ref_table, ref_column))
        .filter(|_| ref_table == table)
        .ok_or_else(|| SchemaError::UnknownColumn {
            table: table.to_string(),
            reference: format!("{}.{}", ref_table, ref_column),
            usage,
        })
}

fn build_join(tables: &[SchemaTable], decl: &JoinDeclaration) -> Result<SchemaJoin, SchemaError> {
    let join_type = decl
        .join_type
        .parse::<JoinType>()
        .map_err(|_| SchemaError::UnknownJoinType {
            from_table: decl.from_table.clone(),
            to_table: decl.to_table.clone(),
            join_type: decl.join_type.clone(),
        })?;

    if decl.from_columns.len() != decl.to_columns.len() {
        return Err(SchemaError::JoinColumnCount {
            from_table: decl.from_table.clone(),
            to_table: decl.to_table.clone(),
            from_count: decl.from_columns.len(),
            to_count: decl.to_columns.len(),
        });
    }

    for (table_name, column_names) in [
        (&decl.from_table, &decl.from_columns),
        (&decl.to_table, &decl.to_columns),
    ] {
        let table = tables
            .iter()
            .find(|t| &t.name == table_name)
            .ok_or_else(|| SchemaError::UnknownJoinTable {
                from_table: decl.from_table.clone(),
                to_table: decl.to_table.clone(),
                table: table_name.clone(),
            })?;

        if let Some(missing) = column_names.iter().find(|c| table.get_column(c).is_none()) {
            return Err(SchemaError::UnknownJoinColumn {
                from_table: decl.from_table.clone(),
                to_table: decl.to_table.clone(),
                table: table_name.clone(),
                column: missing.clone(),
            });
        }
    }

    tracing::debug!(
        "Built {} join {} -> {} on {} column(s)",
        join_type,
        decl.from_table,
        decl.to_table,
        decl.from_columns.len()
    );

    Ok(SchemaJoin {
        from_table: decl.from_table.clone(),
        to_table: decl.to_table.clone(),
        from_columns: decl.from_columns.clone(),
        to_columns: decl.to_columns.clone(),
        join_type,
    })
}

fn required<T: MetaType>(element: &ModelElement, key: &'static str) -> Result<T, SchemaError> {
    optional(element, key)?.ok_or_else(|| SchemaError::MissingMetadata {
        element: element.id.clone(),
        key,
    })
}

fn optional<T: MetaType>(element: &ModelElement, key: &'static str) -> Result<Option<T>, SchemaError> {
    let Some(value) = element.metadata.get(key) else {
        return Ok(None);
    };

    T::from_meta(value)
        .map(Some)
        .ok_or_else(|| SchemaError::InvalidMetadata {
            element: element.id.clone(),
            key,
            expected: T::NAME,
            found: value.type_name(),
        })
}
