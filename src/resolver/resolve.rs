use crate::schema::{Schema, SchemaColumn, SchemaTable};
use crate::token::{keys, Token, Variant};
use super::error::ResolveError;

/// Follow a token's index-linked reference into the variant
///
/// The token carries `<id>:indexes` (positions into the variant) and
/// `<id>:note` (the identifier the referenced token must have). Only the
/// first position is followed.
pub fn resolve_linked_token<'v>(variant: &'v Variant, token: &Token) -> Result<&'v Token, ResolveError> {
    let positions: Vec<i64> = token.meta(&keys::indexes_key(&token.id))?;
    let expected: String = token.meta(&keys::note_key(&token.id))?;

    let Some(&first) = positions.first() else {
        return Err(ResolveError::MissingReference {
            token: token.id.clone(),
        });
    };

    let (position, linked) = usize::try_from(first)
        .ok()
        .and_then(|p| variant.get(p).map(|t| (p, t)))
        .ok_or_else(|| ResolveError::IndexOutOfBounds {
            token: token.id.clone(),
            position: first,
            len: variant.len(),
        })?;

    if linked.id != expected {
        return Err(ResolveError::ReferenceMismatch {
            token: token.id.clone(),
            position,
            expected,
            found: linked.id.clone(),
        });
    }

    tracing::trace!("Token '{}' references '{}' at position {}", token.id, linked.id, position);

    Ok(linked)
}

/// The token and its parts that carry `group`, in encounter order
pub fn collect_tokens_with_group<'t>(token: &'t Token, group: &str) -> Vec<&'t Token> {
    token.self_and_parts().filter(|t| t.is_member_of(group)).collect()
}

/// At most one token of `group` among the token and its parts
fn resolve_single<'t>(
    token: &'t Token,
    group: &str,
    what: &'static str,
) -> Result<Option<&'t Token>, ResolveError> {
    let found = collect_tokens_with_group(token, group);

    match found.as_slice() {
        [] => Ok(None),
        [single] => Ok(Some(*single)),
        _ => Err(ResolveError::Cardinality {
            token: token.id.clone(),
            what,
            count: found.len(),
        }),
    }
}

/// The single column token denoted by `token`, if any
pub fn resolve_single_column(token: &Token) -> Result<Option<&Token>, ResolveError> {
    resolve_single(token, keys::GROUP_COLUMN, "column")
}

/// The single schema table denoted by `token`, if any
pub fn resolve_single_table<'s>(schema: &'s Schema, token: &Token) -> Result<Option<&'s SchemaTable>, ResolveError> {
    resolve_single(token, keys::GROUP_TABLE, "table")?
        .map(|t| lookup_table(schema, t))
        .transpose()
}

/// Look up the table named by a table token's `sql:name`
pub fn lookup_table<'s>(schema: &'s Schema, token: &Token) -> Result<&'s SchemaTable, ResolveError> {
    let name: String = token.meta(keys::SQL_NAME)?;

    schema.get_table(&name).ok_or_else(|| ResolveError::UnknownTable {
        token: token.id.clone(),
        table: name,
    })
}

/// Look up the column named by a column token's `sql:tablename` and `sql:name`
pub fn lookup_column<'s>(schema: &'s Schema, token: &Token) -> Result<&'s SchemaColumn, ResolveError> {
    let table: String = token.meta(keys::SQL_TABLE_NAME)?;
    let name: String = token.meta(keys::SQL_NAME)?;

    schema.get_column(&table, &name).ok_or_else(|| ResolveError::UnknownColumn {
        token: token.id.clone(),
        table,
        column: name,
    })
}

/// The column a sort or limit token refers to
///
/// A reference to a column yields that column. A reference to a table yields
/// the table's representative column: its first primary key by name, or its
/// first column when it has none.
pub fn resolve_reference_column<'s>(
    schema: &'s Schema,
    variant: &Variant,
    token: &Token,
) -> Result<Option<&'s SchemaColumn>, ResolveError> {
    let linked = resolve_linked_token(variant, token)?;

    if let Some(column) = resolve_single_column(linked)? {
        return lookup_column(schema, column).map(Some);
    }

    Ok(resolve_single_table(schema, linked)?.and_then(|t| t.representative_column()))
}
