//! Model description parser (verb module)
//!
//! Transforms YAML model descriptions into model types.

use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;
use crate::error::ParseError;
use crate::model::{JoinDeclaration, ModelDescription, ModelElement};
use crate::token::MetaValue;

#[derive(Debug, Deserialize)]
struct RawModel {
    #[serde(default)]
    id: String,
    #[serde(default)]
    metadata: IndexMap<String, serde_yaml::Value>,
    #[serde(default)]
    elements: Vec<RawElement>,
    #[serde(default)]
    joins: Vec<JoinDeclaration>,
}

#[derive(Debug, Deserialize)]
struct RawElement {
    id: String,
    #[serde(default)]
    groups: Vec<String>,
    #[serde(default)]
    metadata: IndexMap<String, serde_yaml::Value>,
}

/// Parse a model description from a YAML file
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ModelDescription, ParseError> {
    let path_str = path.as_ref().display().to_string();
    let contents = std::fs::read_to_string(&path).map_err(|e| ParseError::Io {
        path: path_str,
        source: e,
    })?;
    parse_str(&contents)
}

/// Parse a model description from a YAML string
pub fn parse_str(yaml: &str) -> Result<ModelDescription, ParseError> {
    let raw: RawModel = serde_yaml::from_str(yaml)?;

    let metadata = convert_metadata(&raw.id, raw.metadata)?;
    let elements = raw
        .elements
        .into_iter()
        .map(|el| {
            let metadata = convert_metadata(&el.id, el.metadata)?;
            Ok(ModelElement {
                id: el.id,
                groups: el.groups,
                metadata,
            })
        })
        .collect::<Result<Vec<_>, ParseError>>()?;

    Ok(ModelDescription {
        id: raw.id,
        metadata,
        elements,
        joins: raw.joins,
    })
}

fn convert_metadata(
    owner: &str,
    raw: IndexMap<String, serde_yaml::Value>,
) -> Result<IndexMap<String, MetaValue>, ParseError> {
    raw.into_iter()
        .map(|(key, value)| {
            let meta = to_meta_value(&value).map_err(|message| ParseError::InvalidMetadata {
                owner: owner.to_string(),
                key: key.clone(),
                message,
            })?;
            Ok((key, meta))
        })
        .collect()
}

/// Map a YAML value onto the typed metadata representation
fn to_meta_value(value: &serde_yaml::Value) -> Result<MetaValue, String> {
    use serde_yaml::Value;

    match value {
        Value::Bool(b) => Ok(MetaValue::Bool(*b)),
        Value::String(s) => Ok(MetaValue::String(s.clone())),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(MetaValue::Int(i))
            } else if let Some(f) = n.as_f64() {
                Ok(MetaValue::Double(f))
            } else {
                Err(format!("number {} is out of range", n))
            }
        }
        Value::Sequence(items) => {
            if items.iter().all(|v| v.is_i64()) && !items.is_empty() {
                Ok(MetaValue::IntList(items.iter().filter_map(|v| v.as_i64()).collect()))
            } else if items.iter().all(|v| v.is_string()) {
                Ok(MetaValue::StringList(
                    items.iter().filter_map(|v| v.as_str().map(String::from)).collect(),
                ))
            } else {
                Err("lists must hold only strings or only integers".to_string())
            }
        }
        Value::Null => Err("null is not a metadata value".to_string()),
        Value::Mapping(_) => Err("nested mappings are not metadata values".to_string()),
        Value::Tagged(tagged) => to_meta_value(&tagged.value),
    }
}
