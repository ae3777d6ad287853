//! Token and variant types

use indexmap::IndexMap;
use super::error::TokenTypeError;
use super::value::{MetaType, MetaValue};

/// A tagged unit of parsed input
///
/// Part tokens form a shallow, owned tree: a column token may carry the value
/// token that matched inside it, a reference token may carry the table it names.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Token {
    pub id: String,
    pub groups: Vec<String>,
    pub metadata: IndexMap<String, MetaValue>,
    /// Position of the token within its variant
    pub index: usize,
    /// Literal value matched by the token, if any
    pub value: Option<String>,
    pub parts: Vec<Token>,
}

impl Token {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.groups.push(group.into());
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<MetaValue>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_part(mut self, part: Token) -> Self {
        self.parts.push(part);
        self
    }

    pub fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    /// Check if the token carries a group tag
    pub fn is_member_of(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g == group)
    }

    /// Fail unless the token's identifier is `id`
    pub fn expect_id(&self, id: &str) -> Result<(), TokenTypeError> {
        if self.id == id {
            Ok(())
        } else {
            Err(TokenTypeError::UnexpectedId {
                expected: id.to_string(),
                found: self.id.clone(),
            })
        }
    }

    /// Fail unless the token carries the group tag
    pub fn expect_group(&self, group: &str) -> Result<(), TokenTypeError> {
        if self.is_member_of(group) {
            Ok(())
        } else {
            Err(TokenTypeError::MissingGroup {
                token: self.id.clone(),
                group: group.to_string(),
            })
        }
    }

    /// Read a required metadata value of type `T`
    pub fn meta<T: MetaType>(&self, key: &str) -> Result<T, TokenTypeError> {
        self.meta_opt(key)?.ok_or_else(|| TokenTypeError::MissingMetadata {
            token: self.id.clone(),
            key: key.to_string(),
        })
    }

    /// Read an optional metadata value of type `T`
    ///
    /// An absent key is `Ok(None)`; a present key holding another type is an error.
    pub fn meta_opt<T: MetaType>(&self, key: &str) -> Result<Option<T>, TokenTypeError> {
        let Some(value) = self.metadata.get(key) else {
            return Ok(None);
        };

        T::from_meta(value)
            .map(Some)
            .ok_or_else(|| TokenTypeError::MetadataType {
                token: self.id.clone(),
                key: key.to_string(),
                expected: T::NAME,
                found: value.type_name(),
            })
    }

    /// The token followed by its constituent parts
    pub fn self_and_parts(&self) -> impl Iterator<Item = &Token> {
        std::iter::once(self).chain(self.parts.iter())
    }
}

/// One candidate interpretation of an utterance
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Variant {
    pub tokens: Vec<Token>,
}

impl Variant {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn get(&self, position: usize) -> Option<&Token> {
        self.tokens.get(position)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
