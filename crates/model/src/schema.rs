//! Field type registry declared by a search index schema.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, fs, path::Path, str::FromStr};

/// Storage and query semantics a search index declares for a metadata key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Numeric,
    Tag,
    Text,
    Geo,
    Vector,
}

impl FieldType {
    pub const ALL: [FieldType; 5] = [
        FieldType::Numeric,
        FieldType::Tag,
        FieldType::Text,
        FieldType::Geo,
        FieldType::Vector,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FieldType::Numeric => "NUMERIC",
            FieldType::Tag => "TAG",
            FieldType::Text => "TEXT",
            FieldType::Geo => "GEO",
            FieldType::Vector => "VECTOR",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "numeric" => Ok(FieldType::Numeric),
            "tag" => Ok(FieldType::Tag),
            "text" => Ok(FieldType::Text),
            "geo" => Ok(FieldType::Geo),
            "vector" => Ok(FieldType::Vector),
            _ => Err(ModelError::UnknownFieldType(s.to_string())),
        }
    }
}

/// Mapping from metadata key to its declared [`FieldType`].
///
/// Populated once from the index schema and read-only afterwards. Keys that
/// were never registered resolve through one of two lookups whose defaults
/// differ on purpose:
///
/// - [`FieldSchema::equality_type`] falls back to [`FieldType::Tag`]
///   (used for equality and membership predicates)
/// - [`FieldSchema::range_type`] falls back to [`FieldType::Text`]
///   (used for range predicates, so an unregistered range key is rejected)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSchema {
    fields: BTreeMap<String, FieldType>,
}

impl FieldSchema {
    pub const EQUALITY_DEFAULT: FieldType = FieldType::Tag;
    pub const RANGE_DEFAULT: FieldType = FieldType::Text;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, key: impl Into<String>, field_type: FieldType) -> Self {
        self.insert(key, field_type);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, field_type: FieldType) -> Option<FieldType> {
        self.fields.insert(key.into(), field_type)
    }

    /// Registered type for `key`, without any fallback.
    pub fn get(&self, key: &str) -> Option<FieldType> {
        self.fields.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn equality_type(&self, key: &str) -> FieldType {
        self.get(key).unwrap_or(Self::EQUALITY_DEFAULT)
    }

    pub fn range_type(&self, key: &str) -> FieldType {
        self.get(key).unwrap_or(Self::RANGE_DEFAULT)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, FieldType)> {
        self.fields.iter().map(|(k, t)| (k.as_str(), *t))
    }

    /// Parses a JSON object such as `{"price": "numeric", "color": "tag"}`.
    pub fn from_json_str(source: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ModelError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&source)
    }
}

impl<K: Into<String>> FromIterator<(K, FieldType)> for FieldSchema {
    fn from_iter<I: IntoIterator<Item = (K, FieldType)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, t)| (k.into(), t)).collect(),
        }
    }
}
