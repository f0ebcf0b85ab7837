use crate::core::{CanonicalType, Result, SchemaCheckError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const ELASTICSEARCH: &str = "elasticsearch";

const ELASTICSEARCH_TYPES: &[(&str, CanonicalType)] = &[
    ("boolean", CanonicalType::Boolean),
    ("date", CanonicalType::String),
    ("float", CanonicalType::Float),
    ("long", CanonicalType::Integer),
    ("text", CanonicalType::String),
];

/// Translates a source's raw declared types into canonical types.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeDictionary {
    types: HashMap<String, CanonicalType>,
}

impl TypeDictionary {
    pub fn new(types: HashMap<String, CanonicalType>) -> Self {
        Self { types }
    }

    pub fn resolve(&self, raw_type: &str) -> Option<CanonicalType> {
        self.types.get(raw_type).copied()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, CanonicalType)> for TypeDictionary {
    fn from_iter<I: IntoIterator<Item = (K, CanonicalType)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Named type dictionaries, keyed by source identifier.
///
/// `TypeRegistry::default()` carries the built-in sources; more can be
/// registered without touching the mapper or validator.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    dictionaries: HashMap<String, TypeDictionary>,
}

impl TypeRegistry {
    pub fn empty() -> Self {
        Self {
            dictionaries: HashMap::new(),
        }
    }

    /// Registers or replaces the dictionary for `source`.
    pub fn register(&mut self, source: impl Into<String>, dictionary: TypeDictionary) -> Result<()> {
        let source = source.into();
        if source.trim().is_empty() {
            return Err(SchemaCheckError::Config(
                "type dictionary registered without a source identifier".to_string(),
            ));
        }
        self.dictionaries.insert(source, dictionary);
        Ok(())
    }

    pub fn get(&self, source: &str) -> Option<&TypeDictionary> {
        self.dictionaries.get(source)
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        let mut dictionaries: HashMap<String, TypeDictionary> = HashMap::new();
        dictionaries.insert(
            ELASTICSEARCH.to_string(),
            ELASTICSEARCH_TYPES.iter().copied().collect(),
        );
        Self { dictionaries }
    }
}
