use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Normalized type vocabulary shared by every source.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalType {
    Boolean,
    String,
    Float,
    Integer,
}

impl CanonicalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalType::Boolean => "boolean",
            CanonicalType::String => "string",
            CanonicalType::Float => "float",
            CanonicalType::Integer => "integer",
        }
    }
}

impl fmt::Display for CanonicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field name to raw declared type, as reported by the target database.
pub type DatabaseSchema = HashMap<String, String>;

/// Field name to canonical type for every field that was both extracted and
/// resolvable. Iterates in extraction order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectiveSchema {
    fields: IndexMap<String, CanonicalType>,
}

impl EffectiveSchema {
    pub(crate) fn from_fields(fields: IndexMap<String, CanonicalType>) -> Self {
        Self { fields }
    }

    pub fn get(&self, name: &str) -> Option<CanonicalType> {
        self.fields.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(|s| s.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, CanonicalType)> {
        self.fields.iter().map(|(name, ty)| (name.as_str(), *ty))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
