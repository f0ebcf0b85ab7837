use crate::core::{DatabaseSchema, Result};
use crate::mapping::{TypeDictionary, TypeRegistry};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Everything a `SchemaValidator` is built from, supplied in one piece.
///
/// ```json
/// {
///   "source": "elasticsearch",
///   "database_schema": { "age": "long", "name": "text" },
///   "extracted_fields": ["age", "name", "city"],
///   "dictionaries": { "postgres": { "int8": "integer" } }
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidatorConfig {
    pub source: String,
    #[serde(default)]
    pub database_schema: DatabaseSchema,
    #[serde(default)]
    pub extracted_fields: Vec<String>,
    /// Extra source dictionaries, layered over the built-in ones.
    #[serde(default)]
    pub dictionaries: HashMap<String, TypeDictionary>,
}

impl ValidatorConfig {
    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn registry(&self) -> Result<TypeRegistry> {
        let mut registry = TypeRegistry::default();
        for (source, dictionary) in &self.dictionaries {
            registry.register(source.clone(), dictionary.clone())?;
        }
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CanonicalType, SchemaCheckError};
    use crate::validator::SchemaValidator;

    #[test]
    fn parses_full_config() {
        let config = ValidatorConfig::from_json_str(
            r#"{
                "source": "postgres",
                "database_schema": {"id": "int8", "note": "text"},
                "extracted_fields": ["id", "note"],
                "dictionaries": {"postgres": {"int8": "integer"}}
            }"#,
        )
        .unwrap();

        let validator = SchemaValidator::from_config(&config).unwrap();
        assert_eq!(validator.schema().field_names(), vec!["id"]);
        assert_eq!(validator.schema().get("id"), Some(CanonicalType::Integer));
    }

    #[test]
    fn optional_sections_default_to_empty() {
        let config = ValidatorConfig::from_json_str(r#"{"source": "elasticsearch"}"#).unwrap();
        assert!(config.database_schema.is_empty());
        assert!(SchemaValidator::from_config(&config).unwrap().schema().is_empty());
    }

    #[test]
    fn unknown_canonical_type_is_a_serialization_error() {
        let err = ValidatorConfig::from_json_str(
            r#"{"source": "x", "dictionaries": {"x": {"int8": "decimal"}}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, SchemaCheckError::Serialization(_)));
    }

    #[test]
    fn blank_dictionary_source_is_a_config_error() {
        let config = ValidatorConfig::from_json_str(
            r#"{"source": "x", "dictionaries": {"": {"int8": "integer"}}}"#,
        )
        .unwrap();
        assert!(matches!(
            SchemaValidator::from_config(&config),
            Err(SchemaCheckError::Config(_))
        ));
    }
}
