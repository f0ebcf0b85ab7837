use crate::config::ValidatorConfig;
use crate::core::{
    CanonicalType, DatabaseSchema, Diagnostic, DiagnosticSink, EffectiveSchema, RecordBatch,
    Result, matches_type,
};
use crate::mapping::{TypeDictionary, TypeRegistry, map_schema};
use crate::sink::LogSink;
use serde_json::Value;
use tracing::debug;

/// Checks every field of `schema` against `batch`, reporting each diagnostic
/// to `sink` as it is produced and returning them in schema order.
///
/// A field with no column in the batch yields a single `MissingField`; other
/// fields yield a `TypeMismatch` listing every offending row, or nothing.
pub fn validate<S: DiagnosticSink>(
    schema: &EffectiveSchema,
    batch: &RecordBatch,
    mut sink: S,
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for (field, expected) in schema.iter() {
        let diagnostic = if !batch.has_column(field) {
            Some(Diagnostic::MissingField {
                field: field.to_string(),
            })
        } else {
            let rows = mismatched_rows(batch, field, expected);
            (!rows.is_empty()).then(|| Diagnostic::TypeMismatch {
                field: field.to_string(),
                expected,
                rows,
            })
        };

        if let Some(diagnostic) = diagnostic {
            sink.report(&diagnostic);
            diagnostics.push(diagnostic);
        }
    }

    diagnostics
}

fn mismatched_rows(batch: &RecordBatch, field: &str, expected: CanonicalType) -> Vec<usize> {
    batch
        .column(field)
        .filter(|(_, value)| !matches_type(value.unwrap_or(&Value::Null), expected))
        .map(|(index, _)| index)
        .collect()
}

/// Holds an effective schema built once from a source's type dictionary, a
/// database schema and the extracted field names.
///
/// The schema never changes after construction, so one validator can check
/// any number of batches, from any number of threads.
#[derive(Debug, Clone)]
pub struct SchemaValidator {
    dictionary: Option<TypeDictionary>,
    database_schema: DatabaseSchema,
    extracted_fields: Vec<String>,
    schema: EffectiveSchema,
}

impl SchemaValidator {
    pub fn new<S: AsRef<str>>(
        registry: &TypeRegistry,
        source: &str,
        database_schema: &DatabaseSchema,
        extracted_fields: &[S],
    ) -> Self {
        let dictionary = registry.get(source);
        if dictionary.is_none() {
            debug!(source, "unknown source, nothing will be validated");
        }
        Self {
            dictionary: dictionary.cloned(),
            database_schema: database_schema.clone(),
            extracted_fields: extracted_fields.iter().map(|f| f.as_ref().to_string()).collect(),
            schema: map_schema(dictionary, database_schema, extracted_fields),
        }
    }

    /// Builds from a config, registering its extra dictionaries on top of the
    /// built-in ones.
    pub fn from_config(config: &ValidatorConfig) -> Result<Self> {
        let registry = config.registry()?;
        Ok(Self::new(
            &registry,
            &config.source,
            &config.database_schema,
            &config.extracted_fields,
        ))
    }

    /// The source's type dictionary, `None` when the source was not registered.
    pub fn dictionary(&self) -> Option<&TypeDictionary> {
        self.dictionary.as_ref()
    }

    pub fn database_schema(&self) -> &DatabaseSchema {
        &self.database_schema
    }

    pub fn extracted_fields(&self) -> &[String] {
        &self.extracted_fields
    }

    pub fn schema(&self) -> &EffectiveSchema {
        &self.schema
    }

    /// Validates and logs each diagnostic as a warning.
    pub fn validate(&self, batch: &RecordBatch) -> Vec<Diagnostic> {
        self.validate_with(batch, LogSink)
    }

    pub fn validate_with<S: DiagnosticSink>(&self, batch: &RecordBatch, sink: S) -> Vec<Diagnostic> {
        debug!(fields = self.schema.len(), rows = batch.len(), "validating batch");
        validate(&self.schema, batch, sink)
    }
}
