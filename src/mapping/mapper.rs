use crate::core::{DatabaseSchema, EffectiveSchema};
use crate::mapping::TypeDictionary;
use indexmap::IndexMap;
use tracing::debug;

/// Narrows the database schema to the extracted fields and translates each
/// declared type through `dictionary`.
///
/// A field survives only when it was extracted, has a declared type, and that
/// type resolves in the dictionary. With no dictionary nothing survives.
/// Unresolvable fields are skipped, never reported as errors.
pub fn map_schema<S: AsRef<str>>(
    dictionary: Option<&TypeDictionary>,
    database_schema: &DatabaseSchema,
    extracted_fields: &[S],
) -> EffectiveSchema {
    let mut fields = IndexMap::new();

    let Some(dictionary) = dictionary else {
        debug!(fields = extracted_fields.len(), "no type dictionary, effective schema is empty");
        return EffectiveSchema::from_fields(fields);
    };

    for field in extracted_fields {
        let field = field.as_ref();
        let Some(raw_type) = database_schema.get(field) else {
            debug!(field, "skipping field without a declared type");
            continue;
        };
        let Some(canonical) = dictionary.resolve(raw_type) else {
            debug!(field, raw_type = raw_type.as_str(), "skipping field with unmapped type");
            continue;
        };
        fields.insert(field.to_string(), canonical);
    }

    EffectiveSchema::from_fields(fields)
}
