use crate::core::CanonicalType;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    MissingField {
        field: String,
    },
    TypeMismatch {
        field: String,
        expected: CanonicalType,
        rows: Vec<usize>,
    },
}

impl Diagnostic {
    pub fn field(&self) -> &str {
        match self {
            Diagnostic::MissingField { field } => field,
            Diagnostic::TypeMismatch { field, .. } => field,
        }
    }

    pub fn mismatch_count(&self) -> usize {
        match self {
            Diagnostic::MissingField { .. } => 0,
            Diagnostic::TypeMismatch { rows, .. } => rows.len(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingField { field } => {
                write!(f, "Field '{}' is missing from the extracted data.", field)
            }
            Diagnostic::TypeMismatch { field, expected, rows } => write!(
                f,
                "Field '{}' contains {} rows with data type mismatches. \
                 Expected type: '{}', mismatched row indices: {:?}.",
                field,
                rows.len(),
                expected,
                rows
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_message() {
        let d = Diagnostic::MissingField { field: "active".into() };
        assert_eq!(d.to_string(), "Field 'active' is missing from the extracted data.");
        assert_eq!(d.mismatch_count(), 0);
    }

    #[test]
    fn type_mismatch_message_lists_rows() {
        let d = Diagnostic::TypeMismatch {
            field: "age".into(),
            expected: CanonicalType::Integer,
            rows: vec![1, 4],
        };
        assert_eq!(
            d.to_string(),
            "Field 'age' contains 2 rows with data type mismatches. \
             Expected type: 'integer', mismatched row indices: [1, 4]."
        );
        assert_eq!(d.field(), "age");
    }

    #[test]
    fn serializes_with_kind_tag() {
        let diagnostics = vec![
            Diagnostic::MissingField { field: "active".into() },
            Diagnostic::TypeMismatch {
                field: "age".into(),
                expected: CanonicalType::Integer,
                rows: vec![1],
            },
        ];

        assert_eq!(
            serde_json::to_value(&diagnostics).unwrap(),
            serde_json::json!([
                {"kind": "missing_field", "field": "active"},
                {"kind": "type_mismatch", "field": "age", "expected": "integer", "rows": [1]},
            ])
        );
    }
}
