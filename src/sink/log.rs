use crate::core::{Diagnostic, DiagnosticSink};
use tracing::warn;

/// Emits every diagnostic as a `warn` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::MissingField { field } => {
                warn!(field = field.as_str(), "{}", diagnostic);
            }
            Diagnostic::TypeMismatch {
                field,
                expected,
                rows,
            } => {
                warn!(
                    field = field.as_str(),
                    expected = expected.as_str(),
                    count = rows.len(),
                    "{}",
                    diagnostic
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CanonicalType;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn diagnostics_are_logged_as_warnings() {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut sink = LogSink;
            sink.report(&Diagnostic::MissingField {
                field: "active".into(),
            });
            sink.report(&Diagnostic::TypeMismatch {
                field: "age".into(),
                expected: CanonicalType::Integer,
                rows: vec![1, 3],
            });
        });

        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert_eq!(output.matches("WARN").count(), 2);
        assert!(output.contains("Field 'active' is missing from the extracted data."));
        assert!(output.contains(
            "Field 'age' contains 2 rows with data type mismatches. \
             Expected type: 'integer', mismatched row indices: [1, 3]."
        ));
        assert!(output.contains("field=\"age\""));
        assert!(output.contains("expected=\"integer\""));
        assert!(output.contains("count=2"));
    }
}
