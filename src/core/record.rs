use crate::core::{Result, SchemaCheckError};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub data: IndexMap<String, Value>,
}

impl Record {
    pub fn with_data(data: IndexMap<String, Value>) -> Self {
        Self { data }
    }

    pub fn get_field(&self, name: &str) -> Option<&Value> {
        self.data.get(name)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self::with_data(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Positionally indexed rows plus the set of columns the batch carries.
///
/// A column exists when it was declared up front or when at least one record
/// has a value for it. Rows that lack a value for an existing column read as
/// `null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordBatch {
    columns: IndexSet<String>,
    records: Vec<Record>,
}

impl RecordBatch {
    pub fn new(records: Vec<Record>) -> Self {
        Self::with_columns(Vec::<String>::new(), records)
    }

    pub fn with_columns<I, S>(columns: I, records: Vec<Record>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut columns: IndexSet<String> = columns.into_iter().map(Into::into).collect();
        for record in &records {
            for key in record.data.keys() {
                if !columns.contains(key) {
                    columns.insert(key.clone());
                }
            }
        }
        Self { columns, records }
    }

    /// Parses one JSON object per line. Blank lines are skipped but still
    /// count towards the reported line number.
    pub fn from_json_lines(input: &str) -> Result<Self> {
        let mut records: Vec<Record> = Vec::new();

        for (index, line) in input.lines().enumerate() {
            let line_number = index + 1;
            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str::<Value>(line) {
                Ok(Value::Object(obj)) => records.push(obj.into_iter().collect()),
                Ok(_) => {
                    return Err(SchemaCheckError::Record {
                        line: line_number,
                        message: "Line is not a JSON object".to_string(),
                    });
                }
                Err(e) => {
                    return Err(SchemaCheckError::Record {
                        line: line_number,
                        message: e.to_string(),
                    });
                }
            }
        }

        Ok(Self::new(records))
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains(name)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|s| s.as_str())
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Values of one column by row position, `None` where the row has no value.
    pub fn column<'a>(&'a self, name: &'a str) -> impl Iterator<Item = (usize, Option<&'a Value>)> + 'a {
        self.records
            .iter()
            .enumerate()
            .map(move |(index, record)| (index, record.get_field(name)))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
