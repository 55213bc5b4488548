use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{Result, Value};

/// One row of tabular data: a flat set of named field values.
///
/// Records carry no identity of their own; tables address them by their
/// position in the data slice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: HashMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Text of a field; missing fields read as empty text.
    pub fn text(&self, key: &str) -> String {
        self.get(key).map(Value::to_text).unwrap_or_default()
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.fields.values()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Parse a JSON array of flat objects.
    pub fn list_from_json(json: &str) -> Result<Vec<Record>> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_read_as_empty_text() {
        let record = Record::new().with("id", "USR-001");
        assert_eq!(record.text("id"), "USR-001");
        assert_eq!(record.text("email"), "");
    }

    #[test]
    fn parses_json_arrays() {
        let records = Record::list_from_json(
            r#"[{"id": "PRD-001", "stock": 45, "rating": 4.8}, {"id": "PRD-002"}]"#,
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("stock"), Some(&Value::Number(45.0)));
        assert_eq!(records[1].len(), 1);
    }

    #[test]
    fn rejects_nested_values() {
        let err = Record::list_from_json(r#"[{"id": {"nested": true}}]"#).unwrap_err();
        assert!(err.message.starts_with("invalid JSON"));
    }
}
