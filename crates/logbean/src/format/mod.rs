//! Record model and encodings
//!
//! A [`Record`] is an ordered list of key/value fields. Field order is part of
//! the output contract, so records are never stored in a map. [`Encoding`]
//! turns one record into exactly one newline-terminated line.

mod json;
mod logfmt;
mod timestamp;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use smallvec::SmallVec;

pub use timestamp::Timestamp;

/// Value type carried by record fields and call tokens
pub type Value = serde_json::Value;

/// Placeholder value for a trailing key that has no value
pub const MISSING_VALUE: &str = "(MISSING)";

/// One structured log event
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: SmallVec<[(String, Value); 8]>,
}

impl Record {
    /// Create an empty record with room for `capacity` fields
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: SmallVec::with_capacity(capacity),
        }
    }

    /// Append one field
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.push((key.into(), value.into()));
    }

    /// Append alternating key/value tokens.
    ///
    /// A dangling key gets [`MISSING_VALUE`]. Keys that are not strings are
    /// rendered with their JSON text.
    pub fn push_keyvals<I>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = Value>,
    {
        let mut tokens = tokens.into_iter();
        while let Some(key) = tokens.next() {
            let value = tokens
                .next()
                .unwrap_or_else(|| Value::from(MISSING_VALUE));
            self.fields.push((key_string(key), value));
        }
    }

    /// Fields in emission order
    #[must_use]
    pub fn fields(&self) -> &[(String, Value)] {
        &self.fields
    }

    /// First value recorded under `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Number of fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

fn key_string(key: Value) -> String {
    match key {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Line encoding applied before a record reaches the sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// `key=value` pairs separated by spaces
    Logfmt,
    /// One JSON object per line
    Json,
}

impl Encoding {
    /// Append `record` to `buf` as one newline-terminated line
    ///
    /// # Errors
    ///
    /// Returns an error only if JSON serialization of a value fails.
    pub fn encode(self, record: &Record, buf: &mut Vec<u8>) -> std::io::Result<()> {
        match self {
            Self::Json => json::encode(record, buf)?,
            Self::Logfmt => logfmt::encode(record, buf),
        }
        buf.push(b'\n');
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample() -> Record {
        let mut record = Record::default();
        record.push("ts", "2024-01-01T00:00:00Z");
        record.push("caller", "main.rs:10");
        record.push("service", "billing");
        record.push("level", "warn");
        record.push_keyvals([json!("retrying"), json!(true)]);
        record
    }

    #[test]
    fn test_push_keyvals_pairs_tokens() {
        let mut record = Record::default();
        record.push_keyvals([json!("user"), json!(42), json!("ok"), json!(false)]);
        assert_eq!(
            record.fields(),
            &[
                ("user".to_string(), json!(42)),
                ("ok".to_string(), json!(false)),
            ]
        );
    }

    #[test]
    fn test_push_keyvals_pads_missing_value() {
        let mut record = Record::default();
        record.push_keyvals([json!("a"), json!(1), json!("dangling")]);
        assert_eq!(record.get("dangling"), Some(&json!(MISSING_VALUE)));
    }

    #[test]
    fn test_non_string_keys_use_json_text() {
        let mut record = Record::default();
        record.push_keyvals([json!(7), json!("seven"), json!(null), json!(0)]);
        assert_eq!(record.fields()[0].0, "7");
        assert_eq!(record.fields()[1].0, "null");
    }

    #[test]
    fn test_json_preserves_field_order() {
        let mut buf = Vec::new();
        Encoding::Json.encode(&sample(), &mut buf).unwrap();
        let line = String::from_utf8(buf).unwrap();
        assert_eq!(
            line,
            "{\"ts\":\"2024-01-01T00:00:00Z\",\"caller\":\"main.rs:10\",\"service\":\"billing\",\"level\":\"warn\",\"retrying\":true}\n"
        );
    }

    #[test]
    fn test_logfmt_line() {
        let mut buf = Vec::new();
        Encoding::Logfmt.encode(&sample(), &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "ts=2024-01-01T00:00:00Z caller=main.rs:10 service=billing level=warn retrying=true\n"
        );
    }
}
