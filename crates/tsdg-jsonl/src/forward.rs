//! Forward conversion: Value / Row → JSON.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::json;
use tsdg_core::{Row, Value};

/// Wrapper for JSON values.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonValue(pub serde_json::Value);

impl JsonValue {
    /// Get the inner JSON value.
    pub fn into_inner(self) -> serde_json::Value {
        self.0
    }

    /// Get a reference to the inner JSON value.
    pub fn as_inner(&self) -> &serde_json::Value {
        &self.0
    }
}

impl From<&Value> for JsonValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => JsonValue(serde_json::Value::Null),
            Value::Integer(i) => JsonValue(json!(*i)),
            // Non-finite floats have no JSON form and become null.
            Value::Float(f) => JsonValue(json!(*f)),
            Value::String(s) => JsonValue(json!(s)),
        }
    }
}

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        JsonValue::from(&value)
    }
}

/// A row paired with its header, serialized as one ordered JSON object.
#[derive(Debug, Clone, Copy)]
pub struct JsonRow<'a> {
    header: &'a [String],
    row: &'a Row,
}

impl<'a> JsonRow<'a> {
    /// `header` must list the timestamp, tag and column names in order.
    pub fn new(header: &'a [String], row: &'a Row) -> Self {
        Self { header, row }
    }
}

impl Serialize for JsonRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.row.width()))?;
        let Some((timestamp_name, rest)) = self.header.split_first() else {
            return map.end();
        };
        let (tag_names, column_names) = rest.split_at(self.row.tags.len().min(rest.len()));

        map.serialize_entry(timestamp_name, &self.row.timestamp_rfc3339())?;
        for (name, tag) in tag_names.iter().zip(&self.row.tags) {
            map.serialize_entry(name, tag)?;
        }
        for (name, value) in column_names.iter().zip(&self.row.values) {
            map.serialize_entry(name, JsonValue::from(value).as_inner())?;
        }

        map.end()
    }
}
