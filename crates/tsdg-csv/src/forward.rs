//! Forward conversion: Value → CSV field.

use tsdg_core::Value;

/// Wrapper for CSV string values.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvValue(pub String);

impl CsvValue {
    /// Get the inner CSV string.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get a reference to the inner CSV string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Value> for CsvValue {
    fn from(value: Value) -> Self {
        match value {
            // Null - empty field
            Value::Null => CsvValue(String::new()),
            Value::Integer(i) => CsvValue(i.to_string()),
            Value::Float(f) => CsvValue(f.to_string()),
            Value::String(s) => CsvValue(s),
        }
    }
}

impl From<&Value> for CsvValue {
    fn from(value: &Value) -> Self {
        CsvValue::from(value.clone())
    }
}
