//! Generated values and output rows.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_yaml::Value as YamlValue;
use std::fmt;

/// A single generated cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// 64-bit signed integer
    Integer(i64),

    /// 64-bit floating point
    Float(f64),

    /// String value
    String(String),

    /// Null marker
    Null,
}

impl Value {
    /// Convert a YAML scalar from the configuration into a `Value`.
    ///
    /// Sequences and mappings have no cell representation and yield `None`.
    pub fn from_yaml(yaml: &YamlValue) -> Option<Self> {
        match yaml {
            YamlValue::Null => Some(Self::Null),
            YamlValue::Bool(b) => Some(Self::String(b.to_string())),
            YamlValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Self::Integer(i))
                } else {
                    n.as_f64().map(Self::Float)
                }
            }
            YamlValue::String(s) => Some(Self::String(s.clone())),
            YamlValue::Sequence(_) | YamlValue::Mapping(_) => None,
            YamlValue::Tagged(tagged) => Self::from_yaml(&tagged.value),
        }
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64. Integers are widened.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    /// Renders the value as text; null renders as the empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => f.write_str(s),
            Self::Null => Ok(()),
        }
    }
}

/// One emitted output record.
///
/// `tags` holds one value per tag dimension and `values` one value per
/// column, both in configuration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Timestamp of this sample
    pub timestamp: DateTime<Utc>,

    /// Tag values identifying the series
    pub tags: Vec<String>,

    /// Column values
    pub values: Vec<Value>,
}

impl Row {
    /// Create a new row.
    pub fn new(timestamp: DateTime<Utc>, tags: Vec<String>, values: Vec<Value>) -> Self {
        Self {
            timestamp,
            tags,
            values,
        }
    }

    /// Timestamp formatted as RFC 3339 with second precision and a `Z` suffix.
    pub fn timestamp_rfc3339(&self) -> String {
        format_timestamp(&self.timestamp)
    }

    /// Number of cells (timestamp + tags + values).
    pub fn width(&self) -> usize {
        1 + self.tags.len() + self.values.len()
    }
}

/// Format a timestamp the way every writer emits it.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_yaml_scalars() {
        let int: YamlValue = serde_yaml::from_str("42").unwrap();
        let float: YamlValue = serde_yaml::from_str("1.5").unwrap();
        let text: YamlValue = serde_yaml::from_str("hello").unwrap();

        assert_eq!(Value::from_yaml(&int), Some(Value::Integer(42)));
        assert_eq!(Value::from_yaml(&float), Some(Value::Float(1.5)));
        assert_eq!(
            Value::from_yaml(&text),
            Some(Value::String("hello".to_string()))
        );
        assert_eq!(Value::from_yaml(&YamlValue::Null), Some(Value::Null));
        assert_eq!(
            Value::from_yaml(&YamlValue::Bool(true)),
            Some(Value::String("true".to_string()))
        );
    }

    #[test]
    fn test_yaml_collections_rejected() {
        let seq: YamlValue = serde_yaml::from_str("[1, 2]").unwrap();
        let map: YamlValue = serde_yaml::from_str("{ a: 1 }").unwrap();

        assert_eq!(Value::from_yaml(&seq), None);
        assert_eq!(Value::from_yaml(&map), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Integer(-3).to_string(), "-3");
        assert_eq!(Value::Float(0.25).to_string(), "0.25");
        assert_eq!(Value::String("x".to_string()).to_string(), "x");
        assert_eq!(Value::Null.to_string(), "");
    }

    #[test]
    fn test_row_timestamp_format() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 3).unwrap();
        let row = Row::new(ts, vec!["a".to_string()], vec![Value::Integer(1)]);

        assert_eq!(row.timestamp_rfc3339(), "2024-01-01T00:00:03Z");
        assert_eq!(row.width(), 3);
    }
}
