//! Column data types.
//!
//! `DataType` decides how a raw generated value is coerced before it reaches
//! a writer. It never influences how a distribution advances.

use crate::values::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Data type of an output column.
///
/// # YAML Format
///
/// ```yaml
/// type: INTEGER
/// type: float      # lowercase is accepted too
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataType {
    /// 64-bit signed integer
    #[serde(alias = "integer", alias = "int")]
    Integer,

    /// UTF-8 string
    #[serde(alias = "string", alias = "text")]
    String,

    /// 64-bit floating point
    #[serde(alias = "float", alias = "double")]
    Float,
}

impl DataType {
    /// True for `Integer` and `Float`.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }

    /// Coerce a raw numeric sample into a value of this type.
    ///
    /// Integers are rounded half away from zero.
    pub fn from_number(&self, raw: f64) -> Value {
        match self {
            Self::Integer => Value::Integer(raw.round() as i64),
            Self::Float => Value::Float(raw),
            Self::String => Value::String(raw.to_string()),
        }
    }

    /// Coerce a literal taken from configuration into this type.
    ///
    /// Returns `None` when the literal cannot represent a value of this type
    /// (e.g. `"abc"` for an `Integer` column).
    pub fn coerce(&self, value: Value) -> Option<Value> {
        match (self, value) {
            (_, Value::Null) => Some(Value::Null),
            (Self::Integer, Value::Integer(i)) => Some(Value::Integer(i)),
            (Self::Integer, Value::Float(f)) => Some(self.from_number(f)),
            (Self::Integer, Value::String(s)) => s.trim().parse::<i64>().ok().map(Value::Integer),
            (Self::Float, Value::Integer(i)) => Some(Value::Float(i as f64)),
            (Self::Float, Value::Float(f)) => Some(Value::Float(f)),
            (Self::Float, Value::String(s)) => s.trim().parse::<f64>().ok().map(Value::Float),
            (Self::String, Value::String(s)) => Some(Value::String(s)),
            (Self::String, Value::Integer(i)) => Some(Value::String(i.to_string())),
            (Self::String, Value::Float(f)) => Some(Value::String(f.to_string())),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Integer => "INTEGER",
            Self::String => "STRING",
            Self::Float => "FLOAT",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_data_type() {
        let upper: DataType = serde_yaml::from_str("INTEGER").unwrap();
        let lower: DataType = serde_yaml::from_str("float").unwrap();
        let alias: DataType = serde_yaml::from_str("text").unwrap();

        assert_eq!(upper, DataType::Integer);
        assert_eq!(lower, DataType::Float);
        assert_eq!(alias, DataType::String);
        assert!(serde_yaml::from_str::<DataType>("BLOB").is_err());
    }

    #[test]
    fn test_from_number() {
        assert_eq!(DataType::Integer.from_number(2.5), Value::Integer(3));
        assert_eq!(DataType::Integer.from_number(-2.5), Value::Integer(-3));
        assert_eq!(DataType::Float.from_number(2.5), Value::Float(2.5));
        assert_eq!(
            DataType::String.from_number(7.0),
            Value::String("7".to_string())
        );
    }

    #[test]
    fn test_coerce_literals() {
        assert_eq!(
            DataType::Integer.coerce(Value::String(" 42 ".to_string())),
            Some(Value::Integer(42))
        );
        assert_eq!(
            DataType::Float.coerce(Value::Integer(3)),
            Some(Value::Float(3.0))
        );
        assert_eq!(
            DataType::String.coerce(Value::Integer(3)),
            Some(Value::String("3".to_string()))
        );
        assert_eq!(DataType::Integer.coerce(Value::String("abc".to_string())), None);
        assert_eq!(DataType::Float.coerce(Value::Null), Some(Value::Null));
    }

    #[test]
    fn test_display() {
        assert_eq!(DataType::Integer.to_string(), "INTEGER");
        assert_eq!(DataType::String.to_string(), "STRING");
    }
}
