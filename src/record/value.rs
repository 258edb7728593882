//! Runtime field values

use std::fmt;

use super::instance::Record;

/// A value stored in a record field.
///
/// `Null` doubles as "unset": a freshly allocated record holds `Null` in
/// every slot, and reading an unmapped optional field yields `Null`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent / unset
    Null,
    /// Boolean
    Boolean(bool),
    /// 32-bit signed integer
    Int(i32),
    /// 64-bit signed integer
    Long(i64),
    /// 32-bit floating point
    Float(f32),
    /// 64-bit floating point
    Double(f64),
    /// UTF-8 string
    Str(String),
    /// Variable-length byte sequence
    Bytes(Vec<u8>),
    /// Fixed-length byte sequence
    Fixed(Vec<u8>),
    /// Enum symbol
    Enum(String),
    /// Homogeneous array
    Array(Vec<Value>),
    /// Nested record
    Record(Record),
}

impl Value {
    /// Returns the runtime type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Float(_) => "float",
            Value::Double(_) => "double",
            Value::Str(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::Fixed(_) => "fixed",
            Value::Enum(_) => "enum",
            Value::Array(_) => "array",
            Value::Record(_) => "record",
        }
    }

    /// True when the value is absent.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<Record> for Value {
    fn from(v: Record) -> Self {
        Value::Record(v)
    }
}

impl fmt::Display for Value {
    /// JSON-like rendering for logs and the demo binary.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Long(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Double(v) => write!(f, "{}", v),
            Value::Str(v) | Value::Enum(v) => write!(f, "\"{}\"", v.escape_default()),
            Value::Bytes(b) | Value::Fixed(b) => {
                write!(f, "\"0x")?;
                for byte in b {
                    write!(f, "{:02x}", byte)?;
                }
                write!(f, "\"")
            }
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Record(record) => write!(f, "{}", record),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::Int(1).type_name(), "int");
        assert_eq!(Value::Long(1).type_name(), "long");
        assert_eq!(Value::Str("x".into()).type_name(), "string");
        assert_eq!(Value::Enum("CLUBS".into()).type_name(), "enum");
        assert_eq!(Value::Array(vec![]).type_name(), "array");
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from(2), Value::Int(2));
        assert_eq!(Value::from(2i64), Value::Long(2));
        assert_eq!(Value::from(1.5f64), Value::Double(1.5));
        assert_eq!(Value::from(true), Value::Boolean(true));
        assert_eq!(Value::from("sharone"), Value::Str("sharone".into()));
    }

    #[test]
    fn test_is_null() {
        assert!(Value::Null.is_null());
        assert!(!Value::Int(0).is_null());
    }

    #[test]
    fn test_display_is_json_like() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::Str("a\"b".into()).to_string(), "\"a\\\"b\"");
        assert_eq!(Value::Enum("CLUBS".into()).to_string(), "\"CLUBS\"");
        assert_eq!(Value::Bytes(vec![0x0a, 0xff]).to_string(), "\"0x0aff\"");
        assert_eq!(
            Value::Array(vec![Value::Int(1), Value::Int(2)]).to_string(),
            "[1, 2]"
        );
    }
}
