//! Schema type definitions
//!
//! Supported field kinds:
//! - record: nested record, identified by its registered schema name
//! - enum: closed set of symbolic values
//! - union: one of several branch kinds
//! - array: homogeneous list with a declared element kind
//! - fixed: byte sequence of a declared length
//! - bytes: variable-length byte sequence
//! - boolean / int / long / float / double / string: primitive scalars

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared kind of a schema field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    /// Nested record; the schema is resolved by name through the registry
    Record {
        /// Registered name of the nested record schema
        schema_name: String,
    },
    /// Enumeration over a closed symbol set
    Enum {
        /// Name of the enum type
        name: String,
        /// Valid symbols, in declaration order
        symbols: Vec<String>,
    },
    /// One of several branch kinds
    Union {
        /// Branch kinds, in declaration order
        branches: Vec<FieldKind>,
    },
    /// Homogeneous array (boxed to allow recursive kinds)
    Array {
        /// Element kind
        items: Box<FieldKind>,
    },
    /// Byte sequence of exactly `size` bytes
    Fixed {
        /// Name of the fixed type
        name: String,
        /// Declared length in bytes
        size: usize,
    },
    /// Variable-length byte sequence
    Bytes,
    /// Boolean
    Boolean,
    /// 32-bit signed integer
    Int,
    /// 64-bit signed integer
    Long,
    /// 32-bit floating point
    Float,
    /// 64-bit floating point
    Double,
    /// UTF-8 string
    String,
}

impl FieldKind {
    /// Returns the bare kind name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::Record { .. } => "record",
            FieldKind::Enum { .. } => "enum",
            FieldKind::Union { .. } => "union",
            FieldKind::Array { .. } => "array",
            FieldKind::Fixed { .. } => "fixed",
            FieldKind::Bytes => "bytes",
            FieldKind::Boolean => "boolean",
            FieldKind::Int => "int",
            FieldKind::Long => "long",
            FieldKind::Float => "float",
            FieldKind::Double => "double",
            FieldKind::String => "string",
        }
    }
}

impl fmt::Display for FieldKind {
    /// Renders the kind with enough detail for a diagnostic, e.g.
    /// `record Identification`, `enum Cards`, `fixed(16)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Record { schema_name } => write!(f, "record {}", schema_name),
            FieldKind::Enum { name, .. } => write!(f, "enum {}", name),
            FieldKind::Union { branches } => {
                write!(f, "union[")?;
                for (i, branch) in branches.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", branch)?;
                }
                write!(f, "]")
            }
            FieldKind::Array { items } => write!(f, "array<{}>", items),
            FieldKind::Fixed { size, .. } => write!(f, "fixed({})", size),
            other => write!(f, "{}", other.type_name()),
        }
    }
}

/// A named field with a declared kind and an optional default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field name, unique within its schema
    pub name: String,
    /// Declared kind
    #[serde(flatten)]
    pub kind: FieldKind,
    /// Default value, if the field declares one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
}

impl FieldDef {
    /// Create a field with no default.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            default: None,
        }
    }

    /// Create a field with a declared default value.
    pub fn with_default(
        name: impl Into<String>,
        kind: FieldKind,
        default: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            default: Some(default),
        }
    }

    /// Create a string field with no default.
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::String)
    }

    /// Create an int field with no default.
    pub fn int(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Int)
    }

    /// Create a nested record field referring to a registered schema.
    pub fn record(name: impl Into<String>, schema_name: impl Into<String>) -> Self {
        Self::new(
            name,
            FieldKind::Record {
                schema_name: schema_name.into(),
            },
        )
    }

    /// A field must be covered by the mapping configuration iff it is not
    /// a nested record and declares no default.
    pub fn is_required(&self) -> bool {
        !matches!(self.kind, FieldKind::Record { .. }) && self.default.is_none()
    }
}

/// A record schema: a name and an ordered field list.
///
/// Field positions are the vector indices; record instances store their
/// values positionally against this order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Unique schema name (the registry key)
    pub name: String,
    /// Field definitions, in declaration order
    pub fields: Vec<FieldDef>,
}

impl Schema {
    /// Create a new schema.
    pub fn new(name: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Looks up a field by name, returning its position and definition.
    pub fn field(&self, name: &str) -> Option<(usize, &FieldDef)> {
        self.fields
            .iter()
            .enumerate()
            .find(|(_, field)| field.name == name)
    }

    /// Validates the schema structure itself (not an instance).
    pub fn validate_structure(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("Schema name must not be empty".into());
        }

        for (i, field) in self.fields.iter().enumerate() {
            if field.name.is_empty() {
                return Err(format!("Field at position {} has an empty name", i));
            }
            if self.fields[..i].iter().any(|f| f.name == field.name) {
                return Err(format!("Duplicate field name '{}'", field.name));
            }
        }

        Ok(())
    }
}
