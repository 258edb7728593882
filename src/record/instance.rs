//! Record instances positioned against a schema

use std::fmt;
use std::sync::Arc;

use crate::convert::{ConvertError, ConvertResult};
use crate::schema::Schema;

use super::value::Value;

/// A concrete record conforming to a schema.
///
/// Values are stored positionally, one slot per declared field, in the
/// schema's declaration order. Freshly allocated records hold `Null` in
/// every slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    schema: Arc<Schema>,
    values: Vec<Value>,
}

impl Record {
    /// Allocates a new, empty instance of the given schema.
    pub fn new(schema: Arc<Schema>) -> Self {
        let values = vec![Value::Null; schema.fields.len()];
        Self { schema, values }
    }

    /// The schema this record conforms to.
    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Reads a field by name; `None` when the name is not declared.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schema.field(name).map(|(pos, _)| &self.values[pos])
    }

    /// Reads the field at a schema position.
    ///
    /// Callers obtain positions from `Schema::field`; positions are always
    /// in bounds for a record of that schema.
    pub fn get_pos(&self, pos: usize) -> &Value {
        &self.values[pos]
    }

    /// Mutable access to the field at a schema position.
    pub fn get_mut_pos(&mut self, pos: usize) -> &mut Value {
        &mut self.values[pos]
    }

    /// Writes a field by name.
    ///
    /// # Errors
    ///
    /// `UnknownOutputField` when the name is not declared on this record's
    /// schema. No type check happens here; the write-side resolver is
    /// responsible for compatibility.
    pub fn put(&mut self, name: &str, value: impl Into<Value>) -> ConvertResult<()> {
        let (pos, _) = self
            .schema
            .field(name)
            .ok_or_else(|| ConvertError::UnknownOutputField {
                segment: name.to_string(),
                schema: self.schema.name.clone(),
            })?;
        self.values[pos] = value.into();
        Ok(())
    }

    /// Writes the field at a schema position.
    pub fn put_pos(&mut self, pos: usize, value: Value) {
        self.values[pos] = value;
    }
}

impl fmt::Display for Record {
    /// JSON-like rendering in schema field order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, field) in self.schema.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "\"{}\": {}", field.name, self.values[i])?;
        }
        write!(f, "}}")
    }
}
