//! In-memory schema registry
//!
//! The registry maps schema names to immutable schema handles and is the
//! only way nested record instances get allocated during conversion: a
//! record-kinded field names its schema, and the write-side resolver asks
//! the registry to instantiate it. A name the registry does not know is an
//! allocation failure, surfaced as a typed error instead of a reflective
//! class lookup.
//!
//! Callers populate the registry once at startup with every record schema
//! the conversion may touch, on both the input and output side.

use std::collections::HashMap;
use std::sync::Arc;

use crate::convert::{ConvertError, ConvertResult};

use super::types::Schema;

/// Registry of known record schemas, keyed by schema name.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: HashMap<String, Arc<Schema>>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a schema under its name.
    ///
    /// # Errors
    ///
    /// - `InvalidSchema` if the schema fails structural validation
    /// - `SchemaAlreadyRegistered` if the name is taken; registered
    ///   schemas are immutable
    pub fn register(&mut self, schema: Schema) -> ConvertResult<()> {
        schema
            .validate_structure()
            .map_err(|reason| ConvertError::InvalidSchema {
                schema: schema.name.clone(),
                reason,
            })?;

        if self.schemas.contains_key(&schema.name) {
            return Err(ConvertError::SchemaAlreadyRegistered {
                schema: schema.name,
            });
        }

        self.schemas.insert(schema.name.clone(), Arc::new(schema));
        Ok(())
    }

    /// Gets a schema handle by name.
    pub fn get(&self, name: &str) -> Option<Arc<Schema>> {
        self.schemas.get(name).cloned()
    }

    /// Checks whether a schema name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// Returns the number of registered schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Returns true when no schema is registered.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Iterates over all registered schemas.
    pub fn schemas(&self) -> impl Iterator<Item = &Arc<Schema>> {
        self.schemas.values()
    }
}
