//! Required-field collection
//!
//! The set of output fields a mapping configuration must cover: every
//! non-record field without a default, collected transitively through
//! nested record schemas. The result is a fresh set per call; nothing is
//! accumulated across calls, so repeated and concurrent conversions are
//! independent.

use std::collections::BTreeSet;

use crate::schema::{FieldKind, Schema, SchemaRegistry};

use super::errors::{ConvertError, ConvertResult};

/// Collects the names of all required fields of `schema`, recursing into
/// nested record schemas via the registry.
///
/// # Errors
///
/// - `UnknownSchema` when a nested record names an unregistered schema
/// - `RecursiveSchema` when a schema reappears on its own nesting stack;
///   the same schema reachable through sibling fields is legal
pub fn collect_required(
    schema: &Schema,
    registry: &SchemaRegistry,
) -> ConvertResult<BTreeSet<String>> {
    let mut required = BTreeSet::new();
    let mut stack = Vec::new();
    walk(schema, registry, &mut required, &mut stack)?;
    Ok(required)
}

fn walk(
    schema: &Schema,
    registry: &SchemaRegistry,
    required: &mut BTreeSet<String>,
    stack: &mut Vec<String>,
) -> ConvertResult<()> {
    if stack.iter().any(|name| name == &schema.name) {
        return Err(ConvertError::RecursiveSchema {
            schema: schema.name.clone(),
        });
    }
    stack.push(schema.name.clone());

    for field in &schema.fields {
        match &field.kind {
            FieldKind::Record { schema_name } => {
                let nested =
                    registry
                        .get(schema_name)
                        .ok_or_else(|| ConvertError::UnknownSchema {
                            schema: schema_name.clone(),
                        })?;
                walk(&nested, registry, required, stack)?;
            }
            _ => {
                if field.default.is_none() {
                    required.insert(field.name.clone());
                }
            }
        }
    }

    stack.pop();
    Ok(())
}
