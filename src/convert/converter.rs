//! Conversion orchestration
//!
//! A converter run is one linear pass with no state carried across calls:
//! validate, allocate or deep-copy, apply each mapping in order, return
//! the finished record or the first error. There is no partial-success
//! mode; a failing mapping aborts the whole call and the caller never
//! observes a partially written record.

use crate::observability::Logger;
use crate::record::Record;
use crate::schema::SchemaRegistry;

use super::config::FieldMapping;
use super::errors::{ConvertError, ConvertResult};
use super::required::collect_required;
use super::resolver::PathResolver;

/// Converts records between schemas according to a mapping configuration.
///
/// Holds no mutable state; one converter may serve any number of
/// conversions, concurrently.
pub struct RecordConverter<'a> {
    registry: &'a SchemaRegistry,
}

impl<'a> RecordConverter<'a> {
    /// Creates a converter backed by the given schema registry.
    pub fn new(registry: &'a SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Converts `input` into a freshly allocated record of the schema
    /// registered under `output_schema`.
    ///
    /// Before any output is allocated, the mapping configuration is
    /// validated to cover every required field of the output schema.
    ///
    /// # Errors
    ///
    /// - `UnknownSchema` when `output_schema` is not registered
    /// - `UncoveredRequiredField` when a required output field has no
    ///   mapping entry
    /// - any read, type or write error from applying a mapping
    pub fn convert_to_new_record(
        &self,
        mappings: &[FieldMapping],
        input: &Record,
        output_schema: &str,
    ) -> ConvertResult<Record> {
        logged(self.convert_new_inner(mappings, input, output_schema))
    }

    /// Converts `input` into a deep copy of `output`, overwriting the
    /// mapped fields. The caller's `output` record is never mutated.
    pub fn convert_to_existing_record(
        &self,
        mappings: &[FieldMapping],
        input: &Record,
        output: &Record,
    ) -> ConvertResult<Record> {
        logged(self.convert_existing_inner(mappings, input, output))
    }

    fn convert_new_inner(
        &self,
        mappings: &[FieldMapping],
        input: &Record,
        output_schema: &str,
    ) -> ConvertResult<Record> {
        let schema = self
            .registry
            .get(output_schema)
            .ok_or_else(|| ConvertError::UnknownSchema {
                schema: output_schema.to_string(),
            })?;

        // Coverage is validated before any output record exists.
        let required = collect_required(&schema, self.registry)?;
        for field in &required {
            let covered = mappings.iter().any(|m| m.out_field_name == *field);
            if !covered {
                return Err(ConvertError::UncoveredRequiredField {
                    field: field.clone(),
                    schema: schema.name.clone(),
                });
            }
        }

        let output = Record::new(schema);
        self.convert_existing_inner(mappings, input, &output)
    }

    fn convert_existing_inner(
        &self,
        mappings: &[FieldMapping],
        input: &Record,
        output: &Record,
    ) -> ConvertResult<Record> {
        let required = collect_required(output.schema(), self.registry)?;
        let resolver = PathResolver::new(self.registry);

        let mut working = output.clone();
        for mapping in mappings {
            let value = resolver.read_value(input, &mapping.input_path)?;

            if value.is_null() && required.contains(&mapping.out_field_name) {
                return Err(ConvertError::MissingRequiredValue {
                    field: mapping.out_field_name.clone(),
                });
            }

            resolver.write_value(
                &mut working,
                &mapping.output_path,
                value,
                &mapping.out_field_name,
            )?;
        }

        Ok(working)
    }
}

/// Logs a failed conversion once at the public boundary; the error is
/// still returned to the caller as a typed value.
fn logged(result: ConvertResult<Record>) -> ConvertResult<Record> {
    if let Err(error) = &result {
        let message = error.to_string();
        Logger::error(
            "CONVERT_FAILED",
            &[("code", error.code()), ("error", message.as_str())],
        );
    }
    result
}
