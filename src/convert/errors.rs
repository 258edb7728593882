//! Conversion error taxonomy
//!
//! Every failure inside a conversion aborts the whole call and surfaces as
//! one `ConvertError`. Errors are never retried: they are caused by
//! invalid configuration, an invalid schema, or invalid data, and
//! retrying with the same input cannot succeed.

use thiserror::Error;

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Conversion and schema-registry errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConvertError {
    // ==================
    // Configuration Errors
    // ==================
    /// A required output field is not covered by any mapping
    #[error("Field named {field} is a required field in output schema {schema} but is not provided in config")]
    UncoveredRequiredField { field: String, schema: String },

    /// A field path with zero segments
    #[error("Field path must contain at least one segment")]
    EmptyPath,

    // ==================
    // Path Errors
    // ==================
    /// A path segment names a field absent from the input-side schema
    #[error("Could not find a field named {segment} on input schema {schema}")]
    UnknownInputField { segment: String, schema: String },

    /// A path segment names a field absent from the output-side schema
    #[error("Could not find a field named {segment} on output schema {schema}")]
    UnknownOutputField { segment: String, schema: String },

    /// A non-final path segment names a field that is not a nested record
    #[error("Cannot descend through field {segment} on schema {schema}: not a record field")]
    NotARecordField { segment: String, schema: String },

    /// The read side met an uninitialized nested record
    #[error("Field {segment} on input schema {schema} has no nested record to read")]
    MissingInputRecord { segment: String, schema: String },

    // ==================
    // Type Errors
    // ==================
    /// A value's runtime type cannot be stored into the declared field type
    #[error("Value of type {actual} cannot be stored in field {field} of type {expected} on schema {schema}")]
    TypeMismatch {
        field: String,
        expected: String,
        actual: String,
        schema: String,
    },

    /// A textual symbol outside the target enum's symbol set
    #[error("{symbol} is not a symbol of enum {enum_name}")]
    UnknownEnumSymbol { symbol: String, enum_name: String },

    // ==================
    // Data Errors
    // ==================
    /// The input resolved to null but the output field is required
    #[error("Input record did not contain value for a required field: {field}")]
    MissingRequiredValue { field: String },

    // ==================
    // Allocation / Registry Errors
    // ==================
    /// A declared record type that cannot be instantiated
    #[error("Could not create record for unregistered schema {schema}")]
    UnknownSchema { schema: String },

    /// The required-field walk revisited a schema already on its stack
    #[error("Schema {schema} is self-referential; cannot compute required fields")]
    RecursiveSchema { schema: String },

    /// A schema failed structural validation at registration
    #[error("Schema {schema} is invalid: {reason}")]
    InvalidSchema { schema: String, reason: String },

    /// A schema name registered twice
    #[error("Schema {schema} is already registered")]
    SchemaAlreadyRegistered { schema: String },
}

impl ConvertError {
    /// Returns the stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            ConvertError::UncoveredRequiredField { .. } => "REMAP_UNCOVERED_REQUIRED_FIELD",
            ConvertError::EmptyPath => "REMAP_EMPTY_PATH",
            ConvertError::UnknownInputField { .. } => "REMAP_UNKNOWN_INPUT_FIELD",
            ConvertError::UnknownOutputField { .. } => "REMAP_UNKNOWN_OUTPUT_FIELD",
            ConvertError::NotARecordField { .. } => "REMAP_NOT_A_RECORD_FIELD",
            ConvertError::MissingInputRecord { .. } => "REMAP_MISSING_INPUT_RECORD",
            ConvertError::TypeMismatch { .. } => "REMAP_TYPE_MISMATCH",
            ConvertError::UnknownEnumSymbol { .. } => "REMAP_UNKNOWN_ENUM_SYMBOL",
            ConvertError::MissingRequiredValue { .. } => "REMAP_MISSING_REQUIRED_VALUE",
            ConvertError::UnknownSchema { .. } => "REMAP_UNKNOWN_SCHEMA",
            ConvertError::RecursiveSchema { .. } => "REMAP_RECURSIVE_SCHEMA",
            ConvertError::InvalidSchema { .. } => "REMAP_INVALID_SCHEMA",
            ConvertError::SchemaAlreadyRegistered { .. } => "REMAP_SCHEMA_EXISTS",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        let err = ConvertError::UncoveredRequiredField {
            field: "idout".into(),
            schema: "BdPersonOut".into(),
        };
        assert_eq!(err.code(), "REMAP_UNCOVERED_REQUIRED_FIELD");

        let err = ConvertError::UnknownSchema {
            schema: "Nope".into(),
        };
        assert_eq!(err.code(), "REMAP_UNKNOWN_SCHEMA");
    }

    #[test]
    fn test_path_errors_name_segment_and_schema() {
        let err = ConvertError::UnknownInputField {
            segment: "identification".into(),
            schema: "BdPerson".into(),
        };
        let message = err.to_string();
        assert!(message.contains("identification"));
        assert!(message.contains("input schema BdPerson"));
    }

    #[test]
    fn test_type_mismatch_names_actual_and_expected() {
        let err = ConvertError::TypeMismatch {
            field: "idout".into(),
            expected: "int".into(),
            actual: "string".into(),
            schema: "IdentificationOut".into(),
        };
        let message = err.to_string();
        assert!(message.contains("string"));
        assert!(message.contains("int"));
        assert!(message.contains("idout"));
    }

    #[test]
    fn test_enum_error_names_symbol_and_enum() {
        let err = ConvertError::UnknownEnumSymbol {
            symbol: "JOKER".into(),
            enum_name: "Cards".into(),
        };
        assert!(err.to_string().contains("JOKER"));
        assert!(err.to_string().contains("Cards"));
    }
}
