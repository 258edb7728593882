//! Mapping configuration model
//!
//! A conversion is driven by an ordered list of `FieldMapping` entries,
//! each describing how exactly one output field is filled from exactly one
//! input path. The list is supplied by the caller; the core never reads
//! configuration from a file.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered sequence of field-name segments identifying a (possibly
/// nested) field within a record.
///
/// A path must be non-empty; an empty path surfaces as `EmptyPath` when
/// resolved, so construction itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    /// Builds a path from its segments, in order.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// The segments, in order.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a zero-segment path.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Splits off the final segment: `(final, non-final prefix)`.
    pub fn split_last(&self) -> Option<(&str, &[String])> {
        self.0
            .split_last()
            .map(|(last, prefix)| (last.as_str(), prefix))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

/// One mapping rule: fill the output field named `out_field_name` by
/// reading `input_path` from the source record and writing through
/// `output_path` on the target record.
///
/// The output field name and the final output-path segment are two
/// independent parameters. They coincide in practice, but the write
/// targets the name given here, and the final path segment is only
/// required to exist on the target schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    /// Name of the output field this mapping fills
    pub out_field_name: String,
    /// Path to read from the input record
    pub input_path: FieldPath,
    /// Path to write into the output record
    pub output_path: FieldPath,
}

impl FieldMapping {
    /// Builds a mapping rule.
    pub fn new(
        out_field_name: impl Into<String>,
        input_path: FieldPath,
        output_path: FieldPath,
    ) -> Self {
        Self {
            out_field_name: out_field_name.into(),
            input_path,
            output_path,
        }
    }
}
