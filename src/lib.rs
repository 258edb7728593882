//! remap - declarative field-path mapping between record schemas
//!
//! Projects values from a source record into a target record whose schema
//! evolved independently, driven by an ordered list of
//! (input path -> output path) field mappings. Conversion either returns a
//! fully populated record or a typed error; a caller-supplied record is
//! never mutated.

pub mod convert;
pub mod observability;
pub mod record;
pub mod schema;
