//! Schema model for remap
//!
//! A schema is a named, ordered list of typed fields. Field kinds cover
//! nested records, enums, unions, arrays, fixed, bytes and the primitive
//! scalars; any field may declare a default value.
//!
//! # Design Principles
//!
//! - Schemas are plain data: a nested record kind refers to its schema by
//!   registered name, never by embedded pointer
//! - Registered schemas are immutable and shared via `Arc`
//! - A field is *required* iff its kind is not `record` and it declares no
//!   default value
//! - Nested record instances are only ever allocated through the registry

mod registry;
mod types;

pub use registry::SchemaRegistry;
pub use types::{FieldDef, FieldKind, Schema};
