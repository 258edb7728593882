//! Path resolution over record instances
//!
//! The resolver walks a record tree one path segment at a time, using the
//! schema at each level to validate the segment and find the next hop.
//! The two sides are deliberately asymmetric: reading requires every
//! intermediate nested record to already exist, while writing materializes
//! missing intermediates on demand through the schema registry. Only the
//! write side type-checks, and only enum values are coerced.

use crate::record::{Record, Value};
use crate::schema::{FieldDef, FieldKind, SchemaRegistry};

use super::config::FieldPath;
use super::errors::{ConvertError, ConvertResult};

/// Walks field paths through records, reading on the input side and
/// writing (with lazy materialization) on the output side.
pub struct PathResolver<'a> {
    registry: &'a SchemaRegistry,
}

impl<'a> PathResolver<'a> {
    /// Creates a resolver backed by the given schema registry.
    pub fn new(registry: &'a SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Reads the raw value at `path` in `source`.
    ///
    /// Non-final segments must resolve to nested records that are already
    /// initialized; an absent intermediate is a `MissingInputRecord` path
    /// error, never a crash. The final segment's value is returned as
    /// stored, with no coercion — a `Null` leaf reads as `Null` and the
    /// caller decides whether that is fatal.
    pub fn read_value(&self, source: &Record, path: &FieldPath) -> ConvertResult<Value> {
        let (last, prefix) = path.split_last().ok_or(ConvertError::EmptyPath)?;

        let mut current = source;
        for segment in prefix {
            let schema = current.schema();
            let (pos, field) =
                schema
                    .field(segment)
                    .ok_or_else(|| ConvertError::UnknownInputField {
                        segment: segment.clone(),
                        schema: schema.name.clone(),
                    })?;

            if !matches!(field.kind, FieldKind::Record { .. }) {
                return Err(ConvertError::NotARecordField {
                    segment: segment.clone(),
                    schema: schema.name.clone(),
                });
            }

            current = match current.get_pos(pos) {
                Value::Record(nested) => nested,
                _ => {
                    return Err(ConvertError::MissingInputRecord {
                        segment: segment.clone(),
                        schema: schema.name.clone(),
                    })
                }
            };
        }

        let schema = current.schema();
        let (pos, _) = schema
            .field(last)
            .ok_or_else(|| ConvertError::UnknownInputField {
                segment: last.to_string(),
                schema: schema.name.clone(),
            })?;

        Ok(current.get_pos(pos).clone())
    }

    /// Writes `value` into `target` at `path`, under the field named
    /// `out_field_name`.
    ///
    /// Intermediate nested records are allocated through the registry the
    /// first time a path descends through them; later writes under the
    /// same prefix reuse the installed instance. The final path segment
    /// must exist on the target schema, but the write itself lands on
    /// `out_field_name` — the two usually coincide and are allowed to
    /// differ. Enum-kinded targets coerce a textual symbol into an enum
    /// value; everything else must match the declared kind exactly.
    pub fn write_value(
        &self,
        target: &mut Record,
        path: &FieldPath,
        value: Value,
        out_field_name: &str,
    ) -> ConvertResult<()> {
        let (last, prefix) = path.split_last().ok_or(ConvertError::EmptyPath)?;

        let mut current = target;
        for segment in prefix {
            let schema = current.schema().clone();
            let (pos, field) =
                schema
                    .field(segment)
                    .ok_or_else(|| ConvertError::UnknownOutputField {
                        segment: segment.clone(),
                        schema: schema.name.clone(),
                    })?;

            let nested_name = match &field.kind {
                FieldKind::Record { schema_name } => schema_name,
                _ => {
                    return Err(ConvertError::NotARecordField {
                        segment: segment.clone(),
                        schema: schema.name.clone(),
                    })
                }
            };

            if current.get_pos(pos).is_null() {
                let nested_schema =
                    self.registry
                        .get(nested_name)
                        .ok_or_else(|| ConvertError::UnknownSchema {
                            schema: nested_name.clone(),
                        })?;
                current.put_pos(pos, Value::Record(Record::new(nested_schema)));
            }

            current = match current.get_mut_pos(pos) {
                Value::Record(nested) => nested,
                _ => {
                    return Err(ConvertError::NotARecordField {
                        segment: segment.clone(),
                        schema: schema.name.clone(),
                    })
                }
            };
        }

        let schema = current.schema().clone();

        // The final path segment must exist even though the write lands
        // under `out_field_name`.
        schema
            .field(last)
            .ok_or_else(|| ConvertError::UnknownOutputField {
                segment: last.to_string(),
                schema: schema.name.clone(),
            })?;

        let (pos, field) =
            schema
                .field(out_field_name)
                .ok_or_else(|| ConvertError::UnknownOutputField {
                    segment: out_field_name.to_string(),
                    schema: schema.name.clone(),
                })?;

        let value = coerce_enum(value, &field.kind)?;
        check_assignable(&value, field, &schema.name)?;
        current.put_pos(pos, value);
        Ok(())
    }
}

/// Coerces a textual symbol into an enum value when the declared kind is
/// an enum. Non-enum kinds and non-textual values pass through untouched;
/// the type check decides their fate.
fn coerce_enum(value: Value, kind: &FieldKind) -> ConvertResult<Value> {
    let (enum_name, symbols) = match kind {
        FieldKind::Enum { name, symbols } => (name, symbols),
        _ => return Ok(value),
    };

    match value {
        Value::Str(symbol) | Value::Enum(symbol) => {
            if symbols.iter().any(|s| s == &symbol) {
                Ok(Value::Enum(symbol))
            } else {
                Err(ConvertError::UnknownEnumSymbol {
                    symbol,
                    enum_name: enum_name.clone(),
                })
            }
        }
        other => Ok(other),
    }
}

/// Rejects a value whose runtime type does not match the declared kind.
fn check_assignable(value: &Value, field: &FieldDef, schema_name: &str) -> ConvertResult<()> {
    if kind_accepts(&field.kind, value) {
        Ok(())
    } else {
        Err(ConvertError::TypeMismatch {
            field: field.name.clone(),
            expected: field.kind.to_string(),
            actual: value.type_name().to_string(),
            schema: schema_name.to_string(),
        })
    }
}

/// Exact compatibility between a declared kind and a runtime value.
///
/// `Null` is storable everywhere (the converter already rejected null for
/// required fields). No widening: an int never fits a long field.
fn kind_accepts(kind: &FieldKind, value: &Value) -> bool {
    if value.is_null() {
        return true;
    }

    match (kind, value) {
        (FieldKind::Boolean, Value::Boolean(_)) => true,
        (FieldKind::Int, Value::Int(_)) => true,
        (FieldKind::Long, Value::Long(_)) => true,
        (FieldKind::Float, Value::Float(_)) => true,
        (FieldKind::Double, Value::Double(_)) => true,
        (FieldKind::String, Value::Str(_)) => true,
        (FieldKind::Bytes, Value::Bytes(_)) => true,
        (FieldKind::Fixed { size, .. }, Value::Fixed(bytes)) => bytes.len() == *size,
        (FieldKind::Enum { symbols, .. }, Value::Enum(symbol)) => {
            symbols.iter().any(|s| s == symbol)
        }
        (FieldKind::Array { items }, Value::Array(values)) => {
            values.iter().all(|v| kind_accepts(items, v))
        }
        (FieldKind::Record { schema_name }, Value::Record(record)) => {
            record.schema().name == *schema_name
        }
        (FieldKind::Union { branches }, v) => branches.iter().any(|b| kind_accepts(b, v)),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldDef, Schema};

    fn cards_kind() -> FieldKind {
        FieldKind::Enum {
            name: "Cards".into(),
            symbols: vec![
                "SPADES".into(),
                "HEARTS".into(),
                "DIAMONDS".into(),
                "CLUBS".into(),
            ],
        }
    }

    fn setup_registry() -> SchemaRegistry {
        let mut registry = SchemaRegistry::new();
        registry
            .register(Schema::new(
                "Identification",
                vec![FieldDef::int("id"), FieldDef::string("username")],
            ))
            .unwrap();
        registry
            .register(Schema::new(
                "BdPerson",
                vec![
                    FieldDef::record("identification", "Identification"),
                    FieldDef::string("username"),
                    FieldDef::new("cards", cards_kind()),
                ],
            ))
            .unwrap();
        registry
            .register(Schema::new(
                "IdentificationOut",
                vec![FieldDef::int("idout"), FieldDef::string("usernameout")],
            ))
            .unwrap();
        registry
            .register(Schema::new(
                "BdPersonOut",
                vec![
                    FieldDef::record("identificationout", "IdentificationOut"),
                    FieldDef::new("cardsout", cards_kind()),
                ],
            ))
            .unwrap();
        registry
    }

    fn sample_input(registry: &SchemaRegistry) -> Record {
        let mut identification = Record::new(registry.get("Identification").unwrap());
        identification.put("id", 2).unwrap();
        identification.put("username", "sharone").unwrap();

        let mut person = Record::new(registry.get("BdPerson").unwrap());
        person.put("identification", identification).unwrap();
        person.put("username", "mrscarter").unwrap();
        person.put("cards", Value::Enum("CLUBS".into())).unwrap();
        person
    }

    #[test]
    fn test_read_top_level_field() {
        let registry = setup_registry();
        let resolver = PathResolver::new(&registry);
        let person = sample_input(&registry);

        let value = resolver
            .read_value(&person, &FieldPath::new(["username"]))
            .unwrap();
        assert_eq!(value, Value::Str("mrscarter".into()));
    }

    #[test]
    fn test_read_nested_field() {
        let registry = setup_registry();
        let resolver = PathResolver::new(&registry);
        let person = sample_input(&registry);

        let value = resolver
            .read_value(&person, &FieldPath::new(["identification", "id"]))
            .unwrap();
        assert_eq!(value, Value::Int(2));
    }

    #[test]
    fn test_read_unknown_segment() {
        let registry = setup_registry();
        let resolver = PathResolver::new(&registry);
        let person = sample_input(&registry);

        let err = resolver
            .read_value(&person, &FieldPath::new(["identification", "missing"]))
            .unwrap_err();
        assert_eq!(
            err,
            ConvertError::UnknownInputField {
                segment: "missing".into(),
                schema: "Identification".into(),
            }
        );
    }

    #[test]
    fn test_read_absent_intermediate_is_a_path_error() {
        let registry = setup_registry();
        let resolver = PathResolver::new(&registry);
        // identification never initialized
        let person = Record::new(registry.get("BdPerson").unwrap());

        let err = resolver
            .read_value(&person, &FieldPath::new(["identification", "id"]))
            .unwrap_err();
        assert_eq!(err.code(), "REMAP_MISSING_INPUT_RECORD");
    }

    #[test]
    fn test_read_through_non_record_field() {
        let registry = setup_registry();
        let resolver = PathResolver::new(&registry);
        let person = sample_input(&registry);

        let err = resolver
            .read_value(&person, &FieldPath::new(["username", "id"]))
            .unwrap_err();
        assert_eq!(err.code(), "REMAP_NOT_A_RECORD_FIELD");
    }

    #[test]
    fn test_read_empty_path() {
        let registry = setup_registry();
        let resolver = PathResolver::new(&registry);
        let person = sample_input(&registry);

        let err = resolver
            .read_value(&person, &FieldPath::new(Vec::<String>::new()))
            .unwrap_err();
        assert_eq!(err, ConvertError::EmptyPath);
    }

    #[test]
    fn test_write_materializes_intermediate_record() {
        let registry = setup_registry();
        let resolver = PathResolver::new(&registry);
        let mut out = Record::new(registry.get("BdPersonOut").unwrap());

        resolver
            .write_value(
                &mut out,
                &FieldPath::new(["identificationout", "idout"]),
                Value::Int(2),
                "idout",
            )
            .unwrap();

        match out.get("identificationout").unwrap() {
            Value::Record(nested) => {
                assert_eq!(nested.schema().name, "IdentificationOut");
                assert_eq!(nested.get("idout"), Some(&Value::Int(2)));
            }
            other => panic!("expected nested record, got {:?}", other),
        }
    }

    #[test]
    fn test_repeated_writes_reuse_the_materialized_record() {
        let registry = setup_registry();
        let resolver = PathResolver::new(&registry);
        let mut out = Record::new(registry.get("BdPersonOut").unwrap());

        resolver
            .write_value(
                &mut out,
                &FieldPath::new(["identificationout", "idout"]),
                Value::Int(2),
                "idout",
            )
            .unwrap();
        resolver
            .write_value(
                &mut out,
                &FieldPath::new(["identificationout", "usernameout"]),
                Value::Str("sharone".into()),
                "usernameout",
            )
            .unwrap();

        // Both fields live in the same nested instance.
        match out.get("identificationout").unwrap() {
            Value::Record(nested) => {
                assert_eq!(nested.get("idout"), Some(&Value::Int(2)));
                assert_eq!(nested.get("usernameout"), Some(&Value::Str("sharone".into())));
            }
            other => panic!("expected nested record, got {:?}", other),
        }
    }

    #[test]
    fn test_write_unknown_final_segment() {
        let registry = setup_registry();
        let resolver = PathResolver::new(&registry);
        let mut out = Record::new(registry.get("BdPersonOut").unwrap());

        let err = resolver
            .write_value(
                &mut out,
                &FieldPath::new(["identificationout", "missing"]),
                Value::Int(2),
                "idout",
            )
            .unwrap_err();
        assert_eq!(
            err,
            ConvertError::UnknownOutputField {
                segment: "missing".into(),
                schema: "IdentificationOut".into(),
            }
        );
    }

    #[test]
    fn test_out_field_name_may_differ_from_final_segment() {
        let registry = setup_registry();
        let resolver = PathResolver::new(&registry);
        let mut out = Record::new(registry.get("BdPersonOut").unwrap());

        // Path ends at idout, but the write targets usernameout.
        resolver
            .write_value(
                &mut out,
                &FieldPath::new(["identificationout", "idout"]),
                Value::Str("sharone".into()),
                "usernameout",
            )
            .unwrap();

        match out.get("identificationout").unwrap() {
            Value::Record(nested) => {
                assert_eq!(nested.get("idout"), Some(&Value::Null));
                assert_eq!(nested.get("usernameout"), Some(&Value::Str("sharone".into())));
            }
            other => panic!("expected nested record, got {:?}", other),
        }
    }

    #[test]
    fn test_write_unregistered_nested_schema_fails_allocation() {
        let mut registry = SchemaRegistry::new();
        registry
            .register(Schema::new(
                "Holder",
                vec![FieldDef::record("inner", "NeverRegistered")],
            ))
            .unwrap();
        let resolver = PathResolver::new(&registry);
        let mut out = Record::new(registry.get("Holder").unwrap());

        let err = resolver
            .write_value(
                &mut out,
                &FieldPath::new(["inner", "x"]),
                Value::Int(1),
                "x",
            )
            .unwrap_err();
        assert_eq!(
            err,
            ConvertError::UnknownSchema {
                schema: "NeverRegistered".into()
            }
        );
    }

    #[test]
    fn test_write_coerces_string_to_enum() {
        let registry = setup_registry();
        let resolver = PathResolver::new(&registry);
        let mut out = Record::new(registry.get("BdPersonOut").unwrap());

        resolver
            .write_value(
                &mut out,
                &FieldPath::new(["cardsout"]),
                Value::Str("CLUBS".into()),
                "cardsout",
            )
            .unwrap();
        assert_eq!(out.get("cardsout"), Some(&Value::Enum("CLUBS".into())));
    }

    #[test]
    fn test_write_rejects_unknown_enum_symbol() {
        let registry = setup_registry();
        let resolver = PathResolver::new(&registry);
        let mut out = Record::new(registry.get("BdPersonOut").unwrap());

        let err = resolver
            .write_value(
                &mut out,
                &FieldPath::new(["cardsout"]),
                Value::Str("JOKER".into()),
                "cardsout",
            )
            .unwrap_err();
        assert_eq!(
            err,
            ConvertError::UnknownEnumSymbol {
                symbol: "JOKER".into(),
                enum_name: "Cards".into(),
            }
        );
    }

    #[test]
    fn test_write_rejects_type_mismatch() {
        let registry = setup_registry();
        let resolver = PathResolver::new(&registry);
        let mut out = Record::new(registry.get("BdPersonOut").unwrap());

        let err = resolver
            .write_value(
                &mut out,
                &FieldPath::new(["identificationout", "idout"]),
                Value::Str("two".into()),
                "idout",
            )
            .unwrap_err();
        assert_eq!(
            err,
            ConvertError::TypeMismatch {
                field: "idout".into(),
                expected: "int".into(),
                actual: "string".into(),
                schema: "IdentificationOut".into(),
            }
        );
    }

    #[test]
    fn test_no_numeric_widening() {
        let registry = setup_registry();
        let resolver = PathResolver::new(&registry);
        let mut out = Record::new(registry.get("BdPersonOut").unwrap());

        let err = resolver
            .write_value(
                &mut out,
                &FieldPath::new(["identificationout", "idout"]),
                Value::Long(2),
                "idout",
            )
            .unwrap_err();
        assert_eq!(err.code(), "REMAP_TYPE_MISMATCH");
    }

    #[test]
    fn test_write_null_is_always_storable() {
        let registry = setup_registry();
        let resolver = PathResolver::new(&registry);
        let mut out = Record::new(registry.get("BdPersonOut").unwrap());

        resolver
            .write_value(
                &mut out,
                &FieldPath::new(["identificationout", "usernameout"]),
                Value::Null,
                "usernameout",
            )
            .unwrap();
        match out.get("identificationout").unwrap() {
            Value::Record(nested) => assert_eq!(nested.get("usernameout"), Some(&Value::Null)),
            other => panic!("expected nested record, got {:?}", other),
        }
    }

    #[test]
    fn test_union_accepts_any_branch() {
        let union = FieldKind::Union {
            branches: vec![FieldKind::String, FieldKind::Int],
        };
        assert!(kind_accepts(&union, &Value::Int(1)));
        assert!(kind_accepts(&union, &Value::Str("x".into())));
        assert!(!kind_accepts(&union, &Value::Long(1)));
    }

    #[test]
    fn test_fixed_checks_length() {
        let fixed = FieldKind::Fixed {
            name: "Md5".into(),
            size: 4,
        };
        assert!(kind_accepts(&fixed, &Value::Fixed(vec![1, 2, 3, 4])));
        assert!(!kind_accepts(&fixed, &Value::Fixed(vec![1, 2])));
        assert!(!kind_accepts(&fixed, &Value::Bytes(vec![1, 2, 3, 4])));
    }

    #[test]
    fn test_array_checks_element_kinds() {
        let array = FieldKind::Array {
            items: Box::new(FieldKind::Int),
        };
        assert!(kind_accepts(&array, &Value::Array(vec![Value::Int(1)])));
        assert!(!kind_accepts(
            &array,
            &Value::Array(vec![Value::Int(1), Value::Str("x".into())])
        ));
    }
}
