//! Demonstration entry point for remap
//!
//! Builds the example schemas and input record, a hard-coded mapping
//! configuration, and runs a new-record conversion. All conversion logic
//! lives in the library; this binary is scaffolding that acts as an
//! external caller.

use remap::convert::{ConvertError, ConvertResult, FieldMapping, FieldPath, RecordConverter};
use remap::observability::Logger;
use remap::record::{Record, Value};
use remap::schema::{FieldDef, FieldKind, Schema, SchemaRegistry};

use serde_json::json;

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

fn build_registry() -> ConvertResult<SchemaRegistry> {
    let mut registry = SchemaRegistry::new();

    registry.register(Schema::new(
        "Identification",
        vec![FieldDef::int("id"), FieldDef::string("username")],
    ))?;
    registry.register(Schema::new(
        "BdPerson",
        vec![
            FieldDef::record("identification", "Identification"),
            FieldDef::string("username"),
            FieldDef::string("first_name"),
            FieldDef::string("last_name"),
            FieldDef::string("birthdate"),
            FieldDef::string("phone_number"),
            FieldDef::string("middle_name"),
            FieldDef::string("sex"),
            FieldDef::new("cards", cards_kind()),
        ],
    ))?;
    registry.register(Schema::new(
        "IdentificationOut",
        vec![FieldDef::int("idout"), FieldDef::string("usernameout")],
    ))?;
    registry.register(Schema::new(
        "BdPersonOut",
        vec![
            FieldDef::record("identificationout", "IdentificationOut"),
            FieldDef::new("cardsout", cards_kind()),
            FieldDef::with_default("height", FieldKind::Double, json!(0.0)),
        ],
    ))?;

    Ok(registry)
}

fn new_record(registry: &SchemaRegistry, name: &str) -> ConvertResult<Record> {
    let schema = registry.get(name).ok_or_else(|| ConvertError::UnknownSchema {
        schema: name.to_string(),
    })?;
    Ok(Record::new(schema))
}

fn generate_input_record(registry: &SchemaRegistry) -> ConvertResult<Record> {
    let mut identification = new_record(registry, "Identification")?;
    identification.put("id", 2)?;
    identification.put("username", "sharone")?;

    let mut person = new_record(registry, "BdPerson")?;
    person.put("identification", identification)?;
    person.put("username", "mrscarter")?;
    person.put("first_name", "Beyonce")?;
    person.put("last_name", "Knowles-Carter")?;
    person.put("birthdate", "1981-09-04")?;
    person.put("phone_number", "555555555")?;
    person.put("middle_name", "kaka")?;
    person.put("sex", "Man")?;
    person.put("cards", Value::Enum("CLUBS".into()))?;

    Ok(person)
}

fn generate_example_config() -> Vec<FieldMapping> {
    vec![
        FieldMapping::new(
            "idout",
            FieldPath::new(["identification", "id"]),
            FieldPath::new(["identificationout", "idout"]),
        ),
        FieldMapping::new(
            "usernameout",
            FieldPath::new(["identification", "username"]),
            FieldPath::new(["identificationout", "usernameout"]),
        ),
        FieldMapping::new(
            "cardsout",
            FieldPath::new(["cards"]),
            FieldPath::new(["cardsout"]),
        ),
    ]
}

fn run() -> ConvertResult<()> {
    let registry = build_registry()?;
    let input = generate_input_record(&registry)?;
    let config = generate_example_config();

    let converter = RecordConverter::new(&registry);
    let output = converter.convert_to_new_record(&config, &input, "BdPersonOut")?;

    let rendered = output.to_string();
    Logger::info("CONVERT_COMPLETE", &[("record", rendered.as_str())]);
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
