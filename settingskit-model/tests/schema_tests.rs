use pretty_assertions::assert_eq;
use settingskit_model::{Schema, SchemaError, SchemaRecord, SettingsDefinition, SettingsKind};

const APP_SCHEMA: &[SettingsDefinition] = &[
    SettingsDefinition::string("String Property", "string_prop"),
    SettingsDefinition::uri("Uri Property", "uri_prop"),
    SettingsDefinition::password("Password Property", "password_prop"),
    SettingsDefinition::integer("Retry Count", "retry_count"),
];

// ── SettingsDefinition constructors ──────────────────────────────

#[test]
fn string_definition() {
    let d = SettingsDefinition::string("Name", "name");
    assert_eq!(d.label, "Name");
    assert_eq!(d.key, "name");
    assert_eq!(d.kind, SettingsKind::String);
}

#[test]
fn uri_definition() {
    let d = SettingsDefinition::uri("Server", "server");
    assert_eq!(d.kind, SettingsKind::Uri);
}

#[test]
fn password_definition() {
    let d = SettingsDefinition::password("Secret", "secret");
    assert_eq!(d.kind, SettingsKind::Password);
}

#[test]
fn integer_definition() {
    let d = SettingsDefinition::integer("Port", "port");
    assert_eq!(d.kind, SettingsKind::Integer);
}

#[test]
fn definitions_are_usable_in_const_context() {
    const D: SettingsDefinition = SettingsDefinition::new("L", "k", SettingsKind::Password);
    assert_eq!(D.key, "k");
}

// ── Schema enumeration ───────────────────────────────────────────

#[test]
fn iter_yields_declaration_order() {
    let schema = Schema::new(APP_SCHEMA);
    let keys: Vec<_> = schema.iter().map(|d| d.key).collect();
    assert_eq!(keys, vec!["string_prop", "uri_prop", "password_prop", "retry_count"]);
}

#[test]
fn iter_is_restartable() {
    let schema = Schema::new(APP_SCHEMA);
    let first: Vec<_> = schema.iter().collect();
    let second: Vec<_> = schema.iter().collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 4);
}

#[test]
fn into_iter_matches_iter() {
    let schema = Schema::new(APP_SCHEMA);
    let via_into: Vec<_> = schema.into_iter().collect();
    let via_iter: Vec<_> = schema.iter().collect();
    assert_eq!(via_into, via_iter);
}

#[test]
fn find_by_key() {
    let schema = Schema::new(APP_SCHEMA);
    let d = schema.find("uri_prop").unwrap();
    assert_eq!(d.label, "Uri Property");
    assert_eq!(d.kind, SettingsKind::Uri);
    assert!(schema.find("missing").is_none());
}

#[test]
fn len_and_empty() {
    assert_eq!(Schema::new(APP_SCHEMA).len(), 4);
    assert!(!Schema::new(APP_SCHEMA).is_empty());
    assert!(Schema::new(&[]).is_empty());
}

// ── Schema checks ────────────────────────────────────────────────

#[test]
fn check_accepts_unique_keys() {
    assert!(Schema::new(APP_SCHEMA).check().is_ok());
}

#[test]
fn check_accepts_empty_schema() {
    assert!(Schema::new(&[]).check().is_ok());
}

#[test]
fn check_rejects_duplicate_key() {
    const DUP: &[SettingsDefinition] = &[
        SettingsDefinition::string("A", "same"),
        SettingsDefinition::integer("B", "same"),
    ];
    assert_eq!(
        Schema::new(DUP).check(),
        Err(SchemaError::DuplicateKey("same".into()))
    );
}

#[test]
fn check_rejects_empty_key() {
    const EMPTY: &[SettingsDefinition] = &[SettingsDefinition::string("Nameless", "")];
    assert_eq!(
        Schema::new(EMPTY).check(),
        Err(SchemaError::EmptyKey("Nameless".into()))
    );
}

#[test]
fn schema_error_display() {
    let msg = SchemaError::DuplicateKey("port".into()).to_string();
    assert!(msg.contains("duplicate"));
    assert!(msg.contains("port"));
}

// ── SchemaRecord / JSON feed ─────────────────────────────────────

#[test]
fn records_mirror_definitions() {
    let records = Schema::new(APP_SCHEMA).records();
    assert_eq!(records.len(), 4);
    assert_eq!(
        records[1],
        SchemaRecord {
            label: "Uri Property".into(),
            property_name: "uri_prop".into(),
            kind: SettingsKind::Uri,
        }
    );
}

#[test]
fn record_json_shape() {
    let record = SchemaRecord::from(&SettingsDefinition::password("Secret", "secret"));
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"label": "Secret", "property_name": "secret", "kind": "password"})
    );
}

#[test]
fn record_deserializes_from_feed() {
    let record: SchemaRecord = serde_json::from_str(
        r#"{"label":"Port","property_name":"port","kind":"integer"}"#,
    )
    .unwrap();
    assert_eq!(record.kind, SettingsKind::Integer);
    assert_eq!(record.property_name, "port");
}

#[test]
fn kind_serializes_snake_case() {
    assert_eq!(serde_json::to_string(&SettingsKind::Uri).unwrap(), r#""uri""#);
    assert_eq!(serde_json::to_string(&SettingsKind::String).unwrap(), r#""string""#);
}
