use settingskit_storage::{MemoryStore, SettingValue, SettingsStore, StoreValue};

fn as_dyn(store: &MemoryStore) -> &dyn SettingsStore {
    store
}

// ── MemoryStore basics ───────────────────────────────────────────

#[test]
fn new_store_is_empty() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    assert!(!store.has("anything"));
    assert!(store.get("anything").is_none());
}

#[test]
fn set_then_get() {
    let mut store = MemoryStore::new();
    store.set("name", SettingValue::from("alice"));
    assert_eq!(store.get("name"), Some(&SettingValue::String("alice".into())));
    assert!(store.has("name"));
    assert_eq!(store.len(), 1);
}

#[test]
fn empty_string_is_an_entry() {
    let mut store = MemoryStore::new();
    store.set("blank", SettingValue::from(""));
    assert!(store.has("blank"));
    assert_eq!(as_dyn(&store).get_string("blank"), Some(String::new()));
}

#[test]
fn set_replaces_value_of_other_type() {
    let mut store = MemoryStore::new();
    store.set("k", SettingValue::Integer(5));
    store.set("k", SettingValue::from("five"));
    assert_eq!(store.get("k"), Some(&SettingValue::String("five".into())));
    assert_eq!(store.len(), 1);
}

#[test]
fn remove_returns_previous() {
    let mut store = MemoryStore::new();
    store.set("k", SettingValue::Bool(true));
    assert_eq!(store.remove("k"), Some(SettingValue::Bool(true)));
    assert_eq!(store.remove("k"), None);
    assert!(!store.has("k"));
}

#[test]
fn keys_are_sorted() {
    let store: MemoryStore = [("b", 1i64), ("a", 2i64)].into_iter().collect();
    assert_eq!(store.keys(), vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn memory_flush_is_noop() {
    let mut store = MemoryStore::new();
    store.set("k", SettingValue::Integer(1));
    assert!(store.flush().is_ok());
    assert!(store.has("k"));
}

// ── Typed reads through dyn SettingsStore ────────────────────────

#[test]
fn get_typed_matching_type() {
    let store: MemoryStore = [("port", 8080i64)].into_iter().collect();
    assert_eq!(as_dyn(&store).get_typed::<i64>("port"), Some(8080));
    assert_eq!(as_dyn(&store).get_typed::<i32>("port"), Some(8080));
    assert_eq!(as_dyn(&store).get_typed::<u32>("port"), Some(8080));
}

#[test]
fn integer_is_not_readable_as_string() {
    let store: MemoryStore = [("port", 8080i64)].into_iter().collect();
    assert_eq!(as_dyn(&store).get_string("port"), None);
}

#[test]
fn string_is_not_readable_as_integer() {
    let store: MemoryStore = [("port", "8080")].into_iter().collect();
    assert_eq!(as_dyn(&store).get_typed::<i64>("port"), None);
    assert_eq!(as_dyn(&store).get_string("port"), Some("8080".into()));
}

#[test]
fn float_and_integer_are_distinct() {
    let mut store = MemoryStore::new();
    store.set("ratio", SettingValue::Float(0.5));
    store.set("count", SettingValue::Integer(2));
    let s = as_dyn(&store);
    assert_eq!(s.get_typed::<f64>("ratio"), Some(0.5));
    assert_eq!(s.get_typed::<i64>("ratio"), None);
    assert_eq!(s.get_typed::<f64>("count"), None);
}

#[test]
fn out_of_range_narrowing_is_absence() {
    let store: MemoryStore = [("big", i64::MAX), ("neg", -1i64)].into_iter().collect();
    let s = as_dyn(&store);
    assert_eq!(s.get_typed::<i32>("big"), None);
    assert_eq!(s.get_typed::<u32>("neg"), None);
    assert_eq!(s.get_typed::<i64>("neg"), Some(-1));
}

#[test]
fn missing_key_is_absence() {
    let store = MemoryStore::new();
    assert_eq!(as_dyn(&store).get_typed::<bool>("flag"), None);
    assert_eq!(as_dyn(&store).get_string("flag"), None);
}

// ── SettingValue ─────────────────────────────────────────────────

#[test]
fn store_value_conversions() {
    assert_eq!(7i32.into_setting(), SettingValue::Integer(7));
    assert_eq!(7u32.into_setting(), SettingValue::Integer(7));
    assert_eq!(true.into_setting(), SettingValue::Bool(true));
    assert_eq!(String::from("x").into_setting(), SettingValue::String("x".into()));
    assert_eq!(bool::from_setting(&SettingValue::Integer(1)), None);
}

#[test]
fn type_names() {
    assert_eq!(SettingValue::Bool(false).type_name(), "bool");
    assert_eq!(SettingValue::Integer(0).type_name(), "integer");
    assert_eq!(SettingValue::Float(0.0).type_name(), "float");
    assert_eq!(SettingValue::from("").type_name(), "string");
}

#[test]
fn display_renders_plain_value() {
    assert_eq!(SettingValue::Integer(42).to_string(), "42");
    assert_eq!(SettingValue::from("https://example.com").to_string(), "https://example.com");
    assert_eq!(SettingValue::Bool(true).to_string(), "true");
}

#[test]
fn untagged_json_keeps_type_identity() {
    let values: Vec<SettingValue> =
        serde_json::from_str(r#"[true, 3, 3.5, "3", ""]"#).unwrap();
    assert_eq!(
        values,
        vec![
            SettingValue::Bool(true),
            SettingValue::Integer(3),
            SettingValue::Float(3.5),
            SettingValue::String("3".into()),
            SettingValue::String(String::new()),
        ]
    );
}
