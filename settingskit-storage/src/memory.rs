use std::collections::BTreeMap;

use crate::{SettingValue, SettingsStore};

/// Process-local store. Nothing survives the process; `flush` is a no-op.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    values: BTreeMap<String, SettingValue>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<SettingValue>> FromIterator<(K, V)> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<&SettingValue> {
        self.values.get(key)
    }

    fn set(&mut self, key: &str, value: SettingValue) {
        self.values.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) -> Option<SettingValue> {
        self.values.remove(key)
    }

    fn keys(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }
}
