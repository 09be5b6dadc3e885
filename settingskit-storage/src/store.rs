use crate::{SettingValue, StorageResult, StoreValue};

/// A string-keyed store of typed setting values.
///
/// Implementations must keep the variant a value was written with; the
/// engine relies on that to treat type mismatches as absence.
pub trait SettingsStore: Send {
    /// Returns the stored value, or `None` when the key has no entry.
    fn get(&self, key: &str) -> Option<&SettingValue>;

    /// Whether the key has an entry. An empty string is an entry.
    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Stores `value` at `key`, replacing any previous entry of any type.
    /// A store that cannot represent the value removes the key instead.
    fn set(&mut self, key: &str, value: SettingValue);

    /// Removes the entry for `key`, returning it if present.
    fn remove(&mut self, key: &str) -> Option<SettingValue>;

    /// All keys with an entry.
    fn keys(&self) -> Vec<String>;

    /// Persists pending writes. Stores without a backing medium do nothing.
    fn flush(&mut self) -> StorageResult<()> {
        Ok(())
    }
}

impl dyn SettingsStore + '_ {
    /// Typed read. A missing key and a value of another type both yield `None`.
    pub fn get_typed<T: StoreValue>(&self, key: &str) -> Option<T> {
        self.get(key).and_then(T::from_setting)
    }

    /// String read. Non-string values yield `None`.
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.get_typed::<String>(key)
    }
}
