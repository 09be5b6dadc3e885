//! Per-key validation messages.

use serde::{Deserialize, Serialize};

/// One validation message attached to a settings key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEntry {
    pub key: String,
    pub message: String,
}

impl ErrorEntry {
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Ordered validation messages, at most one per key.
///
/// The first message recorded for a key stays until that key is cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSet {
    entries: Vec<ErrorEntry>,
}

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` for `key` unless the key already has one.
    /// Returns whether an entry was inserted.
    pub fn add(&mut self, key: &str, message: &str) -> bool {
        if self.contains_key(key) {
            return false;
        }
        self.entries.push(ErrorEntry::new(key, message));
        true
    }

    /// Removes every entry for `key`, returning them in insertion order.
    pub fn remove_all(&mut self, key: &str) -> Vec<ErrorEntry> {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|entry| entry.key == key);
        self.entries = kept;
        removed
    }

    pub fn get(&self, key: &str) -> Option<&ErrorEntry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ErrorEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ErrorSet {
    type Item = &'a ErrorEntry;
    type IntoIter = std::slice::Iter<'a, ErrorEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
