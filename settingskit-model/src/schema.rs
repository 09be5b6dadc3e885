use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::ControlKind;

/// The value kind of a declared setting.
///
/// The kind decides both how the engine writes the value (only `Uri` is
/// validated) and how a renderer presents it (see [`SettingsKind::control`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsKind {
    /// Free text.
    String,
    /// A `scheme://host[/path]` value, checked before it is stored.
    Uri,
    /// Free text shown masked. Stored like any other string.
    Password,
    /// A whole number.
    Integer,
}

impl SettingsKind {
    /// Whether writes of this kind go through validation.
    pub fn is_validated(self) -> bool {
        matches!(self, SettingsKind::Uri)
    }

    /// The widget a renderer should use for this kind.
    pub fn control(self) -> ControlKind {
        ControlKind::for_kind(self)
    }
}

/// One declared setting.
///
/// `key` is both the storage key and the name of the accessor that reads it.
/// All fields are `'static` so a settings type can hold its schema in a
/// `const` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SettingsDefinition {
    pub label: &'static str,
    pub key: &'static str,
    pub kind: SettingsKind,
}

impl SettingsDefinition {
    pub const fn new(label: &'static str, key: &'static str, kind: SettingsKind) -> Self {
        Self { label, key, kind }
    }

    /// Shorthand for a free-text setting.
    pub const fn string(label: &'static str, key: &'static str) -> Self {
        Self::new(label, key, SettingsKind::String)
    }

    /// Shorthand for a validated URI setting.
    pub const fn uri(label: &'static str, key: &'static str) -> Self {
        Self::new(label, key, SettingsKind::Uri)
    }

    /// Shorthand for a masked password setting.
    pub const fn password(label: &'static str, key: &'static str) -> Self {
        Self::new(label, key, SettingsKind::Password)
    }

    /// Shorthand for an integer setting.
    pub const fn integer(label: &'static str, key: &'static str) -> Self {
        Self::new(label, key, SettingsKind::Integer)
    }
}

/// Owned form of a [`SettingsDefinition`] for feeding a renderer over JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaRecord {
    pub label: String,
    pub property_name: String,
    pub kind: SettingsKind,
}

impl From<&SettingsDefinition> for SchemaRecord {
    fn from(def: &SettingsDefinition) -> Self {
        Self {
            label: def.label.to_string(),
            property_name: def.key.to_string(),
            kind: def.kind,
        }
    }
}

/// A schema table failed its construction-time checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("duplicate settings key: {0}")]
    DuplicateKey(String),

    #[error("settings key is empty (label: {0})")]
    EmptyKey(String),
}

/// The ordered table of settings declared by one settings type.
///
/// Iteration always restarts from the first declaration; nothing is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    definitions: &'static [SettingsDefinition],
}

impl Schema {
    pub const fn new(definitions: &'static [SettingsDefinition]) -> Self {
        Self { definitions }
    }

    /// Definitions in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'static, SettingsDefinition> {
        self.definitions.iter()
    }

    /// Storage keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + use<> {
        self.definitions.iter().map(|def| def.key)
    }

    pub fn find(&self, key: &str) -> Option<&'static SettingsDefinition> {
        self.definitions.iter().find(|def| def.key == key)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Checks that every key is non-empty and unique within the table.
    pub fn check(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::with_capacity(self.definitions.len());
        for def in self.definitions {
            if def.key.is_empty() {
                return Err(SchemaError::EmptyKey(def.label.to_string()));
            }
            if !seen.insert(def.key) {
                return Err(SchemaError::DuplicateKey(def.key.to_string()));
            }
        }
        Ok(())
    }

    /// Owned records in declaration order.
    pub fn records(&self) -> Vec<SchemaRecord> {
        self.definitions.iter().map(SchemaRecord::from).collect()
    }
}

impl IntoIterator for Schema {
    type Item = &'static SettingsDefinition;
    type IntoIter = std::slice::Iter<'static, SettingsDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.definitions.iter()
    }
}
