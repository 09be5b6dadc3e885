//! Settings persisted as a flat JSON object.
//!
//! The whole file is loaded on open and kept in memory. Writes only mark the
//! store dirty; [`SettingsStore::flush`] replaces the file atomically by
//! writing a sibling temp file and renaming it over the existing file.
//!
//! NaN and infinite floats have no JSON form; writing one removes the key.
//! On load, entries that are not a bool, number or string are skipped so one
//! bad entry never costs the rest of the file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::{SettingValue, SettingsStore, StorageError, StorageResult};

const FILE_NAME: &str = "settings.json";

/// File-backed store holding one JSON object of `key -> value`.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, SettingValue>,
    dirty: bool,
}

impl JsonFileStore {
    /// `<config dir>/<app_name>/settings.json`, or `./<app_name>/settings.json`
    /// when the platform has no config directory.
    pub fn default_path(app_name: &str) -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(app_name)
            .join(FILE_NAME)
    }

    /// Opens the store at `path`. A missing or blank file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();
        let values = if path.exists() {
            Self::load(&path)?
        } else {
            BTreeMap::new()
        };
        info!(path = %path.display(), entries = values.len(), "opened settings file");
        Ok(Self {
            path,
            values,
            dirty: false,
        })
    }

    /// Opens the store at [`default_path`](Self::default_path).
    pub fn open_default(app_name: &str) -> StorageResult<Self> {
        Self::open(Self::default_path(app_name))
    }

    fn load(path: &Path) -> StorageResult<BTreeMap<String, SettingValue>> {
        let contents = fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        let root: serde_json::Value = serde_json::from_str(&contents)?;
        let serde_json::Value::Object(entries) = root else {
            return Err(StorageError::InvalidData {
                path: path.to_path_buf(),
                reason: "top-level value is not an object".into(),
            });
        };
        let mut values = BTreeMap::new();
        for (key, raw) in entries {
            match serde_json::from_value::<SettingValue>(raw) {
                Ok(value) => {
                    values.insert(key, value);
                }
                Err(e) => {
                    warn!(path = %path.display(), key = %key, error = %e, "skipping unreadable settings entry");
                }
            }
        }
        Ok(values)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether there are writes not yet flushed to disk.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn write_file(&self) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.values)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl SettingsStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<&SettingValue> {
        self.values.get(key)
    }

    fn set(&mut self, key: &str, value: SettingValue) {
        if !value.is_finite() {
            warn!(key = %key, value = %value, "non-finite float cannot be persisted, removing key");
            self.remove(key);
            return;
        }
        self.values.insert(key.to_string(), value);
        self.dirty = true;
    }

    fn remove(&mut self, key: &str) -> Option<SettingValue> {
        let removed = self.values.remove(key);
        if removed.is_some() {
            self.dirty = true;
        }
        removed
    }

    fn keys(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }

    fn flush(&mut self) -> StorageResult<()> {
        if !self.dirty {
            debug!(path = %self.path.display(), "settings file clean, nothing to flush");
            return Ok(());
        }
        if let Err(e) = self.write_file() {
            warn!(path = %self.path.display(), error = %e, "failed to write settings file");
            return Err(e);
        }
        self.dirty = false;
        info!(path = %self.path.display(), entries = self.values.len(), "flushed settings file");
        Ok(())
    }
}
