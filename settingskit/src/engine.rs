//! The settings engine.
//!
//! A [`SettingsEngine`] owns one store, one [`ErrorSet`] and one event channel
//! for a settings type. Store and error set sit behind a single mutex so a
//! validate-then-store sequence is atomic; events are published after the lock
//! is released.
//!
//! # Reads
//!
//! Reads never fail. A missing key and a value stored with another type both
//! fall back to the default (`T::default()`, an explicit default, or `""`).
//!
//! # Writes
//!
//! `set_value`/`set_string` store unconditionally and publish one
//! [`SettingsEvent::Changed`]. [`SettingsEngine::check_and_set_uri`] clears the
//! key's error, then either stores and notifies or records the error and leaves
//! the stored value untouched.

use std::any::TypeId;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use settingskit_model::{Schema, SettingsDefinition};
use settingskit_storage::{SettingValue, SettingsStore, StoreValue};
use tokio::sync::mpsc;
use tracing::debug;

use crate::event::EventBus;
use crate::{ErrorEntry, ErrorSet, SettingsEvent, SettingsResult, UriPattern};

struct EngineState {
    store: Box<dyn SettingsStore>,
    errors: ErrorSet,
}

/// Typed access, URI validation, error tracking and change notification for
/// one settings schema.
pub struct SettingsEngine {
    schema: Schema,
    state: Mutex<EngineState>,
    uri_pattern: UriPattern,
    events: EventBus,
    owner: Option<TypeId>,
}

impl SettingsEngine {
    /// Creates an engine over `store` after checking the schema's keys.
    pub fn new(schema: Schema, store: impl SettingsStore + 'static) -> SettingsResult<Self> {
        schema.check()?;
        debug!(settings = schema.len(), "settings engine created");
        Ok(Self {
            schema,
            state: Mutex::new(EngineState {
                store: Box::new(store),
                errors: ErrorSet::new(),
            }),
            uri_pattern: UriPattern::default(),
            events: EventBus::new(),
            owner: None,
        })
    }

    /// Replaces the pattern used by [`check_and_set_uri`](Self::check_and_set_uri).
    pub fn with_uri_pattern(mut self, pattern: UriPattern) -> Self {
        self.uri_pattern = pattern;
        self
    }

    /// Tags the engine with the settings type that wraps it.
    pub(crate) fn owned_by<S: 'static>(mut self) -> Self {
        self.owner = Some(TypeId::of::<S>());
        self
    }

    pub(crate) fn is_owned_by<S: 'static>(&self) -> bool {
        self.owner == Some(TypeId::of::<S>())
    }

    fn state(&self) -> MutexGuard<'_, EngineState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish_all(&self, events: Vec<SettingsEvent>) {
        for event in events {
            self.events.publish(event);
        }
    }

    // ── Schema ───────────────────────────────────────────────────

    pub fn schema(&self) -> Schema {
        self.schema
    }

    /// Declared settings in declaration order. Each call starts over.
    pub fn enumerate_schema(&self) -> std::slice::Iter<'static, SettingsDefinition> {
        self.schema.iter()
    }

    pub fn uri_pattern(&self) -> &UriPattern {
        &self.uri_pattern
    }

    // ── Typed reads ──────────────────────────────────────────────

    /// Typed read falling back to `T::default()`.
    pub fn get_value<T: StoreValue + Default>(&self, key: &str) -> T {
        self.get_value_or(key, T::default())
    }

    /// Typed read falling back to `default`.
    pub fn get_value_or<T: StoreValue>(&self, key: &str, default: T) -> T {
        let state = self.state();
        match state.store.get(key) {
            Some(value) => T::from_setting(value).unwrap_or_else(|| {
                debug!(key = %key, stored = value.type_name(), "stored value has another type, using default");
                default
            }),
            None => default,
        }
    }

    /// String read; `""` when absent or not a string.
    pub fn get_string(&self, key: &str) -> String {
        self.get_string_or(key, "")
    }

    /// String read falling back to `default`.
    pub fn get_string_or(&self, key: &str, default: &str) -> String {
        let state = self.state();
        match state.store.get(key) {
            Some(value) => value.as_str().map(str::to_string).unwrap_or_else(|| {
                debug!(key = %key, stored = value.type_name(), "stored value has another type, using default");
                default.to_string()
            }),
            None => default.to_string(),
        }
    }

    // ── Writes ───────────────────────────────────────────────────

    /// Stores `value` at `key` and publishes a change. No validation.
    pub fn set_value<T: StoreValue>(&self, key: &str, value: T) {
        self.write(key, value.into_setting());
    }

    /// Stores a string at `key` and publishes a change. No validation.
    pub fn set_string(&self, key: &str, value: impl Into<String>) {
        self.write(key, SettingValue::String(value.into()));
    }

    fn write(&self, key: &str, value: SettingValue) {
        debug!(key = %key, kind = value.type_name(), "setting written");
        self.state().store.set(key, value);
        self.events.publish(SettingsEvent::changed(key));
    }

    /// Stores `raw` at `key` if it is URI-shaped, otherwise records `message`
    /// as the key's error and keeps the previous value. Any earlier error for
    /// the key is cleared first. Returns whether the value was stored.
    pub fn check_and_set_uri(&self, key: &str, raw: &str, message: &str) -> bool {
        let accepted = self.uri_pattern.is_match(raw);
        let mut events = Vec::new();
        {
            let mut state = self.state();
            events.extend(
                state
                    .errors
                    .remove_all(key)
                    .into_iter()
                    .map(SettingsEvent::error_removed),
            );
            if accepted {
                state.store.set(key, SettingValue::String(raw.to_string()));
                events.push(SettingsEvent::changed(key));
            } else if state.errors.add(key, message) {
                events.push(SettingsEvent::ErrorAdded {
                    key: key.to_string(),
                    message: message.to_string(),
                });
            }
        }
        if accepted {
            debug!(key = %key, "URI setting written");
        } else {
            debug!(key = %key, "rejected value that is not URI-shaped");
        }
        self.publish_all(events);
        accepted
    }

    /// Persists the store.
    pub fn save(&self) -> SettingsResult<()> {
        self.state().store.flush()?;
        Ok(())
    }

    // ── Errors ───────────────────────────────────────────────────

    /// Records `message` for `key` unless the key already has an error.
    /// Returns whether it was recorded.
    pub fn add_error(&self, key: &str, message: impl Into<String>) -> bool {
        let message = message.into();
        let entry = {
            let mut state = self.state();
            if !state.errors.add(key, &message) {
                return false;
            }
            ErrorEntry::new(key, message)
        };
        debug!(key = %key, "validation error recorded");
        self.events.publish(SettingsEvent::error_added(&entry));
        true
    }

    /// Clears every error for `key`. Returns how many were removed.
    pub fn remove_errors(&self, key: &str) -> usize {
        let removed = self.state().errors.remove_all(key);
        let count = removed.len();
        if count > 0 {
            debug!(key = %key, count, "validation errors cleared");
        }
        self.publish_all(removed.into_iter().map(SettingsEvent::error_removed).collect());
        count
    }

    /// Snapshot of current errors in insertion order.
    pub fn errors(&self) -> Vec<ErrorEntry> {
        self.state().errors.iter().cloned().collect()
    }

    /// The current message for `key`, if any.
    pub fn error_for(&self, key: &str) -> Option<String> {
        self.state().errors.get(key).map(|e| e.message.clone())
    }

    pub fn has_errors(&self) -> bool {
        !self.state().errors.is_empty()
    }

    // ── Notifications ────────────────────────────────────────────

    /// Subscribes to events published from now on. The queue is unbounded;
    /// dropping the receiver unsubscribes.
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<SettingsEvent> {
        self.events.subscribe()
    }
}

impl fmt::Debug for SettingsEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsEngine")
            .field("schema", &self.schema)
            .field("uri_pattern", &self.uri_pattern.as_str())
            .finish_non_exhaustive()
    }
}
