//! Declarative typed settings.
//!
//! A settings type declares its settings once, as a static schema table of
//! (label, key, kind) rows, and gets typed accessors that route through a
//! [`SettingsEngine`]:
//!
//! - reads fall back to defaults instead of failing
//! - writes of `Uri` settings are validated; a rejected value keeps the old one
//!   and records a message in the engine's [`ErrorSet`]
//! - every stored write publishes a [`SettingsEvent::Changed`]
//!
//! A renderer enumerates the schema ([`SettingsEngine::enumerate_schema`] or
//! [`form_fields`]), binds to properties by name through [`Bindable`], shows
//! [`SettingsEngine::errors`] and listens on [`SettingsEngine::subscribe`].
//!
//! Storage is pluggable through [`SettingsStore`]; see [`MemoryStore`] and
//! [`JsonFileStore`].

mod current;
mod engine;
mod error;
mod event;
mod form;
mod macros;
mod settings;
mod uri;
mod validation;

pub use current::current_settings;
pub use engine::SettingsEngine;
pub use error::{SettingsError, SettingsResult};
pub use event::SettingsEvent;
pub use form::{FormField, form_fields};
pub use settings::{Bindable, Settings};
pub use uri::{DEFAULT_URI_ERROR, URI_PATTERN, UriPattern, UriShape};
pub use validation::{ErrorEntry, ErrorSet};

pub use settingskit_model::{
    ControlKind, InputScope, Schema, SchemaError, SchemaRecord, SettingsDefinition, SettingsKind,
};
pub use settingskit_storage::{
    JsonFileStore, MemoryStore, SettingValue, SettingsStore, StorageError, StorageResult,
    StoreValue,
};
