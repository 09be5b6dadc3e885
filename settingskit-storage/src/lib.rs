//! Key-value store capability for settingskit.
//!
//! The engine never touches persistence directly; it goes through
//! [`SettingsStore`], a string-keyed map of typed [`SettingValue`]s.
//!
//! # Type identity
//!
//! Values keep the type they were written with. Reading an integer as a
//! string (or the reverse) yields `None`, exactly like a missing key, so
//! callers can treat both cases with one default.
//!
//! # Implementations
//!
//! - [`MemoryStore`]: process-local, nothing persisted
//! - [`JsonFileStore`]: a flat JSON object on disk, written on [`SettingsStore::flush`]

mod error;
mod json_file;
mod memory;
mod store;
mod value;

pub use error::{StorageError, StorageResult};
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use store::SettingsStore;
pub use value::{SettingValue, StoreValue};
