//! Schema metadata for settingskit.
//!
//! Defines the declarative side of a settings type:
//! - [`SettingsKind`]: the value-kind tag (string, URI, password, integer)
//! - [`SettingsDefinition`]: one declared setting (label, storage key, kind)
//! - [`Schema`]: the ordered, statically declared table of definitions
//! - [`ControlKind`] / [`InputScope`]: how a renderer should present a kind
//!
//! Nothing here touches storage. The engine crate consumes these types and a
//! rendering layer reads them (directly or as JSON via [`SchemaRecord`]).

mod control;
mod schema;

pub use control::{ControlKind, InputScope};
pub use schema::{Schema, SchemaError, SchemaRecord, SettingsDefinition, SettingsKind};
