//! The process-wide current-settings handle.
//!
//! Passing an `Arc<SettingsEngine>` (or a typed settings value) to consumers is
//! preferred; this handle exists for consumers that cannot be handed one, such
//! as a renderer constructed by a UI framework. It is written when a settings
//! type initializes and read everywhere else. A later publish replaces the
//! earlier one; the handle is never cleared.

use std::sync::{Arc, PoisonError, RwLock};
use tracing::info;

use crate::SettingsEngine;

static CURRENT: RwLock<Option<Arc<SettingsEngine>>> = RwLock::new(None);

impl SettingsEngine {
    /// Makes this engine the current settings, replacing any previous one.
    pub fn publish_current(self: &Arc<Self>) {
        let mut current = CURRENT.write().unwrap_or_else(PoisonError::into_inner);
        let replaced = current.replace(Arc::clone(self)).is_some();
        info!(settings = self.schema().len(), replaced, "published current settings");
    }

    /// Whether this engine is the one currently published.
    pub fn is_current(self: &Arc<Self>) -> bool {
        current_settings().is_some_and(|current| Arc::ptr_eq(&current, self))
    }
}

/// The most recently published settings engine, if any.
pub fn current_settings() -> Option<Arc<SettingsEngine>> {
    CURRENT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}
