//! Read-only feed for a form renderer.

use serde::Serialize;
use settingskit_model::{ControlKind, SettingsKind};

use crate::{Bindable, Settings};

/// Everything a renderer needs to draw and bind one setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub label: &'static str,
    pub key: &'static str,
    pub kind: SettingsKind,
    pub control: ControlKind,
    /// Current value as text.
    pub text: String,
    /// Current validation message.
    pub error: Option<String>,
}

/// One field per declared setting, in declaration order.
pub fn form_fields<S: Settings + Bindable>(settings: &S) -> Vec<FormField> {
    let engine = settings.engine();
    engine
        .enumerate_schema()
        .map(|def| FormField {
            label: def.label,
            key: def.key,
            kind: def.kind,
            control: def.kind.control(),
            text: settings.read_text(def.key).unwrap_or_default(),
            error: engine.error_for(def.key),
        })
        .collect()
}
