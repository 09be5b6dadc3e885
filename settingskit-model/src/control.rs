use serde::{Deserialize, Serialize};

use crate::SettingsKind;

/// Input assistance hint for a text control (soft keyboard layout, autocomplete).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputScope {
    #[default]
    Default,
    Url,
    Number,
}

/// The widget a renderer builds for one setting.
///
/// Both variants bind two-way to the setting's accessor; the masked input only
/// changes presentation, never storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "control", rename_all = "snake_case")]
pub enum ControlKind {
    TextInput { scope: InputScope },
    MaskedInput,
}

impl ControlKind {
    pub fn for_kind(kind: SettingsKind) -> Self {
        match kind {
            SettingsKind::String => ControlKind::TextInput {
                scope: InputScope::Default,
            },
            SettingsKind::Uri => ControlKind::TextInput {
                scope: InputScope::Url,
            },
            SettingsKind::Integer => ControlKind::TextInput {
                scope: InputScope::Number,
            },
            SettingsKind::Password => ControlKind::MaskedInput,
        }
    }

    pub fn is_masked(self) -> bool {
        matches!(self, ControlKind::MaskedInput)
    }

    pub fn scope(self) -> Option<InputScope> {
        match self {
            ControlKind::TextInput { scope } => Some(scope),
            ControlKind::MaskedInput => None,
        }
    }
}
