use serde::{Deserialize, Serialize};
use std::fmt;

/// A value held by a [`SettingsStore`](crate::SettingsStore).
///
/// Serialized untagged so a file store reads as a flat JSON object. Variant
/// order matters for deserialization: `3` is an `Integer`, `3.0` a `Float`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl SettingValue {
    /// Short type name, used in logs.
    pub fn type_name(&self) -> &'static str {
        match self {
            SettingValue::Bool(_) => "bool",
            SettingValue::Integer(_) => "integer",
            SettingValue::Float(_) => "float",
            SettingValue::String(_) => "string",
        }
    }

    /// False only for a NaN or infinite float, which JSON cannot carry.
    pub fn is_finite(&self) -> bool {
        match self {
            SettingValue::Float(v) => v.is_finite(),
            _ => true,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SettingValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Bool(v) => write!(f, "{v}"),
            SettingValue::Integer(v) => write!(f, "{v}"),
            SettingValue::Float(v) => write!(f, "{v}"),
            SettingValue::String(v) => f.write_str(v),
        }
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::String(value.to_string())
    }
}

/// Conversion between a Rust type and a stored [`SettingValue`].
///
/// `from_setting` returns `None` when the stored variant is not this type's
/// variant or the number does not fit; callers treat that as absence.
pub trait StoreValue: Sized {
    fn from_setting(value: &SettingValue) -> Option<Self>;
    fn into_setting(self) -> SettingValue;
}

impl StoreValue for String {
    fn from_setting(value: &SettingValue) -> Option<Self> {
        value.as_str().map(str::to_string)
    }

    fn into_setting(self) -> SettingValue {
        SettingValue::String(self)
    }
}

impl StoreValue for bool {
    fn from_setting(value: &SettingValue) -> Option<Self> {
        match value {
            SettingValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    fn into_setting(self) -> SettingValue {
        SettingValue::Bool(self)
    }
}

impl StoreValue for i64 {
    fn from_setting(value: &SettingValue) -> Option<Self> {
        match value {
            SettingValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    fn into_setting(self) -> SettingValue {
        SettingValue::Integer(self)
    }
}

impl StoreValue for i32 {
    fn from_setting(value: &SettingValue) -> Option<Self> {
        match value {
            SettingValue::Integer(v) => i32::try_from(*v).ok(),
            _ => None,
        }
    }

    fn into_setting(self) -> SettingValue {
        SettingValue::Integer(i64::from(self))
    }
}

impl StoreValue for u32 {
    fn from_setting(value: &SettingValue) -> Option<Self> {
        match value {
            SettingValue::Integer(v) => u32::try_from(*v).ok(),
            _ => None,
        }
    }

    fn into_setting(self) -> SettingValue {
        SettingValue::Integer(i64::from(self))
    }
}

impl StoreValue for f64 {
    fn from_setting(value: &SettingValue) -> Option<Self> {
        match value {
            SettingValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    fn into_setting(self) -> SettingValue {
        SettingValue::Float(self)
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::String(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        SettingValue::Integer(value)
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

impl From<f64> for SettingValue {
    fn from(value: f64) -> Self {
        SettingValue::Float(value)
    }
}
